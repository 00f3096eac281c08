//! Filtering and sorting logic

use super::entry::{CatalogEntry, Category};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Numeric field the visible entries are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Downloads,
    Rating,
    Price,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Downloads, SortKey::Rating, SortKey::Price];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Downloads => "Downloads",
            SortKey::Rating => "Rating",
            SortKey::Price => "Price",
        }
    }

    fn compare(self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            SortKey::Downloads => a.downloads.cmp(&b.downloads),
            SortKey::Rating => a.rating.total_cmp(&b.rating),
            SortKey::Price => a.price.total_cmp(&b.price),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Downloads,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    /// Comparator for the stable sort. Descending negates the ascending
    /// result, so equal keys keep their incoming order in both directions.
    pub fn compare(&self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        let cmp = self.key.compare(a, b);
        if self.direction == SortDirection::Descending {
            cmp.reverse()
        } else {
            cmp
        }
    }
}

/// Upper bound of the price slider
pub const PRICE_CEILING: f64 = 50.0;
/// Upper bound of the rating slider
pub const RATING_CEILING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: Option<Category>,
    /// Inclusive `(min, max)`
    pub price_range: (f64, f64),
    pub min_downloads: u64,
    pub min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: None,
            price_range: (0.0, PRICE_CEILING),
            min_downloads: 0,
            min_rating: 0.0,
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if !self.search_term.is_empty()
            && !entry
                .title
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
        {
            return false;
        }

        if let Some(category) = self.category {
            if entry.category != category {
                return false;
            }
        }

        let (min_price, max_price) = self.price_range;
        if entry.price < min_price || entry.price > max_price {
            return false;
        }

        entry.downloads >= self.min_downloads && entry.rating >= self.min_rating
    }
}

/// Indices into `entries` of every entry passing `criteria`, ordered by `sort`.
pub fn visible_indices(
    entries: &[CatalogEntry],
    criteria: &FilterCriteria,
    sort: &SortSpec,
) -> Vec<usize> {
    let mut indices: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| criteria.matches(e))
        .map(|(i, _)| i)
        .collect();

    // sort_by is stable
    indices.sort_by(|&a, &b| sort.compare(&entries[a], &entries[b]));
    indices
}

pub fn compute_visible_entries<'a>(
    entries: &'a [CatalogEntry],
    criteria: &FilterCriteria,
    sort: &SortSpec,
) -> Vec<&'a CatalogEntry> {
    visible_indices(entries, criteria, sort)
        .into_iter()
        .map(|i| &entries[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::{entry, Catalog};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<CatalogEntry> {
        Catalog::builtin().unwrap().entries().to_vec()
    }

    fn titles(entries: &[&CatalogEntry]) -> Vec<String> {
        entries.iter().map(|e| e.title.clone()).collect()
    }

    fn visible_titles(criteria: &FilterCriteria) -> Vec<String> {
        let entries = sample();
        titles(&compute_visible_entries(
            &entries,
            criteria,
            &SortSpec::default(),
        ))
    }

    #[test]
    fn defaults_order_by_downloads_descending() {
        assert_eq!(
            visible_titles(&FilterCriteria::default()),
            vec![
                "Marketing Strategy Masterclass",
                "Digital Marketing Trends",
                "Business Plan Professional",
                "Growth Hacking Techniques",
                "Educational Leadership Insights",
            ]
        );
    }

    #[test]
    fn category_restricts_to_exact_match() {
        let criteria = FilterCriteria {
            category: Some(Category::Marketing),
            ..Default::default()
        };
        assert_eq!(
            visible_titles(&criteria),
            vec!["Marketing Strategy Masterclass", "Digital Marketing Trends"]
        );
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let criteria = FilterCriteria {
            search_term: "growth".to_string(),
            ..Default::default()
        };
        assert_eq!(visible_titles(&criteria), vec!["Growth Hacking Techniques"]);

        let criteria = FilterCriteria {
            search_term: "MARKETING".to_string(),
            ..Default::default()
        };
        assert_eq!(visible_titles(&criteria).len(), 2);
    }

    #[test]
    fn min_rating_is_inclusive() {
        let criteria = FilterCriteria {
            min_rating: 4.7,
            ..Default::default()
        };
        assert_eq!(
            visible_titles(&criteria),
            vec!["Marketing Strategy Masterclass", "Digital Marketing Trends"]
        );
    }

    #[test]
    fn price_range_is_inclusive() {
        let criteria = FilterCriteria {
            price_range: (0.0, 18.0),
            ..Default::default()
        };
        assert_eq!(visible_titles(&criteria), vec!["Growth Hacking Techniques"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let criteria = FilterCriteria {
            search_term: "no such deck".to_string(),
            ..Default::default()
        };
        assert!(visible_titles(&criteria).is_empty());
    }

    #[test]
    fn result_is_subset_without_duplicates() {
        let entries = sample();
        let criteria = FilterCriteria {
            min_downloads: 800,
            ..Default::default()
        };
        let indices = visible_indices(&entries, &criteria, &SortSpec::default());
        let mut deduped = indices.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), indices.len());
        assert!(indices.iter().all(|&i| i < entries.len()));
        assert_eq!(indices.len(), 3);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let entries = sample();
        let criteria = FilterCriteria {
            search_term: "i".to_string(),
            ..Default::default()
        };
        let sort = SortSpec {
            key: SortKey::Rating,
            direction: SortDirection::Ascending,
        };
        assert_eq!(
            visible_indices(&entries, &criteria, &sort),
            visible_indices(&entries, &criteria, &sort)
        );
    }

    #[test]
    fn tightening_bounds_never_grows_result() {
        let entries = sample();
        let sort = SortSpec::default();
        let count = |c: &FilterCriteria| visible_indices(&entries, c, &sort).len();

        let mut previous = usize::MAX;
        for min_downloads in [0, 700, 900, 1200, 5000] {
            let n = count(&FilterCriteria {
                min_downloads,
                ..Default::default()
            });
            assert!(n <= previous);
            previous = n;
        }

        let mut previous = usize::MAX;
        for min_rating in [0.0, 4.45, 4.6, 4.75, 5.0] {
            let n = count(&FilterCriteria {
                min_rating,
                ..Default::default()
            });
            assert!(n <= previous);
            previous = n;
        }

        let mut previous = usize::MAX;
        for max_price in [50.0, 24.0, 20.0, 18.5, 10.0] {
            let n = count(&FilterCriteria {
                price_range: (0.0, max_price),
                ..Default::default()
            });
            assert!(n <= previous);
            previous = n;
        }
    }

    #[test]
    fn every_key_sorts_in_both_directions() {
        let entries = sample();
        let criteria = FilterCriteria::default();
        for key in SortKey::ALL {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let sort = SortSpec { key, direction };
                let visible = compute_visible_entries(&entries, &criteria, &sort);
                for pair in visible.windows(2) {
                    assert_ne!(
                        sort.compare(pair[0], pair[1]),
                        Ordering::Greater,
                        "{:?} {:?} out of order: {} before {}",
                        key,
                        direction,
                        pair[0].title,
                        pair[1].title
                    );
                }
            }
        }
    }

    #[test]
    fn ties_keep_catalog_order_in_both_directions() {
        let entries = vec![
            entry(1, "First", 10.0, Category::Business, 500, 4.0),
            entry(2, "Second", 15.0, Category::Business, 500, 4.0),
            entry(3, "Third", 12.0, Category::Business, 900, 4.0),
        ];
        let criteria = FilterCriteria::default();

        let ids = |direction| -> Vec<u32> {
            let sort = SortSpec {
                key: SortKey::Downloads,
                direction,
            };
            compute_visible_entries(&entries, &criteria, &sort)
                .iter()
                .map(|e| e.id)
                .collect()
        };

        let ascending = ids(SortDirection::Ascending);
        let descending = ids(SortDirection::Descending);
        assert_eq!(ascending, vec![1, 2, 3]);
        assert_eq!(descending, vec![3, 1, 2]);

        // Reversing the ascending result would flip the tie
        let reversed: Vec<u32> = ascending.into_iter().rev().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
        assert_ne!(descending, reversed);
    }
}
