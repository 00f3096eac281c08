//! Catalog view state and the actions that change it

use super::entry::Category;
use super::filters::{FilterCriteria, SortKey, SortSpec, PRICE_CEILING, RATING_CEILING};
use serde::{Deserialize, Serialize};

/// Everything the user can adjust on the catalog page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
}

/// A single user input on the catalog page
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    SetSearchTerm(String),
    SelectCategory(Option<Category>),
    /// Price slider; the lower bound stays at 0
    SetMaxPrice(f64),
    SetMinDownloads(u64),
    SetMinRating(f64),
    SetSortKey(SortKey),
    ToggleSortDirection,
    Reset,
}

impl CatalogState {
    pub fn reduce(mut self, action: CatalogAction) -> Self {
        match action {
            CatalogAction::SetSearchTerm(term) => self.criteria.search_term = term,
            CatalogAction::SelectCategory(category) => self.criteria.category = category,
            CatalogAction::SetMaxPrice(max) => {
                self.criteria.price_range = (0.0, clamp_or_zero(max, PRICE_CEILING));
            }
            CatalogAction::SetMinDownloads(n) => self.criteria.min_downloads = n,
            CatalogAction::SetMinRating(rating) => {
                // Snap to tenths so a slider step like 46 * 0.1 equals 4.6
                let rating = clamp_or_zero(rating, RATING_CEILING);
                self.criteria.min_rating = (rating * 10.0).round() / 10.0;
            }
            CatalogAction::SetSortKey(key) => self.sort.key = key,
            CatalogAction::ToggleSortDirection => {
                self.sort.direction = self.sort.direction.toggled();
            }
            CatalogAction::Reset => return Self::default(),
        }
        self
    }

    /// Applies `action` in place. Returns true if the state changed.
    pub fn apply(&mut self, action: CatalogAction) -> bool {
        let next = self.clone().reduce(action);
        if next == *self {
            false
        } else {
            *self = next;
            true
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn clamp_or_zero(value: f64, ceiling: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::entry;
    use crate::catalog::filters::SortDirection;
    use pretty_assertions::assert_eq;

    fn busy_state() -> CatalogState {
        [
            CatalogAction::SetSearchTerm("plan".into()),
            CatalogAction::SelectCategory(Some(Category::Business)),
            CatalogAction::SetMaxPrice(30.0),
            CatalogAction::SetMinDownloads(100),
            CatalogAction::SetMinRating(3.5),
            CatalogAction::SetSortKey(SortKey::Price),
            CatalogAction::ToggleSortDirection,
        ]
        .into_iter()
        .fold(CatalogState::default(), CatalogState::reduce)
    }

    #[test]
    fn defaults_match_catalog_opening_state() {
        let state = CatalogState::default();
        assert_eq!(state.criteria.search_term, "");
        assert_eq!(state.criteria.category, None);
        assert_eq!(state.criteria.price_range, (0.0, 50.0));
        assert_eq!(state.criteria.min_downloads, 0);
        assert_eq!(state.criteria.min_rating, 0.0);
        assert_eq!(state.sort.key, SortKey::Downloads);
        assert_eq!(state.sort.direction, SortDirection::Descending);
    }

    #[test]
    fn actions_update_their_own_field() {
        let state = busy_state();
        assert_eq!(state.criteria.search_term, "plan");
        assert_eq!(state.criteria.category, Some(Category::Business));
        assert_eq!(state.criteria.price_range, (0.0, 30.0));
        assert_eq!(state.criteria.min_downloads, 100);
        assert_eq!(state.criteria.min_rating, 3.5);
        assert_eq!(state.sort.key, SortKey::Price);
        assert_eq!(state.sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent() {
        let once = busy_state().reduce(CatalogAction::Reset);
        assert!(once.is_default());
        let twice = once.clone().reduce(CatalogAction::Reset);
        assert_eq!(once, twice);
    }

    #[test]
    fn slider_values_are_clamped() {
        let state = CatalogState::default()
            .reduce(CatalogAction::SetMaxPrice(80.0))
            .reduce(CatalogAction::SetMinRating(7.0));
        assert_eq!(state.criteria.price_range, (0.0, 50.0));
        assert_eq!(state.criteria.min_rating, 5.0);

        let state = state
            .reduce(CatalogAction::SetMaxPrice(-3.0))
            .reduce(CatalogAction::SetMinRating(f64::NAN));
        assert_eq!(state.criteria.price_range, (0.0, 0.0));
        assert_eq!(state.criteria.min_rating, 0.0);
    }

    #[test]
    fn every_rating_step_keeps_entries_at_the_shown_value() {
        for k in 0..=50 {
            let step = k as f64 * 0.1;
            let shown: f64 = format!("{:.1}", step).parse().unwrap();
            let state = CatalogState::default().reduce(CatalogAction::SetMinRating(step));
            assert_eq!(state.criteria.min_rating, shown, "step {k}");

            let at_threshold = entry(1, "Threshold", 10.0, Category::Business, 10, shown);
            assert!(state.criteria.matches(&at_threshold), "step {k} hid rating {shown}");
        }
    }

    #[test]
    fn apply_reports_changes_only() {
        let mut state = CatalogState::default();
        assert!(!state.apply(CatalogAction::Reset));
        assert!(!state.apply(CatalogAction::SelectCategory(None)));
        assert!(state.apply(CatalogAction::SetSearchTerm("deck".into())));
        assert!(!state.apply(CatalogAction::SetSearchTerm("deck".into())));
        assert!(state.apply(CatalogAction::ToggleSortDirection));
        assert!(state.apply(CatalogAction::Reset));
        assert!(state.is_default());
    }

    #[test]
    fn state_serializes_for_inspection() {
        let json = serde_json::to_value(busy_state()).unwrap();
        assert_eq!(json["criteria"]["category"], "Business");
        assert_eq!(json["sort"]["key"], "Price");
        assert_eq!(json["sort"]["direction"], "Ascending");
    }
}
