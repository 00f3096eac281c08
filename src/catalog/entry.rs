//! Catalog entries and the validated, fixed catalog list

use crate::types::CatalogManifest;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

pub type EntryId = u32;

/// Closed set of template categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Marketing,
    Business,
    Technology,
    Education,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Marketing,
        Category::Business,
        Category::Technology,
        Category::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Marketing => "Marketing",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Education => "Education",
        }
    }
}

/// A single presentation template in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    pub price: f64,
    pub thumbnail: String,
    pub category: Category,
    pub downloads: u64,
    pub rating: f64,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate entry id {0}")]
    DuplicateId(EntryId),

    #[error("Entry {id} has invalid price {price}")]
    InvalidPrice { id: EntryId, price: f64 },

    #[error("Entry {id} has rating {rating} outside 0..=5")]
    InvalidRating { id: EntryId, rating: f64 },
}

/// Immutable list of entries, checked once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            if !entry.price.is_finite() || entry.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: entry.id,
                    price: entry.price,
                });
            }
            if !(0.0..=5.0).contains(&entry.rating) {
                return Err(CatalogError::InvalidRating {
                    id: entry.id,
                    rating: entry.rating,
                });
            }
        }
        Ok(Self { entries })
    }

    /// The catalog shipped inside the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let manifest: CatalogManifest = serde_json::from_str(json)?;
        debug!(
            version = %manifest.version,
            count = manifest.entries.len(),
            "Catalog manifest parsed"
        );
        Self::new(manifest.entries)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn entry(
    id: EntryId,
    title: &str,
    price: f64,
    category: Category,
    downloads: u64,
    rating: f64,
) -> CatalogEntry {
    CatalogEntry {
        id,
        title: title.to_string(),
        price,
        thumbnail: format!("{}.jpg", id),
        category,
        downloads,
        rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_has_five_unique_entries() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 5);
        let first = catalog.get(1).unwrap();
        assert_eq!(first.title, "Marketing Strategy Masterclass");
        assert_eq!(first.category, Category::Marketing);
        assert_eq!(first.downloads, 1240);
        assert_eq!(first.price, 20.0);
        assert!(catalog.get(42).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let entries = vec![
            entry(7, "A", 10.0, Category::Business, 1, 4.0),
            entry(7, "B", 12.0, Category::Business, 2, 4.0),
        ];
        match Catalog::new(entries) {
            Err(CatalogError::DuplicateId(7)) => {}
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        let negative_price = vec![entry(1, "A", -1.0, Category::Education, 0, 3.0)];
        assert!(matches!(
            Catalog::new(negative_price),
            Err(CatalogError::InvalidPrice { id: 1, .. })
        ));

        let high_rating = vec![entry(2, "B", 5.0, Category::Education, 0, 5.5)];
        assert!(matches!(
            Catalog::new(high_rating),
            Err(CatalogError::InvalidRating { id: 2, .. })
        ));
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let json = r#"{"version":"1","entries":[{"id":1,"title":"X","price":1,
            "thumbnail":"x.jpg","category":"Cooking","downloads":1,"rating":1}]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version":"2","entries":[{{"id":9,"title":"Quarterly Review","price":12.5,
                "thumbnail":"q.jpg","category":"Business","downloads":40,"rating":3.9}}]}}"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].title, "Quarterly Review");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::from_json_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
