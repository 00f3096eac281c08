//! Catalog data and the filter/sort engine behind the catalog page
//!
//! Everything in here is independent of egui: the app feeds widget events in
//! as [`CatalogAction`]s and renders whatever [`compute_visible_entries`] returns.

mod entry;
mod filters;
mod state;

pub use entry::{Catalog, CatalogEntry, Category, EntryId};
pub use filters::{compute_visible_entries, SortDirection, SortKey, PRICE_CEILING, RATING_CEILING};
pub use state::{CatalogAction, CatalogState};
