//! Filtering and sorting logic

use super::App;
use crate::catalog::{compute_visible_entries, CatalogAction, CatalogEntry};
use tracing::debug;

impl App {
    /// Feed one widget event through the reducer; the visible list is only
    /// rebuilt when the state actually moved.
    pub fn dispatch(&mut self, action: CatalogAction) {
        debug!(?action, "Catalog action");
        if self.catalog_state.apply(action) {
            self.recompute_visible();
        }
    }

    pub(crate) fn recompute_visible(&mut self) {
        self.visible_ids = compute_visible_entries(
            self.catalog.entries(),
            &self.catalog_state.criteria,
            &self.catalog_state.sort,
        )
        .into_iter()
        .map(|e| e.id)
        .collect();
        debug!(
            visible = self.visible_ids.len(),
            total = self.catalog.len(),
            "Catalog view recomputed"
        );
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.visible_ids
            .iter()
            .filter_map(move |&id| self.catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, SortDirection, SortKey};
    use crate::settings::Settings;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::with_catalog(
            Catalog::builtin().unwrap(),
            Settings::default(),
            std::env::temp_dir(),
        )
    }

    fn visible_ids(app: &App) -> Vec<u32> {
        app.visible_entries().map(|e| e.id).collect()
    }

    #[test]
    fn opens_with_full_catalog_by_downloads() {
        let app = app();
        assert_eq!(visible_ids(&app), vec![1, 5, 2, 3, 4]);
    }

    #[test]
    fn actions_recompute_the_view() {
        let mut app = app();
        app.dispatch(CatalogAction::SelectCategory(Some(Category::Marketing)));
        assert_eq!(visible_ids(&app), vec![1, 5]);

        app.dispatch(CatalogAction::SetSortKey(SortKey::Rating));
        assert_eq!(visible_ids(&app), vec![5, 1]);

        app.dispatch(CatalogAction::ToggleSortDirection);
        assert_eq!(app.catalog_state.sort.direction, SortDirection::Ascending);
        assert_eq!(visible_ids(&app), vec![1, 5]);

        app.dispatch(CatalogAction::SetSearchTerm("digital".into()));
        assert_eq!(visible_ids(&app), vec![5]);
    }

    #[test]
    fn rating_slider_step_keeps_entry_at_shown_minimum() {
        let mut app = app();
        // What a 0.1-step slider stores after moving to "4.6"
        app.dispatch(CatalogAction::SetMinRating(46.0 * 0.1));
        assert_eq!(app.catalog_state.criteria.min_rating, 4.6);
        assert_eq!(visible_ids(&app), vec![1, 5, 3]);

        app.dispatch(CatalogAction::SetMinRating(48.0 * 0.1));
        assert_eq!(visible_ids(&app), vec![5]);
    }

    #[test]
    fn reset_restores_default_view() {
        let mut app = app();
        app.dispatch(CatalogAction::SetMaxPrice(18.0));
        app.dispatch(CatalogAction::SetMinDownloads(1000));
        assert!(visible_ids(&app).is_empty());

        app.dispatch(CatalogAction::Reset);
        assert!(app.catalog_state.is_default());
        assert_eq!(visible_ids(&app), vec![1, 5, 2, 3, 4]);
    }
}
