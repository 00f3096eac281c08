//! Common types and data structures

use crate::catalog::{CatalogEntry, EntryId};
use serde::{Deserialize, Serialize};

/// Top-level page shown in the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    Catalog,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Catalog, Page::About];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Catalog => "Catalog",
            Page::About => "About",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => egui_phosphor::regular::HOUSE,
            Page::Catalog => egui_phosphor::regular::SQUARES_FOUR,
            Page::About => egui_phosphor::regular::INFO,
        }
    }
}

/// How the catalog results are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultsLayout {
    #[default]
    Grid,
    List,
}

/// Catalog file structure (embedded or user supplied)
#[derive(Deserialize)]
pub struct CatalogManifest {
    #[serde(default)]
    pub version: String,
    #[serde(alias = "presentations")]
    pub entries: Vec<CatalogEntry>,
}

/// Receives the id of an entry the user picked for a closer look.
pub trait EntrySelectionHandler {
    fn entry_selected(&mut self, id: EntryId);
}
