//! Shared application state.

use docshelf_annotate::Annotator;
use docshelf_catalog::Catalog;
use docshelf_core::DocshelfConfig;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: DocshelfConfig,
    pub catalog: Catalog,
    pub annotator: Annotator,
}

impl AppState {
    pub fn new(config: DocshelfConfig, annotator: Annotator) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            annotator,
        }
    }
}
