//! Repository trait definitions for catalog sources

use crate::catalog::TrailerCatalog;
use haulmatch_types::Error;

/// Source of the trailer catalog used for matching
pub trait TrailerCatalogRepository {
    /// Load and validate the full catalog
    fn load_catalog(&self) -> Result<TrailerCatalog, Error>;
}

/// The compiled-in sample fleet
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalogRepository;

impl TrailerCatalogRepository for BuiltinCatalogRepository {
    fn load_catalog(&self) -> Result<TrailerCatalog, Error> {
        Ok(TrailerCatalog::builtin())
    }
}
