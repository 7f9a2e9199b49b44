//! Repository adapters for catalog sources

use std::path::Path;

use haulmatch_domain::repository::{BuiltinCatalogRepository, TrailerCatalogRepository};
use haulmatch_domain::TrailerCatalog;
use haulmatch_infra::persistence::FileTrailerCatalogRepository;
use haulmatch_types::Result;

use crate::config::Config;

/// Open the catalog repository selected by `override_path`, then the
/// configured path, then the built-in table
pub fn open_catalog_repo(
    config: &Config,
    override_path: Option<&Path>,
) -> Result<Box<dyn TrailerCatalogRepository>> {
    match override_path.or(config.catalog_path.as_deref()) {
        Some(path) => Ok(Box::new(FileTrailerCatalogRepository::new(path.to_path_buf())?)),
        None => {
            log::debug!("Using built-in trailer catalog");
            Ok(Box::new(BuiltinCatalogRepository))
        }
    }
}

/// Load the trailer catalog selected by config and command line
pub fn load_catalog(config: &Config, override_path: Option<&Path>) -> Result<TrailerCatalog> {
    open_catalog_repo(config, override_path)?.load_catalog()
}
