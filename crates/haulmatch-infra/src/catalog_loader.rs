//! Trailer catalog loader from TOML files

use std::fs;
use std::path::Path;

use serde::Deserialize;

use haulmatch_domain::model::TrailerSpec;
use haulmatch_domain::TrailerCatalog;
use haulmatch_types::{Error, Result};

/// Container for parsing trailers.toml
#[derive(Debug, Deserialize)]
struct TrailerCatalogFile {
    #[serde(default)]
    trailers: Vec<TrailerSpec>,
}

/// Trailer catalog loaded from TOML
#[derive(Debug)]
pub struct TrailerCatalogLoader {
    catalog: TrailerCatalog,
}

impl TrailerCatalogLoader {
    /// Load a catalog from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::CatalogLoad(format!("Failed to read catalog file {}: {}", path.display(), e))
        })?;

        Self::load_from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: TrailerCatalogFile = toml::from_str(toml_content)
            .map_err(|e| Error::CatalogLoad(format!("Failed to parse catalog TOML: {}", e)))?;

        log::debug!("Parsed {} trailer(s) from TOML", file.trailers.len());
        let catalog = TrailerCatalog::new(file.trailers)?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &TrailerCatalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> TrailerCatalog {
        self.catalog
    }

    /// Number of trailers loaded
    pub fn count(&self) -> usize {
        self.catalog.len()
    }
}
