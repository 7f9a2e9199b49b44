//! File-based implementation of TrailerCatalogRepository

use std::path::{Path, PathBuf};

use haulmatch_domain::repository::TrailerCatalogRepository;
use haulmatch_domain::TrailerCatalog;
use haulmatch_types::{Error, Result};

use crate::catalog_csv;
use crate::catalog_loader::TrailerCatalogLoader;

/// On-disk catalog format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Csv,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("csv") => Ok(CatalogFormat::Csv),
            _ => Err(Error::CatalogLoad(format!(
                "Unsupported catalog format: {} (expected .toml or .csv)",
                path.display()
            ))),
        }
    }
}

/// Trailer catalog read from a TOML or CSV file
pub struct FileTrailerCatalogRepository {
    path: PathBuf,
    format: CatalogFormat,
}

impl FileTrailerCatalogRepository {
    pub fn new(path: PathBuf) -> Result<Self> {
        let format = CatalogFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }
}

impl TrailerCatalogRepository for FileTrailerCatalogRepository {
    fn load_catalog(&self) -> Result<TrailerCatalog> {
        log::info!("Loading trailer catalog from {}", self.path.display());
        match self.format {
            CatalogFormat::Toml => Ok(TrailerCatalogLoader::load_from_file(&self.path)?.into_catalog()),
            CatalogFormat::Csv => catalog_csv::load_catalog(&self.path),
        }
    }
}
