//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_trailer_catalog_repo;

pub use file_trailer_catalog_repo::{CatalogFormat, FileTrailerCatalogRepository};
