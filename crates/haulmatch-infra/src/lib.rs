//! Infrastructure layer: catalog file formats and file-backed repositories

pub mod catalog_csv;
pub mod catalog_loader;
pub mod persistence;

pub use catalog_loader::TrailerCatalogLoader;
pub use persistence::FileTrailerCatalogRepository;
