//! Error types for haulmatch

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Invalid route points: {origin} -> {destination}")]
    InvalidRoutePoints { origin: String, destination: String },

    #[error("Invalid trailer catalog: {0}")]
    InvalidCatalog(String),

    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("Unknown trailer: {0}")]
    UnknownTrailer(String),

    #[error("Invalid contact details: {0}")]
    InvalidContact(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
