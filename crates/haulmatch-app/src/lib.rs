//! Application service layer - use cases, config, catalog selection

pub mod app;
pub mod config;
pub mod repository;
