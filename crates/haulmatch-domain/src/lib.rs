//! Trailer matching, permit pricing and mock routing for oversize freight

pub mod catalog;
pub mod model;
pub mod repository;
pub mod service;

pub use catalog::TrailerCatalog;
