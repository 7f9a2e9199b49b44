//! Application use cases

pub mod quote_service;

pub use quote_service::{generate_reference, QuoteOptions, QuoteOutcome, QuoteService};
