//! Domain services

pub mod dimension;
pub mod format;
pub mod freight_pricing;
pub mod permit_pricing;
pub mod quote_builder;
pub mod route_finder;
pub mod trailer_matcher;

pub use dimension::{normalize, normalize_weight, parse_dimension, parse_weight, DimensionInput};
pub use format::{format_distance, format_time, map_embed_url};
pub use freight_pricing::{estimate_shipment_price, mile_rate};
pub use permit_pricing::estimate_permit_costs;
pub use quote_builder::{build_quote, QuoteRequest};
pub use route_finder::RouteFinder;
pub use trailer_matcher::{find_specialized_trailers, match_trailers, MatchResult, MatchStrategy};
