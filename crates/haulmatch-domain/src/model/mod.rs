//! Domain model types

pub mod load;
pub mod pricing;
pub mod quote;
pub mod route;
pub mod trailer;

pub use load::LoadSpecification;
pub use pricing::{PermitCostBreakdown, ShipmentPrice};
pub use quote::{CustomerContact, QuoteDocument, RouteSummary};
pub use route::{ComplianceRule, RoutePoint, RouteResult, RouteSegment, RuleKind};
pub use trailer::{TrailerSpec, TrailerType};
