//! Pricing result types

use serde::{Deserialize, Serialize};

use haulmatch_types::Currency;

/// Permit, pilot car and police escort costs for one load.
/// Monetary fields are whole units of `currency`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PermitCostBreakdown {
    pub permit_fee: f64,
    pub pilot_cars: u32,
    pub pilot_car_cost: f64,
    pub police_escort: bool,
    pub police_escort_cost: f64,
    pub total: f64,
    pub currency: Currency,
}

/// Full shipment price for a trailer over a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipmentPrice {
    /// Per-mile freight rate, currency-adjusted
    pub mile_rate: f64,
    pub base_cost: f64,
    pub fuel_surcharge: f64,
    pub additional_services: f64,
    pub permits: PermitCostBreakdown,
    pub total: f64,
    pub currency: Currency,
}
