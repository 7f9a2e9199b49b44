//! Per-mile freight rates and full shipment pricing

use crate::model::{LoadSpecification, ShipmentPrice, TrailerSpec, TrailerType};
use crate::service::permit_pricing::estimate_permit_costs;
use haulmatch_types::{Currency, DocumentKind};

/// Rate for trailer types missing from the table (USD per mile)
pub const DEFAULT_MILE_RATE: f64 = 3.50;
/// USD per mile
pub const FUEL_SURCHARGE_PER_MILE: f64 = 0.35;
/// Flat fee added to invoices (USD)
pub const ADDITIONAL_SERVICES_FEE: f64 = 75.0;
/// Multiplier for purpose-built trailers
pub const SPECIALIZED_RATE_FACTOR: f64 = 1.35;

/// Base freight rate by trailer type (USD per mile)
pub fn base_mile_rate(trailer_type: TrailerType) -> f64 {
    match trailer_type {
        TrailerType::Flatbed => 2.75,
        TrailerType::StepDeck => 3.15,
        TrailerType::Lowboy => 4.25,
        TrailerType::Van => 2.50,
        TrailerType::Reefer => 3.25,
        TrailerType::Rgn => 5.50,
        TrailerType::Extendable => 4.75,
        TrailerType::Perimeter => 5.25,
        TrailerType::Schnabel => 10.00,
        TrailerType::Other => DEFAULT_MILE_RATE,
    }
}

fn width_factor(width_ft: f64) -> f64 {
    if width_ft > 12.0 {
        1.75
    } else if width_ft > 10.0 {
        1.5
    } else if width_ft > 8.5 {
        1.25
    } else {
        1.0
    }
}

fn weight_factor(weight_lbs: f64) -> f64 {
    if weight_lbs > 200_000.0 {
        2.0
    } else if weight_lbs > 120_000.0 {
        1.6
    } else if weight_lbs > 80_000.0 {
        1.3
    } else {
        1.0
    }
}

/// Per-mile rate for hauling `load` on `trailer`, in `currency`
pub fn mile_rate(trailer: &TrailerSpec, load: &LoadSpecification, currency: Currency) -> f64 {
    let mut multiplier = width_factor(load.width_ft) * weight_factor(load.weight_lbs);
    if trailer.is_specialized() {
        multiplier *= SPECIALIZED_RATE_FACTOR;
    }
    base_mile_rate(trailer.trailer_type) * multiplier * currency.rate()
}

/// Price a shipment of `distance_miles`: mileage, fuel, invoice services and permits
pub fn estimate_shipment_price(
    trailer: &TrailerSpec,
    load: &LoadSpecification,
    distance_miles: f64,
    kind: DocumentKind,
    currency: Currency,
) -> ShipmentPrice {
    let rate = currency.rate();
    let mile_rate = mile_rate(trailer, load, currency);
    let base_cost = distance_miles * mile_rate;
    let fuel_surcharge = distance_miles * FUEL_SURCHARGE_PER_MILE * rate;
    let additional_services = match kind {
        DocumentKind::Invoice => ADDITIONAL_SERVICES_FEE * rate,
        DocumentKind::Quote => 0.0,
    };
    let permits = estimate_permit_costs(load, currency);
    let total = base_cost + fuel_surcharge + additional_services + permits.total;

    log::debug!(
        "{} on '{}' over {:.1} mi at {:.2}/mi: total {:.2} {}",
        kind,
        trailer.id,
        distance_miles,
        mile_rate,
        total,
        currency
    );

    ShipmentPrice {
        mile_rate,
        base_cost,
        fuel_surcharge,
        additional_services,
        permits,
        total,
        currency,
    }
}
