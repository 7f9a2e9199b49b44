//! Permit, pilot car and police escort cost estimation

use crate::model::{LoadSpecification, PermitCostBreakdown};
use haulmatch_types::Currency;

pub const BASE_PERMIT_FEE: f64 = 50.0;
pub const OVERSIZED_PERMIT_FEE: f64 = 150.0;
/// Per hour
pub const PILOT_CAR_RATE: f64 = 55.0;
/// Per hour
pub const POLICE_ESCORT_RATE: f64 = 95.0;
/// Assumed trip duration for escort billing
pub const AVERAGE_TRIP_HOURS: f64 = 10.0;

/// Pilot cars and police escort required for a load
fn escort_requirements(load: &LoadSpecification) -> (u32, bool) {
    let (length, width, height, weight) = (load.length_ft, load.width_ft, load.height_ft, load.weight_lbs);

    // height > 14 appears in both tiers, so height alone never yields one car
    if width > 12.0 || height > 14.0 || length > 85.0 || weight > 120_000.0 {
        (2, true)
    } else if width > 10.0 || height > 14.0 || length > 75.0 || weight > 100_000.0 {
        (1, false)
    } else {
        (0, false)
    }
}

/// Estimate regulatory costs for moving a load.
///
/// Components are converted to `currency` and rounded to whole units; the
/// total is the rounded sum of the unrounded components.
pub fn estimate_permit_costs(load: &LoadSpecification, currency: Currency) -> PermitCostBreakdown {
    let (permit_fee, pilot_cars, police_escort) = if load.is_oversized() {
        let (pilot_cars, police_escort) = escort_requirements(load);
        (OVERSIZED_PERMIT_FEE, pilot_cars, police_escort)
    } else {
        (BASE_PERMIT_FEE, 0, false)
    };

    let rate = currency.rate();
    let permit_fee = permit_fee * rate;
    let pilot_car_cost = f64::from(pilot_cars) * PILOT_CAR_RATE * AVERAGE_TRIP_HOURS * rate;
    let police_escort_cost = if police_escort {
        POLICE_ESCORT_RATE * AVERAGE_TRIP_HOURS * rate
    } else {
        0.0
    };
    let total = permit_fee + pilot_car_cost + police_escort_cost;

    log::debug!(
        "Permits for {}: fee {:.2}, {} pilot car(s), escort {} ({})",
        load,
        permit_fee,
        pilot_cars,
        police_escort,
        currency
    );

    PermitCostBreakdown {
        permit_fee: permit_fee.round(),
        pilot_cars,
        pilot_car_cost: pilot_car_cost.round(),
        police_escort,
        police_escort_cost: police_escort_cost.round(),
        total: total.round(),
        currency,
    }
}
