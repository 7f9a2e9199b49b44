//! Quote and invoice assembly

use chrono::{Days, NaiveDate};

use crate::model::{
    CustomerContact, LoadSpecification, QuoteDocument, RouteResult, RouteSummary, TrailerSpec,
};
use crate::service::format::map_embed_url;
use crate::service::freight_pricing::estimate_shipment_price;
use haulmatch_types::{Currency, DocumentKind, Result};

/// Days a quote stays valid unless configured otherwise
pub const DEFAULT_VALIDITY_DAYS: u64 = 7;

/// Everything needed to price one wizard session
#[derive(Debug, Clone)]
pub struct QuoteRequest<'a> {
    pub reference: String,
    pub issued_on: NaiveDate,
    pub validity_days: u64,
    pub kind: DocumentKind,
    pub currency: Currency,
    pub trailer: &'a TrailerSpec,
    pub load: &'a LoadSpecification,
    pub route: &'a RouteResult,
    pub maps_api_key: Option<&'a str>,
    pub customer: Option<CustomerContact>,
}

/// Price the selected trailer over the selected route.
///
/// Fails only when attached customer details are invalid.
pub fn build_quote(request: QuoteRequest<'_>) -> Result<QuoteDocument> {
    if let Some(customer) = &request.customer {
        customer.validate()?;
    }

    let price = estimate_shipment_price(
        request.trailer,
        request.load,
        request.route.total_distance,
        request.kind,
        request.currency,
    );

    let valid_until = request
        .issued_on
        .checked_add_days(Days::new(request.validity_days))
        .unwrap_or(NaiveDate::MAX);

    let route = RouteSummary {
        origin: request.route.origin.name.clone(),
        destination: request.route.destination.name.clone(),
        distance_miles: request.route.total_distance,
        time_minutes: request.route.total_time,
        compliance_issues: request
            .route
            .compliance_issues
            .iter()
            .map(|rule| rule.name.clone())
            .collect(),
        map_url: map_embed_url(
            &request.route.origin,
            &request.route.destination,
            request.maps_api_key,
        ),
    };

    log::debug!("Built {} {} total {:.2}", request.kind, request.reference, price.total);

    Ok(QuoteDocument {
        reference: request.reference,
        kind: request.kind,
        currency: request.currency,
        issued_on: request.issued_on,
        valid_until,
        trailer: request.trailer.clone(),
        load: *request.load,
        route,
        mile_rate: price.mile_rate,
        base_cost: price.base_cost,
        fuel_surcharge: price.fuel_surcharge,
        additional_services: price.additional_services,
        permits: price.permits,
        total: price.total,
        customer: request.customer,
    })
}
