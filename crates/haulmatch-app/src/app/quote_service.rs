//! Quote Service - the wizard use case
//!
//! Drives one session from a load to a priced document:
//! 1. Match the load against the trailer catalog
//! 2. Select a trailer (best match, or one picked by id)
//! 3. Find the route and its alternatives
//! 4. Price the trip and build the quote or invoice

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use haulmatch_domain::model::{CustomerContact, LoadSpecification, QuoteDocument, RouteResult, TrailerSpec};
use haulmatch_domain::service::{build_quote, match_trailers, MatchResult, QuoteRequest, RouteFinder};
use haulmatch_domain::TrailerCatalog;
use haulmatch_types::{Currency, DocumentKind, Error, Result};

use crate::config::Config;

/// Options for a quote session
#[derive(Debug, Clone, Default)]
pub struct QuoteOptions {
    /// Trailer picked by the user instead of the best match
    pub trailer_id: Option<String>,

    pub kind: DocumentKind,

    pub currency: Currency,

    /// Contact details printed on the document
    pub customer: Option<CustomerContact>,

    /// Issue date override; today when unset
    pub issued_on: Option<NaiveDate>,

    /// Reference override; generated when unset
    pub reference: Option<String>,
}

impl QuoteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trailer(mut self, trailer_id: String) -> Self {
        self.trailer_id = Some(trailer_id);
        self
    }

    pub fn with_kind(mut self, kind: DocumentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_customer(mut self, customer: CustomerContact) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issued_on = Some(date);
        self
    }

    pub fn with_reference(mut self, reference: String) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// Everything a finished session produced
#[derive(Debug, Clone)]
pub struct QuoteOutcome {
    pub matches: MatchResult,
    pub route: RouteResult,
    pub alternatives: Vec<RouteResult>,
    pub document: QuoteDocument,
}

/// Wizard use case over an injected catalog and route table
#[derive(Debug, Clone)]
pub struct QuoteService {
    catalog: TrailerCatalog,
    routes: RouteFinder,
    maps_api_key: Option<String>,
    validity_days: u64,
}

impl QuoteService {
    pub fn new(catalog: TrailerCatalog, routes: RouteFinder) -> Self {
        Self {
            catalog,
            routes,
            maps_api_key: None,
            validity_days: haulmatch_domain::service::quote_builder::DEFAULT_VALIDITY_DAYS,
        }
    }

    /// Service using the configured map key and validity window
    pub fn from_config(config: &Config, catalog: TrailerCatalog) -> Self {
        Self {
            maps_api_key: config.maps_api_key().map(str::to_string),
            validity_days: config.quote_validity_days,
            ..Self::new(catalog, RouteFinder::builtin())
        }
    }

    pub fn catalog(&self) -> &TrailerCatalog {
        &self.catalog
    }

    pub fn routes(&self) -> &RouteFinder {
        &self.routes
    }

    pub fn match_load(&self, load: &LoadSpecification) -> MatchResult {
        let matches = match_trailers(&self.catalog, load);
        if !matches.is_exact() {
            log::warn!(
                "No trailer holds {} as-is; showing {} {}",
                load,
                matches.len(),
                matches.strategy
            );
        }
        matches
    }

    /// The trailer named by `trailer_id`, or the best match.
    ///
    /// A picked trailer may come from anywhere in the catalog.
    pub fn select_trailer(&self, matches: &MatchResult, trailer_id: Option<&str>) -> Result<TrailerSpec> {
        match trailer_id {
            Some(id) => {
                let trailer = self
                    .catalog
                    .get(id)
                    .ok_or_else(|| Error::UnknownTrailer(id.to_string()))?;
                if !matches.trailers.iter().any(|t| t.id == id) {
                    log::warn!("Trailer '{}' is not among the recommended trailers", id);
                }
                Ok(trailer.clone())
            }
            None => matches
                .best()
                .cloned()
                .ok_or_else(|| Error::InvalidCatalog("no trailers to choose from".to_string())),
        }
    }

    /// Route for `load` on `trailer` between two point ids
    pub fn find_route(
        &self,
        trailer: &TrailerSpec,
        load: &LoadSpecification,
        origin: &str,
        destination: &str,
    ) -> Result<RouteResult> {
        self.routes.find_route(
            origin,
            destination,
            trailer.trailer_type,
            load.weight_lbs,
            load.height_ft,
            load.width_ft,
        )
    }

    /// Run the whole session
    pub fn quote(
        &self,
        load: &LoadSpecification,
        origin: &str,
        destination: &str,
        options: QuoteOptions,
    ) -> Result<QuoteOutcome> {
        let matches = self.match_load(load);
        let trailer = self.select_trailer(&matches, options.trailer_id.as_deref())?;
        let route = self.find_route(&trailer, load, origin, destination)?;
        let alternatives = self.routes.alternative_routes(&route);

        let reference = options
            .reference
            .unwrap_or_else(|| generate_reference(options.kind));
        let issued_on = options.issued_on.unwrap_or_else(|| Local::now().date_naive());

        let document = build_quote(QuoteRequest {
            reference,
            issued_on,
            validity_days: self.validity_days,
            kind: options.kind,
            currency: options.currency,
            trailer: &trailer,
            load,
            route: &route,
            maps_api_key: self.maps_api_key.as_deref(),
            customer: options.customer,
        })?;

        log::info!(
            "{} {} issued: {} on '{}', {:.2} {}",
            document.kind,
            document.reference,
            route.name,
            trailer.id,
            document.total,
            document.currency
        );

        Ok(QuoteOutcome {
            matches,
            route,
            alternatives,
            document,
        })
    }
}

/// Document reference such as `Q-3F9A12BC` or `INV-77D0E4A1`
pub fn generate_reference(kind: DocumentKind) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}-{}", kind.reference_prefix(), id[..8].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> QuoteService {
        QuoteService::new(TrailerCatalog::builtin(), RouteFinder::builtin())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_format() {
        let quote_ref = generate_reference(DocumentKind::Quote);
        assert!(quote_ref.starts_with("Q-"));
        assert_eq!(quote_ref.len(), 10);

        let invoice_ref = generate_reference(DocumentKind::Invoice);
        assert!(invoice_ref.starts_with("INV-"));
        assert!(invoice_ref[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_quote_uses_best_match() {
        let load = LoadSpecification::new(40.0, 8.0, 8.0, 40_000.0);
        let outcome = service()
            .quote(
                &load,
                "nyc",
                "phl",
                QuoteOptions::new()
                    .with_issue_date(date(2024, 5, 1))
                    .with_reference("Q-00000001".to_string()),
            )
            .unwrap();

        assert!(outcome.matches.is_exact());
        assert_eq!(outcome.document.trailer.id, outcome.matches.trailers[0].id);
        assert_eq!(outcome.document.reference, "Q-00000001");
        assert_eq!(outcome.document.valid_until, date(2024, 5, 8));
        assert_eq!(outcome.alternatives.len(), 2);
    }

    #[test]
    fn test_quote_with_picked_trailer() {
        let load = LoadSpecification::new(40.0, 8.0, 8.0, 40_000.0);
        let outcome = service()
            .quote(
                &load,
                "nyc",
                "phl",
                QuoteOptions::new()
                    .with_trailer("lowboy-48".to_string())
                    .with_kind(DocumentKind::Invoice)
                    .with_currency(Currency::Cad),
            )
            .unwrap();

        assert_eq!(outcome.document.trailer.id, "lowboy-48");
        assert!(outcome.document.reference.starts_with("INV-"));
        assert_eq!(outcome.document.currency, Currency::Cad);
        assert!((outcome.document.additional_services - 75.0 * 1.37).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_trailer() {
        let load = LoadSpecification::new(40.0, 8.0, 8.0, 40_000.0);
        let err = service()
            .quote(&load, "nyc", "phl", QuoteOptions::new().with_trailer("hovercraft".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTrailer(ref id) if id == "hovercraft"));
    }

    #[test]
    fn test_unknown_route_point() {
        let load = LoadSpecification::new(40.0, 8.0, 8.0, 40_000.0);
        let err = service().quote(&load, "nyc", "atl", QuoteOptions::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidRoutePoints { .. }));
    }

    #[test]
    fn test_from_config_applies_validity_and_key() {
        let config = Config {
            maps_api_key: Some("k-123".to_string()),
            quote_validity_days: 30,
            ..Config::default()
        };
        let service = QuoteService::from_config(&config, TrailerCatalog::builtin());
        let load = LoadSpecification::new(40.0, 8.0, 8.0, 40_000.0);
        let outcome = service
            .quote(&load, "hou", "dal", QuoteOptions::new().with_issue_date(date(2024, 1, 1)))
            .unwrap();

        assert_eq!(outcome.document.valid_until, date(2024, 1, 31));
        assert!(outcome.document.route.map_url.contains("k-123"));
    }
}
