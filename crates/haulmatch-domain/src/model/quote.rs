//! Quote / invoice document types

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{LoadSpecification, PermitCostBreakdown, TrailerSpec};
use haulmatch_types::{Currency, DocumentKind, Error, Result};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Customer details attached to a quote or a carrier request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl CustomerContact {
    /// Check every field, reporting the first problem found
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().chars().count() < 2 {
            return Err(Error::InvalidContact(
                "First name must be at least 2 characters.".to_string(),
            ));
        }
        if self.last_name.trim().chars().count() < 2 {
            return Err(Error::InvalidContact(
                "Last name must be at least 2 characters.".to_string(),
            ));
        }
        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(Error::InvalidContact(
                "Please enter a valid email address.".to_string(),
            ));
        }
        if self.phone.trim().chars().count() < 10 {
            return Err(Error::InvalidContact(
                "Please enter a valid phone number.".to_string(),
            ));
        }
        if self.location.trim().chars().count() < 2 {
            return Err(Error::InvalidContact(
                "Please enter your location.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Route facts printed on a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub origin: String,
    pub destination: String,
    pub distance_miles: f64,
    pub time_minutes: f64,
    pub compliance_issues: Vec<String>,
    pub map_url: String,
}

/// Priced quote or invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDocument {
    pub reference: String,
    pub kind: DocumentKind,
    pub currency: Currency,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
    pub trailer: TrailerSpec,
    pub load: LoadSpecification,
    pub route: RouteSummary,
    pub mile_rate: f64,
    pub base_cost: f64,
    pub fuel_surcharge: f64,
    pub additional_services: f64,
    pub permits: PermitCostBreakdown,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerContact>,
}

impl QuoteDocument {
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date >= self.issued_on && date <= self.valid_until
    }
}
