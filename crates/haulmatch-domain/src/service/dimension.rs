//! Dimension normalizer: user-entered lengths and weights to decimal numbers

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use haulmatch_types::{Error, Result};

/// `<feet>'<inches>"` anywhere in the text
static FEET_INCHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\d+)'(\d+)""#).expect("feet-inches pattern is valid"));

/// Leading decimal number, optionally signed, with optional exponent
static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("float pattern is valid")
});

/// Whole-string `<feet>'<inches>"`
static EXACT_FEET_INCHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(\d+)'(\d+)"$"#).expect("feet-inches pattern is valid"));

/// Whole-string decimal number
static EXACT_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("float pattern is valid")
});

/// A dimension or weight as it arrives from a form: already numeric, or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionInput {
    Number(f64),
    Text(String),
}

impl From<f64> for DimensionInput {
    fn from(value: f64) -> Self {
        DimensionInput::Number(value)
    }
}

impl From<&str> for DimensionInput {
    fn from(value: &str) -> Self {
        DimensionInput::Text(value.to_string())
    }
}

impl From<String> for DimensionInput {
    fn from(value: String) -> Self {
        DimensionInput::Text(value)
    }
}

/// Convert a dimension to decimal feet.
///
/// Numbers pass through unchanged, `43'2"` becomes `43 + 2/12`, anything else
/// is parsed loosely from its leading number. Unparseable text yields `NaN`;
/// use [`parse_dimension`] where a typed error is needed.
pub fn normalize(dimension: impl Into<DimensionInput>) -> f64 {
    match dimension.into() {
        DimensionInput::Number(value) => value,
        DimensionInput::Text(text) => normalize_text(&text),
    }
}

/// Convert a weight to pounds, ignoring thousands separators
pub fn normalize_weight(weight: impl Into<DimensionInput>) -> f64 {
    match weight.into() {
        DimensionInput::Number(value) => value,
        DimensionInput::Text(text) => loose_parse_float(&text.replace(',', "")),
    }
}

/// Strict boundary variant of [`normalize`].
///
/// The whole input must be `43'2"` notation or a decimal number; trailing
/// text, decimal commas and unclosed inches are rejected.
pub fn parse_dimension(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value = match EXACT_FEET_INCHES.captures(trimmed) {
        Some(caps) => {
            let feet: f64 = caps[1].parse().unwrap_or(f64::NAN);
            let inches: f64 = caps[2].parse().unwrap_or(f64::NAN);
            feet + inches / 12.0
        }
        None => exact_parse_float(trimmed),
    };
    validate(text, value)
}

/// Strict boundary variant of [`normalize_weight`]
pub fn parse_weight(text: &str) -> Result<f64> {
    validate(text, exact_parse_float(&text.trim().replace(',', "")))
}

fn normalize_text(text: &str) -> f64 {
    if let Some(caps) = FEET_INCHES.captures(text) {
        let feet: f64 = caps[1].parse().unwrap_or(f64::NAN);
        let inches: f64 = caps[2].parse().unwrap_or(f64::NAN);
        return feet + inches / 12.0;
    }
    loose_parse_float(text)
}

/// Parse the leading number of `text`, `NaN` when there is none
fn loose_parse_float(text: &str) -> f64 {
    LEADING_FLOAT
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parse `text` only when all of it is a number, `NaN` otherwise
fn exact_parse_float(text: &str) -> f64 {
    if EXACT_FLOAT.is_match(text) {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn validate(text: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidDimension(format!(
            "'{}' is not a number",
            text.trim()
        )));
    }
    if value < 0.0 {
        return Err(Error::InvalidDimension(format!(
            "'{}' must not be negative",
            text.trim()
        )));
    }
    Ok(value)
}
