//! Load specification entered at the start of the wizard

use serde::{Deserialize, Serialize};

use crate::service::dimension::{parse_dimension, parse_weight};
use haulmatch_types::Result;

/// Oversized thresholds (feet / pounds)
pub const OVERSIZED_WIDTH_FT: f64 = 8.5;
pub const OVERSIZED_HEIGHT_FT: f64 = 13.5;
pub const OVERSIZED_LENGTH_FT: f64 = 65.0;
pub const OVERSIZED_WEIGHT_LBS: f64 = 80_000.0;

/// Very oversized thresholds (feet / pounds)
pub const VERY_OVERSIZED_WIDTH_FT: f64 = 10.0;
pub const VERY_OVERSIZED_HEIGHT_FT: f64 = 14.0;
pub const VERY_OVERSIZED_LENGTH_FT: f64 = 85.0;
pub const VERY_OVERSIZED_WEIGHT_LBS: f64 = 120_000.0;

/// Loads longer than this take the extreme-length path
pub const EXTREME_LENGTH_FT: f64 = 100.0;

/// Normalized load dimensions (decimal feet) and weight (pounds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSpecification {
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: f64,
    pub weight_lbs: f64,
}

impl LoadSpecification {
    pub fn new(length_ft: f64, width_ft: f64, height_ft: f64, weight_lbs: f64) -> Self {
        Self {
            length_ft,
            width_ft,
            height_ft,
            weight_lbs,
        }
    }

    /// Build a load from user-entered text.
    ///
    /// Dimensions accept plain decimals or `feet'inches"` notation; the weight
    /// may carry thousands separators. Unparseable or negative values are
    /// rejected here so raw text never reaches the engine.
    pub fn parse(length: &str, width: &str, height: &str, weight: &str) -> Result<Self> {
        Ok(Self {
            length_ft: parse_dimension(length)?,
            width_ft: parse_dimension(width)?,
            height_ft: parse_dimension(height)?,
            weight_lbs: parse_weight(weight)?,
        })
    }

    /// Width > 8.5 ft, height > 13.5 ft, length > 65 ft or weight > 80,000 lb
    pub fn is_oversized(&self) -> bool {
        self.width_ft > OVERSIZED_WIDTH_FT
            || self.height_ft > OVERSIZED_HEIGHT_FT
            || self.length_ft > OVERSIZED_LENGTH_FT
            || self.weight_lbs > OVERSIZED_WEIGHT_LBS
    }

    /// Width > 10 ft, height > 14 ft, length > 85 ft or weight > 120,000 lb
    pub fn is_very_oversized(&self) -> bool {
        self.width_ft > VERY_OVERSIZED_WIDTH_FT
            || self.height_ft > VERY_OVERSIZED_HEIGHT_FT
            || self.length_ft > VERY_OVERSIZED_LENGTH_FT
            || self.weight_lbs > VERY_OVERSIZED_WEIGHT_LBS
    }

    pub fn is_extreme_length(&self) -> bool {
        self.length_ft > EXTREME_LENGTH_FT
    }
}

impl std::fmt::Display for LoadSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2}' L x {:.2}' W x {:.2}' H, {:.0} lbs",
            self.length_ft, self.width_ft, self.height_ft, self.weight_lbs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_notation() {
        let load = LoadSpecification::parse("43'2\"", "8.5", "9'6\"", "42,000").unwrap();
        assert!((load.length_ft - 43.1667).abs() < 1e-4);
        assert!((load.width_ft - 8.5).abs() < f64::EPSILON);
        assert!((load.height_ft - 9.5).abs() < 1e-9);
        assert!((load.weight_lbs - 42000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(LoadSpecification::parse("abc", "8", "8", "1000").is_err());
        assert!(LoadSpecification::parse("40", "8", "8", "heavy").is_err());
    }

    #[test]
    fn test_parse_rejects_truncatable_input() {
        let err = LoadSpecification::parse("40", "8,5", "9'6\"", "42000").unwrap_err();
        assert!(err.to_string().contains("8,5"), "{}", err);
        assert!(LoadSpecification::parse("40", "8.5", "9'6", "42000").is_err());
        assert!(LoadSpecification::parse("12abc", "8.5", "9", "42000").is_err());
    }

    #[test]
    fn test_standard_load_not_oversized() {
        let load = LoadSpecification::new(40.0, 8.5, 8.5, 40_000.0);
        assert!(!load.is_oversized());
        assert!(!load.is_very_oversized());
    }

    #[test]
    fn test_oversized_thresholds_are_strict() {
        assert!(!LoadSpecification::new(65.0, 8.5, 13.5, 80_000.0).is_oversized());
        assert!(LoadSpecification::new(65.1, 8.5, 13.5, 80_000.0).is_oversized());
        assert!(LoadSpecification::new(40.0, 8.6, 8.0, 1_000.0).is_oversized());
        assert!(LoadSpecification::new(40.0, 8.0, 13.6, 1_000.0).is_oversized());
        assert!(LoadSpecification::new(40.0, 8.0, 8.0, 80_001.0).is_oversized());
    }

    #[test]
    fn test_very_oversized() {
        assert!(LoadSpecification::new(90.0, 8.0, 8.0, 1_000.0).is_very_oversized());
        assert!(LoadSpecification::new(40.0, 8.0, 8.0, 130_000.0).is_very_oversized());
        assert!(!LoadSpecification::new(80.0, 10.0, 14.0, 120_000.0).is_very_oversized());
    }
}
