//! Trailer catalog: a validated, read-only table of trailer specifications

use std::collections::HashSet;

use crate::model::{TrailerSpec, TrailerType};
use haulmatch_types::{Error, Result};

/// Specialization tags the matching engine looks for
pub const TAG_OVERLENGTH: &str = "Overlength loads";
pub const TAG_OVERSIZED: &str = "Oversized loads";
pub const TAG_OVERHEIGHT: &str = "Overheight loads";
pub const TAG_OVERWEIGHT: &str = "Overweight loads";

/// Immutable set of trailers the engine matches against.
///
/// Invariants: non-empty, unique ids, every capacity finite and > 0.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailerCatalog {
    trailers: Vec<TrailerSpec>,
}

impl TrailerCatalog {
    pub fn new(trailers: Vec<TrailerSpec>) -> Result<Self> {
        if trailers.is_empty() {
            return Err(Error::InvalidCatalog("catalog has no trailers".to_string()));
        }

        let mut seen = HashSet::new();
        for trailer in &trailers {
            if !seen.insert(trailer.id.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate trailer id '{}'",
                    trailer.id
                )));
            }
            let capacities = [
                ("max_length", trailer.max_length),
                ("max_width", trailer.max_width),
                ("max_height", trailer.max_height),
                ("max_weight", trailer.max_weight),
            ];
            for (field, value) in capacities {
                if !value.is_finite() || value <= 0.0 {
                    return Err(Error::InvalidCatalog(format!(
                        "trailer '{}' has non-positive {}: {}",
                        trailer.id, field, value
                    )));
                }
            }
        }

        Ok(Self { trailers })
    }

    /// The standard fleet
    pub fn builtin() -> Self {
        Self {
            trailers: builtin_trailers(),
        }
    }

    pub fn trailers(&self) -> &[TrailerSpec] {
        &self.trailers
    }

    pub fn get(&self, id: &str) -> Option<&TrailerSpec> {
        self.trailers.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.trailers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trailers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailerSpec> {
        self.trailers.iter()
    }
}

impl Default for TrailerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn trailer(
    id: &str,
    name: &str,
    trailer_type: TrailerType,
    envelope: [f64; 4],
    features: &[&str],
    specialized_for: &[&str],
) -> TrailerSpec {
    let [max_length, max_width, max_height, max_weight] = envelope;
    TrailerSpec {
        id: id.to_string(),
        name: name.to_string(),
        trailer_type,
        max_length,
        max_width,
        max_height,
        max_weight,
        features: features.iter().map(|f| f.to_string()).collect(),
        specialized_for: if specialized_for.is_empty() {
            None
        } else {
            Some(specialized_for.iter().map(|t| t.to_string()).collect())
        },
    }
}

fn builtin_trailers() -> Vec<TrailerSpec> {
    vec![
        trailer(
            "flatbed-48",
            "Standard Flatbed",
            TrailerType::Flatbed,
            [48.0, 8.5, 8.5, 48_000.0],
            &["Open deck", "Side loading", "Versatile cargo"],
            &[],
        ),
        trailer(
            "step-deck-53",
            "Step Deck",
            TrailerType::StepDeck,
            [53.0, 8.5, 10.0, 48_000.0],
            &["Lower deck height", "Tall cargo", "Two-level loading"],
            &[],
        ),
        trailer(
            "dry-van-53",
            "Dry Van",
            TrailerType::Van,
            [53.0, 8.5, 9.5, 45_000.0],
            &["Enclosed", "Weather protection", "Security"],
            &[],
        ),
        trailer(
            "reefer-53",
            "Refrigerated Trailer",
            TrailerType::Reefer,
            [53.0, 8.5, 9.5, 43_000.0],
            &["Temperature control", "Perishable goods", "Climate monitoring"],
            &[],
        ),
        trailer(
            "lowboy-48",
            "Lowboy",
            TrailerType::Lowboy,
            [48.0, 8.5, 11.5, 80_000.0],
            &["Low deck height", "Heavy machinery", "High clearance"],
            &[],
        ),
        trailer(
            "double-drop-53",
            "Double Drop Lowboy",
            TrailerType::Lowboy,
            [53.0, 8.5, 11.5, 100_000.0],
            &["Ultra-low deck height (18-24\")", "Tall equipment", "Heavy machinery"],
            &[TAG_OVERHEIGHT, "Construction equipment"],
        ),
        trailer(
            "rgn-basic",
            "Removable Gooseneck (RGN)",
            TrailerType::Rgn,
            [50.0, 8.5, 10.0, 150_000.0],
            &["Detachable front", "Ground-level loading", "Flexible configuration"],
            &["Heavy machinery", "Construction equipment", TAG_OVERSIZED],
        ),
        trailer(
            "rgn-multi-axle",
            "Multi-axle RGN",
            TrailerType::Rgn,
            [65.0, 10.0, 10.0, 200_000.0],
            &["7-13+ axles", "Weight distribution", "Heavy capacity"],
            &[TAG_OVERWEIGHT, "Industrial components", "Power plant equipment"],
        ),
        trailer(
            "extendable-flatbed",
            "Extendable Flatbed",
            TrailerType::Extendable,
            [80.0, 8.5, 8.5, 65_000.0],
            &["Extends to 80+ feet", "Telescoping trailer", "Length adjustment"],
            &[TAG_OVERLENGTH, "Wind turbine blades", "Bridge beams", "Long pipes"],
        ),
        trailer(
            "perimeter-trailer",
            "Perimeter Trailer",
            TrailerType::Perimeter,
            [53.0, 10.0, 14.0, 120_000.0],
            &["Extra-low deck (10\" clearance)", "Maximum height clearance", "Well design"],
            &["Extra tall machinery", TAG_OVERHEIGHT, "Construction equipment"],
        ),
        trailer(
            "schnabel-trailer",
            "Schnabel Trailer",
            TrailerType::Schnabel,
            [200.0, 16.0, 15.0, 500_000.0],
            &["Load becomes part of structure", "Hydraulic lifting", "Specialized configuration"],
            &["Power transformers", "Nuclear components", "Supermassive loads"],
        ),
    ]
}
