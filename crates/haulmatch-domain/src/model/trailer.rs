//! Trailer specification type definitions

use serde::{Deserialize, Serialize};

use super::LoadSpecification;

/// Trailer category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailerType {
    Flatbed,
    StepDeck,
    Lowboy,
    Van,
    Reefer,
    Rgn,
    Extendable,
    Perimeter,
    Schnabel,
    #[serde(other)]
    Other,
}

impl TrailerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailerType::Flatbed => "flatbed",
            TrailerType::StepDeck => "step-deck",
            TrailerType::Lowboy => "lowboy",
            TrailerType::Van => "van",
            TrailerType::Reefer => "reefer",
            TrailerType::Rgn => "rgn",
            TrailerType::Extendable => "extendable",
            TrailerType::Perimeter => "perimeter",
            TrailerType::Schnabel => "schnabel",
            TrailerType::Other => "other",
        }
    }

    /// Parse a category name; unknown names map to `Other`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "flatbed" => TrailerType::Flatbed,
            "step-deck" | "stepdeck" => TrailerType::StepDeck,
            "lowboy" => TrailerType::Lowboy,
            "van" => TrailerType::Van,
            "reefer" => TrailerType::Reefer,
            "rgn" => TrailerType::Rgn,
            "extendable" => TrailerType::Extendable,
            "perimeter" => TrailerType::Perimeter,
            "schnabel" => TrailerType::Schnabel,
            _ => TrailerType::Other,
        }
    }
}

impl std::fmt::Display for TrailerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static catalog entry: capacity envelope plus descriptive tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailerSpec {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub trailer_type: TrailerType,
    /// Maximum load length (ft)
    pub max_length: f64,
    /// Maximum load width (ft)
    pub max_width: f64,
    /// Maximum load height (ft)
    pub max_height: f64,
    /// Maximum load weight (lbs)
    pub max_weight: f64,
    #[serde(default)]
    pub features: Vec<String>,
    /// Use cases this trailer is purpose-built for; `None` is general purpose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialized_for: Option<Vec<String>>,
}

impl TrailerSpec {
    pub fn is_specialized(&self) -> bool {
        self.specialized_for.is_some()
    }

    pub fn is_specialized_for(&self, tag: &str) -> bool {
        self.specialized_for
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// All four load values are within this trailer's envelope
    pub fn fits(&self, load: &LoadSpecification) -> bool {
        load.length_ft <= self.max_length
            && load.width_ft <= self.max_width
            && load.height_ft <= self.max_height
            && load.weight_lbs <= self.max_weight
    }
}
