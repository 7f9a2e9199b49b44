//! Route and compliance type definitions

use serde::{Deserialize, Serialize};

/// Named origin/destination with coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Weight,
    Height,
    Width,
    Hours,
    Hazmat,
    Other,
}

/// Regulatory rule a route may run into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: RuleKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub id: String,
    pub from: RoutePoint,
    pub to: RoutePoint,
    /// Miles
    pub distance_miles: f64,
    /// Minutes
    pub estimated_minutes: f64,
    pub restrictions: Vec<ComplianceRule>,
}

/// Synthesized route between two named points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub id: String,
    pub name: String,
    pub origin: RoutePoint,
    pub destination: RoutePoint,
    pub segments: Vec<RouteSegment>,
    /// Miles
    pub total_distance: f64,
    /// Minutes
    pub total_time: f64,
    pub compliance_issues: Vec<ComplianceRule>,
}

impl RouteResult {
    pub fn has_compliance_issues(&self) -> bool {
        !self.compliance_issues.is_empty()
    }
}
