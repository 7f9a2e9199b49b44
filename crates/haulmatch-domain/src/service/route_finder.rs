//! Mock route finder
//!
//! Synthesizes a route between two known points from their coordinates.
//! Distances are straight-line degrees scaled to miles, not road distances.

use crate::model::{ComplianceRule, RoutePoint, RouteResult, RouteSegment, RuleKind, TrailerType};
use haulmatch_types::{Error, Result};

/// Rough miles per degree of latitude/longitude
pub const MILES_PER_DEGREE: f64 = 69.0;
/// Transit minutes per mile
pub const MINUTES_PER_MILE: f64 = 1.5;
/// Routes longer than this run into the hours-of-service window
pub const HOURS_OF_SERVICE_MILES: f64 = 500.0;

pub const RULE_WEIGHT_LIMIT: &str = "weight-limit-80k";
pub const RULE_HEIGHT_LIMIT: &str = "height-13-6";
pub const RULE_WIDTH_LIMIT: &str = "width-8-5";
pub const RULE_HOURS_OF_SERVICE: &str = "hos-14hr";

/// Synthetic detours offered next to the primary route:
/// (name, distance factor, time factor)
const ALTERNATIVE_DETOURS: [(&str, f64, f64); 2] = [
    ("alternate corridor", 1.08, 1.12),
    ("truck-friendly bypass", 1.15, 1.10),
];

/// Known points and compliance rules, injected rather than global
#[derive(Debug, Clone, PartialEq)]
pub struct RouteFinder {
    points: Vec<RoutePoint>,
    rules: Vec<ComplianceRule>,
}

impl RouteFinder {
    pub fn new(points: Vec<RoutePoint>, rules: Vec<ComplianceRule>) -> Self {
        Self { points, rules }
    }

    /// Sample US cities and highway rules
    pub fn builtin() -> Self {
        Self::new(builtin_points(), builtin_rules())
    }

    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    pub fn rules(&self) -> &[ComplianceRule] {
        &self.rules
    }

    pub fn point(&self, id: &str) -> Option<&RoutePoint> {
        self.points.iter().find(|p| p.id == id)
    }

    fn rule(&self, id: &str) -> Option<&ComplianceRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Build the route between two point ids for a load of the given
    /// weight (lbs), height and width (ft)
    pub fn find_route(
        &self,
        origin_id: &str,
        destination_id: &str,
        trailer_type: TrailerType,
        weight_lbs: f64,
        height_ft: f64,
        width_ft: f64,
    ) -> Result<RouteResult> {
        let (origin, destination) = match (self.point(origin_id), self.point(destination_id)) {
            (Some(o), Some(d)) => (o.clone(), d.clone()),
            _ => {
                return Err(Error::InvalidRoutePoints {
                    origin: origin_id.to_string(),
                    destination: destination_id.to_string(),
                })
            }
        };

        let distance = ((origin.lat - destination.lat).powi(2) + (origin.lng - destination.lng).powi(2)).sqrt()
            * MILES_PER_DEGREE;
        let time = distance * MINUTES_PER_MILE;

        let mut issues = Vec::new();
        let load_checks = [
            (weight_lbs > 80_000.0, RULE_WEIGHT_LIMIT),
            (height_ft > 13.5, RULE_HEIGHT_LIMIT),
            (width_ft > 8.5, RULE_WIDTH_LIMIT),
            (distance > HOURS_OF_SERVICE_MILES, RULE_HOURS_OF_SERVICE),
        ];
        for (triggered, rule_id) in load_checks {
            if triggered {
                if let Some(rule) = self.rule(rule_id) {
                    issues.push(rule.clone());
                }
            }
        }

        log::debug!(
            "Route {} -> {} for {} trailer: {:.1} mi, {} compliance issue(s)",
            origin.id,
            destination.id,
            trailer_type,
            distance,
            issues.len()
        );

        let segment = RouteSegment {
            id: format!("{}-{}", origin.id, destination.id),
            from: origin.clone(),
            to: destination.clone(),
            distance_miles: distance,
            estimated_minutes: time,
            restrictions: issues.clone(),
        };

        Ok(RouteResult {
            id: format!("route-{}-{}", origin.id, destination.id),
            name: format!("{} to {}", origin.name, destination.name),
            origin,
            destination,
            segments: vec![segment],
            total_distance: distance,
            total_time: time,
            compliance_issues: issues,
        })
    }

    /// Detour variants of `route`, longer by 8 to 15 percent.
    ///
    /// Load-related issues carry over; hours of service is re-checked
    /// against the longer distance.
    pub fn alternative_routes(&self, route: &RouteResult) -> Vec<RouteResult> {
        ALTERNATIVE_DETOURS
            .iter()
            .enumerate()
            .map(|(index, (label, distance_factor, time_factor))| {
                let distance = route.total_distance * distance_factor;
                let time = route.total_time * time_factor;

                let mut issues: Vec<ComplianceRule> = route
                    .compliance_issues
                    .iter()
                    .filter(|r| r.kind != RuleKind::Hours)
                    .cloned()
                    .collect();
                if distance > HOURS_OF_SERVICE_MILES {
                    if let Some(rule) = self.rule(RULE_HOURS_OF_SERVICE) {
                        issues.push(rule.clone());
                    }
                }

                let segment = RouteSegment {
                    id: format!("{}-{}-alt{}", route.origin.id, route.destination.id, index + 1),
                    from: route.origin.clone(),
                    to: route.destination.clone(),
                    distance_miles: distance,
                    estimated_minutes: time,
                    restrictions: issues.clone(),
                };

                RouteResult {
                    id: format!("{}-alt{}", route.id, index + 1),
                    name: format!("{} ({})", route.name, label),
                    origin: route.origin.clone(),
                    destination: route.destination.clone(),
                    segments: vec![segment],
                    total_distance: distance,
                    total_time: time,
                    compliance_issues: issues,
                }
            })
            .collect()
    }
}

impl Default for RouteFinder {
    fn default() -> Self {
        Self::builtin()
    }
}

fn point(id: &str, name: &str, lat: f64, lng: f64) -> RoutePoint {
    RoutePoint {
        id: id.to_string(),
        name: name.to_string(),
        lat,
        lng,
    }
}

fn builtin_points() -> Vec<RoutePoint> {
    vec![
        point("nyc", "New York, NY", 40.7128, -74.0060),
        point("lax", "Los Angeles, CA", 34.0522, -118.2437),
        point("chi", "Chicago, IL", 41.8781, -87.6298),
        point("hou", "Houston, TX", 29.7604, -95.3698),
        point("phl", "Philadelphia, PA", 39.9526, -75.1652),
        point("phx", "Phoenix, AZ", 33.4484, -112.0740),
        point("sfo", "San Francisco, CA", 37.7749, -122.4194),
        point("dal", "Dallas, TX", 32.7767, -96.7970),
    ]
}

fn rule(id: &str, name: &str, description: &str, kind: RuleKind) -> ComplianceRule {
    ComplianceRule {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind,
    }
}

fn builtin_rules() -> Vec<ComplianceRule> {
    vec![
        rule(
            RULE_WEIGHT_LIMIT,
            "80,000 lbs Weight Limit",
            "Maximum gross vehicle weight of 80,000 lbs on interstate highways",
            RuleKind::Weight,
        ),
        rule(
            RULE_HEIGHT_LIMIT,
            "13'6\" Height Limit",
            "Standard height limit for most US highways",
            RuleKind::Height,
        ),
        rule(
            RULE_WIDTH_LIMIT,
            "8'6\" Width Limit",
            "Standard width limit for most US highways",
            RuleKind::Width,
        ),
        rule(
            RULE_HOURS_OF_SERVICE,
            "14-Hour Driving Window",
            "Drivers may not drive beyond the 14th consecutive hour after coming on duty",
            RuleKind::Hours,
        ),
        rule(
            "hazmat-tunnel",
            "Hazmat Tunnel Restrictions",
            "Certain tunnels restrict hazardous materials",
            RuleKind::Hazmat,
        ),
    ]
}
