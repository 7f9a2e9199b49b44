//! Display helpers for distances, durations and the map preview

use crate::model::RoutePoint;

/// Stand-in key for the embedded map preview
pub const MAPS_API_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_MAPS_API_KEY";

pub fn format_distance(miles: f64) -> String {
    format!("{} miles", miles.round())
}

/// `"2 hours 5 minutes"`, `"45 minutes"`, `"1 hour"`
pub fn format_time(minutes: f64) -> String {
    let mut hours = (minutes / 60.0).floor() as u64;
    let mut mins = (minutes % 60.0).round() as u64;
    if mins == 60 {
        hours += 1;
        mins = 0;
    }

    let plural = |n: u64| if n == 1 { "" } else { "s" };
    match (hours, mins) {
        (0, m) => format!("{} minute{}", m, plural(m)),
        (h, 0) => format!("{} hour{}", h, plural(h)),
        (h, m) => format!("{} hour{} {} minute{}", h, plural(h), m, plural(m)),
    }
}

/// Embed URL for a driving-directions preview between two points
pub fn map_embed_url(origin: &RoutePoint, destination: &RoutePoint, api_key: Option<&str>) -> String {
    format!(
        "https://www.google.com/maps/embed/v1/directions?key={}&origin={},{}&destination={},{}&mode=driving",
        api_key.unwrap_or(MAPS_API_KEY_PLACEHOLDER),
        origin.lat,
        origin.lng,
        destination.lat,
        destination.lng
    )
}
