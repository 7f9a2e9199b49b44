//! Output formatting module

use serde_json::json;

use haulmatch_app::app::QuoteOutcome;
use haulmatch_domain::model::{ComplianceRule, LoadSpecification, PermitCostBreakdown, RoutePoint, RouteResult, TrailerSpec};
use haulmatch_domain::service::{format_distance, format_time, MatchResult};
use haulmatch_types::{OutputFormat, Result};

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_trailer_rows(trailers: &[TrailerSpec]) {
    println!(
        "{:<22} {:<28} {:<11} {:>7} {:>6} {:>6} {:>9}  Specialized for",
        "ID", "Name", "Type", "Len", "Wid", "Hgt", "Weight"
    );
    println!("{}", "-".repeat(110));
    for t in trailers {
        println!(
            "{:<22} {:<28} {:<11} {:>7.1} {:>6.1} {:>6.1} {:>9.0}  {}",
            t.id,
            t.name,
            t.trailer_type,
            t.max_length,
            t.max_width,
            t.max_height,
            t.max_weight,
            t.specialized_for
                .as_ref()
                .map(|tags| tags.join(", "))
                .unwrap_or_else(|| "-".to_string())
        );
    }
}

pub fn output_normalized(output_format: OutputFormat, input: &str, value: f64) -> Result<()> {
    if output_format == OutputFormat::Json {
        print_json(&json!({ "input": input, "value": value }))
    } else {
        if value.is_nan() {
            println!("{} -> not a number", input);
        } else {
            println!("{} -> {:.4}", input, value);
        }
        Ok(())
    }
}

pub fn output_trailers(output_format: OutputFormat, trailers: &[TrailerSpec]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(trailers);
    }

    if trailers.is_empty() {
        println!("No trailers found.");
        return Ok(());
    }
    print_trailer_rows(trailers);
    println!("\n{} trailer(s)", trailers.len());
    Ok(())
}

pub fn output_match(output_format: OutputFormat, load: &LoadSpecification, result: &MatchResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({
            "load": load,
            "oversized": load.is_oversized(),
            "very_oversized": load.is_very_oversized(),
            "exact": result.is_exact(),
            "strategy": result.strategy,
            "trailers": result.trailers,
        }));
    }

    println!("\nTrailer Recommendations");
    println!("=======================");
    println!("Load:     {}", load);
    if load.is_very_oversized() {
        println!("Class:    very oversized");
    } else if load.is_oversized() {
        println!("Class:    oversized");
    } else {
        println!("Class:    standard");
    }
    println!("Strategy: {}", result.strategy);
    if !result.is_exact() {
        println!("Note:     no trailer holds this load as-is; closest options shown");
    }
    println!();
    print_trailer_rows(&result.trailers);
    Ok(())
}

pub fn output_permits(output_format: OutputFormat, load: &LoadSpecification, permits: &PermitCostBreakdown) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "load": load, "permits": permits }));
    }

    let currency = permits.currency;
    println!("\nPermit Estimate");
    println!("===============");
    println!("Load:           {}", load);
    println!("Permit fee:     {:>10.0} {}", permits.permit_fee, currency);
    println!(
        "Pilot cars:     {:>10.0} {} ({} car(s))",
        permits.pilot_car_cost, currency, permits.pilot_cars
    );
    println!(
        "Police escort:  {:>10.0} {}{}",
        permits.police_escort_cost,
        currency,
        if permits.police_escort { " (required)" } else { "" }
    );
    println!("-------------------------------");
    println!("Total:          {:>10.0} {}", permits.total, currency);
    Ok(())
}

pub fn output_points(output_format: OutputFormat, points: &[RoutePoint], rules: &[ComplianceRule]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "points": points, "rules": rules }));
    }

    println!("{:<6} {:<20} {:>10} {:>11}", "ID", "Name", "Lat", "Lng");
    println!("{}", "-".repeat(50));
    for p in points {
        println!("{:<6} {:<20} {:>10.4} {:>11.4}", p.id, p.name, p.lat, p.lng);
    }

    println!("\nCompliance rules:");
    for r in rules {
        println!("  {:<18} {}: {}", r.id, r.name, r.description);
    }
    Ok(())
}

fn print_route_summary(route: &RouteResult) {
    println!("{}", route.name);
    println!("  Distance: {}", format_distance(route.total_distance));
    println!("  Time:     {}", format_time(route.total_time));
    if route.has_compliance_issues() {
        println!("  Compliance issues:");
        for rule in &route.compliance_issues {
            println!("    - {}", rule.name);
        }
    } else {
        println!("  Compliance issues: none");
    }
}

pub fn output_route(
    output_format: OutputFormat,
    trailer: &TrailerSpec,
    route: &RouteResult,
    alternatives: &[RouteResult],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({
            "trailer": trailer.id,
            "route": route,
            "alternatives": alternatives,
        }));
    }

    println!("\nRoute for {} ({})", trailer.name, trailer.id);
    println!("==========");
    print_route_summary(route);
    for alt in alternatives {
        println!();
        print_route_summary(alt);
    }
    Ok(())
}

pub fn output_quote(output_format: OutputFormat, outcome: &QuoteOutcome) -> Result<()> {
    let doc = &outcome.document;
    if output_format == OutputFormat::Json {
        return print_json(&json!({
            "document": doc,
            "strategy": outcome.matches.strategy,
            "alternatives": outcome.alternatives,
        }));
    }

    let currency = doc.currency;
    let title = format!("{} {}", doc.kind, doc.reference);
    println!("\n{}", title);
    println!("{}", "=".repeat(title.len()));
    println!("Issued:       {}", doc.issued_on);
    println!("Valid until:  {}", doc.valid_until);
    if let Some(ref customer) = doc.customer {
        println!("Customer:     {} <{}>", customer.full_name(), customer.email);
        println!("              {} / {}", customer.phone, customer.location);
    }
    println!();
    println!("Load:         {}", doc.load);
    println!("Trailer:      {} ({})", doc.trailer.name, doc.trailer.id);
    println!("Route:        {} -> {}", doc.route.origin, doc.route.destination);
    println!("Distance:     {}", format_distance(doc.route.distance_miles));
    println!("Transit:      {}", format_time(doc.route.time_minutes));
    for issue in &doc.route.compliance_issues {
        println!("Compliance:   {}", issue);
    }
    println!();
    println!("Mile rate:            {:>10.2} {}/mi", doc.mile_rate, currency);
    println!("Base cost:            {:>10.2} {}", doc.base_cost, currency);
    println!("Fuel surcharge:       {:>10.2} {}", doc.fuel_surcharge, currency);
    if doc.additional_services > 0.0 {
        println!("Additional services:  {:>10.2} {}", doc.additional_services, currency);
    }
    println!("Permits:              {:>10.2} {}", doc.permits.permit_fee, currency);
    if doc.permits.pilot_cars > 0 {
        println!(
            "Pilot cars ({}):       {:>10.2} {}",
            doc.permits.pilot_cars, doc.permits.pilot_car_cost, currency
        );
    }
    if doc.permits.police_escort {
        println!("Police escort:        {:>10.2} {}", doc.permits.police_escort_cost, currency);
    }
    println!("-------------------------------------------");
    println!("Total:                {:>10.2} {}", doc.total, currency);
    println!("\nMap: {}", doc.route.map_url);
    Ok(())
}
