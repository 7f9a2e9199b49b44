//! End-to-end wizard tests
//!
//! Runs the `haulmatch` binary against a throwaway home directory so the
//! user's real configuration is never read or written.

use std::path::Path;
use std::process::{Command, Output};

use chrono::NaiveDate;
use serde_json::Value;
use tempfile::TempDir;

use haulmatch_app::app::{QuoteOptions, QuoteService};
use haulmatch_domain::model::LoadSpecification;
use haulmatch_domain::service::{MatchStrategy, RouteFinder};
use haulmatch_domain::TrailerCatalog;
use haulmatch_types::{Currency, DocumentKind};

fn haulmatch(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_haulmatch"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("failed to run haulmatch")
}

fn json_output(home: &Path, args: &[&str]) -> Value {
    let output = haulmatch(home, args);
    assert!(
        output.status.success(),
        "haulmatch {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

const STANDARD_LOAD: [&str; 8] = ["-l", "40", "-w", "8", "-H", "8", "-W", "40,000"];

#[test]
fn test_match_standard_load() {
    let home = TempDir::new().unwrap();
    let mut args = vec!["--format", "json", "match"];
    args.extend(STANDARD_LOAD);

    let result = json_output(home.path(), &args);
    assert_eq!(result["strategy"], "exact_fit");
    assert_eq!(result["exact"], true);
    assert!(!result["trailers"].as_array().unwrap().is_empty());
}

#[test]
fn test_match_extreme_length_load_that_fits() {
    let home = TempDir::new().unwrap();
    let args = ["-f", "json", "match", "-l", "150", "-w", "10", "-H", "10", "-W", "100000"];

    let output = haulmatch(home.path(), &args);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("No trailer holds"), "stderr: {}", stderr);

    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["strategy"], "extreme_length");
    assert_eq!(result["exact"], true);
    assert_eq!(result["trailers"][0]["id"], "schnabel-trailer");
}

#[test]
fn test_decimal_comma_width_fails() {
    let home = TempDir::new().unwrap();
    let output = haulmatch(home.path(), &["permits", "-l", "40", "-w", "8,5", "-H", "8", "-W", "40000"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("8,5"));
}

#[test]
fn test_quote_invoice_in_cad() {
    let home = TempDir::new().unwrap();
    let mut args = vec![
        "-f", "json", "-c", "cad", "quote", "--from", "nyc", "--to", "phl", "--kind", "invoice", "--date",
        "2024-05-01",
    ];
    args.extend(STANDARD_LOAD);

    let result = json_output(home.path(), &args);
    let doc = &result["document"];
    assert!(doc["reference"].as_str().unwrap().starts_with("INV-"));
    assert_eq!(doc["currency"], "CAD");
    assert_eq!(doc["issued_on"], "2024-05-01");
    assert_eq!(doc["valid_until"], "2024-05-08");
    assert!((doc["additional_services"].as_f64().unwrap() - 75.0 * 1.37).abs() < 1e-9);
    assert_eq!(result["alternatives"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_point_fails() {
    let home = TempDir::new().unwrap();
    let mut args = vec!["route", "--from", "nyc", "--to", "atlantis"];
    args.extend(STANDARD_LOAD);

    let output = haulmatch(home.path(), &args);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid route points"), "stderr: {}", stderr);
}

#[test]
fn test_bad_dimension_fails() {
    let home = TempDir::new().unwrap();
    let output = haulmatch(home.path(), &["permits", "-l", "long", "-w", "8", "-H", "8", "-W", "1000"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}

#[test]
fn test_configured_route_defaults() {
    let home = TempDir::new().unwrap();
    let saved = haulmatch(home.path(), &["config", "--set-origin", "hou", "--set-destination", "dal"]);
    assert!(saved.status.success());

    let mut args = vec!["-f", "json", "route"];
    args.extend(STANDARD_LOAD);
    let result = json_output(home.path(), &args);
    assert_eq!(result["route"]["id"], "route-hou-dal");
}

#[test]
fn test_alternate_csv_catalog() {
    let home = TempDir::new().unwrap();
    let catalog = home.path().join("fleet.csv");
    std::fs::write(
        &catalog,
        "id,name,type,max_length,max_width,max_height,max_weight\nshort-flat,Short Flatbed,flatbed,20,8.5,8.5,20000\n",
    )
    .unwrap();

    let mut args = vec!["-f", "json", "--catalog", catalog.to_str().unwrap(), "match"];
    args.extend(STANDARD_LOAD);
    let result = json_output(home.path(), &args);
    assert_eq!(result["strategy"], "closest_alternative");
    assert_eq!(result["trailers"][0]["id"], "short-flat");
}

#[test]
fn test_oversized_wizard_through_services() {
    let service = QuoteService::new(TrailerCatalog::builtin(), RouteFinder::builtin());
    let load = LoadSpecification::parse("90", "8'6\"", "9", "60,000").unwrap();

    let outcome = service
        .quote(
            &load,
            "hou",
            "dal",
            QuoteOptions::new()
                .with_kind(DocumentKind::Quote)
                .with_currency(Currency::Usd)
                .with_issue_date(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()),
        )
        .unwrap();

    assert_eq!(outcome.matches.strategy, MatchStrategy::VeryOversized);
    let doc = &outcome.document;
    assert!(doc.trailer.is_specialized_for("Overlength loads"));
    assert_eq!(doc.permits.pilot_cars, 2);
    assert!(doc.permits.police_escort);
    assert_eq!(doc.permits.total, 2200.0);
    let expected = doc.base_cost + doc.fuel_surcharge + doc.permits.total;
    assert!((doc.total - expected).abs() < 1e-9);
}
