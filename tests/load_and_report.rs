//! Load-to-Report Tests
//!
//! End-to-end tests over real files:
//! - CSV and JSON sources load into a linked database
//! - Query results round out to CSV and JSON reports
//! - Missing or malformed sources fail with loader error codes

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

use neodb::cli::{open_database, query, CliErrorCode, Config, QueryArgs};
use neodb::extract::{load_approaches, load_neos};
use neodb::report::write_results;

// =============================================================================
// Helper Functions
// =============================================================================

const NEOS_CSV: &str = "\
id,spkid,full_name,pdes,name,prefix,neo,pha,H,G,M1,M2,K1,K2,PC,diameter,extent,albedo
a0000433,2000433,\"   433 Eros (A898 PA)\",433,Eros,,Y,N,10.4,0.46,,,,,,16.84,34.4x11.2x11.2,0.25
a0099942,2099942,\"99942 Apophis (2004 MN4)\",99942,Apophis,,Y,Y,19.09,0.24,,,,,,0.37,,0.23
bK20A00B,3840000,\"(2020 AB)\",2020 AB,,,Y,n,25.1,,,,,,,,,
";

fn cad_json() -> Value {
    json!({
        "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
        "count": "4",
        "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
        "data": [
            ["433", "659", "2415020.507", "1900-Jan-01 00:11", "0.0921795123769547", "0.09", "0.09", "3.96", "3.95", "< 00:01", "10.4"],
            ["99942", "199", "2462240.407", "2029-Apr-13 21:46", "0.000254", "0.000254", "0.000254", "7.42", null, "00:01", "19.1"],
            ["2020 AB", "5", "2458854.0", "2020-Jan-05 12:00", "0.02", "0.02", "0.02", "3.1", "3.0", "00:02", "25.1"],
            ["2010 XX", "3", "2455000.0", "2009-Jun-17 03:00", "0.4", "0.4", "0.4", "12.0", "11.9", "00:05", "22.0"]
        ]
    })
}

fn write_sources(dir: &Path) -> Config {
    let neo_file = dir.join("neos.csv");
    let cad_file = dir.join("cad.json");
    fs::write(&neo_file, NEOS_CSV).unwrap();
    fs::write(&cad_file, cad_json().to_string()).unwrap();

    Config {
        neo_file,
        cad_file,
        log_level: "error".to_string(),
        ..Config::default()
    }
}

// =============================================================================
// Loading Tests
// =============================================================================

/// Both files load, link, and index.
#[test]
fn test_load_and_link() {
    let dir = TempDir::new().unwrap();
    let config = write_sources(dir.path());

    let db = open_database(&config).unwrap();
    assert_eq!(db.body_count(), 3);
    assert_eq!(db.approach_count(), 4);

    let eros = db.get_by_name("Eros").unwrap();
    assert_eq!(eros.designation(), "433");
    assert_eq!(eros.approach_count(), 1);

    let unnamed = db.get_by_designation("2020 AB").unwrap();
    assert_eq!(unnamed.name(), None);
    assert!(!unnamed.has_known_diameter());
    assert!(!unnamed.hazardous());

    assert!(db.get_by_designation("99942").unwrap().hazardous());
    assert_eq!(db.stats().link.unmatched, 1);
}

/// Loader functions are usable directly.
#[test]
fn test_loaders_directly() {
    let dir = TempDir::new().unwrap();
    let config = write_sources(dir.path());

    let neos = load_neos(&config.neo_file).unwrap();
    let approaches = load_approaches(&config.cad_file).unwrap();
    assert_eq!(neos.len(), 3);
    assert_eq!(approaches.len(), 4);
    assert_eq!(approaches[0].distance, 0.0921795123769547);
}

/// A missing source file is a load failure, not a panic.
#[test]
fn test_missing_source_file() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        neo_file: dir.path().join("absent.csv"),
        cad_file: dir.path().join("absent.json"),
        log_level: "fatal".to_string(),
        ..Config::default()
    };

    let err = open_database(&config).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::LoadFailed);
    assert!(err.message().contains("NEODB_LOAD_IO"));
}

/// A malformed approach file reports the JSON loader code.
#[test]
fn test_malformed_approach_file() {
    let dir = TempDir::new().unwrap();
    let config = write_sources(dir.path());
    fs::write(&config.cad_file, "{\"fields\": [\"des\"], \"data\": [").unwrap();

    let err = open_database(&config).unwrap_err();
    assert!(err.message().contains("NEODB_LOAD_JSON"));
}

// =============================================================================
// Report Tests
// =============================================================================

fn report_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// JSON report nests the linked NEO and nulls the unlinked one.
#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let config = write_sources(dir.path());
    let db = open_database(&config).unwrap();

    let path = report_path(dir.path(), "out.json");
    let none: &[neodb::filters::AttributeFilter] = &[];
    assert_eq!(write_results(db.query(none), &path).unwrap(), 4);

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["datetime_utc"], json!("1900-01-01 00:11"));
    assert_eq!(entries[0]["distance_au"], json!(0.092179512));
    assert_eq!(entries[0]["neo"]["name"], json!("Eros"));
    assert_eq!(entries[2]["neo"]["diameter_km"], Value::Null);
    assert_eq!(entries[3]["neo"], Value::Null);
}

/// CSV report via the query command, with criteria and limit.
#[test]
fn test_csv_report_through_query() {
    let dir = TempDir::new().unwrap();
    let config = write_sources(dir.path());
    let db = open_database(&config).unwrap();

    let path = report_path(dir.path(), "out.csv");
    let args = QueryArgs {
        max_distance: Some(0.1),
        limit: Some(2),
        outfile: Some(path.clone()),
        ..QueryArgs::default()
    };

    let mut stdout = Vec::new();
    assert_eq!(query(&db, &args, &mut stdout).unwrap(), 2);
    assert!(stdout.is_empty());

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1900-01-01 00:11,0.092179512,3.960,433,Eros,16.840,false"));
    assert!(lines[2].starts_with("2029-04-13 21:46,0.000254000,7.420,99942,Apophis,0.370,true"));
}
