//! CLI argument definitions using clap
//!
//! Commands:
//! - neodb inspect (--pdes <designation> | --name <name>) [--verbose]
//! - neodb query [criteria...] [--limit <n>] [--outfile <path>]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::filters::FilterCriteria;

/// neodb - explore near-Earth objects and their close approaches
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the NEO CSV file (overrides config)
    #[arg(long, global = true)]
    pub neofile: Option<PathBuf>,

    /// Path to the close-approach JSON file (overrides config)
    #[arg(long, global = true)]
    pub cadfile: Option<PathBuf>,

    /// Record every approach in its body's approach list, not just the first
    #[arg(long, global = true)]
    pub link_all: bool,

    /// Minimum log severity (trace, info, warn, error, fatal)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up one NEO by designation or name
    Inspect {
        /// Primary designation
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        pdes: Option<String>,

        /// IAU name
        #[arg(long)]
        name: Option<String>,

        /// Also list the NEO's recorded close approaches
        #[arg(short, long)]
        verbose: bool,
    },

    /// Query close approaches matching all given criteria
    Query(QueryArgs),
}

/// Query criteria and output options
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Approaches on this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start_date: Option<NaiveDate>,

    /// Approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance (au)
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance (au)
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum approach velocity (km/s)
    #[arg(long)]
    pub min_velocity: Option<f64>,

    /// Maximum approach velocity (km/s)
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter (km)
    #[arg(long)]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter (km)
    #[arg(long)]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 for no limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to this .csv or .json file instead of stdout
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    /// Convert the criteria flags into filter criteria
    pub fn criteria(&self) -> FilterCriteria {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        FilterCriteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from(["neodb", "inspect", "--pdes", "433", "-v"]).unwrap();
        match cli.command {
            Command::Inspect { pdes, name, verbose } => {
                assert_eq!(pdes.as_deref(), Some("433"));
                assert_eq!(name, None);
                assert!(verbose);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_inspect_requires_target() {
        assert!(Cli::try_parse_from(["neodb", "inspect"]).is_err());
        assert!(Cli::try_parse_from(["neodb", "inspect", "--pdes", "433", "--name", "Eros"]).is_err());
    }

    #[test]
    fn test_parse_query_criteria() {
        let cli = Cli::try_parse_from([
            "neodb",
            "query",
            "--start-date",
            "2020-01-01",
            "--max-distance",
            "0.1",
            "--not-hazardous",
            "--limit",
            "5",
            "--link-all",
        ])
        .unwrap();
        assert!(cli.link_all);

        let Command::Query(args) = cli.command else {
            panic!("expected query");
        };
        let criteria = args.criteria();
        assert_eq!(criteria.start_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(criteria.distance_max, Some(0.1));
        assert_eq!(criteria.hazardous, Some(false));
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn test_hazard_flags_conflict() {
        assert!(Cli::try_parse_from(["neodb", "query", "--hazardous", "--not-hazardous"]).is_err());
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(Cli::try_parse_from(["neodb", "query", "--date", "2020-Jan-01"]).is_err());
    }
}
