//! CLI command implementations
//!
//! Every command follows the same sequence:
//!
//! 1. Resolve configuration (defaults, file, flags)
//! 2. Load both source files
//! 3. Link and index them into a `Database`
//! 4. Run the lookup or query against it

use std::io::{self, Write};
use std::path::Path;

use crate::database::Database;
use crate::extract::{load_approaches, load_neos, LoadResult};
use crate::filters::{create_filters, limit};
use crate::observability::{
    log_database_ready, log_event_with_fields, Event, Logger, ObservationScope,
};
use crate::report::write_results;

use super::args::{Cli, Command, QueryArgs};
use super::config::Config;
use super::errors::CliResult;
use super::io::{write_approaches, write_body, write_no_match};

/// Run the parsed command, printing results to stdout
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::resolve(&cli)?;
    Logger::set_threshold(config.severity()?);

    let neo_file = config.neo_file.display().to_string();
    let cad_file = config.cad_file.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("cad_file", &cad_file),
            ("link_policy", config.append_policy().as_str()),
            ("neo_file", &neo_file),
        ],
    );

    let db = open_database(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Inspect {
            pdes,
            name,
            verbose,
        } => {
            inspect(&db, pdes.as_deref(), name.as_deref(), *verbose, &mut out)?;
        }
        Command::Query(args) => {
            query(&db, args, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn load_logged<T>(
    scope_name: &str,
    path: &Path,
    loader: fn(&Path) -> LoadResult<Vec<T>>,
) -> CliResult<Vec<T>> {
    let path_str = path.display().to_string();
    let scope = ObservationScope::with_fields(scope_name, &[("path", &path_str)]);

    match loader(path) {
        Ok(records) => {
            scope.complete(&[("records", &records.len().to_string())]);
            Ok(records)
        }
        Err(e) => {
            scope.fail(&e.to_string());
            Err(e.into())
        }
    }
}

/// Load both source files and build the database
pub fn open_database(config: &Config) -> CliResult<Database> {
    let neos = load_logged("LOAD_NEOS", &config.neo_file, load_neos)?;
    log_event_with_fields(Event::NeosLoaded, &[("count", &neos.len().to_string())]);

    let approaches = load_logged("LOAD_APPROACHES", &config.cad_file, load_approaches)?;
    log_event_with_fields(
        Event::ApproachesLoaded,
        &[("count", &approaches.len().to_string())],
    );

    let db = Database::with_policy(neos, approaches, config.append_policy());
    log_database_ready(&db.stats());

    Ok(db)
}

/// Look up one body and print it. Returns whether a body was found.
///
/// When both are given, the designation is tried first.
pub fn inspect<W: Write>(
    db: &Database,
    pdes: Option<&str>,
    name: Option<&str>,
    verbose: bool,
    out: &mut W,
) -> CliResult<bool> {
    let found = match pdes {
        Some(designation) => db.get_by_designation(designation),
        None => None,
    }
    .or_else(|| db.get_by_name(name));

    log_event_with_fields(
        Event::LookupComplete,
        &[
            ("found", if found.is_some() { "true" } else { "false" }),
            ("name", name.unwrap_or("")),
            ("pdes", pdes.unwrap_or("")),
        ],
    );

    match found {
        Some(body) => {
            write_body(out, &body, verbose)?;
            Ok(true)
        }
        None => {
            write_no_match(out)?;
            Ok(false)
        }
    }
}

/// Run a filtered query, printing results or writing a report.
/// Returns the number of results produced.
pub fn query<W: Write>(db: &Database, args: &QueryArgs, out: &mut W) -> CliResult<usize> {
    let filters = create_filters(&args.criteria());
    let described = filters
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let results = limit(db.query(&filters), args.limit);

    let count = match &args.outfile {
        Some(path) => {
            let count = write_results(results, path)?;
            log_event_with_fields(
                Event::ReportWritten,
                &[
                    ("path", &path.display().to_string()),
                    ("rows", &count.to_string()),
                ],
            );
            count
        }
        None => write_approaches(out, results)?,
    };

    log_event_with_fields(
        Event::QueryComplete,
        &[("filters", &described), ("returned", &count.to_string())],
    );

    Ok(count)
}
