//! Plain-text output for CLI commands

use std::io::Write;

use crate::link::{ApproachView, BodyView};

use super::errors::CliResult;

/// Message printed when a lookup finds nothing
pub const NO_MATCH: &str = "No matching NEOs exist in the database.";

/// Write a body and, when `verbose`, its recorded approaches
pub fn write_body<W: Write>(out: &mut W, body: &BodyView<'_>, verbose: bool) -> CliResult<()> {
    writeln!(out, "{}", body)?;
    if verbose {
        for approach in body.approaches() {
            writeln!(out, "- {}", approach)?;
        }
    }
    Ok(())
}

/// Write one approach per line
pub fn write_approaches<'db, W, I>(out: &mut W, approaches: I) -> CliResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachView<'db>>,
{
    let mut count = 0;
    for approach in approaches {
        writeln!(out, "{}", approach)?;
        count += 1;
    }
    Ok(count)
}

/// Write the no-match message
pub fn write_no_match<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", NO_MATCH)?;
    Ok(())
}
