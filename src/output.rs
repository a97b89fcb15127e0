//! Output — renders query results to a writer. The core never prints.

use std::io::{self, Write};

use addrtree_core::config::OutputFormat;
use addrtree_core::ResultRecord;

/// Printed between the lookup and search sections of a batch run.
pub const SECTION_SEPARATOR: &str = "====================================";

/// One `"{object_id}: {type_name} {name}"` line per result, or a JSON array.
pub fn write_lookup<W: Write>(
    out: &mut W,
    results: &[ResultRecord],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for record in results {
                writeln!(out, "{record}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// One path per line as the walk produces it, or a JSON array.
pub fn write_paths<W, I>(out: &mut W, paths: I, format: OutputFormat) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    match format {
        OutputFormat::Text => {
            for path in paths {
                writeln!(out, "{path}")?;
            }
        }
        OutputFormat::Json => {
            let paths: Vec<String> = paths.into_iter().collect();
            serde_json::to_writer_pretty(&mut *out, &paths)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Both sections of a batch run as one JSON document.
pub fn write_batch_json<W: Write>(
    out: &mut W,
    results: &[ResultRecord],
    paths: &[String],
) -> io::Result<()> {
    let doc = serde_json::json!({
        "lookup": results,
        "search": paths,
    });
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}
