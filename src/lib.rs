//! addrtree — address registry extractor.
//!
//! Answers two queries over a GAR registry export: point lookups of objects
//! live after a cutoff date, and a substring search over the full paths of
//! every node in the subtree under the top-level object. This crate wires the
//! [`addrtree_source`] reader and the [`addrtree_core`] queries to the CLI and
//! output layers, so integration tests can drive a whole run in-process.
//!
//! # Architecture
//!
//! ```text
//! XmlSource ──► RecordStore ──► point_lookup ─────────────────► output
//!                    │
//!                    └────────► resolve_root ─► build_tree ─► PathMatches ─► output
//! ```

pub mod cli;
pub mod output;

use std::io::Write;

use addrtree_core::config::{Config, OutputFormat};
use addrtree_core::{point_lookup, search_subtree, RecordSource, RecordStore, ResultRecord};
use addrtree_source::XmlSource;
use anyhow::Context;

use crate::cli::{Cli, Command};

/// Execute the command line against the configured exports, writing results to `out`.
///
/// A batch run prints the lookup section before the search starts, and a
/// failure in one query does not suppress the other's output. The first
/// failure is returned once both have run.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let source = XmlSource::new(&config.data.objects, &config.data.hierarchy);
    let format = config.output.format;

    match &cli.command {
        Some(Command::Lookup { .. }) => {
            let results = lookup(&config, &source)?;
            output::write_lookup(out, &results, format)?;
        }
        Some(Command::Search { .. }) => {
            let paths = search(&config, &source)?;
            output::write_paths(out, paths, format)?;
        }
        None => match format {
            OutputFormat::Text => {
                let lookup_failure = match lookup(&config, &source) {
                    Ok(results) => {
                        output::write_lookup(out, &results, format)?;
                        None
                    }
                    Err(err) => Some(err),
                };
                writeln!(out, "{}", output::SECTION_SEPARATOR)?;
                out.flush()?;
                let search_failure = match search(&config, &source) {
                    Ok(paths) => {
                        output::write_paths(out, paths, format)?;
                        None
                    }
                    Err(err) => Some(err),
                };
                out.flush()?;
                match (lookup_failure, search_failure) {
                    (Some(err), Some(other)) => {
                        tracing::error!(error = ?other, "subtree search failed");
                        return Err(err);
                    }
                    (Some(err), None) | (None, Some(err)) => return Err(err),
                    (None, None) => {}
                }
            }
            OutputFormat::Json => {
                let results = lookup(&config, &source)?;
                let paths = search(&config, &source)?;
                output::write_batch_json(out, &results, &paths)?;
            }
        },
    }
    out.flush()?;
    Ok(())
}

/// Query type 1 against the object catalog only.
pub fn lookup(config: &Config, source: &impl RecordSource) -> anyhow::Result<Vec<ResultRecord>> {
    let store = RecordStore::load_catalog(source).context("loading object catalog")?;
    Ok(point_lookup(&store, &config.lookup.query()))
}

/// Query type 2. No qualifying root is an empty result, not a failure.
pub fn search(config: &Config, source: &impl RecordSource) -> anyhow::Result<Vec<String>> {
    let store = RecordStore::load(source).context("loading registry exports")?;
    match search_subtree(&store, config.search.root_rule(), &config.search.needle) {
        Ok(paths) => Ok(paths),
        Err(err) if err.is_not_found() => {
            tracing::warn!(error = %err, "no subtree to search");
            Ok(Vec::new())
        }
        Err(err) => Err(err).context("building address tree"),
    }
}
