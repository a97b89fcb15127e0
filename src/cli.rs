//! Command-line surface. Flags override the layered [`Config`].

use std::path::PathBuf;

use addrtree_core::config::{Config, OutputFormat};
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "addrtree",
    about = "Address registry extractor — point lookups and subtree path search"
)]
pub struct Cli {
    /// Config file to layer over the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Object catalog export (AS_ADDR_OBJ).
    #[arg(long, global = true)]
    pub objects: Option<PathBuf>,

    /// Administrative hierarchy export (AS_ADM_HIERARCHY).
    #[arg(long, global = true)]
    pub hierarchy: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Log at debug level to stderr (RUST_LOG takes precedence).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Runs `lookup` then `search` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Objects from the target set that are live after the cutoff date.
    Lookup {
        /// Target object id; repeat for several.
        #[arg(long = "id")]
        ids: Vec<u64>,
        /// Both validity bounds must be strictly after this date.
        #[arg(long)]
        cutoff: Option<NaiveDate>,
    },
    /// Full paths under the root object that contain a substring.
    Search {
        #[arg(long)]
        needle: Option<String>,
        /// Hierarchy level of the root object.
        #[arg(long)]
        root_level: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Load the layered config and apply command-line overrides on top.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref()).context("loading configuration")?;
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(objects) = &self.objects {
            config.data.objects = objects.clone();
        }
        if let Some(hierarchy) = &self.hierarchy {
            config.data.hierarchy = hierarchy.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
        match &self.command {
            Some(Command::Lookup { ids, cutoff }) => {
                if !ids.is_empty() {
                    config.lookup.object_ids = ids.clone();
                }
                if let Some(cutoff) = cutoff {
                    config.lookup.cutoff = *cutoff;
                }
            }
            Some(Command::Search { needle, root_level }) => {
                if let Some(needle) = needle {
                    config.search.needle = needle.clone();
                }
                if let Some(level) = root_level {
                    config.search.root_level = *level;
                }
            }
            None => {}
        }
    }
}
