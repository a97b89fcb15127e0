//! Configuration types for addrtree.
//!
//! [`Config::load`] layers the built-in defaults, an optional TOML file, and
//! `ADDRTREE__*` environment variables. [`Config::defaults`] returns the same
//! defaults without touching the filesystem or environment (useful in tests).

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::hierarchy::RootRule;
use crate::lookup::LookupQuery;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
objects   = "data/AS_ADDR_OBJ.XML"
hierarchy = "data/AS_ADM_HIERARCHY.XML"

[lookup]
object_ids = [1418203, 1422396, 1447339, 1449398, 1452841, 1453195]
cutoff     = "2000-01-01"

[search]
needle     = "проезд"
root_level = 1

[output]
format = "text"
"#;

const ENV_PREFIX: &str = "ADDRTREE";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub lookup: LookupConfig,
    pub search: SearchConfig,
    pub output: OutputConfig,
}

/// `[data]` — where the two registry exports live.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub objects: PathBuf,
    pub hierarchy: PathBuf,
}

/// `[lookup]` — point lookup targets.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    pub object_ids: Vec<u64>,
    pub cutoff: NaiveDate,
}

impl LookupConfig {
    pub fn query(&self) -> LookupQuery {
        LookupQuery::new(self.object_ids.iter().copied(), self.cutoff)
    }
}

/// `[search]` — subtree search parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub needle: String,
    pub root_level: u32,
}

impl SearchConfig {
    pub fn root_rule(&self) -> RootRule {
        RootRule {
            level: self.root_level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the defaults, then `path` if given (it must exist) or the user
    /// config file if present, then `ADDRTREE__SECTION__KEY` overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(user_config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("lookup.object_ids")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn user_config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("addrtree")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.data.objects, PathBuf::from("data/AS_ADDR_OBJ.XML"));
        assert_eq!(cfg.lookup.object_ids.len(), 6);
        assert_eq!(cfg.lookup.cutoff, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(cfg.search.needle, "проезд");
        assert_eq!(cfg.search.root_rule(), RootRule::default());
        assert_eq!(cfg.output.format, OutputFormat::Text);
    }

    #[test]
    fn lookup_section_builds_query() {
        let cfg = Config::defaults();
        let query = cfg.lookup.query();
        assert!(query.object_ids.contains(&1418203));
        assert_eq!(query.cutoff, cfg.lookup.cutoff);
    }

    #[test]
    fn environment_overrides_file_and_splits_id_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nneedle = \"улица\"\nroot_level = 3\n").unwrap();

        std::env::set_var("ADDRTREE__SEARCH__NEEDLE", "Садов");
        std::env::set_var("ADDRTREE__LOOKUP__OBJECT_IDS", "1000,2001");
        let loaded = Config::load(Some(&path));
        std::env::remove_var("ADDRTREE__SEARCH__NEEDLE");
        std::env::remove_var("ADDRTREE__LOOKUP__OBJECT_IDS");

        let cfg = loaded.unwrap();
        assert_eq!(cfg.search.needle, "Садов");
        assert_eq!(cfg.search.root_level, 3);
        assert_eq!(cfg.lookup.object_ids, vec![1000, 2001]);
        assert_eq!(cfg.lookup.cutoff, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn explicit_config_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
