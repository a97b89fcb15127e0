//! Error taxonomy for addrtree-core.
//!
//! Every failure is local to one query. Nothing is retried and nothing needs
//! rolling back: the caller gets the error and the snapshot is dropped.

use crate::types::Position;

/// Which of the two registry datasets a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Objects,
    Hierarchy,
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dataset::Objects => write!(f, "object catalog"),
            Dataset::Hierarchy => write!(f, "hierarchy index"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset is missing, unreadable, or not shaped like flat records.
    #[error("{dataset} unavailable")]
    DataSource {
        dataset: Dataset,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A single field could not be converted to its semantic type.
    /// Loading is fail-fast: the first such field aborts the query.
    #[error(
        "{dataset} record {position}: field {field} = {} is not {expected}",
        shown(.value)
    )]
    MalformedRecord {
        dataset: Dataset,
        position: Position,
        field: &'static str,
        value: Option<String>,
        expected: &'static str,
    },

    /// No record satisfies the root-selection rule.
    #[error("no actual object at level {level} to root the hierarchy")]
    RootNotFound { level: u32 },

    /// A caller-supplied position does not exist in the loaded catalog.
    #[error("position {position} is outside the object catalog ({len} records)")]
    PositionOutOfRange { position: Position, len: usize },

    /// The hierarchy reaches `position` again while still expanding it.
    #[error("hierarchy cycle: position {position} is its own ancestor")]
    CycleDetected { position: Position },
}

impl Error {
    pub fn data_source(
        dataset: Dataset,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Error::DataSource {
            dataset,
            source: source.into(),
        }
    }

    /// `true` for outcomes the CLI reports as an empty result rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::RootNotFound { .. })
    }
}

fn shown(value: &Option<String>) -> String {
    match value {
        Some(value) => format!("\"{value}\""),
        None => "missing".to_string(),
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
