//! Test builders — ergonomic constructors for catalog rows, edges and stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

#![allow(dead_code)]

use addrtree_core::{FlatHierarchyEdge, FlatObjectRecord, Position, RecordStore};
use chrono::NaiveDate;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test dates are YYYY-MM-DD")
}

// ---------------------------------------------------------------------------
// ObjectBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`FlatObjectRecord`] fixtures. Defaults to a live,
/// level-8 street valid from 2010 to the registry's open-ended 2079-06-06.
///
/// ```rust
/// let record = ObjectBuilder::new(10, "Город", "X").level(1).build();
/// ```
pub struct ObjectBuilder {
    record: FlatObjectRecord,
}

impl ObjectBuilder {
    pub fn new(object_id: u64, type_name: &str, name: &str) -> Self {
        Self {
            record: FlatObjectRecord {
                object_id,
                name: name.to_string(),
                type_name: type_name.to_string(),
                valid_from: date("2010-01-01"),
                valid_to: date("2079-06-06"),
                is_current_version: true,
                is_active: true,
                level: 8,
            },
        }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.record.level = level;
        self
    }

    pub fn valid(mut self, from: &str, to: &str) -> Self {
        self.record.valid_from = date(from);
        self.record.valid_to = date(to);
        self
    }

    pub fn current(mut self, current: bool) -> Self {
        self.record.is_current_version = current;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.record.is_active = active;
        self
    }

    pub fn build(self) -> FlatObjectRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A live top-level record.
pub fn top(object_id: u64, type_name: &str, name: &str) -> FlatObjectRecord {
    ObjectBuilder::new(object_id, type_name, name).level(1).build()
}

/// A live level-8 record.
pub fn street(object_id: u64, type_name: &str, name: &str) -> FlatObjectRecord {
    ObjectBuilder::new(object_id, type_name, name).build()
}

/// Edge from catalog position `parent` to catalog position `child`.
pub fn edge(child: usize, parent: usize) -> FlatHierarchyEdge {
    FlatHierarchyEdge {
        edge_object_id: Position(child),
        parent_position: Position(parent),
    }
}

pub fn store(objects: Vec<FlatObjectRecord>, edges: Vec<FlatHierarchyEdge>) -> RecordStore {
    RecordStore::new(objects, edges)
}
