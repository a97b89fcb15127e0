//! Core types for addrtree-core.
//!
//! This module defines the flat rows loaded from the registry export
//! ([`FlatObjectRecord`], [`FlatHierarchyEdge`]), the [`Position`] newtype the
//! hierarchy uses as its foreign key, and the query outputs ([`ResultRecord`],
//! [`AddressNode`]).

use chrono::NaiveDate;
use serde::Serialize;

/// Zero-based index of a record within its dataset's scan order.
///
/// Hierarchy edges refer to catalog rows by position, never by
/// [`FlatObjectRecord::object_id`]. Keeping the two in distinct types makes it
/// impossible to compare one against the other by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

impl Position {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Position(index)
    }
}

/// One row of the object catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatObjectRecord {
    /// Registry object id. Not unique: the same id recurs across validity periods.
    pub object_id: u64,
    pub name: String,
    pub type_name: String,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub is_current_version: bool,
    pub is_active: bool,
    /// Hierarchy depth, 1 is the top of the administrative tree.
    pub level: u32,
}

impl FlatObjectRecord {
    /// `"{type_name} {name}"`, or just the name when the type is empty.
    pub fn display_name(&self) -> String {
        if self.type_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.type_name, self.name)
        }
    }

    /// The "actual" flag used by root and children resolution.
    pub fn is_actual(&self) -> bool {
        self.is_current_version
    }

    /// Current version and active: a live address.
    pub fn is_live(&self) -> bool {
        self.is_current_version && self.is_active
    }
}

/// One row of the adjacency index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatHierarchyEdge {
    /// Catalog position of the child (the export calls this column `OBJECTID`).
    pub edge_object_id: Position,
    /// Catalog position of the parent.
    pub parent_position: Position,
}

/// A matched object returned by the point lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub object_id: u64,
    pub type_name: String,
    pub name: String,
}

impl From<&FlatObjectRecord> for ResultRecord {
    fn from(record: &FlatObjectRecord) -> Self {
        Self {
            object_id: record.object_id,
            type_name: record.type_name.clone(),
            name: record.name.clone(),
        }
    }
}

impl std::fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} {}", self.object_id, self.type_name, self.name)
    }
}

/// A node of the reconstructed address tree. Children are owned exclusively
/// and kept in catalog scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressNode {
    pub object_id: u64,
    pub display_name: String,
    pub children: Vec<AddressNode>,
}

impl AddressNode {
    pub fn new(object_id: u64, display_name: impl Into<String>) -> Self {
        Self {
            object_id,
            display_name: display_name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<AddressNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

impl From<&FlatObjectRecord> for AddressNode {
    fn from(record: &FlatObjectRecord) -> Self {
        AddressNode::new(record.object_id, record.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
