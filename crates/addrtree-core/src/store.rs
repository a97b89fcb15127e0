//! Store — immutable snapshot of the two registry datasets for one query.
//!
//! Rows are kept in source scan order and exposed for linear scan only. The
//! catalog's `Vec` index *is* the position → record mapping that hierarchy
//! edges point into; [`RecordStore::record`] is the only way to follow one.

use crate::error::Result;
use crate::types::{FlatHierarchyEdge, FlatObjectRecord, Position};

/// Anything that can produce the two flat datasets in on-disk order.
///
/// Implementations open and release their underlying resources within each
/// call; a failure is reported as [`Error::DataSource`](crate::Error::DataSource)
/// or [`Error::MalformedRecord`](crate::Error::MalformedRecord).
pub trait RecordSource {
    fn load_objects(&self) -> Result<Vec<FlatObjectRecord>>;
    fn load_edges(&self) -> Result<Vec<FlatHierarchyEdge>>;
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    objects: Vec<FlatObjectRecord>,
    edges: Vec<FlatHierarchyEdge>,
}

impl RecordStore {
    pub fn new(objects: Vec<FlatObjectRecord>, edges: Vec<FlatHierarchyEdge>) -> Self {
        Self { objects, edges }
    }

    /// Load both datasets. Used by subtree searches.
    pub fn load(source: &impl RecordSource) -> Result<Self> {
        let objects = source.load_objects()?;
        let edges = source.load_edges()?;
        tracing::debug!(
            objects = objects.len(),
            edges = edges.len(),
            "record store loaded"
        );
        Ok(Self::new(objects, edges))
    }

    /// Load the object catalog only. Point lookups never touch the hierarchy.
    pub fn load_catalog(source: &impl RecordSource) -> Result<Self> {
        let objects = source.load_objects()?;
        tracing::debug!(objects = objects.len(), "object catalog loaded");
        Ok(Self::new(objects, Vec::new()))
    }

    /// All catalog rows in original file order.
    pub fn scan_objects(&self) -> &[FlatObjectRecord] {
        &self.objects
    }

    /// Catalog rows paired with their positions.
    pub fn positioned_objects(
        &self,
    ) -> impl Iterator<Item = (Position, &FlatObjectRecord)> + '_ {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, record)| (Position(i), record))
    }

    /// All hierarchy rows in original file order.
    pub fn scan_hierarchy_edges(&self) -> &[FlatHierarchyEdge] {
        &self.edges
    }

    /// The catalog row at `position`, if the current load has one.
    pub fn record(&self, position: Position) -> Option<&FlatObjectRecord> {
        self.objects.get(position.index())
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
