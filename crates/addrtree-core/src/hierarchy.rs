//! Hierarchy builder — reconstructs an address subtree from the flat datasets.
//!
//! Hierarchy edges name both ends by catalog [`Position`]. Children of a node
//! are found by scanning the edge list for its position, then scanning the
//! catalog for those positions, so children come out in catalog order.
//!
//! Only the "actual" flag (`is_current_version`) gates root and children
//! resolution. `is_active` is not consulted here, unlike in the point lookup.
//!
//! The tree is assembled with an explicit work-list rather than recursion, so
//! depth is bounded by memory instead of the call stack. A position that shows
//! up again while it is still being expanded fails with
//! [`Error::CycleDetected`]. A position reachable from two different parents
//! is not a cycle and is built under each of them.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::store::RecordStore;
use crate::types::{AddressNode, Position};

/// Which record roots a subtree search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootRule {
    pub level: u32,
}

impl Default for RootRule {
    fn default() -> Self {
        Self { level: 1 }
    }
}

/// Position of the first actual record at `rule.level`, in scan order.
pub fn resolve_root(store: &RecordStore, rule: RootRule) -> Result<Position> {
    let position = store
        .positioned_objects()
        .find(|(_, record)| record.level == rule.level && record.is_actual())
        .map(|(position, _)| position)
        .ok_or(Error::RootNotFound { level: rule.level })?;
    tracing::debug!(%position, level = rule.level, "root resolved");
    Ok(position)
}

/// Positions of the actual children of `parent`, in catalog scan order.
///
/// Edge targets that do not exist in the catalog, or whose record is not
/// actual, are dropped without leaving a placeholder.
pub fn resolve_children(store: &RecordStore, parent: Position) -> Vec<Position> {
    let wanted: HashSet<Position> = store
        .scan_hierarchy_edges()
        .iter()
        .filter(|edge| edge.parent_position == parent)
        .map(|edge| edge.edge_object_id)
        .collect();
    if wanted.is_empty() {
        return Vec::new();
    }
    store
        .positioned_objects()
        .filter(|(position, record)| wanted.contains(position) && record.is_actual())
        .map(|(position, _)| position)
        .collect()
}

// ---------------------------------------------------------------------------
// Tree assembly
// ---------------------------------------------------------------------------

/// A node under construction and the children still to expand.
struct Frame {
    position: Position,
    node: AddressNode,
    pending: std::vec::IntoIter<Position>,
}

impl Frame {
    fn open(store: &RecordStore, position: Position) -> Result<Self> {
        let record = store.record(position).ok_or(Error::PositionOutOfRange {
            position,
            len: store.object_count(),
        })?;
        Ok(Self {
            position,
            node: AddressNode::from(record),
            pending: resolve_children(store, position).into_iter(),
        })
    }
}

/// Build the subtree rooted at the catalog row at `root`.
pub fn build_tree(store: &RecordStore, root: Position) -> Result<AddressNode> {
    let mut root_frame = Frame::open(store, root)?;
    let mut stack: Vec<Frame> = Vec::new();
    let mut on_path: HashSet<Position> = HashSet::from([root]);

    loop {
        let current = match stack.last_mut() {
            Some(frame) => frame,
            None => &mut root_frame,
        };
        match current.pending.next() {
            Some(child) => {
                if !on_path.insert(child) {
                    return Err(Error::CycleDetected { position: child });
                }
                tracing::trace!(parent = %current.position, %child, "expanding child");
                stack.push(Frame::open(store, child)?);
            }
            None => {
                let Some(done) = stack.pop() else { break };
                on_path.remove(&done.position);
                let parent = match stack.last_mut() {
                    Some(frame) => frame,
                    None => &mut root_frame,
                };
                parent.node.children.push(done.node);
            }
        }
    }

    tracing::debug!(
        %root,
        nodes = root_frame.node.node_count(),
        "address tree built"
    );
    Ok(root_frame.node)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
