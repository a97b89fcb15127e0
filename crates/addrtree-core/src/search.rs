//! Search layer — depth-first walk of an address tree yielding matching paths.
//!
//! Every node below the root gets a full path, `"{parent path}, {display name}"`,
//! starting from the root's display name. A node's subtree is walked before the
//! node's own path is tested, so for one branch deeper matches come out before
//! shallower ones. Siblings are visited in catalog order. Internal nodes are
//! tested too, not just leaves. The root's own name is never emitted.

use crate::error::Result;
use crate::hierarchy::{build_tree, resolve_root, RootRule};
use crate::store::RecordStore;
use crate::types::AddressNode;

const PATH_SEPARATOR: &str = ", ";

struct WalkFrame<'a> {
    path: String,
    children: std::slice::Iter<'a, AddressNode>,
    /// Whether `path` itself is tested once `children` are exhausted.
    test_self: bool,
}

/// Lazy, single-pass iterator over the full paths that contain a needle.
pub struct PathMatches<'a> {
    needle: String,
    stack: Vec<WalkFrame<'a>>,
}

impl<'a> PathMatches<'a> {
    pub fn new(root: &'a AddressNode, needle: impl Into<String>) -> Self {
        Self::with_prefix(root, root.display_name.clone(), needle)
    }

    /// Walk `root`'s children using `prefix` in place of the root's display name.
    pub fn with_prefix(
        root: &'a AddressNode,
        prefix: impl Into<String>,
        needle: impl Into<String>,
    ) -> Self {
        Self {
            needle: needle.into(),
            stack: vec![WalkFrame {
                path: prefix.into(),
                children: root.children.iter(),
                test_self: false,
            }],
        }
    }
}

impl Iterator for PathMatches<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.children.next() {
                Some(child) => {
                    let full_path = format!("{}{PATH_SEPARATOR}{}", frame.path, child.display_name);
                    if child.is_leaf() {
                        if full_path.contains(&self.needle) {
                            return Some(full_path);
                        }
                    } else {
                        self.stack.push(WalkFrame {
                            path: full_path,
                            children: child.children.iter(),
                            test_self: true,
                        });
                    }
                }
                None => {
                    let done = self.stack.pop()?;
                    if done.test_self && done.path.contains(&self.needle) {
                        return Some(done.path);
                    }
                }
            }
        }
    }
}

/// Resolve the root, build its subtree, and collect every path containing `needle`.
pub fn search_subtree(store: &RecordStore, rule: RootRule, needle: &str) -> Result<Vec<String>> {
    let root = resolve_root(store, rule)?;
    let tree = build_tree(store, root)?;
    let matches: Vec<String> = PathMatches::new(&tree, needle).collect();
    tracing::debug!(needle, matched = matches.len(), "subtree search finished");
    Ok(matches)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
