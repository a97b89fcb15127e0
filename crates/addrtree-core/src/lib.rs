//! addrtree-core — record store, hierarchy builder and path walker.
//!
//! The crate works over one immutable snapshot of a registry export: a flat
//! object catalog and a flat hierarchy index whose edges point at catalog rows
//! by *position*. It answers two queries and performs no I/O of its own
//! beyond reading configuration.
//!
//! # Architecture
//!
//! ```text
//! RecordSource ──► RecordStore ──┬──► point_lookup ──► ResultRecord*
//!                                │
//!                                └──► resolve_root ──► build_tree ──► PathMatches
//! ```
//!
//! Each query is single-threaded and synchronous. The tree is built fresh per
//! query and dropped with it.

pub mod config;
pub mod decode;
pub mod error;
pub mod hierarchy;
pub mod lookup;
pub mod search;
pub mod store;
pub mod types;

pub use error::{Dataset, Error, Result};
pub use hierarchy::{build_tree, resolve_children, resolve_root, RootRule};
pub use lookup::{point_lookup, LookupQuery};
pub use search::{search_subtree, PathMatches};
pub use store::{RecordSource, RecordStore};
pub use types::{AddressNode, FlatHierarchyEdge, FlatObjectRecord, Position, ResultRecord};
