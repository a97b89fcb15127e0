//! Point lookup — which of a set of objects are live after a cutoff date.
//!
//! A record qualifies when its id is targeted, **both** validity bounds are
//! strictly after the cutoff, and it is current and active. A window that
//! straddles the cutoff does not qualify. Results follow catalog scan order
//! and are not deduplicated: an id live in several rows yields several results.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::store::RecordStore;
use crate::types::{FlatObjectRecord, ResultRecord};

/// Selection criteria for a point lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub object_ids: HashSet<u64>,
    pub cutoff: NaiveDate,
}

impl LookupQuery {
    pub fn new(object_ids: impl IntoIterator<Item = u64>, cutoff: NaiveDate) -> Self {
        Self {
            object_ids: object_ids.into_iter().collect(),
            cutoff,
        }
    }

    pub fn matches(&self, record: &FlatObjectRecord) -> bool {
        self.object_ids.contains(&record.object_id)
            && record.valid_from > self.cutoff
            && record.valid_to > self.cutoff
            && record.is_live()
    }
}

pub fn point_lookup(store: &RecordStore, query: &LookupQuery) -> Vec<ResultRecord> {
    let results: Vec<ResultRecord> = store
        .scan_objects()
        .iter()
        .filter(|record| query.matches(record))
        .map(ResultRecord::from)
        .collect();
    tracing::debug!(
        targets = query.object_ids.len(),
        cutoff = %query.cutoff,
        matched = results.len(),
        "point lookup finished"
    );
    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
