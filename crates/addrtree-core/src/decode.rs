//! Decoder — turns attribute rows from the registry export into typed flat records.
//!
//! Data sources only know how to produce ordered rows of named string
//! attributes ([`RawRow`]). Conversion to semantic types lives here so every
//! source applies the same rules: decimal integers, ISO dates, and `"1"`/`"0"`
//! booleans. Conversion is fail-fast and reports the exact field.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{Dataset, Error, Result};
use crate::types::{FlatHierarchyEdge, FlatObjectRecord, Position};

// ---------------------------------------------------------------------------
// Attribute names
// ---------------------------------------------------------------------------

pub const OBJECT_ID: &str = "OBJECTID";
pub const NAME: &str = "NAME";
pub const TYPE_NAME: &str = "TYPENAME";
pub const START_DATE: &str = "STARTDATE";
pub const END_DATE: &str = "ENDDATE";
pub const IS_ACTUAL: &str = "ISACTUAL";
pub const IS_ACTIVE: &str = "ISACTIVE";
pub const LEVEL: &str = "LEVEL";
pub const PARENT_OBJ_ID: &str = "PARENTOBJID";

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// One flat row as read from a data source: its position in the dataset plus
/// its attributes by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub position: Position,
    attrs: HashMap<String, String>,
}

impl RawRow {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            attrs: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

struct Fields<'a> {
    row: &'a RawRow,
    dataset: Dataset,
}

impl<'a> Fields<'a> {
    fn malformed(&self, field: &'static str, expected: &'static str) -> Error {
        Error::MalformedRecord {
            dataset: self.dataset,
            position: self.row.position,
            field,
            value: self.row.get(field).map(str::to_string),
            expected,
        }
    }

    fn text(&self, field: &'static str) -> Result<&'a str> {
        self.row
            .get(field)
            .ok_or_else(|| self.malformed(field, "present"))
    }

    fn integer<T: std::str::FromStr>(&self, field: &'static str) -> Result<T> {
        self.text(field)?
            .trim()
            .parse()
            .map_err(|_| self.malformed(field, "a non-negative integer"))
    }

    fn date(&self, field: &'static str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(self.text(field)?.trim(), "%Y-%m-%d")
            .map_err(|_| self.malformed(field, "a YYYY-MM-DD date"))
    }

    fn flag(&self, field: &'static str) -> Result<bool> {
        match self.text(field)?.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            _ => Err(self.malformed(field, "\"0\" or \"1\"")),
        }
    }
}

// ---------------------------------------------------------------------------
// Decoders
// ---------------------------------------------------------------------------

/// Decode one `OBJECT` row of the object catalog.
pub fn decode_object(row: &RawRow) -> Result<FlatObjectRecord> {
    let f = Fields {
        row,
        dataset: Dataset::Objects,
    };
    Ok(FlatObjectRecord {
        object_id: f.integer(OBJECT_ID)?,
        name: f.text(NAME)?.to_string(),
        type_name: f.text(TYPE_NAME)?.to_string(),
        valid_from: f.date(START_DATE)?,
        valid_to: f.date(END_DATE)?,
        is_current_version: f.flag(IS_ACTUAL)?,
        is_active: f.flag(IS_ACTIVE)?,
        level: f.integer(LEVEL)?,
    })
}

/// Decode one `ITEM` row of the hierarchy index.
///
/// Rows with no `PARENTOBJID` (top-level rows) can never match a parent
/// position and decode to `None`.
pub fn decode_edge(row: &RawRow) -> Result<Option<FlatHierarchyEdge>> {
    let f = Fields {
        row,
        dataset: Dataset::Hierarchy,
    };
    match row.get(PARENT_OBJ_ID).map(str::trim) {
        None | Some("") => {
            tracing::debug!(position = %row.position, "hierarchy row without parent skipped");
            Ok(None)
        }
        Some(_) => Ok(Some(FlatHierarchyEdge {
            edge_object_id: Position(f.integer(OBJECT_ID)?),
            parent_position: Position(f.integer(PARENT_OBJ_ID)?),
        })),
    }
}

/// Decode a whole catalog, keeping scan order.
pub fn decode_objects<I>(rows: I) -> Result<Vec<FlatObjectRecord>>
where
    I: IntoIterator<Item = RawRow>,
{
    rows.into_iter().map(|row| decode_object(&row)).collect()
}

/// Decode a whole hierarchy index, keeping scan order and dropping parentless rows.
pub fn decode_edges<I>(rows: I) -> Result<Vec<FlatHierarchyEdge>>
where
    I: IntoIterator<Item = RawRow>,
{
    rows.into_iter()
        .filter_map(|row| decode_edge(&row).transpose())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
