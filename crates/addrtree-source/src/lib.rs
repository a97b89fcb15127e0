//! addrtree-source — registry XML export adapter for addrtree.
//!
//! [`XmlSource`] reads the object catalog (`OBJECT` rows) and the
//! administrative hierarchy (`ITEM` rows) from disk and decodes them with
//! [`addrtree_core::decode`]. Each load opens its file, streams it, and closes
//! it before returning, whatever the outcome.

pub mod xml;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use addrtree_core::decode::{decode_edges, decode_objects, RawRow};
use addrtree_core::{Dataset, Error, FlatHierarchyEdge, FlatObjectRecord, RecordSource};

pub use xml::{read_rows, ITEM_TAG, OBJECT_TAG};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },
}

/// The two registry export files.
#[derive(Debug, Clone)]
pub struct XmlSource {
    objects: PathBuf,
    hierarchy: PathBuf,
}

impl XmlSource {
    pub fn new(objects: impl Into<PathBuf>, hierarchy: impl Into<PathBuf>) -> Self {
        Self {
            objects: objects.into(),
            hierarchy: hierarchy.into(),
        }
    }
}

fn read_file(path: &Path, tag: &str) -> Result<Vec<RawRow>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_rows(BufReader::new(file), tag).map_err(|source| SourceError::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), tag, rows = rows.len(), "export read");
    Ok(rows)
}

impl RecordSource for XmlSource {
    fn load_objects(&self) -> addrtree_core::Result<Vec<FlatObjectRecord>> {
        let rows = read_file(&self.objects, OBJECT_TAG)
            .map_err(|e| Error::data_source(Dataset::Objects, e))?;
        decode_objects(rows)
    }

    fn load_edges(&self) -> addrtree_core::Result<Vec<FlatHierarchyEdge>> {
        let rows = read_file(&self.hierarchy, ITEM_TAG)
            .map_err(|e| Error::data_source(Dataset::Hierarchy, e))?;
        decode_edges(rows)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
