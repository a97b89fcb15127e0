//! Streaming reader for the flat registry XML exports.
//!
//! Both exports are a single root element holding one empty element per row,
//! with every field stored as an attribute:
//!
//! ```xml
//! <ADDRESSOBJECTS>
//!   <OBJECT OBJECTID="1418203" NAME="Ленина" TYPENAME="ул" LEVEL="8" ... />
//! </ADDRESSOBJECTS>
//! ```
//!
//! Rows are numbered by their order among elements with the same tag; that
//! number is the row's position.

use std::io::BufRead;

use addrtree_core::decode::RawRow;
use addrtree_core::Position;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Row element of the object catalog export.
pub const OBJECT_TAG: &str = "OBJECT";
/// Row element of the administrative hierarchy export.
pub const ITEM_TAG: &str = "ITEM";

/// Read every `tag` element from `input`, in document order.
pub fn read_rows<R: BufRead>(input: R, tag: &str) -> Result<Vec<RawRow>, quick_xml::Error> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut rows = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == tag.as_bytes() => {
                let mut row = RawRow::new(Position(rows.len()));
                for attr in e.attributes() {
                    let attr = attr?;
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    let value = attr.unescape_value()?.into_owned();
                    row.insert(key, value);
                }
                rows.push(row);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(rows)
}
