//! On-disk registry export fixtures.
//!
//! Writes small `AS_ADDR_OBJ` / `AS_ADM_HIERARCHY` XML files into a temp dir
//! so harnesses can drive the real reader end to end.

#![allow(dead_code)]

use std::path::PathBuf;

/// Catalog for a city with a district and a handful of streets:
///
/// ```text
/// #0 Город Тестов (level 1)
/// ├── #2 р-н Северный
/// │   ├── #3 проезд Лесной
/// │   └── #5 ул Садовая
/// │       └── #6 проезд Садовый          (current, inactive)
/// └── #4 мкр Тихий проезд
/// #1 Город Старый (level 1, not current)
/// #7 ул Снесённая (not current; its edge from #2 is ignored)
/// ```
pub const CITY_OBJECTS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ADDRESSOBJECTS>
  <OBJECT ID="1" OBJECTID="1000" NAME="Тестов" TYPENAME="Город" LEVEL="1" STARTDATE="2005-01-01" ENDDATE="2079-06-06" ISACTUAL="1" ISACTIVE="1" />
  <OBJECT ID="2" OBJECTID="1001" NAME="Старый" TYPENAME="Город" LEVEL="1" STARTDATE="1990-01-01" ENDDATE="2005-01-01" ISACTUAL="0" ISACTIVE="0" />
  <OBJECT ID="3" OBJECTID="2000" NAME="Северный" TYPENAME="р-н" LEVEL="3" STARTDATE="2005-01-01" ENDDATE="2079-06-06" ISACTUAL="1" ISACTIVE="1" />
  <OBJECT ID="4" OBJECTID="3000" NAME="Лесной" TYPENAME="проезд" LEVEL="8" STARTDATE="1999-01-01" ENDDATE="2079-06-06" ISACTUAL="1" ISACTIVE="1" />
  <OBJECT ID="5" OBJECTID="2001" NAME="Тихий проезд" TYPENAME="мкр" LEVEL="5" STARTDATE="2003-04-01" ENDDATE="2079-06-06" ISACTUAL="1" ISACTIVE="1" />
  <OBJECT ID="6" OBJECTID="3001" NAME="Садовая" TYPENAME="ул" LEVEL="8" STARTDATE="2001-07-12" ENDDATE="2079-06-06" ISACTUAL="1" ISACTIVE="1" />
  <OBJECT ID="7" OBJECTID="3002" NAME="Садовый" TYPENAME="проезд" LEVEL="8" STARTDATE="2002-01-01" ENDDATE="2079-06-06" ISACTUAL="1" ISACTIVE="0" />
  <OBJECT ID="8" OBJECTID="3003" NAME="Снесённая" TYPENAME="ул" LEVEL="8" STARTDATE="2001-01-01" ENDDATE="2079-06-06" ISACTUAL="0" ISACTIVE="0" />
</ADDRESSOBJECTS>"#;

/// Hierarchy for [`CITY_OBJECTS`]. Edge columns hold catalog positions.
pub const CITY_HIERARCHY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ITEMS>
  <ITEM ID="1" OBJECTID="0" ISACTIVE="1" />
  <ITEM ID="2" OBJECTID="4" PARENTOBJID="0" ISACTIVE="1" />
  <ITEM ID="3" OBJECTID="2" PARENTOBJID="0" ISACTIVE="1" />
  <ITEM ID="4" OBJECTID="5" PARENTOBJID="2" ISACTIVE="1" />
  <ITEM ID="5" OBJECTID="3" PARENTOBJID="2" ISACTIVE="1" />
  <ITEM ID="6" OBJECTID="6" PARENTOBJID="5" ISACTIVE="1" />
  <ITEM ID="7" OBJECTID="7" PARENTOBJID="2" ISACTIVE="1" />
</ITEMS>"#;

/// Paths containing "проезд" for the city fixture, in emission order.
pub const CITY_PROEZD_PATHS: &[&str] = &[
    "Город Тестов, р-н Северный, проезд Лесной",
    "Город Тестов, р-н Северный, ул Садовая, проезд Садовый",
    "Город Тестов, мкр Тихий проезд",
];

/// A temp dir holding one pair of exports. Dropping it removes the files.
pub struct Exports {
    pub dir: tempfile::TempDir,
    pub objects: PathBuf,
    pub hierarchy: PathBuf,
}

pub fn write_exports(objects_xml: &str, hierarchy_xml: &str) -> Exports {
    let dir = tempfile::tempdir().expect("create temp dir");
    let objects = dir.path().join("AS_ADDR_OBJ.XML");
    let hierarchy = dir.path().join("AS_ADM_HIERARCHY.XML");
    std::fs::write(&objects, objects_xml).expect("write objects export");
    std::fs::write(&hierarchy, hierarchy_xml).expect("write hierarchy export");
    Exports {
        dir,
        objects,
        hierarchy,
    }
}

pub fn city_exports() -> Exports {
    write_exports(CITY_OBJECTS, CITY_HIERARCHY)
}
