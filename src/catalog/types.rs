use serde::{Deserialize, Serialize};

/// Stamp type that opens a work interval
pub const CLOCK_START: &str = "clock-start";

/// Stamp type that closes a work interval
pub const CLOCK_STOP: &str = "clock-stop";

/// One known stamp definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stamp ID
    pub sid: i64,
    /// Stamp name
    pub sname: String,
    /// Stamp type: `clock-start`, `clock-stop` or a free task label
    pub stype: String,
}

/// On-disk layout of the catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub stamps: Vec<CatalogEntry>,
}

impl CatalogEntry {
    pub fn new(sid: i64, sname: &str, stype: &str) -> Self {
        Self {
            sid,
            sname: sname.to_string(),
            stype: stype.to_string(),
        }
    }
}

impl Default for CatalogFile {
    fn default() -> Self {
        Self {
            stamps: vec![
                CatalogEntry::new(1, "work", CLOCK_START),
                CatalogEntry::new(2, "break", CLOCK_STOP),
            ],
        }
    }
}
