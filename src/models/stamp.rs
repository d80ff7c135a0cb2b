use chrono::{NaiveDateTime, SubsecRound};
use rand::Rng;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{CatalogEntry, CLOCK_START, CLOCK_STOP};
use crate::error::CtasError;

/// Text layout of stamp times, fixed width so text order is time order
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

const SALT_LEN: usize = 10;

/// Acceptance state of a stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StampStatus {
    #[default]
    NotAccepted,
    Accepted,
}

impl StampStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StampStatus::NotAccepted => "not-accepted",
            StampStatus::Accepted => "accepted",
        }
    }
}

impl fmt::Display for StampStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StampStatus {
    type Err = CtasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-accepted" => Ok(StampStatus::NotAccepted),
            "accepted" => Ok(StampStatus::Accepted),
            other => Err(CtasError::Storage(format!("Unknown stamp status: {}", other))),
        }
    }
}

/// A recorded time-tracking event
///
/// `sname` and `stype` are copies of the catalog entry taken when the stamp
/// was made; later catalog edits do not touch recorded stamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// Audit identifier, not used for ordering
    pub uid: String,
    /// Local time of the stamp (microsecond precision)
    pub time: NaiveDateTime,
    /// Who recorded the stamp
    pub stamper: String,
    /// Catalog stamp ID
    pub sid: i64,
    /// Catalog name at creation time
    pub sname: String,
    /// Catalog type at creation time
    pub stype: String,
    pub status: StampStatus,
}

impl Stamp {
    /// Create a fresh, not yet accepted stamp for a catalog entry
    pub fn new(entry: &CatalogEntry, time: NaiveDateTime, stamper: &str) -> Self {
        let time = time.trunc_subsecs(6);
        Self {
            uid: generate_uid(time),
            time,
            stamper: stamper.to_string(),
            sid: entry.sid,
            sname: entry.sname.clone(),
            stype: entry.stype.clone(),
            status: StampStatus::NotAccepted,
        }
    }

    pub fn is_clock_start(&self) -> bool {
        self.stype == CLOCK_START
    }

    pub fn is_clock_stop(&self) -> bool {
        self.stype == CLOCK_STOP
    }

    /// Stamp time in storage layout
    pub fn time_text(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// Parse a stored stamp time
pub fn parse_time(text: &str) -> Result<NaiveDateTime, CtasError> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
        .map_err(|e| CtasError::Storage(format!("Invalid stamp time '{}': {}", text, e)))
}

/// Hex SHA-256 of the stamp time and a random lowercase salt
fn generate_uid(time: NaiveDateTime) -> String {
    let mut rng = rand::thread_rng();
    let salt: String = (0..SALT_LEN)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect();

    let mut hasher = Sha256::new();
    hasher.update(time.format(TIME_FORMAT).to_string().as_bytes());
    hasher.update(salt.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn at(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micro)
            .unwrap()
    }

    #[test]
    fn test_new_copies_catalog_entry() {
        let entry = CatalogEntry::new(1, "work", CLOCK_START);
        let stamp = Stamp::new(&entry, at(9, 0, 0, 0), "alice");

        assert_eq!(stamp.sid, 1);
        assert_eq!(stamp.sname, "work");
        assert_eq!(stamp.stype, "clock-start");
        assert_eq!(stamp.stamper, "alice");
        assert_eq!(stamp.status, StampStatus::NotAccepted);
        assert!(stamp.is_clock_start());
        assert!(!stamp.is_clock_stop());
    }

    #[test]
    fn test_new_truncates_to_microseconds() {
        let entry = CatalogEntry::new(2, "break", CLOCK_STOP);
        let time = at(9, 0, 0, 0).with_nanosecond(123_456_789).unwrap();
        let stamp = Stamp::new(&entry, time, "alice");
        assert_eq!(stamp.time.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_uid_is_hex_sha256_and_salted() {
        let entry = CatalogEntry::new(1, "work", CLOCK_START);
        let a = Stamp::new(&entry, at(9, 0, 0, 0), "alice");
        let b = Stamp::new(&entry, at(9, 0, 0, 0), "alice");

        assert_eq!(a.uid.len(), 64);
        assert!(a.uid.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a.uid, b.uid);
    }

    #[test]
    fn test_time_text_is_fixed_width() {
        let entry = CatalogEntry::new(1, "work", CLOCK_START);
        let stamp = Stamp::new(&entry, at(9, 5, 7, 0), "alice");
        assert_eq!(stamp.time_text(), "2024-01-15 09:05:07.000000");
        assert_eq!(parse_time(&stamp.time_text()).unwrap(), stamp.time);
    }

    #[test]
    fn test_parse_time_without_fraction() {
        assert_eq!(parse_time("2024-01-15 13:00:00").unwrap(), at(13, 0, 0, 0));
        assert!(parse_time("yesterday").is_err());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(StampStatus::NotAccepted.to_string(), "not-accepted");
        assert_eq!(
            "accepted".parse::<StampStatus>().unwrap(),
            StampStatus::Accepted
        );
        assert!("pending".parse::<StampStatus>().is_err());
    }
}
