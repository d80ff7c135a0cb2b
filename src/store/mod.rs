//! Stamp store module
//!
//! Append-only SQLite table of recorded stamps. Columns carry no declared
//! types; values are checked when rows are decoded.

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use std::path::Path;

use crate::error::{CtasError, Result};
use crate::models::stamp::{self, TIME_FORMAT};
use crate::models::Stamp;

const SCHEMA: &str = "CREATE TABLE stamp(uid, time, stamper, sid, sname, stype, status)";

/// `time` padded to the full `.ffffff` width, so rows written without a
/// fraction compare and sort like rows written with one
const SORT_TIME: &str =
    "substr(time || CASE WHEN instr(time, '.') > 0 THEN '000000' ELSE '.000000' END, 1, 26)";

/// SQLite-backed stamp store
pub struct StampStore {
    conn: Connection,
}

impl StampStore {
    /// Open (or create) the store at the given path
    ///
    /// The schema is created only when the file did not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        let existed = path.exists();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path).map_err(|e| {
            CtasError::Storage(format!("Cannot open '{}': {}", path.display(), e))
        })?;

        if !existed {
            conn.execute(SCHEMA, [])?;
        }

        tracing::debug!(path = %path.display(), created = !existed, "opened stamp store");
        Ok(Self { conn })
    }

    /// In-memory store with schema
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Insert one stamp
    pub fn append(&self, stamp: &Stamp) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO stamp VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    stamp.uid,
                    stamp.time_text(),
                    stamp.stamper,
                    stamp.sid,
                    stamp.sname,
                    stamp.stype,
                    stamp.status.as_str(),
                ],
            )
            .map_err(|e| CtasError::Storage(format!("Cannot record stamp: {}", e)))?;

        tracing::info!(uid = %stamp.uid, sid = stamp.sid, stype = %stamp.stype, "recorded stamp");
        Ok(())
    }

    /// All stamps with `start <= time < end`, oldest first
    pub fn query_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Stamp>> {
        let sql = format!(
            "SELECT uid, time, stamper, sid, sname, stype, status FROM stamp
             WHERE {t} >= ?1 AND {t} < ?2
             ORDER BY {t} ASC, rowid ASC",
            t = SORT_TIME
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| CtasError::Storage(format!("Cannot query stamps: {}", e)))?;

        let rows = stmt.query_map(
            params![
                start.format(TIME_FORMAT).to_string(),
                end.format(TIME_FORMAT).to_string()
            ],
            raw_row,
        )?;

        let mut stamps = Vec::new();
        for row in rows {
            stamps.push(row?.into_stamp()?);
        }

        tracing::debug!(%start, %end, count = stamps.len(), "queried stamps");
        Ok(stamps)
    }
}

/// Row as stored, before time and status are decoded
struct RawStamp {
    uid: String,
    time: String,
    stamper: String,
    sid: i64,
    sname: String,
    stype: String,
    status: String,
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawStamp> {
    Ok(RawStamp {
        uid: row.get(0)?,
        time: row.get(1)?,
        stamper: row.get(2)?,
        sid: row.get(3)?,
        sname: row.get(4)?,
        stype: row.get(5)?,
        status: row.get(6)?,
    })
}

impl RawStamp {
    fn into_stamp(self) -> Result<Stamp> {
        Ok(Stamp {
            time: stamp::parse_time(&self.time)?,
            status: self.status.parse()?,
            uid: self.uid,
            stamper: self.stamper,
            sid: self.sid,
            sname: self.sname,
            stype: self.stype,
        })
    }
}
