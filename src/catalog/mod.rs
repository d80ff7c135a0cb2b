//! Stamp catalog module
//!
//! Loads the static JSON list of known stamps and resolves user tokens
//! (an ID or a name) to catalog entries.

mod types;

pub use types::{CatalogEntry, CatalogFile, CLOCK_START, CLOCK_STOP};

use crate::error::{CtasError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Loaded stamp catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate IDs or names
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for entry in &entries {
            if !ids.insert(entry.sid) {
                return Err(CtasError::Catalog(format!(
                    "Duplicate stamp ID: {}",
                    entry.sid
                )));
            }
            if !names.insert(entry.sname.as_str()) {
                return Err(CtasError::Catalog(format!(
                    "Duplicate stamp name: {}",
                    entry.sname
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn by_id(&self, sid: i64) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.sid == sid)
    }

    pub fn by_name(&self, sname: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.sname == sname)
    }

    /// Resolve a token that is either a stamp ID or a stamp name
    pub fn resolve(&self, token: &str) -> Result<&CatalogEntry> {
        match token.trim().parse::<i64>() {
            Ok(sid) => self
                .by_id(sid)
                .ok_or_else(|| CtasError::InvalidStampId(token.to_string())),
            Err(_) => self
                .by_name(token)
                .ok_or_else(|| CtasError::InvalidStampName(token.to_string())),
        }
    }
}

/// Load the catalog from a JSON file
pub fn load(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        CtasError::Catalog(format!(
            "Cannot read stamp catalog from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let file: CatalogFile = serde_json::from_str(&content)?;
    let catalog = Catalog::from_entries(file.stamps)?;

    tracing::debug!(
        path = %path.display(),
        entries = catalog.entries().len(),
        "loaded stamp catalog"
    );
    Ok(catalog)
}

/// Save a catalog file as pretty-printed JSON
pub fn save(file: &CatalogFile, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(file)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Catalog {
        Catalog::from_entries(vec![
            CatalogEntry::new(1, "work", CLOCK_START),
            CatalogEntry::new(2, "break", CLOCK_STOP),
            CatalogEntry::new(10, "meeting", "task"),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_by_id_and_name_agree() {
        let catalog = sample();
        let by_id = catalog.resolve("1").unwrap();
        let by_name = catalog.resolve("work").unwrap();
        assert_eq!(by_id, by_name);
        assert_eq!(by_id.sid, 1);
        assert_eq!(by_id.sname, "work");
        assert_eq!(by_id.stype, "clock-start");
    }

    #[test]
    fn test_resolve_unknown_id() {
        let catalog = sample();
        let err = catalog.resolve("99").unwrap_err();
        assert!(matches!(err, CtasError::InvalidStampId(_)));
        assert_eq!(err.to_string(), "99 is not a valid stamp ID.");
    }

    #[test]
    fn test_resolve_unknown_name() {
        let catalog = sample();
        let err = catalog.resolve("lunch").unwrap_err();
        assert!(matches!(err, CtasError::InvalidStampName(_)));
        assert_eq!(err.to_string(), "lunch is not a valid stamp name.");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let catalog = sample();
        assert!(catalog.resolve("Work").is_err());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_entries(vec![
            CatalogEntry::new(1, "work", CLOCK_START),
            CatalogEntry::new(1, "other", CLOCK_STOP),
        ]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Duplicate stamp ID: 1"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = Catalog::from_entries(vec![
            CatalogEntry::new(1, "work", CLOCK_START),
            CatalogEntry::new(2, "work", CLOCK_STOP),
        ]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Duplicate stamp name: work"));
    }

    #[test]
    fn test_load_and_save() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stamps.json");

        save(&CatalogFile::default(), &path).unwrap();
        let catalog = load(&path).unwrap();

        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.resolve("break").unwrap().sid, 2);
    }

    #[test]
    fn test_load_missing_catalog() {
        let err = load(Path::new("/nonexistent/stamps.json")).unwrap_err();
        assert!(matches!(err, CtasError::Catalog(_)));
    }

    #[test]
    fn test_load_malformed_catalog() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stamps.json");
        fs::write(&path, r#"{"stamps": [{"sid": "one"}]}"#).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, CtasError::Json(_)));
    }
}
