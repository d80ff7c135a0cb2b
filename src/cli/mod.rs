//! Command-line interface module
//!
//! Implements all CLI commands:
//! - stamp: Record a new stamp
//! - status: Show today's worked time against the daily target
//! - list: Show the stamps of a day
//! - catalog: Show the known stamps
//! - config init: Create config and catalog files in the install root

pub mod config;
pub mod list;
pub mod stamp;
pub mod status;

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

use crate::catalog::{self, Catalog};
use crate::config::{self as settings, Config};
use crate::error::{CtasError, Result};
use crate::store::StampStore;

/// Config and store, loaded once per invocation
///
/// The catalog is read only by commands that need it, so a broken catalog
/// does not stop `status` or `list`.
pub struct Context {
    pub root: PathBuf,
    pub config: Config,
    pub store: StampStore,
}

impl Context {
    /// Load config and store from the install root
    pub fn load(root: &Path) -> Result<Self> {
        let config = settings::load(&root.join(settings::CONFIG_FILE))?;
        let store = StampStore::open(&config.db_path(root))?;

        Ok(Self {
            root: root.to_path_buf(),
            config,
            store,
        })
    }

    /// Load the stamp catalog named by the config
    pub fn catalog(&self) -> Result<Catalog> {
        catalog::load(&self.config.stamps_path(&self.root))
    }
}

/// Parse a `YYYY-MM-DD` date, defaulting to today
pub fn parse_date(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| CtasError::Config(format!("Invalid date format: {}", e))),
        None => Ok(Local::now().date_naive()),
    }
}

/// Printed when `CTAS_PATH` is not set
pub fn first_run_message() -> String {
    format!(
        "It looks like this is your first time running this program.\n\
         Set {} to your installation directory and run 'ctas config init'.",
        settings::ROOT_ENV
    )
}
