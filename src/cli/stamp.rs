use chrono::Local;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::models::Stamp;
use crate::store::StampStore;

/// Record a new stamp for a catalog ID or name
pub fn run(
    config: &Config,
    catalog: &Catalog,
    store: &StampStore,
    token: &str,
    stamper: Option<String>,
) -> Result<()> {
    let entry = catalog.resolve(token)?;
    let stamper = stamper.unwrap_or_else(|| config.user.stamper.clone());

    let stamp = Stamp::new(entry, Local::now().naive_local(), &stamper);
    store.append(&stamp)?;

    println!(
        "Stamped '{}' ({}) at {} by {}",
        stamp.sname,
        stamp.stype,
        stamp.time.format("%H:%M:%S"),
        stamp.stamper
    );

    Ok(())
}
