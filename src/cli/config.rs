use std::fs;
use std::path::Path;

use crate::catalog::{self, CatalogFile};
use crate::config::{self, Config, CONFIG_FILE};
use crate::error::Result;

/// Create config.toml and a starter stamp catalog in the install root
pub fn init(root: &Path) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    if !root.exists() {
        fs::create_dir_all(root)?;
        println!("Created install directory: {}", root.display());
    }

    let config = Config::default();
    config::save(&config, &config_path)?;
    println!("Configuration file created: {}", config_path.display());

    let stamps_path = config.stamps_path(root);
    if stamps_path.exists() {
        println!("Keeping existing stamp catalog: {}", stamps_path.display());
    } else {
        catalog::save(&CatalogFile::default(), &stamps_path)?;
        println!("Stamp catalog created: {}", stamps_path.display());
    }

    println!("\nNext steps:");
    println!(
        "1. Edit {} to set your name and daily hours",
        config_path.display()
    );
    println!("2. Run 'ctas stamp work' to clock in");

    Ok(())
}
