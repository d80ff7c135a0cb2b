use crate::catalog::Catalog;
use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::store::StampStore;
use crate::worktime;

/// Show all stamps of a day
pub fn stamps(config: &Config, store: &StampStore, date: Option<String>) -> Result<()> {
    let date = super::parse_date(date)?;
    let (start, end) = worktime::day_window(date);
    let stamps = store.query_range(start, end)?;

    let markdown = Renderer::new(config).render_day(date, &stamps);
    display::print_markdown(&markdown);

    Ok(())
}

/// Show the known stamps
pub fn catalog(config: &Config, catalog: &Catalog) -> Result<()> {
    let markdown = Renderer::new(config).render_catalog(catalog);
    display::print_markdown(&markdown);

    Ok(())
}
