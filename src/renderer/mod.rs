//! Markdown renderer module
//!
//! Renders a day's stamps and the stamp catalog as Markdown.

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::Stamp;
use crate::worktime;

/// Markdown renderer for stamp listings
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render all stamps of one day with a worked-time summary
    pub fn render_day(&self, date: NaiveDate, stamps: &[Stamp]) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Stamps: {}\n\n", date.format("%Y-%m-%d")));

        if stamps.is_empty() {
            output.push_str(&format!(
                "No stamps recorded for {}.",
                date.format("%Y-%m-%d")
            ));
            return output;
        }

        output.push_str(&self.render_stamp_table(stamps));
        output.push_str("\n\n");
        output.push_str(&self.render_summary(stamps));

        output
    }

    /// Render the catalog as a table
    pub fn render_catalog(&self, catalog: &Catalog) -> String {
        let mut output = String::new();

        output.push_str("# Stamp Catalog\n\n");
        output.push_str("| ID | Name | Type |\n");
        output.push_str("|----|------|------|");
        for entry in catalog.entries() {
            output.push_str(&format!(
                "\n| {} | {} | {} |",
                entry.sid, entry.sname, entry.stype
            ));
        }

        output
    }

    fn render_stamp_table(&self, stamps: &[Stamp]) -> String {
        let mut output = String::new();

        output.push_str("| Time | ID | Name | Type | Stamper | Status |\n");
        output.push_str("|------|----|------|------|---------|--------|");
        for stamp in stamps {
            output.push_str(&format!(
                "\n| {} | {} | {} | {} | {} | {} |",
                stamp.time.format("%H:%M:%S"),
                stamp.sid,
                stamp.sname,
                stamp.stype,
                stamp.stamper,
                stamp.status
            ));
        }

        output
    }

    fn render_summary(&self, stamps: &[Stamp]) -> String {
        let worked = worktime::worked_time(stamps);
        let pct = worktime::percentage_of(worked, self.config.daily_target());

        format!(
            "**Worked:** {} ({:.1} % of {} h)",
            worktime::format_duration(worked),
            pct,
            self.config.user.daily_hours
        )
    }
}
