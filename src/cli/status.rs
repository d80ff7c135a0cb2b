use chrono::{Duration, Local, NaiveDate};

use crate::config::Config;
use crate::error::Result;
use crate::store::StampStore;
use crate::worktime;

/// Show worked time for a day against the daily target
pub fn run(config: &Config, store: &StampStore, date: Option<String>) -> Result<()> {
    let date = super::parse_date(date)?;
    let (start, end) = worktime::day_window(date);

    let stamps = store.query_range(start, end)?;
    let worked = worktime::worked_time(&stamps);

    for line in report(date, Local::now().date_naive(), worked, config.daily_target()) {
        println!("{}", line);
    }

    Ok(())
}

fn report(date: NaiveDate, today: NaiveDate, worked: Duration, target: Duration) -> [String; 2] {
    let label = if date == today {
        "today".to_string()
    } else {
        format!("on {}", date.format("%Y-%m-%d"))
    };

    [
        format!(
            "Time worked {}: {}",
            label,
            worktime::format_duration(worked)
        ),
        format!(
            "That's {:.1} %",
            worktime::percentage_of(worked, target)
        ),
    ]
}
