//! Work-time accounting
//!
//! Pairs clock-start/clock-stop stamps into intervals and sums them.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::Stamp;

/// Total time between paired clock-start and clock-stop stamps
///
/// Stamps must be ordered by time and already limited to the window of
/// interest. While the clock is stopped only a clock-start matters; while it
/// runs only a clock-stop matters. Every other stamp is skipped. An interval
/// still open at the end is not counted, and neither is an interval whose
/// start falls before the window.
pub fn worked_time<'a, I>(stamps: I) -> Duration
where
    I: IntoIterator<Item = &'a Stamp>,
{
    let mut total = Duration::zero();
    let mut started: Option<NaiveDateTime> = None;

    for stamp in stamps {
        match started {
            None if stamp.is_clock_start() => started = Some(stamp.time),
            Some(start) if stamp.is_clock_stop() => {
                let interval = stamp.time - start;
                tracing::trace!(%start, stop = %stamp.time, "closed interval");
                total = total + interval;
                started = None;
            }
            _ => {}
        }
    }

    if let Some(start) = started {
        tracing::trace!(%start, "open interval not counted");
    }

    total
}

/// `[midnight, next midnight)` for a date
pub fn day_window(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}

/// Worked time as a percentage of the target
pub fn percentage_of(worked: Duration, target: Duration) -> f64 {
    let target_ms = target.num_milliseconds();
    if target_ms == 0 {
        return 0.0;
    }
    worked.num_milliseconds() as f64 / target_ms as f64 * 100.0
}

/// Render a duration as `H:MM:SS[.ffffff]`, with a day prefix when needed
pub fn format_duration(duration: Duration) -> String {
    let negative = duration < Duration::zero();
    let duration = if negative { -duration } else { duration };

    let days = duration.num_days();
    let rest = duration - Duration::days(days);
    let total_secs = rest.num_seconds();
    let micros = (rest - Duration::seconds(total_secs))
        .num_microseconds()
        .unwrap_or(0);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    match days {
        0 => {}
        1 => out.push_str("1 day, "),
        n => out.push_str(&format!("{} days, ", n)),
    }
    out.push_str(&format!(
        "{}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    ));
    if micros > 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}
