use crate::day::days_open;
use crate::error::ScheduleError;
use crate::restaurant::ScheduleEntry;
use crate::time::{parse_clock_time, OpeningWindow, Time};

/// Parses one clause, `Mon-Fri 9:00 am - 5:00 pm` or `Sat 10:00 am - 2:00 pm`.
///
/// The day part is positional: three letters, then either `-` and three more letters
/// or a single separator before the time range.
pub fn parse_clause(clause: &str) -> Result<ScheduleEntry, ScheduleError> {
    let malformed = || ScheduleError::MalformedClause(clause.to_string());

    let first_day = clause.get(0..3).ok_or_else(malformed)?;
    let (last_day, times) = if clause.as_bytes().get(3) == Some(&b'-') {
        (Some(clause.get(4..7).ok_or_else(malformed)?), clause.get(7..).ok_or_else(malformed)?)
    } else {
        (None, clause.get(4..).ok_or_else(malformed)?)
    };

    let weekdays = days_open(first_day, last_day)?;
    let (open, close) = times.split_once('-').ok_or_else(malformed)?;
    let (open_hour, open_minute) = parse_clock_time(open.trim())?;
    let (close_hour, close_minute) = parse_clock_time(close.trim())?;
    let window = OpeningWindow {
        open: Time::from_hm(open_hour, open_minute),
        close: Time::from_hm(close_hour, close_minute),
    };
    if window.close < window.open {
        log::warn!("Clause {:?} closes before it opens and never matches", clause);
    }

    Ok(ScheduleEntry { weekdays, window })
}

/// Parses a `;`-separated list of clauses, keeping their order. Blank clauses are skipped.
pub fn parse_opening_hours(opening_hours: &str) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    opening_hours
        .split(';')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(parse_clause)
        .collect()
}
