use crate::error::ScheduleError;
use std::fmt;
use std::fmt::Formatter;

/// Day abbreviations indexed by day number, Monday first.
pub const DAY_ABBREVIATIONS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Days of the week a clause applies to, 0 = Monday .. 6 = Sunday.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekdaySet(Vec<u8>);

impl WeekdaySet {
    pub fn single(day: u8) -> WeekdaySet {
        WeekdaySet(vec![day])
    }

    /// Ascending `first..=last`. An inverted range is empty, there is no wraparound.
    pub fn range(first: u8, last: u8) -> WeekdaySet {
        WeekdaySet((first..=last).collect())
    }

    pub fn contains(&self, day: u8) -> bool {
        self.0.contains(&day)
    }

    pub fn days(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = |d: &u8| capitalize(DAY_ABBREVIATIONS[*d as usize]);
        match (self.days().first(), self.days().last()) {
            (Some(first), Some(last)) if first == last => write!(f, "{}", name(first)),
            (Some(first), Some(last)) => write!(f, "{}-{}", name(first), name(last)),
            _ => write!(f, "-"),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
        .unwrap_or_default()
}

pub fn day_as_number(day: &str) -> Result<u8, ScheduleError> {
    let lower = day.trim().to_ascii_lowercase();
    DAY_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == lower)
        .map(|i| i as u8)
        .ok_or_else(|| ScheduleError::UnknownDay(day.to_string()))
}

pub fn days_open(first_day: &str, last_day: Option<&str>) -> Result<WeekdaySet, ScheduleError> {
    let first = day_as_number(first_day)?;
    match last_day {
        Some(last_day) => {
            let days = WeekdaySet::range(first, day_as_number(last_day)?);
            if days.is_empty() {
                log::warn!("Day range {}-{} crosses the end of the week, no days selected", first_day, last_day);
            }
            Ok(days)
        }
        None => Ok(WeekdaySet::single(first)),
    }
}
