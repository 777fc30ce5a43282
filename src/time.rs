use crate::error::ScheduleError;
use std::fmt;

/// Minute of the day, `hour * 60 + minute`.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Time(pub u16);

impl Time {
    pub fn from_hm(hour: u32, minute: u32) -> Time {
        debug_assert!(hour < 24 && minute < 60, "{}:{} is not a time of day", hour, minute);
        Time((hour * 60 + minute) as u16)
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Converts a 12-hour clock reading such as `"1:30 pm"` to a 24-hour `(hour, minute)` pair.
///
/// Hour 12 is treated as 0 before the pm offset is applied, so `12:00 am` is midnight and
/// `12:00 pm` is noon. A missing or non-numeric minute counts as 0.
pub fn parse_clock_time(s: &str) -> Result<(u32, u32), ScheduleError> {
    let mut parts = s.split_whitespace();
    let (clock, meridiem) = match (parts.next(), parts.next(), parts.next()) {
        (Some(clock), Some(meridiem), None) => (clock, meridiem),
        (Some(_), None, None) => return Err(ScheduleError::UnknownMeridiem(s.to_string())),
        _ => return Err(ScheduleError::MalformedTime(s.to_string())),
    };

    let (hours, minutes) = clock.split_once(':').unwrap_or((clock, ""));
    let mut hour = hours
        .parse::<u32>()
        .ok()
        .filter(|h| (1..=12).contains(h))
        .ok_or_else(|| ScheduleError::MalformedTime(s.to_string()))?;
    let minute = minutes.parse::<u32>().unwrap_or(0);
    if minute > 59 {
        return Err(ScheduleError::MalformedTime(s.to_string()));
    }

    if hour == 12 {
        hour = 0;
    }
    match meridiem.to_ascii_lowercase().as_str() {
        "am" => {}
        "pm" => hour += 12,
        _ => return Err(ScheduleError::UnknownMeridiem(s.to_string())),
    }
    Ok((hour, minute))
}

/// Parses a 24-hour `HH:MM` reading.
pub fn parse_24h(s: &str) -> Option<Time> {
    let (hours, minutes) = s.trim().split_once(':')?;
    let hour = hours.parse::<u32>().ok().filter(|h| *h < 24)?;
    let minute = minutes.parse::<u32>().ok().filter(|m| *m < 60)?;
    Some(Time::from_hm(hour, minute))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningWindow {
    pub open: Time,
    pub close: Time,
}

impl OpeningWindow {
    /// Both ends are inclusive.
    pub fn contains(&self, time: Time) -> bool {
        self.open <= time && time <= self.close
    }
}

impl fmt::Display for OpeningWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.open, self.close)
    }
}
