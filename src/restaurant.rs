use crate::day::WeekdaySet;
use crate::time::{OpeningWindow, Time};
use serde::Deserialize;
use std::sync::Arc;
use tabled::Tabled;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawRestaurant {
    pub name: Arc<str>,
    pub opening_hours: String,
}

#[derive(Debug, Deserialize)]
pub struct RawCatalog {
    pub restaurants: Vec<RawRestaurant>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleEntry {
    pub weekdays: WeekdaySet,
    pub window: OpeningWindow,
}

impl ScheduleEntry {
    pub fn covers(&self, weekday: u8, time: Time) -> bool {
        self.weekdays.contains(weekday) && self.window.contains(time)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub name: Arc<str>,
    pub schedule: Vec<ScheduleEntry>,
}

impl Restaurant {
    pub fn matching_entries(&self, weekday: u8, time: Time) -> impl Iterator<Item = &ScheduleEntry> {
        self.schedule.iter().filter(move |e| e.covers(weekday, time))
    }

    pub fn is_open(&self, weekday: u8, time: Time) -> bool {
        self.matching_entries(weekday, time).next().is_some()
    }
}

#[derive(Tabled)]
pub struct RestaurantRow {
    pub name: Arc<str>,
    pub hours: String,
}

impl From<&Restaurant> for RestaurantRow {
    fn from(r: &Restaurant) -> Self {
        let hours = r
            .schedule
            .iter()
            .map(|e| format!("{} {}", e.weekdays, e.window))
            .collect::<Vec<_>>()
            .join("\n");
        RestaurantRow { name: r.name.clone(), hours }
    }
}
