use crate::catalog::Catalog;
use crate::restaurant::RawRestaurant;
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::path::PathBuf;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn add_restaurant(restaurants: &mut Vec<RawRestaurant>, name: &str, opening_hours: &str) {
    restaurants.push(RawRestaurant {
        name: id(name),
        opening_hours: opening_hours.to_string(),
    });
}

pub fn sample_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/restaurant_data.json");
    Catalog::load_from_file(&path).unwrap()
}

/// 2021-05-10 is a Monday, so `weekday` 0 is Monday and 6 is Sunday.
pub fn instant(weekday: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 5, 10 + weekday)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap()
}

pub fn names(result: Vec<Arc<str>>) -> Vec<String> {
    result.iter().map(|n| n.to_string()).collect()
}

pub fn arb_day() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("mon"),
        Just("Tue"),
        Just("WED"),
        Just("thu"),
        Just("Fri"),
        Just("sat"),
        Just("Sun"),
    ]
}

pub fn arb_meridiem() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("am"), Just("pm"), Just("AM"), Just("Pm")]
}
