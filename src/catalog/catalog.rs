use crate::catalog::parser::parse_opening_hours;
use crate::error::CatalogError;
use crate::restaurant::{RawCatalog, RawRestaurant, Restaurant};
use crate::time::Time;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultOrder {
    /// Catalog order, one name per matching schedule entry.
    #[default]
    Catalog,
    /// Each name once, sorted.
    Alphabetical,
}

/// Normalized restaurants, built once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>) -> Catalog {
        Catalog { restaurants }
    }

    pub fn normalize(raw: Vec<RawRestaurant>) -> Result<Catalog, CatalogError> {
        let restaurants = raw
            .into_iter()
            .map(|r| -> Result<Restaurant, CatalogError> {
                let schedule = parse_opening_hours(&r.opening_hours).map_err(|source| CatalogError::Schedule {
                    restaurant: r.name.clone(),
                    source,
                })?;
                log::debug!("{}: {} schedule entries", r.name, schedule.len());
                Ok(Restaurant { name: r.name, schedule })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Catalog::new(restaurants))
    }

    pub fn from_json_str(data: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(data)?;
        Catalog::normalize(raw.restaurants)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path)?;
        let catalog = Catalog::from_json_str(&data)?;
        log::info!("Loaded {} restaurants from {}", catalog.restaurants.len(), path.display());
        Ok(catalog)
    }

    /// Names of restaurants open on `weekday` (0 = Monday) at `time`.
    ///
    /// A restaurant appears once for every schedule entry that covers the instant.
    pub fn restaurants_open_at(&self, weekday: u8, time: Time) -> Vec<Arc<str>> {
        self.restaurants
            .iter()
            .flat_map(|r| r.matching_entries(weekday, time).map(|_| r.name.clone()))
            .collect()
    }

    pub fn open_on(&self, weekday: u8, time: Time, order: ResultOrder) -> Vec<Arc<str>> {
        log::debug!("Querying weekday {} at {}", weekday, time);
        match order {
            ResultOrder::Catalog => self.restaurants_open_at(weekday, time),
            ResultOrder::Alphabetical => {
                let mut names = self
                    .restaurants
                    .iter()
                    .filter(|r| r.is_open(weekday, time))
                    .map(|r| r.name.clone())
                    .collect::<Vec<_>>();
                names.sort();
                names.dedup();
                names
            }
        }
    }

    pub fn open_at(&self, instant: NaiveDateTime, order: ResultOrder) -> Vec<Arc<str>> {
        let weekday = instant.weekday().num_days_from_monday() as u8;
        self.open_on(weekday, Time::from_hm(instant.hour(), instant.minute()), order)
    }
}
