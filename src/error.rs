use std::io;
use std::sync::Arc;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Unknown day abbreviation: {0:?}")]
    UnknownDay(String),
    #[error("Malformed clause: {0:?}")]
    MalformedClause(String),
    #[error("Malformed time: {0:?}")]
    MalformedTime(String),
    #[error("Unknown meridiem in {0:?}, expected am or pm")]
    UnknownMeridiem(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Cannot read catalog: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot decode catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Restaurant {restaurant:?}: {source}")]
    Schedule {
        restaurant: Arc<str>,
        #[source]
        source: ScheduleError,
    },
}
