// crates/gazetteer-core/src/error.rs
use thiserror::Error;

/// Errors raised while reading, building or configuring a gazetteer.
///
/// Most of these never reach UI code: [`Gazetteer::load`](crate::Gazetteer::load)
/// degrades to an empty gazetteer instead of returning them. Use
/// [`Gazetteer::try_load`](crate::Gazetteer::try_load) when the cause matters.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unsupported locale: {0:?} (expected one of: en, zh)")]
    UnsupportedLocale(String),
}

pub type Result<T> = std::result::Result<T, GazetteerError>;

/// Failures of the favorites list operations.
///
/// These mirror the status strings a front end turns into user messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FavoritesError {
    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("city already in list: {0}")]
    AlreadyListed(String),

    #[error("city not in list: {0}")]
    NotInList(String),
}
