//! Error type shared by everything that fetches or interprets a calendar.

use chrono::ParseError as ChronoParseError;
use reqwest::Error as ReqwestError;
use serde_json::Error as JsonError;
use url::ParseError as UrlParseError;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while fetching or interpreting a pickup calendar.
pub enum CalendarError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The proxy base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] UrlParseError),
    /// The response body was not a valid calendar.
    #[error("Decode error: {0}")]
    Decode(#[from] JsonError),
    /// Failed to parse a pickup date from the provider response.
    #[error("Date parse error: {0}")]
    Date(#[from] ChronoParseError),
    /// A record carried no pickup dates at all.
    #[error("Record has no pickup dates")]
    NoPickupDates,
}
