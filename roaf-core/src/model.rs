//! Domain data structures for waste fractions and pickup records.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Timestamp layout used by the calendar API, no zone and no subseconds.
const PICKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Waste fractions collected by ROAF.
pub enum Fraction {
    /// Residual/general waste.
    Residual,
    /// Paper and cardboard.
    Paper,
    /// Metal and glass packaging.
    MetalGlass,
    /// Food waste.
    Food,
}

impl Fraction {
    /// Resolve a fraction from its wire code.
    ///
    /// The codes are provider constants (1, 2, 4 and 17); code 3 is
    /// reserved upstream and never sent.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Residual),
            2 => Some(Self::Paper),
            4 => Some(Self::MetalGlass),
            17 => Some(Self::Food),
            _ => None,
        }
    }

    /// Wire code of this fraction.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Residual => 1,
            Self::Paper => 2,
            Self::MetalGlass => 4,
            Self::Food => 17,
        }
    }

    /// Norwegian display name, matching the Min Renovasjon app.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Residual => "Restavfall",
            Self::Paper => "Papp/Papir",
            Self::MetalGlass => "Metall og glass",
            Self::Food => "Matavfall",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One entry of the calendar response: a fraction and its upcoming pickups.
pub struct PickupRecord {
    /// Wire code of the fraction.
    #[serde(rename = "FraksjonId")]
    pub fraction_id: u32,
    /// Display name; empty until [`PickupRecord::enrich`] has run.
    #[serde(rename = "FraksjonName", default)]
    pub fraction_name: String,
    /// Scheduled pickups, ascending, the first one is next.
    #[serde(rename = "TommeDatoer")]
    pub pickup_dates: Vec<String>,
}

impl PickupRecord {
    /// Display name for the record's fraction, empty when the code is unknown.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        Fraction::from_code(self.fraction_id).map_or("", Fraction::display_name)
    }

    /// Attach the resolved display name, overwriting whatever the server sent.
    pub fn enrich(&mut self) {
        self.fraction_name = self.display_name().to_owned();
    }

    /// Date of the next pickup.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] when the record has no dates or the first
    /// one does not match the provider's timestamp layout.
    pub fn next_pickup(&self) -> Result<NaiveDate, CalendarError> {
        let first = self
            .pickup_dates
            .first()
            .ok_or(CalendarError::NoPickupDates)?;
        let stamp = NaiveDateTime::parse_from_str(first, PICKUP_TIMESTAMP_FORMAT)?;
        Ok(stamp.date())
    }
}
