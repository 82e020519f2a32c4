use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::LocationError;

/// City plus country code, sent to the API as `city,country`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    city: String,
    country: String,
}

impl Location {
    /// Both parts must be non-empty. Whitespace is kept as typed.
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Result<Self, LocationError> {
        let city = city.into();
        let country = country.into();

        if city.is_empty() {
            return Err(LocationError::EmptyCity);
        }
        if country.is_empty() {
            return Err(LocationError::EmptyCountry);
        }

        Ok(Self { city, country })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Value for the `q` query parameter.
    pub fn query(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.city, self.country)
    }
}

/// One timestamped forecast, already converted to a local date and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    /// Miles per hour.
    pub wind_speed: f64,
    pub description: String,
}
