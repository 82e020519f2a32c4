use crate::{
    error::{ExtractError, FetchError},
    model::{ForecastEntry, Location},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of multi-day forecasts.
///
/// Retrieval and extraction are separate steps: a failed fetch is an expected
/// outcome the caller reports and recovers from, while a response that fails
/// to extract means the provider broke its schema.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Issue one forecast request for `location` and return the parsed JSON body.
    async fn fetch_forecast(&self, location: &Location) -> Result<serde_json::Value, FetchError>;

    /// Turn a body returned by [`ForecastProvider::fetch_forecast`] into entries,
    /// in the order the provider listed them.
    fn forecasts(&self, data: &serde_json::Value) -> Result<Vec<ForecastEntry>, ExtractError>;
}
