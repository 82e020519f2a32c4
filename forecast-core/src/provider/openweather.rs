use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::Config,
    error::{ExtractError, FetchError},
    model::{ForecastEntry, Location},
};

use super::ForecastProvider;

const UNITS: &str = "imperial";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    config: Config,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: Config) -> Self {
        Self { config, http: Client::new() }
    }

    /// Query parameters in the order they are sent. `appid` is omitted when no
    /// key is configured.
    fn query_params(&self, location: &Location) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", location.query()), ("units", UNITS.to_string())];
        if let Some(key) = &self.config.api_key {
            params.push(("appid", key.clone()));
        }
        params
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn fetch_forecast(&self, location: &Location) -> Result<Value, FetchError> {
        log::debug!("Requesting forecast for {location} from {}", self.config.endpoint);

        let res = self
            .http
            .get(&self.config.endpoint)
            .query(&self.query_params(location))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        interpret_response(status, body).inspect_err(|err| {
            if let Some(body) = err.body() {
                log::debug!("{body}");
            }
        })
    }

    fn forecasts(&self, data: &Value) -> Result<Vec<ForecastEntry>, ExtractError> {
        extract_forecasts(data)
    }
}

/// Classify a completed HTTP exchange: 4xx/5xx and non-JSON bodies are failures.
pub fn interpret_response(status: StatusCode, body: String) -> Result<Value, FetchError> {
    if status.is_client_error() || status.is_server_error() {
        return Err(FetchError::Status { status, body });
    }

    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(source) => Err(FetchError::Json { source, body }),
    }
}

/// Extract forecast entries using the machine's local time zone.
pub fn extract_forecasts(data: &Value) -> Result<Vec<ForecastEntry>, ExtractError> {
    extract_forecasts_in(data, &Local)
}

/// Extract forecast entries, converting timestamps into `tz`.
pub fn extract_forecasts_in<Tz: TimeZone>(
    data: &Value,
    tz: &Tz,
) -> Result<Vec<ForecastEntry>, ExtractError> {
    let parsed = OwForecastResponse::deserialize(data)?;

    parsed
        .list
        .into_iter()
        .map(|entry| -> Result<ForecastEntry, ExtractError> {
            let when = DateTime::<Utc>::from_timestamp(entry.dt, 0)
                .ok_or(ExtractError::Timestamp(entry.dt))?
                .with_timezone(tz);

            let description = entry
                .weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .ok_or(ExtractError::MissingDescription(entry.dt))?;

            Ok(ForecastEntry {
                date: when.date_naive(),
                time: when.time(),
                temperature: entry.main.temp,
                wind_speed: entry.wind.speed,
                description,
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}
