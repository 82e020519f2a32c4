use std::env;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "WEATHER_KEY";

/// OpenWeather 5-day / 3-hour forecast endpoint.
pub const DEFAULT_FORECAST_URL: &str = "http://api.openweathermap.org/data/2.5/forecast";

/// Runtime configuration, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API key sent as `appid`. `None` means the variable was not set,
    /// in which case the parameter is left out of the request.
    pub api_key: Option<String>,

    /// Forecast endpoint URL.
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Config {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key, endpoint: DEFAULT_FORECAST_URL.to_string() }
    }

    /// Load config from the process environment.
    ///
    /// A missing key is not an error here; it surfaces later as an API error.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`], with an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR);
        if api_key.is_none() {
            log::debug!("{API_KEY_VAR} is not set, requests will carry no API key");
        }
        Self::new(api_key)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
