//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Runtime configuration (API key, endpoint)
//! - Abstraction over forecast providers, with an OpenWeather implementation
//! - Shared domain models (locations, forecast entries) and error types
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::{ExtractError, FetchError, LocationError};
pub use model::{ForecastEntry, Location};
pub use provider::{ForecastProvider, openweather::OpenWeatherProvider};
