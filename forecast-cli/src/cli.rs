use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use forecast_core::{Config, ForecastProvider, Location, OpenWeatherProvider};
use log::LevelFilter;

use crate::{
    output,
    prompt::{self, InquirePrompt, LinePrompt},
};

pub const APOLOGY: &str = "Sorry, could not get weather";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Multi-day weather forecast for a city")]
pub struct Cli {
    /// City to get the forecast for; asked for interactively when absent.
    #[arg(long)]
    pub city: Option<String>,

    /// 2-letter country code of the city; asked for interactively when absent.
    #[arg(long)]
    pub country: Option<String>,

    /// Print debug diagnostics (including raw failed responses) to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Logs go to stderr. `RUST_LOG` applies unless `--verbose` is given.
    pub fn init_logging(&self) {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        if self.verbose {
            builder.filter_level(LevelFilter::Debug);
        }
        builder.init();
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env();
        let provider = OpenWeatherProvider::new(config);

        let location = if io::stdin().is_terminal() {
            prompt::collect_location(&mut InquirePrompt, self.city, self.country)?
        } else {
            let mut prompt = LinePrompt::new(io::stdin().lock(), io::stdout());
            prompt::collect_location(&mut prompt, self.city, self.country)?
        };

        show_forecast(&provider, &location, &mut io::stdout()).await
    }
}

/// Fetch and print the forecast for `location`.
///
/// A failed fetch is reported on `out` and is not an error. A response that
/// cannot be read as a forecast is.
pub async fn show_forecast<W: Write>(
    provider: &dyn ForecastProvider,
    location: &Location,
    out: &mut W,
) -> anyhow::Result<()> {
    let data = match provider.fetch_forecast(location).await {
        Ok(data) => data,
        Err(err) => {
            writeln!(out, "{err}")?;
            writeln!(out, "{APOLOGY}")?;
            return Ok(());
        }
    };

    let forecasts = provider
        .forecasts(&data)
        .with_context(|| format!("Could not read the forecast for {location}"))?;
    log::debug!("Got {} forecast entries for {location}", forecasts.len());

    output::write_forecasts(out, &forecasts).context("Failed to write forecast")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use forecast_core::{
        ExtractError, FetchError, ForecastEntry, provider::openweather::extract_forecasts_in,
    };
    use serde_json::{Value, json};

    #[derive(Debug)]
    enum StubProvider {
        Responds(Value),
        ReturnsGarbage(&'static str),
    }

    #[async_trait]
    impl ForecastProvider for StubProvider {
        async fn fetch_forecast(&self, _location: &Location) -> Result<Value, FetchError> {
            match self {
                StubProvider::Responds(value) => Ok(value.clone()),
                StubProvider::ReturnsGarbage(body) => Err(FetchError::Json {
                    source: serde_json::from_str::<Value>(body).unwrap_err(),
                    body: body.to_string(),
                }),
            }
        }

        fn forecasts(&self, data: &Value) -> Result<Vec<ForecastEntry>, ExtractError> {
            extract_forecasts_in(data, &Utc)
        }
    }

    fn slot(dt: i64, temp: f64, wind: f64, description: &str) -> Value {
        json!({
            "dt": dt,
            "main": { "temp": temp },
            "wind": { "speed": wind },
            "weather": [{ "description": description }]
        })
    }

    fn location() -> Location {
        Location::new("Minneapolis", "US").unwrap()
    }

    async fn run(provider: StubProvider) -> (anyhow::Result<()>, String) {
        let mut out = Vec::new();
        let result = show_forecast(&provider, &location(), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn prints_forecast_grouped_by_date() {
        // 2024-03-05 13:05 UTC, +3h, +12h
        let ts = 1_709_643_900;
        let provider = StubProvider::Responds(json!({
            "list": [
                slot(ts, 72.0, 5.0, "clear sky"),
                slot(ts + 3 * 3600, 68.5, 7.2, "few clouds"),
                slot(ts + 12 * 3600, 55.1, 3.0, "light rain"),
            ]
        }));

        let (result, text) = run(provider).await;
        result.unwrap();

        assert_eq!(
            text,
            "\nOn 05 March, 2024:\n\n\
             At 01:05 PM, the temperature will be 72F, with a wind speed of 5. There will be clear sky.\n\
             At 04:05 PM, the temperature will be 68.5F, with a wind speed of 7.2. There will be few clouds.\n\
             \nOn 06 March, 2024:\n\n\
             At 01:05 AM, the temperature will be 55.1F, with a wind speed of 3. There will be light rain.\n"
        );
    }

    #[tokio::test]
    async fn failed_fetch_prints_apology_and_no_forecast() {
        let (result, text) = run(StubProvider::ReturnsGarbage("<html>Bad Gateway</html>")).await;

        assert!(result.is_ok());
        assert!(!text.contains("On "));
        assert!(!text.contains("the temperature will be"));
        assert_eq!(text.lines().last(), Some(APOLOGY));
    }

    #[tokio::test]
    async fn malformed_forecast_is_an_error() {
        let provider = StubProvider::Responds(json!({ "list": [{ "dt": 0 }] }));

        let (result, text) = run(provider).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Could not read the forecast for Minneapolis,US"));
        assert!(err.downcast_ref::<ExtractError>().is_some());
        assert!(text.is_empty());
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["forecast", "--city", "Oslo", "--country", "NO", "-v"])
            .unwrap();

        assert_eq!(cli.city.as_deref(), Some("Oslo"));
        assert_eq!(cli.country.as_deref(), Some("NO"));
        assert!(cli.verbose);
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::try_parse_from(["forecast"]).unwrap();

        assert!(cli.city.is_none());
        assert!(cli.country.is_none());
        assert!(!cli.verbose);
    }
}
