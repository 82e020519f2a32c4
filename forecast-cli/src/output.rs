use std::{collections::HashSet, io::Write};

use chrono::NaiveDate;
use forecast_core::ForecastEntry;

/// One sentence per forecast slot, with a 12-hour clock.
pub fn format_forecast(entry: &ForecastEntry) -> String {
    format!(
        "At {}, the temperature will be {}F, with a wind speed of {}. There will be {}.",
        entry.time.format("%I:%M %p"),
        entry.temperature,
        entry.wind_speed,
        entry.description,
    )
}

pub fn date_header(date: NaiveDate) -> String {
    format!("\nOn {}:\n", date.format("%d %B, %Y"))
}

/// Print entries grouped by date, a header before the first entry of each new date.
pub fn write_forecasts<W: Write>(out: &mut W, entries: &[ForecastEntry]) -> std::io::Result<()> {
    let mut printed = HashSet::new();

    for entry in entries {
        if printed.insert(entry.date) {
            writeln!(out, "{}", date_header(entry.date))?;
        }
        writeln!(out, "{}", format_forecast(entry))?;
    }

    Ok(())
}
