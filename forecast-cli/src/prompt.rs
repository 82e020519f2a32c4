use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use forecast_core::Location;

pub const CITY_PROMPT: &str = "Type the city you want the weather for:";
pub const COUNTRY_PROMPT: &str = "Type the 2-letter country code for the country the city is in:";

/// Something that can ask the user a question and return the raw answer.
pub trait Prompt {
    fn ask(&mut self, message: &str) -> anyhow::Result<String>;
}

/// Interactive terminal prompt.
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn ask(&mut self, message: &str) -> anyhow::Result<String> {
        inquire::Text::new(message).prompt().context("Failed to read answer")
    }
}

/// Plain line-based prompt for when stdin is not a terminal.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, message: &str) -> anyhow::Result<String> {
        write!(self.output, "{message} ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read from standard input")?;
        if read == 0 {
            bail!("Standard input closed before an answer was given");
        }

        // Only the line terminator goes; surrounding whitespace is part of the answer.
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}

/// Ask for city and country until both are non-empty.
///
/// Values given up front (e.g. from command-line flags) are used as-is unless empty.
pub fn collect_location<P: Prompt + ?Sized>(
    prompt: &mut P,
    city: Option<String>,
    country: Option<String>,
) -> anyhow::Result<Location> {
    let city = answer(prompt, CITY_PROMPT, city)?;
    let country = answer(prompt, COUNTRY_PROMPT, country)?;

    Ok(Location::new(city, country)?)
}

fn answer<P: Prompt + ?Sized>(
    prompt: &mut P,
    message: &str,
    preset: Option<String>,
) -> anyhow::Result<String> {
    if let Some(value) = preset.filter(|v| !v.is_empty()) {
        return Ok(value);
    }

    loop {
        let value = prompt.ask(message)?;
        if !value.is_empty() {
            return Ok(value);
        }
        log::debug!("Empty answer to {message:?}, asking again");
    }
}
