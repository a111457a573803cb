use crate::error::{BandError, Result};
use crate::seating::{MAX_POSITIONS, MAX_ROWS};
use std::env::{self, VarError};

const ENV_BAND_LAYOUT: &str = "BAND_LAYOUT";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Row capacities to build the band from instead of prompting.
    pub layout: Option<Vec<usize>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        match env::var(ENV_BAND_LAYOUT) {
            Ok(value) => Self::from_layout(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(BandError::InvalidConfiguration(format!(
                "{ENV_BAND_LAYOUT} is not valid UTF-8: {raw:?}"
            ))),
        }
    }

    /// Parses a comma-separated capacity list such as `4,3,2`.
    pub fn from_layout(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let capacities = value
            .split(',')
            .map(|part| {
                let part = part.trim();
                match part.parse::<usize>() {
                    Ok(c) if (1..=MAX_POSITIONS).contains(&c) => Ok(c),
                    _ => Err(BandError::InvalidConfiguration(format!(
                        "{ENV_BAND_LAYOUT}: row capacity must be 1 to {MAX_POSITIONS}, got {part:?}"
                    ))),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        if capacities.len() > MAX_ROWS {
            return Err(BandError::InvalidConfiguration(format!(
                "{ENV_BAND_LAYOUT}: at most {MAX_ROWS} rows, got {}",
                capacities.len()
            )));
        }

        Ok(Self {
            layout: Some(capacities),
        })
    }
}
