use time::Date;
use time::macros::{date, format_description};

use crate::error::{ProgressError, Result};

/// Birth date used when none is configured.
pub const DEFAULT_BIRTH_DATE: Date = date!(1995 - 02 - 14);

/// Validated inputs for the lifespan bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifespanConfig {
    birth_date: Date,
    life_expectancy_years: u16,
}

impl LifespanConfig {
    /// Build a configuration, rejecting non-positive expectancies.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::Configuration`] if `life_expectancy_years` is
    /// zero, negative, or too large to count in calendar years.
    pub fn new(birth_date: Date, life_expectancy_years: i64) -> Result<Self> {
        if life_expectancy_years <= 0 {
            return Err(ProgressError::configuration(format!(
                "life expectancy must be a positive number of years, got {life_expectancy_years}"
            )));
        }
        let life_expectancy_years = u16::try_from(life_expectancy_years).map_err(|_| {
            ProgressError::configuration(format!(
                "life expectancy of {life_expectancy_years} years is out of range"
            ))
        })?;
        Ok(Self {
            birth_date,
            life_expectancy_years,
        })
    }

    /// Build a configuration from the raw command-line value.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::Configuration`] when the value is missing,
    /// not an integer, or not positive.
    pub fn from_arg(birth_date: Date, raw: Option<&str>) -> Result<Self> {
        let raw = raw.ok_or_else(|| {
            ProgressError::configuration("lifespan mode requires a life expectancy in years")
        })?;
        let years = parse_life_expectancy(raw)?;
        Self::new(birth_date, years)
    }

    /// Date the lifespan is counted from.
    #[must_use]
    pub const fn birth_date(&self) -> Date {
        self.birth_date
    }

    /// Expected lifespan in calendar years.
    #[must_use]
    pub const fn life_expectancy_years(&self) -> u16 {
        self.life_expectancy_years
    }
}

/// Parse a life expectancy given in whole years.
///
/// # Errors
///
/// Returns [`ProgressError::Configuration`] for non-numeric input.
pub fn parse_life_expectancy(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|err| {
        ProgressError::configuration(format!("life expectancy '{raw}' is not an integer: {err}"))
    })
}

/// Parse an ISO `YYYY-MM-DD` birth date.
///
/// # Errors
///
/// Returns [`ProgressError::Configuration`] if the value is not a valid date.
pub fn parse_birth_date(raw: &str) -> Result<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &format).map_err(|err| {
        ProgressError::configuration(format!("birth date '{raw}' is not a YYYY-MM-DD date: {err}"))
    })
}
