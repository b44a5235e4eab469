//! Launch configuration resolved from arguments and the environment.

use std::env;

use clap::ValueEnum;
use time::Date;
use tracing::debug;
use year_progress_core::lifespan::{DEFAULT_BIRTH_DATE, parse_birth_date};
use year_progress_core::{LifespanConfig, Result};

/// Environment variable overriding the birth date of the lifespan bar.
pub const BIRTH_DATE_ENV: &str = "YEAR_PROGRESS_BIRTH_DATE";

/// Optional display mode given as the first positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Add a bar for the elapsed share of an expected lifespan.
    Death,
}

/// Everything the dashboard needs before the terminal is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchConfig {
    /// Lifespan inputs when the lifespan bar is enabled.
    pub lifespan: Option<LifespanConfig>,
}

impl LaunchConfig {
    /// Resolve from the command line, reading the birth date from [`BIRTH_DATE_ENV`].
    pub fn from_env(mode: Option<Mode>, life_expectancy: Option<&str>) -> Result<Self> {
        let birth_date = env::var(BIRTH_DATE_ENV).ok();
        Self::resolve(mode, life_expectancy, birth_date.as_deref())
    }

    /// Resolve from explicit inputs.
    pub fn resolve(
        mode: Option<Mode>,
        life_expectancy: Option<&str>,
        birth_date: Option<&str>,
    ) -> Result<Self> {
        let Some(Mode::Death) = mode else {
            if let Some(raw) = life_expectancy {
                debug!(raw, "ignoring life expectancy without lifespan mode");
            }
            return Ok(Self::default());
        };
        let birth_date = resolve_birth_date(birth_date)?;
        let lifespan = LifespanConfig::from_arg(birth_date, life_expectancy)?;
        Ok(Self {
            lifespan: Some(lifespan),
        })
    }

    /// Rows the canvas needs for this configuration.
    pub const fn canvas_rows(&self) -> u16 {
        if self.lifespan.is_some() { 12 } else { 10 }
    }
}

fn resolve_birth_date(raw: Option<&str>) -> Result<Date> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => parse_birth_date(value),
        None => Ok(DEFAULT_BIRTH_DATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use year_progress_core::ProgressError;

    fn expect_ok<T>(result: Result<T>, ctx: &str) -> T {
        match result {
            Ok(value) => value,
            Err(err) => panic!("{ctx}: {err}"),
        }
    }

    #[test]
    fn no_mode_disables_lifespan() {
        let cfg = expect_ok(LaunchConfig::resolve(None, None, None), "default");
        assert!(cfg.lifespan.is_none());
        assert_eq!(cfg.canvas_rows(), 10);
    }

    #[test]
    fn life_expectancy_without_mode_is_ignored() {
        let cfg = expect_ok(LaunchConfig::resolve(None, Some("abc"), None), "ignored");
        assert!(cfg.lifespan.is_none());
    }

    #[test]
    fn death_mode_uses_default_birth_date() {
        let cfg = expect_ok(
            LaunchConfig::resolve(Some(Mode::Death), Some("80"), None),
            "death",
        );
        let lifespan = cfg.lifespan.map(|l| (l.birth_date(), l.life_expectancy_years()));
        assert_eq!(lifespan, Some((date!(1995 - 02 - 14), 80)));
        assert_eq!(cfg.canvas_rows(), 12);
    }

    #[test]
    fn death_mode_honours_birth_date_override() {
        let cfg = expect_ok(
            LaunchConfig::resolve(Some(Mode::Death), Some("90"), Some("1980-07-04")),
            "override",
        );
        assert_eq!(cfg.lifespan.map(|l| l.birth_date()), Some(date!(1980 - 07 - 04)));
    }

    #[test]
    fn blank_birth_date_falls_back_to_default() {
        let cfg = expect_ok(
            LaunchConfig::resolve(Some(Mode::Death), Some("90"), Some("  ")),
            "blank",
        );
        assert_eq!(cfg.lifespan.map(|l| l.birth_date()), Some(DEFAULT_BIRTH_DATE));
    }

    #[test]
    fn death_mode_requires_valid_life_expectancy() {
        for raw in [None, Some("eighty"), Some("0"), Some("-5")] {
            let result = LaunchConfig::resolve(Some(Mode::Death), raw, None);
            assert!(
                matches!(result, Err(ProgressError::Configuration(_))),
                "{raw:?} must be rejected"
            );
        }
    }

    #[test]
    fn malformed_birth_date_is_a_configuration_error() {
        let result = LaunchConfig::resolve(Some(Mode::Death), Some("80"), Some("02/14/1995"));
        assert!(matches!(result, Err(ProgressError::Configuration(_))));
    }
}
