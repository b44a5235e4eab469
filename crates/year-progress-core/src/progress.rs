use std::fmt;

use time::{Date, Month, OffsetDateTime};
use tracing::{debug, trace};

use crate::error::{ProgressError, Result};
use crate::lifespan::LifespanConfig;

/// Minutes in a wall-clock day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Time span whose elapsed fraction is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Minutes since local midnight.
    Day,
    /// Day of the current month.
    Month,
    /// Ordinal day of the current year.
    Year,
    /// Days since birth over the expected lifespan.
    Lifespan,
}

impl Period {
    /// Lowercase name used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
            Self::Lifespan => "lifespan",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elapsed units of a period together with its truncated percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodProgress {
    current: u32,
    max: u32,
    percent: u8,
}

impl PeriodProgress {
    /// Validate `current` against `max` and derive the percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::ClockAnomaly`] when `max` is not positive or
    /// `current` falls outside `0..=max`.
    pub fn new(period: Period, current: i64, max: i64) -> Result<Self> {
        let anomaly = || ProgressError::ClockAnomaly {
            period,
            current,
            max,
        };
        if max <= 0 || current < 0 || current > max {
            return Err(anomaly());
        }
        let current = u32::try_from(current).map_err(|_| anomaly())?;
        let max = u32::try_from(max).map_err(|_| anomaly())?;
        let percent = percent_of(current, max).ok_or_else(anomaly)?;
        Ok(Self {
            current,
            max,
            percent,
        })
    }

    /// Elapsed units.
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Total units in the period.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// `floor(current * 100 / max)`.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Whether the period has fully elapsed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current == self.max
    }
}

/// Truncating percentage of `current` over `max`.
///
/// Returns `None` when `max` is zero or `current` exceeds it. Integer
/// arithmetic only, so 0.999 of a period reports 99.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn percent_of(current: u32, max: u32) -> Option<u8> {
    if max == 0 || current > max {
        return None;
    }
    // current <= max bounds the quotient by 100.
    Some((current as u64 * 100 / max as u64) as u8)
}

/// Gregorian leap-year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`.
#[must_use]
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Number of days in `year`.
#[must_use]
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Minutes elapsed since local midnight over the 1440 minutes of a day.
///
/// # Errors
///
/// Only fails on an internal invariant violation.
pub fn day_progress(now: OffsetDateTime) -> Result<PeriodProgress> {
    let minutes = i64::from(now.hour()) * 60 + i64::from(now.minute());
    PeriodProgress::new(Period::Day, minutes, i64::from(MINUTES_PER_DAY))
}

/// Day of month over the length of the month.
///
/// # Errors
///
/// Only fails on an internal invariant violation.
pub fn month_progress(now: OffsetDateTime) -> Result<PeriodProgress> {
    let length = days_in_month(now.year(), now.month());
    PeriodProgress::new(Period::Month, i64::from(now.day()), i64::from(length))
}

/// Ordinal day over the length of the year.
///
/// # Errors
///
/// Only fails on an internal invariant violation.
pub fn year_progress(now: OffsetDateTime) -> Result<PeriodProgress> {
    PeriodProgress::new(
        Period::Year,
        i64::from(now.ordinal()),
        i64::from(days_in_year(now.year())),
    )
}

/// Add calendar years to `date`.
///
/// Feb 29 lands on Feb 28 when the target year is not a leap year.
///
/// # Errors
///
/// Returns [`ProgressError::InvalidDate`] when the target year is outside the
/// supported calendar range.
pub fn add_years(date: Date, years: i32) -> Result<Date> {
    let target = date
        .year()
        .checked_add(years)
        .ok_or_else(|| ProgressError::configuration(format!("cannot add {years} years to {date}")))?;
    if date.month() == Month::February && date.day() == 29 && !is_leap_year(target) {
        return Ok(Date::from_calendar_date(target, Month::February, 28)?);
    }
    Ok(date.replace_year(target)?)
}

/// Whole days lived since `birth_date` over the expected total.
///
/// Past the expected date the bar stays full instead of overflowing.
///
/// # Errors
///
/// Returns [`ProgressError::Configuration`] if `life_expectancy_years` is not
/// positive or `birth_date` lies after `now`.
pub fn lifespan_progress(
    now: OffsetDateTime,
    birth_date: Date,
    life_expectancy_years: i32,
) -> Result<PeriodProgress> {
    if life_expectancy_years <= 0 {
        return Err(ProgressError::configuration(format!(
            "life expectancy must be a positive number of years, got {life_expectancy_years}"
        )));
    }
    let today = now.date();
    if birth_date > today {
        return Err(ProgressError::configuration(format!(
            "birth date {birth_date} is after today ({today})"
        )));
    }

    let expected_death = add_years(birth_date, life_expectancy_years)?;
    let total = (expected_death - birth_date).whole_days();
    let lived = (today - birth_date).whole_days();
    if lived > total {
        trace!(lived, total, "lifespan exceeded, clamping to full");
    }
    PeriodProgress::new(Period::Lifespan, lived.min(total), total)
}

/// Progress of every displayed period at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Instant all values were computed from.
    pub at: OffsetDateTime,
    /// Minutes into the day.
    pub day: PeriodProgress,
    /// Days into the month.
    pub month: PeriodProgress,
    /// Days into the year.
    pub year: PeriodProgress,
    /// Days into the expected lifespan, when enabled.
    pub lifespan: Option<PeriodProgress>,
}

/// Compute every period from a single sampled instant.
///
/// # Errors
///
/// Propagates the first failing period computation.
pub fn snapshot(now: OffsetDateTime, lifespan: Option<&LifespanConfig>) -> Result<ProgressSnapshot> {
    let lifespan = lifespan
        .map(|cfg| lifespan_progress(now, cfg.birth_date(), i32::from(cfg.life_expectancy_years())))
        .transpose()?;
    let snap = ProgressSnapshot {
        at: now,
        day: day_progress(now)?,
        month: month_progress(now)?,
        year: year_progress(now)?,
        lifespan,
    };
    debug!(
        day = snap.day.percent(),
        month = snap.month.percent(),
        year = snap.year.percent(),
        lifespan = snap.lifespan.as_ref().map(PeriodProgress::percent),
        "computed progress snapshot"
    );
    Ok(snap)
}
