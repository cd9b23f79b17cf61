//! Calendar-aware durations.

use std::fmt;

use chrono::{Months, NaiveDateTime, TimeDelta};

use crate::DurationUnit;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

/// A duration kept as independent unit fields.
///
/// Fields are not normalized: `90 minutes` stays 90 minutes. Years and
/// months are calendar units and are applied with month arithmetic, the
/// remaining fields as a fixed number of milliseconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
    };

    /// Sum of `(amount, unit)` pairs. `None` on overflow.
    pub fn from_parts(parts: &[(i64, DurationUnit)]) -> Option<Duration> {
        parts
            .iter()
            .try_fold(Duration::ZERO, |acc, &(amount, unit)| acc.with_added(unit, amount))
    }

    /// Field for `unit`.
    pub fn get(&self, unit: DurationUnit) -> i64 {
        match unit {
            DurationUnit::Years => self.years,
            DurationUnit::Months => self.months,
            DurationUnit::Weeks => self.weeks,
            DurationUnit::Days => self.days,
            DurationUnit::Hours => self.hours,
            DurationUnit::Minutes => self.minutes,
            DurationUnit::Seconds => self.seconds,
            DurationUnit::Milliseconds => self.milliseconds,
        }
    }

    fn field_mut(&mut self, unit: DurationUnit) -> &mut i64 {
        match unit {
            DurationUnit::Years => &mut self.years,
            DurationUnit::Months => &mut self.months,
            DurationUnit::Weeks => &mut self.weeks,
            DurationUnit::Days => &mut self.days,
            DurationUnit::Hours => &mut self.hours,
            DurationUnit::Minutes => &mut self.minutes,
            DurationUnit::Seconds => &mut self.seconds,
            DurationUnit::Milliseconds => &mut self.milliseconds,
        }
    }

    /// Copy with `amount` added to the `unit` field.
    pub fn with_added(mut self, unit: DurationUnit, amount: i64) -> Option<Duration> {
        let field = self.field_mut(unit);
        *field = field.checked_add(amount)?;
        Some(self)
    }

    fn zip_with(self, other: Duration, f: impl Fn(i64, i64) -> Option<i64>) -> Option<Duration> {
        let mut out = Duration::ZERO;
        for unit in DurationUnit::ALL {
            *out.field_mut(unit) = f(self.get(unit), other.get(unit))?;
        }
        Some(out)
    }

    pub fn checked_add(self, other: Duration) -> Option<Duration> {
        self.zip_with(other, i64::checked_add)
    }

    pub fn checked_sub(self, other: Duration) -> Option<Duration> {
        self.zip_with(other, i64::checked_sub)
    }

    pub fn checked_mul(self, factor: i64) -> Option<Duration> {
        self.zip_with(Duration::ZERO, |field, _| field.checked_mul(factor))
    }

    pub fn checked_neg(self) -> Option<Duration> {
        self.checked_mul(-1)
    }

    pub fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    /// True when only calendar units and whole days/weeks are set.
    pub fn is_date_only(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.milliseconds == 0
    }

    /// Length in milliseconds, counting a year as 365 days and a month as 30.
    pub fn approx_millis(&self) -> i128 {
        let fixed = i128::from(self.fixed_millis_wide());
        let calendar = i128::from(self.years) * 365 + i128::from(self.months) * 30;
        fixed + calendar * i128::from(MS_PER_DAY)
    }

    fn fixed_millis_wide(&self) -> i64 {
        // Saturates; only used for approximate ordering.
        self.weeks
            .saturating_mul(MS_PER_WEEK)
            .saturating_add(self.days.saturating_mul(MS_PER_DAY))
            .saturating_add(self.hours.saturating_mul(MS_PER_HOUR))
            .saturating_add(self.minutes.saturating_mul(MS_PER_MINUTE))
            .saturating_add(self.seconds.saturating_mul(MS_PER_SECOND))
            .saturating_add(self.milliseconds)
    }

    /// Non-calendar part as a time delta. `None` on overflow.
    fn fixed_delta(&self) -> Option<TimeDelta> {
        let ms = self
            .weeks
            .checked_mul(MS_PER_WEEK)?
            .checked_add(self.days.checked_mul(MS_PER_DAY)?)?
            .checked_add(self.hours.checked_mul(MS_PER_HOUR)?)?
            .checked_add(self.minutes.checked_mul(MS_PER_MINUTE)?)?
            .checked_add(self.seconds.checked_mul(MS_PER_SECOND)?)?
            .checked_add(self.milliseconds)?;
        TimeDelta::try_milliseconds(ms)
    }

    /// Move `instant` forward by this duration, calendar units first.
    ///
    /// Month arithmetic clamps to the last day of the month
    /// (`Jan 31 + 1 month = Feb 28/29`). `None` when the result leaves
    /// the representable range.
    pub fn add_to(&self, instant: NaiveDateTime) -> Option<NaiveDateTime> {
        let months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let shifted = shift_months(instant, months)?;
        shifted.checked_add_signed(self.fixed_delta()?)
    }

    /// Move `instant` backward by this duration.
    pub fn subtract_from(&self, instant: NaiveDateTime) -> Option<NaiveDateTime> {
        self.checked_neg()?.add_to(instant)
    }

    /// Duration of whole milliseconds between two instants (`later - earlier`).
    pub fn between(earlier: NaiveDateTime, later: NaiveDateTime) -> Duration {
        let delta = later.signed_duration_since(earlier);
        let ms = delta.num_milliseconds();
        Duration {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
            milliseconds: ms % MS_PER_SECOND,
            ..Duration::ZERO
        }
    }
}

fn shift_months(instant: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        instant.checked_add_months(Months::new(magnitude))
    } else {
        instant.checked_sub_months(Months::new(magnitude))
    }
}

/// `1 year 2 months`; a zero duration prints as `0 seconds`.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0 seconds");
        }
        let mut first = true;
        for unit in DurationUnit::ALL {
            let amount = self.get(unit);
            if amount == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{amount} {}", unit.word_for(amount))?;
            first = false;
        }
        Ok(())
    }
}
