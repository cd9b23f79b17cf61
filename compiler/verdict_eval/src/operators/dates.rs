//! Date and duration arithmetic.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use verdict_ir::{Direction, Duration, Value};

use crate::errors::date_out_of_range;
use crate::EvalResult;

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Move `instant` (a `Date` or `DateTime`) by `duration`, backwards when
/// `backwards` is set.
///
/// A `Date` stays a `Date` while the duration is whole days; otherwise the
/// result is promoted to a `DateTime`.
pub(crate) fn shift(
    instant: &Value,
    duration: &Duration,
    backwards: bool,
    operation: &str,
) -> EvalResult {
    let (start, was_date) = match instant {
        Value::Date(d) => (midnight(*d), true),
        Value::DateTime(dt) => (*dt, false),
        _ => return Ok(Value::Undefined),
    };
    let moved = if backwards {
        duration.subtract_from(start)
    } else {
        duration.add_to(start)
    }
    .ok_or_else(|| date_out_of_range(operation))?;

    Ok(if was_date && duration.is_date_only() {
        Value::Date(moved.date())
    } else {
        Value::DateTime(moved)
    })
}

/// `a - b` for two dates/datetimes.
///
/// Two `Date`s give whole days; anything involving a `DateTime` gives a
/// day/hour/minute/second/millisecond breakdown.
pub(crate) fn difference(a: &Value, b: &Value) -> Duration {
    match (a, b) {
        (Value::Date(x), Value::Date(y)) => Duration {
            days: x.signed_duration_since(*y).num_days(),
            ..Duration::ZERO
        },
        _ => Duration::between(as_datetime(b), as_datetime(a)),
    }
}

fn as_datetime(v: &Value) -> NaiveDateTime {
    match v {
        Value::Date(d) => midnight(*d),
        Value::DateTime(dt) => *dt,
        _ => NaiveDateTime::MIN,
    }
}

/// `now - d` for `ago`, `now + d` for `from now`.
pub(crate) fn relative(now: NaiveDateTime, duration: &Duration, direction: Direction) -> EvalResult {
    let moved = match direction {
        Direction::Ago => duration.subtract_from(now),
        Direction::FromNow => duration.add_to(now),
    };
    moved
        .map(Value::DateTime)
        .ok_or_else(|| date_out_of_range("relative_date"))
}
