use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use super::*;
use crate::DurationUnit;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[test]
fn test_display_scalars() {
    assert_eq!(Value::Int(5).to_string(), "5");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Str("a".into()).to_string(), "a");
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(Value::Date(date(2024, 1, 15)).to_string(), "2024-01-15");
}

#[test]
fn test_display_containers_quote_strings() {
    let list = Value::List(vec![Value::Int(1), Value::Str("x".into())]);
    assert_eq!(list.to_string(), "[1, \"x\"]");
    let map = Value::map([("a", Value::Int(1))]);
    assert_eq!(map.to_string(), "{a: 1}");
}

#[test]
fn test_loose_eq_numeric_cross() {
    assert!(Value::Int(1).loose_eq(&Value::Float(1.0)));
    assert!(Value::Float(2.0).loose_eq(&Value::Int(2)));
    assert!(!Value::Int(1).loose_eq(&Value::Str("1".into())));
    assert!(!Value::Undefined.loose_eq(&Value::Undefined));
    assert!(Value::List(vec![Value::Int(1)]).loose_eq(&Value::List(vec![Value::Float(1.0)])));
}

#[test]
fn test_duration_from_parts_sums_units() {
    let d = Duration::from_parts(&[
        (1, DurationUnit::Days),
        (2, DurationUnit::Days),
        (4, DurationUnit::Hours),
    ]);
    assert_eq!(
        d,
        Some(Duration {
            days: 3,
            hours: 4,
            ..Duration::ZERO
        })
    );
    assert_eq!(Duration::from_parts(&[(i64::MAX, DurationUnit::Days), (1, DurationUnit::Days)]), None);
}

#[test]
fn test_duration_display() {
    let d = Duration {
        years: 1,
        months: 2,
        ..Duration::ZERO
    };
    assert_eq!(d.to_string(), "1 year 2 months");
    assert_eq!(Duration::ZERO.to_string(), "0 seconds");
}

#[test]
fn test_duration_month_arithmetic_clamps() {
    let start = date(2024, 1, 31).and_hms_opt(0, 0, 0).unwrap_or_default();
    let one_month = Duration {
        months: 1,
        ..Duration::ZERO
    };
    let shifted = one_month.add_to(start).map(|dt| dt.date());
    assert_eq!(shifted, Some(date(2024, 2, 29)));
}

#[test]
fn test_duration_subtract_from() {
    let start = date(2024, 3, 10).and_hms_opt(12, 0, 0).unwrap_or_default();
    let d = Duration {
        days: 10,
        hours: 13,
        ..Duration::ZERO
    };
    let expected = date(2024, 2, 28).and_hms_opt(23, 0, 0).unwrap_or_default();
    assert_eq!(d.subtract_from(start), Some(expected));
}

#[test]
fn test_duration_between() {
    let a = date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap_or_default();
    let b = date(2024, 1, 3).and_hms_opt(6, 30, 0).unwrap_or_default();
    let d = Duration::between(a, b);
    assert_eq!((d.days, d.hours, d.minutes), (2, 6, 30));
}

#[test]
fn test_json_round_trip_tagged_values() {
    let value = Value::List(vec![
        Value::Date(date(2024, 1, 15)),
        Value::Duration(Duration {
            days: 3,
            ..Duration::ZERO
        }),
        Value::Float(1.5),
        Value::Undefined,
    ]);
    let json = value.to_json();
    assert_eq!(
        json,
        serde_json::json!([{"$date": "2024-01-15"}, {"$duration": {"days": 3}}, 1.5, null])
    );
    assert_eq!(Value::from_json(&json).ok(), Some(value));
}

#[test]
fn test_json_objects_become_maps() {
    let json = serde_json::json!({"user": {"name": "ada", "age": 36}});
    let expected = Value::map([(
        "user",
        Value::map([("age", Value::Int(36)), ("name", Value::Str("ada".into()))]),
    )]);
    assert_eq!(Value::from_json(&json).ok(), Some(expected));
}

#[test]
fn test_json_rejects_bad_date_tag() {
    let json = serde_json::json!({"$date": "2024-13-45"});
    assert!(Value::from_json(&json).is_err());
}

#[test]
fn test_parse_datetime_text_forms() {
    let expected = date(2024, 1, 15).and_hms_opt(10, 30, 0);
    assert_eq!(parse_datetime_text("2024-01-15T10:30:00"), expected);
    assert_eq!(parse_datetime_text("2024-01-15 10:30:00"), expected);
    assert_eq!(parse_datetime_text("2024-01-15T10:30"), expected);
    assert_eq!(parse_datetime_text("2024-01-15T12:30:00+02:00"), expected);
    assert_eq!(parse_datetime_text("2024-01-15T10:30:00Z"), expected);
    assert_eq!(parse_datetime_text("2024-01-15T25:00:00"), None);
}
