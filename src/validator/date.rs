//! ISO 8601 date check for the schema's date field

use crate::models::{Failure, FieldValue, Metadata};
use chrono::{FixedOffset, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY-MM-DD`, optionally followed by `[T ]HH:MM[:SS[.frac]]` and an offset
static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})(?:[T ](\d{2}):(\d{2})(?::(\d{2})(?:\.(\d{1,9}))?)?(Z|[+-]\d{2}:?\d{2})?)?$",
    )
    .expect("date pattern is valid")
});

type ParsedDate = (NaiveDate, Option<NaiveTime>, Option<FixedOffset>);

/// True if `value` is a calendar date with optional time-of-day and UTC offset
///
/// Out-of-range components (year 0000, month 13, February 30, hour 24, ...)
/// are rejected.
pub fn is_iso_date(value: &str) -> bool {
    parse_date(value).is_some()
}

fn parse_date(value: &str) -> Option<ParsedDate> {
    let caps = ISO_DATE_RE.captures(value)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    // Years run 0001..=9999
    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    if year < 1 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, num(2)?, num(3)?)?;

    let time = match num(4) {
        Some(hour) => {
            let nanos = match caps.get(7) {
                // Right-pad the fraction to nanoseconds
                Some(frac) => format!("{:0<9}", frac.as_str()).parse::<u32>().ok()?,
                None => 0,
            };
            Some(NaiveTime::from_hms_nano_opt(
                hour,
                num(5)?,
                num(6).unwrap_or(0),
                nanos,
            )?)
        }
        None => None,
    };

    let offset = match caps.get(8) {
        Some(m) => Some(parse_offset(m.as_str())?),
        None => None,
    };

    Some((date, time, offset))
}

fn parse_offset(raw: &str) -> Option<FixedOffset> {
    if raw == "Z" {
        return FixedOffset::east_opt(0);
    }

    let sign = if raw.starts_with('-') { -1 } else { 1 };
    let digits: String = raw[1..].chars().filter(|c| *c != ':').collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..)?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Checks the date field of a metadata mapping
pub struct DateValidator<'a> {
    field: &'a str,
}

impl<'a> DateValidator<'a> {
    pub fn new(field: &'a str) -> Self {
        Self { field }
    }

    /// Absent, empty or non-scalar dates are left to the field validator
    pub fn validate(&self, metadata: &Metadata) -> Option<Failure> {
        let value = metadata
            .get(self.field)
            .and_then(FieldValue::as_scalar)
            .filter(|s| !s.is_empty())?;

        if is_iso_date(value) {
            return None;
        }

        Some(Failure::InvalidDate {
            field: self.field.to_string(),
            value: value.to_string(),
        })
    }
}
