//! Dates and working days.
//!
//! A working day is a day that is neither a Saturday, nor a Sunday, nor a holiday.

#[cfg(test)]
mod tests;

pub use chrono::NaiveDate;
pub use rustc_hash::FxHashSet;

use chrono::{DateTime, Datelike as _, Days, NaiveDateTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The format for an ISO 8601 calendar date, like `2024-02-29`.
pub const ISO_DATE: &str = "%Y-%m-%d";

const ISO_DATE_TIMES: [&str; 4] =
  ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Returns whether this is a valid ISO 8601 date or date-time, possibly with a UTC offset. A
/// trailing `Z` is allowed as the offset.
///
/// Fields must be zero-padded to their full width, the year has exactly four digits and no sign,
/// and no surrounding whitespace is allowed.
///
/// ```
/// # use working_days::is_valid;
/// assert!(is_valid("2024-02-29"));
/// assert!(is_valid("2024-02-29T13:45:00.123Z"));
/// assert!(!is_valid("2023-02-29"));
/// assert!(!is_valid("29/02/2024"));
/// ```
#[must_use]
pub fn is_valid(s: &str) -> bool {
  // chrono skips whitespace and accepts unpadded or signed fields, so check the shape first.
  static SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
      "^[0-9]{4}-[0-9]{2}-[0-9]{2}",
      "(?:[T ][0-9]{2}:[0-9]{2}(?::[0-9]{2}(?:\\.[0-9]+)?)?(?:[+-][0-9]{2}:[0-9]{2})?)?$",
    ))
    .expect("valid date shape")
  });
  let s = s.replace('Z', "+00:00");
  if !SHAPE.is_match(&s) {
    return false;
  }
  NaiveDate::parse_from_str(&s, ISO_DATE).is_ok()
    || ISO_DATE_TIMES.iter().any(|fmt| {
      NaiveDateTime::parse_from_str(&s, fmt).is_ok()
        || DateTime::parse_from_str(&s, &format!("{fmt}%:z")).is_ok()
    })
}

/// Parses a date with the given format. See [`chrono::format::strftime`] for the syntax.
///
/// # Errors
///
/// If `s` is not a date in that format.
pub fn parse(s: &str, format: &str) -> Result<NaiveDate, Error> {
  NaiveDate::parse_from_str(s, format).map_err(|e| Error::Parse(s.to_owned(), e))
}

/// Parses a date in the [`ISO_DATE`] format.
///
/// # Errors
///
/// If `s` is not a date in that format.
pub fn parse_iso(s: &str) -> Result<NaiveDate, Error> {
  parse(s, ISO_DATE)
}

/// Returns whether `date` is a working day.
#[must_use]
pub fn is_working_day(date: NaiveDate, holidays: &FxHashSet<NaiveDate>) -> bool {
  !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(&date)
}

/// Adds `count` working days to `date`, stepping one day at a time and only counting the working
/// days.
///
/// `date` itself is never counted, so adding 0 returns `date` even if it is not a working day.
///
/// ```
/// # use working_days::{add, FxHashSet, NaiveDate};
/// let friday = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let tuesday = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(add(friday, 2, &FxHashSet::default()).unwrap(), tuesday);
/// ```
///
/// # Errors
///
/// If the result would be past the end of the calendar.
pub fn add(
  mut date: NaiveDate,
  count: u32,
  holidays: &FxHashSet<NaiveDate>,
) -> Result<NaiveDate, Error> {
  let mut counted = 0;
  while counted < count {
    date = date.checked_add_days(Days::new(1)).ok_or(Error::OutOfRange(date))?;
    if is_working_day(date, holidays) {
      counted += 1;
    } else {
      log::trace!("skipping {date}");
    }
  }
  Ok(date)
}

/// Like [`add`], but the start date is parsed from `s` in the [`ISO_DATE`] format.
///
/// # Errors
///
/// If `s` is not a date, or the result would be past the end of the calendar.
pub fn add_str(s: &str, count: u32, holidays: &FxHashSet<NaiveDate>) -> Result<NaiveDate, Error> {
  add(parse_iso(s)?, count, holidays)
}

/// An error when working with dates.
#[derive(Debug)]
pub enum Error {
  /// The string couldn't be parsed as a date.
  Parse(String, chrono::ParseError),
  /// Stepping past this date would leave the calendar.
  OutOfRange(NaiveDate),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Parse(s, e) => write!(f, "couldn't parse date {s:?}: {e}"),
      Error::OutOfRange(date) => write!(f, "no date after {date}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Parse(_, e) => Some(e),
      Error::OutOfRange(_) => None,
    }
  }
}
