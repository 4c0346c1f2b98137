use crate::{add, add_str, is_valid, is_working_day, parse, parse_iso, Error, FxHashSet, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn check(from: NaiveDate, count: u32, holidays: &[NaiveDate], want: NaiveDate) {
  let holidays: FxHashSet<_> = holidays.iter().copied().collect();
  assert_eq!(add(from, count, &holidays).unwrap(), want);
}

#[test]
fn weekdays() {
  // 2024-03-04 is a Monday.
  check(date(2024, 3, 4), 1, &[], date(2024, 3, 5));
  check(date(2024, 3, 4), 4, &[], date(2024, 3, 8));
}

#[test]
fn over_weekend() {
  check(date(2024, 3, 8), 1, &[], date(2024, 3, 11));
  check(date(2024, 3, 4), 5, &[], date(2024, 3, 11));
  check(date(2024, 3, 9), 1, &[], date(2024, 3, 11));
}

#[test]
fn holidays() {
  let easter_monday = date(2024, 4, 1);
  check(date(2024, 3, 29), 1, &[easter_monday], date(2024, 4, 2));
  check(date(2024, 12, 24), 1, &[date(2024, 12, 25), date(2024, 12, 26)], date(2024, 12, 27));
}

#[test]
fn zero() {
  check(date(2024, 3, 9), 0, &[], date(2024, 3, 9));
}

#[test]
fn working_day() {
  let holidays: FxHashSet<_> = [date(2024, 3, 6)].into_iter().collect();
  assert!(is_working_day(date(2024, 3, 5), &holidays));
  assert!(!is_working_day(date(2024, 3, 6), &holidays));
  assert!(!is_working_day(date(2024, 3, 10), &holidays));
}

#[test]
fn out_of_range() {
  let err = add(NaiveDate::MAX, 1, &FxHashSet::default()).unwrap_err();
  assert!(matches!(err, Error::OutOfRange(d) if d == NaiveDate::MAX));
}

#[test]
fn from_str() {
  assert_eq!(add_str("2024-03-08", 2, &FxHashSet::default()).unwrap(), date(2024, 3, 12));
  assert!(matches!(add_str("March 8th", 2, &FxHashSet::default()), Err(Error::Parse(..))));
}

#[test]
fn parsing() {
  assert_eq!(parse_iso("2000-01-31").unwrap(), date(2000, 1, 31));
  assert_eq!(parse("31/01/2000", "%d/%m/%Y").unwrap(), date(2000, 1, 31));
  let err = parse_iso("2000-13-01").unwrap_err();
  assert!(err.to_string().starts_with("couldn't parse date \"2000-13-01\""));
}

#[test]
fn validity() {
  for s in [
    "2021-06-15",
    "2021-06-15T08:30",
    "2021-06-15 08:30:15",
    "2021-06-15T08:30:15.5",
    "2021-06-15T08:30:15Z",
    "2021-06-15T08:30:15+02:00",
    "2021-06-15 08:30-05:30",
  ] {
    assert!(is_valid(s), "{s}");
  }
  for s in ["", "2021-6-15x", "2021-02-30", "15.06.2021", "2021-06-15T25:00:00", "tomorrow"] {
    assert!(!is_valid(s), "{s}");
  }
}

#[test]
fn validity_near_misses() {
  for s in [
    " 2021-06-15",
    "2021-06-15 ",
    "2021-6-5",
    "2021-06-5",
    "+2021-06-15",
    "-2021-06-15",
    "12021-06-15",
    "2021-06-15T8:30",
    "2021-06-15T08:30:15+2:00",
    "2021-06-15T08:30:15ZZ",
  ] {
    assert!(!is_valid(s), "{s:?}");
  }
}
