//! Utilities for cleaning up strings.


pub use smol_str::SmolStr;

/// When to title-case a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleCase {
  /// Never.
  #[default]
  No,
  /// Only if the string is entirely lowercase or entirely uppercase, so that names with
  /// deliberate casing (like `McDonald`) stay as they are.
  IfUniform,
  /// Always.
  Always,
}

/// Cleans up a string: trims it, collapses every run of whitespace into one space, and maybe
/// title-cases it.
///
/// Returns `if_null` when `s` is missing or empty.
///
/// ```
/// # use str_util::{clean, TitleCase};
/// assert_eq!(clean(Some("  hello \t\n world "), TitleCase::No, None).as_deref(), Some("hello world"));
/// assert_eq!(clean(Some("JOHN SMITH"), TitleCase::IfUniform, None).as_deref(), Some("John Smith"));
/// assert_eq!(clean(Some("Ronald McDonald"), TitleCase::IfUniform, None).as_deref(), Some("Ronald McDonald"));
/// assert_eq!(clean(Some(""), TitleCase::No, Some("n/a")).as_deref(), Some("n/a"));
/// assert_eq!(clean(None, TitleCase::No, None), None);
/// ```
#[must_use]
pub fn clean(s: Option<&str>, title_case: TitleCase, if_null: Option<&str>) -> Option<String> {
  let s = match s {
    Some(s) if !s.is_empty() => s,
    _ => return if_null.map(ToOwned::to_owned),
  };
  let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
  let ret = match title_case {
    TitleCase::No => collapsed,
    TitleCase::Always => title(&collapsed),
    TitleCase::IfUniform => {
      if is_uniform(&collapsed) {
        title(&collapsed)
      } else {
        collapsed
      }
    }
  };
  Some(ret)
}

/// Title-cases a string. Every cased character is uppercased if the character before it is not
/// cased, and lowercased otherwise.
///
/// ```
/// # use str_util::title;
/// assert_eq!(title("hello wORLD"), "Hello World");
/// assert_eq!(title("o'neil 2nd"), "O'Neil 2Nd");
/// ```
#[must_use]
pub fn title(s: &str) -> String {
  let mut ret = String::with_capacity(s.len());
  let mut prev_cased = false;
  for c in s.chars() {
    if prev_cased {
      ret.extend(c.to_lowercase());
    } else {
      ret.extend(c.to_uppercase());
    }
    prev_cased = is_cased(c);
  }
  ret
}

/// Splits a string holding a list of items on `sep`, trimming each item. An empty string is an
/// empty list.
///
/// ```
/// # use str_util::split_list;
/// assert_eq!(split_list("a, b ,c", ","), ["a", "b", "c"]);
/// assert_eq!(split_list("x|| y", "|"), ["x", "", "y"]);
/// assert!(split_list("", ",").is_empty());
/// ```
#[must_use]
pub fn split_list(s: &str, sep: &str) -> Vec<SmolStr> {
  if s.is_empty() {
    return Vec::new();
  }
  s.split(sep).map(|item| SmolStr::new(item.trim())).collect()
}

fn is_cased(c: char) -> bool {
  c.is_lowercase() || c.is_uppercase()
}

/// Whether there is at least one cased character, and all cased characters have the same case.
fn is_uniform(s: &str) -> bool {
  let mut lower = false;
  let mut upper = false;
  for c in s.chars() {
    lower |= c.is_lowercase();
    upper |= c.is_uppercase();
  }
  lower != upper
}
