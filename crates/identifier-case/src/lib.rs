//! Utilities for switching identifiers between different cases.
//!
//! Supported cases:
//!
//! - snake case (`snake_case`)
//! - kebab case (`kebab-case`)
//! - dot case (`dot.case`)
//! - camel case (`camelCase`)
//! - pascal case (`PascalCase`)

#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// A naming convention for multi-word identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
  /// `snake_case`
  Snake,
  /// `kebab-case`
  Kebab,
  /// `dot.case`
  Dot,
  /// `camelCase`
  Camel,
  /// `PascalCase`
  Pascal,
}

impl Case {
  /// All the cases.
  pub const ALL: [Case; 5] = [Case::Snake, Case::Kebab, Case::Dot, Case::Camel, Case::Pascal];

  /// Returns an example identifier written in this case.
  #[must_use]
  pub fn example(self) -> &'static str {
    match self {
      Case::Snake => "snake_case",
      Case::Kebab => "kebab-case",
      Case::Dot => "dot.case",
      Case::Camel => "camelCase",
      Case::Pascal => "PascalCase",
    }
  }

  /// Splits text written in this case into its words.
  ///
  /// Nothing is validated. Camel and pascal case only break between a lowercase letter and an
  /// uppercase letter, so acronyms stay together.
  ///
  /// ```
  /// # use identifier_case::Case;
  /// assert_eq!(Case::Snake.split("foo_bar"), ["foo", "bar"]);
  /// assert_eq!(Case::Dot.split("a.b.c"), ["a", "b", "c"]);
  /// assert_eq!(Case::Camel.split("readFile"), ["read", "File"]);
  /// assert_eq!(Case::Pascal.split("HTTPServer"), ["HTTPServer"]);
  /// ```
  #[must_use]
  pub fn split(self, text: &str) -> Vec<&str> {
    match self {
      Case::Snake => text.split('_').collect(),
      Case::Kebab => text.split('-').collect(),
      Case::Dot => text.split('.').collect(),
      Case::Camel | Case::Pascal => split_humps(text),
    }
  }

  /// Joins words into text written in this case.
  ///
  /// Camel and pascal case capitalize only the first character of each word and lowercase the
  /// rest. A digit does not start a new word, so `v2api` becomes `V2api`, not `V2Api`.
  ///
  /// ```
  /// # use identifier_case::Case;
  /// let words = ["get", "LINE", "count"];
  /// assert_eq!(Case::Kebab.join(&words), "get-line-count");
  /// assert_eq!(Case::Camel.join(&words), "getLineCount");
  /// assert_eq!(Case::Pascal.join(&words), "GetLineCount");
  /// assert_eq!(Case::Pascal.join(&["v2api"]), "V2api");
  /// assert_eq!(Case::Camel.join::<&str>(&[]), "");
  /// ```
  #[must_use]
  pub fn join<S>(self, words: &[S]) -> String
  where
    S: AsRef<str>,
  {
    match self {
      Case::Snake => join_lower(words, '_'),
      Case::Kebab => join_lower(words, '-'),
      Case::Dot => join_lower(words, '.'),
      Case::Camel => {
        let pascal = join_title(words);
        let mut cs = pascal.chars();
        match cs.next() {
          Some(c) => c.to_lowercase().chain(cs).collect(),
          None => String::new(),
        }
      }
      Case::Pascal => join_title(words),
    }
  }

  /// Returns the pattern matching a whole token written in this case.
  #[must_use]
  pub fn pattern(self) -> &'static Regex {
    &self.patterns().token
  }

  fn patterns(self) -> &'static Patterns {
    static SNAKE: Lazy<Patterns> = Lazy::new(|| Patterns::new("[0-9A-Za-z_]+"));
    static KEBAB: Lazy<Patterns> = Lazy::new(|| Patterns::new("[0-9A-Za-z-]+"));
    static DOT: Lazy<Patterns> = Lazy::new(|| Patterns::new("[0-9A-Za-z.]+"));
    static ALNUM: Lazy<Patterns> = Lazy::new(|| Patterns::new("[0-9A-Za-z]+"));
    match self {
      Case::Snake => &SNAKE,
      Case::Kebab => &KEBAB,
      Case::Dot => &DOT,
      Case::Camel | Case::Pascal => &ALNUM,
    }
  }
}

struct Patterns {
  token: Regex,
  whole: Regex,
}

impl Patterns {
  fn new(class: &str) -> Self {
    let token = format!(r"\b{class}\b");
    let whole = format!("^{token}$");
    Self {
      token: Regex::new(&token).expect("valid token pattern"),
      whole: Regex::new(&whole).expect("valid whole pattern"),
    }
  }
}

/// Switches text from one case to another.
///
/// Meant for short names, but also works on free text: if the whole text is not a single token
/// of the `from` case, every token of the `from` case found in it is switched in place, and
/// everything else is left alone.
///
/// ```
/// # use identifier_case::{switch, Case};
/// assert_eq!(switch("this_is_a_column", Case::Snake, Case::Pascal), "ThisIsAColumn");
/// assert_eq!(switch("camelCaseExample", Case::Camel, Case::Kebab), "camel-case-example");
/// assert_eq!(switch("rename my-var, please", Case::Kebab, Case::Snake), "rename my_var, please");
/// ```
#[must_use]
pub fn switch(text: &str, from: Case, to: Case) -> String {
  if from.patterns().whole.is_match(text) {
    return convert(text, from, to);
  }
  log::debug!("switching {from:?} tokens to {to:?} inside free text");
  rewrite_tokens(text, from, to)
}

/// Switches from snake case to pascal case.
///
/// ```
/// # use identifier_case::snake_to_pascal;
/// assert_eq!(snake_to_pascal("fella"), "Fella");
/// assert_eq!(snake_to_pascal("the_best"), "TheBest");
/// assert_eq!(snake_to_pascal("HEY_THERE_DUDE"), "HeyThereDude");
/// ```
#[must_use]
pub fn snake_to_pascal(text: &str) -> String {
  switch(text, Case::Snake, Case::Pascal)
}

fn convert(token: &str, from: Case, to: Case) -> String {
  to.join(&from.split(token))
}

/// Every token is collected from the original text first. Then, in that order, each token's
/// conversion replaces every whole-word occurrence of the token in the text so far.
///
/// Known sharp edge: a conversion that produces text equal to a token not yet processed will
/// itself be rewritten by that later token.
fn rewrite_tokens(text: &str, from: Case, to: Case) -> String {
  let tokens: Vec<&str> = from.pattern().find_iter(text).map(|m| m.as_str()).collect();
  let mut ret = text.to_owned();
  for token in tokens {
    let converted = convert(token, from, to);
    let word = match Regex::new(&format!(r"\b{}\b", regex::escape(token))) {
      Ok(x) => x,
      Err(e) => {
        log::error!("couldn't match token {token:?}: {e}");
        continue;
      }
    };
    log::trace!("{token:?} -> {converted:?}");
    ret = word.replace_all(&ret, NoExpand(&converted)).into_owned();
  }
  ret
}

/// Breaks on `_` and between a lowercase letter followed by an uppercase letter.
fn split_humps(text: &str) -> Vec<&str> {
  let mut ret = Vec::new();
  let mut start = 0;
  let mut prev_lower = false;
  for (idx, c) in text.char_indices() {
    if c == '_' {
      ret.push(&text[start..idx]);
      start = idx + 1;
    } else if prev_lower && c.is_ascii_uppercase() {
      ret.push(&text[start..idx]);
      start = idx;
    }
    prev_lower = c.is_ascii_lowercase();
  }
  ret.push(&text[start..]);
  ret
}

fn join_lower<S>(words: &[S], sep: char) -> String
where
  S: AsRef<str>,
{
  let mut ret = String::new();
  for (idx, word) in words.iter().enumerate() {
    if idx != 0 {
      ret.push(sep);
    }
    ret.push_str(&word.as_ref().to_lowercase());
  }
  ret
}

fn join_title<S>(words: &[S]) -> String
where
  S: AsRef<str>,
{
  let mut ret = String::new();
  for word in words {
    let mut cs = word.as_ref().chars();
    if let Some(c) = cs.next() {
      ret.extend(c.to_uppercase());
    }
    for c in cs {
      ret.extend(c.to_lowercase());
    }
  }
  ret
}
