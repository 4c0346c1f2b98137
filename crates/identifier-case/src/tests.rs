use crate::{switch, Case};

fn check(text: &str, from: Case, to: Case, want: &str) {
  assert_eq!(switch(text, from, to), want, "{text:?} from {from:?} to {to:?}");
}

#[test]
fn whole_token() {
  check("snake_case_example", Case::Snake, Case::Pascal, "SnakeCaseExample");
  check("kebab-case-example", Case::Kebab, Case::Camel, "kebabCaseExample");
  check("dot.case.example", Case::Dot, Case::Snake, "dot_case_example");
  check("camelCaseExample", Case::Camel, Case::Snake, "camel_case_example");
  check("PascalCaseExample", Case::Pascal, Case::Dot, "pascal.case.example");
}

#[test]
fn empty() {
  for from in Case::ALL {
    for to in Case::ALL {
      check("", from, to, "");
    }
  }
}

#[test]
fn acronym_not_split() {
  assert_eq!(Case::Pascal.split("HTTPServer"), ["HTTPServer"]);
  check("HTTPServer", Case::Pascal, Case::Snake, "httpserver");
  check("parseHTTPResponse", Case::Camel, Case::Kebab, "parse-httpresponse");
}

#[test]
fn digits_not_split() {
  check("utf8Decoder", Case::Camel, Case::Snake, "utf8decoder");
  check("v2api", Case::Snake, Case::Pascal, "V2api");
  check("2fa_code", Case::Snake, Case::Camel, "2faCode");
  assert_eq!(Case::Pascal.join(&["x11", "3rd"]), "X113rd");
}

#[test]
fn free_text() {
  // every snake-shaped token converts, including plain words.
  check("The column_name is here", Case::Snake, Case::Pascal, "The ColumnName Is Here");
  check("rename fooBar to bazQux!", Case::Camel, Case::Snake, "rename foo_bar to baz_qux!");
}

#[test]
fn free_text_trailing_separator() {
  check("Open config.file.path.", Case::Dot, Case::Snake, "open config_file_path.");
  check("see -my-flag- now", Case::Kebab, Case::Camel, "see -myFlag- now");
}

#[test]
fn free_text_repeated_token() {
  check("a_b, a_b and a_bc", Case::Snake, Case::Kebab, "a-b, a-b and a-bc");
}

#[test]
fn free_text_dot_is_literal() {
  // the `.` in a found token must not match arbitrary characters.
  check("x.y (xzy)", Case::Dot, Case::Kebab, "x-y (xzy)");
}

#[test]
fn no_tokens() {
  check("  ,;!  ", Case::Camel, Case::Snake, "  ,;!  ");
}

#[test]
fn same_case_normalizes() {
  check("Mixed_CASE", Case::Snake, Case::Snake, "mixed_case");
  check("fooBAR", Case::Camel, Case::Camel, "fooBar");
}

#[test]
fn malformed_input() {
  assert_eq!(Case::Pascal.split("Foo_barBaz"), ["Foo", "bar", "Baz"]);
  assert_eq!(Case::Snake.split("_lead"), ["", "lead"]);
  assert_eq!(Case::Kebab.split(""), [""]);
}

#[test]
fn join_then_split() {
  let words = ["alpha", "be2ta", "gamma"];
  for case in Case::ALL {
    let joined = case.join(&words);
    let want = match case {
      Case::Snake | Case::Kebab | Case::Dot => words,
      Case::Camel => ["alpha", "Be2ta", "Gamma"],
      Case::Pascal => ["Alpha", "Be2ta", "Gamma"],
    };
    assert_eq!(case.split(&joined), want, "{case:?}");
  }
}

#[test]
fn examples_are_whole_tokens() {
  for case in Case::ALL {
    let example = case.example();
    let m = case.pattern().find(example).expect("example should match");
    assert_eq!(m.as_str(), example);
  }
}
