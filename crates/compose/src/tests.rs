use crate::{compose, Endo};

#[test]
fn empty_is_identity() {
  let id = compose::<u8>(Vec::new());
  assert_eq!(id(7), 7);
}

#[test]
fn left_to_right() {
  let mut fns: Vec<Endo<'_, i64>> = Vec::new();
  fns.push(Box::new(|x: i64| x - 1));
  fns.push(Box::new(|x: i64| x * 10));
  fns.push(Box::new(|x: i64| x + 3));
  assert_eq!(compose(fns)(5), 43);
}

#[test]
fn borrows_environment() {
  let suffix = String::from("!");
  let mut fns: Vec<Endo<'_, String>> = Vec::new();
  fns.push(Box::new(|s: String| s.to_uppercase()));
  fns.push(Box::new(|s: String| s + suffix.as_str()));
  assert_eq!(compose(fns)("hi".to_string()), "HI!");
}

#[test]
fn macro_mixed_types() {
  let f = compose!(|x: u32| x + 1);
  assert_eq!(f(1), 2);
  let g = compose!(|x: u32| x * 3, |x: u32| x.to_string(), |s: String| s.len(),);
  assert_eq!(g(40), 3);
}
