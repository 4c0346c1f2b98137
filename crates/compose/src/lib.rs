//! Function composition.

#[cfg(test)]
mod tests;

/// A boxed function from `T` to `T`.
pub type Endo<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// Composes the functions so they run from left to right. With no functions, this is the
/// identity.
///
/// ```
/// use compose::{compose, Endo};
///
/// let mut fns: Vec<Endo<'_, i32>> = Vec::new();
/// fns.push(Box::new(|x: i32| x + 1));
/// fns.push(Box::new(|x: i32| x * 2));
/// let plus_one_times_two = compose(fns);
/// assert_eq!(plus_one_times_two(3), 8);
/// ```
#[must_use]
pub fn compose<'a, T>(fns: Vec<Endo<'a, T>>) -> impl Fn(T) -> T + 'a
where
  T: 'a,
{
  move |x| fns.iter().fold(x, |acc, f| f(acc))
}

/// Composes functions from left to right, like [`compose()`]. But because it's a macro, the
/// functions may each have different argument and return types.
///
/// ```
/// use compose::compose;
///
/// let len_then_double = compose!(str::len, |n: usize| n * 2, |n: usize| n.to_string());
/// assert_eq!(len_then_double("hey"), "6");
/// ```
#[macro_export]
macro_rules! compose {
  ($f:expr $(,)?) => {
    $f
  };
  ($f:expr, $($rest:expr),+ $(,)?) => {{
    let f = $f;
    let g = $crate::compose!($($rest),+);
    move |x| g(f(x))
  }};
}
