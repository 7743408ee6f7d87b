//! Eager left-to-right evaluation.

/// Passes a value through a sequence of unary functions, left to right, and returns the result of the last one.
///
/// `pipe!(v, f1, f2, ..., fn)` evaluates to `fn(...f2(f1(v)))`. With no functions, `pipe!(v)` is `v`. Each stage
/// expression is evaluated right before it is called, in order, and receives exactly the output of the previous stage.
/// Stages can be function items, closures, or curried combinators such as [`option::map`](crate::option::map).
///
/// ```
/// use optflow_core::pipe;
/// use optflow_core::option::{self, from_predicate};
///
/// let is_long = pipe!(" hello ", str::trim, str::len, |n| n >= 3);
/// assert!(is_long);
///
/// let message = pipe!(
///   4,
///   from_predicate(|n: &i32| n % 2 == 0),
///   option::map(|n| n / 2),
///   option::get_or_else(|| 0),
/// );
/// assert_eq!(message, 2);
/// ```
///
/// A stage that does not accept the output of the stage before it is a compile error:
///
/// ```compile_fail
/// use optflow_core::pipe;
///
/// let trimmed = pipe!(" hello ", str::len, str::trim);
/// ```
#[macro_export]
macro_rules! pipe {
  ($value:expr $(,)?) => {
    $value
  };
  ($value:expr, $($stage:expr),+ $(,)?) => {{
    let value = $value;
    $(
      let value = ($stage)(value);
    )+
    value
  }};
}

/// Method-style piping: `value.pipe(f).pipe(g)` is `g(f(value))`.
pub trait Pipe: Sized {
  /// Call `f` with `self` and return its result.
  #[inline]
  fn pipe<B>(self, f: impl FnOnce(Self) -> B) -> B {
    f(self)
  }

  /// Call `f` with a reference to `self` and return its result.
  #[inline]
  fn pipe_ref<'a, B>(&'a self, f: impl FnOnce(&'a Self) -> B) -> B {
    f(self)
  }
}

impl<T> Pipe for T {}


#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use super::*;

  fn size(s: &str) -> usize { s.chars().count() }
  fn is_at_least_3(n: usize) -> bool { n >= 3 }

  #[test]
  fn no_stages_is_identity() {
    assert_eq!(crate::pipe!(5), 5);
    assert_eq!(crate::pipe!("hello",), "hello");
  }

  #[test]
  fn stages_thread_types() {
    assert_eq!(crate::pipe!("hello", size), 5);
    assert!(crate::pipe!("hello", size, is_at_least_3));
    assert!(!crate::pipe!(" hi ", str::trim, size, is_at_least_3));
    assert_eq!(crate::pipe!(3, |x: i32| x + 1, |x: i32| x.to_string(), |s: String| s + "!"), "4!");
  }

  #[test]
  fn stages_run_left_to_right_once() {
    let log = RefCell::new(Vec::new());
    let record = |name: &'static str| {
      let log = &log;
      move |x: i32| {
        log.borrow_mut().push(name);
        x + 1
      }
    };
    let result = crate::pipe!(0, record("f1"), record("f2"), record("f3"));
    assert_eq!(result, 3);
    assert_eq!(*log.borrow(), vec!["f1", "f2", "f3"]);
  }

  #[test]
  fn forwards_options_untouched() {
    let absent: Option<i32> = crate::pipe!(None, |o: Option<i32>| o);
    assert_eq!(absent, None);
  }

  #[test]
  fn method_form() {
    assert!("hello".pipe(size).pipe(is_at_least_3));
    let text = String::from("abc");
    assert_eq!(text.pipe_ref(|s| s.len()), 3);
    assert_eq!(text, "abc");
  }
}
