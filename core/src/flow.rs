//! Lazy left-to-right composition.
//!
//! Two ways to compose:
//!
//! - [`flow!`](crate::flow!) builds a closure. It is the most convenient, but the type of the result cannot be named.
//! - [`Flow`] builds a composed function value whose type can be named, for example to store it in a struct field. Its
//!   first function may take up to 10 arguments, passed as a tuple through [`Func`].
//!
//! In both cases, every function after the first is unary and must accept the output type of the function before it.
//! A mismatch is a compile error at the point of composition.

use std::marker::PhantomData;

/// Composes functions left to right into a single function, without calling any of them.
///
/// `flow!(f1, f2, ..., fn)` returns a closure `h` with `h(x) == fn(...f2(f1(x)))`. `flow!(f)` returns `f` itself.
///
/// The first function may take several arguments; name them before `=>`: `flow!((a, b) => f1, f2, ..., fn)` returns
/// a closure `h` with `h(a, b) == fn(...f2(f1(a, b)))`.
///
/// The closure takes ownership of all functions, and implements [`Fn`] when all of them do, so it can be called any
/// number of times.
///
/// ```
/// use optflow_core::flow;
///
/// fn size(s: &str) -> usize { s.len() }
/// fn is_at_least_3(n: usize) -> bool { n >= 3 }
/// fn concat(a: &str, b: &str) -> String { format!("{}{}", a, b) }
///
/// let is_long_enough = flow!(size, is_at_least_3);
/// assert!(is_long_enough("hello"));
/// assert!(!is_long_enough("hi"));
///
/// let is_valid = flow!((a, b) => concat, |s: String| size(s.trim()), is_at_least_3);
/// assert!(is_valid(" h", "ey "));
/// assert!(!is_valid(" h", "i "));
/// ```
///
/// A stage that does not accept the output of the stage before it is a compile error, even if the flow is never called:
///
/// ```compile_fail
/// use optflow_core::flow;
///
/// fn size(s: String) -> usize { s.len() }
/// fn shout(s: String) -> String { s.to_uppercase() }
///
/// let h = flow!(size, shout);
/// ```
#[macro_export]
macro_rules! flow {
  (($($arg:ident),+ $(,)?) => $first:expr $(,)?) => {{
    let first = $first;
    move |$($arg),+| first($($arg),+)
  }};
  (($($arg:ident),+ $(,)?) => $first:expr, $($rest:expr),+ $(,)?) => {{
    let first = $first;
    let rest = $crate::flow!($($rest),+);
    move |$($arg),+| rest(first($($arg),+))
  }};
  ($first:expr $(,)?) => {
    $first
  };
  ($first:expr, $($rest:expr),+ $(,)?) => {{
    let first = $first;
    let rest = $crate::flow!($($rest),+);
    move |value| rest(first(value))
  }};
}


/// A function taking its arguments as the tuple `Args`.
///
/// Implemented for every [`Fn`] of up to 10 arguments, and for [`Flow`].
pub trait Func<Args> {
  type Output;

  fn apply(&self, args: Args) -> Self::Output;
}

macro_rules! impl_func {
  ($($arg:ident),*) => {
    impl<F, R, $($arg),*> Func<($($arg,)*)> for F where
      F: Fn($($arg),*) -> R
    {
      type Output = R;
      #[inline]
      #[allow(non_snake_case)]
      fn apply(&self, ($($arg,)*): ($($arg,)*)) -> R { self($($arg),*) }
    }
  };
}

impl_func!();
impl_func!(A1);
impl_func!(A1, A2);
impl_func!(A1, A2, A3);
impl_func!(A1, A2, A3, A4);
impl_func!(A1, A2, A3, A4, A5);
impl_func!(A1, A2, A3, A4, A5, A6);
impl_func!(A1, A2, A3, A4, A5, A6, A7);
impl_func!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_func!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_func!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);


#[derive(Default, Clone, Copy, Debug)]
pub struct Identity;

impl<A> Func<(A,)> for Identity {
  type Output = A;
  #[inline]
  fn apply(&self, (a,): (A,)) -> A { a }
}


/// Composition of `first`, taking arguments `Args`, followed by the unary `rest`.
///
/// Created with [`flow`], extended with [`then`](Self::then). Every extension changes the type of the flow, so the
/// argument and output types of each stage are checked when the flow is built.
#[must_use]
pub struct Flow<Args, F, G> {
  first: F,
  rest: G,
  _args: PhantomData<fn(Args)>,
}

/// Start a [`Flow`] with `first`, which takes its arguments as the tuple `Args`.
#[inline]
pub fn flow<Args, F: Func<Args>>(first: F) -> Flow<Args, F, Identity> {
  Flow { first, rest: Identity, _args: PhantomData }
}

impl<Args, F, G> Flow<Args, F, G> where
  Self: Func<Args>
{
  /// Return a new flow that passes the output of this flow to `next`, which must accept it:
  ///
  /// ```compile_fail
  /// use optflow_core::flow::flow;
  ///
  /// fn size(s: String) -> usize { s.len() }
  /// fn shout(s: String) -> String { s.to_uppercase() }
  ///
  /// let h = flow(size).then(shout);
  /// ```
  #[inline]
  pub fn then<H>(self, next: H) -> Flow<Args, Self, H> where
    H: Func<(<Self as Func<Args>>::Output,)>
  {
    Flow { first: self, rest: next, _args: PhantomData }
  }

  #[inline]
  pub fn into_fn(self) -> impl Fn(Args) -> <Self as Func<Args>>::Output {
    move |args| self.apply(args)
  }
}

impl<Args, F, G> Func<Args> for Flow<Args, F, G> where
  F: Func<Args>,
  G: Func<(F::Output,)>,
{
  type Output = G::Output;

  #[inline]
  fn apply(&self, args: Args) -> Self::Output {
    self.rest.apply((self.first.apply(args),))
  }
}

impl<Args, F: Clone, G: Clone> Clone for Flow<Args, F, G> {
  #[inline]
  fn clone(&self) -> Self {
    Self { first: self.first.clone(), rest: self.rest.clone(), _args: PhantomData }
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use crate::option;

  use super::*;

  fn size(s: String) -> usize { s.chars().count() }
  fn trim(s: String) -> String { s.trim().to_string() }
  fn is_at_least_3(n: usize) -> bool { n >= 3 }
  fn concat(s1: String, s2: String) -> String { s1 + &s2 }

  #[test]
  fn single_function_is_itself() {
    let h = crate::flow!(size);
    assert_eq!(h("hello".to_string()), 5);
  }

  #[test]
  fn unary_composition() {
    let is_long_enough = crate::flow!(size, is_at_least_3);
    assert!(is_long_enough("hello".to_string()));
    assert!(!is_long_enough("hi".to_string()));

    let is_valid = crate::flow!(trim, size, is_at_least_3);
    assert!(!is_valid(" hi ".to_string()));
    assert!(is_valid(" hey ".to_string()));
  }

  #[test]
  fn n_ary_first_function() {
    let is_valid = crate::flow!((s1, s2) => concat, trim, size, is_at_least_3);
    assert!(is_valid(" h".to_string(), "ey ".to_string()));
    assert!(!is_valid(" h".to_string(), "i ".to_string()));

    let sum = crate::flow!((a, b, c) => |a: i32, b: i32, c: i32| a + b + c);
    assert_eq!(sum(1, 2, 3), 6);
  }

  #[test]
  fn nothing_runs_until_called() {
    let calls = Cell::new(0);
    let counted = |x: i32| {
      calls.set(calls.get() + 1);
      x * 2
    };
    let h = crate::flow!(counted, |x: i32| x + 1);
    assert_eq!(calls.get(), 0);
    assert_eq!(h(1), 3);
    assert_eq!(h(1), 3);
    assert_eq!(calls.get(), 2);
  }

  #[test]
  fn combinator_stages() {
    let best = crate::flow!(
      |titles: Vec<String>| titles.into_iter().next(),
      option::map(|s: String| s.to_uppercase()),
      option::map(|s: String| format!("Best - {}", s)),
    );
    assert_eq!(best(vec!["a".to_string(), "b".to_string()]), Some("Best - A".to_string()));
    assert_eq!(best(vec![]), None);
  }

  #[test]
  fn func_arities() {
    assert_eq!((|| 1).apply(()), 1);
    assert_eq!(size.apply(("abc".to_string(),)), 3);
    assert_eq!(concat.apply(("a".to_string(), "b".to_string())), "ab");
    let ten = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8, i: u8, j: u8| a + b + c + d + e + f + g + h + i + j;
    assert_eq!(ten.apply((1, 1, 1, 1, 1, 1, 1, 1, 1, 1)), 10);
    assert_eq!(Identity.apply((7,)), 7);
  }

  #[test]
  fn flow_value() {
    let is_valid = flow(concat).then(trim).then(size).then(is_at_least_3);
    assert!(is_valid.apply((" h".to_string(), "ey ".to_string())));
    assert!(!is_valid.apply((" h".to_string(), "i ".to_string())));

    let only_first: Flow<(String, String), _, _> = flow(concat);
    assert_eq!(only_first.apply(("a".to_string(), "b".to_string())), "ab");
  }

  #[test]
  fn flow_value_nests_and_clones() {
    let length = flow(trim).then(size);
    let is_long_enough = flow(length.clone()).then(is_at_least_3);
    assert_eq!(length.apply((" abc ".to_string(),)), 3);
    assert!(is_long_enough.apply((" abc ".to_string(),)));

    let f = is_long_enough.into_fn();
    assert!(!f((" a ".to_string(),)));
    assert!(f(("abcd".to_string(),)));
  }

  #[test]
  fn same_input_same_output() {
    let h = flow(|x: i32| x * 3).then(|x: i32| x - 1);
    assert_eq!(h.apply((4,)), h.apply((4,)));
    assert_eq!(h.apply((4,)), 11);
  }
}
