//! Optional values and the combinators over them.
//!
//! The container is the native [`Option`]: a closed sum of [`None`] (absence) and [`Some`] (presence). Combinators
//! come in two forms:
//!
//! - Curried stages, as free functions in this module. Each takes its configuration (a mapping function, a fallback,
//!   a predicate) and returns a reusable function from an [`Option`], so it can be placed directly into
//!   [`pipe!`](crate::pipe!) or [`flow!`](crate::flow!).
//! - Methods, through [`OptionExt`], for the eliminations and fallbacks that [`Option`] has no inherent method for.
//!
//! All combinators are pure: they consume their input and produce a new value, and never call a mapping function or
//! fallback that is not needed.

pub use std::option::Option::{self, None, Some};

use crate::either::Either;
use crate::error::Absent;
use crate::nullable::Nullable;

#[inline]
pub const fn none<A>() -> Option<A> { None }

/// Wraps `value` in [`Some`]. Never inspects `value`; use [`from_nullable`] or [`from_predicate`] for that.
#[inline]
pub const fn some<A>(value: A) -> Option<A> { Some(value) }


/// Stage that applies `f` to a present value and leaves absence untouched, without calling `f`.
#[inline]
pub fn map<A, B>(f: impl Fn(A) -> B) -> impl Fn(Option<A>) -> Option<B> {
  move |option| match option {
    Some(a) => Some(f(a)),
    None => None,
  }
}

/// Stage that applies `f` to a present value and returns its result as is, so that optionality does not nest.
#[inline]
pub fn chain<A, B>(f: impl Fn(A) -> Option<B>) -> impl Fn(Option<A>) -> Option<B> {
  move |option| match option {
    Some(a) => f(a),
    None => None,
  }
}
pub use self::chain as flat_map;

#[inline]
pub fn flatten<A>(option: Option<Option<A>>) -> Option<A> {
  match option {
    Some(inner) => inner,
    None => None,
  }
}

/// Stage that eliminates an option: exactly one of `on_none` or `on_some` is called.
#[inline]
pub fn fold<A, B>(on_none: impl Fn() -> B, on_some: impl Fn(A) -> B) -> impl Fn(Option<A>) -> B {
  move |option| match option {
    Some(a) => on_some(a),
    None => on_none(),
  }
}
pub use self::fold as match_with;

#[inline]
pub fn get_or_else<A>(fallback: impl Fn() -> A) -> impl Fn(Option<A>) -> A {
  move |option| match option {
    Some(a) => a,
    None => fallback(),
  }
}

/// Like [`get_or_else`], but `fallback` may produce a different type. The result is the union of both types: the
/// present value is returned as [`Either::Left`], the fallback value as [`Either::Right`].
#[inline]
pub fn get_or_else_w<A, B>(fallback: impl Fn() -> B) -> impl Fn(Option<A>) -> Either<A, B> {
  move |option| match option {
    Some(a) => Either::Left(a),
    None => Either::Right(fallback()),
  }
}

#[inline]
pub fn alt<A>(fallback: impl Fn() -> Option<A>) -> impl Fn(Option<A>) -> Option<A> {
  move |option| match option {
    some @ Some(_) => some,
    None => fallback(),
  }
}

/// Lifts a possibly-null `value` into an option. See [`Nullable`] for what counts as null.
#[inline]
pub fn from_nullable<N: Nullable>(value: N) -> Option<N::Value> {
  value.into_option()
}

/// Returns a function that wraps its argument in [`Some`] when `predicate` holds for it, and returns [`None`]
/// otherwise. `predicate` is called exactly once per call.
#[inline]
pub fn from_predicate<A>(predicate: impl Fn(&A) -> bool) -> impl Fn(A) -> Option<A> {
  move |a| if predicate(&a) { Some(a) } else { None }
}

/// Returns a function that narrows its argument to `B`, producing [`Some`] of the narrowed value when the
/// [`TryFrom`] conversion succeeds, and [`None`] otherwise.
///
/// This is the narrowing form of [`from_predicate`]: a conversion that can fail is the predicate, and its success
/// proves the value is a `B`. For example, with `Circle: TryFrom<Shape>`, `from_refinement::<Circle, Shape>()` is a
/// function from `Shape` to `Option<Circle>`.
#[inline]
pub fn from_refinement<B, A>() -> impl Fn(A) -> Option<B> where
  B: TryFrom<A>
{
  |a| B::try_from(a).ok()
}


/// Method-style combinators that [`Option`] does not provide itself.
pub trait OptionExt<A>: Sized {
  fn fold<B>(self, on_none: impl FnOnce() -> B, on_some: impl FnOnce(A) -> B) -> B;

  fn chain<B>(self, f: impl FnOnce(A) -> Option<B>) -> Option<B>;

  fn alt(self, fallback: impl FnOnce() -> Option<A>) -> Option<A>;

  /// Return the value if present as [`Either::Left`], otherwise call `fallback` and return its value as
  /// [`Either::Right`].
  fn get_or_else_w<B>(self, fallback: impl FnOnce() -> B) -> Either<A, B>;

  fn ok_or_absent(self) -> Result<A, Absent>;
}

impl<A> OptionExt<A> for Option<A> {
  #[inline]
  fn fold<B>(self, on_none: impl FnOnce() -> B, on_some: impl FnOnce(A) -> B) -> B {
    match self {
      Some(a) => on_some(a),
      None => on_none(),
    }
  }

  #[inline]
  fn chain<B>(self, f: impl FnOnce(A) -> Option<B>) -> Option<B> {
    match self {
      Some(a) => f(a),
      None => None,
    }
  }

  #[inline]
  fn alt(self, fallback: impl FnOnce() -> Option<A>) -> Option<A> {
    match self {
      some @ Some(_) => some,
      None => fallback(),
    }
  }

  #[inline]
  fn get_or_else_w<B>(self, fallback: impl FnOnce() -> B) -> Either<A, B> {
    match self {
      Some(a) => Either::Left(a),
      None => Either::Right(fallback()),
    }
  }

  #[inline]
  fn ok_or_absent(self) -> Result<A, Absent> {
    self.ok_or(Absent)
  }
}
