//! Pipeline stages that log what passes through them, and otherwise return their input unchanged.

use std::fmt::Debug;

/// Stage that logs, at trace level, whether the option passing through is present.
#[inline]
pub fn trace<A>(label: &'static str) -> impl Fn(Option<A>) -> Option<A> {
  move |option| {
    tracing::trace!(label, present = option.is_some(), "option stage");
    option
  }
}

/// Stage that logs, at trace level, the value passing through.
#[inline]
pub fn inspect<A: Debug>(label: &'static str) -> impl Fn(A) -> A {
  move |value| {
    tracing::trace!(label, ?value, "pipeline stage");
    value
  }
}
