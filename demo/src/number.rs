use optflow_core::either::Either;
use optflow_core::option::{self, none, some};
use optflow_core::pipe;

use crate::list::head;

/// Multiplicative inverse of `x`, absent for zero.
pub fn inverse(x: f64) -> Option<f64> {
  if x == 0.0 { none() } else { some(1.0 / x) }
}

pub fn ui_message_with_inverse(x: f64) -> String {
  pipe!(
    x,
    inverse,
    option::fold(
      || "Cannot get the inverse".to_string(),
      |ix: f64| format!("The inverse of {} is {}", x, ix),
    )
  )
}

pub fn safe_inverse(x: f64) -> f64 {
  pipe!(x, inverse, option::get_or_else(|| 0.0))
}

pub fn safe_inverse_w(x: f64) -> Either<f64, &'static str> {
  pipe!(x, inverse, option::get_or_else_w(|| "invalid"))
}

/// Inverse of the first number: absent when there are no numbers, present but absent when the first is zero.
pub fn inverse_head(ns: &[f64]) -> Option<Option<f64>> {
  pipe!(ns, head, option::map(inverse))
}

pub fn inverse_head_flat(ns: &[f64]) -> Option<f64> {
  pipe!(ns, head, option::chain(inverse))
}
