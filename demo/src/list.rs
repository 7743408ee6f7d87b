use optflow_core::option::{none, some};

/// First element of `values`, absent when empty.
pub fn head<A: Clone>(values: &[A]) -> Option<A> {
  match values {
    [first, ..] => some(first.clone()),
    [] => none(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn head_of_slices() {
    assert_eq!(head::<i32>(&[]), None);
    assert_eq!(head(&["a", "b"]), Some("a"));
  }
}
