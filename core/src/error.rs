/// Absence of a value, as an error.
///
/// Carries no reason: it only says that a value was expected but not present. Produced by
/// [`OptionExt::ok_or_absent`](crate::option::OptionExt::ok_or_absent) to leave the [`Option`] world at a boundary
/// where errors are propagated with `?`.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("Value is absent")]
pub struct Absent;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(Absent.to_string(), "Value is absent");
  }

  #[test]
  fn boxes_into_dyn_error() {
    fn first_even(values: &[i32]) -> Result<i32, Box<dyn std::error::Error>> {
      let even = values.iter().copied().find(|v| v % 2 == 0).ok_or(Absent)?;
      Ok(even)
    }
    assert_eq!(first_even(&[1, 4]).ok(), Some(4));
    assert_eq!(first_even(&[1, 3]).map_err(|e| e.to_string()), Err("Value is absent".to_string()));
  }
}
