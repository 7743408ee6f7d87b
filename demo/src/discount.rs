use optflow_core::option;
use optflow_core::pipe;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Discount {
  pub percentage: u32,
  pub expired: bool,
}

pub fn is_discount_valid(discount: &Discount) -> bool {
  !discount.expired
}

/// The discount as text, absent when it has expired.
pub fn discount_text(discount: Discount) -> Option<String> {
  pipe!(
    discount,
    option::from_predicate(is_discount_valid),
    option::map(|Discount { percentage, .. }| format!("{}% DISCOUNT", percentage)),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text() {
    assert_eq!(discount_text(Discount { percentage: 10, expired: false }), Some("10% DISCOUNT".to_string()));
    assert_eq!(discount_text(Discount { percentage: 20, expired: true }), None);
  }
}
