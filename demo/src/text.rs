use optflow_core::{flow, pipe};

pub fn size(s: String) -> usize { s.chars().count() }
pub fn trim(s: String) -> String { s.trim().to_string() }
pub fn is_at_least_3(n: usize) -> bool { n >= 3 }
pub fn concat(s1: String, s2: String) -> String { s1 + &s2 }

/// Whether `s`, trimmed, has at least 3 characters.
pub fn is_valid(s: &str) -> bool {
  pipe!(s.to_string(), trim, size, is_at_least_3)
}

pub fn is_long_enough() -> impl Fn(String) -> bool {
  flow!(size, is_at_least_3)
}

pub fn is_valid_trimmed() -> impl Fn(String) -> bool {
  flow!(trim, size, is_at_least_3)
}

/// Whether two strings, concatenated and trimmed, have at least 3 characters.
pub fn is_valid_concat() -> impl Fn(String, String) -> bool {
  flow!((s1, s2) => concat, trim, size, is_at_least_3)
}
