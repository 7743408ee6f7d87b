//! Values that may be null.
//!
//! [`from_nullable`](crate::option::from_nullable) is the single bridge from such values into an [`Option`]. What
//! counts as null:
//!
//! - [`Option<A>`]: [`None`], for example a missing field or a lookup that found nothing.
//! - Raw pointers `*const T` and `*mut T`: the null pointer, for example from a foreign function. A non-null pointer
//!   becomes a [`NonNull<T>`]; it is never dereferenced.

use std::ptr::NonNull;

/// A value that may be null.
pub trait Nullable {
  /// Type of the value when not null.
  type Value;

  /// Converts into [`None`] when null, and into [`Some`] otherwise.
  fn into_option(self) -> Option<Self::Value>;
}

impl<A> Nullable for Option<A> {
  type Value = A;
  #[inline]
  fn into_option(self) -> Option<A> { self }
}

impl<T: ?Sized> Nullable for *const T {
  type Value = NonNull<T>;
  #[inline]
  fn into_option(self) -> Option<NonNull<T>> { NonNull::new(self as *mut T) }
}

impl<T: ?Sized> Nullable for *mut T {
  type Value = NonNull<T>;
  #[inline]
  fn into_option(self) -> Option<NonNull<T>> { NonNull::new(self) }
}
