/// A value of one of two types: the union produced by widening eliminations such as
/// [`get_or_else_w`](crate::option::get_or_else_w).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Either<L, R> {
  Left(L),
  Right(R),
}

impl<L, R> Either<L, R> {
  #[inline]
  pub fn is_left(&self) -> bool { matches!(self, Either::Left(_)) }
  #[inline]
  pub fn is_right(&self) -> bool { matches!(self, Either::Right(_)) }

  #[inline]
  pub fn left(self) -> Option<L> {
    match self {
      Either::Left(l) => Some(l),
      Either::Right(_) => None,
    }
  }
  #[inline]
  pub fn right(self) -> Option<R> {
    match self {
      Either::Left(_) => None,
      Either::Right(r) => Some(r),
    }
  }

  #[inline]
  pub fn as_ref(&self) -> Either<&L, &R> {
    match self {
      Either::Left(l) => Either::Left(l),
      Either::Right(r) => Either::Right(r),
    }
  }

  #[inline]
  pub fn map_left<M>(self, f: impl FnOnce(L) -> M) -> Either<M, R> {
    match self {
      Either::Left(l) => Either::Left(f(l)),
      Either::Right(r) => Either::Right(r),
    }
  }
  #[inline]
  pub fn map_right<S>(self, f: impl FnOnce(R) -> S) -> Either<L, S> {
    match self {
      Either::Left(l) => Either::Left(l),
      Either::Right(r) => Either::Right(f(r)),
    }
  }

  /// Eliminate `self` by calling `on_left` or `on_right`.
  #[inline]
  pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
    match self {
      Either::Left(l) => on_left(l),
      Either::Right(r) => on_right(r),
    }
  }
}

impl<T> Either<T, T> {
  /// Returns the value from whichever side is set.
  #[inline]
  pub fn into_inner(self) -> T {
    match self {
      Either::Left(t) | Either::Right(t) => t,
    }
  }
}
