use optflow_core::option;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle {
  pub radius: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Square {
  pub side: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Shape {
  Circle(Circle),
  Square(Square),
}

impl From<Circle> for Shape {
  #[inline]
  fn from(circle: Circle) -> Self { Self::Circle(circle) }
}
impl From<Square> for Shape {
  #[inline]
  fn from(square: Square) -> Self { Self::Square(square) }
}

/// Narrows a shape to a circle; gives the shape back when it is not one.
impl TryFrom<Shape> for Circle {
  type Error = Shape;

  #[inline]
  fn try_from(shape: Shape) -> Result<Self, Self::Error> {
    match shape {
      Shape::Circle(circle) => Ok(circle),
      shape => Err(shape),
    }
  }
}

pub fn is_circle(shape: &Shape) -> bool {
  matches!(shape, Shape::Circle(_))
}

/// `shape` as a circle, absent when it is some other shape.
pub fn circle(shape: Shape) -> Option<Circle> {
  option::from_refinement::<Circle, _>()(shape)
}

/// `shape` when it is a circle, still typed as a shape.
pub fn circle_shape(shape: Shape) -> Option<Shape> {
  option::from_predicate(is_circle)(shape)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn narrowing() {
    let circle_value = Circle { radius: 3.0 };
    let square_value = Square { side: 5.0 };
    assert_eq!(circle(circle_value.into()), Some(circle_value));
    assert_eq!(circle(square_value.into()), None);
    assert_eq!(circle_shape(circle_value.into()), Some(Shape::Circle(circle_value)));
    assert_eq!(circle_shape(square_value.into()), None);
  }
}
