//! Optional values with a combinator algebra, and left-to-right function composition.
//!
//! - [`option`]: the [`Option`] container, its constructors, and its combinators.
//! - [`pipe!`]: eager evaluation of a value through a sequence of functions.
//! - [`flow!`] and [`flow::Flow`]: lazy composition of a sequence of functions into one.

pub mod option;
pub mod either;
pub mod nullable;
pub mod error;

pub mod pipe;
pub mod flow;

#[cfg(feature = "tracing")]
pub mod trace;

