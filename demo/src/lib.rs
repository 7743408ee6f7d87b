//! Example call sites of `optflow_core`: small domain functions written as pipelines of option combinators.

pub mod app;

pub mod number;
pub mod list;
pub mod movie;
pub mod discount;
pub mod shape;
pub mod text;
