mod error;
mod matrix;
mod vector;

pub use error::MathError;
pub use matrix::{Axis, Matrix};
pub use vector::Vector;
