//! Integer arithmetic for pool calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on domain types, [`div_round`] / [`mul_div`] for wide division with an explicit
//! [`Rounding`](crate::domain::Rounding) direction, and [`isqrt`] for the
//! first-deposit mint.

mod checked;
mod rounding;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, mul_div};
pub use sqrt::isqrt;
