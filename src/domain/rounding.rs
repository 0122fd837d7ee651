//! Rounding direction of integer division.

use core::fmt;

/// Which way a division that leaves a remainder is resolved.
///
/// Every division in the engine names its direction.  Payouts to callers
/// (minted claims, withdrawal amounts, swap output, prices) round
/// [`Down`](Rounding::Down); amounts charged to callers round
/// [`Up`](Rounding::Up).
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert_eq!(Rounding::Down.to_string(), "down");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling: the smallest integer not below the exact quotient.
    Up,
    /// Floor: the exact quotient truncated towards zero.
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}
