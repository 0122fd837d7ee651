//! Exact-input swap request.

use core::fmt;

use super::{AccountId, Amount, AssetId, Deadline, Timestamp};
use crate::error::AmmError;

/// An ordered `[input, output]` route through the pool.
///
/// # Invariants
///
/// Exactly two elements, and they differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapPath {
    input: AssetId,
    output: AssetId,
}

impl SwapPath {
    /// Builds a path from a caller-supplied slice.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if the slice does not hold exactly
    /// two elements or both elements are the same asset.
    pub fn new(path: &[AssetId]) -> Result<Self, AmmError> {
        let [input, output] = path else {
            return Err(AmmError::InvalidPath("path must contain exactly two assets"));
        };
        if input == output {
            return Err(AmmError::InvalidPath("path assets must be distinct"));
        }
        Ok(Self {
            input: *input,
            output: *output,
        })
    }

    /// Returns the asset sold.
    #[must_use]
    pub const fn input(&self) -> AssetId {
        self.input
    }

    /// Returns the asset bought.
    #[must_use]
    pub const fn output(&self) -> AssetId {
        self.output
    }
}

impl fmt::Display for SwapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input, self.output)
    }
}

/// A request to sell exactly `amount_in` of the path's input asset.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{
///     AccountId, Amount, AssetId, Deadline, SwapExactIn, SwapPath, Timestamp,
/// };
///
/// let path = SwapPath::new(&[AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32])])
///     .expect("two distinct assets");
/// let req = SwapExactIn::new(
///     path,
///     Amount::new(10),
///     Amount::new(9),
///     AccountId::from_bytes([7u8; 32]),
///     Deadline::NEVER,
/// );
/// assert!(req.validate(Timestamp::from_secs(0)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapExactIn {
    path: SwapPath,
    amount_in: Amount,
    amount_out_min: Amount,
    to: AccountId,
    deadline: Deadline,
}

impl SwapExactIn {
    /// Creates an exact-input swap request.
    #[must_use]
    pub const fn new(
        path: SwapPath,
        amount_in: Amount,
        amount_out_min: Amount,
        to: AccountId,
        deadline: Deadline,
    ) -> Self {
        Self {
            path,
            amount_in,
            amount_out_min,
            to,
            deadline,
        }
    }

    /// Returns the route.
    #[must_use]
    pub const fn path(&self) -> SwapPath {
        self.path
    }

    /// Returns the exact input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum acceptable output.
    #[must_use]
    pub const fn amount_out_min(&self) -> Amount {
        self.amount_out_min
    }

    /// Returns the recipient of the output asset.
    #[must_use]
    pub const fn to(&self) -> AccountId {
        self.to
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Checks every stateless precondition.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`AmmError::DeadlineExpired`] if `now` is past the deadline.
    pub fn validate(&self, now: Timestamp) -> Result<(), AmmError> {
        if self.amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be non-zero"));
        }
        self.deadline.check(now)
    }
}
