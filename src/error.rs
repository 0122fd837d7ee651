//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant belongs to exactly one [`ErrorKind`], which
//! tells callers whether the failure came from their own input, from a
//! degenerate pool state, or from an external ledger.
//!
//! No public operation has a partial-success mode: whatever the kind, an
//! `Err` means the pool state is exactly what it was before the call.

use thiserror::Error;

use crate::domain::AssetId;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Coarse classification of an [`AmmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller's request is malformed or can no longer be honoured.
    Validation,
    /// The pool is in an unexpected or degenerate state for the request.
    StateConsistency,
    /// An asset or claim ledger rejected an operation.
    ExternalDependency,
}

/// Failure reported by an external ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The debited account does not hold enough of the asset.
    #[error("insufficient balance")]
    InsufficientBalance,
    /// The spender has not been granted a large enough allowance.
    #[error("insufficient allowance")]
    InsufficientAllowance,
    /// Total supply or a balance would exceed the representable range.
    #[error("ledger arithmetic overflow")]
    Overflow,
    /// The ledger refused the operation for its own reasons.
    #[error("rejected: {0}")]
    Rejected(&'static str),
}

/// Every error the pool engine can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A caller-supplied amount is zero or otherwise out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A swap path does not have exactly two distinct elements.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// The call arrived after the caller's deadline.
    #[error("deadline expired: now {now} is after deadline {deadline}")]
    DeadlineExpired {
        /// Host time at the start of the call.
        now: u64,
        /// Caller-supplied deadline.
        deadline: u64,
    },

    /// The amount the caller would receive is below their minimum.
    #[error("slippage: {0}")]
    SlippageExceeded(&'static str),

    /// An asset identity is not one of the pool's two assets.
    #[error("unknown asset {0}")]
    UnknownAsset(AssetId),

    /// Two asset arguments name the same asset.
    #[error("identical assets")]
    IdenticalAssets,

    /// A reserve passed to a pricing function cannot be used as divisor.
    #[error("invalid reserve: {0}")]
    InvalidReserve(&'static str),

    /// The caller tries to burn more claims than they hold.
    #[error("insufficient claim balance")]
    InsufficientClaimBalance,

    /// Pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Reserves or claim supply cannot serve the request.
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(&'static str),

    /// A withdrawal would return nothing of at least one asset.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// A swap would return nothing.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// A pool invariant does not hold.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// An operation was entered while another one is still running.
    #[error("reentrant call rejected")]
    Reentrancy,

    /// Arithmetic overflow.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An asset ledger refused a transfer.
    #[error("transfer of asset {asset} failed: {source}")]
    TransferFailed {
        /// Asset whose ledger failed.
        asset: AssetId,
        /// Ledger-reported cause.
        #[source]
        source: LedgerError,
    },

    /// The claim-token ledger refused a mint or burn.
    #[error("claim ledger failed: {0}")]
    ClaimLedgerFailed(#[source] LedgerError),
}

impl AmmError {
    /// Returns the [`ErrorKind`] this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidQuantity(_)
            | Self::InvalidPath(_)
            | Self::DeadlineExpired { .. }
            | Self::SlippageExceeded(_)
            | Self::UnknownAsset(_)
            | Self::IdenticalAssets
            | Self::InvalidReserve(_)
            | Self::InsufficientClaimBalance
            | Self::InvalidConfiguration(_)
            | Self::Reentrancy => ErrorKind::Validation,
            Self::InsufficientLiquidity(_)
            | Self::InsufficientLiquidityBurned
            | Self::InsufficientOutputAmount
            | Self::InvariantViolation(_)
            | Self::Overflow(_)
            | Self::Underflow(_)
            | Self::DivisionByZero => ErrorKind::StateConsistency,
            Self::TransferFailed { .. } | Self::ClaimLedgerFailed(_) => {
                ErrorKind::ExternalDependency
            }
        }
    }

    /// Returns `true` for [`ErrorKind::Validation`] errors.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }
}
