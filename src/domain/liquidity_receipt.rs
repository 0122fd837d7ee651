//! Outcomes of deposits and withdrawals.

use serde::{Deserialize, Serialize};

use super::{Amount, Liquidity};

/// Outcome of a successful deposit.
///
/// `amount_a` / `amount_b` follow the asset order of the originating
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityReceipt {
    amount_a: Amount,
    amount_b: Amount,
    minted: Liquidity,
}

impl LiquidityReceipt {
    /// Creates a deposit receipt.
    #[must_use]
    pub const fn new(amount_a: Amount, amount_b: Amount, minted: Liquidity) -> Self {
        Self {
            amount_a,
            amount_b,
            minted,
        }
    }

    /// Deposited amount of the first named asset.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Deposited amount of the second named asset.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Claim tokens minted to the recipient.
    #[must_use]
    pub const fn minted(&self) -> Liquidity {
        self.minted
    }
}

/// Outcome of a successful withdrawal.
///
/// `amount_a` / `amount_b` follow the asset order of the originating
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    amount_a: Amount,
    amount_b: Amount,
    burned: Liquidity,
}

impl WithdrawalReceipt {
    /// Creates a withdrawal receipt.
    #[must_use]
    pub const fn new(amount_a: Amount, amount_b: Amount, burned: Liquidity) -> Self {
        Self {
            amount_a,
            amount_b,
            burned,
        }
    }

    /// Paid-out amount of the first named asset.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Paid-out amount of the second named asset.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Claim tokens burned from the caller.
    #[must_use]
    pub const fn burned(&self) -> Liquidity {
        self.burned
    }
}
