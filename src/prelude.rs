//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pair_amm::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, AddLiquidity, Amount, AssetId, AssetPair, CallContext, Deadline, Liquidity,
    LiquidityReceipt, Price, RemoveLiquidity, Rounding, Side, SwapExactIn, SwapPath, SwapResult,
    Timestamp, WithdrawalReceipt, PRICE_SCALE,
};

pub use crate::traits::{AssetLedger, ClaimLedger};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::error::{AmmError, ErrorKind, LedgerError, Result};

pub use crate::ledgers::{InMemoryAssetLedger, InMemoryClaimLedger};

pub use crate::pool::{get_amount_in, get_amount_out, EventLog, Pool, PoolEvent, PoolState};
