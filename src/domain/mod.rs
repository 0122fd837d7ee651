//! Fundamental domain value types used throughout the pool engine.
//!
//! This module contains the value types that model the pool's world:
//! asset and account identities, amounts, claim quantities, prices,
//! deadlines, requests and receipts.  All types use newtypes with validated
//! constructors to enforce invariants.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod deadline;
mod liquidity;
mod liquidity_change;
mod liquidity_receipt;
mod price;
mod rounding;
mod swap_result;
mod swap_spec;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::{AssetPair, Side};
pub use deadline::{CallContext, Deadline, Timestamp};
pub use liquidity::Liquidity;
pub use liquidity_change::{AddLiquidity, RemoveLiquidity};
pub use liquidity_receipt::{LiquidityReceipt, WithdrawalReceipt};
pub use price::{Price, PRICE_SCALE};
pub use rounding::Rounding;
pub use swap_result::SwapResult;
pub use swap_spec::{SwapExactIn, SwapPath};
