//! In-memory implementations of the external ledger traits.
//!
//! | Type | Trait | Tracks |
//! |------|-------|--------|
//! | [`InMemoryAssetLedger`] | [`AssetLedger`](crate::traits::AssetLedger) | balances and allowances of one asset |
//! | [`InMemoryClaimLedger`] | [`ClaimLedger`](crate::traits::ClaimLedger) | per-holder claim balances and total supply |
//!
//! Both are `Clone`, which is what lets a [`Pool`](crate::pool::Pool)
//! checkpoint and restore them around a failed operation.

mod asset;
mod claim;

pub use asset::InMemoryAssetLedger;
pub use claim::InMemoryClaimLedger;
