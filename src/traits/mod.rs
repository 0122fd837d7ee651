//! Interfaces to the pool's external collaborators.
//!
//! [`AssetLedger`] moves balances of one asset; [`ClaimLedger`] tracks the
//! pool's claim token.  The engine consumes both only through these traits.

mod asset_ledger;
mod claim_ledger;

pub use asset_ledger::AssetLedger;
pub use claim_ledger::ClaimLedger;
