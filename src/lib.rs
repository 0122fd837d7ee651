//! # Pair AMM
//!
//! Accounting engine for a two-asset constant-product liquidity pool:
//! deposit both assets for claim tokens, trade one asset for the other at
//! a price set by pool composition, and redeem claims for a proportional
//! share of the reserves.
//!
//! The engine owns only the pool's counters.  Asset balances live in
//! external [`AssetLedger`](traits::AssetLedger)s and per-holder claim
//! balances in a [`ClaimLedger`](traits::ClaimLedger); the pool is handed
//! both as generic capabilities and drives them through narrow traits.
//!
//! All quantities are 256-bit unsigned integers.  Every arithmetic step is
//! checked and every division rounds in the pool's favour.
//!
//! # Quick Start
//!
//! ```rust
//! use pair_amm::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let pool_account = AccountId::from_bytes([0xAA; 32]);
//! let alice = AccountId::from_bytes([0x01; 32]);
//! let bob = AccountId::from_bytes([0x02; 32]);
//!
//! // 1. Seed the external ledgers and approve the pool account
//! let mut ledger_a = InMemoryAssetLedger::new(usdc);
//! let mut ledger_b = InMemoryAssetLedger::new(weth);
//! ledger_a.mint_to(&alice, Amount::new(1_000)).expect("seed");
//! ledger_b.mint_to(&alice, Amount::new(1_000)).expect("seed");
//! ledger_a.mint_to(&bob, Amount::new(10)).expect("seed");
//! ledger_a.approve(&alice, &pool_account, Amount::new(1_000));
//! ledger_b.approve(&alice, &pool_account, Amount::new(1_000));
//! ledger_a.approve(&bob, &pool_account, Amount::new(10));
//!
//! // 2. Create the pool
//! let pair = AssetPair::new(usdc, weth).expect("distinct assets");
//! let config = PoolConfig::new(pair, pool_account).expect("valid config");
//! let mut pool = Pool::new(config, ledger_a, ledger_b, InMemoryClaimLedger::new())
//!     .expect("pool created");
//!
//! // 3. Provide liquidity
//! let deposit = AddLiquidity::new(
//!     usdc, Amount::new(100), weth, Amount::new(100), alice, Deadline::NEVER,
//! );
//! pool.add_liquidity(&CallContext::new(alice, Timestamp::from_secs(1)), &deposit)
//!     .expect("deposit");
//!
//! // 4. Swap 10 units of asset A for asset B
//! let path = SwapPath::new(&[usdc, weth]).expect("two assets");
//! let swap = SwapExactIn::new(path, Amount::new(10), Amount::new(9), bob, Deadline::NEVER);
//! let result = pool
//!     .swap_exact_tokens_for_tokens(&CallContext::new(bob, Timestamp::from_secs(2)), &swap)
//!     .expect("swap");
//!
//! assert_eq!(result.amount_out(), Amount::new(9));
//! assert_eq!(pool.reserves(), (Amount::new(110), Amount::new(91)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  CallContext + request (AddLiquidity, RemoveLiquidity, SwapExactIn)
//! └──────┬──────┘
//!        │ validate, then run under the reentrancy lock
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  PoolState (reserves, claim supply), EventLog
//! └──────┬──────┘
//!        │ pull / push / mint / burn
//!        ▼
//! ┌─────────────┐
//! │   Ledgers    │  AssetLedger × 2, ClaimLedger
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`Price`](domain::Price), requests and receipts |
//! | [`traits`] | Ledger abstractions: [`AssetLedger`](traits::AssetLedger), [`ClaimLedger`](traits::ClaimLedger) |
//! | [`ledgers`] | In-memory ledger implementations |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`pool`]   | [`Pool`](pool::Pool), [`PoolState`](pool::PoolState), events and pricing views |
//! | [`math`]   | Checked arithmetic, `mul_div`, integer square root |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledgers;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;

pub use primitive_types::U256;
