//! Fixtures shared by the pool's unit and property tests.

#![allow(clippy::panic)]

use super::Pool;
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, AddLiquidity, Amount, AssetId, AssetPair, CallContext, Deadline, RemoveLiquidity,
    SwapExactIn, SwapPath, Timestamp,
};
use crate::ledgers::{InMemoryAssetLedger, InMemoryClaimLedger};

pub(crate) type TestPool = Pool<InMemoryAssetLedger, InMemoryAssetLedger, InMemoryClaimLedger>;

pub(crate) const ASSET_A: AssetId = AssetId::from_bytes([0xA1; 32]);
pub(crate) const ASSET_B: AssetId = AssetId::from_bytes([0xB2; 32]);
pub(crate) const OTHER_ASSET: AssetId = AssetId::from_bytes([0xC3; 32]);
pub(crate) const POOL: AccountId = AccountId::from_bytes([0xEE; 32]);
pub(crate) const ALICE: AccountId = AccountId::from_bytes([0x01; 32]);
pub(crate) const BOB: AccountId = AccountId::from_bytes([0x02; 32]);

pub(crate) const NOW: Timestamp = Timestamp::from_secs(1_000);
pub(crate) const DEADLINE: Deadline = Deadline::at(Timestamp::from_secs(2_000));

pub(crate) fn pair() -> AssetPair {
    let Ok(pair) = AssetPair::new(ASSET_A, ASSET_B) else {
        panic!("distinct assets");
    };
    pair
}

pub(crate) const fn ctx(caller: AccountId) -> CallContext {
    CallContext::new(caller, NOW)
}

pub(crate) fn empty_pool() -> TestPool {
    let Ok(config) = PoolConfig::new(pair(), POOL) else {
        panic!("valid config");
    };
    let Ok(pool) = Pool::new(
        config,
        InMemoryAssetLedger::new(ASSET_A),
        InMemoryAssetLedger::new(ASSET_B),
        InMemoryClaimLedger::new(),
    ) else {
        panic!("valid pool");
    };
    pool
}

/// Gives `account` balances of both assets and approves the pool for them.
pub(crate) fn fund(pool: &mut TestPool, account: &AccountId, a: u128, b: u128) {
    let Ok(()) = pool.ledger_a_mut().mint_to(account, Amount::new(a)) else {
        panic!("seed A");
    };
    let Ok(()) = pool.ledger_b_mut().mint_to(account, Amount::new(b)) else {
        panic!("seed B");
    };
    let allowance_a = pool.ledger_a().allowance(account, &POOL);
    let allowance_b = pool.ledger_b().allowance(account, &POOL);
    let Some(allowance_a) = allowance_a.checked_add(&Amount::new(a)) else {
        panic!("allowance A");
    };
    let Some(allowance_b) = allowance_b.checked_add(&Amount::new(b)) else {
        panic!("allowance B");
    };
    pool.ledger_a_mut().approve(account, &POOL, allowance_a);
    pool.ledger_b_mut().approve(account, &POOL, allowance_b);
}

pub(crate) fn add_request(a: u128, b: u128) -> AddLiquidity {
    AddLiquidity::new(
        ASSET_A,
        Amount::new(a),
        ASSET_B,
        Amount::new(b),
        ALICE,
        DEADLINE,
    )
}

pub(crate) fn remove_request(liquidity: u128) -> RemoveLiquidity {
    RemoveLiquidity::new(
        ASSET_A,
        ASSET_B,
        crate::domain::Liquidity::new(liquidity),
        ALICE,
        DEADLINE,
    )
}

pub(crate) fn swap_request(asset_in: AssetId, amount_in: u128, min_out: u128) -> SwapExactIn {
    let asset_out = if asset_in == ASSET_A { ASSET_B } else { ASSET_A };
    let Ok(path) = SwapPath::new(&[asset_in, asset_out]) else {
        panic!("valid path");
    };
    SwapExactIn::new(
        path,
        Amount::new(amount_in),
        Amount::new(min_out),
        BOB,
        DEADLINE,
    )
}

/// A pool seeded by ALICE with `(a, b)`; BOB holds 1 000 of each asset.
pub(crate) fn funded_pool(a: u128, b: u128) -> TestPool {
    let mut pool = empty_pool();
    fund(&mut pool, &ALICE, a, b);
    fund(&mut pool, &BOB, 1_000, 1_000);
    let Ok(_) = pool.add_liquidity(&ctx(ALICE), &add_request(a, b)) else {
        panic!("seed deposit");
    };
    pool
}
