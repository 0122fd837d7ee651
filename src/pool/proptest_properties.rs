//! Property-based tests for the pool's accounting invariants.
//!
//! 1. **Backing**: after any sequence of operations the state is fully
//!    empty or fully funded and reserves equal custody balances.
//! 2. **Product monotonicity**: `reserve_a × reserve_b` never decreases
//!    across a swap.
//! 3. **Swap reversibility**: A→B→A returns at most the original input.
//! 4. **Withdrawal round trip**: first deposit then full withdrawal
//!    returns the deposit exactly.
//! 5. **No dilution**: a later depositor cannot withdraw more than they
//!    put in.
//! 6. **Read idempotence**: price and quote views never change state.
//! 7. **Integer square root**: `r² ≤ x < (r + 1)²`.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::test_support::*;
use crate::domain::{Amount, Liquidity};
use crate::math::isqrt;
use crate::U256;

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=10_000_000u128
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(u128, u128),
    Remove(u128),
    Swap(bool, u128),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u128..=100_000, 1u128..=100_000).prop_map(|(a, b)| Op::Add(a, b)),
        (1u128..=100_000).prop_map(Op::Remove),
        (any::<bool>(), 1u128..=100_000).prop_map(|(a_to_b, amount)| Op::Swap(a_to_b, amount)),
    ]
}

fn apply(pool: &mut TestPool, op: Op) {
    match op {
        Op::Add(a, b) => {
            fund(pool, &ALICE, a, b);
            let _ = pool.add_liquidity(&ctx(ALICE), &add_request(a, b));
        }
        Op::Remove(liquidity) => {
            let _ = pool.remove_liquidity(&ctx(ALICE), &remove_request(liquidity));
        }
        Op::Swap(a_to_b, amount) => {
            let asset = if a_to_b { ASSET_A } else { ASSET_B };
            fund(pool, &BOB, amount, amount);
            let _ = pool.swap_exact_tokens_for_tokens(&ctx(BOB), &swap_request(asset, amount, 0));
        }
    }
}

fn product(pool: &TestPool) -> U256 {
    let (a, b) = pool.reserves();
    a.get().checked_mul(b.get()).unwrap_or(U256::MAX)
}

// ---------------------------------------------------------------------------
// Property 1: Backing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_state_stays_backed(ops in prop::collection::vec(op_strategy(), 1..24)) {
        let mut pool = empty_pool();
        for op in ops {
            apply(&mut pool, op);
            prop_assert!(
                pool.verify_backing().is_ok(),
                "backing broken after {:?}: {:?}",
                op, pool.state()
            );
            prop_assert!(!pool.state().is_locked());
        }
    }

    // -----------------------------------------------------------------------
    // Property 2: Product monotonicity
    // -----------------------------------------------------------------------

    #[test]
    fn prop_swap_never_decreases_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((any::<bool>(), 1u128..=1_000_000), 1..16),
    ) {
        let mut pool = funded_pool(ra, rb);
        for (a_to_b, amount) in swaps {
            let before = product(&pool);
            apply(&mut pool, Op::Swap(a_to_b, amount));
            let after = product(&pool);
            prop_assert!(after >= before, "product fell from {} to {}", before, after);
        }
    }

    // -----------------------------------------------------------------------
    // Property 3: Swap reversibility
    // -----------------------------------------------------------------------

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 100).max(1);
        let mut pool = funded_pool(ra, rb);
        fund(&mut pool, &BOB, swap_in, rb);

        let Ok(there) = pool.swap_exact_tokens_for_tokens(
            &ctx(BOB),
            &swap_request(ASSET_A, swap_in, 0),
        ) else {
            return Ok(());
        };
        let received = there.amount_out().to_u128().unwrap_or(u128::MAX);
        let Ok(back) = pool.swap_exact_tokens_for_tokens(
            &ctx(BOB),
            &swap_request(ASSET_B, received, 0),
        ) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out() <= Amount::new(swap_in),
            "round trip gained value: {} > {}",
            back.amount_out(), swap_in
        );
    }

    // -----------------------------------------------------------------------
    // Property 4: Withdrawal round trip
    // -----------------------------------------------------------------------

    #[test]
    fn prop_first_deposit_round_trip(
        a in 1u128..=u128::from(u64::MAX),
        b in 1u128..=u128::from(u64::MAX),
    ) {
        let mut pool = funded_pool(a, b);
        let minted = pool.claim_balance_of(&ALICE);
        prop_assert_eq!(minted.get(), isqrt(U256::from(a) * U256::from(b)));

        let Ok(receipt) = pool.remove_liquidity(&ctx(ALICE), &remove_request_of(minted)) else {
            panic!("full withdrawal");
        };
        prop_assert_eq!(receipt.amount_a(), Amount::new(a));
        prop_assert_eq!(receipt.amount_b(), Amount::new(b));
        prop_assert!(pool.state().is_empty());
    }

    // -----------------------------------------------------------------------
    // Property 5: No dilution
    // -----------------------------------------------------------------------

    #[test]
    fn prop_later_deposit_cannot_extract_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in 1u128..=1_000_000,
        db in 1u128..=1_000_000,
    ) {
        let mut pool = funded_pool(ra, rb);
        fund(&mut pool, &BOB, da, db);
        let deposit = crate::domain::AddLiquidity::new(
            ASSET_A,
            Amount::new(da),
            ASSET_B,
            Amount::new(db),
            BOB,
            DEADLINE,
        );
        let Ok(receipt) = pool.add_liquidity(&ctx(BOB), &deposit) else {
            return Ok(());
        };
        let withdrawal = crate::domain::RemoveLiquidity::new(
            ASSET_A,
            ASSET_B,
            receipt.minted(),
            BOB,
            DEADLINE,
        );
        let Ok(out) = pool.remove_liquidity(&ctx(BOB), &withdrawal) else {
            return Ok(());
        };
        prop_assert!(out.amount_a() <= Amount::new(da));
        prop_assert!(out.amount_b() <= Amount::new(db));
    }

    // -----------------------------------------------------------------------
    // Property 6: Read idempotence
    // -----------------------------------------------------------------------

    #[test]
    fn prop_reads_are_idempotent(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in 1u128..=1_000_000,
    ) {
        let pool = funded_pool(ra, rb);
        let state = *pool.state();
        let price = pool.get_price(&ASSET_A, &ASSET_B);
        let out = pool.quote_amount_out(&ASSET_A, Amount::new(amount));
        let quote = pool.quote(Amount::new(amount), &ASSET_B);
        for _ in 0..3 {
            prop_assert_eq!(pool.get_price(&ASSET_A, &ASSET_B), price.clone());
            prop_assert_eq!(pool.quote_amount_out(&ASSET_A, Amount::new(amount)), out.clone());
            prop_assert_eq!(pool.quote(Amount::new(amount), &ASSET_B), quote.clone());
        }
        prop_assert_eq!(*pool.state(), state);
    }

    // -----------------------------------------------------------------------
    // Property 7: Integer square root
    // -----------------------------------------------------------------------

    #[test]
    fn prop_isqrt_is_floor(x in any::<u128>()) {
        let x = U256::from(x);
        let r = isqrt(x);
        prop_assert!(r * r <= x);
        let next = r + U256::one();
        prop_assert!(next * next > x);
    }
}

fn remove_request_of(liquidity: Liquidity) -> crate::domain::RemoveLiquidity {
    crate::domain::RemoveLiquidity::new(ASSET_A, ASSET_B, liquidity, ALICE, DEADLINE)
}
