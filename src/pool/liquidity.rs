//! Deposits and withdrawals.
//!
//! # Minting
//!
//! - First deposit: `minted = isqrt(amount_a × amount_b)`.
//! - Later deposits: `minted = min(amount_a × supply / reserve_a,
//!   amount_b × supply / reserve_b)`, each side rounded down.
//!
//! # Withdrawal
//!
//! `amount_x = reserve_x × burned / supply`, rounded down.  Burning the
//! entire supply returns the entire reserves and empties the pool.

use core::cmp;

use tracing::debug;

use super::{Pool, PoolEvent, PoolState};
use crate::domain::{
    AddLiquidity, Amount, CallContext, Liquidity, LiquidityReceipt, RemoveLiquidity, Rounding,
    Side, WithdrawalReceipt,
};
use crate::error::{AmmError, Result};
use crate::math::{isqrt, mul_div};
use crate::traits::{AssetLedger, ClaimLedger};

/// Claims minted for depositing `(amount_a, amount_b)` into `state`.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if a reserve is zero while claims
///   are outstanding, or the deposit is too small to mint anything.
/// - [`AmmError::Overflow`] if an intermediate exceeds 256 bits.
pub(crate) fn compute_minted(
    state: &PoolState,
    amount_a: Amount,
    amount_b: Amount,
) -> Result<Liquidity> {
    let minted = if state.is_empty() {
        let product = amount_a
            .checked_mul(&amount_b)
            .ok_or(AmmError::Overflow("initial deposit product overflow"))?;
        isqrt(product.get())
    } else {
        let reserve_a = state.reserve_a();
        let reserve_b = state.reserve_b();
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(AmmError::InsufficientLiquidity(
                "reserve is zero while claims are outstanding",
            ));
        }
        let supply = state.claim_supply().as_amount();
        let liquidity_a = mul_div(amount_a, supply, reserve_a, Rounding::Down)?;
        let liquidity_b = mul_div(amount_b, supply, reserve_b, Rounding::Down)?;
        cmp::min(liquidity_a, liquidity_b).get()
    };
    if minted.is_zero() {
        return Err(AmmError::InsufficientLiquidity(
            "deposit too small to mint claims",
        ));
    }
    Ok(Liquidity::from_u256(minted))
}

/// Reserve amounts `(amount_a, amount_b)` paid for burning `liquidity`.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if the pool is empty or
///   `liquidity` exceeds the claim supply.
/// - [`AmmError::Overflow`] if a payout exceeds 256 bits.
pub(crate) fn compute_withdrawal(
    state: &PoolState,
    liquidity: Liquidity,
) -> Result<(Amount, Amount)> {
    if state.is_empty() {
        return Err(AmmError::InsufficientLiquidity(
            "pool has no outstanding claims",
        ));
    }
    if liquidity > state.claim_supply() {
        return Err(AmmError::InsufficientLiquidity(
            "burn exceeds claim supply",
        ));
    }
    let supply = state.claim_supply().as_amount();
    let burned = liquidity.as_amount();
    let amount_a = mul_div(state.reserve_a(), burned, supply, Rounding::Down)?;
    let amount_b = mul_div(state.reserve_b(), burned, supply, Rounding::Down)?;
    Ok((amount_a, amount_b))
}

/// Orders a `(first, second)` pair given the side of `first`.
const fn by_side(side_first: Side, first: Amount, second: Amount) -> (Amount, Amount) {
    match side_first {
        Side::A => (first, second),
        Side::B => (second, first),
    }
}

impl<A, B, C> Pool<A, B, C>
where
    A: AssetLedger + Clone,
    B: AssetLedger + Clone,
    C: ClaimLedger + Clone,
{
    /// Deposits both assets and mints claims to `request.to()`.
    ///
    /// The desired amounts are pulled from the caller in full using the
    /// pool account's allowance; there are no partial fills.  The receipt
    /// reports amounts in the order the request names the assets.
    ///
    /// # Errors
    ///
    /// - Validation errors from [`AddLiquidity::validate`].
    /// - [`AmmError::UnknownAsset`] / [`AmmError::IdenticalAssets`] if the
    ///   request does not name the pool's two assets.
    /// - [`AmmError::InsufficientLiquidity`] if nothing would be minted.
    /// - [`AmmError::TransferFailed`] / [`AmmError::ClaimLedgerFailed`] if
    ///   an external ledger refuses.
    ///
    /// On any error the pool and its ledgers are left unchanged.
    pub fn add_liquidity(
        &mut self,
        ctx: &CallContext,
        request: &AddLiquidity,
    ) -> Result<LiquidityReceipt> {
        request.validate(ctx.now())?;
        let side_first = self
            .config
            .pair()
            .orient(&request.asset_a(), &request.asset_b())?;
        self.guarded("add_liquidity", |pool| {
            pool.add_liquidity_locked(ctx, request, side_first)
        })
    }

    fn add_liquidity_locked(
        &mut self,
        ctx: &CallContext,
        request: &AddLiquidity,
        side_first: Side,
    ) -> Result<LiquidityReceipt> {
        let amount_first = request.amount_a_desired();
        let amount_second = request.amount_b_desired();
        let (amount_a, amount_b) = by_side(side_first, amount_first, amount_second);

        let snapshot = self.state;
        let minted = compute_minted(&snapshot, amount_a, amount_b)?;
        let next = snapshot.deposited(Side::A, amount_a, amount_b, minted)?;
        debug!(%amount_a, %amount_b, %minted, first_deposit = snapshot.is_empty(), "deposit computed");

        let caller = ctx.caller();
        self.pull(Side::A, &caller, amount_a)?;
        self.pull(Side::B, &caller, amount_b)?;

        self.state = next;

        self.claims
            .mint(&request.to(), minted)
            .map_err(AmmError::ClaimLedgerFailed)?;

        self.events.emit(PoolEvent::LiquidityAdded {
            provider: caller,
            to: request.to(),
            asset_a: request.asset_a(),
            asset_b: request.asset_b(),
            amount_a: amount_first,
            amount_b: amount_second,
            minted,
        });
        Ok(LiquidityReceipt::new(amount_first, amount_second, minted))
    }

    /// Burns the caller's claims and pays their share of both reserves to
    /// `request.to()`.
    ///
    /// The receipt reports amounts in the order the request names the
    /// assets, and the minimums apply in that order too.
    ///
    /// # Errors
    ///
    /// - Validation errors from [`RemoveLiquidity::validate`].
    /// - [`AmmError::UnknownAsset`] / [`AmmError::IdenticalAssets`] if the
    ///   request does not name the pool's two assets.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    /// - [`AmmError::InsufficientClaimBalance`] if the caller holds fewer
    ///   claims than requested.
    /// - [`AmmError::InsufficientLiquidityBurned`] if either payout is zero.
    /// - [`AmmError::SlippageExceeded`] if a payout is below its minimum.
    /// - [`AmmError::TransferFailed`] / [`AmmError::ClaimLedgerFailed`] if
    ///   an external ledger refuses.
    ///
    /// On any error the pool and its ledgers are left unchanged.
    pub fn remove_liquidity(
        &mut self,
        ctx: &CallContext,
        request: &RemoveLiquidity,
    ) -> Result<WithdrawalReceipt> {
        request.validate(ctx.now())?;
        let side_first = self
            .config
            .pair()
            .orient(&request.asset_a(), &request.asset_b())?;
        self.guarded("remove_liquidity", |pool| {
            pool.remove_liquidity_locked(ctx, request, side_first)
        })
    }

    fn remove_liquidity_locked(
        &mut self,
        ctx: &CallContext,
        request: &RemoveLiquidity,
        side_first: Side,
    ) -> Result<WithdrawalReceipt> {
        let caller = ctx.caller();
        let liquidity = request.liquidity();

        let snapshot = self.state;
        if snapshot.is_empty() {
            return Err(AmmError::InsufficientLiquidity(
                "pool has no outstanding claims",
            ));
        }
        if self.claims.balance_of(&caller) < liquidity {
            return Err(AmmError::InsufficientClaimBalance);
        }
        let (amount_a, amount_b) = compute_withdrawal(&snapshot, liquidity)?;
        debug!(%amount_a, %amount_b, burned = %liquidity, "withdrawal computed");
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }

        let (amount_first, amount_second) = by_side(side_first, amount_a, amount_b);
        if amount_first < request.amount_a_min() {
            return Err(AmmError::SlippageExceeded(
                "first asset payout below minimum",
            ));
        }
        if amount_second < request.amount_b_min() {
            return Err(AmmError::SlippageExceeded(
                "second asset payout below minimum",
            ));
        }

        self.ensure_custody(Side::A, amount_a)?;
        self.ensure_custody(Side::B, amount_b)?;

        self.state = snapshot.withdrawn(amount_a, amount_b, liquidity)?;

        self.claims
            .burn(&caller, liquidity)
            .map_err(AmmError::ClaimLedgerFailed)?;
        let to = request.to();
        self.push(Side::A, &to, amount_a)?;
        self.push(Side::B, &to, amount_b)?;

        self.events.emit(PoolEvent::LiquidityRemoved {
            provider: caller,
            to,
            asset_a: request.asset_a(),
            asset_b: request.asset_b(),
            amount_a: amount_first,
            amount_b: amount_second,
            burned: liquidity,
        });
        Ok(WithdrawalReceipt::new(amount_first, amount_second, liquidity))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::{Deadline, Timestamp};
    use crate::error::ErrorKind;

    fn state(a: u128, b: u128, supply: u128) -> PoolState {
        let Ok(state) = PoolState::EMPTY.deposited(
            Side::A,
            Amount::new(a),
            Amount::new(b),
            Liquidity::new(supply),
        ) else {
            panic!("expected Ok");
        };
        state
    }

    // -- compute_minted -----------------------------------------------------

    #[test]
    fn first_deposit_mints_geometric_mean() {
        let minted = compute_minted(&PoolState::EMPTY, Amount::new(200), Amount::new(50));
        assert_eq!(minted, Ok(Liquidity::new(100)));
    }

    #[test]
    fn first_deposit_floors_sqrt() {
        // sqrt(10 * 3) = 5.47..
        let minted = compute_minted(&PoolState::EMPTY, Amount::new(10), Amount::new(3));
        assert_eq!(minted, Ok(Liquidity::new(5)));
    }

    #[test]
    fn proportional_deposit() {
        let minted = compute_minted(&state(100, 100, 100), Amount::new(50), Amount::new(50));
        assert_eq!(minted, Ok(Liquidity::new(50)));
    }

    #[test]
    fn imbalanced_deposit_takes_worse_side() {
        let minted = compute_minted(&state(100, 200, 100), Amount::new(10), Amount::new(10));
        assert_eq!(minted, Ok(Liquidity::new(5)));
    }

    #[test]
    fn dust_deposit_mints_nothing() {
        let minted = compute_minted(&state(1_000, 1_000, 10), Amount::new(1), Amount::new(1));
        assert!(matches!(minted, Err(AmmError::InsufficientLiquidity(_))));
    }

    #[test]
    fn inconsistent_state_rejected() {
        let minted = compute_minted(&state(0, 100, 100), Amount::new(1), Amount::new(1));
        assert!(matches!(minted, Err(AmmError::InsufficientLiquidity(_))));
    }

    #[test]
    fn first_deposit_product_overflow() {
        let huge = Amount::MAX;
        let minted = compute_minted(&PoolState::EMPTY, huge, huge);
        assert!(matches!(minted, Err(AmmError::Overflow(_))));
    }

    // -- compute_withdrawal -------------------------------------------------

    #[test]
    fn withdrawal_is_proportional() {
        let out = compute_withdrawal(&state(300, 150, 100), Liquidity::new(10));
        assert_eq!(out, Ok((Amount::new(30), Amount::new(15))));
    }

    #[test]
    fn withdrawal_of_full_supply_returns_reserves() {
        let out = compute_withdrawal(&state(301, 157, 97), Liquidity::new(97));
        assert_eq!(out, Ok((Amount::new(301), Amount::new(157))));
    }

    #[test]
    fn withdrawal_from_empty_pool() {
        let out = compute_withdrawal(&PoolState::EMPTY, Liquidity::new(1));
        assert!(matches!(out, Err(AmmError::InsufficientLiquidity(_))));
    }

    // -- add_liquidity ------------------------------------------------------

    #[test]
    fn first_deposit_through_pool() {
        let mut pool = empty_pool();
        fund(&mut pool, &ALICE, 200, 50);
        let Ok(receipt) = pool.add_liquidity(&ctx(ALICE), &add_request(200, 50)) else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.minted(), Liquidity::new(100));
        assert_eq!(receipt.amount_a(), Amount::new(200));
        assert_eq!(receipt.amount_b(), Amount::new(50));
        assert_eq!(pool.reserves(), (Amount::new(200), Amount::new(50)));
        assert_eq!(pool.claim_balance_of(&ALICE), Liquidity::new(100));
        assert_eq!(pool.ledger_a().balance_of(&ALICE), Amount::ZERO);
        assert!(pool.verify_backing().is_ok());
        assert_eq!(
            pool.events().last().map(PoolEvent::name),
            Some("liquidity_added")
        );
    }

    #[test]
    fn wide_deposit_withdraws_in_full() {
        let amount_a = Amount::from_u256(crate::U256::one() << 200);
        let amount_b = Amount::from_u256(crate::U256::one() << 50);
        let mut pool = empty_pool();
        let Ok(()) = pool.ledger_a_mut().mint_to(&ALICE, amount_a) else {
            panic!("seed A");
        };
        let Ok(()) = pool.ledger_b_mut().mint_to(&ALICE, amount_b) else {
            panic!("seed B");
        };
        pool.ledger_a_mut().approve(&ALICE, &POOL, amount_a);
        pool.ledger_b_mut().approve(&ALICE, &POOL, amount_b);

        let deposit = AddLiquidity::new(ASSET_A, amount_a, ASSET_B, amount_b, ALICE, DEADLINE);
        let Ok(receipt) = pool.add_liquidity(&ctx(ALICE), &deposit) else {
            panic!("deposit");
        };
        // sqrt(2^250) = 2^125
        assert_eq!(receipt.minted().get(), crate::U256::one() << 125);

        let withdrawal =
            RemoveLiquidity::new(ASSET_A, ASSET_B, receipt.minted(), ALICE, DEADLINE);
        let Ok(out) = pool.remove_liquidity(&ctx(ALICE), &withdrawal) else {
            panic!("withdraw all");
        };
        assert_eq!(out.amount_a(), amount_a);
        assert_eq!(out.amount_b(), amount_b);
        assert!(pool.state().is_empty());
        assert_eq!(pool.ledger_a().balance_of(&ALICE), amount_a);
        assert_eq!(pool.ledger_b().balance_of(&ALICE), amount_b);
        assert!(pool.verify_backing().is_ok());
    }

    #[test]
    fn deposit_with_reversed_asset_order() {
        let mut pool = funded_pool(100, 200);
        fund(&mut pool, &ALICE, 10, 20);
        // Names B first: 20 of B, 10 of A.
        let request = AddLiquidity::new(
            ASSET_B,
            Amount::new(20),
            ASSET_A,
            Amount::new(10),
            ALICE,
            DEADLINE,
        );
        let Ok(receipt) = pool.add_liquidity(&ctx(ALICE), &request) else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.amount_a(), Amount::new(20));
        assert_eq!(receipt.amount_b(), Amount::new(10));
        assert_eq!(pool.reserves(), (Amount::new(110), Amount::new(220)));
        assert!(pool.verify_backing().is_ok());
    }

    #[test]
    fn zero_desired_amount_rejected() {
        let mut pool = funded_pool(100, 100);
        let before = *pool.state();
        let result = pool.add_liquidity(&ctx(ALICE), &add_request(0, 10));
        let Err(err) = result else {
            panic!("expected Err");
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(*pool.state(), before);
    }

    #[test]
    fn expired_deadline_rejected() {
        let mut pool = empty_pool();
        fund(&mut pool, &ALICE, 10, 10);
        let request = AddLiquidity::new(
            ASSET_A,
            Amount::new(10),
            ASSET_B,
            Amount::new(10),
            ALICE,
            Deadline::at(Timestamp::from_secs(999)),
        );
        let result = pool.add_liquidity(&ctx(ALICE), &request);
        assert!(matches!(result, Err(AmmError::DeadlineExpired { .. })));
        assert!(pool.state().is_empty());
    }

    #[test]
    fn unknown_asset_rejected() {
        let mut pool = empty_pool();
        let request = AddLiquidity::new(
            ASSET_A,
            Amount::new(10),
            OTHER_ASSET,
            Amount::new(10),
            ALICE,
            DEADLINE,
        );
        let result = pool.add_liquidity(&ctx(ALICE), &request);
        assert_eq!(result, Err(AmmError::UnknownAsset(OTHER_ASSET)));
    }

    #[test]
    fn failed_second_pull_refunds_first() {
        let mut pool = empty_pool();
        fund(&mut pool, &ALICE, 200, 50);
        pool.ledger_b_mut().freeze(&ALICE);

        let result = pool.add_liquidity(&ctx(ALICE), &add_request(200, 50));
        let Err(err) = result else {
            panic!("expected Err");
        };
        assert_eq!(err.kind(), ErrorKind::ExternalDependency);
        assert_eq!(pool.ledger_a().balance_of(&ALICE), Amount::new(200));
        assert_eq!(pool.ledger_a().allowance(&ALICE, &POOL), Amount::new(200));
        assert_eq!(pool.ledger_a().balance_of(&POOL), Amount::ZERO);
        assert!(pool.state().is_empty());
        assert!(pool.events().is_empty());
    }

    #[test]
    fn failed_mint_restores_everything() {
        let mut pool = empty_pool();
        fund(&mut pool, &ALICE, 200, 50);
        pool.claims_mut().freeze(&ALICE);

        let result = pool.add_liquidity(&ctx(ALICE), &add_request(200, 50));
        assert!(matches!(result, Err(AmmError::ClaimLedgerFailed(_))));
        assert!(pool.state().is_empty());
        assert_eq!(pool.ledger_a().balance_of(&ALICE), Amount::new(200));
        assert_eq!(pool.ledger_b().balance_of(&ALICE), Amount::new(50));
        assert!(pool.verify_backing().is_ok());
    }

    #[test]
    fn missing_allowance_fails_without_effect() {
        let mut pool = empty_pool();
        let Ok(()) = pool.ledger_a_mut().mint_to(&ALICE, Amount::new(10)) else {
            panic!("seed");
        };
        let result = pool.add_liquidity(&ctx(ALICE), &add_request(10, 10));
        assert!(matches!(result, Err(AmmError::TransferFailed { .. })));
        assert_eq!(pool.ledger_a().balance_of(&ALICE), Amount::new(10));
    }

    // -- remove_liquidity ---------------------------------------------------

    #[test]
    fn round_trip_returns_deposit() {
        let mut pool = funded_pool(200, 50);
        let Ok(receipt) = pool.remove_liquidity(&ctx(ALICE), &remove_request(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.amount_a(), Amount::new(200));
        assert_eq!(receipt.amount_b(), Amount::new(50));
        assert_eq!(receipt.burned(), Liquidity::new(100));
        assert_eq!(*pool.state(), PoolState::EMPTY);
        assert_eq!(pool.ledger_a().balance_of(&ALICE), Amount::new(200));
        assert_eq!(pool.ledger_b().balance_of(&ALICE), Amount::new(50));
        assert!(pool.verify_backing().is_ok());
    }

    #[test]
    fn partial_withdrawal() {
        let mut pool = funded_pool(300, 150);
        // supply = isqrt(45_000) = 212
        let Ok(receipt) = pool.remove_liquidity(&ctx(ALICE), &remove_request(100)) else {
            panic!("expected Ok");
        };
        // 300 * 100 / 212 = 141, 150 * 100 / 212 = 70
        assert_eq!(receipt.amount_a(), Amount::new(141));
        assert_eq!(receipt.amount_b(), Amount::new(70));
        assert_eq!(pool.reserves(), (Amount::new(159), Amount::new(80)));
        assert_eq!(pool.state().claim_supply(), Liquidity::new(112));
        assert!(pool.verify_backing().is_ok());
    }

    #[test]
    fn remove_zero_rejected() {
        let mut pool = funded_pool(100, 100);
        let result = pool.remove_liquidity(&ctx(ALICE), &remove_request(0));
        assert!(matches!(result, Err(AmmError::InvalidQuantity(_))));
    }

    #[test]
    fn remove_from_empty_pool() {
        let mut pool = empty_pool();
        let result = pool.remove_liquidity(&ctx(ALICE), &remove_request(1));
        assert!(matches!(result, Err(AmmError::InsufficientLiquidity(_))));
    }

    #[test]
    fn remove_more_than_held() {
        let mut pool = funded_pool(100, 100);
        let result = pool.remove_liquidity(&ctx(BOB), &remove_request(1));
        assert_eq!(result, Err(AmmError::InsufficientClaimBalance));
    }

    #[test]
    fn dust_burn_rejected() {
        let mut pool = funded_pool(1, 10_000);
        // supply = 100; 1 * 1 / 100 = 0 of A
        let result = pool.remove_liquidity(&ctx(ALICE), &remove_request(1));
        assert_eq!(result, Err(AmmError::InsufficientLiquidityBurned));
        assert_eq!(pool.state().claim_supply(), Liquidity::new(100));
    }

    #[test]
    fn slippage_rolls_back() {
        let mut pool = funded_pool(200, 50);
        let before = *pool.state();
        let request = remove_request(50).with_minimums(Amount::new(101), Amount::ZERO);
        let result = pool.remove_liquidity(&ctx(ALICE), &request);
        assert!(matches!(result, Err(AmmError::SlippageExceeded(_))));
        assert_eq!(*pool.state(), before);
        assert_eq!(pool.claim_balance_of(&ALICE), Liquidity::new(100));
    }

    #[test]
    fn failed_second_push_restores_burn_and_first_push() {
        let mut pool = funded_pool(200, 50);
        pool.ledger_b_mut().freeze(&ALICE);
        let before = *pool.state();

        let result = pool.remove_liquidity(&ctx(ALICE), &remove_request(100));
        let Err(err) = result else {
            panic!("expected Err");
        };
        assert_eq!(err.kind(), ErrorKind::ExternalDependency);
        assert_eq!(*pool.state(), before);
        assert_eq!(pool.claim_balance_of(&ALICE), Liquidity::new(100));
        assert_eq!(pool.ledger_a().balance_of(&ALICE), Amount::ZERO);
        assert!(pool.verify_backing().is_ok());

        pool.ledger_b_mut().unfreeze(&ALICE);
        assert!(pool
            .remove_liquidity(&ctx(ALICE), &remove_request(100))
            .is_ok());
    }

    #[test]
    fn withdrawal_minimums_follow_request_order() {
        let mut pool = funded_pool(200, 50);
        // Names B first; minimums apply to (B, A).
        let request = RemoveLiquidity::new(ASSET_B, ASSET_A, Liquidity::new(100), ALICE, DEADLINE)
            .with_minimums(Amount::new(50), Amount::new(200));
        let Ok(receipt) = pool.remove_liquidity(&ctx(ALICE), &request) else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.amount_a(), Amount::new(50));
        assert_eq!(receipt.amount_b(), Amount::new(200));
    }
}
