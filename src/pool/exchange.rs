//! Exact-input swaps.
//!
//! # Swap algorithm (input side `i`, output side `o`)
//!
//! 1. `amount_out = floor(amount_in × reserve_o / (reserve_i + amount_in))`
//! 2. `reserve_i += amount_in`
//! 3. `reserve_o -= amount_out`
//!
//! Reserves are the pool's tracked counters, never live custody balances,
//! so unsolicited transfers to the pool account do not move the price.

use tracing::debug;

use super::{get_amount_out, Pool, PoolEvent};
use crate::domain::{CallContext, Side, SwapExactIn, SwapResult};
use crate::error::{AmmError, Result};
use crate::traits::{AssetLedger, ClaimLedger};

impl<A, B, C> Pool<A, B, C>
where
    A: AssetLedger + Clone,
    B: AssetLedger + Clone,
    C: ClaimLedger + Clone,
{
    /// Sells exactly `request.amount_in()` of the path's input asset for
    /// as much of its output asset as the reserves give.
    ///
    /// Path elements are mapped to reserves by asset identity, so either
    /// direction works regardless of the pool's declared order.
    ///
    /// # Errors
    ///
    /// - Validation errors from [`SwapExactIn::validate`].
    /// - [`AmmError::UnknownAsset`] if a path element is not a pool asset.
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `request.amount_out_min()`.
    /// - [`AmmError::TransferFailed`] if either transfer fails.
    ///
    /// On any error the pool and its ledgers are left unchanged.
    pub fn swap_exact_tokens_for_tokens(
        &mut self,
        ctx: &CallContext,
        request: &SwapExactIn,
    ) -> Result<SwapResult> {
        request.validate(ctx.now())?;
        let path = request.path();
        let side_in = self.config.pair().orient(&path.input(), &path.output())?;
        self.guarded("swap", |pool| pool.swap_locked(ctx, request, side_in))
    }

    fn swap_locked(
        &mut self,
        ctx: &CallContext,
        request: &SwapExactIn,
        side_in: Side,
    ) -> Result<SwapResult> {
        let side_out = side_in.other();
        let amount_in = request.amount_in();

        let snapshot = self.state;
        let reserve_in = snapshot.reserve(side_in);
        let reserve_out = snapshot.reserve(side_out);
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity("pool has no reserves"));
        }

        let amount_out = get_amount_out(amount_in, reserve_in, reserve_out)?;
        debug!(%side_in, %amount_in, %amount_out, %reserve_in, %reserve_out, "swap computed");
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        if amount_out < request.amount_out_min() {
            return Err(AmmError::SlippageExceeded("output below minimum"));
        }
        let next = snapshot.swapped(side_in, amount_in, amount_out)?;
        self.ensure_custody(side_out, amount_out)?;

        let caller = ctx.caller();
        self.pull(side_in, &caller, amount_in)?;

        self.state = next;

        let to = request.to();
        self.push(side_out, &to, amount_out)?;

        let path = request.path();
        self.events.emit(PoolEvent::Swap {
            sender: caller,
            to,
            asset_in: path.input(),
            asset_out: path.output(),
            amount_in,
            amount_out,
        });
        SwapResult::new(path.input(), path.output(), amount_in, amount_out)
    }
}
