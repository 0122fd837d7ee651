//! Structured records of completed pool transitions.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{AccountId, Amount, AssetId, Liquidity};

/// One successful state transition, for external indexing.
///
/// Amounts are reported in the asset order the caller used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PoolEvent {
    /// Both assets were deposited and claims minted.
    LiquidityAdded {
        /// Account the assets were pulled from.
        provider: AccountId,
        /// Account credited with the minted claims.
        to: AccountId,
        /// First asset as named by the caller.
        asset_a: AssetId,
        /// Second asset as named by the caller.
        asset_b: AssetId,
        /// Amount of `asset_a` deposited.
        amount_a: Amount,
        /// Amount of `asset_b` deposited.
        amount_b: Amount,
        /// Claims minted.
        minted: Liquidity,
    },
    /// Claims were burned for a share of both reserves.
    LiquidityRemoved {
        /// Account whose claims were burned.
        provider: AccountId,
        /// Account receiving the assets.
        to: AccountId,
        /// First asset as named by the caller.
        asset_a: AssetId,
        /// Second asset as named by the caller.
        asset_b: AssetId,
        /// Amount of `asset_a` paid out.
        amount_a: Amount,
        /// Amount of `asset_b` paid out.
        amount_b: Amount,
        /// Claims burned.
        burned: Liquidity,
    },
    /// One asset was exchanged for the other.
    Swap {
        /// Account the input was pulled from.
        sender: AccountId,
        /// Account receiving the output.
        to: AccountId,
        /// Asset paid in.
        asset_in: AssetId,
        /// Asset paid out.
        asset_out: AssetId,
        /// Input amount.
        amount_in: Amount,
        /// Output amount.
        amount_out: Amount,
    },
    /// Custody balances above the tracked reserves were paid out.
    Skim {
        /// Account that triggered the skim.
        caller: AccountId,
        /// Account receiving the excess.
        to: AccountId,
        /// Excess of reserve A's asset.
        excess_a: Amount,
        /// Excess of reserve B's asset.
        excess_b: Amount,
    },
}

impl PoolEvent {
    /// Short name of the event kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LiquidityAdded { .. } => "liquidity_added",
            Self::LiquidityRemoved { .. } => "liquidity_removed",
            Self::Swap { .. } => "swap",
            Self::Skim { .. } => "skim",
        }
    }
}

/// Append-only list of emitted events.
///
/// Only the pool appends; readers get a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<PoolEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All events in emission order.
    #[must_use]
    pub fn as_slice(&self) -> &[PoolEvent] {
        &self.events
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PoolEvent> {
        self.events.last()
    }

    /// Number of events emitted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn emit(&mut self, event: PoolEvent) {
        match &event {
            PoolEvent::LiquidityAdded {
                provider,
                amount_a,
                amount_b,
                minted,
                ..
            } => info!(%provider, %amount_a, %amount_b, %minted, "liquidity added"),
            PoolEvent::LiquidityRemoved {
                provider,
                amount_a,
                amount_b,
                burned,
                ..
            } => info!(%provider, %amount_a, %amount_b, %burned, "liquidity removed"),
            PoolEvent::Swap {
                sender,
                asset_in,
                amount_in,
                amount_out,
                ..
            } => info!(%sender, %asset_in, %amount_in, %amount_out, "swap"),
            PoolEvent::Skim {
                to,
                excess_a,
                excess_b,
                ..
            } => info!(%to, %excess_a, %excess_b, "skim"),
        }
        self.events.push(event);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.events.truncate(len);
    }
}
