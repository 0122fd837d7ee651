//! The pool's two assets and the mapping from asset identity to reserve.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::AssetId;
use crate::error::AmmError;

/// One of the two reserve slots of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first asset of the pair.
    A,
    /// The second asset of the pair.
    B,
}

impl Side {
    /// Returns the opposite slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// An ordered pair of distinct assets.
///
/// Unlike a canonically sorted pair, the declared order is kept: the first
/// asset always backs reserve A and the second reserve B.  Every lookup from
/// an asset identity to a reserve goes through [`AssetPair::side_of`], which
/// is total over the two known assets and rejects anything else.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{AssetId, AssetPair, Side};
///
/// let usdc = AssetId::from_bytes([2u8; 32]);
/// let weth = AssetId::from_bytes([1u8; 32]);
///
/// let pair = AssetPair::new(usdc, weth).expect("distinct assets");
/// assert_eq!(pair.side_of(&usdc), Ok(Side::A));
/// assert_eq!(pair.side_of(&weth), Ok(Side::B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new `AssetPair` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both identities are equal.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        if asset_a == asset_b {
            return Err(AmmError::IdenticalAssets);
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the asset backing reserve A.
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the asset backing reserve B.
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.asset_b
    }

    /// Returns the asset in the given slot.
    #[must_use]
    pub const fn asset(&self, side: Side) -> AssetId {
        match side {
            Side::A => self.asset_a,
            Side::B => self.asset_b,
        }
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Maps an asset identity to its reserve slot.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownAsset`] if `asset` is not in the pair.
    pub fn side_of(&self, asset: &AssetId) -> Result<Side, AmmError> {
        if *asset == self.asset_a {
            Ok(Side::A)
        } else if *asset == self.asset_b {
            Ok(Side::B)
        } else {
            Err(AmmError::UnknownAsset(*asset))
        }
    }

    /// Resolves a caller-ordered `(first, second)` pair of assets.
    ///
    /// Returns the slot of `first`; `second` is guaranteed to occupy the
    /// other slot.  Callers may name the pool's assets in either order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if either asset is not in the pair.
    /// - [`AmmError::IdenticalAssets`] if both name the same asset.
    pub fn orient(&self, first: &AssetId, second: &AssetId) -> Result<Side, AmmError> {
        let side_first = self.side_of(first)?;
        let side_second = self.side_of(second)?;
        if side_first == side_second {
            return Err(AmmError::IdenticalAssets);
        }
        Ok(side_first)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    fn pair() -> AssetPair {
        let Ok(pair) = AssetPair::new(asset(2), asset(1)) else {
            panic!("expected Ok");
        };
        pair
    }

    #[test]
    fn keeps_declared_order() {
        let p = pair();
        assert_eq!(p.first(), asset(2));
        assert_eq!(p.second(), asset(1));
        assert_eq!(p.asset(Side::A), asset(2));
        assert_eq!(p.asset(Side::B), asset(1));
    }

    #[test]
    fn rejects_same_asset() {
        let Err(e) = AssetPair::new(asset(1), asset(1)) else {
            panic!("expected Err");
        };
        assert_eq!(e, AmmError::IdenticalAssets);
    }

    #[test]
    fn contains() {
        let p = pair();
        assert!(p.contains(&asset(1)));
        assert!(p.contains(&asset(2)));
        assert!(!p.contains(&asset(3)));
    }

    #[test]
    fn side_of_is_total_over_known_assets() {
        let p = pair();
        assert_eq!(p.side_of(&asset(2)), Ok(Side::A));
        assert_eq!(p.side_of(&asset(1)), Ok(Side::B));
        assert_eq!(p.side_of(&asset(9)), Err(AmmError::UnknownAsset(asset(9))));
    }

    #[test]
    fn orient_accepts_both_orders() {
        let p = pair();
        assert_eq!(p.orient(&asset(2), &asset(1)), Ok(Side::A));
        assert_eq!(p.orient(&asset(1), &asset(2)), Ok(Side::B));
    }

    #[test]
    fn orient_rejects_duplicates_and_foreign() {
        let p = pair();
        assert_eq!(p.orient(&asset(1), &asset(1)), Err(AmmError::IdenticalAssets));
        assert_eq!(
            p.orient(&asset(1), &asset(7)),
            Err(AmmError::UnknownAsset(asset(7)))
        );
    }

    #[test]
    fn side_other() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other(), Side::A);
        assert_eq!(Side::A.to_string(), "A");
    }
}
