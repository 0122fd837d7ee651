//! Chain-agnostic asset identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A generic, chain-agnostic identifier of a fungible asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// considered valid identifiers, so construction is infallible.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::AssetId;
///
/// let id = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(id.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
