//! Wall-clock time, caller deadlines and the per-call host context.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::AccountId;
use crate::error::AmmError;

/// Host wall-clock time in seconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the timestamp in seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Caller-supplied time bound after which an operation is rejected.
///
/// A call made exactly at the deadline is still accepted.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Deadline, Timestamp};
///
/// let deadline = Deadline::at(Timestamp::from_secs(100));
/// assert!(deadline.check(Timestamp::from_secs(100)).is_ok());
/// assert!(deadline.check(Timestamp::from_secs(101)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Deadline(Timestamp);

impl Deadline {
    /// A deadline that never expires.
    pub const NEVER: Self = Self(Timestamp(u64::MAX));

    /// Creates a deadline at the given instant.
    #[must_use]
    pub const fn at(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }

    /// Returns the deadline instant.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.0
    }

    /// Passes iff `now` is at or before the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DeadlineExpired`] if `now` is past the deadline.
    pub const fn check(&self, now: Timestamp) -> Result<(), AmmError> {
        if now.0 > self.0 .0 {
            return Err(AmmError::DeadlineExpired {
                now: now.0,
                deadline: self.0 .0,
            });
        }
        Ok(())
    }
}

/// Host-provided facts about the current call: who is calling and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    caller: AccountId,
    now: Timestamp,
}

impl CallContext {
    /// Creates a call context.
    #[must_use]
    pub const fn new(caller: AccountId, now: Timestamp) -> Self {
        Self { caller, now }
    }

    /// Returns the calling account.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// Returns the host time of the call.
    #[must_use]
    pub const fn now(&self) -> Timestamp {
        self.now
    }
}
