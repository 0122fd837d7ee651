//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool instance: which
//! two assets it trades and which account holds its custody balances.

mod pool_config;

pub use pool_config::PoolConfig;
