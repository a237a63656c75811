//! Append-only event records emitted by successful pool operations.
//!
//! Exactly one record per successful mutating operation, in completion
//! order, and never on failure. External observers read them through
//! [`Pool::events`](crate::pool::Pool::events) or drain them with
//! [`Pool::take_events`](crate::pool::Pool::take_events).

use core::fmt;

use crate::domain::{AccountId, Amount, AssetId};

/// A record of a completed state-mutating pool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolEvent {
    /// Paired reserves were provisioned by the owner.
    LiquidityAdded {
        /// The provider (always the pool owner).
        provider: AccountId,
        /// Asset-A amount deposited.
        amount_a: Amount,
        /// Asset-B amount deposited.
        amount_b: Amount,
    },

    /// Paired reserves were withdrawn by the owner.
    LiquidityRemoved {
        /// The provider (always the pool owner).
        provider: AccountId,
        /// Asset-A amount withdrawn.
        amount_a: Amount,
        /// Asset-B amount withdrawn.
        amount_b: Amount,
    },

    /// One asset was exchanged for the other.
    TokensSwapped {
        /// The trader.
        user: AccountId,
        /// Asset paid into the pool.
        asset_in: AssetId,
        /// Quantity paid in.
        amount_in: Amount,
        /// Asset paid out of the pool.
        asset_out: AssetId,
        /// Quantity paid out.
        amount_out: Amount,
    },
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LiquidityAdded {
                provider,
                amount_a,
                amount_b,
            } => write!(
                f,
                "liquidity added by {provider}: ({amount_a}, {amount_b})"
            ),
            Self::LiquidityRemoved {
                provider,
                amount_a,
                amount_b,
            } => write!(
                f,
                "liquidity removed by {provider}: ({amount_a}, {amount_b})"
            ),
            Self::TokensSwapped {
                user,
                asset_in,
                amount_in,
                asset_out,
                amount_out,
            } => write!(
                f,
                "swap by {user}: {amount_in} of {asset_in} for {amount_out} of {asset_out}"
            ),
        }
    }
}
