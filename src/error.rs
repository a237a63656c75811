//! Unified error types for the pool engine.
//!
//! Every fallible operation returns [`PoolError`]. Variants carry
//! structured fields rather than formatted strings so callers can branch
//! on the exact cause, and each variant belongs to one of four
//! categories — see [`ErrorKind`] and [`PoolError::kind`].
//!
//! The [`ErrorKind::Fault`] category is special: it marks an
//! internal-consistency violation (a decreasing reserve product, a zero
//! price out of positive reserves). Those indicate a defect in the
//! engine's arithmetic, not bad input, and are never worth retrying.

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId};

/// Convenient result alias used across the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Category of a [`PoolError`], for callers branching on recoverability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller mistake; retrying with different inputs can succeed.
    Validation,
    /// The external asset ledger refused or failed a movement.
    Collaborator,
    /// A mutating call was issued while another was in flight.
    Concurrency,
    /// Internal-consistency violation; indicates a defect, never retry.
    Fault,
}

/// Error type for all pool engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PoolError {
    /// Liquidity provision requires both amounts strictly positive.
    #[error("invalid liquidity amounts: amount_a={amount_a}, amount_b={amount_b}")]
    InvalidLiquidityAmounts {
        /// Requested asset-A amount.
        amount_a: Amount,
        /// Requested asset-B amount.
        amount_b: Amount,
    },

    /// Swap input must be strictly positive.
    #[error("invalid swap amount: {amount_in}")]
    InvalidSwapAmount {
        /// The rejected input amount.
        amount_in: Amount,
    },

    /// The asset is not one of the pool's two configured assets.
    #[error("asset {asset} is not part of this pool")]
    InvalidToken {
        /// The unrecognized asset identity.
        asset: AssetId,
    },

    /// A withdrawal asked for more than the pool holds.
    #[error(
        "insufficient reserves: requested ({requested_a}, {requested_b}), \
         available ({reserve_a}, {reserve_b})"
    )]
    InsufficientReserves {
        /// Requested asset-A amount.
        requested_a: Amount,
        /// Requested asset-B amount.
        requested_b: Amount,
        /// Current asset-A reserve.
        reserve_a: Amount,
        /// Current asset-B reserve.
        reserve_b: Amount,
    },

    /// Both reserves must be strictly positive for swaps and price queries.
    #[error("pool has no liquidity")]
    NoLiquidity,

    /// Liquidity operations are restricted to the pool owner.
    #[error("caller {caller} is not the pool owner")]
    Unauthorized {
        /// The rejected caller identity.
        caller: AccountId,
    },

    /// Pool construction requires two distinct, non-null asset handles.
    #[error("invalid asset pair: asset_a={asset_a}, asset_b={asset_b}")]
    InvalidAssetPair {
        /// First asset identity.
        asset_a: AssetId,
        /// Second asset identity.
        asset_b: AssetId,
    },

    /// A withdrawal would leave exactly one reserve at zero.
    ///
    /// The pool state machine has two legal regions — both reserves zero
    /// or both strictly positive — and a one-sided drain would strand
    /// the remaining reserve behind a permanently failing swap path.
    #[error("withdrawal would leave one-sided reserves ({reserve_a}, {reserve_b})")]
    OneSidedDrain {
        /// Asset-A reserve the withdrawal would leave.
        reserve_a: Amount,
        /// Asset-B reserve the withdrawal would leave.
        reserve_b: Amount,
    },

    /// The asset ledger refused or failed a movement.
    #[error("transfer of {amount} units of asset {asset} from {from} to {to} failed")]
    TransferFailed {
        /// Asset whose ledger refused the movement.
        asset: AssetId,
        /// Source account.
        from: AccountId,
        /// Destination account.
        to: AccountId,
        /// Amount that failed to move.
        amount: Amount,
    },

    /// A mutating call was issued while another was still executing.
    #[error("reentrant call rejected: another mutating operation is in flight")]
    Reentrant,

    /// Checked arithmetic exhausted the `u128` range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// The constant-product invariant would have decreased.
    ///
    /// Never observable with correct arithmetic; treated as a defect.
    #[error("constant-product invariant violated: before={before}, after={after}")]
    ProductInvariantViolated {
        /// Reserve product before the operation.
        before: u128,
        /// Reserve product the operation would have committed.
        after: u128,
    },

    /// A spot price computed to zero from positive reserves.
    ///
    /// Never observable with correct arithmetic; treated as a defect.
    #[error("spot price computed to zero from reserves ({reserve_base}, {reserve_quote})")]
    ZeroSpotPrice {
        /// Reserve of the base (denominator) asset.
        reserve_base: Amount,
        /// Reserve of the quote (numerator) asset.
        reserve_quote: Amount,
    },
}

impl PoolError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLiquidityAmounts { .. }
            | Self::InvalidSwapAmount { .. }
            | Self::InvalidToken { .. }
            | Self::InsufficientReserves { .. }
            | Self::NoLiquidity
            | Self::Unauthorized { .. }
            | Self::InvalidAssetPair { .. }
            | Self::OneSidedDrain { .. }
            | Self::Overflow(_) => ErrorKind::Validation,
            Self::TransferFailed { .. } => ErrorKind::Collaborator,
            Self::Reentrant => ErrorKind::Concurrency,
            Self::ProductInvariantViolated { .. } | Self::ZeroSpotPrice { .. } => ErrorKind::Fault,
        }
    }

    /// Returns `true` for internal-consistency faults.
    ///
    /// A fault indicates a defect in the engine, not a recoverable
    /// condition; callers should treat it as unrecoverable.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self.kind(), ErrorKind::Fault)
    }
}
