//! Result record of an executed swap.

use core::fmt;

use super::{Amount, AssetId};

/// What a completed swap moved: which asset came in, which went out,
/// and how much of each.
///
/// Produced only by successful swap operations; the amounts are the
/// exact quantities the ledgers transferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct SwapOutcome {
    asset_in: AssetId,
    amount_in: Amount,
    asset_out: AssetId,
    amount_out: Amount,
}

impl SwapOutcome {
    /// Creates a new outcome record.
    pub(crate) const fn new(
        asset_in: AssetId,
        amount_in: Amount,
        asset_out: AssetId,
        amount_out: Amount,
    ) -> Self {
        Self {
            asset_in,
            amount_in,
            asset_out,
            amount_out,
        }
    }

    /// The asset the caller paid into the pool.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// The quantity paid in.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// The asset the pool paid out.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// The quantity paid out.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} -> {} of {}",
            self.amount_in, self.asset_in, self.amount_out, self.asset_out
        )
    }
}
