//! Constant-product pricing formulas (`x · y = k`).
//!
//! All division rounds [`Rounding::Down`]: truncation always favours
//! the pool, which is what keeps the reserve product non-decreasing
//! across swaps with no fee on the input side.

use crate::domain::{Amount, Rounding, SpotPrice};
use crate::error::{PoolError, Result};

/// Computes the swap output for a given input against a reserve pair.
///
/// Formula: `amount_out = ⌊reserve_out × amount_in / (reserve_in + amount_in)⌋`
///
/// Both reserves must be strictly positive and `amount_in` strictly
/// positive — callers validate that before pricing. The result is
/// always strictly less than `reserve_out`, so the output reserve can
/// never be fully drained by a swap. A tiny input against deep reserves
/// can legitimately price to zero output.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] if `reserve_out × amount_in` or
/// `reserve_in + amount_in` exceeds the `u128` range.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Amount;
/// use xyk_pool::math::swap_output;
///
/// let out = swap_output(Amount::new(500), Amount::new(500), Amount::new(100));
/// assert_eq!(out, Ok(Amount::new(83)));
/// ```
pub fn swap_output(reserve_in: Amount, reserve_out: Amount, amount_in: Amount) -> Result<Amount> {
    let denominator = reserve_in
        .checked_add(&amount_in)
        .ok_or(PoolError::Overflow("swap denominator overflow"))?;
    let numerator = reserve_out
        .checked_mul(&amount_in)
        .ok_or(PoolError::Overflow("swap numerator overflow"))?;
    numerator
        .checked_div(&denominator, Rounding::Down)
        .ok_or(PoolError::Overflow("swap division by zero"))
}

/// Computes the spot price of the base asset denominated in the quote
/// asset, scaled by [`SpotPrice::SCALE`].
///
/// Formula: `price = ⌊reserve_quote × SCALE / reserve_base⌋`
///
/// # Errors
///
/// - [`PoolError::Overflow`] if `reserve_quote × SCALE` exceeds the
///   `u128` range.
/// - [`PoolError::ZeroSpotPrice`] if the floored result is zero — with
///   positive reserves that marks a precision defect, not a market
///   state, and the error is classified as a fault.
pub fn spot_price(reserve_base: Amount, reserve_quote: Amount) -> Result<SpotPrice> {
    let numerator = reserve_quote
        .checked_mul(&Amount::new(SpotPrice::SCALE))
        .ok_or(PoolError::Overflow("spot price numerator overflow"))?;
    let scaled = numerator
        .checked_div(&reserve_base, Rounding::Down)
        .ok_or(PoolError::Overflow("spot price division by zero"))?;
    SpotPrice::new(scaled.get()).ok_or(PoolError::ZeroSpotPrice {
        reserve_base,
        reserve_quote,
    })
}

/// Computes the reserve product `reserve_a × reserve_b` for invariant
/// checks.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] if the product exceeds the `u128`
/// range.
pub fn product(reserve_a: Amount, reserve_b: Amount) -> Result<u128> {
    reserve_a
        .checked_mul(&reserve_b)
        .map(|amount| amount.get())
        .ok_or(PoolError::Overflow("reserve product overflow"))
}
