//! Fixed-point spot price.

use core::fmt;

/// An instantaneous exchange rate as an unsigned fixed-point number
/// scaled by [`SpotPrice::SCALE`] (10¹⁸).
///
/// A raw value of `SCALE` means a 1:1 rate; `2 × SCALE` means two units
/// of the quote asset per unit of the base asset. A `SpotPrice` is
/// strictly positive by construction — [`SpotPrice::new`] returns `None`
/// for zero, because a zero price out of positive reserves indicates an
/// arithmetic defect, not a market condition.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::SpotPrice;
///
/// let par = SpotPrice::new(SpotPrice::SCALE);
/// assert!(par.is_some());
/// assert!(SpotPrice::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct SpotPrice(u128);

impl SpotPrice {
    /// Fixed-point scaling factor: 10¹⁸.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Creates a `SpotPrice` from a raw scaled value.
    ///
    /// Returns `None` if `raw` is zero.
    #[must_use]
    pub const fn new(raw: u128) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for SpotPrice {
    /// Renders as `integer.fraction` with the full 18 fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        write!(f, "{whole}.{frac:018}")
    }
}
