//! Raw asset amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A raw asset quantity in the ledger's smallest unit.
///
/// `Amount` carries no decimal interpretation; it is the unit the asset
/// ledger accounts in. All `u128` values are valid amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking. Division takes
/// an explicit [`Rounding`] direction so precision loss is never silent.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, Rounding};
///
/// let a = Amount::new(500);
/// let b = Amount::new(100);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(600)));
/// assert_eq!(a.checked_div(&Amount::new(6), Rounding::Down), Some(Amount::new(83)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// - [`Rounding::Down`]: floor division (round towards zero).
    /// - [`Rounding::Up`]: ceiling division.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        match rounding {
            Rounding::Down => Some(Self(self.0 / divisor.0)),
            Rounding::Up => {
                let q = self.0 / divisor.0;
                let r = self.0 % divisor.0;
                if r != 0 {
                    // q + 1 cannot overflow: r != 0 implies self < u128::MAX
                    // or divisor > 1, either way q < u128::MAX.
                    Some(Self(q + 1))
                } else {
                    Some(Self(q))
                }
            }
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn is_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    // -- Display & ordering -------------------------------------------------

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(250_200)), "250200");
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(83) < Amount::new(100));
        assert_eq!(Amount::new(500), Amount::new(500));
    }

    // -- checked_add --------------------------------------------------------

    #[test]
    fn add_normal() {
        let a = Amount::new(500);
        let b = Amount::new(100);
        assert_eq!(a.checked_add(&b), Some(Amount::new(600)));
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    // -- checked_sub --------------------------------------------------------

    #[test]
    fn sub_normal() {
        let a = Amount::new(500);
        let b = Amount::new(83);
        assert_eq!(a.checked_sub(&b), Some(Amount::new(417)));
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn sub_to_zero() {
        let a = Amount::new(42);
        assert_eq!(a.checked_sub(&a), Some(Amount::ZERO));
    }

    // -- checked_mul --------------------------------------------------------

    #[test]
    fn mul_normal() {
        let a = Amount::new(600);
        let b = Amount::new(417);
        assert_eq!(a.checked_mul(&b), Some(Amount::new(250_200)));
    }

    #[test]
    fn mul_by_zero() {
        assert_eq!(
            Amount::new(42).checked_mul(&Amount::ZERO),
            Some(Amount::ZERO)
        );
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    // -- checked_div --------------------------------------------------------

    #[test]
    fn div_floor_truncates() {
        // 50_000 / 600 = 83.33… → 83
        let n = Amount::new(50_000);
        let d = Amount::new(600);
        assert_eq!(n.checked_div(&d, Rounding::Down), Some(Amount::new(83)));
    }

    #[test]
    fn div_ceil_rounds_up() {
        let n = Amount::new(50_000);
        let d = Amount::new(600);
        assert_eq!(n.checked_div(&d, Rounding::Up), Some(Amount::new(84)));
    }

    #[test]
    fn div_exact_both_directions() {
        let n = Amount::new(100);
        let d = Amount::new(10);
        assert_eq!(n.checked_div(&d, Rounding::Down), Some(Amount::new(10)));
        assert_eq!(n.checked_div(&d, Rounding::Up), Some(Amount::new(10)));
    }

    #[test]
    fn div_by_zero() {
        let n = Amount::new(100);
        assert_eq!(n.checked_div(&Amount::ZERO, Rounding::Down), None);
        assert_eq!(n.checked_div(&Amount::ZERO, Rounding::Up), None);
    }

    #[test]
    fn div_zero_numerator() {
        let d = Amount::new(10);
        assert_eq!(
            Amount::ZERO.checked_div(&d, Rounding::Down),
            Some(Amount::ZERO)
        );
    }

    #[test]
    fn div_max_ceil_no_overflow() {
        // ceil(MAX / 2) must not overflow in the rounding step.
        let floor = Amount::MAX.checked_div(&Amount::new(2), Rounding::Down);
        let ceil = Amount::MAX.checked_div(&Amount::new(2), Rounding::Up);
        let Some(floor) = floor else {
            panic!("floor division failed");
        };
        assert_eq!(ceil, Some(Amount::new(floor.get() + 1)));
    }

    #[test]
    fn div_smaller_than_divisor() {
        // 1 / 2 → 0 floor, 1 ceil
        assert_eq!(
            Amount::new(1).checked_div(&Amount::new(2), Rounding::Down),
            Some(Amount::ZERO)
        );
        assert_eq!(
            Amount::new(1).checked_div(&Amount::new(2), Rounding::Up),
            Some(Amount::new(1))
        );
    }
}
