//! Explicit rounding direction for arithmetic operations.

/// Specifies the rounding direction for division on domain types.
///
/// Every division in the engine names its `Rounding` explicitly. Swap
/// outputs and spot prices always round [`Rounding::Down`] so the pool
/// is never overpaid; [`Rounding::Up`] exists for callers computing
/// required inputs.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
