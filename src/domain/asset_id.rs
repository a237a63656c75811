//! Ledger-agnostic asset identity.

use core::fmt;

/// The identity of a fungible asset, independent of any particular
/// ledger technology.
///
/// Wraps a fixed-size `[u8; 32]` byte string. The all-zero value is the
/// null sentinel — [`AssetId::is_null`] — and is rejected wherever a
/// real asset is required (pool construction in particular).
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::AssetId;
///
/// let id = AssetId::from_bytes([7u8; 32]);
/// assert_eq!(id.as_bytes(), [7u8; 32]);
/// assert!(!id.is_null());
/// assert!(AssetId::NULL.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// The all-zero null sentinel.
    pub const NULL: Self = Self([0u8; 32]);

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

    /// Returns `true` if this is the all-zero null sentinel.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for AssetId {
    /// Lowercase hex rendering of the full 32 bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
