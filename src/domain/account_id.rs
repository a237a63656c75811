//! Principal identity.

use core::fmt;

/// The identity of a principal: the pool owner, a trader, or the pool's
/// own custody account on the asset ledgers.
///
/// Like [`AssetId`](super::AssetId) this is an opaque 32-byte string;
/// the engine only ever compares identities for equality, it never
/// interprets them.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::AccountId;
///
/// let owner = AccountId::from_bytes([0xAA; 32]);
/// let trader = AccountId::from_bytes([0xBB; 32]);
/// assert_ne!(owner, trader);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AccountId {
    /// Lowercase hex rendering of the full 32 bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
