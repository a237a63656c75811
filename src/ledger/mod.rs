//! The asset ledger capability the pool engine consumes.
//!
//! The engine never owns balance accounting. It moves value through the
//! [`AssetLedger`] trait and treats any error from a mutating call as a
//! refused transfer — the distinction between "returned failure" and
//! "propagated failure" does not exist from the pool's point of view.
//!
//! [`InMemoryLedger`] is a reference implementation with full balance
//! and allowance bookkeeping, used by this crate's tests and by
//! consumers embedding the engine without a real ledger behind it.

mod memory;

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId};

pub use memory::InMemoryLedger;

/// Error returned by an asset ledger's mutating calls.
///
/// The pool engine maps every variant to
/// [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed);
/// the structured form exists for callers interacting with a ledger
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LedgerError {
    /// The source account does not hold enough of the asset.
    #[error(
        "account {account} holds {balance} of asset {asset}, \
         cannot move {requested}"
    )]
    InsufficientBalance {
        /// Asset being moved.
        asset: AssetId,
        /// Source account.
        account: AccountId,
        /// Balance actually held.
        balance: Amount,
        /// Amount the movement required.
        requested: Amount,
    },

    /// The spender's allowance does not cover the movement.
    #[error(
        "spender {spender} is allowed {allowance} of asset {asset} \
         from {owner}, cannot move {requested}"
    )]
    InsufficientAllowance {
        /// Asset being moved.
        asset: AssetId,
        /// Account whose funds would move.
        owner: AccountId,
        /// Account attempting the movement.
        spender: AccountId,
        /// Allowance currently granted.
        allowance: Amount,
        /// Amount the movement required.
        requested: Amount,
    },

    /// The ledger refused the movement for a reason of its own.
    #[error("ledger for asset {asset} refused the movement: {reason}")]
    Refused {
        /// Asset being moved.
        asset: AssetId,
        /// Ledger-supplied reason.
        reason: &'static str,
    },
}

/// Fungible-asset accounting capability.
///
/// One implementor per asset; the pool holds exactly two handles, fixed
/// at construction. Mutating calls either fully apply or fully refuse a
/// movement — the engine never assumes success without checking.
///
/// Implementations must be [`Send`] + [`Sync`]: the hosting environment
/// may serve read-only queries concurrently with a mutating operation.
pub trait AssetLedger: Send + Sync {
    /// The identity of the asset this ledger accounts for.
    fn id(&self) -> AssetId;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if the movement is refused; no partial
    /// application is permitted.
    fn transfer(&self, from: AccountId, to: AccountId, amount: Amount)
        -> Result<(), LedgerError>;

    /// Moves `amount` from `from` to `to` on behalf of `spender`,
    /// debiting the allowance `from` granted to `spender`.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if balance or allowance is
    /// insufficient, or the ledger refuses for a reason of its own.
    fn transfer_from(
        &self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Returns the balance held by `account`.
    fn balance_of(&self, account: AccountId) -> Amount;

    /// Grants `spender` an allowance of `amount` over `owner`'s funds,
    /// replacing any previous allowance.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if the ledger refuses the grant.
    fn approve(
        &self,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Returns the allowance `owner` has granted to `spender`.
    fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount;
}
