//! In-memory reference ledger.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::{AccountId, Amount, AssetId};

use super::{AssetLedger, LedgerError};

#[derive(Debug, Default)]
struct LedgerState {
    balances: HashMap<AccountId, u128>,
    /// Keyed by `(owner, spender)`.
    allowances: HashMap<(AccountId, AccountId), u128>,
}

/// A process-local [`AssetLedger`] with balance and allowance
/// bookkeeping behind a mutex.
///
/// Semantics follow the usual fungible-token conventions: transfers
/// refuse rather than partially apply, `transfer_from` debits the
/// spender's allowance, and `approve` replaces the previous grant.
/// Zero-amount movements always succeed.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{AccountId, Amount, AssetId};
/// use xyk_pool::ledger::{AssetLedger, InMemoryLedger};
///
/// let ledger = InMemoryLedger::new(AssetId::from_bytes([1u8; 32]));
/// let alice = AccountId::from_bytes([0xA1; 32]);
/// let bob = AccountId::from_bytes([0xB0; 32]);
///
/// ledger.mint(alice, Amount::new(1_000));
/// ledger.transfer(alice, bob, Amount::new(400)).expect("transfer");
///
/// assert_eq!(ledger.balance_of(alice), Amount::new(600));
/// assert_eq!(ledger.balance_of(bob), Amount::new(400));
/// ```
#[derive(Debug)]
pub struct InMemoryLedger {
    id: AssetId,
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    /// Creates an empty ledger for the given asset.
    #[must_use]
    pub fn new(id: AssetId) -> Self {
        Self {
            id,
            state: Mutex::new(LedgerState::default()),
        }
    }

    /// Credits `account` with `amount` out of thin air.
    ///
    /// Test and bootstrap helper; saturates at `u128::MAX`.
    pub fn mint(&self, account: AccountId, amount: Amount) {
        let mut state = self.lock();
        let balance = state.balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount.get());
    }

    /// Recovers the guard even if a holder panicked mid-update.
    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn move_balance(
        state: &mut LedgerState,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let from_balance = state.balances.get(&from).copied().unwrap_or(0);
        if from_balance < amount.get() {
            return Err(LedgerError::InsufficientBalance {
                asset,
                account: from,
                balance: Amount::new(from_balance),
                requested: amount,
            });
        }
        let to_balance = state.balances.get(&to).copied().unwrap_or(0);
        let Some(new_to) = to_balance.checked_add(amount.get()) else {
            return Err(LedgerError::Refused {
                asset,
                reason: "destination balance overflow",
            });
        };
        state.balances.insert(from, from_balance - amount.get());
        state.balances.insert(to, new_to);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn id(&self) -> AssetId {
        self.id
    }

    fn transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let mut state = self.lock();
        Self::move_balance(&mut state, self.id, from, to, amount)
    }

    fn transfer_from(
        &self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let mut state = self.lock();
        // Owner moving its own funds needs no allowance.
        if spender != from {
            let allowance = state.allowances.get(&(from, spender)).copied().unwrap_or(0);
            if allowance < amount.get() {
                return Err(LedgerError::InsufficientAllowance {
                    asset: self.id,
                    owner: from,
                    spender,
                    allowance: Amount::new(allowance),
                    requested: amount,
                });
            }
            Self::move_balance(&mut state, self.id, from, to, amount)?;
            state
                .allowances
                .insert((from, spender), allowance - amount.get());
            return Ok(());
        }
        Self::move_balance(&mut state, self.id, from, to, amount)
    }

    fn balance_of(&self, account: AccountId) -> Amount {
        let state = self.lock();
        Amount::new(state.balances.get(&account).copied().unwrap_or(0))
    }

    fn approve(
        &self,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let mut state = self.lock();
        state.allowances.insert((owner, spender), amount.get());
        Ok(())
    }

    fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        let state = self.lock();
        Amount::new(state.allowances.get(&(owner, spender)).copied().unwrap_or(0))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([0xA1; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([0xB0; 32])
    }

    fn carol() -> AccountId {
        AccountId::from_bytes([0xCA; 32])
    }

    fn funded_ledger() -> InMemoryLedger {
        let ledger = InMemoryLedger::new(asset());
        ledger.mint(alice(), Amount::new(1_000));
        ledger
    }

    // -- mint & balance_of ----------------------------------------------------

    #[test]
    fn mint_credits_balance() {
        let ledger = funded_ledger();
        assert_eq!(ledger.balance_of(alice()), Amount::new(1_000));
        assert_eq!(ledger.balance_of(bob()), Amount::ZERO);
    }

    #[test]
    fn mint_accumulates() {
        let ledger = funded_ledger();
        ledger.mint(alice(), Amount::new(500));
        assert_eq!(ledger.balance_of(alice()), Amount::new(1_500));
    }

    #[test]
    fn mint_saturates_at_max() {
        let ledger = funded_ledger();
        ledger.mint(alice(), Amount::MAX);
        assert_eq!(ledger.balance_of(alice()), Amount::MAX);
    }

    // -- transfer -------------------------------------------------------------

    #[test]
    fn transfer_moves_funds() {
        let ledger = funded_ledger();
        let Ok(()) = ledger.transfer(alice(), bob(), Amount::new(400)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(alice()), Amount::new(600));
        assert_eq!(ledger.balance_of(bob()), Amount::new(400));
    }

    #[test]
    fn transfer_insufficient_balance_refused() {
        let ledger = funded_ledger();
        let result = ledger.transfer(alice(), bob(), Amount::new(1_001));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance { .. })
        ));
        // Nothing moved.
        assert_eq!(ledger.balance_of(alice()), Amount::new(1_000));
        assert_eq!(ledger.balance_of(bob()), Amount::ZERO);
    }

    #[test]
    fn transfer_zero_always_succeeds() {
        let ledger = InMemoryLedger::new(asset());
        let Ok(()) = ledger.transfer(alice(), bob(), Amount::ZERO) else {
            panic!("expected Ok");
        };
    }

    // -- approve / allowance / transfer_from ----------------------------------

    #[test]
    fn approve_sets_allowance() {
        let ledger = funded_ledger();
        let Ok(()) = ledger.approve(alice(), carol(), Amount::new(300)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.allowance(alice(), carol()), Amount::new(300));
    }

    #[test]
    fn approve_replaces_previous_grant() {
        let ledger = funded_ledger();
        let Ok(()) = ledger.approve(alice(), carol(), Amount::new(300)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.approve(alice(), carol(), Amount::new(50)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.allowance(alice(), carol()), Amount::new(50));
    }

    #[test]
    fn transfer_from_debits_allowance() {
        let ledger = funded_ledger();
        let Ok(()) = ledger.approve(alice(), carol(), Amount::new(300)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.transfer_from(carol(), alice(), bob(), Amount::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(bob()), Amount::new(200));
        assert_eq!(ledger.allowance(alice(), carol()), Amount::new(100));
    }

    #[test]
    fn transfer_from_without_allowance_refused() {
        let ledger = funded_ledger();
        let result = ledger.transfer_from(carol(), alice(), bob(), Amount::new(1));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientAllowance { .. })
        ));
        assert_eq!(ledger.balance_of(alice()), Amount::new(1_000));
    }

    #[test]
    fn transfer_from_insufficient_balance_keeps_allowance() {
        let ledger = InMemoryLedger::new(asset());
        ledger.mint(alice(), Amount::new(10));
        let Ok(()) = ledger.approve(alice(), carol(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        let result = ledger.transfer_from(carol(), alice(), bob(), Amount::new(50));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance { .. })
        ));
        // The failed movement must not burn allowance.
        assert_eq!(ledger.allowance(alice(), carol()), Amount::new(100));
    }

    #[test]
    fn owner_spending_own_funds_needs_no_allowance() {
        let ledger = funded_ledger();
        let Ok(()) = ledger.transfer_from(alice(), alice(), bob(), Amount::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(bob()), Amount::new(10));
    }

    // -- id -------------------------------------------------------------------

    #[test]
    fn id_reports_configured_asset() {
        let ledger = InMemoryLedger::new(asset());
        assert_eq!(ledger.id(), asset());
    }
}
