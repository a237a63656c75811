//! Constant-product pool engine.
//!
//! # State transition discipline
//!
//! Every mutating operation runs the same sequence:
//!
//! 1. **Enter** — claim the in-flight flag; a nested or concurrent
//!    mutating call fails with `Reentrant` instead of interleaving.
//! 2. **Check** — validate the caller and the request against a
//!    consistent snapshot of both reserves.
//! 3. **Stage** — compute the post-operation reserves with checked
//!    arithmetic; for swaps, verify the constant-product invariant on
//!    the staged values.
//! 4. **Interact** — move assets through the ledgers. If the second leg
//!    of a pair fails after the first succeeded, a compensating refund
//!    of the first leg is attempted before the error is reported.
//! 5. **Commit** — apply the staged reserves and append the event
//!    record, only once every transfer has succeeded.
//!
//! Reserves therefore never drift from committed custody: a failed
//! operation leaves the pool state byte-identical to before the call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{AccountId, Amount, AssetId, SpotPrice, SwapOutcome};
use crate::error::{PoolError, Result};
use crate::event::PoolEvent;
use crate::ledger::AssetLedger;
use crate::math;

/// Which asset a swap pays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    AForB,
    BForA,
}

/// Mutable pool state, guarded as one unit so concurrent readers always
/// observe both reserves from the same instant.
#[derive(Debug)]
struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    events: Vec<PoolEvent>,
}

/// Releases the in-flight flag on every exit path.
struct EntryGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for EntryGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// An automated market-making pool over two fungible assets.
///
/// The pool owns two reserve counters and prices swaps purely from
/// their ratio under the constant-product rule. Asset custody lives on
/// the two [`AssetLedger`] collaborators; the pool's custody account on
/// both ledgers is the `account` identity fixed at construction.
///
/// Liquidity provision and withdrawal are restricted to the single
/// `owner`; swaps and price queries are open to any caller. Caller
/// identity is always passed explicitly — the engine holds no ambient
/// authority.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use xyk_pool::domain::{AccountId, Amount, AssetId};
/// use xyk_pool::ledger::{AssetLedger, InMemoryLedger};
/// use xyk_pool::pool::Pool;
///
/// let asset_a = Arc::new(InMemoryLedger::new(AssetId::from_bytes([1u8; 32])));
/// let asset_b = Arc::new(InMemoryLedger::new(AssetId::from_bytes([2u8; 32])));
/// let owner = AccountId::from_bytes([0xAA; 32]);
/// let custody = AccountId::from_bytes([0xCC; 32]);
///
/// asset_a.mint(owner, Amount::new(1_000));
/// asset_b.mint(owner, Amount::new(1_000));
/// asset_a.approve(owner, custody, Amount::new(1_000)).expect("approve");
/// asset_b.approve(owner, custody, Amount::new(1_000)).expect("approve");
///
/// let pool = Pool::new(asset_a.clone(), asset_b.clone(), owner, custody).expect("pool");
/// pool.add_liquidity(owner, Amount::new(500), Amount::new(500)).expect("add");
///
/// let outcome = pool.swap_a_for_b(owner, Amount::new(100)).expect("swap");
/// assert_eq!(outcome.amount_out(), Amount::new(83));
/// assert_eq!(pool.reserves(), (Amount::new(600), Amount::new(417)));
/// ```
pub struct Pool {
    asset_a: Arc<dyn AssetLedger>,
    asset_b: Arc<dyn AssetLedger>,
    owner: AccountId,
    account: AccountId,
    state: Mutex<PoolState>,
    in_flight: AtomicBool,
}

impl Pool {
    /// Creates an empty pool over two distinct assets.
    ///
    /// `owner` is the sole principal allowed to provision or withdraw
    /// liquidity; `account` is the pool's custody identity on both
    /// ledgers (and the spender callers must approve for deposits).
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAssetPair`] if the two ledgers
    /// report the same asset identity or either identity is null.
    pub fn new(
        asset_a: Arc<dyn AssetLedger>,
        asset_b: Arc<dyn AssetLedger>,
        owner: AccountId,
        account: AccountId,
    ) -> Result<Self> {
        let id_a = asset_a.id();
        let id_b = asset_b.id();
        if id_a == id_b || id_a.is_null() || id_b.is_null() {
            return Err(PoolError::InvalidAssetPair {
                asset_a: id_a,
                asset_b: id_b,
            });
        }
        Ok(Self {
            asset_a,
            asset_b,
            owner,
            account,
            state: Mutex::new(PoolState {
                reserve_a: Amount::ZERO,
                reserve_b: Amount::ZERO,
                events: Vec::new(),
            }),
            in_flight: AtomicBool::new(false),
        })
    }

    // -- accessors ----------------------------------------------------------

    /// Returns the current asset-A reserve.
    #[must_use]
    pub fn reserve_a(&self) -> Amount {
        self.state().reserve_a
    }

    /// Returns the current asset-B reserve.
    #[must_use]
    pub fn reserve_b(&self) -> Amount {
        self.state().reserve_b
    }

    /// Returns both reserves from the same consistent snapshot.
    #[must_use]
    pub fn reserves(&self) -> (Amount, Amount) {
        let state = self.state();
        (state.reserve_a, state.reserve_b)
    }

    /// Returns the ledger handle for asset A.
    #[must_use]
    pub fn asset_a(&self) -> &Arc<dyn AssetLedger> {
        &self.asset_a
    }

    /// Returns the ledger handle for asset B.
    #[must_use]
    pub fn asset_b(&self) -> &Arc<dyn AssetLedger> {
        &self.asset_b
    }

    /// Returns the owner identity.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the pool's custody account identity.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns a copy of the event log, in completion order.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        self.state().events.clone()
    }

    /// Drains and returns the event log, in completion order.
    pub fn take_events(&self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.state().events)
    }

    // -- liquidity ----------------------------------------------------------

    /// Provisions paired liquidity from the owner's accounts.
    ///
    /// Pulls `amount_a` of asset A and `amount_b` of asset B from
    /// `caller` into pool custody (via `transfer_from`; the caller must
    /// have approved the pool's [`account`](Self::account) as spender),
    /// then commits the reserve increase and records
    /// [`PoolEvent::LiquidityAdded`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::Reentrant`] if another mutating call is in flight.
    /// - [`PoolError::Unauthorized`] if `caller` is not the owner.
    /// - [`PoolError::InvalidLiquidityAmounts`] unless both amounts are
    ///   strictly positive.
    /// - [`PoolError::Overflow`] if a reserve would exceed `u128`.
    /// - [`PoolError::TransferFailed`] if either ledger refuses its
    ///   leg; the reserves are left untouched and a succeeded first leg
    ///   is refunded.
    pub fn add_liquidity(&self, caller: AccountId, amount_a: Amount, amount_b: Amount) -> Result<()> {
        let _guard = self.enter()?;
        self.require_owner(caller)?;
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(PoolError::InvalidLiquidityAmounts { amount_a, amount_b });
        }

        let (reserve_a, reserve_b) = self.reserves();
        let staged_a = reserve_a
            .checked_add(&amount_a)
            .ok_or(PoolError::Overflow("reserve_a overflow on add"))?;
        let staged_b = reserve_b
            .checked_add(&amount_b)
            .ok_or(PoolError::Overflow("reserve_b overflow on add"))?;
        log::debug!("add_liquidity staged reserves ({staged_a}, {staged_b})");

        self.pull(&self.asset_a, caller, amount_a)?;
        if let Err(err) = self.pull(&self.asset_b, caller, amount_b) {
            self.refund(&self.asset_a, caller, amount_a);
            return Err(err);
        }

        self.commit(staged_a, staged_b, PoolEvent::LiquidityAdded {
            provider: caller,
            amount_a,
            amount_b,
        });
        Ok(())
    }

    /// Withdraws paired liquidity to the owner's accounts.
    ///
    /// The two amounts are independent — no proportionality to the
    /// current ratio is enforced, so an unbalanced withdrawal may move
    /// the pool's price. Withdrawing both reserves in full is allowed;
    /// a withdrawal that would zero exactly one reserve is rejected.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Reentrant`] if another mutating call is in flight.
    /// - [`PoolError::Unauthorized`] if `caller` is not the owner.
    /// - [`PoolError::InsufficientReserves`] if either amount exceeds
    ///   its reserve.
    /// - [`PoolError::OneSidedDrain`] if the result would leave exactly
    ///   one reserve at zero.
    /// - [`PoolError::TransferFailed`] if either ledger refuses its
    ///   leg; the reserves are left untouched and a succeeded first leg
    ///   is reclaimed.
    pub fn remove_liquidity(
        &self,
        caller: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<()> {
        let _guard = self.enter()?;
        self.require_owner(caller)?;

        let (reserve_a, reserve_b) = self.reserves();
        if amount_a > reserve_a || amount_b > reserve_b {
            return Err(PoolError::InsufficientReserves {
                requested_a: amount_a,
                requested_b: amount_b,
                reserve_a,
                reserve_b,
            });
        }
        let staged_a = reserve_a
            .checked_sub(&amount_a)
            .ok_or(PoolError::Overflow("reserve_a underflow on remove"))?;
        let staged_b = reserve_b
            .checked_sub(&amount_b)
            .ok_or(PoolError::Overflow("reserve_b underflow on remove"))?;
        if staged_a.is_zero() != staged_b.is_zero() {
            return Err(PoolError::OneSidedDrain {
                reserve_a: staged_a,
                reserve_b: staged_b,
            });
        }
        log::debug!("remove_liquidity staged reserves ({staged_a}, {staged_b})");

        self.push(&self.asset_a, caller, amount_a)?;
        if let Err(err) = self.push(&self.asset_b, caller, amount_b) {
            self.reclaim(&self.asset_a, caller, amount_a);
            return Err(err);
        }

        self.commit(staged_a, staged_b, PoolEvent::LiquidityRemoved {
            provider: caller,
            amount_a,
            amount_b,
        });
        Ok(())
    }

    // -- swaps --------------------------------------------------------------

    /// Swaps `amount_in` of asset A for asset B.
    ///
    /// See [`swap_b_for_a`](Self::swap_b_for_a) for the mirror
    /// operation; both share the same pricing, staging, and commit
    /// path.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Reentrant`] if another mutating call is in flight.
    /// - [`PoolError::InvalidSwapAmount`] if `amount_in` is zero.
    /// - [`PoolError::NoLiquidity`] unless both reserves are strictly
    ///   positive.
    /// - [`PoolError::Overflow`] on arithmetic exhaustion.
    /// - [`PoolError::ProductInvariantViolated`] if the staged reserves
    ///   would decrease the product (a defect, not a user error).
    /// - [`PoolError::TransferFailed`] if either ledger refuses its
    ///   leg; a succeeded input pull is refunded.
    pub fn swap_a_for_b(&self, caller: AccountId, amount_in: Amount) -> Result<SwapOutcome> {
        self.swap(caller, amount_in, Direction::AForB)
    }

    /// Swaps `amount_in` of asset B for asset A.
    ///
    /// # Errors
    ///
    /// Same as [`swap_a_for_b`](Self::swap_a_for_b).
    pub fn swap_b_for_a(&self, caller: AccountId, amount_in: Amount) -> Result<SwapOutcome> {
        self.swap(caller, amount_in, Direction::BForA)
    }

    fn swap(&self, caller: AccountId, amount_in: Amount, direction: Direction) -> Result<SwapOutcome> {
        let _guard = self.enter()?;
        if amount_in.is_zero() {
            return Err(PoolError::InvalidSwapAmount { amount_in });
        }

        // Pre-trade snapshot; all pricing reads from these cached values.
        let (reserve_a, reserve_b) = self.reserves();
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(PoolError::NoLiquidity);
        }

        let (ledger_in, ledger_out, reserve_in, reserve_out) = match direction {
            Direction::AForB => (&self.asset_a, &self.asset_b, reserve_a, reserve_b),
            Direction::BForA => (&self.asset_b, &self.asset_a, reserve_b, reserve_a),
        };

        let amount_out = math::swap_output(reserve_in, reserve_out, amount_in)?;
        let new_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("input reserve overflow on swap"))?;
        let new_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("output reserve underflow on swap"))?;
        let (staged_a, staged_b) = match direction {
            Direction::AForB => (new_in, new_out),
            Direction::BForA => (new_out, new_in),
        };

        let before = math::product(reserve_a, reserve_b)?;
        let after = math::product(staged_a, staged_b)?;
        if after < before {
            return Err(PoolError::ProductInvariantViolated { before, after });
        }
        log::debug!("swap staged reserves ({staged_a}, {staged_b}), product {before} -> {after}");

        self.pull(ledger_in, caller, amount_in)?;
        if let Err(err) = self.push(ledger_out, caller, amount_out) {
            self.refund(ledger_in, caller, amount_in);
            return Err(err);
        }

        let asset_in = ledger_in.id();
        let asset_out = ledger_out.id();
        self.commit(staged_a, staged_b, PoolEvent::TokensSwapped {
            user: caller,
            asset_in,
            amount_in,
            asset_out,
            amount_out,
        });
        Ok(SwapOutcome::new(asset_in, amount_in, asset_out, amount_out))
    }

    // -- pricing ------------------------------------------------------------

    /// Returns the spot price of `asset` denominated in the other
    /// asset, scaled by [`SpotPrice::SCALE`].
    ///
    /// Read-only: takes no reentrancy lock and may run concurrently
    /// with a mutating operation; both reserves are read from one
    /// consistent snapshot.
    ///
    /// # Errors
    ///
    /// - [`PoolError::NoLiquidity`] unless both reserves are strictly
    ///   positive.
    /// - [`PoolError::InvalidToken`] if `asset` is neither pool asset.
    /// - [`PoolError::ZeroSpotPrice`] if the price floors to zero (a
    ///   defect given positive reserves; classified as a fault).
    pub fn spot_price(&self, asset: AssetId) -> Result<SpotPrice> {
        let (reserve_a, reserve_b) = self.reserves();
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(PoolError::NoLiquidity);
        }
        if asset == self.asset_a.id() {
            math::spot_price(reserve_a, reserve_b)
        } else if asset == self.asset_b.id() {
            math::spot_price(reserve_b, reserve_a)
        } else {
            Err(PoolError::InvalidToken { asset })
        }
    }

    // -- internals ----------------------------------------------------------

    /// Recovers the guard even if a holder panicked mid-update.
    fn state(&self) -> MutexGuard<'_, PoolState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Claims the in-flight flag for the duration of a mutating call.
    fn enter(&self) -> Result<EntryGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map_err(|_| PoolError::Reentrant)?;
        Ok(EntryGuard {
            flag: &self.in_flight,
        })
    }

    fn require_owner(&self, caller: AccountId) -> Result<()> {
        if caller == self.owner {
            Ok(())
        } else {
            Err(PoolError::Unauthorized { caller })
        }
    }

    /// Pulls `amount` from `from` into pool custody.
    fn pull(&self, ledger: &Arc<dyn AssetLedger>, from: AccountId, amount: Amount) -> Result<()> {
        ledger
            .transfer_from(self.account, from, self.account, amount)
            .map_err(|_| PoolError::TransferFailed {
                asset: ledger.id(),
                from,
                to: self.account,
                amount,
            })
    }

    /// Pushes `amount` from pool custody to `to`.
    fn push(&self, ledger: &Arc<dyn AssetLedger>, to: AccountId, amount: Amount) -> Result<()> {
        ledger
            .transfer(self.account, to, amount)
            .map_err(|_| PoolError::TransferFailed {
                asset: ledger.id(),
                from: self.account,
                to,
                amount,
            })
    }

    /// Best-effort return of a pulled deposit after a later leg failed.
    fn refund(&self, ledger: &Arc<dyn AssetLedger>, to: AccountId, amount: Amount) {
        if ledger.transfer(self.account, to, amount).is_err() {
            log::warn!(
                "compensating refund of {amount} of asset {} to {to} failed",
                ledger.id()
            );
        }
    }

    /// Best-effort recovery of a pushed withdrawal after a later leg failed.
    fn reclaim(&self, ledger: &Arc<dyn AssetLedger>, from: AccountId, amount: Amount) {
        if ledger.transfer(from, self.account, amount).is_err() {
            log::warn!(
                "compensating reclaim of {amount} of asset {} from {from} failed",
                ledger.id()
            );
        }
    }

    /// Applies staged reserves and records the event, exactly once.
    fn commit(&self, reserve_a: Amount, reserve_b: Amount, event: PoolEvent) {
        let mut state = self.state();
        state.reserve_a = reserve_a;
        state.reserve_b = reserve_b;
        log::info!("{event}");
        state.events.push(event);
    }
}

impl core::fmt::Debug for Pool {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (reserve_a, reserve_b) = self.reserves();
        f.debug_struct("Pool")
            .field("asset_a", &self.asset_a.id())
            .field("asset_b", &self.asset_b.id())
            .field("owner", &self.owner)
            .field("account", &self.account)
            .field("reserve_a", &reserve_a)
            .field("reserve_b", &reserve_b)
            .finish()
    }
}
