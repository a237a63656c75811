//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Product non-decrease** — the reserve product never shrinks
//!    across a swap, for any positive reserves and input.
//! 2. **Exact pricing** — the committed output equals the floor formula.
//! 3. **Liquidity exactness** — add/remove move reserves by exactly the
//!    requested amounts, mirrored on the ledgers.
//! 4. **Price inverse consistency** — the two spot prices multiply to
//!    `SCALE²` within floor-rounding tolerance.
//! 5. **Failure isolation** — rejected operations leave state untouched.

#![allow(clippy::panic)]

use std::sync::Arc;

use proptest::prelude::*;

use crate::domain::{AccountId, Amount, AssetId, SpotPrice};
use crate::ledger::{AssetLedger, InMemoryLedger};
use crate::pool::Pool;

// Keep reserves and inputs small enough that u128 products and the
// 10^18 price scaling never overflow inside a property run.
const MAX_RESERVE: u128 = 1_000_000_000_000;
const MAX_INPUT: u128 = 1_000_000_000;

// Enough to fund every seeding and input without ever saturating a
// ledger balance during a run.
const FUNDING: u128 = 10 * MAX_RESERVE;

fn owner() -> AccountId {
    AccountId::from_bytes([0xAA; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([0xBB; 32])
}

fn custody() -> AccountId {
    AccountId::from_bytes([0xCC; 32])
}

/// Pool seeded with the given reserves; owner and trader fully funded.
fn seeded_pool(reserve_a: u128, reserve_b: u128) -> Pool {
    let asset_a = Arc::new(InMemoryLedger::new(AssetId::from_bytes([1u8; 32])));
    let asset_b = Arc::new(InMemoryLedger::new(AssetId::from_bytes([2u8; 32])));
    for account in [owner(), trader()] {
        asset_a.mint(account, Amount::new(FUNDING));
        asset_b.mint(account, Amount::new(FUNDING));
        let Ok(()) = asset_a.approve(account, custody(), Amount::new(FUNDING)) else {
            panic!("approve a");
        };
        let Ok(()) = asset_b.approve(account, custody(), Amount::new(FUNDING)) else {
            panic!("approve b");
        };
    }
    let Ok(pool) = Pool::new(asset_a, asset_b, owner(), custody()) else {
        panic!("valid pool");
    };
    let Ok(()) = pool.add_liquidity(owner(), Amount::new(reserve_a), Amount::new(reserve_b))
    else {
        panic!("seed liquidity");
    };
    pool
}

proptest! {
    // -- 1. product non-decrease ---------------------------------------------

    #[test]
    fn swap_product_never_decreases(
        ra in 1..MAX_RESERVE,
        rb in 1..MAX_RESERVE,
        dx in 1..MAX_INPUT,
    ) {
        let pool = seeded_pool(ra, rb);
        // Bounds keep both products far below the u128 range.
        let before = ra * rb;
        let Ok(_) = pool.swap_a_for_b(trader(), Amount::new(dx)) else {
            return Err(TestCaseError::fail("swap failed"));
        };
        let (new_a, new_b) = pool.reserves();
        prop_assert!(new_a.get() * new_b.get() >= before);
    }

    // -- 2. exact pricing ----------------------------------------------------

    #[test]
    fn swap_output_matches_floor_formula(
        ra in 1..MAX_RESERVE,
        rb in 1..MAX_RESERVE,
        dx in 1..MAX_INPUT,
    ) {
        let pool = seeded_pool(ra, rb);
        let Ok(outcome) = pool.swap_a_for_b(trader(), Amount::new(dx)) else {
            return Err(TestCaseError::fail("swap failed"));
        };
        let expected = rb * dx / (ra + dx);
        prop_assert_eq!(outcome.amount_out().get(), expected);
        let (new_a, new_b) = pool.reserves();
        prop_assert_eq!(new_a.get(), ra + dx);
        prop_assert_eq!(new_b.get(), rb - expected);
    }

    // -- 3. liquidity exactness ----------------------------------------------

    #[test]
    fn add_then_remove_is_exact(
        ra in 1..MAX_RESERVE,
        rb in 1..MAX_RESERVE,
        da in 1..MAX_INPUT,
        db in 1..MAX_INPUT,
    ) {
        let pool = seeded_pool(ra, rb);
        let Ok(()) = pool.add_liquidity(owner(), Amount::new(da), Amount::new(db)) else {
            return Err(TestCaseError::fail("add failed"));
        };
        prop_assert_eq!(pool.reserves(), (Amount::new(ra + da), Amount::new(rb + db)));
        let custody_a = pool.asset_a().balance_of(custody());
        prop_assert_eq!(custody_a.get(), ra + da);

        let Ok(()) = pool.remove_liquidity(owner(), Amount::new(da), Amount::new(db)) else {
            return Err(TestCaseError::fail("remove failed"));
        };
        prop_assert_eq!(pool.reserves(), (Amount::new(ra), Amount::new(rb)));
    }

    // -- 4. price inverse consistency ----------------------------------------

    #[test]
    fn spot_prices_are_multiplicative_inverses(
        ra in 1..MAX_RESERVE,
        rb in 1..MAX_RESERVE,
    ) {
        let pool = seeded_pool(ra, rb);
        let Ok(price_a) = pool.spot_price(AssetId::from_bytes([1u8; 32])) else {
            return Err(TestCaseError::fail("price a failed"));
        };
        let Ok(price_b) = pool.spot_price(AssetId::from_bytes([2u8; 32])) else {
            return Err(TestCaseError::fail("price b failed"));
        };
        let target = SpotPrice::SCALE * SpotPrice::SCALE;
        let Some(product) = price_a.get().checked_mul(price_b.get()) else {
            return Err(TestCaseError::fail("price product overflow"));
        };
        // Each floor loses strictly less than one unit:
        // (pa + 1)(pb + 1) > SCALE², so pa·pb > SCALE² − pa − pb − 1.
        prop_assert!(product <= target);
        prop_assert!(product > target - price_a.get() - price_b.get() - 1);
    }

    // -- 5. failure isolation ------------------------------------------------

    #[test]
    fn over_withdrawal_leaves_reserves_unchanged(
        ra in 1..MAX_RESERVE,
        rb in 1..MAX_RESERVE,
        excess in 1..MAX_INPUT,
    ) {
        let pool = seeded_pool(ra, rb);
        let result = pool.remove_liquidity(
            owner(),
            Amount::new(ra + excess),
            Amount::new(rb + excess),
        );
        prop_assert!(result.is_err());
        prop_assert_eq!(pool.reserves(), (Amount::new(ra), Amount::new(rb)));
        prop_assert_eq!(pool.events().len(), 1); // seeding only
    }
}
