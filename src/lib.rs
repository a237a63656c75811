//! # xyk-pool
//!
//! A constant-product (`x · y = k`) exchange pool engine: two asset
//! reserves, swaps priced purely from their ratio, and a single
//! liquidity provider — with the guards a real deployment needs around
//! every state transition.
//!
//! The engine does **not** do balance accounting itself. Asset custody
//! lives behind the [`AssetLedger`](ledger::AssetLedger) capability;
//! the pool validates a request, stages the reserve change, moves value
//! through the ledgers, and commits only when every movement succeeded.
//! Failed operations leave the pool exactly as they found it.
//!
//! # Guarantees
//!
//! - **Constant-product invariant**: for every swap, the reserve
//!   product after commit is at least the product before. Output
//!   amounts truncate toward zero, so rounding always favours the pool.
//! - **Atomic transitions**: reserve changes are staged and committed
//!   only after all ledger transfers succeed; a failed second leg
//!   triggers a compensating refund of the first.
//! - **Reentrancy rejection**: a mutating call issued while another is
//!   in flight fails immediately with
//!   [`PoolError::Reentrant`](error::PoolError::Reentrant).
//! - **Structured errors**: every failure carries typed fields and a
//!   category ([`ErrorKind`](error::ErrorKind)); internal-consistency
//!   faults are unmistakably distinct from validation errors.
//! - **Event records**: exactly one
//!   [`PoolEvent`](event::PoolEvent) per successful mutating
//!   operation, in completion order, never on failure.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use xyk_pool::prelude::*;
//!
//! // Two independent asset ledgers.
//! let asset_a = Arc::new(InMemoryLedger::new(AssetId::from_bytes([1u8; 32])));
//! let asset_b = Arc::new(InMemoryLedger::new(AssetId::from_bytes([2u8; 32])));
//!
//! let owner = AccountId::from_bytes([0xAA; 32]);
//! let custody = AccountId::from_bytes([0xCC; 32]);
//!
//! // Fund the owner and let the pool's custody account pull deposits.
//! asset_a.mint(owner, Amount::new(1_000));
//! asset_b.mint(owner, Amount::new(1_000));
//! asset_a.approve(owner, custody, Amount::new(1_000)).expect("approve");
//! asset_b.approve(owner, custody, Amount::new(1_000)).expect("approve");
//!
//! let pool = Pool::new(asset_a.clone(), asset_b.clone(), owner, custody).expect("pool");
//! pool.add_liquidity(owner, Amount::new(500), Amount::new(500)).expect("add");
//!
//! // Swap 100 A for B: floor(500 * 100 / 600) = 83.
//! let outcome = pool.swap_a_for_b(owner, Amount::new(100)).expect("swap");
//! assert_eq!(outcome.amount_out(), Amount::new(83));
//!
//! // The spot price now reflects the moved ratio.
//! let price = pool.spot_price(AssetId::from_bytes([1u8; 32])).expect("price");
//! assert!(price.get() < SpotPrice::SCALE);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AssetId`](domain::AssetId), [`SpotPrice`](domain::SpotPrice), … |
//! | [`ledger`] | The consumed [`AssetLedger`](ledger::AssetLedger) capability and an in-memory reference implementation |
//! | [`pool`]   | The [`Pool`](pool::Pool) engine: liquidity, swaps, pricing, guards |
//! | [`math`]   | Checked constant-product formulas |
//! | [`event`]  | Append-only [`PoolEvent`](event::PoolEvent) records |
//! | [`error`]  | [`PoolError`](error::PoolError) with structured fields and categories |
//! | [`prelude`] | One-stop re-exports |

pub mod domain;
pub mod error;
pub mod event;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
