//! Convenience re-exports for common types and traits.
//!
//! A single import brings the whole public surface into scope:
//!
//! ```rust
//! use xyk_pool::prelude::*;
//! ```

pub use crate::domain::{AccountId, Amount, AssetId, Rounding, SpotPrice, SwapOutcome};
pub use crate::error::{ErrorKind, PoolError, Result};
pub use crate::event::PoolEvent;
pub use crate::ledger::{AssetLedger, InMemoryLedger, LedgerError};
pub use crate::pool::Pool;
