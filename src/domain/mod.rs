//! Fundamental domain value types used throughout the pool engine.
//!
//! All types are newtypes with validated constructors: amounts carry
//! checked arithmetic with explicit rounding, identities are fixed-size
//! opaque byte strings, and prices are strictly positive by construction.

mod account_id;
mod amount;
mod asset_id;
mod rounding;
mod spot_price;
mod swap_outcome;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use rounding::Rounding;
pub use spot_price::SpotPrice;
pub use swap_outcome::SwapOutcome;
