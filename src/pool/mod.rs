//! The pool engine: reserve accounting, pricing, and the guards around
//! every state transition.

mod engine;

#[cfg(test)]
mod proptest_properties;

pub use engine::Pool;
