//! Checked constant-product arithmetic.

mod constant_product;

pub use constant_product::{product, spot_price, swap_output};
