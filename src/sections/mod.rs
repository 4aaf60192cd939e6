//! Secret scoring sections
//!
//! Each section scores a specific aspect of a secret and returns the
//! points it contributes to the additive 0-9 scale.

mod charset;
mod length;

pub use charset::{SYMBOLS, charset_points};
pub use length::length_points;
