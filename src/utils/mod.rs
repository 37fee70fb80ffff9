//! Utility functions for pricewalk.
//!
//! This module is organized into focused submodules:
//!
//! - [`conversion`] - Type conversions (U256, BigInt, BigDecimal) and safe division
//! - [`price`] - sqrtPriceX96 decoding into token prices

mod conversion;
mod price;

// ============================================
// Re-exports
// ============================================

// Conversion utilities
pub use conversion::{
    exponent_to_big_decimal, parse_sqrt_price_x96, safe_div, u256_to_big_decimal, u256_to_big_int,
};

// Price conversion utilities
pub use price::{sqrt_price_x96_to_prices, sqrt_price_x96_to_token_prices};
