//! Price conversion utilities for concentrated-liquidity pools.
//!
//! Decodes the Q64.96 `sqrtPriceX96` stored on a pool into the pair of
//! human-scaled exchange rates. All arithmetic is exact decimal, never f64.

use alloy::primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use once_cell::sync::Lazy;

use super::conversion::{exponent_to_big_decimal, safe_div, u256_to_big_int};
use crate::db::models::Token;

// ============================================
// Constants
// ============================================

/// Constant: 2^192 (square of the Q64.96 scaling factor)
/// Value: 6277101735386680763835789423207666416102355444464034512896
static Q192: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(BigInt::from(1u8) << 192u32));

// ============================================
// sqrtPriceX96 to Price Conversion
// ============================================

/// Convert sqrtPriceX96 into `(token0_price, token1_price)`.
///
/// - `token1_price` = token1 per 1 token0 = sqrtPriceX96² / 2^192 * 10^decimals0 / 10^decimals1
/// - `token0_price` = token0 per 1 token1 = 1 / token1_price (zero when token1_price is zero)
///
/// # Arguments
/// * `sqrt_price_x96` - The raw uint160 sqrtPriceX96 value
/// * `token0_decimals` - Decimal places of token0
/// * `token1_decimals` - Decimal places of token1
pub fn sqrt_price_x96_to_prices(
    sqrt_price_x96: U256,
    token0_decimals: u8,
    token1_decimals: u8,
) -> (BigDecimal, BigDecimal) {
    let sqrt_price = u256_to_big_int(sqrt_price_x96);
    let num =
        BigDecimal::from(&sqrt_price * &sqrt_price) * exponent_to_big_decimal(token0_decimals);
    let denom = &*Q192 * exponent_to_big_decimal(token1_decimals);

    // single division keeps the rounding to one step
    let token1_price = num / denom;
    let token0_price = safe_div(&BigDecimal::from(1), &token1_price);

    (token0_price, token1_price)
}

/// Convert sqrtPriceX96 into `(token0_price, token1_price)` for a pool's token pair.
pub fn sqrt_price_x96_to_token_prices(
    sqrt_price_x96: U256,
    token0: &Token,
    token1: &Token,
) -> (BigDecimal, BigDecimal) {
    sqrt_price_x96_to_prices(sqrt_price_x96, token0.decimals, token1.decimals)
}
