//! Type conversion and safe arithmetic utilities.
//!
//! Functions for converting between numeric types (U256, BigInt, BigDecimal)
//! and the zero-safe division used everywhere amounts may legitimately be zero.

use alloy::primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use once_cell::sync::Lazy;
use std::str::FromStr;

// ============================================
// Safe Arithmetic
// ============================================

/// Divide `amount0` by `amount1`, returning zero when the divisor is zero.
///
/// Never panics. Zero denominators are expected (empty pools, unpriced tokens,
/// a bundle that has not been priced yet) and always collapse to zero.
pub fn safe_div(amount0: &BigDecimal, amount1: &BigDecimal) -> BigDecimal {
    if amount1.is_zero() {
        BigDecimal::zero()
    } else {
        amount0 / amount1
    }
}

/// Compute 10^decimals as BigDecimal.
///
/// Used to scale raw token amounts into human units.
pub fn exponent_to_big_decimal(decimals: u8) -> BigDecimal {
    big_pow10(decimals)
}

// ============================================
// U256 Conversions
// ============================================

/// Convert U256 to BigInt without going through strings.
pub fn u256_to_big_int(value: U256) -> BigInt {
    let bytes: [u8; 32] = value.to_le_bytes();
    BigInt::from_bytes_le(Sign::Plus, &bytes)
}

/// Convert U256 to BigDecimal (no decimal adjustment).
pub fn u256_to_big_decimal(value: U256) -> BigDecimal {
    BigDecimal::from(u256_to_big_int(value))
}

/// Parse a raw sqrtPriceX96 value as stored on a pool.
///
/// Accepts decimal strings and 0x-prefixed hex strings. Values wider than
/// uint160 are rejected since no pool can report them.
///
/// # Returns
/// * `Some(U256)` if the string is a valid uint160, `None` otherwise
pub fn parse_sqrt_price_x96(value: &str) -> Option<U256> {
    let parsed = U256::from_str(value.trim()).ok()?;
    if parsed.bit_len() > 160 {
        return None;
    }
    Some(parsed)
}

// ============================================
// Internal Helpers
// ============================================

static POW10_CACHE: Lazy<[BigDecimal; 25]> =
    Lazy::new(|| std::array::from_fn(|i| BigDecimal::from(BigInt::from(10u32).pow(i as u32))));

/// Compute 10^exp as BigDecimal.
pub(crate) fn big_pow10(exp: u8) -> BigDecimal {
    if (exp as usize) < POW10_CACHE.len() {
        POW10_CACHE[exp as usize].clone()
    } else {
        BigDecimal::from(BigInt::from(10u32).pow(exp as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_div_by_zero_is_zero() {
        let one = BigDecimal::from(1);
        assert_eq!(safe_div(&one, &BigDecimal::zero()), BigDecimal::zero());
    }

    #[test]
    fn test_safe_div_regular() {
        let one = BigDecimal::from(1);
        let two = BigDecimal::from(2);
        assert_eq!(safe_div(&one, &two), BigDecimal::from_str("0.5").unwrap());
    }

    #[test]
    fn test_exponent_to_big_decimal() {
        assert_eq!(exponent_to_big_decimal(0), BigDecimal::from(1));
        assert_eq!(exponent_to_big_decimal(6), BigDecimal::from(1_000_000));
        assert_eq!(
            exponent_to_big_decimal(30),
            BigDecimal::from_str("1000000000000000000000000000000").unwrap()
        );
    }

    #[test]
    fn test_u256_to_big_decimal() {
        let value = U256::from(1_000_000_000_000_000_000u128);
        assert_eq!(
            u256_to_big_decimal(value),
            BigDecimal::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_parse_sqrt_price_x96_decimal_and_hex() {
        assert_eq!(
            parse_sqrt_price_x96("79228162514264337593543950336"),
            Some(U256::from(1u8) << 96_usize)
        );
        assert_eq!(
            parse_sqrt_price_x96("0x1000000000000000000000000"),
            Some(U256::from(1u8) << 96_usize)
        );
    }

    #[test]
    fn test_parse_sqrt_price_x96_rejects_garbage_and_overflow() {
        assert_eq!(parse_sqrt_price_x96("not a number"), None);
        assert_eq!(parse_sqrt_price_x96("-1"), None);
        // 2^160 does not fit a uint160
        let too_wide = (U256::from(1u8) << 160_usize).to_string();
        assert_eq!(parse_sqrt_price_x96(&too_wide), None);
    }
}
