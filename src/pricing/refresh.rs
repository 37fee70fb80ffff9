//! Write-back of derived prices.
//!
//! These helpers are the only code paths that mutate the store. They follow
//! the order the ingestion pipeline uses after a swap: pool prices first, then
//! the bundle, then the two tokens of the pool.

use bigdecimal::BigDecimal;
use log::{debug, warn};

use super::PriceResolver;
use crate::db::{models::ReferenceTokens, PriceStore};

/// Recompute a pool's token0_price/token1_price from its stored sqrtPriceX96.
///
/// Returns false (prices untouched) when the pool, one of its tokens, or a
/// valid raw price is missing.
pub fn refresh_pool_prices<S: PriceStore + ?Sized>(store: &mut S, pool_id: &str) -> bool {
    let decoded = {
        let Some(pool) = store.pool(pool_id) else {
            return false;
        };
        let (Some(token0), Some(token1)) = (store.token(&pool.token0), store.token(&pool.token1))
        else {
            warn!("Pool {} references unknown tokens", pool.id);
            return false;
        };
        pool.decode_prices(token0, token1)
    };

    match decoded {
        Some((token0_price, token1_price)) => {
            store.set_pool_prices(pool_id, token0_price, token1_price)
        },
        None => false,
    }
}

/// Recompute the bundle's native USD price from the stable pool and store it.
///
/// Returns the new price, or None when there is no bundle to write to.
pub fn refresh_bundle<S: PriceStore + ?Sized>(
    store: &mut S,
    reference: &ReferenceTokens,
) -> Option<BigDecimal> {
    store.bundle()?;

    let native_price_usd = PriceResolver::new(&*store, reference).native_price_usd();
    debug!("Native price USD: {}", native_price_usd);
    store.set_native_price_usd(native_price_usd.clone());
    Some(native_price_usd)
}

/// Resolve a token's native price and store it on the token.
///
/// Returns the new price, or None when the token does not exist.
pub fn refresh_derived_native<S: PriceStore + ?Sized>(
    store: &mut S,
    reference: &ReferenceTokens,
    token_id: &str,
) -> Option<BigDecimal> {
    let derived_native = {
        let token = store.token(token_id)?;
        PriceResolver::new(&*store, reference).find_native_per_token(token)
    };

    store.set_derived_native(token_id, derived_native.clone());
    Some(derived_native)
}

/// Refresh every derived price touched by a swap on `pool_id`.
///
/// 1. pool token prices from sqrtPriceX96
/// 2. bundle native price from the stable pool
/// 3. token0 then token1 derived native prices
///
/// Returns the new `(token0, token1)` derived prices, or None if the pool or
/// one of its tokens is missing.
pub fn refresh_after_swap<S: PriceStore + ?Sized>(
    store: &mut S,
    reference: &ReferenceTokens,
    pool_id: &str,
) -> Option<(BigDecimal, BigDecimal)> {
    let (token0, token1) = {
        let pool = store.pool(pool_id)?;
        (pool.token0.clone(), pool.token1.clone())
    };

    if !refresh_pool_prices(store, pool_id) {
        debug!("Pool {} prices not refreshed, keeping stored prices", pool_id);
    }
    if refresh_bundle(store, reference).is_none() {
        warn!("Bundle missing, native USD price treated as zero");
    }

    let token0_derived = refresh_derived_native(store, reference, &token0)?;
    let token1_derived = refresh_derived_native(store, reference, &token1)?;

    Some((token0_derived, token1_derived))
}
