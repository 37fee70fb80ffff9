use bigdecimal::BigDecimal;
use log::{debug, warn};
use num_traits::Zero;

use crate::{
    db::{
        models::{ReferenceTokens, Token},
        PriceStore,
    },
    utils::safe_div,
};

/// Price resolution in native-asset units.
///
/// Resolves token prices using a priority-based approach:
/// 1. Native token → 1 (direct)
/// 2. Stablecoins → 1 USD converted with the bundle's native price (direct)
/// 3. Everything else → best single-hop route through a whitelist pool
///
/// Only direct routes are considered: the paired whitelist token must already
/// carry its own derived price. There is no multi-hop path search.
///
/// Holds no state of its own. Every call re-reads the store.
pub struct PriceResolver<'a, S: PriceStore + ?Sized> {
    pub(super) store: &'a S,
    pub(super) reference: &'a ReferenceTokens,
}

impl<'a, S: PriceStore + ?Sized> PriceResolver<'a, S> {
    pub fn new(store: &'a S, reference: &'a ReferenceTokens) -> Self {
        Self { store, reference }
    }

    /// Current native-asset USD price from the bundle.
    ///
    /// Returns 0 if the bundle has not been created yet.
    pub fn bundle_native_price_usd(&self) -> BigDecimal {
        self.store
            .bundle()
            .map(|bundle| bundle.native_price_usd.clone())
            .unwrap_or_default()
    }

    /// Get a token's price in native-asset units.
    ///
    /// Resolution priority:
    /// 1. Native token → 1
    /// 2. Stablecoin → 1 / bundle.native_price_usd (pool data ignored)
    /// 3. Otherwise → walk whitelist pools and keep the deepest route
    ///
    /// Returns 0 if no route qualifies.
    pub fn find_native_per_token(&self, token: &Token) -> BigDecimal {
        if self.reference.is_native(&token.id) {
            return BigDecimal::from(1);
        }

        // Pegged assets are trusted over their own, often thin, pools
        if self.reference.is_stablecoin(&token.id) {
            return safe_div(&BigDecimal::from(1), &self.bundle_native_price_usd());
        }

        self.derive_from_whitelist_pools(token)
    }

    /// Derive a token's native price from its whitelist pools.
    ///
    /// For each pool:
    /// - skip if it has no liquidity
    /// - native_locked = paired token TVL * paired token derived price
    /// - candidate = token price in paired token * paired token derived price
    ///
    /// A candidate replaces the running best only when its native_locked is
    /// strictly greater than both the best so far and the minimum floor, so
    /// ties keep the first pool in whitelist order.
    fn derive_from_whitelist_pools(&self, token: &Token) -> BigDecimal {
        let minimum_locked = self.reference.minimum_native_locked();
        let mut largest_native_locked = BigDecimal::zero();
        let mut price_so_far = BigDecimal::zero();

        for pool_id in &token.whitelist_pools {
            let Some(pool) = self.store.pool(pool_id) else {
                warn!("Whitelist pool {} of token {} not found", pool_id, token.id);
                continue;
            };

            if !pool.has_liquidity() {
                continue;
            }

            let Some(side) = pool.paired_side(&token.id) else {
                warn!("Whitelist pool {} does not contain token {}", pool.id, token.id);
                continue;
            };

            let Some(paired) = self.store.token(side.paired_token) else {
                warn!("Paired token {} of pool {} not found", side.paired_token, pool.id);
                continue;
            };

            let native_locked = side.paired_locked * &paired.derived_native;
            if native_locked > largest_native_locked && &native_locked > minimum_locked {
                // paired per our token * native per paired
                price_so_far = side.price_in_paired * &paired.derived_native;
                debug!(
                    "Token {} priced via pool {} ({} native locked): {}",
                    token.id, pool.id, native_locked, price_so_far
                );
                largest_native_locked = native_locked;
            }
        }

        price_so_far
    }
}
