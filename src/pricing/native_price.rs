use bigdecimal::BigDecimal;
use log::warn;

use super::PriceResolver;
use crate::db::PriceStore;

impl<'a, S: PriceStore + ?Sized> PriceResolver<'a, S> {
    /// Native asset USD price read from the configured stable pool.
    ///
    /// ## Price Convention:
    /// - pool.token0_price = token0 per token1
    /// - pool.token1_price = token1 per token0
    ///
    /// ## Native Price Calculation:
    /// - If native is token1: stablecoin per native = token0_price
    /// - If native is token0: stablecoin per native = token1_price
    ///
    /// Returns 0 if the pool is missing or does not contain the native token.
    pub fn native_price_usd(&self) -> BigDecimal {
        let Some(pool) = self.store.pool(self.reference.stable_pool()) else {
            return BigDecimal::default();
        };

        let native = self.reference.native_token();
        if pool.token1.eq_ignore_ascii_case(native) {
            pool.token0_price.clone()
        } else if pool.token0.eq_ignore_ascii_case(native) {
            pool.token1_price.clone()
        } else {
            warn!(
                "Stable pool {} does not contain native token {}",
                pool.id, native
            );
            BigDecimal::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{
        models::{Pool, ReferenceTokens},
        MemoryStore,
    };
    use num_traits::Zero;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn reference() -> ReferenceTokens {
        ReferenceTokens::new("0xnative", "0xstable", ["0xnative", "0xusdc"], ["0xusdc"], dec("60"))
    }

    fn stable_pool(token0: &str, token1: &str) -> Pool {
        let mut pool = Pool::new("0xSTABLE".to_string(), token0.to_string(), token1.to_string());
        pool.token0_price = dec("0.02");
        pool.token1_price = dec("50");
        pool
    }

    #[test]
    fn test_stablecoin_as_token0() {
        let mut store = MemoryStore::new();
        store.insert_pool(stable_pool("0xusdc", "0xnative"));
        let reference = reference();
        assert_eq!(PriceResolver::new(&store, &reference).native_price_usd(), dec("0.02"));
    }

    #[test]
    fn test_stablecoin_as_token1() {
        let mut store = MemoryStore::new();
        store.insert_pool(stable_pool("0xnative", "0xusdc"));
        let reference = reference();
        assert_eq!(PriceResolver::new(&store, &reference).native_price_usd(), dec("50"));
    }

    #[test]
    fn test_missing_pool_is_zero() {
        let store = MemoryStore::new();
        let reference = reference();
        assert!(PriceResolver::new(&store, &reference).native_price_usd().is_zero());
    }

    #[test]
    fn test_pool_without_native_is_zero() {
        let mut store = MemoryStore::new();
        store.insert_pool(stable_pool("0xusdc", "0xdai"));
        let reference = reference();
        assert!(PriceResolver::new(&store, &reference).native_price_usd().is_zero());
    }
}
