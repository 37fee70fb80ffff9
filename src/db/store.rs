use bigdecimal::BigDecimal;
use rustc_hash::FxHashMap;

use super::models::{Bundle, Pool, Token};

/// Synchronous key-value view over Token, Pool and Bundle records.
///
/// Every lookup may come back empty. Callers treat an absent record as
/// "no candidate" and never fail because of it.
///
/// The only writes are the derived values this crate owns. None of them
/// create or delete records: writing to a missing record is a no-op that
/// returns false.
pub trait PriceStore {
    fn token(&self, id: &str) -> Option<&Token>;

    fn pool(&self, id: &str) -> Option<&Pool>;

    fn bundle(&self) -> Option<&Bundle>;

    fn set_derived_native(&mut self, token_id: &str, derived_native: BigDecimal) -> bool;

    fn set_native_price_usd(&mut self, native_price_usd: BigDecimal) -> bool;

    fn set_pool_prices(
        &mut self,
        pool_id: &str,
        token0_price: BigDecimal,
        token1_price: BigDecimal,
    ) -> bool;
}

/// In-memory store keyed by lowercase identifier.
///
/// Keeps insertion order so snapshots and batch runs are deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tokens: FxHashMap<String, Token>,
    pools: FxHashMap<String, Pool>,
    bundle: Option<Bundle>,
    token_order: Vec<String>,
    pool_order: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a token.
    pub fn insert_token(&mut self, mut token: Token) {
        token.normalize();
        if !self.tokens.contains_key(&token.id) {
            self.token_order.push(token.id.clone());
        }
        self.tokens.insert(token.id.clone(), token);
    }

    /// Insert or replace a pool.
    pub fn insert_pool(&mut self, mut pool: Pool) {
        pool.normalize();
        if !self.pools.contains_key(&pool.id) {
            self.pool_order.push(pool.id.clone());
        }
        self.pools.insert(pool.id.clone(), pool);
    }

    pub fn set_bundle(&mut self, bundle: Bundle) {
        self.bundle = Some(bundle);
    }

    /// Tokens in insertion order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.token_order.iter().filter_map(|id| self.tokens.get(id))
    }

    /// Pools in insertion order.
    pub fn pools(&self) -> impl Iterator<Item = &Pool> + '_ {
        self.pool_order.iter().filter_map(|id| self.pools.get(id))
    }

    pub fn token_ids(&self) -> &[String] {
        &self.token_order
    }

    pub fn pool_ids(&self) -> &[String] {
        &self.pool_order
    }
}

impl PriceStore for MemoryStore {
    fn token(&self, id: &str) -> Option<&Token> {
        self.tokens.get(&id.to_lowercase())
    }

    fn pool(&self, id: &str) -> Option<&Pool> {
        self.pools.get(&id.to_lowercase())
    }

    fn bundle(&self) -> Option<&Bundle> {
        self.bundle.as_ref()
    }

    fn set_derived_native(&mut self, token_id: &str, derived_native: BigDecimal) -> bool {
        match self.tokens.get_mut(&token_id.to_lowercase()) {
            Some(token) => {
                token.derived_native = derived_native;
                true
            },
            None => false,
        }
    }

    fn set_native_price_usd(&mut self, native_price_usd: BigDecimal) -> bool {
        match self.bundle.as_mut() {
            Some(bundle) => {
                bundle.native_price_usd = native_price_usd;
                true
            },
            None => false,
        }
    }

    fn set_pool_prices(
        &mut self,
        pool_id: &str,
        token0_price: BigDecimal,
        token1_price: BigDecimal,
    ) -> bool {
        match self.pools.get_mut(&pool_id.to_lowercase()) {
            Some(pool) => {
                pool.token0_price = token0_price;
                pool.token1_price = token1_price;
                true
            },
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut store = MemoryStore::new();
        store.insert_token(Token::new("0xAbC".to_string(), "ABC".to_string(), 18));
        assert!(store.token("0xabc").is_some());
        assert!(store.token("0xABC").is_some());
        assert!(store.token("0xdef").is_none());
    }

    #[test]
    fn test_insert_keeps_first_position_on_replace() {
        let mut store = MemoryStore::new();
        store.insert_token(Token::new("0xb".to_string(), "B".to_string(), 18));
        store.insert_token(Token::new("0xa".to_string(), "A".to_string(), 18));
        store.insert_token(Token::new("0xB".to_string(), "B2".to_string(), 6));

        let symbols: Vec<&str> = store.tokens().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["B2", "A"]);
    }

    #[test]
    fn test_writes_never_create_records() {
        let mut store = MemoryStore::new();
        assert!(!store.set_derived_native("0xmissing", BigDecimal::from(1)));
        assert!(!store.set_native_price_usd(BigDecimal::from(1)));
        assert!(!store.set_pool_prices("0xmissing", BigDecimal::from(1), BigDecimal::from(1)));
        assert!(store.bundle().is_none());
        assert_eq!(store.tokens().count(), 0);
    }

    #[test]
    fn test_writes_update_existing_records() {
        let mut store = MemoryStore::new();
        store.insert_token(Token::new("0xa".to_string(), "A".to_string(), 18));
        store.insert_pool(Pool::new("0xp".to_string(), "0xa".to_string(), "0xb".to_string()));
        store.set_bundle(Bundle::default());

        assert!(store.set_derived_native("0xA", BigDecimal::from(3)));
        assert!(store.set_native_price_usd(BigDecimal::from(2)));
        assert!(store.set_pool_prices("0xP", BigDecimal::from(4), BigDecimal::from(5)));

        assert_eq!(store.token("0xa").unwrap().derived_native, BigDecimal::from(3));
        assert_eq!(store.bundle().unwrap().native_price_usd, BigDecimal::from(2));
        assert_eq!(store.pool("0xp").unwrap().token1_price, BigDecimal::from(5));
    }
}
