use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{
    models::{Bundle, Pool, Token},
    MemoryStore, PriceStore,
};

/// Point-in-time dump of the pricing records.
///
/// Decimals are (de)serialized as strings so no precision is lost.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub bundle: Option<Bundle>,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub pools: Vec<Pool>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse snapshot JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid snapshot {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to encode snapshot")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))
    }
}

impl From<Snapshot> for MemoryStore {
    fn from(snapshot: Snapshot) -> Self {
        let mut store = MemoryStore::new();
        if let Some(bundle) = snapshot.bundle {
            store.set_bundle(bundle);
        }
        for token in snapshot.tokens {
            store.insert_token(token);
        }
        for pool in snapshot.pools {
            store.insert_pool(pool);
        }
        store
    }
}

impl From<&MemoryStore> for Snapshot {
    fn from(store: &MemoryStore) -> Self {
        Self {
            bundle: store.bundle().cloned(),
            tokens: store.tokens().cloned().collect(),
            pools: store.pools().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    const JSON: &str = r#"{
        "bundle": { "id": "1", "native_price_usd": "0.0213" },
        "tokens": [
            { "id": "0xCF66", "symbol": "WONE", "decimals": 18, "derived_native": "1" },
            { "id": "0xtok", "decimals": 9, "whitelist_pools": ["0xPOOL"] }
        ],
        "pools": [
            {
                "id": "0xPool", "token0": "0xtok", "token1": "0xcf66",
                "liquidity": 340282366920938463463374607431768211455,
                "sqrt_price_x96": "79228162514264337593543950336",
                "total_value_locked_token1": "120.5"
            }
        ]
    }"#;

    #[test]
    fn test_snapshot_into_store() {
        let store: MemoryStore = Snapshot::from_json(JSON).unwrap().into();

        assert_eq!(
            store.bundle().unwrap().native_price_usd,
            BigDecimal::from_str("0.0213").unwrap()
        );
        let token = store.token("0xtok").unwrap();
        assert_eq!(token.derived_native, BigDecimal::default());
        assert_eq!(token.whitelist_pools, vec!["0xpool".to_string()]);

        let pool = store.pool("0xpool").unwrap();
        assert_eq!(pool.token1, "0xcf66");
        assert_eq!(pool.liquidity, u128::MAX);
        assert_eq!(pool.total_value_locked_token1, BigDecimal::from_str("120.5").unwrap());
        assert_eq!(pool.token0_price, BigDecimal::default());
    }

    #[test]
    fn test_store_back_into_snapshot_keeps_order() {
        let store: MemoryStore = Snapshot::from_json(JSON).unwrap().into();
        let snapshot = Snapshot::from(&store);
        let ids: Vec<&str> = snapshot.tokens.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["0xcf66", "0xtok"]);
        assert_eq!(snapshot.pools.len(), 1);
        assert!(snapshot.bundle.is_some());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Snapshot::from_json("{ \"tokens\": [ { \"id\": 1 } ] }").is_err());
    }
}
