use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Token metadata and current derived price.
///
/// Primary Key: id (lowercase address)
/// Query Pattern: "Get token X, then walk its whitelist pools"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    // Primary key
    pub id: String,

    // On-chain metadata (immutable after first fetch)
    #[serde(default)]
    pub symbol: String,
    pub decimals: u8,

    // Price in native-asset units, rewritten on every resolution
    #[serde(default)]
    pub derived_native: BigDecimal,

    // Pools pairing this token with a whitelisted token.
    // Iteration order is the tie-break between equally deep pools.
    #[serde(default)]
    pub whitelist_pools: Vec<String>,
}

impl Token {
    pub fn new(id: String, symbol: String, decimals: u8) -> Self {
        Self {
            // Always lowercase addresses for consistent comparisons
            id: id.to_lowercase(),
            symbol,
            decimals,
            derived_native: BigDecimal::default(),
            whitelist_pools: Vec::new(),
        }
    }

    pub fn with_derived_native(mut self, derived_native: BigDecimal) -> Self {
        self.derived_native = derived_native;
        self
    }

    pub fn with_whitelist_pools<I, P>(mut self, pools: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.whitelist_pools = pools.into_iter().map(|p| p.into().to_lowercase()).collect();
        self
    }

    /// Lowercase every identifier held by this record.
    pub(crate) fn normalize(&mut self) {
        self.id = self.id.to_lowercase();
        for pool in &mut self.whitelist_pools {
            *pool = pool.to_lowercase();
        }
    }
}
