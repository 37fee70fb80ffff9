use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Fixed identifier of the singleton bundle record.
pub const BUNDLE_ID: &str = "1";

/// Global pricing state: the native asset's USD price.
///
/// One record per deployment, always stored under [`BUNDLE_ID`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default = "default_bundle_id")]
    pub id: String,
    #[serde(default)]
    pub native_price_usd: BigDecimal,
}

fn default_bundle_id() -> String {
    BUNDLE_ID.to_string()
}

impl Bundle {
    pub fn new(native_price_usd: BigDecimal) -> Self {
        Self {
            id: default_bundle_id(),
            native_price_usd,
        }
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new(BigDecimal::default())
    }
}
