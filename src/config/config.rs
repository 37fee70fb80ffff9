use bigdecimal::BigDecimal;
use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Reference token configuration for price discovery.
///
/// Supplied at deploy time and never re-derived at runtime:
/// - `native_token`: wrapped native asset, priced at exactly 1 native unit
/// - `stable_pool`: stablecoin/native pool used to price the native asset in USD
/// - `whitelist`: tokens trusted as pricing anchors and for volume tracking
/// - `stablecoins`: tokens pegged 1:1 to USD (should be a subset of `whitelist`)
/// - `minimum_native_locked`: native-asset depth a pool must exceed to set a price
#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    pub native_token: String,
    pub stable_pool: String,
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default)]
    pub stablecoins: Vec<String>,
    #[serde(default = "default_minimum_native_locked")]
    pub minimum_native_locked: BigDecimal,
}

fn default_minimum_native_locked() -> BigDecimal {
    BigDecimal::from(60)
}

/// Store snapshot locations used by the command-line driver.
#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotSettings {
    /// JSON snapshot holding bundle, tokens and pools
    #[serde(default = "default_snapshot_input")]
    pub input: String,
    /// Where to write the repriced snapshot (skipped when unset)
    #[serde(default)]
    pub output: Option<String>,
}

fn default_snapshot_input() -> String {
    "snapshot.json".to_string()
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self {
            input: default_snapshot_input(),
            output: None,
        }
    }
}

/// Root application configuration.
///
/// Loaded from `config.yaml` at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub pricing: PricingSettings,
    #[serde(default)]
    pub snapshot: SnapshotSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_source(File::with_name("config"))
    }

    /// Load settings from an explicit file (extension picks the format).
    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        Self::from_source(File::with_name(path))
    }

    fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let s = Config::builder().add_source(source).build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const YAML: &str = r#"
pricing:
  native_token: "0xcF664087a5bB0237a0BAd6742852ec6c8d69A27a"
  stable_pool: "0xBC594CABd205bD993e7FfA6F3e9ceA75c1110da5"
  whitelist:
    - "0xcF664087a5bB0237a0BAd6742852ec6c8d69A27a"
    - "0xBC594CABd205bD993e7FfA6F3e9ceA75c1110da5"
  stablecoins:
    - "0xBC594CABd205bD993e7FfA6F3e9ceA75c1110da5"
  minimum_native_locked: "75.5"
snapshot:
  input: "demos/snapshot.json"
  output: "out.json"
"#;

    fn parse(yaml: &str) -> Result<Settings, ConfigError> {
        Settings::from_source(File::from_str(yaml, FileFormat::Yaml))
    }

    #[test]
    fn test_parse_full_settings() {
        let settings = parse(YAML).unwrap();
        assert_eq!(settings.pricing.whitelist.len(), 2);
        assert_eq!(settings.pricing.stablecoins.len(), 1);
        assert_eq!(
            settings.pricing.minimum_native_locked,
            "75.5".parse::<BigDecimal>().unwrap()
        );
        assert_eq!(settings.snapshot.input, "demos/snapshot.json");
        assert_eq!(settings.snapshot.output.as_deref(), Some("out.json"));
    }

    #[test]
    fn test_defaults() {
        let settings = parse(
            r#"
pricing:
  native_token: "0xnative"
  stable_pool: "0xpool"
"#,
        )
        .unwrap();
        assert!(settings.pricing.whitelist.is_empty());
        assert_eq!(settings.pricing.minimum_native_locked, BigDecimal::from(60));
        assert_eq!(settings.snapshot.input, "snapshot.json");
        assert!(settings.snapshot.output.is_none());
    }

    #[test]
    fn test_missing_pricing_section_fails() {
        assert!(parse("snapshot:\n  input: \"x.json\"\n").is_err());
    }
}
