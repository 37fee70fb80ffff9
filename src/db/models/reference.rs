use bigdecimal::BigDecimal;
use log::warn;
use rustc_hash::FxHashSet;

use crate::config::PricingSettings;

/// Reference token sets used to anchor price discovery.
///
/// Built once from configuration and never mutated afterwards.
/// All addresses are stored lowercase.
///
/// - whitelist: tokens liquid enough to price other tokens and to count toward tracked volume
/// - stablecoins: tokens assumed to be worth exactly 1 USD
/// - minimum_native_locked: native-asset depth a pool must exceed to set a price
#[derive(Debug, Clone)]
pub struct ReferenceTokens {
    native_token: String,
    stable_pool: String,
    whitelist: FxHashSet<String>,
    stablecoins: FxHashSet<String>,
    minimum_native_locked: BigDecimal,
}

impl ReferenceTokens {
    pub fn new<W, S>(
        native_token: &str,
        stable_pool: &str,
        whitelist: W,
        stablecoins: S,
        minimum_native_locked: BigDecimal,
    ) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let native_token = native_token.to_lowercase();
        let whitelist: FxHashSet<String> =
            whitelist.into_iter().map(|t| t.as_ref().to_lowercase()).collect();
        let stablecoins: FxHashSet<String> =
            stablecoins.into_iter().map(|t| t.as_ref().to_lowercase()).collect();

        if !whitelist.contains(&native_token) {
            warn!("Native token {} is not whitelisted", native_token);
        }
        for stable in stablecoins.iter().filter(|s| !whitelist.contains(*s)) {
            warn!("Stablecoin {} is not whitelisted, its volume will not be tracked", stable);
        }
        if stablecoins.contains(&native_token) {
            // Resolution checks the native token first, so this entry is never used
            warn!("Native token {} is listed as a stablecoin", native_token);
        }

        Self {
            native_token,
            stable_pool: stable_pool.to_lowercase(),
            whitelist,
            stablecoins,
            minimum_native_locked,
        }
    }

    pub fn from_settings(settings: &PricingSettings) -> Self {
        Self::new(
            &settings.native_token,
            &settings.stable_pool,
            &settings.whitelist,
            &settings.stablecoins,
            settings.minimum_native_locked.clone(),
        )
    }

    pub fn native_token(&self) -> &str {
        &self.native_token
    }

    pub fn stable_pool(&self) -> &str {
        &self.stable_pool
    }

    pub fn minimum_native_locked(&self) -> &BigDecimal {
        &self.minimum_native_locked
    }

    pub fn is_native(&self, token: &str) -> bool {
        self.native_token.eq_ignore_ascii_case(token)
    }

    pub fn is_whitelisted(&self, token: &str) -> bool {
        self.whitelist.contains(&token.to_lowercase())
    }

    pub fn is_stablecoin(&self, token: &str) -> bool {
        self.stablecoins.contains(&token.to_lowercase())
    }

    pub fn is_stable_pool(&self, address: &str) -> bool {
        self.stable_pool.eq_ignore_ascii_case(address)
    }
}
