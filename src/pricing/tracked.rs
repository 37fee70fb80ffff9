use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::PriceResolver;
use crate::db::{models::Token, PriceStore};

impl<'a, S: PriceStore + ?Sized> PriceResolver<'a, S> {
    /// USD amount of a trade or liquidity event that counts toward tracked metrics.
    ///
    /// Uses Uniswap's whitelist approach:
    /// - Both tokens whitelisted → sum of both sides
    /// - Only one whitelisted → double that side (assumes a value-balanced trade)
    /// - Neither whitelisted → 0 (not tracked)
    ///
    /// Token USD prices are `derived_native * bundle.native_price_usd`.
    pub fn tracked_amount_usd(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> BigDecimal {
        let native_price_usd = self.bundle_native_price_usd();
        let token0_whitelisted = self.reference.is_whitelisted(&token0.id);
        let token1_whitelisted = self.reference.is_whitelisted(&token1.id);

        match (token0_whitelisted, token1_whitelisted) {
            (true, true) => {
                let price0_usd = &token0.derived_native * &native_price_usd;
                let price1_usd = &token1.derived_native * &native_price_usd;
                amount0 * price0_usd + amount1 * price1_usd
            },
            (true, false) => {
                let price0_usd = &token0.derived_native * &native_price_usd;
                amount0 * price0_usd * BigDecimal::from(2)
            },
            (false, true) => {
                let price1_usd = &token1.derived_native * &native_price_usd;
                amount1 * price1_usd * BigDecimal::from(2)
            },
            (false, false) => BigDecimal::zero(),
        }
    }
}
