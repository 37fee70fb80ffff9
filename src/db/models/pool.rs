use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{
    db::models::Token,
    utils::{parse_sqrt_price_x96, sqrt_price_x96_to_token_prices},
};

/// Liquidity pool state as written by the ingestion pipeline.
///
/// Primary Key: id (lowercase address)
/// Query Pattern: "Get pool X while resolving a token price"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    // Primary key
    pub id: String,

    // Token pair
    pub token0: String,
    pub token1: String,
    #[serde(default)]
    pub fee: Option<u32>,

    // Concentrated liquidity state.
    // liquidity == 0 means no tradeable depth at the current price.
    #[serde(default)]
    pub liquidity: u128,
    #[serde(default)]
    pub sqrt_price_x96: Option<String>,

    // Amount of each token held by the pool (decimal adjusted)
    #[serde(default)]
    pub total_value_locked_token0: BigDecimal,
    #[serde(default)]
    pub total_value_locked_token1: BigDecimal,

    // Computed prices (Uniswap style)
    // token0_price = token0 per token1
    // token1_price = token1 per token0
    #[serde(default)]
    pub token0_price: BigDecimal,
    #[serde(default)]
    pub token1_price: BigDecimal,
}

/// The pool seen from one of its tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedSide<'a> {
    /// The other token of the pair
    pub paired_token: &'a str,
    /// Amount of the paired token locked in the pool
    pub paired_locked: &'a BigDecimal,
    /// How much of the paired token one unit of our token buys
    pub price_in_paired: &'a BigDecimal,
}

impl Pool {
    pub fn new(id: String, token0: String, token1: String) -> Self {
        Self {
            id: id.to_lowercase(),
            token0: token0.to_lowercase(),
            token1: token1.to_lowercase(),
            fee: None,
            liquidity: 0,
            sqrt_price_x96: None,
            total_value_locked_token0: BigDecimal::default(),
            total_value_locked_token1: BigDecimal::default(),
            token0_price: BigDecimal::default(),
            token1_price: BigDecimal::default(),
        }
    }

    pub fn has_liquidity(&self) -> bool {
        self.liquidity > 0
    }

    pub fn contains(&self, token: &str) -> bool {
        self.token0.eq_ignore_ascii_case(token) || self.token1.eq_ignore_ascii_case(token)
    }

    /// View the pool from `token`'s side.
    ///
    /// - token is token0 → paired with token1, priced with token1_price
    /// - token is token1 → paired with token0, priced with token0_price
    ///
    /// Returns None when the pool does not hold `token`.
    pub fn paired_side(&self, token: &str) -> Option<PairedSide<'_>> {
        if self.token0.eq_ignore_ascii_case(token) {
            Some(PairedSide {
                paired_token: &self.token1,
                paired_locked: &self.total_value_locked_token1,
                price_in_paired: &self.token1_price,
            })
        } else if self.token1.eq_ignore_ascii_case(token) {
            Some(PairedSide {
                paired_token: &self.token0,
                paired_locked: &self.total_value_locked_token0,
                price_in_paired: &self.token0_price,
            })
        } else {
            None
        }
    }

    /// Decode the stored sqrtPriceX96 into `(token0_price, token1_price)`.
    ///
    /// Returns None if the pool has no raw price yet or it cannot be parsed.
    pub fn decode_prices(
        &self,
        token0: &Token,
        token1: &Token,
    ) -> Option<(BigDecimal, BigDecimal)> {
        let sqrt_price_x96 = parse_sqrt_price_x96(self.sqrt_price_x96.as_deref()?)?;
        Some(sqrt_price_x96_to_token_prices(sqrt_price_x96, token0, token1))
    }

    /// Recompute token0_price/token1_price from the stored sqrtPriceX96.
    ///
    /// Returns false (prices untouched) when the raw price is missing or invalid.
    pub fn refresh_prices(&mut self, token0: &Token, token1: &Token) -> bool {
        match self.decode_prices(token0, token1) {
            Some((token0_price, token1_price)) => {
                self.token0_price = token0_price;
                self.token1_price = token1_price;
                true
            },
            None => false,
        }
    }

    /// Lowercase every identifier held by this record.
    pub(crate) fn normalize(&mut self) {
        self.id = self.id.to_lowercase();
        self.token0 = self.token0.to_lowercase();
        self.token1 = self.token1.to_lowercase();
    }
}
