//! Native-asset and USD pricing on top of stored pool state.
//!
//! - [`PriceResolver`] - read-only resolution (derived native price, tracked USD, native USD price)
//! - [`refresh`] - write-back of derived prices into the store

mod native_price;
mod price_resolver;
pub mod refresh;
mod tracked;

pub use price_resolver::PriceResolver;
pub use refresh::{refresh_after_swap, refresh_bundle, refresh_derived_native, refresh_pool_prices};
