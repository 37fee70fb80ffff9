//! Read/write access to the pricing records.
//!
//! The records themselves (tokens, pools, bundle) are owned by the ingestion
//! pipeline. This crate reads them through [`PriceStore`] and only ever writes
//! back derived prices.

pub mod models;
mod snapshot;
mod store;

pub use snapshot::Snapshot;
pub use store::{MemoryStore, PriceStore};
