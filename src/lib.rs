pub mod config;
pub mod db;
pub mod pricing;
pub mod utils;

pub use config::Settings;
pub use db::{MemoryStore, PriceStore, Snapshot};
pub use pricing::PriceResolver;
