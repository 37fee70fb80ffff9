use anyhow::Context;
use jemallocator::Jemalloc;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use pricewalk::{
    db::models::ReferenceTokens,
    pricing::{refresh_bundle, refresh_derived_native, refresh_pool_prices},
    MemoryStore, PriceStore, Settings, Snapshot,
};

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .context("Failed to initialize logger")?;

    // Load configuration
    let settings = Settings::new()
        .context("Failed to load config.yaml. Please ensure it exists and is valid")?;

    let reference = ReferenceTokens::from_settings(&settings.pricing);

    let snapshot = Snapshot::load(&settings.snapshot.input)
        .context("Failed to load store snapshot")?;
    let mut store = MemoryStore::from(snapshot);

    info!(
        "Loaded {} tokens and {} pools from {}",
        store.token_ids().len(),
        store.pool_ids().len(),
        settings.snapshot.input
    );

    reprice(&mut store, &reference);

    if let Some(output) = &settings.snapshot.output {
        Snapshot::from(&store)
            .save(output)
            .context("Failed to save repriced snapshot")?;
        info!("Repriced snapshot written to {}", output);
    }

    Ok(())
}

/// Recompute every derived price in the store.
///
/// Pool prices and the bundle go first. Tokens follow with reference tokens
/// ahead of the rest (native, then stablecoins, then other whitelisted), since
/// every other token is priced through them.
fn reprice(store: &mut MemoryStore, reference: &ReferenceTokens) {
    let pool_ids = store.pool_ids().to_vec();
    let mut refreshed = 0;
    for pool_id in &pool_ids {
        if refresh_pool_prices(store, pool_id) {
            refreshed += 1;
        }
    }
    info!("Refreshed prices for {}/{} pools", refreshed, pool_ids.len());

    match refresh_bundle(store, reference) {
        Some(native_price_usd) => info!("Native price: {} USD", native_price_usd),
        None => warn!("Snapshot has no bundle, USD values will be zero"),
    }

    let mut token_ids = store.token_ids().to_vec();
    token_ids.sort_by_key(|id| {
        if reference.is_native(id) {
            0
        } else if reference.is_stablecoin(id) {
            1
        } else if reference.is_whitelisted(id) {
            2
        } else {
            3
        }
    });

    let native_price_usd = store
        .bundle()
        .map(|bundle| bundle.native_price_usd.clone())
        .unwrap_or_default();

    for token_id in &token_ids {
        let Some(derived_native) = refresh_derived_native(store, reference, token_id) else {
            continue;
        };
        let symbol = store.token(token_id).map(|t| t.symbol.as_str()).unwrap_or_default();
        let price_usd = &derived_native * &native_price_usd;
        info!(
            "{:<10} {} native / {} USD",
            symbol,
            derived_native.round(12).normalized(),
            price_usd.round(6).normalized()
        );
    }
}
