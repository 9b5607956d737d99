use anyhow::Context;

use storefront_infra::{InMemoryStorefront, StorefrontConfig};
use storefront_orders::CreateOrderRequest;

/// Place one order against seeded in-memory stores and print it as JSON.
///
/// Usage: `storefront-demo <order-request.json>` with `STOREFRONT_SEED_PATH`
/// pointing at the catalog seed.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = StorefrontConfig::from_env();
    if config.seed_path.is_none() {
        tracing::warn!("STOREFRONT_SEED_PATH not set; stores start empty");
    }
    let storefront = InMemoryStorefront::from_config(&config)?;

    let request_path = std::env::args()
        .nth(1)
        .context("usage: storefront-demo <order-request.json>")?;
    let raw = std::fs::read_to_string(&request_path)
        .with_context(|| format!("failed to read {request_path}"))?;
    let request: CreateOrderRequest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid order request in {request_path}"))?;

    let order = storefront
        .create_order_service()
        .execute_request(&request)
        .await?;

    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}
