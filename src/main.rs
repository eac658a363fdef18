//! Demo: one order for building 10, room 20, taken from intake to delivery.

use pancake_kitchen::audit::TracingAuditSink;
use pancake_kitchen::config::KitchenConfig;
use pancake_kitchen::lifecycle::tracing::setup_tracing;
use pancake_kitchen::lifecycle::KitchenSystem;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = KitchenConfig::from_env();
    info!(?config, "Starting pancake kitchen");

    let system = KitchenSystem::new(&config, Arc::new(TracingAuditSink));

    let order_id = system
        .registry
        .create_order(10, 20)
        .instrument(tracing::info_span!("intake"))
        .await?;
    info!(%order_id, "Order created");

    let recipes: [&[&str]; 3] = [
        &["dark chocolate"],
        &["milk chocolate"],
        &["milk chocolate", "hazelnuts"],
    ];
    let span = tracing::info_span!("assembly", %order_id);
    async {
        for recipe in recipes {
            system.assembly.start(order_id).await?;
            for ingredient in recipe {
                system.assembly.add_ingredient(order_id, ingredient).await?;
            }
            system.assembly.commit(order_id, 3).await?;
        }
        Ok::<_, pancake_kitchen::assembly_actor::AssemblyError>(())
    }
    .instrument(span)
    .await?;

    let view = system.registry.view_order(order_id).await?;
    info!(pancakes = view.len(), "Order assembled");

    let span = tracing::info_span!("corrections", %order_id);
    async {
        let registry = &system.registry;
        registry
            .remove_items(order_id, "Delicious pancake with dark chocolate!", 2)
            .await?;
        registry
            .remove_items(order_id, "Delicious pancake with milk chocolate!", 3)
            .await?;
        registry
            .remove_items(order_id, "Delicious pancake with milk chocolate, hazelnuts!", 1)
            .await
    }
    .instrument(span)
    .await?;

    system.registry.complete_order(order_id).await?;
    // Not prepared yet: the kitchen declines.
    if system.registry.deliver_order(order_id).await?.is_none() {
        warn!(%order_id, "Delivery attempted before preparation");
    }
    system.registry.prepare_order(order_id).await?;

    match system.registry.deliver_order(order_id).await? {
        Some(delivery) => {
            for pancake in &delivery.items {
                info!(%order_id, %pancake, "Delivered");
            }
        }
        None => warn!(%order_id, "Order was not delivered"),
    }

    system.shutdown().await?;
    info!("Kitchen closed");
    Ok(())
}
