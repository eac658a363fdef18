use pancake_kitchen::assembly_actor::AssemblyError;
use pancake_kitchen::audit::{AuditEvent, MemoryAuditSink};
use pancake_kitchen::config::KitchenConfig;
use pancake_kitchen::lifecycle::KitchenSystem;
use pancake_kitchen::model::OrderId;
use pancake_kitchen::order_actor::OrderError;
use std::sync::Arc;

const DARK: &str = "Delicious pancake with dark chocolate!";
const MILK: &str = "Delicious pancake with milk chocolate!";
const NUTS: &str = "Delicious pancake with milk chocolate, hazelnuts!";

fn kitchen() -> (KitchenSystem, MemoryAuditSink) {
    let sink = MemoryAuditSink::new();
    let system = KitchenSystem::new(&KitchenConfig::default(), Arc::new(sink.clone()));
    (system, sink)
}

async fn assemble(system: &KitchenSystem, order_id: OrderId, ingredients: &[&str], quantity: u32) {
    system.assembly.start(order_id).await.unwrap();
    for ingredient in ingredients {
        system.assembly.add_ingredient(order_id, ingredient).await.unwrap();
    }
    let committed = system.assembly.commit(order_id, quantity).await.unwrap();
    assert!(committed.is_some());
}

/// Full flow: intake, assembly, corrections, preparation and delivery.
#[tokio::test]
async fn test_end_to_end_order() {
    let (system, sink) = kitchen();

    let order_id = system.registry.create_order(10, 20).await.unwrap();
    assemble(&system, order_id, &["dark chocolate"], 3).await;
    assemble(&system, order_id, &["milk chocolate"], 3).await;
    assemble(&system, order_id, &["milk chocolate", "hazelnuts"], 3).await;

    let view = system.registry.view_order(order_id).await.unwrap();
    assert_eq!(
        view,
        vec![DARK, DARK, DARK, MILK, MILK, MILK, NUTS, NUTS, NUTS]
    );

    assert_eq!(system.registry.remove_items(order_id, DARK, 2).await, Ok(2));
    assert_eq!(system.registry.remove_items(order_id, MILK, 3).await, Ok(3));
    assert_eq!(system.registry.remove_items(order_id, NUTS, 1).await, Ok(1));
    assert_eq!(
        system.registry.view_order(order_id).await.unwrap(),
        vec![DARK, NUTS, NUTS]
    );

    system.registry.complete_order(order_id).await.unwrap();
    system.registry.prepare_order(order_id).await.unwrap();
    let delivery = system.registry.deliver_order(order_id).await.unwrap().unwrap();
    assert_eq!(delivery.items, vec![DARK, NUTS, NUTS]);
    assert_eq!((delivery.order.building(), delivery.order.room()), (10, 20));

    assert!(system.registry.view_order(order_id).await.unwrap().is_empty());
    assert!(!system.registry.list_prepared().await.unwrap().contains(&order_id));

    let events: Vec<AuditEvent> = sink.facts().iter().map(|fact| fact.event).collect();
    assert_eq!(
        events,
        vec![
            AuditEvent::ItemAdded,
            AuditEvent::ItemAdded,
            AuditEvent::ItemAdded,
            AuditEvent::ItemsRemoved,
            AuditEvent::ItemsRemoved,
            AuditEvent::ItemsRemoved,
            AuditEvent::OrderDelivered,
        ]
    );
    let delivered = sink.facts().pop().unwrap();
    assert_eq!(delivered.count, Some(3));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_commit_into_cancelled_order() {
    let (system, _sink) = kitchen();
    let order_id = system.registry.create_order(1, 1).await.unwrap();

    system.assembly.start(order_id).await.unwrap();
    system.assembly.add_ingredient(order_id, "hazelnuts").await.unwrap();
    system.registry.cancel_order(order_id).await.unwrap();

    let err = system.assembly.commit(order_id, 1).await.unwrap_err();
    assert_eq!(
        err,
        AssemblyError::Order(OrderError::OrderNotFound(order_id.to_string()))
    );
    let pending = system.assembly.in_progress(order_id).await.unwrap().unwrap();
    assert_eq!(pending.description(), "Delicious pancake with hazelnuts!");

    system.shutdown().await.unwrap();
}

/// Many tasks committing into one order at once: every unit arrives, none are lost.
#[tokio::test]
async fn test_concurrent_commits_into_one_order() {
    let (system, sink) = kitchen();
    let order_id = system.registry.create_order(3, 4).await.unwrap();

    // One session per order: each task assembles against a scratch order, then
    // merges its pancake into the shared one.
    let mut tasks = Vec::new();
    for _ in 0..16 {
        let registry = system.registry.clone();
        let assembly = system.assembly.clone();
        tasks.push(tokio::spawn(async move {
            let scratch = registry.create_order(3, 4).await.unwrap();
            assembly.start(scratch).await.unwrap();
            assembly.add_ingredient(scratch, "whipped cream").await.unwrap();
            let item = assembly.commit(scratch, 1).await.unwrap().unwrap();
            registry.add_item(order_id, item, 2).await.unwrap();
            registry.cancel_order(scratch).await.unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let order = system.registry.find_order(order_id).await.unwrap().unwrap();
    assert_eq!(order.distinct_items(), 16);
    assert_eq!(order.unit_count(), 32);
    assert_eq!(sink.facts().len(), 16 * 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_removals_never_over_remove() {
    let (system, _sink) = kitchen();
    let order_id = system.registry.create_order(1, 2).await.unwrap();
    assemble(&system, order_id, &["dark chocolate"], 10).await;

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let registry = system.registry.clone();
        tasks.push(tokio::spawn(async move {
            match registry.remove_items(order_id, DARK, 3).await {
                Ok(removed) => removed,
                Err(OrderError::ItemNotFound(_)) => 0,
                Err(e) => panic!("unexpected error {e}"),
            }
        }));
    }
    let mut total = 0;
    for task in tasks {
        total += task.await.unwrap();
    }

    assert_eq!(total, 10);
    assert!(system.registry.view_order(order_id).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
