use pancake_kitchen::assembly_actor::AssemblyError;
use pancake_kitchen::clients::{AssemblyTracker, OrderRegistry};
use pancake_kitchen::framework::{mock::MockClient, FrameworkError};
use pancake_kitchen::model::{Ingredient, Order, OrderId};
use pancake_kitchen::order_actor::{OrderActionResult, OrderError};

/// Real Assembly actor with a mocked order registry.
///
/// The tracker's behavior (session bookkeeping, validation, commit hand-over) is
/// exercised without an Order actor; the mock stands in for every `add_item`.
fn tracker_with(mock: &MockClient<Order>) -> (AssemblyTracker, tokio::task::JoinHandle<()>) {
    let registry = OrderRegistry::new(mock.client());
    let (actor, tracker) = pancake_kitchen::assembly_actor::new(10);
    let handle = tokio::spawn(actor.run(registry));
    (tracker, handle)
}

#[tokio::test]
async fn test_commit_hands_pancake_to_registry() {
    let mut mock = MockClient::<Order>::new();
    let order_id = OrderId::new();
    // commit() calls registry.add_item(), which is a custom action.
    mock.expect_action(order_id)
        .return_ok(OrderActionResult::ItemAdded { distinct_items: 1 });
    let (tracker, _handle) = tracker_with(&mock);

    tracker.start(order_id).await.unwrap();
    tracker.add_ingredient(order_id, "dark chocolate").await.unwrap();
    tracker.add_ingredient(order_id, "Whipped Cream").await.unwrap();

    let item = tracker.commit(order_id, 3).await.unwrap().expect("pancake committed");
    assert_eq!(
        item.ingredients(),
        &[Ingredient::DarkChocolate, Ingredient::WhippedCream]
    );
    assert_eq!(
        item.description(),
        "Delicious pancake with dark chocolate, whipped cream!"
    );

    // The session is gone once committed.
    assert!(tracker.in_progress(order_id).await.unwrap().is_none());
    mock.verify();
}

#[tokio::test]
async fn test_unknown_ingredient_leaves_session_unchanged() {
    let mock = MockClient::<Order>::new();
    let order_id = OrderId::new();
    let (tracker, _handle) = tracker_with(&mock);

    tracker.start(order_id).await.unwrap();
    tracker.add_ingredient(order_id, "hazelnuts").await.unwrap();

    let err = tracker.add_ingredient(order_id, "maple syrup").await.unwrap_err();
    assert_eq!(err, AssemblyError::UnknownIngredient("maple syrup".to_string()));

    let builder = tracker.in_progress(order_id).await.unwrap().unwrap();
    assert_eq!(builder.ingredients(), &[Ingredient::Hazelnuts]);
    mock.verify();
}

#[tokio::test]
async fn test_add_ingredient_without_start() {
    let mock = MockClient::<Order>::new();
    let order_id = OrderId::new();
    let (tracker, _handle) = tracker_with(&mock);

    let err = tracker
        .add_ingredient(order_id, "dark chocolate")
        .await
        .unwrap_err();
    assert_eq!(err, AssemblyError::NoActiveAssembly(order_id.to_string()));
}

#[tokio::test]
async fn test_missing_session_reported_before_unknown_ingredient() {
    let mock = MockClient::<Order>::new();
    let order_id = OrderId::new();
    let (tracker, _handle) = tracker_with(&mock);

    let err = tracker.add_ingredient(order_id, "maple syrup").await.unwrap_err();
    assert_eq!(err, AssemblyError::NoActiveAssembly(order_id.to_string()));
}

#[tokio::test]
async fn test_invalid_quantity_checked_before_session() {
    let mock = MockClient::<Order>::new();
    let order_id = OrderId::new();
    let (tracker, _handle) = tracker_with(&mock);

    // No session at all: the quantity is still rejected first.
    assert_eq!(
        tracker.commit(order_id, 0).await,
        Err(AssemblyError::InvalidQuantity(0))
    );

    tracker.start(order_id).await.unwrap();
    assert_eq!(
        tracker.commit(order_id, 0).await,
        Err(AssemblyError::InvalidQuantity(0))
    );
    assert!(tracker.in_progress(order_id).await.unwrap().is_some());
    mock.verify();
}

#[tokio::test]
async fn test_commit_without_session_is_silent() {
    let mock = MockClient::<Order>::new();
    let (tracker, _handle) = tracker_with(&mock);

    // No expectation on the registry: nothing may reach it.
    assert_eq!(tracker.commit(OrderId::new(), 2).await, Ok(None));
    mock.verify();
}

#[tokio::test]
async fn test_start_discards_unfinished_pancake() {
    let mut mock = MockClient::<Order>::new();
    let order_id = OrderId::new();
    mock.expect_action(order_id)
        .return_ok(OrderActionResult::ItemAdded { distinct_items: 1 });
    let (tracker, _handle) = tracker_with(&mock);

    tracker.start(order_id).await.unwrap();
    tracker.add_ingredient(order_id, "milk chocolate").await.unwrap();
    let abandoned = tracker.in_progress(order_id).await.unwrap().unwrap();

    tracker.start(order_id).await.unwrap();
    let fresh = tracker.in_progress(order_id).await.unwrap().unwrap();
    assert!(fresh.ingredients().is_empty());
    assert_ne!(fresh.id(), abandoned.id());

    let item = tracker.commit(order_id, 1).await.unwrap().unwrap();
    assert_eq!(item.id(), fresh.id());
    assert_eq!(item.description(), "Delicious pancake with !");
    mock.verify();
}

#[tokio::test]
async fn test_sessions_are_per_order() {
    let mock = MockClient::<Order>::new();
    let first = OrderId::new();
    let second = OrderId::new();
    let (tracker, _handle) = tracker_with(&mock);

    tracker.start(first).await.unwrap();
    tracker.start(second).await.unwrap();
    tracker.add_ingredient(first, "hazelnuts").await.unwrap();

    let other = tracker.in_progress(second).await.unwrap().unwrap();
    assert!(other.ingredients().is_empty());
}

#[tokio::test]
async fn test_session_survives_commit_into_unknown_order() {
    let mut mock = MockClient::<Order>::new();
    let order_id = OrderId::new();
    mock.expect_action(order_id)
        .return_err(FrameworkError::NotFound(order_id.to_string()));
    mock.expect_action(order_id)
        .return_ok(OrderActionResult::ItemAdded { distinct_items: 1 });
    let (tracker, _handle) = tracker_with(&mock);

    tracker.start(order_id).await.unwrap();
    tracker.add_ingredient(order_id, "dark chocolate").await.unwrap();
    let pending = tracker.in_progress(order_id).await.unwrap().unwrap();

    let err = tracker.commit(order_id, 2).await.unwrap_err();
    assert_eq!(
        err,
        AssemblyError::Order(OrderError::OrderNotFound(order_id.to_string()))
    );

    // Still open, with the same pancake; a retry goes through.
    let still = tracker.in_progress(order_id).await.unwrap().unwrap();
    assert_eq!(still.id(), pending.id());
    let item = tracker.commit(order_id, 2).await.unwrap().unwrap();
    assert_eq!(item.id(), pending.id());
    mock.verify();
}

#[tokio::test]
async fn test_tracker_after_actor_stops() {
    let mock = MockClient::<Order>::new();
    let (tracker, handle) = tracker_with(&mock);
    handle.abort();
    let _ = handle.await;

    let err = tracker.start(OrderId::new()).await.unwrap_err();
    assert!(matches!(err, AssemblyError::ActorCommunicationError(_)));
}
