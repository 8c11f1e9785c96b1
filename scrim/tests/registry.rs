use scrim::node::Node;
use scrim::registry::{LayerId, OverlayRegistry};

fn ids(registry: &OverlayRegistry) -> Vec<u64> {
    registry.layers().iter().map(|(id, _)| id.id()).collect()
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[tokio::test]
async fn test_append_orders_by_call() {
    let registry = OverlayRegistry::new();

    let first = registry.append(Node::text("A"));
    let second = registry.append(Node::text("B"));
    registry.commit();

    let (a, b) = tokio::join!(first, second);
    assert_eq!(a.id(), 1);
    assert_eq!(b.id(), 2);
    assert_eq!(ids(&registry), [1, 2]);
}

#[tokio::test]
async fn test_remove_preserves_relative_order() {
    let registry = OverlayRegistry::new();

    let a = registry.append(Node::text("A"));
    let b = registry.append(Node::text("B"));
    let c = registry.append(Node::text("C"));
    registry.commit();
    let (a, _b, _c) = tokio::join!(a, b, c);

    let ack = registry.remove(a);
    registry.commit();
    ack.await;

    assert_eq!(ids(&registry), [2, 3]);
}

#[tokio::test]
async fn test_update_replaces_in_place() {
    let registry = OverlayRegistry::new();

    let a = registry.append(Node::text("A"));
    let b = registry.append(Node::text("B"));
    registry.commit();
    let (_a, b) = tokio::join!(a, b);

    let ack = registry.update(b, Node::text("B'"));
    registry.commit();
    ack.await;

    let layers = registry.layers();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[1].0, b);
    assert_eq!(layers[1].1, Node::text("B'"));
}

#[tokio::test]
async fn test_full_mutation_sequence() {
    let registry = OverlayRegistry::new();

    let a = registry.append(Node::text("A"));
    registry.commit();
    let a = a.await;
    assert_eq!(a.id(), 1);
    assert_eq!(ids(&registry), [1]);

    let b = registry.append(Node::text("B"));
    registry.commit();
    let b = b.await;
    assert_eq!(b.id(), 2);
    assert_eq!(ids(&registry), [1, 2]);

    let ack = registry.remove(a);
    registry.commit();
    ack.await;
    assert_eq!(ids(&registry), [2]);

    let ack = registry.update(b, Node::text("B'"));
    registry.commit();
    ack.await;
    assert_eq!(registry.layers(), [(b, Node::text("B'"))]);
}

// =============================================================================
// Idempotence and Missing-Id Tests
// =============================================================================

#[tokio::test]
async fn test_missing_id_resolves_silently() {
    let registry = OverlayRegistry::new();
    let ghost = {
        let (id, _) = registry.queue_append(Node::text("ghost"));
        registry.commit();
        registry.queue_remove(id);
        registry.commit();
        id
    };

    // Both operations on the removed id commit as no-ops.
    let update = registry.update(ghost, Node::text("x"));
    let remove = registry.remove(ghost);
    registry.commit();
    tokio::join!(update, remove);
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_never_removes_the_wrong_layer() {
    let registry = OverlayRegistry::new();

    let a = registry.append(Node::text("A"));
    let b = registry.append(Node::text("B"));
    registry.commit();
    let (a, b) = tokio::join!(a, b);

    // Two concurrent removals of A must not take B down with them.
    let first = registry.remove(a);
    let second = registry.remove(a);
    registry.commit();
    tokio::join!(first, second);

    assert!(registry.contains(b));
    assert_eq!(ids(&registry), [b.id()]);
}

// =============================================================================
// Commit Cycle Tests
// =============================================================================

#[tokio::test]
async fn test_acks_resolve_only_after_commit() {
    let registry = OverlayRegistry::new();

    let mut append = registry.append(Node::text("A"));
    assert!(registry.has_pending());
    assert!(futures::poll!(&mut append).is_pending());

    registry.commit();
    let id = append.await;
    assert!(registry.contains(id));
}

#[tokio::test]
async fn test_one_commit_covers_the_whole_queue() {
    let registry = OverlayRegistry::new();

    let (id, _) = registry.queue_append(Node::text("v1"));
    let update = registry.update(id, Node::text("v2"));
    let remove = registry.remove(id);
    assert_eq!(registry.commit(), 3);

    tokio::join!(update, remove);
    assert!(registry.is_empty());
    assert!(!registry.has_pending());
}

#[test]
fn test_ids_survive_emptying_the_registry() {
    let registry = OverlayRegistry::new();

    for round in 1..=3u64 {
        let (id, _) = registry.queue_append(Node::text("layer"));
        registry.commit();
        assert_eq!(id.id(), round);

        registry.queue_remove(id);
        registry.commit();
        assert!(registry.is_empty());
    }
}

#[test]
fn test_layer_id_ordering_matches_creation() {
    let registry = OverlayRegistry::new();
    let (a, _) = registry.queue_append(Node::text("A"));
    let (b, _) = registry.queue_append(Node::text("B"));
    assert!(a < b);
    assert_eq!(registry.commit(), 2);

    let from_snapshot: Vec<LayerId> = registry.layers().iter().map(|(id, _)| *id).collect();
    assert_eq!(from_snapshot, [a, b]);
}
