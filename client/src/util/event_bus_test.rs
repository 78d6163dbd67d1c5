use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counter() -> (Arc<AtomicUsize>, impl Fn(AppEvent) + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();
    (count, move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn event_name_is_stable() {
    assert_eq!(AppEvent::OpenSpinPromo.name(), "open-spin-promo");
}

#[test]
fn publish_without_subscribers_delivers_nothing() {
    let bus = EventBus::new();
    assert_eq!(bus.publish(AppEvent::OpenSpinPromo), 0);
}

#[test]
fn publish_reaches_every_subscriber() {
    let bus = EventBus::new();
    let (a, handler_a) = counter();
    let (b, handler_b) = counter();
    bus.subscribe(handler_a);
    bus.subscribe(handler_b);

    assert_eq!(bus.publish(AppEvent::OpenSpinPromo), 2);
    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 1);
}

#[test]
fn clones_share_registry() {
    let bus = EventBus::new();
    let observer_side = bus.clone();
    let (count, handler) = counter();
    observer_side.subscribe(handler);

    bus.publish(AppEvent::OpenSpinPromo);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(bus.subscriber_count(), 1);
}

#[test]
fn unsubscribe_stops_delivery_and_is_idempotent() {
    let bus = EventBus::new();
    let (count, handler) = counter();
    let id = bus.subscribe(handler);

    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
    bus.publish(AppEvent::OpenSpinPromo);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn subscription_ids_are_distinct() {
    let bus = EventBus::new();
    let first = bus.subscribe(|_| {});
    let second = bus.subscribe(|_| {});
    assert_ne!(first, second);
}

#[test]
fn handler_may_resubscribe_during_publish() {
    let bus = EventBus::new();
    let inner = bus.clone();
    bus.subscribe(move |_| {
        inner.subscribe(|_| {});
    });
    assert_eq!(bus.publish(AppEvent::OpenSpinPromo), 1);
    assert_eq!(bus.subscriber_count(), 2);
}

#[test]
fn use_app_event_lives_as_long_as_its_owner() {
    let bus = EventBus::new();
    let (count, handler) = counter();
    let owner = leptos::prelude::Owner::new();
    owner.with(|| use_app_event(&bus, handler));

    assert_eq!(bus.subscriber_count(), 1);
    assert_eq!(bus.publish(AppEvent::OpenSpinPromo), 1);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    owner.cleanup();
    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(bus.publish(AppEvent::OpenSpinPromo), 0);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
