use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use super::*;
use crate::util::event_bus::EventBus;

#[test]
fn spin_and_win_publishes_then_closes() {
    let owner = Owner::new();
    owner.with(|| {
        let log = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::new();

        let seen = Arc::clone(&log);
        bus.subscribe(move |event| seen.lock().unwrap().push(event.name()));
        let closed = Arc::clone(&log);
        let on_close = Callback::new(move |()| closed.lock().unwrap().push("close"));

        spin_and_win(&bus, on_close);
        assert_eq!(*log.lock().unwrap(), vec!["open-spin-promo", "close"]);
    });
}

#[test]
fn spin_and_win_closes_without_subscribers() {
    let owner = Owner::new();
    owner.with(|| {
        let closes = Arc::new(Mutex::new(0_u32));
        let counted = Arc::clone(&closes);
        let on_close = Callback::new(move |()| *counted.lock().unwrap() += 1);

        spin_and_win(&EventBus::new(), on_close);
        assert_eq!(*closes.lock().unwrap(), 1);
    });
}
