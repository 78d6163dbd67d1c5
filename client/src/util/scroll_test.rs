use super::*;

#[test]
fn past_threshold_is_inclusive() {
    assert!(!past_threshold(299.0, BACK_TO_TOP_THRESHOLD_PX));
    assert!(past_threshold(300.0, BACK_TO_TOP_THRESHOLD_PX));
    assert!(past_threshold(1200.0, BACK_TO_TOP_THRESHOLD_PX));
}

#[test]
fn non_finite_offsets_never_pass() {
    assert!(!past_threshold(f64::NAN, 20.0));
    assert!(!past_threshold(f64::INFINITY, 20.0));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn offset_is_zero_outside_browser() {
    assert!(current_offset().abs() < f64::EPSILON);
    scroll_to_top();
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn watch_scroll_never_reports_during_component_setup() {
    let calls = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let seen = calls.clone();
    let owner = leptos::prelude::Owner::new();
    owner.with(|| {
        watch_scroll(move |_| {
            seen.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        });
    });
    assert_eq!(calls.load(std::sync::atomic::Ordering::Relaxed), 0);
    owner.cleanup();
    assert_eq!(calls.load(std::sync::atomic::Ordering::Relaxed), 0);
}
