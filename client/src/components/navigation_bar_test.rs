use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::net::types::Session;
use crate::state::nav::Disclosure;

#[derive(Default)]
struct FakeIdentity {
    session: Mutex<Option<Session>>,
    logouts: AtomicUsize,
}

impl FakeIdentity {
    fn with(session: Option<Session>) -> Self {
        Self { session: Mutex::new(session), logouts: AtomicUsize::new(0) }
    }

    fn set(&self, session: Option<Session>) {
        *self.session.lock().unwrap() = session;
    }
}

impl IdentityProvider for FakeIdentity {
    fn session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn loading(&self) -> bool {
        false
    }

    fn logout(&self) {
        self.logouts.fetch_add(1, Ordering::SeqCst);
        *self.session.lock().unwrap() = None;
    }
}

fn admin() -> Session {
    Session { name: "Root".to_owned(), is_admin: true, email: None }
}

fn customer() -> Session {
    Session { name: "Ada".to_owned(), is_admin: false, email: None }
}

// =============================================================
// Avatar control
// =============================================================

#[test]
fn avatar_toggles_admin_sidebar_for_admin() {
    let identity = FakeIdentity::with(Some(admin()));
    let mut nav = NavState::default();

    avatar_clicked(&mut nav, &identity);
    assert_eq!(nav.disclosure, Disclosure::AdminSidebar);
    avatar_clicked(&mut nav, &identity);
    assert_eq!(nav.disclosure, Disclosure::Closed);
}

#[test]
fn avatar_toggles_user_sidebar_for_customer_and_anonymous() {
    let identity = FakeIdentity::with(Some(customer()));
    let mut nav = NavState::default();
    avatar_clicked(&mut nav, &identity);
    assert_eq!(nav.disclosure, Disclosure::UserSidebar);

    let anonymous = FakeIdentity::with(None);
    let mut nav = NavState::default();
    avatar_clicked(&mut nav, &anonymous);
    assert_eq!(nav.disclosure, Disclosure::UserSidebar);
}

#[test]
fn avatar_after_role_change_opens_new_role_panel() {
    let identity = FakeIdentity::with(Some(customer()));
    let mut nav = NavState::default();
    avatar_clicked(&mut nav, &identity);

    identity.set(Some(admin()));
    avatar_clicked(&mut nav, &identity);
    assert_eq!(nav.disclosure, Disclosure::AdminSidebar);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_closes_everything_and_goes_home() {
    for start in [Disclosure::AdminSidebar, Disclosure::UserSidebar, Disclosure::MobileMenu] {
        let identity = FakeIdentity::with(Some(admin()));
        let mut nav = NavState { disclosure: start, scrolled: true };
        let mut visited = Vec::new();

        logout_requested(&mut nav, &identity, |path| visited.push(path.to_owned()));

        assert_eq!(nav.disclosure, Disclosure::Closed);
        assert_eq!(identity.logouts.load(Ordering::SeqCst), 1);
        assert_eq!(identity.session(), None);
        assert_eq!(visited, vec!["/".to_owned()]);
    }
}

#[test]
fn logout_keeps_scroll_flag() {
    let identity = FakeIdentity::default();
    let mut nav = NavState { disclosure: Disclosure::UserSidebar, scrolled: true };
    logout_requested(&mut nav, &identity, |_| {});
    assert!(nav.scrolled);
}

// =============================================================
// Header treatment
// =============================================================

#[test]
fn header_class_reflects_scroll_flag() {
    assert_eq!(header_class(false), "navbar");
    assert_eq!(header_class(true), "navbar navbar--scrolled");
}
