//! Local navigation chrome state: which disclosure is open and whether the
//! page has scrolled.
//!
//! DESIGN
//! ======
//! One tagged `Disclosure` replaces separate open flags, so the admin
//! sidebar, the customer sidebar and the mobile menu can never be open at
//! the same time. Every transition is a pure function returning the next
//! value, and closing something that is already closed returns the input.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::Session;
use crate::util::scroll::past_threshold;

/// Scroll offset at which the header switches to its solid treatment.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Which account surface a session gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarKind {
    Admin,
    User,
}

impl SidebarKind {
    /// Admins get the admin panel; everyone else, anonymous included, the
    /// customer panel.
    pub fn for_session(session: Option<&Session>) -> Self {
        if session.is_some_and(|s| s.is_admin) { Self::Admin } else { Self::User }
    }
}

/// The single open disclosure, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    AdminSidebar,
    UserSidebar,
    MobileMenu,
}

impl Disclosure {
    pub fn sidebar(kind: SidebarKind) -> Self {
        match kind {
            SidebarKind::Admin => Self::AdminSidebar,
            SidebarKind::User => Self::UserSidebar,
        }
    }

    pub fn open_sidebar(self) -> Option<SidebarKind> {
        match self {
            Self::AdminSidebar => Some(SidebarKind::Admin),
            Self::UserSidebar => Some(SidebarKind::User),
            Self::Closed | Self::MobileMenu => None,
        }
    }

    pub fn is_sidebar_open(self, kind: SidebarKind) -> bool {
        self.open_sidebar() == Some(kind)
    }

    pub fn is_mobile_menu_open(self) -> bool {
        self == Self::MobileMenu
    }

    /// Open the sidebar if it is closed, close it if it is open.
    pub fn toggled_sidebar(self, kind: SidebarKind) -> Self {
        if self.is_sidebar_open(kind) { Self::Closed } else { Self::sidebar(kind) }
    }

    pub fn toggled_mobile_menu(self) -> Self {
        if self.is_mobile_menu_open() { Self::Closed } else { Self::MobileMenu }
    }

    /// Close `kind` if it is the open sidebar; otherwise unchanged.
    pub fn closed_sidebar(self, kind: SidebarKind) -> Self {
        if self.is_sidebar_open(kind) { Self::Closed } else { self }
    }

    pub fn closed_mobile_menu(self) -> Self {
        if self.is_mobile_menu_open() { Self::Closed } else { self }
    }

    /// Close an open sidebar whose role no longer matches the session.
    pub fn reconciled(self, session: Option<&Session>) -> Self {
        match self.open_sidebar() {
            Some(kind) if kind != SidebarKind::for_session(session) => Self::Closed,
            _ => self,
        }
    }
}

/// Navigation bar state, created on mount and dropped on unmount.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub disclosure: Disclosure,
    pub scrolled: bool,
}

impl NavState {
    /// Avatar click: toggle the sidebar belonging to the session's role.
    pub fn toggle_account_panel(&mut self, session: Option<&Session>) {
        self.disclosure = self.disclosure.toggled_sidebar(SidebarKind::for_session(session));
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.disclosure = self.disclosure.toggled_mobile_menu();
    }

    pub fn close_sidebar(&mut self, kind: SidebarKind) {
        self.disclosure = self.disclosure.closed_sidebar(kind);
    }

    pub fn close_mobile_menu(&mut self) {
        self.disclosure = self.disclosure.closed_mobile_menu();
    }

    pub fn close_all(&mut self) {
        self.disclosure = Disclosure::Closed;
    }

    pub fn reconcile(&mut self, session: Option<&Session>) {
        self.disclosure = self.disclosure.reconciled(session);
    }

    /// Record a viewport offset. Returns whether the flag changed.
    pub fn observe_scroll(&mut self, offset_px: f64) -> bool {
        let next = is_scrolled(offset_px);
        let changed = next != self.scrolled;
        self.scrolled = next;
        changed
    }
}

/// Offsets at or past the threshold count as scrolled.
pub fn is_scrolled(offset_px: f64) -> bool {
    past_threshold(offset_px, SCROLLED_THRESHOLD_PX)
}
