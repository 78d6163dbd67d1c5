//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the storefront chrome. Cross-cutting state arrives
//! through the injected `Providers` bundle; the only state owned here is the
//! navigation bar's disclosure and scroll flags.

pub mod admin_sidebar;
pub mod back_to_top;
pub mod cart_link;
pub mod footer;
pub mod navigation_bar;
pub mod page_layout;
pub mod sidebar;
pub mod user_sidebar;
