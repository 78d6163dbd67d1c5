//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Page bodies belong to other features; this crate only frames them. Each
//! route renders a titled placeholder inside `PageLayout`.

pub mod destination;
