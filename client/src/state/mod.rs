//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `cart`, `theme`, `nav`) so each provider
//! and component depends on a small focused model. Only `nav` is owned by a
//! component; the rest back the injected providers.

pub mod auth;
pub mod cart;
pub mod nav;
pub mod theme;
