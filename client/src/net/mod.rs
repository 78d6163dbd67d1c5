//! Networking modules for the REST providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the identity and cart requests, `types` defines the JSON
//! payloads, and `error` classifies failures so callers can degrade.

pub mod api;
pub mod error;
pub mod types;
