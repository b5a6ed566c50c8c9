//! Client library for the W3T B3AnS squad dashboard.
//!
//! The dashboard has no backend of its own; it consumes a remote HTTP
//! store for persistence. This crate owns the client side of that
//! contract: the data models, the store client, the entity synchronizer
//! that keeps local mirrors consistent with the store, and the
//! admin-mode flag derivation.

pub mod admin;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;
pub mod sync;
