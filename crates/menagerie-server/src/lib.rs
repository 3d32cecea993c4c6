//! HTTP/JSON API server for the menagerie record store.
//!
//! Exposes list, lookup-by-name and create endpoints over an in-memory
//! [`menagerie_core::AnimalStore`], plus a liveness probe. This crate contains
//! the router, handlers, wire schema types, error mapping and configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
