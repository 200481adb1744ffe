//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for companies and invoices
//! - Health check routes
//! - A JSON 404 fallback for unknown paths

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
pub use router::build_routes;
