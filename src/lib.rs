//! Library crate for courtside-back: the pure tennis scoring core and the HTTP
//! adapters exposing it, shared by the binaries and tests.

/// Runtime configuration loaded from disk.
pub mod config;
/// Request and response payloads of the HTTP API.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// Axum routers.
pub mod routes;
/// Pure scoring and standings logic.
pub mod scoring;
/// Operations behind the routes.
pub mod services;
/// In-memory application state.
pub mod state;
