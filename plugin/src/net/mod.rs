//! Networking modules for the brief generation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single POST round trip and interprets the response,
//! `types` defines the JSON request/response schema.

pub mod api;
pub mod types;
