//! HTTP API Client
//!
//! Typed access to the finance tracker REST API.

mod client;

pub use client::*;
