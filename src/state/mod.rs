//! Application State
//!
//! Reactive global state and the notification model.

pub mod global;
