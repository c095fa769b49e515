//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: logging macros that target the browser console on WASM
//!   and `tracing` elsewhere
//! - **validation**: CSS class and inline style helpers for validated fields

pub mod console_macros;
pub mod validation;

pub use validation::*;
