//! Infrastructure Services
//!
//! - **config**: booking page configuration and its validation

pub mod config;
