//! This crate contains all shared UI components for the booking page.

pub mod app;
pub use app::BookingPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
