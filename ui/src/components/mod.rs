//! User Interface Components
//!
//! This module contains the Dioxus components the booking page is built from:
//!
//! - **forms**: the booking form bound to the page state
//! - **display**: hero banner and the read-only booking summary
//! - **input**: controlled inputs, select and text-area fields, buttons,
//!   inline validation feedback and inert links

pub mod display;
pub mod forms;
pub mod input;
