pub mod booking_form;

pub use booking_form::*;
