mod booking_page;

pub use booking_page::*;
