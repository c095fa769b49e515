pub mod booking_summary;
pub mod hero_banner;

pub use booking_summary::*;
pub use hero_banner::*;
