pub mod button;
pub mod inert_link;
pub mod select_field;
pub mod text_area_field;
pub mod validated_input;
pub mod validation_feedback;

pub use button::*;
pub use inert_link::*;
pub use select_field::*;
pub use text_area_field::*;
pub use validated_input::*;
pub use validation_feedback::*;
