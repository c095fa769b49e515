pub mod errors;
pub mod form_validation;
pub mod state;
pub mod summary;
pub mod types;

pub use errors::*;
pub use form_validation::*;
pub use summary::*;
pub use types::*;
