pub mod field;
pub mod form;
pub mod submission;

pub use field::*;
pub use form::*;
pub use submission::*;
