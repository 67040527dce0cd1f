// Engine layer - pure form logic (answer validation, preview session)
// Sits between the form model (types) and persistence wiring (runtime)

pub mod preview;
pub mod validate;

pub use preview::{PreviewSession, PreviewState, SubmitError};
pub use validate::{ValidationError, validate_answer};
