//! Registration form behavior: binding, validation and feedback.
//!
//! The binder re-runs after every content swap; a page without the form is
//! valid and binds nothing. Validation never throws - failures are data
//! ([`validation::FieldError`]) collected per field and rendered as inline
//! messages plus one aggregate feedback line.

pub mod binding;
pub mod feedback;
pub mod fields;
pub mod validation;

pub use binding::{SubmissionOutcome, process_submission};
pub use feedback::{FeedbackKind, FeedbackState};
pub use fields::{FieldKind, FieldState, digits_only};
pub use validation::{FieldError, FieldErrorKind, validate_all, validate_field};
