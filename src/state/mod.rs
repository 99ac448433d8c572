//! State - Form Session State
//!
//! The mutable state owned by one composer form session: the
//! configuration draft, the per-field error slots, and the controller
//! that applies field-change events and gates submission.

pub mod form_state;

pub use form_state::{FieldEvent, FormController, FormErrors, FormState, SubmitError};
