//! Client-side registration form handling: field validation and submission of
//! the form to its declared endpoint.

pub mod config;
pub mod controller;
pub mod feedback;
pub mod form;
pub mod transport;
pub mod validation;

pub use controller::{RegistrationFormController, SubmissionOutcome, SubmitError, SubmitMode};
pub use form::{FormTarget, RegisterFormData};
