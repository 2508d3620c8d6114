//! Common reusable UI components
//!
//! Shared by the wizard steps and pages so fields, dialogs and banners look
//! the same everywhere.

pub mod form;
pub mod message;
pub mod modal;

pub use form::{ColorField, FieldError, InputField, PasswordField};
pub use message::{ErrorMessage, WarningMessage};
pub use modal::BaseModal;
