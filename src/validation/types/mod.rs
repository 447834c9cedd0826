//! Type definitions for the validation system

mod email_input;
mod password_input;
mod username_input;

// Re-export commonly used types and functions
pub use email_input::{Email, EmailValidator};
pub use password_input::{Password, PasswordValidator};
pub use username_input::{Username, UsernameValidator};
