//! Constants used throughout the validation system


/// Minimum length of a username, in characters
pub const MIN_USERNAME_LENGTH: usize = 4;
/// Maximum length of a username, in characters
pub const MAX_USERNAME_LENGTH: usize = 16;
/// Separators allowed in a username after its first letter
pub const USERNAME_SEPARATORS: [char; 3] = ['_', '-', '.'];

/// Minimum length of a password, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// The only non-alphanumeric characters a password may contain
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "~`!@#$%^&*()_-+{}[]|:,.?/";

/// Domain extensions accepted at the end of an email address (case-insensitive)
pub const ACCEPTED_EMAIL_EXTENSIONS: [&str; 4] = ["com", "edu", "org", "net"];
