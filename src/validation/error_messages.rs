//! Every message shown to the user when an input is rejected

pub const USERNAME_EMPTY: &str = "Username cannot be empty.";
pub const USERNAME_FIRST_CHARACTER: &str = "Username must start with a letter.";
pub const USERNAME_LENGTH: &str = "Username must be between 4 and 16 characters long.";
pub const USERNAME_INVALID_CHARACTER: &str =
    "Username may only contain letters, digits, underscores, hyphens and dots.";

pub const PASSWORD_EMPTY: &str = "Password cannot be empty.";
pub const PASSWORD_INVALID_CHARACTER: &str = "Password contains an invalid character.";
pub const PASSWORD_MISSING_UPPERCASE: &str = "Password must contain at least one uppercase letter.";
pub const PASSWORD_MISSING_LOWERCASE: &str = "Password must contain at least one lowercase letter.";
pub const PASSWORD_MISSING_DIGIT: &str = "Password must contain at least one digit.";
pub const PASSWORD_MISSING_SPECIAL: &str =
    "Password must contain at least one special character (~`!@#$%^&*()_-+{}[]|:,.?/).";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";

pub const EMAIL_EMPTY: &str = "Email address cannot be empty.";
pub const EMAIL_WHITESPACE: &str = "Email address cannot contain whitespace.";
pub const EMAIL_CONSECUTIVE_DOTS: &str = "Email address cannot contain consecutive dots.";
pub const EMAIL_MISSING_AT: &str = "Email address is missing an '@' symbol.";
pub const EMAIL_MULTIPLE_AT: &str = "Email address cannot contain multiple '@' symbols.";
pub const EMAIL_EMPTY_LOCAL_PART: &str = "Email address is missing the part before '@'.";
pub const EMAIL_EMPTY_DOMAIN: &str = "Email address is missing the domain after '@'.";
pub const EMAIL_LOCAL_PART_EDGE: &str =
    "The part before '@' cannot start or end with a dot or a hyphen.";
pub const EMAIL_EMPTY_LABEL: &str = "The domain cannot contain an empty label.";
pub const EMAIL_LABEL_HYPHEN: &str = "A domain label cannot start or end with a hyphen.";
pub const EMAIL_MISSING_DOMAIN_NAME: &str =
    "The domain must contain a name followed by an extension (e.g. example.com).";
pub const EMAIL_UNSUPPORTED_EXTENSION: &str =
    "Unsupported domain extension: accepted extensions are com, edu, org and net.";
