//! Password validation.
//!
//! Every character is classified into one of four accepted classes. A
//! character outside of them stops the scan immediately. Otherwise the scan
//! runs to the end and every unmet requirement is reported at once.

use std::fmt;

use crate::validation::error_messages::*;
use crate::validation::{
    log_outcome, AggregationPolicy, Finding, Rejected, ValidationResult, Validator, Violation,
    MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARACTERS,
};

/// The accepted character classes of a password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    fn of(c: char) -> Option<Self> {
        match c {
            'A'..='Z' => Some(Self::Upper),
            'a'..='z' => Some(Self::Lower),
            '0'..='9' => Some(Self::Digit),
            c if PASSWORD_SPECIAL_CHARACTERS.contains(c) => Some(Self::Special),
            _ => None,
        }
    }
}

/// Requirements met so far during one scan
#[derive(Debug, Default)]
struct Requirements {
    has_upper: bool,
    has_lower: bool,
    has_digit: bool,
    has_special: bool,
    has_min_length: bool,
}

impl Requirements {
    fn record(&mut self, class: CharClass) {
        match class {
            CharClass::Upper => self.has_upper = true,
            CharClass::Lower => self.has_lower = true,
            CharClass::Digit => self.has_digit = true,
            CharClass::Special => self.has_special = true,
        }
    }

    /// One finding per unmet requirement, in reporting order
    fn unmet(&self, index: usize) -> Vec<Finding> {
        [
            (self.has_upper, Violation::MissingCategory, PASSWORD_MISSING_UPPERCASE),
            (self.has_lower, Violation::MissingCategory, PASSWORD_MISSING_LOWERCASE),
            (self.has_digit, Violation::MissingCategory, PASSWORD_MISSING_DIGIT),
            (self.has_special, Violation::MissingCategory, PASSWORD_MISSING_SPECIAL),
            (self.has_min_length, Violation::LengthOutOfRange, PASSWORD_TOO_SHORT),
        ]
        .into_iter()
        .filter(|(met, _, _)| !met)
        .map(|(_, violation, message)| Finding::at(violation, message, index))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordValidator;

impl Validator for PasswordValidator {
    const NAME: &'static str = "password";
    const POLICY: AggregationPolicy = AggregationPolicy::CollectAll;

    fn validate(&self, text: &str) -> ValidationResult {
        let result = ValidationResult::from_findings(text, scan(text));
        log_outcome::<Self>(text, &result);
        result
    }
}

fn scan(text: &str) -> Vec<Finding> {
    if text.is_empty() {
        return vec![Finding::at(Violation::EmptyInput, PASSWORD_EMPTY, 0)];
    }

    let mut requirements = Requirements::default();
    let mut last = 0;

    for (index, c) in text.chars().enumerate() {
        let Some(class) = CharClass::of(c) else {
            // Alphabet violations are never aggregated
            return vec![Finding::at(
                Violation::InvalidCharacter,
                PASSWORD_INVALID_CHARACTER,
                index,
            )];
        };

        requirements.record(class);
        if index + 1 >= MIN_PASSWORD_LENGTH {
            requirements.has_min_length = true;
        }
        last = index;
    }

    requirements.unmet(last)
}

/// Wrapper type for a password that has been validated.
///
/// Its content never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl TryFrom<String> for Password {
    type Error = Rejected;

    fn try_from(password: String) -> Result<Self, Self::Error> {
        PasswordValidator.validate(&password).into_result()?;
        Ok(Self(password))
    }
}

impl TryFrom<&str> for Password {
    type Error = Rejected;

    fn try_from(password: &str) -> Result<Self, Self::Error> {
        PasswordValidator.validate(password).into_result()?;
        Ok(Self(password.to_owned()))
    }
}

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
