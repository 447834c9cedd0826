//! Login name validation.
//!
//! A username starts with an ASCII letter, is 4 to 16 characters long, and
//! continues with letters, digits or one of the allowed separators. The
//! checks run in a fixed order and the first broken rule is reported.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::validation::error_messages::*;
use crate::validation::{
    log_outcome, AggregationPolicy, Finding, Rejected, ValidationResult, Validator, Violation,
    MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH, USERNAME_SEPARATORS,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct UsernameValidator;

impl Validator for UsernameValidator {
    const NAME: &'static str = "username";
    const POLICY: AggregationPolicy = AggregationPolicy::FirstFailure;

    fn validate(&self, text: &str) -> ValidationResult {
        let chars: Vec<char> = text.chars().collect();

        let result = match scan(&chars) {
            Ok(()) => ValidationResult::valid(text),
            Err(finding) => ValidationResult::from_findings(text, vec![finding]),
        };

        log_outcome::<Self>(text, &result);
        result
    }
}

fn scan(chars: &[char]) -> Result<(), Finding> {
    let Some(&first) = chars.first() else {
        return Err(Finding::at(Violation::EmptyInput, USERNAME_EMPTY, 0));
    };

    if !first.is_ascii_alphabetic() {
        return Err(Finding::at(
            Violation::InvalidCharacter,
            USERNAME_FIRST_CHARACTER,
            0,
        ));
    }

    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&chars.len()) {
        return Err(Finding::at(
            Violation::LengthOutOfRange,
            USERNAME_LENGTH,
            chars.len() - 1,
        ));
    }

    match chars
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, &c)| !is_body_character(c))
    {
        Some((index, _)) => Err(Finding::at(
            Violation::InvalidCharacter,
            USERNAME_INVALID_CHARACTER,
            index,
        )),
        None => Ok(()),
    }
}

fn is_body_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || USERNAME_SEPARATORS.contains(&c)
}

/// Wrapper type for a username that has been validated
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl TryFrom<String> for Username {
    type Error = Rejected;

    fn try_from(username: String) -> Result<Self, Self::Error> {
        UsernameValidator.validate(&username).into_result()?;
        Ok(Self(username))
    }
}

impl TryFrom<&str> for Username {
    type Error = Rejected;

    fn try_from(username: &str) -> Result<Self, Self::Error> {
        UsernameValidator.validate(username).into_result()?;
        Ok(Self(username.to_owned()))
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
