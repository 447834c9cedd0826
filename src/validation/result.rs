//! The outcome of a validation call, shared by all three validators.

use derive_more::Display;
use serde::Serialize;
use strum_macros::EnumIter;
use thiserror::Error;

/// The kind of rule an input broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, Display)]
pub enum Violation {
    #[display("empty input")]
    EmptyInput,
    #[display("whitespace not allowed")]
    WhitespaceNotAllowed,
    #[display("invalid character")]
    InvalidCharacter,
    #[display("length out of range")]
    LengthOutOfRange,
    #[display("missing character category")]
    MissingCategory,
    #[display("structural violation")]
    StructuralViolation,
    #[display("unsupported extension")]
    UnsupportedExtension,
}

/// One broken rule, as found by a scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub violation: Violation,
    pub message: &'static str,
    pub index: Option<usize>,
}

impl Finding {
    pub fn new(violation: Violation, message: &'static str, index: Option<usize>) -> Self {
        Self {
            violation,
            message,
            index,
        }
    }

    /// Shorthand for a finding blamed on the character at `index`
    pub fn at(violation: Violation, message: &'static str, index: usize) -> Self {
        Self::new(violation, message, Some(index))
    }
}

/// Result of validating one piece of user input.
///
/// A result is valid exactly when its message is empty. It can only be built
/// through [`ValidationResult::valid`] or [`ValidationResult::from_findings`],
/// so that invariant cannot be broken by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationResult {
    input: String,
    message: String,
    error_index: Option<usize>,
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// A result reporting no violation
    pub fn valid(input: &str) -> Self {
        Self {
            input: input.to_owned(),
            message: String::new(),
            error_index: None,
            violations: Vec::new(),
        }
    }

    /// Builds a result from the findings of a scan, in the order they were found.
    ///
    /// Each finding contributes one line to the message. The error index is the
    /// one of the first finding. No findings means a valid result.
    pub fn from_findings(input: &str, findings: Vec<Finding>) -> Self {
        let Some(first) = findings.first() else {
            return Self::valid(input);
        };
        let error_index = first.index;

        let message = findings
            .iter()
            .map(|finding| finding.message)
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            input: input.to_owned(),
            message,
            error_index,
            violations: findings.into_iter().map(|finding| finding.violation).collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.message.is_empty()
    }

    /// Every violation found, one sentence per line. Empty on success.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Character offset (not byte offset) of the character blamed for the
    /// failure, if one can be blamed.
    pub fn error_index(&self) -> Option<usize> {
        self.error_index
    }

    /// The text that was validated, unchanged
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Turns this result into a `Result`, for callers that only care about
    /// success.
    pub fn into_result(self) -> Result<(), Rejected> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Rejected(self))
        }
    }
}

/// Error returned when building a validated input from rejected text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.message())]
pub struct Rejected(ValidationResult);

impl Rejected {
    pub fn result(&self) -> &ValidationResult {
        &self.0
    }

    pub fn into_inner(self) -> ValidationResult {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_valid_result() {
        let result = ValidationResult::valid("alice");

        assert!(result.is_valid());
        assert_eq!(result.message(), "");
        assert_eq!(result.error_index(), None);
        assert_eq!(result.input(), "alice");
        assert!(result.violations().is_empty());
    }

    #[test]
    fn test_no_findings_is_valid() {
        let result = ValidationResult::from_findings("bob", Vec::new());
        assert_eq!(result, ValidationResult::valid("bob"));
    }

    #[test]
    fn test_findings_are_joined_in_order() {
        let result = ValidationResult::from_findings(
            "abc",
            vec![
                Finding::at(Violation::MissingCategory, "First clause.", 2),
                Finding::at(Violation::LengthOutOfRange, "Second clause.", 2),
            ],
        );

        assert!(!result.is_valid());
        assert_eq!(result.message(), "First clause.\nSecond clause.");
        assert_eq!(result.error_index(), Some(2));
        assert_eq!(
            result.violations(),
            &[Violation::MissingCategory, Violation::LengthOutOfRange]
        );
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::valid("ok").into_result().is_ok());

        let rejected = ValidationResult::from_findings(
            "",
            vec![Finding::at(Violation::EmptyInput, "Nothing here.", 0)],
        )
        .into_result()
        .unwrap_err();

        assert_eq!(rejected.to_string(), "Nothing here.");
        assert_eq!(rejected.result().violations(), &[Violation::EmptyInput]);
    }

    #[test]
    fn test_violation_display() {
        for violation in Violation::iter() {
            assert!(
                !violation.to_string().is_empty(),
                "Violation {:?} has no description",
                violation
            );
        }
        assert_eq!(Violation::EmptyInput.to_string(), "empty input");
    }

    #[test]
    fn test_serialized_shape() {
        let result = ValidationResult::from_findings(
            "a b",
            vec![Finding::at(Violation::WhitespaceNotAllowed, "No spaces.", 1)],
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["input"], "a b");
        assert_eq!(json["message"], "No spaces.");
        assert_eq!(json["error_index"], 1);
        assert_eq!(json["violations"][0], "WhitespaceNotAllowed");

        let json = serde_json::to_value(ValidationResult::valid("x")).unwrap();
        assert!(json["error_index"].is_null());
    }
}
