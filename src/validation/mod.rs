//! Root module for the validation system.
//! Exposes the three credential validators and the result type they share.

mod constants;
mod error_messages;
mod result;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use result::{Finding, Rejected, ValidationResult, Violation};
pub use types::{
    Email, EmailValidator, Password, PasswordValidator, Username, UsernameValidator,
};

/// How a validator reacts to a broken rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationPolicy {
    /// Stop at the first broken rule and report only that one.
    FirstFailure,
    /// Finish the scan and report every unmet requirement at once.
    CollectAll,
}

/// A stateless validator for one kind of credential.
///
/// Implementors keep their scan state local to `validate`, so a single
/// validator can be shared freely between threads.
pub trait Validator: Send + Sync {
    /// Name used in log lines
    const NAME: &'static str;
    const POLICY: AggregationPolicy;

    fn validate(&self, text: &str) -> ValidationResult;
}

/// Checks a login name: a letter followed by letters, digits or separators,
/// 4 to 16 characters in total.
pub fn validate_username(text: &str) -> ValidationResult {
    UsernameValidator.validate(text)
}

/// Checks a password against the character-category and length requirements,
/// reporting every unmet requirement at once.
pub fn evaluate_password(text: &str) -> ValidationResult {
    PasswordValidator.validate(text)
}

/// Checks the structure of an email address and its domain extension.
pub fn validate_email(text: &str) -> ValidationResult {
    EmailValidator.validate(text)
}

/// Logs the outcome of a validation without revealing the input itself.
fn log_outcome<V: Validator>(text: &str, result: &ValidationResult) {
    if result.is_valid() {
        log::debug!("{}: accepted input of {} characters", V::NAME, text.chars().count());
    } else {
        log::debug!(
            "{}: rejected input of {} characters ({:?}) at {:?}",
            V::NAME,
            text.chars().count(),
            result.violations(),
            result.error_index()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_policies() {
        assert_eq!(UsernameValidator::POLICY, AggregationPolicy::FirstFailure);
        assert_eq!(EmailValidator::POLICY, AggregationPolicy::FirstFailure);
        assert_eq!(PasswordValidator::POLICY, AggregationPolicy::CollectAll);
    }

    #[test]
    fn test_valid_iff_message_empty() {
        let inputs = vec![
            "",
            " ",
            "alice",
            "a",
            "6Valid_Pass",
            "short1!",
            "Other7ch@r╡",
            "user@example.com",
            "user..name@example.com",
            "user@@example.com",
            "@example.com",
            "user@example.xyz",
        ];

        for input in inputs {
            for result in [
                validate_username(input),
                evaluate_password(input),
                validate_email(input),
            ] {
                assert_eq!(
                    result.is_valid(),
                    result.message().is_empty(),
                    "Invariant broken for input {:?}",
                    input
                );
                assert_eq!(result.is_valid(), result.violations().is_empty());
                assert_eq!(result.input(), input);
            }
        }
    }

    #[test]
    fn test_idempotence() {
        let inputs = vec!["alice_01", "bad pass", "Str0ng#Pass", "user@site.org", "x@y"];

        for input in inputs {
            assert_eq!(validate_username(input), validate_username(input));
            assert_eq!(evaluate_password(input), evaluate_password(input));
            assert_eq!(validate_email(input), validate_email(input));
        }
    }

    #[test]
    fn test_concurrent_calls_do_not_interfere() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    for _ in 0..200 {
                        if i % 2 == 0 {
                            assert!(evaluate_password("6Valid_Pass").is_valid());
                            assert!(validate_email("user@example.com").is_valid());
                        } else {
                            let result = evaluate_password("alllowercase1@");
                            assert_eq!(result.violations(), &[Violation::MissingCategory]);
                            assert!(!validate_email("user@@example.com").is_valid());
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
