//! Email address validation.
//!
//! A first pass over the address rejects whitespace and records where the
//! `@` and doubled dots are. Structural checks then run in a fixed order on
//! what was recorded, and the first failing one is reported. Only a
//! structurally sound address is matched against the accepted extensions.

use derive_more::Display;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::error_messages::*;
use crate::validation::{
    log_outcome, AggregationPolicy, Finding, Rejected, ValidationResult, Validator, Violation,
    ACCEPTED_EMAIL_EXTENSIONS,
};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[A-Za-z0-9.\-]+@(?:[A-Za-z0-9\-]+\.)+(?i-u:{})$",
        ACCEPTED_EMAIL_EXTENSIONS.join("|")
    ))
    .expect("Failed to compile email regex")
});

/// What the first pass saw
#[derive(Debug, Default)]
struct Scan {
    at_count: usize,
    first_at: Option<usize>,
    first_double_dot: Option<usize>,
}

impl Scan {
    fn run(text: &str) -> Result<Self, Finding> {
        let mut scan = Scan::default();
        let mut previous = None;

        for (index, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                return Err(Finding::at(
                    Violation::WhitespaceNotAllowed,
                    EMAIL_WHITESPACE,
                    index,
                ));
            }
            if c == '@' {
                scan.at_count += 1;
                scan.first_at.get_or_insert(index);
            }
            if c == '.' && previous == Some('.') && scan.first_double_dot.is_none() {
                scan.first_double_dot = Some(index - 1);
            }
            previous = Some(c);
        }

        Ok(scan)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl Validator for EmailValidator {
    const NAME: &'static str = "email";
    const POLICY: AggregationPolicy = AggregationPolicy::FirstFailure;

    fn validate(&self, text: &str) -> ValidationResult {
        let result = match check(text) {
            Ok(()) => ValidationResult::valid(text),
            Err(finding) => ValidationResult::from_findings(text, vec![finding]),
        };

        log_outcome::<Self>(text, &result);
        result
    }
}

fn check(text: &str) -> Result<(), Finding> {
    if text.trim().is_empty() {
        return Err(Finding::at(Violation::EmptyInput, EMAIL_EMPTY, 0));
    }

    let scan = Scan::run(text)?;
    trace!("email: first pass done, {} '@' found", scan.at_count);

    if let Some(index) = scan.first_double_dot {
        return Err(structural(EMAIL_CONSECUTIVE_DOTS, index));
    }

    let at = single_at(&scan)?;
    let (local, domain) = split_parts(text, at)?;
    check_local_part(local)?;
    let labels = domain_labels(domain, at + 1)?;
    check_domain_name(&labels, at + 1)?;
    trace!("email: structure accepted, checking extension");

    check_extension(text, &labels)
}

fn structural(message: &'static str, index: usize) -> Finding {
    Finding::at(Violation::StructuralViolation, message, index)
}

/// Returns the character index of the only `@`
fn single_at(scan: &Scan) -> Result<usize, Finding> {
    match (scan.at_count, scan.first_at) {
        (1, Some(index)) => Ok(index),
        (0, _) | (_, None) => Err(structural(EMAIL_MISSING_AT, 0)),
        (_, Some(index)) => Err(structural(EMAIL_MULTIPLE_AT, index)),
    }
}

fn split_parts(text: &str, at: usize) -> Result<(&str, &str), Finding> {
    let (local, domain) = text
        .split_once('@')
        .ok_or_else(|| structural(EMAIL_MISSING_AT, 0))?;

    if local.is_empty() {
        return Err(structural(EMAIL_EMPTY_LOCAL_PART, 0));
    }
    if domain.is_empty() {
        return Err(structural(EMAIL_EMPTY_DOMAIN, at + 1));
    }
    Ok((local, domain))
}

fn check_local_part(local: &str) -> Result<(), Finding> {
    let is_separator = |c: char| c == '.' || c == '-';

    if local.starts_with(is_separator) || local.ends_with(is_separator) {
        return Err(structural(EMAIL_LOCAL_PART_EDGE, 0));
    }
    Ok(())
}

/// A domain label and the character index it starts at
#[derive(Debug, Clone, Copy)]
struct Label<'a> {
    text: &'a str,
    start: usize,
}

fn domain_labels(domain: &str, domain_start: usize) -> Result<Vec<Label<'_>>, Finding> {
    let mut labels = Vec::new();
    let mut start = domain_start;

    for text in domain.split('.') {
        if text.is_empty() {
            return Err(structural(EMAIL_EMPTY_LABEL, start));
        }
        if text.starts_with('-') {
            return Err(structural(EMAIL_LABEL_HYPHEN, start));
        }
        if text.ends_with('-') {
            return Err(structural(EMAIL_LABEL_HYPHEN, start + text.chars().count() - 1));
        }

        labels.push(Label { text, start });
        start += text.chars().count() + 1;
    }

    Ok(labels)
}

fn check_domain_name(labels: &[Label<'_>], domain_start: usize) -> Result<(), Finding> {
    match labels {
        // Labels are never empty here, so a name before the extension is enough
        [.., _name, _extension] => Ok(()),
        _ => Err(structural(EMAIL_MISSING_DOMAIN_NAME, domain_start)),
    }
}

fn check_extension(text: &str, labels: &[Label<'_>]) -> Result<(), Finding> {
    if EMAIL_REGEX.is_match(text) {
        return Ok(());
    }

    let index = labels.last().map(|label| label.start).unwrap_or(0);
    Err(Finding::at(
        Violation::UnsupportedExtension,
        EMAIL_UNSUPPORTED_EXTENSION,
        index,
    ))
}

/// A validated email address, kept exactly as it was typed.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = Rejected;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        EmailValidator.validate(&email).into_result()?;
        Ok(Self(email))
    }
}

impl TryFrom<&str> for Email {
    type Error = Rejected;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        EmailValidator.validate(email).into_result()?;
        Ok(Self(email.to_owned()))
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl Email {
    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
