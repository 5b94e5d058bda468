//! Request validation from declared field rules.

use crate::error::{AppError, FieldError};
use email_address::{EmailAddress, Options};

/// Syntactic formats a string field may be required to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
}

/// Fallback for a rule with length or format constraints but no `invalid_message`.
pub const DEFAULT_INVALID_MESSAGE: &str = "value is invalid";

/// Constraints for one string field. A field fails with at most one message:
/// `blank_message` when missing or whitespace-only, else `invalid_message` when a
/// length or format constraint is violated.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub blank_message: &'static str,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
    pub invalid_message: Option<&'static str>,
}

/// Collects field failures across a whole payload so callers see every problem at once.
#[derive(Debug, Default)]
pub struct RequestValidator {
    errors: Vec<FieldError>,
}

impl RequestValidator {
    pub fn check(&mut self, rule: &FieldRule, value: Option<&str>) {
        if let Some(message) = validate_field(rule, value) {
            self.errors.push(FieldError {
                field: rule.field,
                message: message.to_string(),
            });
        }
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

fn validate_field(rule: &FieldRule, value: Option<&str>) -> Option<&'static str> {
    let s = match value {
        Some(s) if !s.trim().is_empty() => s,
        _ if rule.required => return Some(rule.blank_message),
        _ => return None,
    };
    let len = s.chars().count();
    let too_short = rule.min_length.is_some_and(|min| len < min);
    let too_long = rule.max_length.is_some_and(|max| len > max);
    let bad_format = rule.format.is_some_and(|format| !matches_format(s, format));
    if too_short || too_long || bad_format {
        return Some(rule.invalid_message.unwrap_or(DEFAULT_INVALID_MESSAGE));
    }
    None
}

fn matches_format(s: &str, format: Format) -> bool {
    match format {
        // Bare addresses only: no `Name <addr>` display form, no `[ip]` domain literal.
        Format::Email => EmailAddress::parse_with_options(
            s,
            Options::default()
                .without_display_text()
                .without_domain_literal(),
        )
        .is_ok(),
    }
}
