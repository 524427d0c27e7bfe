//! Contact form rules.
//!
//! # Design
//! - Each field has exactly one predicate and one failure message.
//! - Predicates are pure and read only the snapshot they are given.
//! - Rules are iterated as a table; no field gets a hand-written branch.

use crate::features::contact::state::{ContactFields, Field};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum length of a trimmed name, in UTF-16 code units.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum length of a password, in UTF-16 code units.
pub const PASSWORD_MIN_CHARS: usize = 8;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").ok());

/// Field-scoped validation failure. The display text is what the message slot shows.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Trimmed name shorter than [`NAME_MIN_CHARS`].
    #[error("Please enter your full name (min 2 chars).")]
    NameTooShort,
    /// Email does not look like `local@domain.tld`.
    #[error("Enter a valid email address.")]
    InvalidEmail,
    /// Password shorter than [`PASSWORD_MIN_CHARS`] or without a digit.
    #[error("Password must be ≥8 chars and include a number.")]
    WeakPassword,
    /// Confirmation differs from the password.
    #[error("Passwords do not match.")]
    PasswordMismatch,
    /// Terms checkbox left unchecked.
    #[error("You must agree to the Terms.")]
    TermsNotAccepted,
}

/// A single row of the rule table.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Field the rule applies to.
    pub field: Field,
    /// Predicate over the current snapshot.
    pub check: fn(&ContactFields) -> bool,
    /// Failure reported when the predicate does not hold.
    pub error: ValidationError,
}

/// Rule table in display order.
pub const RULES: [Rule; 5] = [
    Rule {
        field: Field::Name,
        check: check_name,
        error: ValidationError::NameTooShort,
    },
    Rule {
        field: Field::Email,
        check: check_email,
        error: ValidationError::InvalidEmail,
    },
    Rule {
        field: Field::Password,
        check: check_password,
        error: ValidationError::WeakPassword,
    },
    Rule {
        field: Field::Confirm,
        check: check_confirm,
        error: ValidationError::PasswordMismatch,
    },
    Rule {
        field: Field::Terms,
        check: check_terms,
        error: ValidationError::TermsNotAccepted,
    },
];

fn check_name(fields: &ContactFields) -> bool {
    name_is_valid(&fields.name)
}

fn check_email(fields: &ContactFields) -> bool {
    email_is_valid(&fields.email)
}

fn check_password(fields: &ContactFields) -> bool {
    password_is_valid(&fields.password)
}

fn check_confirm(fields: &ContactFields) -> bool {
    confirm_matches(&fields.password, &fields.confirm)
}

const fn check_terms(fields: &ContactFields) -> bool {
    fields.terms
}

/// Look up the rule for a field.
#[must_use]
pub fn rule_for(field: Field) -> &'static Rule {
    &RULES[field.index()]
}

/// Evaluate the rule for `field` against a snapshot.
///
/// # Errors
/// Returns the field's [`ValidationError`] when its predicate fails.
pub fn validate_field(field: Field, fields: &ContactFields) -> Result<(), ValidationError> {
    let rule = rule_for(field);
    if (rule.check)(fields) {
        Ok(())
    } else {
        Err(rule.error)
    }
}

/// Length as the browser reports it for an input value.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Name must have at least two characters once surrounding whitespace is removed.
#[must_use]
pub fn name_is_valid(value: &str) -> bool {
    utf16_len(value.trim()) >= NAME_MIN_CHARS
}

/// Loose `local@domain.tld` check with a TLD of at least two characters.
#[must_use]
pub fn email_is_valid(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

/// Password needs eight characters and at least one digit.
#[must_use]
pub fn password_is_valid(value: &str) -> bool {
    utf16_len(value) >= PASSWORD_MIN_CHARS && value.chars().any(|c| c.is_ascii_digit())
}

/// Confirmation must equal the password exactly.
#[must_use]
pub fn confirm_matches(password: &str, confirm: &str) -> bool {
    password == confirm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.org".to_string(),
            password: "engine42x".to_string(),
            confirm: "engine42x".to_string(),
            terms: true,
        }
    }

    #[test]
    fn name_requires_two_trimmed_chars() {
        assert!(!name_is_valid(""));
        assert!(!name_is_valid("a"));
        assert!(!name_is_valid("   a   "));
        assert!(name_is_valid("Al"));
        assert!(name_is_valid("  Jo "));
        assert!(name_is_valid("Zoë"));
    }

    #[test]
    fn email_examples() {
        assert!(email_is_valid("a@b.co"));
        assert!(email_is_valid("First.Last@Example.COM"));
        assert!(!email_is_valid("a@b"));
        assert!(!email_is_valid("a.b.com"));
        assert!(!email_is_valid("a@b.c"));
        assert!(!email_is_valid("a b@c.de"));
        assert!(!email_is_valid("a@@b.de"));
        assert!(!email_is_valid(""));
    }

    #[test]
    fn password_examples() {
        assert!(password_is_valid("abcdefg1"));
        assert!(!password_is_valid("abcdefgh"));
        assert!(!password_is_valid("ab1"));
        assert!(!password_is_valid("1234567"));
        assert!(password_is_valid("12345678"));
    }

    #[test]
    fn lengths_count_utf16_units() {
        // Each emoji is two UTF-16 code units.
        assert!(password_is_valid("😀😀😀1a"));
        assert!(!password_is_valid("😀1a"));
        assert!(name_is_valid(" 😀 "));
        assert!(!name_is_valid(" é "));
    }

    #[test]
    fn confirm_is_exact() {
        assert!(confirm_matches("abcdefg1", "abcdefg1"));
        assert!(!confirm_matches("abcdefg1", "abcdefg1 "));
        assert!(!confirm_matches("abcdefg1", "ABCDEFG1"));
    }

    #[test]
    fn rule_table_is_indexed_by_field() {
        for field in Field::all() {
            assert_eq!(rule_for(field).field, field);
        }
    }

    #[test]
    fn validate_field_reports_the_field_error() {
        let mut fields = valid_fields();
        for field in Field::all() {
            assert_eq!(validate_field(field, &fields), Ok(()));
        }
        fields.terms = false;
        fields.confirm = "different1".to_string();
        assert_eq!(
            validate_field(Field::Terms, &fields),
            Err(ValidationError::TermsNotAccepted)
        );
        assert_eq!(
            validate_field(Field::Confirm, &fields),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn error_text_matches_slot_copy() {
        assert_eq!(
            ValidationError::NameTooShort.to_string(),
            "Please enter your full name (min 2 chars)."
        );
        assert_eq!(
            ValidationError::WeakPassword.to_string(),
            "Password must be ≥8 chars and include a number."
        );
        assert_eq!(
            ValidationError::TermsNotAccepted.to_string(),
            "You must agree to the Terms."
        );
    }
}
