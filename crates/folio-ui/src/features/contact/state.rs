//! Contact form state.
//!
//! # Design
//! - Field values are never stored here; callers pass a fresh [`ContactFields`] snapshot.
//! - Each field owns one message slot holding at most one error.
//! - Overall validity is derived on every submit and never kept.

use crate::features::contact::logic::{RULES, ValidationError, validate_field};

/// Delay before a simulated submission completes.
pub const SUBMIT_DELAY_MS: u32 = 600;
/// Text shown in the success slot while the simulated submission is pending.
pub const VALIDATING_TEXT: &str = "Validating…";
/// Text shown in the success slot once the simulated submission completes.
pub const SENT_TEXT: &str = "Thanks! Your message has been sent.";

/// Contact form controls, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Full name text input.
    Name,
    /// Email text input.
    Email,
    /// Password input.
    Password,
    /// Password confirmation input.
    Confirm,
    /// Terms-of-service checkbox.
    Terms,
}

impl Field {
    /// All fields in display order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Name,
            Self::Email,
            Self::Password,
            Self::Confirm,
            Self::Terms,
        ]
    }

    /// Position of the field in [`Field::all`] and the rule table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::Confirm => 3,
            Self::Terms => 4,
        }
    }

    /// DOM id of the control.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Name => "contact-name",
            Self::Email => "contact-email",
            Self::Password => "contact-password",
            Self::Confirm => "contact-confirm",
            Self::Terms => "contact-terms",
        }
    }

    /// Visible label for the control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Confirm => "Confirm password",
            Self::Terms => "I agree to the Terms",
        }
    }
}

/// Values read from the live controls at the moment of a check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    /// Name input value.
    pub name: String,
    /// Email input value.
    pub email: String,
    /// Password input value.
    pub password: String,
    /// Confirmation input value.
    pub confirm: String,
    /// Whether the terms checkbox is checked.
    pub terms: bool,
}

/// Progress of the simulated submission, rendered in the success slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing to show.
    #[default]
    Idle,
    /// Submit accepted; waiting for the simulated delay.
    Validating,
    /// Simulated submission finished.
    Sent,
}

impl SubmitStatus {
    /// Success slot text for the status.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Validating => VALIDATING_TEXT,
            Self::Sent => SENT_TEXT,
        }
    }
}

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed; the simulated submission should be scheduled.
    Accepted,
    /// At least one rule failed; slots describe which.
    Rejected,
}

/// What the view does when a simulated submission timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Empty every control; the final success text is now showing.
    Restore,
    /// Nothing left to do for this timer.
    Noop,
}

/// Message slots plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    slots: [Option<ValidationError>; 5],
    status: SubmitStatus,
    pending: u32,
}

impl ContactForm {
    /// Current error for a field, if any.
    #[must_use]
    pub const fn error(&self, field: Field) -> Option<ValidationError> {
        self.slots[field.index()]
    }

    /// Slot text for a field; empty when the field passed its last check.
    #[must_use]
    pub fn message(&self, field: Field) -> String {
        self.error(field)
            .map(|err| err.to_string())
            .unwrap_or_default()
    }

    /// Current submission status.
    #[must_use]
    pub const fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Whether any slot currently holds a message.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Re-check one field and overwrite only its slot.
    ///
    /// Returns whether the field passed.
    pub fn check_field(&mut self, field: Field, fields: &ContactFields) -> bool {
        let result = validate_field(field, fields);
        self.slots[field.index()] = result.err();
        result.is_ok()
    }

    /// Clear every slot, re-check every rule and report whether the form may be sent.
    pub fn submit(&mut self, fields: &ContactFields) -> SubmitOutcome {
        self.clear();
        let mut valid = true;
        for rule in &RULES {
            valid &= self.check_field(rule.field, fields);
        }
        if valid {
            self.status = SubmitStatus::Validating;
            self.pending = self.pending.saturating_add(1);
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected
        }
    }

    /// Number of accepted submits whose timer has not fired yet.
    #[must_use]
    pub const fn pending(&self) -> u32 {
        self.pending
    }

    /// Complete one accepted submission when its timer fires.
    ///
    /// A reset or a rejected submit in the meantime does not cancel it: the final
    /// text is written regardless. Only the first of several overlapping timers
    /// asks for the controls to be emptied.
    pub fn finish_submission(&mut self) -> Completion {
        if self.pending == 0 {
            return Completion::Noop;
        }
        self.pending -= 1;
        if self.status == SubmitStatus::Sent {
            return Completion::Noop;
        }
        self.status = SubmitStatus::Sent;
        Completion::Restore
    }

    /// Clear every message slot and the success slot. Scheduled timers still fire.
    pub fn clear(&mut self) {
        self.slots = [None; 5];
        self.status = SubmitStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            password: "cobol1959".to_string(),
            confirm: "cobol1959".to_string(),
            terms: true,
        }
    }

    #[test]
    fn name_slot_tracks_trimmed_length() {
        let mut form = ContactForm::default();
        let mut fields = ContactFields {
            name: " x ".to_string(),
            ..ContactFields::default()
        };
        assert!(!form.check_field(Field::Name, &fields));
        assert_eq!(
            form.message(Field::Name),
            "Please enter your full name (min 2 chars)."
        );

        fields.name = "xy".to_string();
        assert!(form.check_field(Field::Name, &fields));
        assert!(form.message(Field::Name).is_empty());
    }

    #[test]
    fn live_check_touches_only_its_slot() {
        let mut form = ContactForm::default();
        let fields = ContactFields::default();
        form.check_field(Field::Email, &fields);
        assert!(form.error(Field::Email).is_some());
        for field in [Field::Name, Field::Password, Field::Confirm, Field::Terms] {
            assert!(form.error(field).is_none());
        }
    }

    #[test]
    fn confirm_is_checked_against_current_password() {
        let mut form = ContactForm::default();
        let mut fields = valid_fields();
        assert!(form.check_field(Field::Confirm, &fields));

        fields.password = "cobol1960".to_string();
        assert!(form.check_field(Field::Password, &fields));
        assert!(form.error(Field::Confirm).is_none());

        assert!(!form.check_field(Field::Confirm, &fields));
        assert_eq!(form.message(Field::Confirm), "Passwords do not match.");
    }

    #[test]
    fn valid_submit_moves_through_statuses() {
        let mut form = ContactForm::default();
        assert_eq!(form.status().text(), "");

        assert_eq!(form.submit(&valid_fields()), SubmitOutcome::Accepted);
        assert!(!form.has_errors());
        assert_eq!(form.status(), SubmitStatus::Validating);
        assert_eq!(form.status().text(), VALIDATING_TEXT);

        assert_eq!(form.finish_submission(), Completion::Restore);
        assert_eq!(form.status().text(), SENT_TEXT);
        assert_eq!(form.pending(), 0);
    }

    #[test]
    fn invalid_submit_fills_slots_and_leaves_success_empty() {
        let mut form = ContactForm::default();
        let fields = ContactFields {
            name: "A".to_string(),
            email: "a.b.com".to_string(),
            password: "abcdefgh".to_string(),
            confirm: "abcdefgh".to_string(),
            terms: false,
        };
        assert_eq!(form.submit(&fields), SubmitOutcome::Rejected);
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Email).is_some());
        assert!(form.error(Field::Password).is_some());
        assert!(form.error(Field::Confirm).is_none());
        assert_eq!(form.error(Field::Terms), Some(ValidationError::TermsNotAccepted));
        assert_eq!(form.pending(), 0);
        assert_eq!(form.finish_submission(), Completion::Noop);
        assert_eq!(form.status().text(), "");
    }

    #[test]
    fn submit_clears_stale_messages_and_previous_success() {
        let mut form = ContactForm::default();
        form.check_field(Field::Name, &ContactFields::default());
        assert!(form.has_errors());
        assert_eq!(form.submit(&valid_fields()), SubmitOutcome::Accepted);
        assert_eq!(form.finish_submission(), Completion::Restore);

        let mut fields = valid_fields();
        fields.terms = false;
        assert_eq!(form.submit(&fields), SubmitOutcome::Rejected);
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert!(form.error(Field::Name).is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = ContactForm::default();
        form.submit(&ContactFields::default());
        assert!(form.has_errors());
        form.clear();
        assert_eq!(form, ContactForm::default());

        form.submit(&valid_fields());
        form.clear();
        assert_eq!(form.status().text(), "");
        assert_eq!(form.pending(), 1);
    }

    #[test]
    fn reset_during_delay_does_not_cancel_completion() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(&valid_fields()), SubmitOutcome::Accepted);
        form.clear();
        assert_eq!(form.status(), SubmitStatus::Idle);

        assert_eq!(form.finish_submission(), Completion::Restore);
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert_eq!(form.status().text(), SENT_TEXT);
    }

    #[test]
    fn rejected_resubmit_during_delay_does_not_cancel_completion() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(&valid_fields()), SubmitOutcome::Accepted);

        let mut fields = valid_fields();
        fields.email = "a@b".to_string();
        assert_eq!(form.submit(&fields), SubmitOutcome::Rejected);
        assert_eq!(form.status().text(), "");

        assert_eq!(form.finish_submission(), Completion::Restore);
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert_eq!(form.message(Field::Email), "Enter a valid email address.");
    }

    #[test]
    fn overlapping_submits_restore_once() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(&valid_fields()), SubmitOutcome::Accepted);
        assert_eq!(form.submit(&valid_fields()), SubmitOutcome::Accepted);
        assert_eq!(form.pending(), 2);

        assert_eq!(form.finish_submission(), Completion::Restore);
        assert_eq!(form.finish_submission(), Completion::Noop);
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert_eq!(form.pending(), 0);
        assert_eq!(form.finish_submission(), Completion::Noop);
    }
}
