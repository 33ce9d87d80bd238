//! Registration form state machine.
//!
//! Accumulates field input, validates on submit, reports per-field errors,
//! and gates submission so the external acceptance call fires at most once
//! per successful submit. The one-shot guarantee is structural (a phase
//! guard), not timing-based.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of a registration submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Settled,
}

impl FormPhase {
    /// Returns true if field edits are accepted in this phase.
    pub fn accepts_input(&self) -> bool {
        matches!(self, FormPhase::Editing)
    }

    /// Validates a transition from this phase to another.
    ///
    /// Valid transitions:
    /// - Editing -> Submitting (validation passed)
    /// - Submitting -> Settled (acceptance succeeded)
    /// - Submitting -> Editing (acceptance failed)
    pub fn can_transition_to(&self, target: &FormPhase) -> bool {
        use FormPhase::*;
        matches!(
            (self, target),
            (Editing, Submitting) | (Submitting, Settled) | (Submitting, Editing)
        )
    }

    /// Settled is terminal; the host navigates away afterwards.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FormPhase::Settled)
    }
}

/// The validatable fields, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort,
    Mismatch,
}

impl FieldError {
    /// The inline message shown next to the offending field.
    pub fn message(&self, field: RegistrationField) -> &'static str {
        use FieldError::*;
        use RegistrationField::*;
        match (field, self) {
            (FirstName, Required) => "First name is required",
            (LastName, Required) => "Last name is required",
            (Email, Required) => "Email is required",
            (Email, InvalidFormat) => "Please enter a valid email",
            (Password, Required) => "Password is required",
            (Password, TooShort) => "Password must be at least 8 characters",
            (ConfirmPassword, Mismatch) => "Passwords do not match",
            // Combinations validate() never produces.
            _ => "Invalid value",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldError::Required => "required",
            FieldError::InvalidFormat => "invalid format",
            FieldError::TooShort => "too short",
            FieldError::Mismatch => "mismatch",
        };
        write!(f, "{}", s)
    }
}

/// One optional error slot per known field. A `None` slot means the field
/// is currently valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub first_name: Option<FieldError>,
    pub last_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl FieldErrors {
    /// The error recorded for `field`, if any.
    pub fn get(&self, field: RegistrationField) -> Option<FieldError> {
        match field {
            RegistrationField::FirstName => self.first_name,
            RegistrationField::LastName => self.last_name,
            RegistrationField::Email => self.email,
            RegistrationField::Password => self.password,
            RegistrationField::ConfirmPassword => self.confirm_password,
        }
    }

    fn slot(&mut self, field: RegistrationField) -> &mut Option<FieldError> {
        match field {
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// True when every field is valid.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Raw form input as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Sanitized payload handed to the acceptance service: confirmation and
/// errors are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// The registration form state machine.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    input: RegistrationInput,
    errors: FieldErrors,
    submission_error: Option<String>,
    phase: FormPhase,
    show_password: bool,
    show_confirm_password: bool,
}

impl RegistrationForm {
    /// Creates an empty form in the editing phase.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Form-level error from a failed acceptance call, if any.
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    pub fn confirm_password_visible(&self) -> bool {
        self.show_confirm_password
    }

    /// Flips password visibility. Pure display state, never validated.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Flips confirmation visibility, independent of the password toggle.
    pub fn toggle_confirm_password_visibility(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    /// Updates `field` with `value` and eagerly clears any error recorded
    /// for it; errors vanish as soon as the user edits, not on the next
    /// validation. Ignored unless the form is in the editing phase, so an
    /// in-flight submission payload can never change underneath the call.
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        if !self.phase.accepts_input() {
            return;
        }
        let value = value.into();
        match field {
            RegistrationField::FirstName => self.input.first_name = value,
            RegistrationField::LastName => self.input.last_name = value,
            RegistrationField::Email => self.input.email = value,
            RegistrationField::Password => self.input.password = value,
            RegistrationField::ConfirmPassword => self.input.confirm_password = value,
        }
        *self.errors.slot(field) = None;
    }

    /// Runs every field rule against the current input, records the
    /// resulting error set, and returns true when it is empty. Total and
    /// deterministic; no rule short-circuits another field's checks.
    pub fn validate(&mut self) -> bool {
        self.errors = compute_errors(&self.input);
        self.errors.is_empty()
    }

    /// Attempts to enter the submitting phase.
    ///
    /// Returns the sanitized payload exactly once per successful submit:
    /// a form that is already submitting (or settled) yields `None`, and a
    /// form that fails validation stays in editing with its errors visible.
    pub fn begin_submit(&mut self) -> Option<RegistrationData> {
        if self.phase != FormPhase::Editing || !self.validate() {
            return None;
        }
        self.phase = FormPhase::Submitting;
        self.submission_error = None;
        Some(RegistrationData {
            first_name: self.input.first_name.clone(),
            last_name: self.input.last_name.clone(),
            email: self.input.email.clone(),
            password: self.input.password.clone(),
        })
    }

    /// Marks the submission accepted. Only meaningful while submitting.
    pub fn settle(&mut self) {
        if self.phase.can_transition_to(&FormPhase::Settled) {
            self.phase = FormPhase::Settled;
        }
    }

    /// Returns the form to editing after a failed acceptance call,
    /// surfacing `message` as a form-level submission error.
    pub fn reject(&mut self, message: impl Into<String>) {
        if self.phase.can_transition_to(&FormPhase::Editing) {
            self.phase = FormPhase::Editing;
            self.submission_error = Some(message.into());
        }
    }
}

fn compute_errors(input: &RegistrationInput) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if input.first_name.trim().is_empty() {
        errors.first_name = Some(FieldError::Required);
    }
    if input.last_name.trim().is_empty() {
        errors.last_name = Some(FieldError::Required);
    }
    if input.email.trim().is_empty() {
        errors.email = Some(FieldError::Required);
    } else if !looks_like_email(&input.email) {
        errors.email = Some(FieldError::InvalidFormat);
    }
    if input.password.is_empty() {
        errors.password = Some(FieldError::Required);
    } else if input.password.chars().count() < 8 {
        // Unicode scalar values, not bytes.
        errors.password = Some(FieldError::TooShort);
    }
    // Checked even when the password itself is already in error.
    if input.confirm_password != input.password {
        errors.confirm_password = Some(FieldError::Mismatch);
    }

    errors
}

/// Minimal structural email check: some non-whitespace run must contain
/// "@" with at least one character before it, then at least one character,
/// then ".", then at least one character. Not RFC validation.
fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        let bytes = token.as_bytes();
        bytes.iter().enumerate().any(|(at, &b)| {
            b == b'@'
                && at >= 1
                && bytes
                    .iter()
                    .enumerate()
                    .any(|(dot, &c)| c == b'.' && dot >= at + 2 && dot + 1 < bytes.len())
        })
    })
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;
