use super::*;
use proptest::prelude::*;

fn filled_form() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.set_field(RegistrationField::FirstName, "John");
    form.set_field(RegistrationField::LastName, "Doe");
    form.set_field(RegistrationField::Email, "john@x.com");
    form.set_field(RegistrationField::Password, "longenough1");
    form.set_field(RegistrationField::ConfirmPassword, "longenough1");
    form
}

#[test]
fn new_form_is_editing_with_no_errors() {
    let form = RegistrationForm::new();
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.errors().is_empty());
    assert!(form.submission_error().is_none());
}

#[test]
fn validate_reports_every_failing_field_independently() {
    let mut form = RegistrationForm::new();
    form.set_field(RegistrationField::FirstName, "");
    form.set_field(RegistrationField::LastName, "Doe");
    form.set_field(RegistrationField::Email, "bad");
    form.set_field(RegistrationField::Password, "short");
    form.set_field(RegistrationField::ConfirmPassword, "short2");

    assert!(!form.validate());
    let errors = form.errors();
    assert_eq!(errors.first_name, Some(FieldError::Required));
    assert_eq!(errors.last_name, None);
    assert_eq!(errors.email, Some(FieldError::InvalidFormat));
    assert_eq!(errors.password, Some(FieldError::TooShort));
    assert_eq!(errors.confirm_password, Some(FieldError::Mismatch));
}

#[test]
fn validate_passes_on_complete_input() {
    let mut form = filled_form();
    assert!(form.validate());
    assert!(form.errors().is_empty());
}

#[test]
fn whitespace_only_names_are_required() {
    let mut form = filled_form();
    form.set_field(RegistrationField::FirstName, "   ");
    assert!(!form.validate());
    assert_eq!(form.errors().first_name, Some(FieldError::Required));
}

#[test]
fn email_structural_check_accepts_and_rejects() {
    let cases = [
        ("john@x.com", true),
        ("a@b.c", true),
        ("no-at-sign.com", false),
        ("@x.com", false),
        ("john@.com", false),
        ("john@x.", false),
        ("john@xcom", false),
        // Substring match; surrounding text does not invalidate a token.
        ("say hi to john@x.com", true),
    ];
    for (email, valid) in cases {
        let mut form = filled_form();
        form.set_field(RegistrationField::Email, email);
        form.validate();
        assert_eq!(
            form.errors().email.is_none(),
            valid,
            "email case failed: {:?}",
            email
        );
    }
}

#[test]
fn empty_email_is_required_not_invalid() {
    let mut form = filled_form();
    form.set_field(RegistrationField::Email, "  ");
    form.validate();
    assert_eq!(form.errors().email, Some(FieldError::Required));
}

#[test]
fn password_of_exactly_eight_chars_is_accepted() {
    let mut form = filled_form();
    form.set_field(RegistrationField::Password, "12345678");
    form.set_field(RegistrationField::ConfirmPassword, "12345678");
    assert!(form.validate());
}

#[test]
fn mismatch_is_checked_even_when_password_is_in_error() {
    let mut form = filled_form();
    form.set_field(RegistrationField::Password, "short");
    form.set_field(RegistrationField::ConfirmPassword, "different");
    form.validate();

    let errors = form.errors();
    assert_eq!(errors.password, Some(FieldError::TooShort));
    assert_eq!(errors.confirm_password, Some(FieldError::Mismatch));
}

#[test]
fn matching_empty_confirmation_has_no_mismatch() {
    let mut form = RegistrationForm::new();
    form.validate();
    // Both password and confirmation are ""; only Required applies.
    assert_eq!(form.errors().password, Some(FieldError::Required));
    assert_eq!(form.errors().confirm_password, None);
}

#[test]
fn editing_a_field_clears_its_error_eagerly() {
    let mut form = RegistrationForm::new();
    form.validate();
    assert_eq!(form.errors().email, Some(FieldError::Required));

    form.set_field(RegistrationField::Email, "anything");
    // Cleared immediately, before any re-validation.
    assert_eq!(form.errors().email, None);
    // Other errors are untouched.
    assert_eq!(form.errors().first_name, Some(FieldError::Required));
}

#[test]
fn begin_submit_rejects_invalid_form_and_stays_editing() {
    let mut form = RegistrationForm::new();
    assert!(form.begin_submit().is_none());
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(!form.errors().is_empty());
}

#[test]
fn begin_submit_yields_sanitized_payload_once() {
    let mut form = filled_form();

    let data = form.begin_submit().expect("valid form should submit");
    assert_eq!(
        data,
        RegistrationData {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@x.com".to_string(),
            password: "longenough1".to_string(),
        }
    );
    assert_eq!(form.phase(), FormPhase::Submitting);

    // A submit already in flight must never double-fire.
    assert!(form.begin_submit().is_none());
}

#[test]
fn edits_are_ignored_while_submitting() {
    let mut form = filled_form();
    form.begin_submit().unwrap();

    form.set_field(RegistrationField::Email, "tampered@x.com");
    assert_eq!(form.input().email, "john@x.com");
}

#[test]
fn settle_reaches_terminal_phase() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.settle();

    assert_eq!(form.phase(), FormPhase::Settled);
    assert!(form.phase().is_terminal());
    // Terminal: no further submits or edits.
    assert!(form.begin_submit().is_none());
}

#[test]
fn reject_returns_to_editing_with_submission_error() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.reject("Registration service unavailable");

    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(
        form.submission_error(),
        Some("Registration service unavailable")
    );

    // The user may correct input and submit again.
    assert!(form.begin_submit().is_some());
    assert!(form.submission_error().is_none());
}

#[test]
fn settle_and_reject_are_noops_outside_submitting() {
    let mut form = RegistrationForm::new();
    form.settle();
    assert_eq!(form.phase(), FormPhase::Editing);

    form.reject("nope");
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.submission_error().is_none());
}

#[test]
fn visibility_toggles_are_independent() {
    let mut form = RegistrationForm::new();
    assert!(!form.password_visible());
    assert!(!form.confirm_password_visible());

    form.toggle_password_visibility();
    assert!(form.password_visible());
    assert!(!form.confirm_password_visible());

    form.toggle_confirm_password_visibility();
    form.toggle_password_visibility();
    assert!(!form.password_visible());
    assert!(form.confirm_password_visible());
}

#[test]
fn field_error_messages_match_inline_copy() {
    assert_eq!(
        FieldError::Required.message(RegistrationField::FirstName),
        "First name is required"
    );
    assert_eq!(
        FieldError::InvalidFormat.message(RegistrationField::Email),
        "Please enter a valid email"
    );
    assert_eq!(
        FieldError::TooShort.message(RegistrationField::Password),
        "Password must be at least 8 characters"
    );
    assert_eq!(
        FieldError::Mismatch.message(RegistrationField::ConfirmPassword),
        "Passwords do not match"
    );
}

#[test]
fn phase_transition_matrix() {
    use FormPhase::*;
    assert!(Editing.can_transition_to(&Submitting));
    assert!(Submitting.can_transition_to(&Settled));
    assert!(Submitting.can_transition_to(&Editing));

    assert!(!Editing.can_transition_to(&Settled));
    assert!(!Settled.can_transition_to(&Editing));
    assert!(!Settled.can_transition_to(&Submitting));
    assert!(!Editing.can_transition_to(&Editing));
}

proptest! {
    #[test]
    fn validate_is_idempotent(
        first in ".{0,12}",
        last in ".{0,12}",
        email in ".{0,20}",
        password in ".{0,16}",
        confirm in ".{0,16}",
    ) {
        let mut form = RegistrationForm::new();
        form.set_field(RegistrationField::FirstName, first);
        form.set_field(RegistrationField::LastName, last);
        form.set_field(RegistrationField::Email, email);
        form.set_field(RegistrationField::Password, password);
        form.set_field(RegistrationField::ConfirmPassword, confirm);

        let first_pass = form.validate();
        let first_errors = *form.errors();
        let second_pass = form.validate();

        prop_assert_eq!(first_pass, second_pass);
        prop_assert_eq!(first_errors, *form.errors());
    }
}
