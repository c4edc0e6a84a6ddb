//! Submission-time validation of the registration form.
//!
//! Four independent checks run over a [`FormSnapshot`]:
//! 1. every required field has a value
//! 2. the email address has a plausible shape
//! 3. the remarks stay within the word limit
//! 4. controls the browser flags as invalid get a message if nothing else caught them
//!
//! Each field ends up with at most one message. Messages go through
//! [`FieldErrors::try_insert`], so an earlier check keeps precedence over a later one.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{FieldSpec, EMAIL, REMARKS, REQUIRED_FIELDS};
use super::result::{FieldErrors, ValidationResult};
use super::snapshot::{FieldValue, FormSnapshot, InvalidControl};
use crate::config::ValidatorConfig;
use crate::utils::error_messages::{self, INVALID_EMAIL};
use crate::utils::validation::{
    is_form_whitespace, EmailInput, FileInput, TextInput, FORM_WHITESPACE_CLASS,
};

// Trailing "required" marker on a label, e.g. "Full Name *"
static REQUIRED_MARKER: Lazy<Regex> = Lazy::new(|| {
    let ws = format!("[{FORM_WHITESPACE_CLASS}]*");
    Regex::new(&format!(r"{ws}\*{ws}$")).expect("Failed to compile label marker regex")
});

#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    config: ValidatorConfig,
}

impl FormValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates a submitted form. Never fails: problems end up in the result.
    pub fn validate<F: FormSnapshot + ?Sized>(&self, form: &F) -> ValidationResult {
        let mut errors = FieldErrors::default();

        for field in REQUIRED_FIELDS.iter() {
            check_required(form, field, &mut errors);
        }
        check_email(form, &mut errors);
        self.check_remarks(form, &mut errors);
        for control in form.invalid_controls() {
            check_native_constraints(form, control, &mut errors);
        }

        let result = ValidationResult::from(errors);
        debug!(
            "Registration form validated: {} error(s)",
            result.errors().len()
        );
        result
    }

    fn check_remarks<F: FormSnapshot + ?Sized>(&self, form: &F, errors: &mut FieldErrors) {
        let Some(FieldValue::Text(remarks)) = form.value(REMARKS) else {
            return;
        };
        // Blank remarks are reported by the required check
        let Ok(remarks) = TextInput::required(remarks) else {
            return;
        };

        let max_words = self.config.max_remarks_words;
        if remarks.word_count() > max_words {
            errors.try_insert(REMARKS, error_messages::remarks_too_long(max_words));
        }
    }
}

/// Shorthand for validating with the default configuration
pub fn validate<F: FormSnapshot + ?Sized>(form: &F) -> ValidationResult {
    FormValidator::default().validate(form)
}

fn is_present(value: Option<&FieldValue>) -> bool {
    match value {
        None => false,
        Some(FieldValue::Text(text)) => TextInput::required(text).is_ok(),
        Some(FieldValue::File(file)) => FileInput::new(file.size).is_ok(),
    }
}

fn check_required<F: FormSnapshot + ?Sized>(form: &F, field: &FieldSpec, errors: &mut FieldErrors) {
    if !is_present(form.value(field.name)) {
        errors.try_insert(field.name, error_messages::required(field.label));
    }
}

fn check_email<F: FormSnapshot + ?Sized>(form: &F, errors: &mut FieldErrors) {
    match form.value(EMAIL) {
        Some(FieldValue::Text(email)) if !email.is_empty() => {
            if EmailInput::new(email).is_err() {
                errors.try_insert(EMAIL, INVALID_EMAIL);
            }
        }
        _ => {}
    }
}

fn check_native_constraints<F: FormSnapshot + ?Sized>(
    form: &F,
    control: &InvalidControl,
    errors: &mut FieldErrors,
) {
    if !control.kind.is_editable() || control.name.is_empty() {
        return;
    }

    if control.value_missing && !errors.contains(&control.name) {
        let label = label_text(form, control);
        errors.try_insert(&control.name, error_messages::required(&label));
    }

    if control.type_mismatch && control.input_type == "email" {
        errors.try_insert(EMAIL, INVALID_EMAIL);
    }
}

/// Label shown for a control, without its required marker.
/// Falls back to the control's name when the page has no usable label.
fn label_text<F: FormSnapshot + ?Sized>(form: &F, control: &InvalidControl) -> String {
    let label = if control.id.is_empty() {
        None
    } else {
        form.label_for(&control.id)
    };

    label
        .map(|text| {
            REQUIRED_MARKER
                .replace(text, "")
                .trim_matches(is_form_whitespace)
                .to_string()
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| control.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::{CITY, CLASS, STUDENT_PHOTO};
    use crate::form::snapshot::{ControlKind, FileRef, StaticSnapshot};

    fn photo(size: u64) -> FileRef {
        FileRef {
            name: "photo.jpg".to_string(),
            size,
        }
    }

    fn valid_form() -> StaticSnapshot {
        let mut form = StaticSnapshot::new();
        for field in REQUIRED_FIELDS.iter() {
            form = form.with_value(field.name, "filled in");
        }
        form.with_value(EMAIL, "a@b.co")
            .with_value(REMARKS, "Keen on robotics.")
            .with_value(STUDENT_PHOTO, photo(1024))
    }

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    #[test]
    fn test_valid_form() {
        let result = validate(&valid_form());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_each_blank_field_is_required() {
        for field in REQUIRED_FIELDS.iter() {
            let blank_values: Vec<FieldValue> = if field.name == STUDENT_PHOTO {
                vec![FieldValue::File(photo(0))]
            } else {
                vec!["".into(), "   ".into(), "\t\n".into(), "\u{FEFF}".into()]
            };

            for blank in blank_values {
                let form = valid_form().with_value(field.name, blank.clone());
                let result = validate(&form);

                assert!(!result.is_valid(), "{} accepted {:?}", field.name, blank);
                assert_eq!(result.errors().len(), 1, "Extra errors for {}", field.name);
                assert_eq!(
                    result.errors().get(field.name),
                    Some(format!("{} is required", field.label).as_str())
                );
            }
        }
    }

    #[test]
    fn test_absent_field_is_required() {
        let form = valid_form().without_value(CITY);
        let result = validate(&form);
        assert_eq!(result.errors().get(CITY), Some("City is required"));
        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let form = valid_form()
            .with_value(CITY, "\u{FEFF}")
            .with_value(REMARKS, format!("\u{FEFF}{}", words(301).replace(' ', "\u{FEFF}")));
        let result = validate(&form);
        assert_eq!(result.errors().get(CITY), Some("City is required"));
        assert_eq!(result.errors().get(REMARKS), Some("Remarks must not exceed 300 words"));
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let result = validate(&StaticSnapshot::new());
        assert_eq!(result.errors().len(), REQUIRED_FIELDS.len());
        assert_eq!(result.errors().get(STUDENT_PHOTO), Some("Student Photograph is required"));
    }

    #[test]
    fn test_invalid_email() {
        let form = valid_form().with_value(EMAIL, "not-an-email");
        let result = validate(&form);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors().get(EMAIL), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_blank_email_is_required_not_malformed() {
        let form = valid_form().with_value(EMAIL, "   ");
        let result = validate(&form);
        assert_eq!(result.errors().get(EMAIL), Some("Email ID is required"));
    }

    #[test]
    fn test_email_file_value_is_only_required_checked() {
        let form = valid_form().with_value(EMAIL, photo(10));
        assert!(validate(&form).is_valid());
    }

    #[test]
    fn test_remarks_word_limit() {
        let form = valid_form().with_value(REMARKS, words(300));
        assert!(validate(&form).is_valid());

        let form = valid_form().with_value(REMARKS, format!("  {}  ", words(301)));
        let result = validate(&form);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors().get(REMARKS), Some("Remarks must not exceed 300 words"));
    }

    #[test]
    fn test_blank_remarks_are_required_not_too_long() {
        let form = valid_form().with_value(REMARKS, "   ");
        let result = validate(&form);
        assert_eq!(result.errors().get(REMARKS), Some("Remarks is required"));
    }

    #[test]
    fn test_configured_word_limit() {
        let validator = FormValidator::new(ValidatorConfig { max_remarks_words: 5 });
        let form = valid_form().with_value(REMARKS, words(6));
        let result = validator.validate(&form);
        assert_eq!(result.errors().get(REMARKS), Some("Remarks must not exceed 5 words"));

        let form = valid_form().with_value(REMARKS, words(5));
        assert!(validator.validate(&form).is_valid());
    }

    #[test]
    fn test_native_value_missing_uses_label() {
        let labels = vec!["Guardian Name *  ", "Guardian Name", "\u{FEFF}Guardian Name\u{A0}*\u{FEFF}"];

        for label in labels {
            let form = valid_form()
                .with_invalid(
                    InvalidControl::new(ControlKind::Input, "guardianName")
                        .with_id("guardian-name")
                        .value_missing(),
                )
                .with_label("guardian-name", label);
            let result = validate(&form);
            assert_eq!(
                result.errors().get("guardianName"),
                Some("Guardian Name is required"),
                "Unexpected message for label {:?}",
                label
            );
        }
    }

    #[test]
    fn test_native_value_missing_falls_back_to_name() {
        let cases = vec![
            InvalidControl::new(ControlKind::Select, "stream").value_missing(),
            InvalidControl::new(ControlKind::Select, "stream").with_id("").value_missing(),
        ];

        for control in cases {
            let form = valid_form().with_invalid(control.clone());
            let result = validate(&form);
            assert_eq!(
                result.errors().get("stream"),
                Some("stream is required"),
                "Unexpected message for {:?}",
                control
            );
        }

        // A label that is nothing but the marker is unusable too
        let form = valid_form()
            .with_invalid(InvalidControl::new(ControlKind::TextArea, "notes").value_missing())
            .with_label("notes", " * ");
        assert_eq!(validate(&form).errors().get("notes"), Some("notes is required"));
    }

    #[test]
    fn test_native_check_does_not_overwrite() {
        let form = valid_form()
            .without_value(CLASS)
            .with_invalid(InvalidControl::new(ControlKind::Select, CLASS).value_missing())
            .with_label(CLASS, "Standard *");
        let result = validate(&form);
        assert_eq!(result.errors().get(CLASS), Some("Class is required"));
    }

    #[test]
    fn test_native_email_type_mismatch() {
        let mismatch = InvalidControl::new(ControlKind::Input, EMAIL)
            .with_type("email")
            .type_mismatch();

        let result = validate(&valid_form().with_invalid(mismatch.clone()));
        assert_eq!(result.errors().get(EMAIL), Some("Please enter a valid email address"));

        let form = valid_form().without_value(EMAIL).with_invalid(mismatch);
        assert_eq!(validate(&form).errors().get(EMAIL), Some("Email ID is required"));
    }

    #[test]
    fn test_native_type_mismatch_ignored_for_other_types() {
        let form = valid_form().with_invalid(
            InvalidControl::new(ControlKind::Input, "website")
                .with_type("url")
                .type_mismatch(),
        );
        assert!(validate(&form).is_valid());
    }

    #[test]
    fn test_native_skips_unnamed_and_non_editable_controls() {
        let form = valid_form()
            .with_invalid(InvalidControl::new(ControlKind::Input, "").value_missing())
            .with_invalid(InvalidControl::new(ControlKind::Other, "group").value_missing());
        assert!(validate(&form).is_valid());
    }

    #[test]
    fn test_null_photo_from_json_is_required() {
        let form: StaticSnapshot = serde_json::from_str(
            r#"{"values":{"studentPhoto":null},"invalid":[{"id":"consent","tag":"input","valueMissing":true}]}"#,
        )
        .unwrap();
        let form = REQUIRED_FIELDS
            .iter()
            .filter(|field| field.name != STUDENT_PHOTO)
            .fold(form, |form, field| form.with_value(field.name, "filled in"))
            .with_value(EMAIL, "a@b.co");

        let result = validate(&form);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors().get(STUDENT_PHOTO), Some("Student Photograph is required"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let form = valid_form()
            .with_value(EMAIL, "bad")
            .with_value(CITY, "")
            .with_invalid(InvalidControl::new(ControlKind::Input, "pin").value_missing());

        let validator = FormValidator::default();
        let first = validator.validate(&form);
        let second = validator.validate(&form);
        assert_eq!(first, second);
        assert_eq!(first.errors().len(), 3);
    }
}
