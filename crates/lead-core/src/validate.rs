//! # Field Validators
//!
//! Pure validation rules for every lead form field. Each validator maps an
//! input string (or the consent flag) to either a normalized value or a
//! [`FieldError`] carrying a machine-readable [`RuleCode`] and the German
//! message shown to the user.
//!
//! Validators never look at more than one field — the only cross-field rule
//! in the form ("everything required on final submission") lives in
//! [`crate::schema`].

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::fields::{CompanySize, Country, DsbStatus};

/// Machine-readable classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCode {
    /// Empty or missing input on a required field.
    Required,
    /// Input does not match the field's format.
    Format,
    /// Below the minimum length.
    TooShort,
    /// Above the maximum length.
    TooLong,
    /// Date lies before today.
    PastDate,
    /// Value outside a closed option set.
    InvalidOption,
    /// Consent flag is not literal `true`.
    ConsentRequired,
}

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Failure classification.
    pub code: RuleCode,
    /// User-facing German message.
    pub message: &'static str,
}

impl FieldError {
    fn new(code: RuleCode, message: &'static str) -> Self {
        Self { code, message }
    }
}

/// Exactly five ASCII digits.
static POSTAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("postal code regex"));

/// Optional `+49` or leading `0`, then a non-zero digit, then 1–14 digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+49|0)[1-9][0-9]{1,14}$").expect("phone regex"));

/// Validate a German postal code: exactly 5 decimal digits.
pub fn validate_postal_code(input: &str) -> Result<String, FieldError> {
    if input.is_empty() {
        return Err(FieldError::new(RuleCode::Required, "PLZ ist erforderlich"));
    }
    if !POSTAL_CODE_RE.is_match(input) {
        return Err(FieldError::new(
            RuleCode::Format,
            "PLZ muss aus 5 Ziffern bestehen",
        ));
    }
    Ok(input.to_string())
}

/// Validate a German phone number in national (`0...`) or international
/// (`+49...`) dial form. The digit after the prefix must be non-zero, so a
/// second leading zero after `+49` is rejected.
pub fn validate_phone(input: &str) -> Result<String, FieldError> {
    if input.is_empty() {
        return Err(FieldError::new(
            RuleCode::Required,
            "Telefonnummer ist erforderlich",
        ));
    }
    if !PHONE_RE.is_match(input) {
        return Err(FieldError::new(
            RuleCode::Format,
            "Bitte geben Sie eine gültige deutsche Telefonnummer ein",
        ));
    }
    Ok(input.to_string())
}

/// Mailbox grammar check: one `@`, a dot-clean local part, and a dotted
/// domain whose final label is at least two letters.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty()
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
    {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "._%+'-".contains(c))
    {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    for label in &labels {
        if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
    }
    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate an email address. On success the stored value is lower-cased —
/// case is not significant for addresses.
pub fn validate_email(input: &str) -> Result<String, FieldError> {
    if input.is_empty() {
        return Err(FieldError::new(
            RuleCode::Required,
            "E-Mail-Adresse ist erforderlich",
        ));
    }
    if !is_valid_email(input) {
        return Err(FieldError::new(
            RuleCode::Format,
            "Bitte geben Sie eine gültige E-Mail-Adresse ein",
        ));
    }
    Ok(input.to_lowercase())
}

/// Validate a company name: 2–100 characters, trimmed after the length
/// check passes.
///
/// Length is checked on the raw input and the value trimmed afterwards, so
/// an all-whitespace string of length ≥ 2 validates and is stored empty.
/// This matches the live form's observed behavior; see DESIGN.md.
pub fn validate_company_name(input: &str) -> Result<String, FieldError> {
    let len = input.chars().count();
    if len < 2 {
        return Err(FieldError::new(
            RuleCode::TooShort,
            "Firmenname muss mindestens 2 Zeichen haben",
        ));
    }
    if len > 100 {
        return Err(FieldError::new(
            RuleCode::TooLong,
            "Firmenname darf maximal 100 Zeichen haben",
        ));
    }
    Ok(input.trim().to_string())
}

/// Validate a contact name: 2–50 characters, trimmed after the length check
/// passes (same raw-length quirk as [`validate_company_name`]).
pub fn validate_contact_name(input: &str) -> Result<String, FieldError> {
    let len = input.chars().count();
    if len < 2 {
        return Err(FieldError::new(
            RuleCode::TooShort,
            "Name muss mindestens 2 Zeichen haben",
        ));
    }
    if len > 50 {
        return Err(FieldError::new(
            RuleCode::TooLong,
            "Name darf maximal 50 Zeichen haben",
        ));
    }
    Ok(input.trim().to_string())
}

/// Validate the desired start date against `today` at day granularity.
///
/// Unparseable non-empty input fails with the same past-date message the
/// live form produces for it.
pub fn validate_start_date(input: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    if input.is_empty() {
        return Err(FieldError::new(
            RuleCode::Required,
            "Startdatum ist erforderlich",
        ));
    }
    let past = FieldError::new(RuleCode::PastDate, "Startdatum muss in der Zukunft liegen");
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| past.clone())?;
    if date < today {
        return Err(past);
    }
    Ok(date)
}

/// Validate the country selection against its closed set.
pub fn validate_country(input: &str) -> Result<Country, FieldError> {
    input.parse().map_err(|_| {
        FieldError::new(RuleCode::InvalidOption, "Bitte wählen Sie ein Land aus")
    })
}

/// Validate the DPO status selection against its closed set.
pub fn validate_dsb_status(input: &str) -> Result<DsbStatus, FieldError> {
    input.parse().map_err(|_| {
        FieldError::new(RuleCode::InvalidOption, "Bitte wählen Sie eine Option aus")
    })
}

/// Validate the company size selection against its closed set.
pub fn validate_company_size(input: &str) -> Result<CompanySize, FieldError> {
    input.parse().map_err(|_| {
        FieldError::new(
            RuleCode::InvalidOption,
            "Bitte wählen Sie eine Unternehmensgröße aus",
        )
    })
}

/// Validate the GDPR consent flag: only literal `true` passes.
pub fn validate_consent(value: Option<bool>) -> Result<(), FieldError> {
    if value == Some(true) {
        Ok(())
    } else {
        Err(FieldError::new(
            RuleCode::ConsentRequired,
            "Sie müssen der Datenschutzerklärung zustimmen",
        ))
    }
}
