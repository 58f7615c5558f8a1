//! # Form Drafts and Normalized Leads
//!
//! [`FormDraft`] is the raw capture type: every field optional, text fields
//! stored exactly as typed, unknown wire fields ignored on deserialization.
//! [`LeadForm`] is the normalized record produced only by a successful
//! full-form validation pass ([`crate::schema::validate_form`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{CompanySize, Country, DsbStatus, FieldKey};

/// A single field value as written by the form state machine.
///
/// Text fields carry the raw input string; the consent flag is a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Raw text input (also used for select values and the date field).
    Text(String),
    /// The consent checkbox.
    Flag(bool),
}

/// Partially filled lead form, field-by-field as the user types.
///
/// Deserializes from the submission endpoint's JSON body; extra fields in
/// the payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unternehmen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefonnummer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emailadresse: Option<String>,
    #[serde(rename = "dsbVorhanden", default, skip_serializing_if = "Option::is_none")]
    pub dsb_vorhanden: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unternehmensgroesse: Option<String>,
    #[serde(rename = "gdprConsent", default, skip_serializing_if = "Option::is_none")]
    pub gdpr_consent: Option<bool>,
}

impl FormDraft {
    /// Write one field. A type-mismatched write (text into the consent flag
    /// or a flag into a text field) is ignored.
    pub fn set(&mut self, field: FieldKey, value: FieldValue) {
        match (field, value) {
            (FieldKey::Unternehmen, FieldValue::Text(v)) => self.unternehmen = Some(v),
            (FieldKey::Plz, FieldValue::Text(v)) => self.plz = Some(v),
            (FieldKey::Land, FieldValue::Text(v)) => self.land = Some(v),
            (FieldKey::Name, FieldValue::Text(v)) => self.name = Some(v),
            (FieldKey::Telefonnummer, FieldValue::Text(v)) => self.telefonnummer = Some(v),
            (FieldKey::Emailadresse, FieldValue::Text(v)) => self.emailadresse = Some(v),
            (FieldKey::DsbVorhanden, FieldValue::Text(v)) => self.dsb_vorhanden = Some(v),
            (FieldKey::Start, FieldValue::Text(v)) => self.start = Some(v),
            (FieldKey::Unternehmensgroesse, FieldValue::Text(v)) => {
                self.unternehmensgroesse = Some(v)
            }
            (FieldKey::GdprConsent, FieldValue::Flag(v)) => self.gdpr_consent = Some(v),
            _ => {}
        }
    }

    /// Read one field back, if it has been set.
    pub fn get(&self, field: FieldKey) -> Option<FieldValue> {
        match field {
            FieldKey::Unternehmen => self.unternehmen.clone().map(FieldValue::Text),
            FieldKey::Plz => self.plz.clone().map(FieldValue::Text),
            FieldKey::Land => self.land.clone().map(FieldValue::Text),
            FieldKey::Name => self.name.clone().map(FieldValue::Text),
            FieldKey::Telefonnummer => self.telefonnummer.clone().map(FieldValue::Text),
            FieldKey::Emailadresse => self.emailadresse.clone().map(FieldValue::Text),
            FieldKey::DsbVorhanden => self.dsb_vorhanden.clone().map(FieldValue::Text),
            FieldKey::Start => self.start.clone().map(FieldValue::Text),
            FieldKey::Unternehmensgroesse => {
                self.unternehmensgroesse.clone().map(FieldValue::Text)
            }
            FieldKey::GdprConsent => self.gdpr_consent.map(FieldValue::Flag),
        }
    }

    /// Raw text content of a field, with `None` for unset fields.
    pub(crate) fn text(&self, field: FieldKey) -> Option<&str> {
        match field {
            FieldKey::Unternehmen => self.unternehmen.as_deref(),
            FieldKey::Plz => self.plz.as_deref(),
            FieldKey::Land => self.land.as_deref(),
            FieldKey::Name => self.name.as_deref(),
            FieldKey::Telefonnummer => self.telefonnummer.as_deref(),
            FieldKey::Emailadresse => self.emailadresse.as_deref(),
            FieldKey::DsbVorhanden => self.dsb_vorhanden.as_deref(),
            FieldKey::Start => self.start.as_deref(),
            FieldKey::Unternehmensgroesse => self.unternehmensgroesse.as_deref(),
            FieldKey::GdprConsent => None,
        }
    }
}

/// A fully validated, normalized lead record.
///
/// Only produced by [`crate::schema::validate_form`]: names are trimmed, the
/// email is lower-cased, enum fields are typed, the start date is a calendar
/// date, and consent is implied `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub unternehmen: String,
    pub plz: String,
    pub land: Country,
    pub name: String,
    pub telefonnummer: String,
    pub emailadresse: String,
    #[serde(rename = "dsbVorhanden")]
    pub dsb_vorhanden: DsbStatus,
    pub start: NaiveDate,
    pub unternehmensgroesse: CompanySize,
    #[serde(rename = "gdprConsent")]
    pub gdpr_consent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_ignores_unknown_wire_fields() {
        let draft: FormDraft = serde_json::from_str(
            r#"{"unternehmen":"Test GmbH","tracking":"utm_x","gdprConsent":true}"#,
        )
        .unwrap();
        assert_eq!(draft.unternehmen.as_deref(), Some("Test GmbH"));
        assert_eq!(draft.gdpr_consent, Some(true));
        assert!(draft.plz.is_none());
    }

    #[test]
    fn draft_set_and_get_round_trip() {
        let mut draft = FormDraft::default();
        draft.set(FieldKey::Plz, FieldValue::Text("80331".into()));
        draft.set(FieldKey::GdprConsent, FieldValue::Flag(true));
        assert_eq!(
            draft.get(FieldKey::Plz),
            Some(FieldValue::Text("80331".into()))
        );
        assert_eq!(draft.get(FieldKey::GdprConsent), Some(FieldValue::Flag(true)));
        assert_eq!(draft.get(FieldKey::Land), None);
    }

    #[test]
    fn draft_ignores_type_mismatched_writes() {
        let mut draft = FormDraft::default();
        draft.set(FieldKey::Plz, FieldValue::Flag(true));
        draft.set(FieldKey::GdprConsent, FieldValue::Text("ja".into()));
        assert!(draft.plz.is_none());
        assert!(draft.gdpr_consent.is_none());
    }

    #[test]
    fn lead_form_serializes_wire_names() {
        let lead = LeadForm {
            unternehmen: "Test GmbH".into(),
            plz: "12345".into(),
            land: Country::De,
            name: "Max Mustermann".into(),
            telefonnummer: "017612345678".into(),
            emailadresse: "max@test.com".into(),
            dsb_vorhanden: DsbStatus::Nein,
            start: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            unternehmensgroesse: CompanySize::From11To50,
            gdpr_consent: true,
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["dsbVorhanden"], "nein");
        assert_eq!(json["gdprConsent"], true);
        assert_eq!(json["land"], "DE");
        assert_eq!(json["unternehmensgroesse"], "11-50");
        assert_eq!(json["start"], "2030-01-15");
    }
}
