//! # Step Schemas
//!
//! Composes the field validators into the four step-scoped validation units
//! and the full-form schema. Each step owns a disjoint subset of fields; the
//! review step is the union of all of them plus the consent flag.
//!
//! Validation runs in two modes: a synchronous "can proceed" check (discard
//! the error map) and a full pass that produces the `field → message` map
//! shown to the user. The full-form pass additionally yields the normalized
//! [`LeadForm`].

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::draft::{FormDraft, LeadForm};
use crate::fields::FieldKey;
use crate::validate::{
    validate_company_name, validate_company_size, validate_consent, validate_contact_name,
    validate_country, validate_dsb_status, validate_email, validate_phone,
    validate_postal_code, validate_start_date, FieldError,
};

/// Field-scoped validation failures, keyed by wire field name on serialization.
pub type FieldErrors = BTreeMap<FieldKey, String>;

/// One page of the multi-step form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Company name, postal code, country.
    Company,
    /// Contact name, phone, email.
    Contact,
    /// DPO status, start date, company size.
    Project,
    /// Everything, plus the consent flag.
    Review,
}

impl Step {
    /// The ordered list of form steps.
    pub const ALL: [Step; 4] = [Step::Company, Step::Contact, Step::Project, Step::Review];

    /// Stable identifier used in step navigation.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Contact => "contact",
            Self::Project => "project",
            Self::Review => "review",
        }
    }

    /// German step title shown in the progress bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Company => "Unternehmensdaten",
            Self::Contact => "Kontaktdaten",
            Self::Project => "Projektdetails",
            Self::Review => "Zusammenfassung",
        }
    }

    /// The fields this step owns. Review owns every field.
    pub fn fields(&self) -> &'static [FieldKey] {
        match self {
            Self::Company => &[FieldKey::Unternehmen, FieldKey::Plz, FieldKey::Land],
            Self::Contact => &[
                FieldKey::Name,
                FieldKey::Telefonnummer,
                FieldKey::Emailadresse,
            ],
            Self::Project => &[
                FieldKey::DsbVorhanden,
                FieldKey::Start,
                FieldKey::Unternehmensgroesse,
            ],
            Self::Review => &FieldKey::ALL,
        }
    }

    /// Zero-based position in [`Step::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Company => 0,
            Self::Contact => 1,
            Self::Project => 2,
            Self::Review => 3,
        }
    }

    /// Step at the given position, if in range.
    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }
}

/// Validate a single field of the draft, discarding the normalized value.
fn check_field(field: FieldKey, draft: &FormDraft, today: NaiveDate) -> Result<(), FieldError> {
    let text = draft.text(field).unwrap_or("");
    match field {
        FieldKey::Unternehmen => validate_company_name(text).map(drop),
        FieldKey::Plz => validate_postal_code(text).map(drop),
        FieldKey::Land => validate_country(text).map(drop),
        FieldKey::Name => validate_contact_name(text).map(drop),
        FieldKey::Telefonnummer => validate_phone(text).map(drop),
        FieldKey::Emailadresse => validate_email(text).map(drop),
        FieldKey::DsbVorhanden => validate_dsb_status(text).map(drop),
        FieldKey::Start => validate_start_date(text, today).map(drop),
        FieldKey::Unternehmensgroesse => validate_company_size(text).map(drop),
        FieldKey::GdprConsent => validate_consent(draft.gdpr_consent),
    }
}

/// Validate one step against a (possibly partial) draft.
///
/// The error map is restricted to the fields the step owns; for
/// [`Step::Review`] that is the entire form.
pub fn validate_step(
    step: Step,
    draft: &FormDraft,
    today: NaiveDate,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for &field in step.fields() {
        if let Err(err) = check_field(field, draft, today) {
            errors.insert(field, err.message.to_string());
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the full form and produce the normalized [`LeadForm`].
///
/// Either every field passes and the normalized record is returned, or the
/// complete `field → message` map is — nothing partial is ever forwarded.
pub fn validate_form(draft: &FormDraft, today: NaiveDate) -> Result<LeadForm, FieldErrors> {
    let mut errors = FieldErrors::new();

    macro_rules! field {
        ($key:expr, $result:expr) => {
            match $result {
                Ok(value) => Some(value),
                Err(err) => {
                    errors.insert($key, err.message.to_string());
                    None
                }
            }
        };
    }

    let text = |field: FieldKey| draft.text(field).unwrap_or("");

    let unternehmen = field!(
        FieldKey::Unternehmen,
        validate_company_name(text(FieldKey::Unternehmen))
    );
    let plz = field!(FieldKey::Plz, validate_postal_code(text(FieldKey::Plz)));
    let land = field!(FieldKey::Land, validate_country(text(FieldKey::Land)));
    let name = field!(FieldKey::Name, validate_contact_name(text(FieldKey::Name)));
    let telefonnummer = field!(
        FieldKey::Telefonnummer,
        validate_phone(text(FieldKey::Telefonnummer))
    );
    let emailadresse = field!(
        FieldKey::Emailadresse,
        validate_email(text(FieldKey::Emailadresse))
    );
    let dsb_vorhanden = field!(
        FieldKey::DsbVorhanden,
        validate_dsb_status(text(FieldKey::DsbVorhanden))
    );
    let start = field!(
        FieldKey::Start,
        validate_start_date(text(FieldKey::Start), today)
    );
    let unternehmensgroesse = field!(
        FieldKey::Unternehmensgroesse,
        validate_company_size(text(FieldKey::Unternehmensgroesse))
    );
    let consent = field!(FieldKey::GdprConsent, validate_consent(draft.gdpr_consent));

    match (
        unternehmen,
        plz,
        land,
        name,
        telefonnummer,
        emailadresse,
        dsb_vorhanden,
        start,
        unternehmensgroesse,
        consent,
    ) {
        (
            Some(unternehmen),
            Some(plz),
            Some(land),
            Some(name),
            Some(telefonnummer),
            Some(emailadresse),
            Some(dsb_vorhanden),
            Some(start),
            Some(unternehmensgroesse),
            Some(()),
        ) => Ok(LeadForm {
            unternehmen,
            plz,
            land,
            name,
            telefonnummer,
            emailadresse,
            dsb_vorhanden,
            start,
            unternehmensgroesse,
            gdpr_consent: true,
        }),
        _ => Err(errors),
    }
}
