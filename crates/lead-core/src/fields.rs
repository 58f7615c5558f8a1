//! # Field Keys and Closed Option Sets
//!
//! The ten fields of the lead form, addressed by [`FieldKey`], and the three
//! enum-valued fields with their fixed option sets. Wire names follow the
//! submission endpoint's JSON contract (`dsbVorhanden`, `gdprConsent`, ...);
//! labels are the German display strings shown in the form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value outside a field's closed option set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option: {0}")]
pub struct UnknownOption(pub String);

/// Identifies one field of the lead form.
///
/// Serializes as the wire name, so error maps keyed by `FieldKey` come out
/// as `{"gdprConsent": "..."}` on the submission endpoint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    /// Company name (step 1).
    Unternehmen,
    /// Postal code (step 1).
    Plz,
    /// Country (step 1).
    Land,
    /// Contact name (step 2).
    Name,
    /// Phone number (step 2).
    Telefonnummer,
    /// Email address (step 2).
    Emailadresse,
    /// Data Protection Officer status (step 3).
    DsbVorhanden,
    /// Desired start date (step 3).
    Start,
    /// Company size bracket (step 3).
    Unternehmensgroesse,
    /// GDPR consent flag (step 4).
    GdprConsent,
}

impl FieldKey {
    /// All form fields in wire/column order.
    pub const ALL: [FieldKey; 10] = [
        FieldKey::Unternehmen,
        FieldKey::Plz,
        FieldKey::Land,
        FieldKey::Name,
        FieldKey::Telefonnummer,
        FieldKey::Emailadresse,
        FieldKey::DsbVorhanden,
        FieldKey::Start,
        FieldKey::Unternehmensgroesse,
        FieldKey::GdprConsent,
    ];

    /// The JSON wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unternehmen => "unternehmen",
            Self::Plz => "plz",
            Self::Land => "land",
            Self::Name => "name",
            Self::Telefonnummer => "telefonnummer",
            Self::Emailadresse => "emailadresse",
            Self::DsbVorhanden => "dsbVorhanden",
            Self::Start => "start",
            Self::Unternehmensgroesse => "unternehmensgroesse",
            Self::GdprConsent => "gdprConsent",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country the company is located in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    /// Deutschland.
    De,
    /// Österreich.
    At,
    /// Schweiz.
    Ch,
}

impl Country {
    /// The closed set of selectable countries.
    pub const ALL: [Country; 3] = [Country::De, Country::At, Country::Ch];

    /// ISO-style wire value (`DE`, `AT`, `CH`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::De => "DE",
            Self::At => "AT",
            Self::Ch => "CH",
        }
    }

    /// German display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::De => "Deutschland",
            Self::At => "Österreich",
            Self::Ch => "Schweiz",
        }
    }
}

impl FromStr for Country {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Company size bracket, ordered smallest to largest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    From1To10,
    #[serde(rename = "11-50")]
    From11To50,
    #[serde(rename = "51-250")]
    From51To250,
    #[serde(rename = "251-500")]
    From251To500,
    #[serde(rename = "500+")]
    Over500,
}

impl CompanySize {
    /// The closed, ordered set of size brackets.
    pub const ALL: [CompanySize; 5] = [
        CompanySize::From1To10,
        CompanySize::From11To50,
        CompanySize::From51To250,
        CompanySize::From251To500,
        CompanySize::Over500,
    ];

    /// Wire value (`1-10`, `11-50`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::From1To10 => "1-10",
            Self::From11To50 => "11-50",
            Self::From51To250 => "51-250",
            Self::From251To500 => "251-500",
            Self::Over500 => "500+",
        }
    }

    /// German display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::From1To10 => "1-10 Mitarbeiter",
            Self::From11To50 => "11-50 Mitarbeiter",
            Self::From51To250 => "51-250 Mitarbeiter",
            Self::From251To500 => "251-500 Mitarbeiter",
            Self::Over500 => "Über 500 Mitarbeiter",
        }
    }
}

impl FromStr for CompanySize {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the company already has an external Data Protection Officer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DsbStatus {
    /// Already has an external DPO engaged.
    Ja,
    /// Needs an external DPO.
    Nein,
    /// Not sure yet.
    Unsicher,
}

impl DsbStatus {
    /// The closed set of DPO status answers.
    pub const ALL: [DsbStatus; 3] = [DsbStatus::Ja, DsbStatus::Nein, DsbStatus::Unsicher];

    /// Wire value (`ja`, `nein`, `unsicher`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::Nein => "nein",
            Self::Unsicher => "unsicher",
        }
    }

    /// German display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ja => "Ja, wir haben bereits einen externen DSB",
            Self::Nein => "Nein, wir benötigen einen externen DSB",
            Self::Unsicher => "Ich bin mir nicht sicher",
        }
    }
}

impl FromStr for DsbStatus {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl fmt::Display for DsbStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
