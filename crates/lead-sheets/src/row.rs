//! # Lead Rows
//!
//! Maps a validated [`LeadForm`] plus the server-generated timestamp to the
//! ten-column sheet row (columns A–J). A pre-write guard re-checks required
//! fields and the sheet's column size limits so a defective upstream change
//! can never write a malformed row.

use chrono::{DateTime, SecondsFormat, Utc};

use lead_core::LeadForm;

use crate::error::SheetsError;

/// Column range holding lead rows.
pub const SHEET_RANGE: &str = "A:J";
/// Header row range.
pub const HEADER_RANGE: &str = "A1:J1";

/// Header row, column order fixed A–J.
pub const HEADERS: [&str; 10] = [
    "Unternehmen",
    "PLZ",
    "Land",
    "Name",
    "Telefonnummer",
    "E-Mail-Adresse",
    "Externer DSB vorhanden",
    "Start",
    "Unternehmensgröße",
    "Timestamp",
];

/// Per-column maximum cell lengths enforced before writing.
const MAX_LENGTHS: [(&str, usize); 9] = [
    ("unternehmen", 100),
    ("plz", 5),
    ("land", 3),
    ("name", 50),
    ("telefonnummer", 20),
    ("emailadresse", 100),
    ("dsbVorhanden", 20),
    ("start", 10),
    ("unternehmensgroesse", 20),
];

/// One sheet row, ready to append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRow {
    columns: [String; 10],
}

impl LeadRow {
    /// Build a row from a validated lead and the server timestamp.
    ///
    /// Fails with [`SheetsError::Validation`] if a required column is empty
    /// (possible for names via the trim-after-length-check quirk) or a cell
    /// exceeds its column limit.
    pub fn new(lead: &LeadForm, submitted_at: DateTime<Utc>) -> Result<Self, SheetsError> {
        let columns = [
            lead.unternehmen.clone(),
            lead.plz.clone(),
            lead.land.as_str().to_string(),
            lead.name.clone(),
            lead.telefonnummer.clone(),
            lead.emailadresse.clone(),
            lead.dsb_vorhanden.as_str().to_string(),
            lead.start.to_string(),
            lead.unternehmensgroesse.as_str().to_string(),
            submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        ];

        for (value, (field, max)) in columns.iter().zip(MAX_LENGTHS) {
            if value.is_empty() {
                return Err(SheetsError::Validation(format!(
                    "required field '{field}' is missing"
                )));
            }
            if value.chars().count() > max {
                return Err(SheetsError::Validation(format!(
                    "field '{field}' exceeds maximum length of {max} characters"
                )));
            }
        }
        Ok(Self { columns })
    }

    /// Cell values in column order A–J.
    pub fn values(&self) -> &[String; 10] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use lead_core::{CompanySize, Country, DsbStatus};

    fn lead() -> LeadForm {
        LeadForm {
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
        }
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 30, 45).unwrap()
    }

    #[test]
    fn row_column_order_matches_headers() {
        let row = LeadRow::new(&lead(), timestamp()).unwrap();
        let values = row.values();
        assert_eq!(values.len(), HEADERS.len());
        assert_eq!(values[0], "Test GmbH");
        assert_eq!(values[2], "DE");
        assert_eq!(values[6], "nein");
        assert_eq!(values[7], "2030-01-15");
        assert_eq!(values[8], "11-50");
        assert_eq!(values[9], "2025-06-15T12:30:45.000Z");
    }

    #[test]
    fn empty_name_is_rejected() {
        // The trim quirk can produce an empty stored name; the sink guard
        // refuses to write it.
        let mut lead = lead();
        lead.name = String::new();
        let err = LeadRow::new(&lead, timestamp()).unwrap_err();
        assert!(err.to_string().contains("'name' is missing"));
    }

    #[test]
    fn oversized_cell_is_rejected() {
        let mut lead = lead();
        lead.telefonnummer = "0".repeat(21);
        let err = LeadRow::new(&lead, timestamp()).unwrap_err();
        assert!(err.to_string().contains("telefonnummer"));
        assert!(err.to_string().contains("20"));
    }
}
