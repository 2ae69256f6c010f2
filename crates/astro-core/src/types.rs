//! Fundamental types shared by the reading pipeline.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Wire format for birth dates
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable birth date, e.g. "June 15, 1990"
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

/// Unique identifier for a single reading (log correlation only, never stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingId(pub Uuid);

impl ReadingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReadingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw reading request as submitted by a client.
///
/// Absent fields decode as empty strings so that [`ReadingRequest::validate`]
/// can report every missing field in one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingRequest {
    pub name: String,
    #[serde(alias = "birthDate", alias = "birth_date")]
    pub dob: String,
    #[serde(alias = "birthTime", alias = "birth_time")]
    pub tob: String,
    #[serde(alias = "birthPlace", alias = "birth_place")]
    pub pob: String,
    pub question: String,
}

impl ReadingRequest {
    /// Field names in the order they are reported when missing
    pub const REQUIRED_FIELDS: [&'static str; 5] = ["name", "dob", "tob", "pob", "question"];

    /// Check required fields and parse the birth date.
    pub fn validate(&self) -> Result<ReadingInput> {
        let values = [
            self.name.trim(),
            self.dob.trim(),
            self.tob.trim(),
            self.pob.trim(),
            self.question.trim(),
        ];

        let missing: Vec<&'static str> = Self::REQUIRED_FIELDS
            .iter()
            .zip(values.iter())
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| *field)
            .collect();

        if !missing.is_empty() {
            return Err(Error::Validation { missing });
        }

        let [name, dob, tob, pob, question] = values;
        let birth_date = NaiveDate::parse_from_str(dob, BIRTH_DATE_FORMAT)?;

        Ok(ReadingInput {
            details: BirthDetails {
                name: name.to_string(),
                birth_date,
                birth_time: tob.to_string(),
                birth_place: pob.to_string(),
            },
            question: question.to_string(),
        })
    }
}

/// Validated birth details. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub name: String,
    pub birth_date: NaiveDate,
    /// Free text, format is not checked
    pub birth_time: String,
    pub birth_place: String,
}

impl BirthDetails {
    /// Birth date in the original `YYYY-MM-DD` form
    pub fn iso_birth_date(&self) -> String {
        self.birth_date.format(BIRTH_DATE_FORMAT).to_string()
    }

    /// Birth date as "June 15, 1990"
    pub fn display_birth_date(&self) -> String {
        self.birth_date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    pub fn birth_month_name(&self) -> String {
        self.birth_date.format("%B").to_string()
    }
}

/// Validated request: birth details plus the question being asked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingInput {
    pub details: BirthDetails,
    pub question: String,
}

/// Seasonal framing used for both the current date and the birth date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    /// Quarter lookup on the 1-based calendar month: `month / 3`.
    ///
    /// This is not calendar-accurate (March falls in Spring, February in
    /// Winter, November in Autumn) and December computes index 4, which wraps
    /// back to Winter.
    pub fn from_month(month: u32) -> Self {
        Self::ALL[(month / 3) as usize % Self::ALL.len()]
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ReadingRequest {
        ReadingRequest {
            name: "  Sam ".to_string(),
            dob: "1990-06-15".to_string(),
            tob: "10:00".to_string(),
            pob: " Paris".to_string(),
            question: "Will I find love? ".to_string(),
        }
    }

    #[test]
    fn test_validate_trims_and_parses() {
        let input = sample_request().validate().unwrap();

        assert_eq!(input.details.name, "Sam");
        assert_eq!(input.details.birth_place, "Paris");
        assert_eq!(input.question, "Will I find love?");
        assert_eq!(input.details.birth_date, NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
        assert_eq!(input.details.display_birth_date(), "June 15, 1990");
        assert_eq!(input.details.iso_birth_date(), "1990-06-15");
        assert_eq!(input.details.birth_month_name(), "June");
    }

    #[test]
    fn test_validate_reports_all_missing_fields_in_order() {
        let request = ReadingRequest {
            name: "   ".to_string(),
            question: String::new(),
            ..sample_request()
        };

        match request.validate() {
            Err(Error::Validation { missing }) => assert_eq!(missing, vec!["name", "question"]),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let request = ReadingRequest {
            dob: "15/06/1990".to_string(),
            ..sample_request()
        };

        assert!(matches!(request.validate(), Err(Error::DateFormat(_))));
    }

    #[test]
    fn test_request_accepts_camel_case_aliases() {
        let request: ReadingRequest = serde_json::from_str(
            r#"{"name":"Sam","birthDate":"1990-06-15","birthTime":"10:00","birthPlace":"Paris","question":"?"}"#,
        )
        .unwrap();

        assert_eq!(request.dob, "1990-06-15");
        assert_eq!(request.tob, "10:00");
        assert_eq!(request.pob, "Paris");
    }

    #[test]
    fn test_request_missing_keys_default_to_empty() {
        let request: ReadingRequest = serde_json::from_str(r#"{"name":"Sam"}"#).unwrap();
        assert!(request.question.is_empty());
        assert!(matches!(request.validate(), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_season_quarter_mapping() {
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(9), Season::Autumn);
        assert_eq!(Season::from_month(11), Season::Autumn);
        assert_eq!(Season::from_month(12), Season::Winter);
    }
}
