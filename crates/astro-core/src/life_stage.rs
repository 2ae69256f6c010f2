//! Coarse astrological life stages.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bucket used to flavour a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    #[serde(rename = "childhood development phase")]
    Childhood,
    #[serde(rename = "first Saturn return approach - foundational years")]
    FirstSaturnReturn,
    #[serde(rename = "Uranus opposition phase - transformation time")]
    UranusOpposition,
    #[serde(rename = "second Saturn return - mastery period")]
    SecondSaturnReturn,
    #[serde(rename = "wisdom harvest years")]
    WisdomHarvest,
}

impl LifeStage {
    /// Bucket an age in whole years. Thresholds are exclusive upper bounds.
    pub fn from_age(age: i32) -> Self {
        if age < 14 {
            LifeStage::Childhood
        } else if age < 29 {
            LifeStage::FirstSaturnReturn
        } else if age < 43 {
            LifeStage::UranusOpposition
        } else if age < 58 {
            LifeStage::SecondSaturnReturn
        } else {
            LifeStage::WisdomHarvest
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LifeStage::Childhood => "childhood development phase",
            LifeStage::FirstSaturnReturn => "first Saturn return approach - foundational years",
            LifeStage::UranusOpposition => "Uranus opposition phase - transformation time",
            LifeStage::SecondSaturnReturn => "second Saturn return - mastery period",
            LifeStage::WisdomHarvest => "wisdom harvest years",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Year-only age: `now.year - birth.year`.
///
/// Someone born in December counts a full year older from January 1st. This
/// is the accepted behaviour, not an elapsed-time calculation.
pub fn age_in_years(birth_date: NaiveDate, now: NaiveDate) -> i32 {
    now.year() - birth_date.year()
}

pub fn classify(birth_date: NaiveDate, now: NaiveDate) -> LifeStage {
    LifeStage::from_age(age_in_years(birth_date, now))
}
