//! Patient record model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bmi::{compute_bmi, BmiCategory};
use crate::error::ValidationError;

/// Patient gender.
///
/// Stored normalized as lowercase `"male"`/`"female"` in the persistence
/// file. Form input is parsed case-insensitively and accepts the one-letter
/// abbreviations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(ValidationError::InvalidGender(other.to_string())),
        }
    }
}

/// One patient's current biometric snapshot.
///
/// Records live in an insertion-ordered list and are addressed by position.
/// `bmi` is always derived from `height`/`weight` at construction; the
/// category is never stored and always recomputed from `bmi`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Full name, non-empty after trimming
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters, positive
    pub height: f64,
    /// Weight in kilograms, positive
    pub weight: f64,
    /// Body-mass index, two-decimal rounded, derived from height/weight
    pub bmi: f64,
}

impl PatientRecord {
    /// Build a record from validated biometrics, deriving BMI.
    ///
    /// This is the sole constructor: every create and every in-place update
    /// goes through it, so a record's `bmi` can never drift from its
    /// `height`/`weight`.
    pub fn new(
        name: &str,
        age: u32,
        gender: Gender,
        height: f64,
        weight: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let (bmi, _) = compute_bmi(height, weight)?;
        Ok(Self {
            name: name.to_string(),
            age,
            gender,
            height,
            weight,
            bmi,
        })
    }

    /// Classify the stored BMI.
    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi)
    }
}
