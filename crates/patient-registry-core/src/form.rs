//! Raw-string form coercion.
//!
//! The GUI hands over entry-widget text verbatim; this module owns trimming
//! and type coercion so the widget layer never touches the domain types.
//! A coercion failure is reported to the user and the form is left intact;
//! no state is mutated.

use crate::error::ValidationError;
use crate::models::{Gender, PatientRecord};

/// Raw form fields as read from the input widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
}

impl PatientForm {
    /// Coerce the raw fields into a validated record, deriving BMI.
    ///
    /// Every field is trimmed first. The first failing field wins.
    pub fn parse(&self) -> Result<PatientRecord, ValidationError> {
        let age: u32 = self
            .age
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidAge(self.age.trim().to_string()))?;
        let gender: Gender = self.gender.parse()?;
        let height: f64 = self
            .height
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidHeight(self.height.trim().to_string()))?;
        let weight: f64 = self
            .weight
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidWeight(self.weight.trim().to_string()))?;

        PatientRecord::new(&self.name, age, gender, height, weight)
    }
}
