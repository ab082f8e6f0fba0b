//! Body-mass-index computation and classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// WHO BMI classification.
///
/// Lower bounds are inclusive, upper bounds exclusive: 18.5 is `Normal`,
/// 25.0 is `Overweight`, 30.0 is `Obese`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Human-readable label for table rendering.
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute BMI from height in centimeters and weight in kilograms.
///
/// `bmi = weight_kg / (height_cm / 100)^2`, rounded to two decimals with
/// round-half-away-from-zero (`f64::round` on the scaled value; equivalent
/// to round-half-up for the positive values valid here). The category is
/// classified from the rounded value, which is also the value persisted.
///
/// Fails with [`ValidationError::NonPositiveHeight`] when `height_cm <= 0`
/// (the formula divides by height squared) and
/// [`ValidationError::NonPositiveWeight`] when `weight_kg <= 0`. Inputs must
/// also be finite: `"inf"` and `"NaN"` parse as valid `f64`s, and a
/// non-finite value serializes as JSON `null`, which would poison the
/// persisted document for every later load.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<(f64, BmiCategory), ValidationError> {
    if !(height_cm > 0.0 && height_cm.is_finite()) {
        return Err(ValidationError::NonPositiveHeight(height_cm));
    }
    if !(weight_kg > 0.0 && weight_kg.is_finite()) {
        return Err(ValidationError::NonPositiveWeight(weight_kg));
    }

    let height_m = height_cm / 100.0;
    let bmi = round2(weight_kg / (height_m * height_m));
    Ok((bmi, BmiCategory::from_bmi(bmi)))
}

/// Round to two decimal places, halves away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
