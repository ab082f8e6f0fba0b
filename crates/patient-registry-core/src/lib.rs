//! Patient Registry Core Library
//!
//! Local-first record keeping for patient biometrics (name, age, gender,
//! height, weight) with derived BMI and chart-ready descriptive statistics.
//!
//! # Architecture
//!
//! ```text
//! GUI form (excluded)
//!        │ raw strings
//!        ▼
//!   form::PatientForm ── trim + coerce ──► models::PatientRecord
//!                                                │
//!                                                ▼
//!                                      store::PatientStore
//!                                     (insertion-ordered list,
//!                                      whole-file JSON persist
//!                                      on every mutation)
//!                                                │
//!                       ┌────────────────────────┤
//!                       ▼                        ▼
//!                 stats::* aggregates      patients_data.json
//!                 (chart input shapes)
//! ```
//!
//! # Core principle
//!
//! **The in-memory list is authoritative.** Persistence is best-effort and
//! synchronous: every mutation rewrites the whole file, a failed write is
//! logged and the session continues, and a broken or missing file on startup
//! means an empty list, never a crash.
//!
//! # Modules
//!
//! - [`models`]: Domain types ([`PatientRecord`], [`Gender`])
//! - [`bmi`]: BMI computation and [`BmiCategory`] classification
//! - [`store`]: JSON-file record store
//! - [`stats`]: Pure aggregates for the four descriptive charts
//! - [`form`]: Raw-string form coercion for the GUI seam
//! - [`error`]: [`ValidationError`] and [`StoreError`]

pub mod bmi;
pub mod error;
pub mod form;
pub mod models;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use bmi::{compute_bmi, BmiCategory};
pub use error::{StoreError, StoreResult, ValidationError};
pub use form::PatientForm;
pub use models::{Gender, PatientRecord};
pub use stats::{
    age_histogram, age_vs_bmi, bmi_by_gender, gender_counts, AgeBucket, BmiByGender,
    FiveNumberSummary, GenderCounts, ScatterPoint, DEFAULT_AGE_BINS,
};
pub use store::{PatientStore, DATA_FILE};
