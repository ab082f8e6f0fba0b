//! Chart-ready aggregates over the record list.
//!
//! Pure functions with no side effects. Every aggregate returns `None` on an
//! empty record list; the caller checks this and skips the chart instead of
//! drawing a degenerate one. The core has no dependency on any charting
//! library; these shapes are its entire interface to one.

use crate::models::{Gender, PatientRecord};

/// Default bin count for the age histogram.
pub const DEFAULT_AGE_BINS: usize = 10;

/// Gender tally for a pie-style distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
}

/// One histogram bucket: `[start, end)`, final bucket closed.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeBucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// BMI values grouped by gender for a box-style summary chart.
/// Insertion order is preserved within each group.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiByGender {
    pub male: Vec<f64>,
    pub female: Vec<f64>,
}

/// One point of the age-vs-BMI scatter, gender carried for series coloring.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub age: u32,
    pub bmi: f64,
    pub gender: Gender,
}

/// Tally records by gender.
pub fn gender_counts(records: &[PatientRecord]) -> Option<GenderCounts> {
    if records.is_empty() {
        return None;
    }
    let male = records.iter().filter(|r| r.gender == Gender::Male).count();
    Some(GenderCounts {
        male,
        female: records.len() - male,
    })
}

/// Histogram of ages: `bins` equal-width buckets over the observed range.
///
/// Buckets are half-open `[start, end)` with the final bucket closed at the
/// observed maximum. When every age is identical the range collapses to a
/// single bucket holding all records.
pub fn age_histogram(records: &[PatientRecord], bins: usize) -> Option<Vec<AgeBucket>> {
    if records.is_empty() || bins == 0 {
        return None;
    }

    let min = records.iter().map(|r| r.age).min()? as f64;
    let max = records.iter().map(|r| r.age).max()? as f64;

    if min == max {
        return Some(vec![AgeBucket {
            start: min,
            end: max,
            count: records.len(),
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut buckets: Vec<AgeBucket> = (0..bins)
        .map(|i| AgeBucket {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for record in records {
        let age = record.age as f64;
        let mut i = ((age - min) / width) as usize;
        // The observed maximum lands in the last bucket, not past it.
        if i >= bins {
            i = bins - 1;
        }
        buckets[i].count += 1;
    }

    Some(buckets)
}

/// BMI values grouped by gender.
pub fn bmi_by_gender(records: &[PatientRecord]) -> Option<BmiByGender> {
    if records.is_empty() {
        return None;
    }
    let mut groups = BmiByGender {
        male: Vec::new(),
        female: Vec::new(),
    };
    for record in records {
        match record.gender {
            Gender::Male => groups.male.push(record.bmi),
            Gender::Female => groups.female.push(record.bmi),
        }
    }
    Some(groups)
}

/// Paired (age, bmi, gender) series for a scatter chart.
pub fn age_vs_bmi(records: &[PatientRecord]) -> Option<Vec<ScatterPoint>> {
    if records.is_empty() {
        return None;
    }
    Some(
        records
            .iter()
            .map(|r| ScatterPoint {
                age: r.age,
                bmi: r.bmi,
                gender: r.gender,
            })
            .collect(),
    )
}

/// Five-number summary of one boxplot group.
#[derive(Debug, Clone, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Summarize a group of values; `None` on an empty group.
    ///
    /// Quartiles use linear interpolation between closest ranks, the method
    /// a boxplot applies to the same data.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Some(Self {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Linear-interpolation quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = (sorted.len() - 1) as f64 * q;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
