//! Property tests for BMI classification and persistence round-trips.

use proptest::prelude::*;

use patient_registry_core::{
    compute_bmi, BmiCategory, Gender, PatientRecord, PatientStore, DATA_FILE,
};

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn arb_record() -> impl Strategy<Value = PatientRecord> {
    (
        "[a-zA-Z][a-zA-Z ]{0,30}[a-zA-Z]",
        0u32..120,
        arb_gender(),
        40.0f64..250.0,
        1.0f64..400.0,
    )
        .prop_map(|(name, age, gender, height, weight)| {
            PatientRecord::new(&name, age, gender, height, weight)
                .expect("valid inputs by construction")
        })
}

proptest! {
    #[test]
    fn bmi_is_deterministic(height in 40.0f64..250.0, weight in 1.0f64..400.0) {
        let first = compute_bmi(height, weight).unwrap();
        let second = compute_bmi(height, weight).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bmi_is_two_decimal_rounded(height in 40.0f64..250.0, weight in 1.0f64..400.0) {
        let (bmi, _) = compute_bmi(height, weight).unwrap();
        prop_assert_eq!((bmi * 100.0).round() / 100.0, bmi);
    }

    #[test]
    fn category_matches_threshold_table(bmi in 0.01f64..100.0) {
        let expected = if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        };
        prop_assert_eq!(BmiCategory::from_bmi(bmi), expected);
    }

    #[test]
    fn non_positive_height_always_rejected(height in -250.0f64..=0.0, weight in 1.0f64..400.0) {
        prop_assert!(compute_bmi(height, weight).is_err());
    }

    #[test]
    fn save_load_round_trip(records in prop::collection::vec(arb_record(), 1..20)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE);

        let mut store = PatientStore::open(&path);
        for record in &records {
            store.add(record.clone());
        }

        let reopened = PatientStore::open(&path);
        prop_assert_eq!(reopened.records(), &records[..]);
    }

    #[test]
    fn delete_shifts_positions(
        records in prop::collection::vec(arb_record(), 2..10),
        seed in any::<prop::sample::Index>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PatientStore::open(dir.path().join(DATA_FILE));
        for record in &records {
            store.add(record.clone());
        }

        let index = seed.index(records.len());
        store.delete(index).unwrap();

        prop_assert_eq!(store.len(), records.len() - 1);
        for (i, record) in store.records().iter().enumerate() {
            let original = if i < index { &records[i] } else { &records[i + 1] };
            prop_assert_eq!(record, original);
        }
    }
}
