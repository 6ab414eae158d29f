use super::*;
use crate::dimensions::{DimensionRegistry, FALLBACK_LABEL};
use crate::input::Gender;
use crate::model::{Cell, Tally};

fn on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn registry() -> DimensionRegistry {
    DimensionRegistry::builtin().unwrap()
}

/// Deterministic pseudo-random roster covering every built-in attribute,
/// malformed keys and blank values.
fn generated_roster(n: usize, seed: u64) -> Vec<PersonRecord> {
    const RW: &[&str] = &["1", "01", "2", "3", "10", "", "x"];
    const RT: &[&str] = &["1", "2", "002", "4", "", "7"];
    const RELIGION: &[&str] = &["Islam", "Kristen", "Katolik", "Hindu", "Buddha", "Konghucu", "", "islam"];
    const BLOOD: &[&str] = &["A", "B", "AB", "O", "-"];
    const EDUCATION: &[&str] = &["Tidak/Belum Sekolah", "SLTA/Sederajat", "Diploma IV/Strata I", ""];
    const MARITAL: &[&str] = &["Belum Kawin", "Kawin", "Cerai Hidup", "Cerai Mati", "Nikah Siri"];
    const OCCUPATION: &[&str] = &["Petani", "Guru", "Pedagang", "Nelayan", " "];
    const ROLE: &[&str] = &["Kepala Keluarga", "Istri", "Anak", "Lainnya", "Cucu"];
    const BIRTH: &[&str] = &["1950-03-02", "1988-12-31", "2019-06-16", "2019-06-14", "2030-01-01", "bukan", "2001-07-07"];

    let mut state = seed;
    let mut next = |len: usize| {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) as usize) % len
    };

    (0..n)
        .map(|i| {
            let gender = if next(2) == 0 { Gender::Male } else { Gender::Female };
            PersonRecord::new(RW[next(RW.len())], RT[next(RT.len())], gender)
                .with_name(&format!("warga-{i}"))
                .with_religion(RELIGION[next(RELIGION.len())])
                .with_blood_type(BLOOD[next(BLOOD.len())])
                .with_education(EDUCATION[next(EDUCATION.len())])
                .with_marital_status(MARITAL[next(MARITAL.len())])
                .with_occupation(OCCUPATION[next(OCCUPATION.len())])
                .with_household_role(ROLE[next(ROLE.len())])
                .with_birth_date(BIRTH[next(BIRTH.len())])
        })
        .collect()
}

#[test]
fn test_religion_cross_tab() {
    let records = vec![
        PersonRecord::new("1", "1", Gender::Male).with_religion("Islam"),
        PersonRecord::new("1", "1", Gender::Female).with_religion("Islam"),
        PersonRecord::new("1", "2", Gender::Male).with_religion("Kristen"),
    ];
    let reg = registry();
    let report = build_report(&records, reg.require("religion").unwrap(), on());

    assert_eq!(report.groups().len(), 1);
    let rw = report.group("001").unwrap();
    assert_eq!(rw.rows().len(), 2);
    assert_eq!(report.cell("001", "001", "Islam"), Some(Cell::new(1, 1)));
    assert_eq!(report.cell("001", "001", "Kristen"), Some(Cell::default()));
    assert_eq!(report.cell("001", "002", "Kristen"), Some(Cell::new(1, 0)));

    let islam = report.column_index("Islam").unwrap();
    let kristen = report.column_index("Kristen").unwrap();
    assert_eq!(rw.subtotal().cell(islam), Some(Cell::new(1, 1)));
    assert_eq!(rw.subtotal().cell(kristen), Some(Cell::new(1, 0)));
    assert_eq!(report.grand_total().total(), Cell::new(2, 1));
    assert!(!report.has_fallback_column());
    assert!(report.quality().is_clean());
}

#[test]
fn test_blank_value_lands_in_fallback() {
    let records = vec![
        PersonRecord::new("1", "1", Gender::Male).with_religion("Islam"),
        PersonRecord::new("1", "1", Gender::Female).with_religion(""),
    ];
    let reg = registry();
    let report = build_report(&records, reg.require("religion").unwrap(), on());

    assert!(report.has_fallback_column());
    assert_eq!(report.cell("001", "001", FALLBACK_LABEL), Some(Cell::new(0, 1)));
    assert_eq!(report.grand_total().total().total(), 2);
    assert_eq!(report.quality().missing_value, 1);
}

#[test]
fn test_age_brackets_on_evaluation_date() {
    let records = vec![
        PersonRecord::new("1", "1", Gender::Male).with_birth_date("2019-06-16"),
        PersonRecord::new("1", "1", Gender::Female).with_birth_date("2019-06-14"),
    ];
    let reg = registry();
    let report = build_report(&records, reg.require("age").unwrap(), on());

    assert_eq!(report.cell("001", "001", "0-4"), Some(Cell::new(1, 0)));
    assert_eq!(report.cell("001", "001", "5-9"), Some(Cell::new(0, 1)));
    assert_eq!(report.evaluated_on(), on());
}

#[test]
fn test_every_builtin_dimension_partitions_generated_roster() {
    let records = generated_roster(500, 7);
    let reg = registry();
    for dim in reg.iter() {
        let report = build_report(&records, dim, on());
        report.verify().unwrap();

        // Each record is counted exactly once.
        assert_eq!(report.grand_total().total().total(), records.len() as u64, "{}", dim.id());

        let summed: Tally = report.groups().iter().map(|g| g.subtotal()).sum();
        assert_eq!(&summed, report.grand_total(), "{}", dim.id());

        for group in report.groups() {
            let rows: Tally = group.rows().iter().map(|r| r.tally()).sum();
            assert_eq!(&rows, group.subtotal(), "{} RW {}", dim.id(), group.rw());
            for row in group.rows() {
                for cell in row.tally().cells() {
                    assert_eq!(cell.male() + cell.female(), cell.total());
                }
            }
        }

        // Declared labels keep their order ahead of the fallback.
        let resolved = report.dimension().labels();
        assert_eq!(&report.columns()[..resolved.len()], resolved);
    }
}

#[test]
fn test_keys_sorted_in_report() {
    let records = generated_roster(200, 11);
    let reg = registry();
    let report = build_report(&records, reg.require("gender").unwrap(), on());

    let rws: Vec<_> = report.groups().iter().map(|g| g.rw().clone()).collect();
    let mut sorted = rws.clone();
    sorted.sort();
    assert_eq!(rws, sorted);
    for group in report.groups() {
        let rts: Vec<_> = group.rows().iter().map(|r| r.rt().clone()).collect();
        let mut sorted = rts.clone();
        sorted.sort();
        assert_eq!(rts, sorted);
    }
}

#[test]
fn test_build_is_idempotent() {
    let records = generated_roster(300, 3);
    let reg = registry();
    let dim = reg.require("occupation").unwrap();
    let first = build_report(&records, dim, on());
    let second = build_report(&records, dim, on());
    assert_eq!(first, second);
}

#[test]
fn test_build_reports_matches_sequential_builds() {
    let records = generated_roster(400, 42);
    let reg = registry();
    let dims: Vec<&CategoryDimension> = reg.iter().collect();
    let reports = build_reports(&records, &dims, on());

    assert_eq!(reports.len(), dims.len());
    for (report, dim) in reports.iter().zip(&dims) {
        assert_eq!(report.dimension().id(), dim.id());
        assert_eq!(report, &build_report(&records, dim, on()));
    }
}

#[test]
fn test_empty_roster() {
    let reg = registry();
    let report = build_report(&[], reg.require("religion").unwrap(), on());
    assert!(report.groups().is_empty());
    assert_eq!(report.record_count(), 0);
    assert_eq!(report.grand_total().total(), Cell::default());
    assert_eq!(report.grand_total().width(), 6);
    assert!(!report.has_fallback_column());
    assert!(report.verify().is_ok());
}

#[test]
fn test_observed_dimension_on_empty_roster_has_no_columns() {
    let reg = registry();
    let report = build_report(&[], reg.require("occupation").unwrap(), on());
    assert!(report.columns().is_empty());
    assert!(report.verify().is_ok());
}
