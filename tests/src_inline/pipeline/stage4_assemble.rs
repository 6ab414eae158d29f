use super::*;
use crate::dimensions::{Attribute, CategoryDimension};
use crate::input::{Gender, PersonRecord};
use crate::model::Cell;
use crate::pipeline::stage1_group::group_records;
use crate::pipeline::stage3_aggregate::aggregate;

fn on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn run(records: &[PersonRecord]) -> Report {
    let dim = CategoryDimension::declared(
        "marital-status",
        "Status Perkawinan",
        &["Belum Kawin", "Kawin"],
        Attribute::MaritalStatus,
    )
    .unwrap();
    let resolved = dim.resolve(records);
    let grouped = group_records(records);
    let out = aggregate(&grouped, &resolved, on());
    assemble(resolved, on(), records.len(), out.groups, out.quality)
}

#[test]
fn test_fallback_column_dropped_when_unused() {
    let records = vec![
        PersonRecord::new("1", "1", Gender::Male).with_marital_status("Kawin"),
        PersonRecord::new("2", "1", Gender::Female).with_marital_status("Belum Kawin"),
    ];
    let report = run(&records);
    assert_eq!(report.columns(), &["Belum Kawin".to_string(), "Kawin".to_string()]);
    assert!(!report.has_fallback_column());
    assert_eq!(report.grand_total().width(), 2);
    for group in report.groups() {
        assert_eq!(group.subtotal().width(), 2);
        assert!(group.rows().iter().all(|r| r.tally().width() == 2));
    }
    assert!(report.verify().is_ok());
}

#[test]
fn test_fallback_column_kept_everywhere_when_used() {
    let records = vec![
        PersonRecord::new("1", "1", Gender::Male).with_marital_status("Kawin"),
        PersonRecord::new("2", "1", Gender::Female).with_marital_status("Duda"),
    ];
    let report = run(&records);
    assert!(report.has_fallback_column());
    assert_eq!(report.columns().last().map(String::as_str), Some(FALLBACK_LABEL));
    // RW 001 never used the fallback but still carries the column.
    assert_eq!(
        report.cell("001", "001", FALLBACK_LABEL),
        Some(Cell::default())
    );
    assert_eq!(
        report.cell("002", "001", FALLBACK_LABEL),
        Some(Cell::new(0, 1))
    );
    assert_eq!(report.grand_total().cell(2), Some(Cell::new(0, 1)));
    assert!(report.verify().is_ok());
}

#[test]
fn test_grand_total_is_sum_of_subtotals() {
    let records = vec![
        PersonRecord::new("1", "1", Gender::Male).with_marital_status("Kawin"),
        PersonRecord::new("1", "2", Gender::Female).with_marital_status("Kawin"),
        PersonRecord::new("5", "1", Gender::Male).with_marital_status("Kawin"),
    ];
    let report = run(&records);
    assert_eq!(report.grand_total().cell(1), Some(Cell::new(2, 1)));
    assert_eq!(report.grand_total().total(), Cell::new(2, 1));
    assert_eq!(report.record_count(), 3);
}

#[test]
fn test_verify_detects_tampering() {
    let records = vec![PersonRecord::new("1", "1", Gender::Male).with_marital_status("Kawin")];
    let report = run(&records);
    let tampered = Report::new(
        report.dimension().clone(),
        report.columns().to_vec(),
        report.evaluated_on(),
        report.record_count() + 1,
        report.groups().to_vec(),
        report.grand_total().clone(),
        *report.quality(),
    );
    assert!(matches!(
        tampered.verify(),
        Err(crate::error::ReportError::Inconsistent(_))
    ));
}
