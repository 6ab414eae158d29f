use chrono::NaiveDate;

use super::*;
use crate::dimensions::DimensionRegistry;
use crate::input::PersonRecord;
use crate::pipeline::build_report;

fn report() -> Report {
    let records = vec![
        PersonRecord::new("1", "1", Gender::Male).with_blood_type("A"),
        PersonRecord::new("1", "1", Gender::Female).with_blood_type("A"),
        PersonRecord::new("1", "3", Gender::Female).with_blood_type("O"),
        PersonRecord::new("2", "1", Gender::Male).with_blood_type("B"),
    ];
    let registry = DimensionRegistry::builtin().unwrap();
    build_report(
        &records,
        registry.require("blood-type").unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
}

#[test]
fn test_header_block_spans() {
    let report = report();
    let header = header_block(&report);
    let top: Vec<&str> = header.top.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(top, vec!["No", "RT", "A", "B", "AB", "O", "Total"]);
    assert_eq!(header.top[0].rowspan, 2);
    assert_eq!(header.top[1].rowspan, 2);
    assert!(header.top[2..].iter().all(|c| c.colspan == 3 && c.rowspan == 1));

    let bottom: Vec<&str> = header.bottom.iter().take(3).map(|c| c.text.as_str()).collect();
    assert_eq!(bottom, vec!["L", "P", "L+P"]);
    assert_eq!(header.bottom.len(), 15);
    assert_eq!(
        header.top.iter().map(|c| c.colspan).sum::<usize>(),
        column_count(&report)
    );
}

#[test]
fn test_group_rows_numbered_with_subtotal() {
    let report = report();
    let rows = group_rows(&report.groups()[0]);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].kind, RowKind::Data);
    assert_eq!(rows[0].cells[..5], ["1", "001", "1", "1", "2"]);
    assert_eq!(rows[1].cells[..2], ["2", "003"]);
    // O column then the row total.
    assert_eq!(rows[1].cells[11..], ["0", "1", "1", "0", "1", "1"]);

    let subtotal = &rows[2];
    assert_eq!(subtotal.kind, RowKind::Subtotal);
    assert_eq!(subtotal.cells[1], "Jumlah RW 001");
    assert_eq!(subtotal.cells[subtotal.cells.len() - 3..], ["1", "2", "3"]);
    assert!(rows.iter().all(|r| r.cells.len() == column_count(&report)));
}

#[test]
fn test_grand_total_row() {
    let report = report();
    let row = grand_total_row(&report);
    assert_eq!(row.kind, RowKind::GrandTotal);
    assert_eq!(row.cells[1], GRAND_TOTAL_LABEL);
    assert_eq!(row.cells[row.cells.len() - 3..], ["2", "2", "4"]);
}
