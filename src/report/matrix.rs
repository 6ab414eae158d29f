use serde::Serialize;

use crate::input::Gender;
use crate::model::{Cell, Report, RwGroup, Tally};

pub const TOTAL_HEADER: &str = "Total";
pub const SUBTOTAL_LABEL: &str = "Jumlah";
pub const GRAND_TOTAL_LABEL: &str = "Jumlah Total";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub text: String,
    pub colspan: usize,
    pub rowspan: usize,
}

impl HeaderCell {
    fn new(text: &str, colspan: usize, rowspan: usize) -> Self {
        Self {
            text: text.to_string(),
            colspan,
            rowspan,
        }
    }
}

/// The two header rows every table repeats: `No`, `RT`, each column label
/// spanning `L | P | L+P`, then `Total` spanning the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderBlock {
    pub top: Vec<HeaderCell>,
    pub bottom: Vec<HeaderCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Data,
    Subtotal,
    GrandTotal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub kind: RowKind,
    pub cells: Vec<String>,
}

pub fn column_count(report: &Report) -> usize {
    2 + 3 * (report.columns().len() + 1)
}

pub fn header_block(report: &Report) -> HeaderBlock {
    let mut top = vec![HeaderCell::new("No", 1, 2), HeaderCell::new("RT", 1, 2)];
    let mut bottom = Vec::with_capacity(3 * (report.columns().len() + 1));
    let labels = report
        .columns()
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(TOTAL_HEADER));
    for label in labels {
        top.push(HeaderCell::new(label, 3, 1));
        bottom.push(HeaderCell::new(Gender::Male.code(), 1, 1));
        bottom.push(HeaderCell::new(Gender::Female.code(), 1, 1));
        bottom.push(HeaderCell::new("L+P", 1, 1));
    }
    HeaderBlock { top, bottom }
}

/// Data rows of one RW numbered from 1, followed by its subtotal row.
pub fn group_rows(group: &RwGroup) -> Vec<MatrixRow> {
    let mut out = Vec::with_capacity(group.rows().len() + 1);
    for (i, row) in group.rows().iter().enumerate() {
        out.push(MatrixRow {
            kind: RowKind::Data,
            cells: tally_cells(&(i + 1).to_string(), row.rt().as_str(), row.tally()),
        });
    }
    out.push(MatrixRow {
        kind: RowKind::Subtotal,
        cells: tally_cells("", &format!("{} RW {}", SUBTOTAL_LABEL, group.rw()), group.subtotal()),
    });
    out
}

pub fn grand_total_row(report: &Report) -> MatrixRow {
    MatrixRow {
        kind: RowKind::GrandTotal,
        cells: tally_cells("", GRAND_TOTAL_LABEL, report.grand_total()),
    }
}

fn tally_cells(no: &str, rt: &str, tally: &Tally) -> Vec<String> {
    let mut cells = Vec::with_capacity(2 + 3 * (tally.width() + 1));
    cells.push(no.to_string());
    cells.push(rt.to_string());
    for cell in tally.cells() {
        push_cell(&mut cells, cell);
    }
    push_cell(&mut cells, &tally.total());
    cells
}

fn push_cell(out: &mut Vec<String>, cell: &Cell) {
    out.push(cell.male().to_string());
    out.push(cell.female().to_string());
    out.push(cell.total().to_string());
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/matrix.rs"]
mod tests;
