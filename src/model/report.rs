use chrono::NaiveDate;
use serde::Serialize;

use crate::dimensions::{FALLBACK_LABEL, ResolvedDimension};
use crate::error::ReportError;
use crate::model::cell::Cell;
use crate::model::keys::AreaKey;
use crate::model::tally::Tally;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RtRow {
    rt: AreaKey,
    tally: Tally,
}

impl RtRow {
    pub(crate) fn new(rt: AreaKey, tally: Tally) -> Self {
        Self { rt, tally }
    }

    pub fn rt(&self) -> &AreaKey {
        &self.rt
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn row_total(&self) -> Cell {
        self.tally.total()
    }

    pub(crate) fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RwGroup {
    rw: AreaKey,
    rows: Vec<RtRow>,
    subtotal: Tally,
}

impl RwGroup {
    pub(crate) fn new(rw: AreaKey, rows: Vec<RtRow>, subtotal: Tally) -> Self {
        Self { rw, rows, subtotal }
    }

    pub fn rw(&self) -> &AreaKey {
        &self.rw
    }

    pub fn rows(&self) -> &[RtRow] {
        &self.rows
    }

    pub fn row(&self, rt: &str) -> Option<&RtRow> {
        self.rows.iter().find(|r| r.rt == rt)
    }

    pub fn subtotal(&self) -> &Tally {
        &self.subtotal
    }

    pub fn member_count(&self) -> u64 {
        self.subtotal.total().total()
    }

    pub(crate) fn tallies_mut(&mut self) -> impl Iterator<Item = &mut Tally> {
        self.rows
            .iter_mut()
            .map(RtRow::tally_mut)
            .chain(std::iter::once(&mut self.subtotal))
    }
}

/// Bad-data counters gathered while building one report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DataQuality {
    pub malformed_rw: usize,
    pub malformed_rt: usize,
    pub missing_value: usize,
    pub unmatched_value: usize,
    pub invalid_birth_date: usize,
    pub born_after_evaluation: usize,
}

impl DataQuality {
    pub fn fallback_records(&self) -> usize {
        self.missing_value + self.unmatched_value + self.invalid_birth_date + self.born_after_evaluation
    }

    pub fn is_clean(&self) -> bool {
        self.malformed_rw == 0 && self.malformed_rt == 0 && self.fallback_records() == 0
    }
}

/// The cross-tab of one roster snapshot against one dimension.
///
/// Built once by the assembler and never updated; a changed roster or
/// dimension means a new report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    dimension: ResolvedDimension,
    columns: Vec<String>,
    evaluated_on: NaiveDate,
    record_count: usize,
    groups: Vec<RwGroup>,
    grand_total: Tally,
    quality: DataQuality,
}

impl Report {
    pub(crate) fn new(
        dimension: ResolvedDimension,
        columns: Vec<String>,
        evaluated_on: NaiveDate,
        record_count: usize,
        groups: Vec<RwGroup>,
        grand_total: Tally,
        quality: DataQuality,
    ) -> Self {
        Self {
            dimension,
            columns,
            evaluated_on,
            record_count,
            groups,
            grand_total,
            quality,
        }
    }

    pub fn dimension(&self) -> &ResolvedDimension {
        &self.dimension
    }

    /// Dimension labels in declared order, plus the fallback label when any
    /// record needed it.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    pub fn has_fallback_column(&self) -> bool {
        self.columns.last().is_some_and(|c| c == FALLBACK_LABEL)
    }

    pub fn evaluated_on(&self) -> NaiveDate {
        self.evaluated_on
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn groups(&self) -> &[RwGroup] {
        &self.groups
    }

    pub fn group(&self, rw: &str) -> Option<&RwGroup> {
        self.groups.iter().find(|g| g.rw == rw)
    }

    pub fn grand_total(&self) -> &Tally {
        &self.grand_total
    }

    pub fn quality(&self) -> &DataQuality {
        &self.quality
    }

    /// Cell at `(rw, rt, label)`, if all three exist.
    pub fn cell(&self, rw: &str, rt: &str, label: &str) -> Option<Cell> {
        let column = self.column_index(label)?;
        self.group(rw)?.row(rt)?.tally().cell(column)
    }

    /// Re-checks every arithmetic invariant and reports the first violation.
    pub fn verify(&self) -> Result<(), ReportError> {
        let width = self.columns.len();
        let mut grand = Tally::zeroed(width);

        for group in &self.groups {
            let mut subtotal = Tally::zeroed(width);
            for row in &group.rows {
                let where_ = format!("RW {} RT {}", group.rw, row.rt);
                check_tally(row.tally(), width, &where_)?;
                subtotal += row.tally();
            }
            check_tally(&group.subtotal, width, &format!("RW {} subtotal", group.rw))?;
            if subtotal != group.subtotal {
                return Err(ReportError::Inconsistent(format!(
                    "RW {} subtotal does not equal the sum of its rows",
                    group.rw
                )));
            }
            grand += &group.subtotal;
        }

        check_tally(&self.grand_total, width, "grand total")?;
        if grand != self.grand_total {
            return Err(ReportError::Inconsistent(
                "grand total does not equal the sum of RW subtotals".to_string(),
            ));
        }
        let counted = self.grand_total.total().total();
        if counted != self.record_count as u64 {
            return Err(ReportError::Inconsistent(format!(
                "{} records in, {} counted",
                self.record_count, counted
            )));
        }
        Ok(())
    }
}

fn check_tally(tally: &Tally, width: usize, where_: &str) -> Result<(), ReportError> {
    if tally.width() != width {
        return Err(ReportError::Inconsistent(format!(
            "{where_}: {} columns, expected {width}",
            tally.width()
        )));
    }
    if tally.cells_sum() != tally.total() {
        return Err(ReportError::Inconsistent(format!(
            "{where_}: row total does not equal the sum of its cells"
        )));
    }
    Ok(())
}
