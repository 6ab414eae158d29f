pub mod stage1_group;
pub mod stage2_dimension;
pub mod stage3_aggregate;
pub mod stage4_assemble;

use chrono::NaiveDate;

use crate::dimensions::CategoryDimension;
use crate::input::PersonRecord;
use crate::model::Report;
use crate::pipeline::stage1_group::group_records;
use crate::pipeline::stage2_dimension::resolve_dimension;
use crate::pipeline::stage3_aggregate::aggregate;
use crate::pipeline::stage4_assemble::assemble;

/// Roster × dimension × evaluation date → report. Pure; never fails on bad
/// data, which is counted under `000` keys or the fallback column instead.
pub fn build_report(
    records: &[PersonRecord],
    dimension: &CategoryDimension,
    evaluated_on: NaiveDate,
) -> Report {
    let grouped = group_records(records);
    let resolved = resolve_dimension(dimension, records);
    let stage3 = aggregate(&grouped, &resolved, evaluated_on);
    assemble(
        resolved,
        evaluated_on,
        records.len(),
        stage3.groups,
        stage3.quality,
    )
}

/// One report per dimension over the same snapshot, built on scoped threads.
/// Output order follows `dimensions`.
pub fn build_reports(
    records: &[PersonRecord],
    dimensions: &[&CategoryDimension],
    evaluated_on: NaiveDate,
) -> Vec<Report> {
    if dimensions.len() <= 1 {
        return dimensions
            .iter()
            .map(|dim| build_report(records, dim, evaluated_on))
            .collect();
    }
    std::thread::scope(|scope| {
        let handles = dimensions
            .iter()
            .map(|dim| scope.spawn(move || build_report(records, dim, evaluated_on)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(report) => report,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
