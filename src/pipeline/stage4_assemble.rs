use chrono::NaiveDate;

use crate::dimensions::{FALLBACK_LABEL, ResolvedDimension};
use crate::model::{DataQuality, Report, RwGroup, Tally};

/// Folds RW subtotals into the grand total and wraps the report.
///
/// `groups` come from the aggregator with a trailing fallback column; it is
/// kept only if some record landed in it.
pub fn assemble(
    dimension: ResolvedDimension,
    evaluated_on: NaiveDate,
    record_count: usize,
    mut groups: Vec<RwGroup>,
    quality: DataQuality,
) -> Report {
    let width = dimension.labels().len() + 1;
    let mut grand_total = Tally::zeroed(width);
    for group in &groups {
        grand_total += group.subtotal();
    }

    let mut columns = dimension.labels().to_vec();
    let fallback_used = grand_total
        .cell(width - 1)
        .is_some_and(|cell| !cell.is_empty());
    if fallback_used {
        columns.push(FALLBACK_LABEL.to_string());
    } else {
        grand_total.drop_last_empty_column();
        for group in &mut groups {
            for tally in group.tallies_mut() {
                tally.drop_last_empty_column();
            }
        }
    }

    if !quality.is_clean() {
        tracing::warn!(
            dimension = dimension.id(),
            malformed_rw = quality.malformed_rw,
            malformed_rt = quality.malformed_rt,
            missing_value = quality.missing_value,
            unmatched_value = quality.unmatched_value,
            invalid_birth_date = quality.invalid_birth_date,
            born_after_evaluation = quality.born_after_evaluation,
            "roster has incomplete data; affected records counted under 000 or {}",
            FALLBACK_LABEL
        );
    }

    let report = Report::new(
        dimension,
        columns,
        evaluated_on,
        record_count,
        groups,
        grand_total,
        quality,
    );
    debug_assert!(report.verify().is_ok(), "{:?}", report.verify());
    tracing::debug!(
        dimension = report.dimension().id(),
        rw_groups = report.groups().len(),
        columns = report.columns().len(),
        total = report.grand_total().total().total(),
        "assembled report"
    );
    report
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_assemble.rs"]
mod tests;
