use chrono::NaiveDate;

use crate::dimensions::{Classification, FallbackReason, ResolvedDimension};
use crate::model::{DataQuality, RtRow, RwGroup, Tally};
use crate::pipeline::stage1_group::Grouped;

#[derive(Debug)]
pub struct Stage3Output {
    /// Every tally is `labels + 1` wide; the last column is the fallback.
    pub groups: Vec<RwGroup>,
    pub quality: DataQuality,
}

pub fn aggregate(
    grouped: &Grouped<'_>,
    dimension: &ResolvedDimension,
    evaluated_on: NaiveDate,
) -> Stage3Output {
    let width = dimension.labels().len() + 1;
    let fallback = width - 1;
    let mut quality = DataQuality {
        malformed_rw: grouped.malformed_rw,
        malformed_rt: grouped.malformed_rt,
        ..DataQuality::default()
    };

    let mut groups = Vec::with_capacity(grouped.groups.len());
    for (rw, rts) in &grouped.groups {
        let mut rows = Vec::with_capacity(rts.len());
        for (rt, members) in rts {
            let mut tally = Tally::zeroed(width);
            for record in members {
                let column = match dimension.classify(record, evaluated_on) {
                    Classification::Label(idx) => idx,
                    Classification::Fallback(reason) => {
                        note_fallback(&mut quality, &reason, dimension.id());
                        fallback
                    }
                };
                tally.record(column, record.gender);
            }
            rows.push(RtRow::new(rt.clone(), tally));
        }
        let subtotal = rows.iter().map(RtRow::tally).sum();
        groups.push(RwGroup::new(rw.clone(), rows, subtotal));
    }

    Stage3Output { groups, quality }
}

fn note_fallback(quality: &mut DataQuality, reason: &FallbackReason, dimension: &str) {
    match reason {
        FallbackReason::Missing => quality.missing_value += 1,
        FallbackReason::Unmatched(value) => {
            quality.unmatched_value += 1;
            tracing::trace!(dimension, value = %value, "value matches no label");
        }
        FallbackReason::InvalidBirthDate(raw) => {
            quality.invalid_birth_date += 1;
            tracing::trace!(dimension, raw = %raw, "unparseable birth date");
        }
        FallbackReason::BornAfterEvaluation(date) => {
            quality.born_after_evaluation += 1;
            tracing::trace!(dimension, birth_date = %date, "birth date after evaluation date");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
