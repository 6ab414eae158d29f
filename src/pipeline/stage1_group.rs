use std::collections::BTreeMap;

use crate::input::PersonRecord;
use crate::model::AreaKey;

pub type RtGroups<'a> = BTreeMap<AreaKey, Vec<&'a PersonRecord>>;

/// Records partitioned RW → RT. Keys iterate in ascending order; records keep
/// their input order inside each RT.
#[derive(Debug, Default)]
pub struct Grouped<'a> {
    pub groups: BTreeMap<AreaKey, RtGroups<'a>>,
    pub malformed_rw: usize,
    pub malformed_rt: usize,
}

impl Grouped<'_> {
    pub fn record_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(|rts| rts.values())
            .map(Vec::len)
            .sum()
    }
}

pub fn group_records(records: &[PersonRecord]) -> Grouped<'_> {
    let mut out = Grouped::default();

    for (idx, record) in records.iter().enumerate() {
        let rw = AreaKey::parse(record.rw.as_deref()).unwrap_or_else(|| {
            out.malformed_rw += 1;
            tracing::trace!(index = idx, raw = ?record.rw, "malformed RW key; grouped under 000");
            AreaKey::unknown()
        });
        let rt = AreaKey::parse(record.rt.as_deref()).unwrap_or_else(|| {
            out.malformed_rt += 1;
            tracing::trace!(index = idx, raw = ?record.rt, "malformed RT key; grouped under 000");
            AreaKey::unknown()
        });
        out.groups
            .entry(rw)
            .or_default()
            .entry(rt)
            .or_default()
            .push(record);
    }

    tracing::debug!(
        records = records.len(),
        rw_groups = out.groups.len(),
        rt_groups = out.groups.values().map(BTreeMap::len).sum::<usize>(),
        "grouped roster"
    );
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_group.rs"]
mod tests;
