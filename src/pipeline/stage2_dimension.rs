use crate::dimensions::{CategoryDimension, LabelSource, ResolvedDimension};
use crate::input::PersonRecord;

pub fn resolve_dimension(
    dimension: &CategoryDimension,
    records: &[PersonRecord],
) -> ResolvedDimension {
    let resolved = dimension.resolve(records);
    match dimension.label_source() {
        LabelSource::Declared(_) => tracing::debug!(
            dimension = resolved.id(),
            labels = resolved.labels().len(),
            "using declared labels"
        ),
        LabelSource::Observed => tracing::debug!(
            dimension = resolved.id(),
            labels = resolved.labels().len(),
            "derived labels from roster"
        ),
    }
    resolved
}
