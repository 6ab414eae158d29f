use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

pub mod age;
pub mod classify;
pub mod defs;
pub mod registry;

pub use classify::{Attribute, Classification, Classifier, FallbackReason};
pub use registry::DimensionRegistry;

use crate::dimensions::age::AgeBrackets;
use crate::dimensions::defs::{DefKind, DimensionDef};
use crate::error::ConfigError;
use crate::input::PersonRecord;

/// Column for records whose value matches no label.
pub const FALLBACK_LABEL: &str = "Tidak diketahui";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    /// Closed enumeration in display order.
    Declared(Vec<String>),
    /// Distinct non-blank values of the classifier's attribute in the roster,
    /// sorted. Resolved per report.
    Observed,
}

/// A validated categorical axis. Construction fails on definitions that could
/// never classify correctly, so aggregation itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDimension {
    id: String,
    title: String,
    labels: LabelSource,
    classifier: Classifier,
}

impl CategoryDimension {
    pub fn new(
        id: &str,
        title: &str,
        labels: LabelSource,
        classifier: Classifier,
    ) -> Result<Self, ConfigError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyId);
        }
        if let Classifier::AgeBracket(brackets) = classifier {
            brackets
                .validate()
                .map_err(|reason| ConfigError::InvalidBrackets {
                    id: id.to_string(),
                    reason,
                })?;
        }
        match &labels {
            LabelSource::Declared(list) => validate_declared(id, list, &classifier)?,
            LabelSource::Observed => {
                if let Some(buckets) = classifier.bucket_count() {
                    return Err(ConfigError::NonTotalClassifier {
                        id: id.to_string(),
                        labels: 0,
                        buckets,
                    });
                }
            }
        }
        Ok(Self {
            id: id.to_string(),
            title: title.to_string(),
            labels,
            classifier,
        })
    }

    pub fn declared(
        id: &str,
        title: &str,
        labels: &[&str],
        attribute: Attribute,
    ) -> Result<Self, ConfigError> {
        let labels = labels.iter().map(|s| s.to_string()).collect();
        Self::new(
            id,
            title,
            LabelSource::Declared(labels),
            Classifier::Attribute(attribute),
        )
    }

    pub fn observed(id: &str, title: &str, attribute: Attribute) -> Result<Self, ConfigError> {
        Self::new(
            id,
            title,
            LabelSource::Observed,
            Classifier::Attribute(attribute),
        )
    }

    /// Labels are generated from `brackets`; an invalid layout is reported
    /// by `new` as `InvalidBrackets`.
    pub fn age_brackets(
        id: &str,
        title: &str,
        brackets: AgeBrackets,
    ) -> Result<Self, ConfigError> {
        Self::new(
            id,
            title,
            LabelSource::Declared(brackets.labels()),
            Classifier::AgeBracket(brackets),
        )
    }

    pub fn from_def(def: &DimensionDef) -> Result<Self, ConfigError> {
        match def.kind {
            DefKind::Declared(labels, attribute) => {
                Self::declared(def.id, def.title, labels, attribute)
            }
            DefKind::Observed(attribute) => Self::observed(def.id, def.title, attribute),
            DefKind::AgeBrackets(brackets) => Self::age_brackets(def.id, def.title, brackets),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn label_source(&self) -> &LabelSource {
        &self.labels
    }

    pub fn classifier(&self) -> Classifier {
        self.classifier
    }

    /// Fixes the label list for one roster snapshot.
    pub fn resolve(&self, records: &[PersonRecord]) -> ResolvedDimension {
        let labels = match (&self.labels, self.classifier) {
            (LabelSource::Declared(list), _) => list.clone(),
            (LabelSource::Observed, Classifier::Attribute(attr)) => records
                .iter()
                .filter_map(|r| attr.value(r))
                // A value spelled like the fallback must not become a second
                // column of that name; those records land in the fallback.
                .filter(|v| !v.trim().is_empty() && *v != FALLBACK_LABEL)
                .map(str::to_string)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            // Rejected by `new`.
            (LabelSource::Observed, Classifier::AgeBracket(b)) => b.labels(),
        };
        ResolvedDimension::new(&self.id, &self.title, labels, self.classifier)
    }
}

fn validate_declared(
    id: &str,
    labels: &[String],
    classifier: &Classifier,
) -> Result<(), ConfigError> {
    if labels.is_empty() {
        return Err(ConfigError::EmptyLabels { id: id.to_string() });
    }
    let mut seen = BTreeSet::new();
    for label in labels {
        if label.trim().is_empty() {
            return Err(ConfigError::BlankLabel { id: id.to_string() });
        }
        if label == FALLBACK_LABEL {
            return Err(ConfigError::ReservedLabel {
                id: id.to_string(),
                label: label.clone(),
            });
        }
        if !seen.insert(label.as_str()) {
            return Err(ConfigError::DuplicateLabel {
                id: id.to_string(),
                label: label.clone(),
            });
        }
    }
    if let Some(buckets) = classifier.bucket_count() {
        if buckets != labels.len() {
            return Err(ConfigError::NonTotalClassifier {
                id: id.to_string(),
                labels: labels.len(),
                buckets,
            });
        }
    }
    Ok(())
}

/// A dimension with its label list fixed for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDimension {
    id: String,
    title: String,
    labels: Vec<String>,
    classifier: Classifier,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ResolvedDimension {
    fn new(id: &str, title: &str, labels: Vec<String>, classifier: Classifier) -> Self {
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        Self {
            id: id.to_string(),
            title: title.to_string(),
            labels,
            classifier,
            index,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn classifier(&self) -> Classifier {
        self.classifier
    }

    /// Total: every record maps to a label index or to the fallback.
    pub fn classify(&self, record: &PersonRecord, evaluated_on: NaiveDate) -> Classification {
        self.classifier
            .classify(record, evaluated_on, |value| self.index.get(value).copied())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/dimensions/tests.rs"]
mod tests;
