use chrono::NaiveDate;
use serde::Serialize;

use crate::dimensions::age::{AgeBrackets, age_in_years, parse_birth_date};
use crate::input::PersonRecord;

/// Categorical attribute of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    Religion,
    Gender,
    BloodType,
    Education,
    MaritalStatus,
    Occupation,
    HouseholdRole,
}

impl Attribute {
    pub fn value<'a>(&self, record: &'a PersonRecord) -> Option<&'a str> {
        match self {
            Attribute::Religion => record.religion.as_deref(),
            Attribute::Gender => Some(record.gender.label()),
            Attribute::BloodType => record.blood_type.as_deref(),
            Attribute::Education => record.education.as_deref(),
            Attribute::MaritalStatus => record.marital_status.as_deref(),
            Attribute::Occupation => record.occupation.as_deref(),
            Attribute::HouseholdRole => record.household_role.as_deref(),
        }
    }
}

/// How a record is mapped onto a dimension's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "kebab-case")]
pub enum Classifier {
    /// The raw attribute value must equal a label exactly.
    Attribute(Attribute),
    /// Completed years from `birthDate` to the evaluation date.
    AgeBracket(AgeBrackets),
}

/// Why a record landed in the fallback column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    Missing,
    Unmatched(String),
    InvalidBirthDate(String),
    BornAfterEvaluation(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Label(usize),
    Fallback(FallbackReason),
}

impl Classifier {
    /// Number of buckets the classifier itself produces, when it is fixed.
    pub fn bucket_count(&self) -> Option<usize> {
        match self {
            Classifier::Attribute(_) => None,
            Classifier::AgeBracket(brackets) => Some(brackets.bucket_count()),
        }
    }

    pub(crate) fn classify(
        &self,
        record: &PersonRecord,
        evaluated_on: NaiveDate,
        lookup: impl Fn(&str) -> Option<usize>,
    ) -> Classification {
        match self {
            Classifier::Attribute(attr) => match attr.value(record) {
                None => Classification::Fallback(FallbackReason::Missing),
                Some(v) if v.trim().is_empty() => {
                    Classification::Fallback(FallbackReason::Missing)
                }
                Some(v) => match lookup(v) {
                    Some(idx) => Classification::Label(idx),
                    None => Classification::Fallback(FallbackReason::Unmatched(v.to_string())),
                },
            },
            Classifier::AgeBracket(brackets) => {
                let Some(raw) = record.birth_date.as_deref() else {
                    return Classification::Fallback(FallbackReason::Missing);
                };
                if raw.trim().is_empty() {
                    return Classification::Fallback(FallbackReason::Missing);
                }
                let Some(birth) = parse_birth_date(raw) else {
                    return Classification::Fallback(FallbackReason::InvalidBirthDate(
                        raw.to_string(),
                    ));
                };
                match age_in_years(birth, evaluated_on) {
                    Some(age) => Classification::Label(brackets.bucket(age)),
                    None => Classification::Fallback(FallbackReason::BornAfterEvaluation(birth)),
                }
            }
        }
    }
}
