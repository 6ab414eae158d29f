use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Fixed-width age buckets with one open-ended top bucket.
///
/// `{ width: 5, open_from: 75 }` yields `0-4, 5-9, ..., 70-74, 75+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgeBrackets {
    pub width: u32,
    pub open_from: u32,
}

impl AgeBrackets {
    pub const STANDARD: AgeBrackets = AgeBrackets {
        width: 5,
        open_from: 75,
    };

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 {
            return Err("bracket width must be positive".to_string());
        }
        if self.open_from == 0 {
            return Err("open-ended bracket must start above zero".to_string());
        }
        if self.open_from % self.width != 0 {
            return Err(format!(
                "open-ended start {} is not a multiple of width {}",
                self.open_from, self.width
            ));
        }
        Ok(())
    }

    pub fn bucket_count(&self) -> usize {
        (self.open_from / self.width) as usize + 1
    }

    /// Empty for a zero width, which `validate` rejects.
    pub fn labels(&self) -> Vec<String> {
        if self.width == 0 {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.bucket_count());
        let mut lo = 0u32;
        while lo < self.open_from {
            out.push(format!("{}-{}", lo, lo + self.width - 1));
            lo += self.width;
        }
        out.push(format!("{}+", self.open_from));
        out
    }

    pub fn bucket(&self, age: u32) -> usize {
        let last = self.bucket_count() - 1;
        ((age / self.width) as usize).min(last)
    }
}

/// Completed years between `birth` and `on`. `None` if `birth` is after `on`.
pub fn age_in_years(birth: NaiveDate, on: NaiveDate) -> Option<u32> {
    if birth > on {
        return None;
    }
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|dt| dt.date())
}

#[cfg(test)]
#[path = "../../tests/src_inline/dimensions/age.rs"]
mod tests;
