use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Short code used in table headers.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "L",
            Gender::Female => "P",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Laki-laki",
            Gender::Female => "Perempuan",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let lower = raw.trim().to_lowercase();
        match lower.as_str() {
            "l" | "laki-laki" | "laki laki" | "lk" => Some(Gender::Male),
            "p" | "perempuan" | "pr" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Gender::parse(&value).ok_or_else(|| {
            format!("unknown gender `{value}` (expected Laki-laki/L or Perempuan/P)")
        })
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.label().to_string()
    }
}

/// One resident as supplied by the roster provider. The engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "area_code")]
    pub rw: Option<String>,
    #[serde(default, deserialize_with = "area_code")]
    pub rt: Option<String>,
    pub gender: Gender,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default, alias = "blood_type")]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default, alias = "marital_status")]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default, alias = "household_role")]
    pub household_role: Option<String>,
    #[serde(default, alias = "birth_date")]
    pub birth_date: Option<String>,
}

impl PersonRecord {
    pub fn new(rw: &str, rt: &str, gender: Gender) -> Self {
        Self {
            name: None,
            rw: Some(rw.to_string()),
            rt: Some(rt.to_string()),
            gender,
            religion: None,
            blood_type: None,
            education: None,
            marital_status: None,
            occupation: None,
            household_role: None,
            birth_date: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_religion(mut self, value: &str) -> Self {
        self.religion = Some(value.to_string());
        self
    }

    pub fn with_blood_type(mut self, value: &str) -> Self {
        self.blood_type = Some(value.to_string());
        self
    }

    pub fn with_education(mut self, value: &str) -> Self {
        self.education = Some(value.to_string());
        self
    }

    pub fn with_marital_status(mut self, value: &str) -> Self {
        self.marital_status = Some(value.to_string());
        self
    }

    pub fn with_occupation(mut self, value: &str) -> Self {
        self.occupation = Some(value.to_string());
        self
    }

    pub fn with_household_role(mut self, value: &str) -> Self {
        self.household_role = Some(value.to_string());
        self
    }

    pub fn with_birth_date(mut self, value: &str) -> Self {
        self.birth_date = Some(value.to_string());
        self
    }
}

// Rosters exported from spreadsheets carry RW/RT as numbers as often as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAreaCode {
    Int(i64),
    Float(f64),
    Text(String),
}

fn area_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAreaCode>::deserialize(deserializer)?;
    Ok(raw.map(|code| match code {
        RawAreaCode::Int(v) => v.to_string(),
        RawAreaCode::Float(v) => v.to_string(),
        RawAreaCode::Text(s) => s,
    }))
}
