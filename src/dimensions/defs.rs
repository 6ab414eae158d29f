use crate::dimensions::age::AgeBrackets;
use crate::dimensions::classify::Attribute;

/// Labels and classifier of a built-in dimension. Age labels come from the
/// brackets themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefKind {
    Declared(&'static [&'static str], Attribute),
    Observed(Attribute),
    AgeBrackets(AgeBrackets),
}

#[derive(Debug, Clone, Copy)]
pub struct DimensionDef {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: DefKind,
}

const RELIGION: &[&str] = &["Islam", "Kristen", "Katolik", "Hindu", "Buddha", "Konghucu"];
const GENDER: &[&str] = &["Laki-laki", "Perempuan"];
const BLOOD_TYPE: &[&str] = &["A", "B", "AB", "O"];
const EDUCATION: &[&str] = &[
    "Tidak/Belum Sekolah",
    "Belum Tamat SD/Sederajat",
    "Tamat SD/Sederajat",
    "SLTP/Sederajat",
    "SLTA/Sederajat",
    "Diploma I/II",
    "Akademi/Diploma III/S. Muda",
    "Diploma IV/Strata I",
    "Strata II",
    "Strata III",
];
const MARITAL_STATUS: &[&str] = &["Belum Kawin", "Kawin", "Cerai Hidup", "Cerai Mati"];
const HOUSEHOLD_ROLE: &[&str] = &["Kepala Keluarga", "Istri", "Anak", "Lainnya"];

const BUILTIN_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        id: "religion",
        title: "Agama",
        kind: DefKind::Declared(RELIGION, Attribute::Religion),
    },
    DimensionDef {
        id: "gender",
        title: "Jenis Kelamin",
        kind: DefKind::Declared(GENDER, Attribute::Gender),
    },
    DimensionDef {
        id: "blood-type",
        title: "Golongan Darah",
        kind: DefKind::Declared(BLOOD_TYPE, Attribute::BloodType),
    },
    DimensionDef {
        id: "education",
        title: "Pendidikan",
        kind: DefKind::Declared(EDUCATION, Attribute::Education),
    },
    DimensionDef {
        id: "marital-status",
        title: "Status Perkawinan",
        kind: DefKind::Declared(MARITAL_STATUS, Attribute::MaritalStatus),
    },
    DimensionDef {
        id: "occupation",
        title: "Pekerjaan",
        kind: DefKind::Observed(Attribute::Occupation),
    },
    DimensionDef {
        id: "household-role",
        title: "Status Hubungan Dalam Keluarga",
        kind: DefKind::Declared(HOUSEHOLD_ROLE, Attribute::HouseholdRole),
    },
    DimensionDef {
        id: "age",
        title: "Kelompok Umur",
        kind: DefKind::AgeBrackets(AgeBrackets::STANDARD),
    },
];

pub fn builtin_dimensions() -> &'static [DimensionDef] {
    BUILTIN_DIMENSIONS
}
