use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[default]
    HighSchool,
    Vocational,
    College,
    University,
}

impl TryFrom<&str> for EducationLevel {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "high_school" => Ok(EducationLevel::HighSchool),
            "vocational" => Ok(EducationLevel::Vocational),
            "college" => Ok(EducationLevel::College),
            "university" => Ok(EducationLevel::University),
            other => Err(format!("unknown education level: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EducationDetail {
    pub level: EducationLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
}
