use crate::date::Date;
use crate::person::ParentStatus;
use serde::{Deserialize, Serialize};

/// Borrowed view over the flat `father*` / `mother*` fields of a profile.
#[derive(Debug, PartialEq)]
pub struct Parent<'a> {
    pub name: &'a str,
    pub date_of_birth: Date,
    pub hometown: &'a str,
    pub status: ParentStatus,
    pub death_date: Option<Date>,
    pub death_reason: Option<&'a str>,
}

/// Youth union or party membership. A join date may be missing even when
/// `member` is set.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Union {
    pub member: bool,
    pub join_date: Option<Date>,
}

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    #[default]
    Together,
    Separated,
    Divorced,
}

impl TryFrom<&str> for MaritalStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "together" => Ok(MaritalStatus::Together),
            "separated" => Ok(MaritalStatus::Separated),
            "divorced" => Ok(MaritalStatus::Divorced),
            other => Err(format!("unknown marital status: {other}")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChildrenLivingWith {
    #[default]
    Father,
    Mother,
    Other,
}

impl TryFrom<&str> for ChildrenLivingWith {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "father" => Ok(ChildrenLivingWith::Father),
            "mother" => Ok(ChildrenLivingWith::Mother),
            "other" => Ok(ChildrenLivingWith::Other),
            other => Err(format!("unknown guardian: {other}")),
        }
    }
}

/// Marital situation of the parents. Only a separated or divorced status
/// carries dates, a reason and custody information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParentsMaritalStatus {
    pub status: MaritalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separation_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divorce_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_living_with: Option<ChildrenLivingWith>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub living_with_details: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarriageStatus {
    #[default]
    Married,
    Separated,
    Divorced,
    NotRegistered,
}

impl TryFrom<&str> for MarriageStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "married" => Ok(MarriageStatus::Married),
            "separated" => Ok(MarriageStatus::Separated),
            "divorced" => Ok(MarriageStatus::Divorced),
            "not_registered" => Ok(MarriageStatus::NotRegistered),
            other => Err(format!("unknown marriage status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Spouse {
    pub full_name: String,
    pub date_of_birth: Date,
    pub hometown: String,
    pub marriage_date: Date,
    pub marriage_status: MarriageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separation_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divorce_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl TryFrom<&str> for Gender {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub full_name: String,
    pub date_of_birth: Date,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PolicyFamily {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits_received: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParentRole {
    #[default]
    Father,
    Mother,
}

impl TryFrom<&str> for ParentRole {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "father" => Ok(ParentRole::Father),
            "mother" => Ok(ParentRole::Mother),
            other => Err(format!("unknown parent: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParentSeriousIllness {
    pub parent: ParentRole,
    pub full_name: String,
    pub illness: String,
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParentOfficialPosition {
    pub parent: ParentRole,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}
