mod education;
mod family;
mod finance;
mod history;

pub use education::{EducationDetail, EducationLevel};
pub use family::{
    Child, ChildrenLivingWith, Gender, MaritalStatus, MarriageStatus, Parent,
    ParentOfficialPosition, ParentRole, ParentSeriousIllness, ParentsMaritalStatus,
    PolicyFamily, Spouse, Union,
};
pub use finance::{Debt, DebtStatus, DebtType, EconomicHardship, HardshipParent};
pub use history::{
    DrugUse, LegalViolation, LegalViolations, RelativeAbroad, RelativeViolation, Tattoo, Travel,
};

use crate::date::Date;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// A stored personnel record: the identifiers assigned by the store and the
/// validated profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u32,
    pub order_number: u32,
    #[serde(flatten)]
    pub profile: Profile,
}

impl Deref for Person {
    type Target = Profile;

    fn deref(&self) -> &Self::Target {
        &self.profile
    }
}

impl DerefMut for Person {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.profile
    }
}

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParentStatus {
    #[default]
    Alive,
    Deceased,
}

impl TryFrom<&str> for ParentStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "alive" => Ok(ParentStatus::Alive),
            "deceased" => Ok(ParentStatus::Deceased),
            other => Err(format!("unknown parent status: {other}")),
        }
    }
}

/// Everything a personnel record holds apart from its store-assigned
/// identifiers. This is what the validator admits and what
/// [`Store::create`](crate::store::Store::create) accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub date_of_birth: Date,
    pub position: String,
    pub department: String,
    pub unit: String,
    pub ethnicity: String,
    pub religion: String,
    pub hometown: String,
    pub education: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_detail: Option<EducationDetail>,
    pub union_member: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union_join_date: Option<Date>,
    pub party_member: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_join_date: Option<Date>,

    pub father_name: String,
    pub father_date_of_birth: Date,
    pub father_hometown: String,
    pub father_status: ParentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_death_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_death_reason: Option<String>,

    pub mother_name: String,
    pub mother_date_of_birth: Date,
    pub mother_hometown: String,
    pub mother_status: ParentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_death_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_death_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents_marital_status: Option<ParentsMaritalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<Spouse>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Child>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_family: Option<PolicyFamily>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents_serious_illness: Vec<ParentSeriousIllness>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economic_hardship: Option<EconomicHardship>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents_official_position: Vec<ParentOfficialPosition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_violations: Option<LegalViolations>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relative_violations: Vec<RelativeViolation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tattoos: Vec<Tattoo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relatives_abroad: Vec<RelativeAbroad>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub travel_history: Vec<Travel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drug_use_history: Vec<DrugUse>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub debts: Vec<Debt>,
}

impl Profile {
    pub fn father(&self) -> Parent<'_> {
        Parent {
            name: &self.father_name,
            date_of_birth: self.father_date_of_birth,
            hometown: &self.father_hometown,
            status: self.father_status,
            death_date: self.father_death_date,
            death_reason: self.father_death_reason.as_deref(),
        }
    }

    pub fn mother(&self) -> Parent<'_> {
        Parent {
            name: &self.mother_name,
            date_of_birth: self.mother_date_of_birth,
            hometown: &self.mother_hometown,
            status: self.mother_status,
            death_date: self.mother_death_date,
            death_reason: self.mother_death_reason.as_deref(),
        }
    }

    pub fn union(&self) -> Union {
        Union {
            member: self.union_member,
            join_date: self.union_join_date,
        }
    }

    pub fn party(&self) -> Union {
        Union {
            member: self.party_member,
            join_date: self.party_join_date,
        }
    }

    /// Case-insensitive substring match over the columns of the list view.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            self.full_name.as_str(),
            self.hometown.as_str(),
            self.position.as_str(),
            self.department.as_str(),
            self.unit.as_str(),
        ]
        .into_iter()
        .any(|it| it.to_lowercase().contains(&query))
    }
}
