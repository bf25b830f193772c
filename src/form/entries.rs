use crate::date::Date;
use crate::person::{
    Child, Debt, DrugUse, EconomicHardship, EducationDetail, LegalViolation, Parent,
    ParentOfficialPosition, ParentSeriousIllness, ParentsMaritalStatus, PolicyFamily,
    RelativeAbroad, RelativeViolation, Spouse, Tattoo, Travel,
};
use serde::{Deserialize, Serialize};

// Form entries hold raw user input. Enum values use their serialized
// literals and blank strings stand for "not filled in".

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn date(value: Option<Date>) -> String {
    value.map(|it| it.to_iso_string()).unwrap_or_default()
}

fn number<T: ToString>(value: Option<T>) -> String {
    value.map(|it| it.to_string()).unwrap_or_default()
}

fn literal<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(it)) => it,
        _ => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentForm {
    pub name: String,
    pub date_of_birth: String,
    pub hometown: String,
    pub status: String,
    pub death_date: String,
    pub death_reason: String,
}

impl Default for ParentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_birth: String::new(),
            hometown: String::new(),
            status: "alive".to_string(),
            death_date: String::new(),
            death_reason: String::new(),
        }
    }
}

impl From<Parent<'_>> for ParentForm {
    fn from(value: Parent<'_>) -> Self {
        Self {
            name: value.name.to_string(),
            date_of_birth: value.date_of_birth.to_iso_string(),
            hometown: value.hometown.to_string(),
            status: literal(&value.status),
            death_date: date(value.death_date),
            death_reason: value.death_reason.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationDetailForm {
    pub level: String,
    pub grade: String,
    pub program_type: String,
    pub start_year: String,
    pub end_year: String,
    pub school_name: String,
}

impl Default for EducationDetailForm {
    fn default() -> Self {
        Self {
            level: "high_school".to_string(),
            grade: String::new(),
            program_type: String::new(),
            start_year: String::new(),
            end_year: String::new(),
            school_name: String::new(),
        }
    }
}

impl From<&EducationDetail> for EducationDetailForm {
    fn from(value: &EducationDetail) -> Self {
        Self {
            level: literal(&value.level),
            grade: number(value.grade),
            program_type: text(&value.program_type),
            start_year: number(value.start_year),
            end_year: number(value.end_year),
            school_name: text(&value.school_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentsMaritalStatusForm {
    pub status: String,
    pub separation_date: String,
    pub divorce_date: String,
    pub reason: String,
    pub children_living_with: String,
    pub living_with_details: String,
}

impl Default for ParentsMaritalStatusForm {
    fn default() -> Self {
        Self {
            status: "together".to_string(),
            separation_date: String::new(),
            divorce_date: String::new(),
            reason: String::new(),
            children_living_with: String::new(),
            living_with_details: String::new(),
        }
    }
}

impl From<&ParentsMaritalStatus> for ParentsMaritalStatusForm {
    fn from(value: &ParentsMaritalStatus) -> Self {
        Self {
            status: literal(&value.status),
            separation_date: date(value.separation_date),
            divorce_date: date(value.divorce_date),
            reason: text(&value.reason),
            children_living_with: value
                .children_living_with
                .as_ref()
                .map(literal)
                .unwrap_or_default(),
            living_with_details: text(&value.living_with_details),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpouseForm {
    pub full_name: String,
    pub date_of_birth: String,
    pub hometown: String,
    pub marriage_date: String,
    pub marriage_status: String,
    pub separation_date: String,
    pub divorce_date: String,
    pub reason: String,
}

impl Default for SpouseForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            date_of_birth: String::new(),
            hometown: String::new(),
            marriage_date: String::new(),
            marriage_status: "married".to_string(),
            separation_date: String::new(),
            divorce_date: String::new(),
            reason: String::new(),
        }
    }
}

impl From<&Spouse> for SpouseForm {
    fn from(value: &Spouse) -> Self {
        Self {
            full_name: value.full_name.clone(),
            date_of_birth: value.date_of_birth.to_iso_string(),
            hometown: value.hometown.clone(),
            marriage_date: value.marriage_date.to_iso_string(),
            marriage_status: literal(&value.marriage_status),
            separation_date: date(value.separation_date),
            divorce_date: date(value.divorce_date),
            reason: text(&value.reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildForm {
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub notes: String,
}

impl Default for ChildForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            date_of_birth: String::new(),
            gender: "male".to_string(),
            notes: String::new(),
        }
    }
}

impl From<&Child> for ChildForm {
    fn from(value: &Child) -> Self {
        Self {
            full_name: value.full_name.clone(),
            date_of_birth: value.date_of_birth.to_iso_string(),
            gender: literal(&value.gender),
            notes: text(&value.notes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyFamilyForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub certificate_number: String,
    pub details: String,
    pub benefits_received: String,
}

impl From<&PolicyFamily> for PolicyFamilyForm {
    fn from(value: &PolicyFamily) -> Self {
        Self {
            kind: value.kind.clone(),
            certificate_number: text(&value.certificate_number),
            details: text(&value.details),
            benefits_received: text(&value.benefits_received),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriousIllnessForm {
    pub parent: String,
    pub full_name: String,
    pub illness: String,
    pub condition: String,
    pub treatment_location: String,
    pub diagnosis_date: String,
}

impl Default for SeriousIllnessForm {
    fn default() -> Self {
        Self {
            parent: "father".to_string(),
            full_name: String::new(),
            illness: String::new(),
            condition: String::new(),
            treatment_location: String::new(),
            diagnosis_date: String::new(),
        }
    }
}

impl From<&ParentSeriousIllness> for SeriousIllnessForm {
    fn from(value: &ParentSeriousIllness) -> Self {
        Self {
            parent: literal(&value.parent),
            full_name: value.full_name.clone(),
            illness: value.illness.clone(),
            condition: value.condition.clone(),
            treatment_location: text(&value.treatment_location),
            diagnosis_date: date(value.diagnosis_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EconomicHardshipForm {
    pub parent: String,
    pub parent_names: String,
    pub details: String,
    pub support_received: String,
}

impl From<&EconomicHardship> for EconomicHardshipForm {
    fn from(value: &EconomicHardship) -> Self {
        Self {
            parent: value.parent.as_ref().map(literal).unwrap_or_default(),
            parent_names: text(&value.parent_names),
            details: text(&value.details),
            support_received: text(&value.support_received),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfficialPositionForm {
    pub parent: String,
    pub full_name: String,
    pub position: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for OfficialPositionForm {
    fn default() -> Self {
        Self {
            parent: "father".to_string(),
            full_name: String::new(),
            position: String::new(),
            organization: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl From<&ParentOfficialPosition> for OfficialPositionForm {
    fn from(value: &ParentOfficialPosition) -> Self {
        Self {
            parent: literal(&value.parent),
            full_name: value.full_name.clone(),
            position: text(&value.position),
            organization: text(&value.organization),
            start_date: date(value.start_date),
            end_date: date(value.end_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LegalViolationForm {
    pub time: String,
    pub reason: String,
    pub punishment: String,
    pub verification_result: String,
}

impl From<&LegalViolation> for LegalViolationForm {
    fn from(value: &LegalViolation) -> Self {
        Self {
            time: value.time.to_iso_string(),
            reason: value.reason.clone(),
            punishment: value.punishment.clone(),
            verification_result: value.verification_result.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativeViolationForm {
    pub relative_name: String,
    pub relationship: String,
    pub violation: String,
    pub violation_date: String,
    pub sentence: String,
}

impl From<&RelativeViolation> for RelativeViolationForm {
    fn from(value: &RelativeViolation) -> Self {
        Self {
            relative_name: value.relative_name.clone(),
            relationship: value.relationship.clone(),
            violation: value.violation.clone(),
            violation_date: value.violation_date.to_iso_string(),
            sentence: value.sentence.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TattooForm {
    pub location: String,
    pub description: String,
    pub size: String,
    pub meaning: String,
}

impl From<&Tattoo> for TattooForm {
    fn from(value: &Tattoo) -> Self {
        Self {
            location: value.location.clone(),
            description: value.description.clone(),
            size: value.size.clone(),
            meaning: text(&value.meaning),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativeAbroadForm {
    pub relative_name: String,
    pub relationship: String,
    pub country: String,
    pub occupation: String,
    pub departure_date: String,
}

impl From<&RelativeAbroad> for RelativeAbroadForm {
    fn from(value: &RelativeAbroad) -> Self {
        Self {
            relative_name: value.relative_name.clone(),
            relationship: value.relationship.clone(),
            country: value.country.clone(),
            occupation: text(&value.occupation),
            departure_date: date(value.departure_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelForm {
    pub country: String,
    pub purpose: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<&Travel> for TravelForm {
    fn from(value: &Travel) -> Self {
        Self {
            country: value.country.clone(),
            purpose: value.purpose.clone(),
            start_date: value.start_date.to_iso_string(),
            end_date: date(value.end_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DrugUseForm {
    pub substance: String,
    pub start_date: String,
    pub end_date: String,
    pub treatment: String,
    pub verification_result: String,
}

impl From<&DrugUse> for DrugUseForm {
    fn from(value: &DrugUse) -> Self {
        Self {
            substance: value.substance.clone(),
            start_date: value.start_date.to_iso_string(),
            end_date: date(value.end_date),
            treatment: text(&value.treatment),
            verification_result: text(&value.verification_result),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebtForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub lender: String,
    pub amount: String,
    pub remaining_amount: String,
    pub start_date: String,
    pub end_date: String,
    pub purpose: String,
    pub status: String,
    pub interest_rate: String,
    pub notes: String,
}

impl Default for DebtForm {
    fn default() -> Self {
        Self {
            kind: "personal".to_string(),
            lender: String::new(),
            amount: String::new(),
            remaining_amount: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            purpose: String::new(),
            status: "ongoing".to_string(),
            interest_rate: String::new(),
            notes: String::new(),
        }
    }
}

impl From<&Debt> for DebtForm {
    fn from(value: &Debt) -> Self {
        Self {
            kind: literal(&value.kind),
            lender: value.lender.clone(),
            amount: value.amount.to_string(),
            remaining_amount: value.remaining_amount.to_string(),
            start_date: value.start_date.to_iso_string(),
            end_date: date(value.end_date),
            purpose: value.purpose.clone(),
            status: literal(&value.status),
            interest_rate: number(value.interest_rate),
            notes: text(&value.notes),
        }
    }
}
