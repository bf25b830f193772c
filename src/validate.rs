//! Turns raw form input into a typed [`Profile`].
//!
//! Validation is pure and all-or-nothing: every field is checked, every
//! failure is reported with the camelCase path of the offending field, and a
//! profile is only produced when no field failed.

use crate::date::Date;
use crate::form::{
    ChildForm, DebtForm, DrugUseForm, EconomicHardshipForm, EducationDetailForm,
    LegalViolationForm, OfficialPositionForm, ParentForm, ParentsMaritalStatusForm, PersonForm,
    PolicyFamilyForm, RelativeAbroadForm, RelativeViolationForm, Section, SeriousIllnessForm,
    SpouseForm, TattooForm, TravelForm,
};
use crate::person::{
    Child, ChildrenLivingWith, Debt, DrugUse, EconomicHardship, EducationDetail, LegalViolation,
    LegalViolations, MaritalStatus, MarriageStatus, ParentOfficialPosition, ParentSeriousIllness,
    ParentStatus, ParentsMaritalStatus, PolicyFamily, Profile, RelativeAbroad, RelativeViolation,
    Spouse, Tattoo, Travel,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub section: Section,
    pub message: String,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field(&self, path: &str) -> Option<&FieldError> {
        self.errors.iter().find(|it| it.path == path)
    }

    pub fn by_section(&self) -> BTreeMap<Section, Vec<&FieldError>> {
        let mut map = BTreeMap::<Section, Vec<&FieldError>>::new();
        for error in &self.errors {
            map.entry(error.section).or_default().push(error);
        }
        map
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} invalid field(s)", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Collects field errors. Failed fields yield placeholder values which are
/// discarded since no profile is produced once an error was recorded.
struct Checker {
    section: Section,
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            path: path.to_string(),
            section: self.section,
            message: message.into(),
        });
    }

    fn text(&mut self, path: &str, value: &str, min_chars: usize, message: &str) -> String {
        let value = value.trim();
        if value.chars().count() < min_chars.max(1) {
            self.fail(path, message);
        }
        value.to_string()
    }

    fn date(&mut self, path: &str, value: &str, message: &str) -> Date {
        if value.trim().is_empty() {
            self.fail(path, message);
            return Date::default();
        }
        match Date::parse(value) {
            Ok(date) => date,
            Err(err) => {
                self.fail(path, err);
                Date::default()
            }
        }
    }

    fn optional_date(&mut self, path: &str, value: &str) -> Option<Date> {
        if value.trim().is_empty() {
            return None;
        }
        match Date::parse(value) {
            Ok(date) => Some(date),
            Err(err) => {
                self.fail(path, err);
                None
            }
        }
    }

    fn choice<T>(&mut self, path: &str, value: &str) -> T
    where
        T: for<'a> TryFrom<&'a str, Error = String> + Default,
    {
        let value = value.trim();
        if value.is_empty() {
            self.fail(path, "please select a value");
            return T::default();
        }
        match T::try_from(value) {
            Ok(it) => it,
            Err(err) => {
                self.fail(path, err);
                T::default()
            }
        }
    }

    fn optional_choice<T>(&mut self, path: &str, value: &str) -> Option<T>
    where
        T: for<'a> TryFrom<&'a str, Error = String> + Default,
    {
        if value.trim().is_empty() {
            None
        } else {
            Some(self.choice(path, value))
        }
    }

    fn optional_number<T: FromStr>(&mut self, path: &str, value: &str) -> Option<T> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match value.parse::<T>() {
            Ok(it) => Some(it),
            Err(_) => {
                self.fail(path, format!("not a valid number: {value}"));
                None
            }
        }
    }

    /// A required non-negative amount. Decimals are allowed.
    fn amount(&mut self, path: &str, value: &str, message: &str) -> f64 {
        if value.trim().is_empty() {
            self.fail(path, message);
            return 0.0;
        }
        match self.optional_number::<f64>(path, value) {
            Some(amount) if amount.is_finite() && amount >= 0.0 => amount,
            Some(amount) => {
                self.fail(path, format!("not a valid amount: {amount}"));
                0.0
            }
            None => 0.0,
        }
    }

    fn list<F, T>(
        &mut self,
        path: &str,
        entries: &[F],
        mut check: impl FnMut(&mut Self, &str, &F) -> T,
    ) -> Vec<T> {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| check(self, &format!("{path}[{i}]"), entry))
            .collect()
    }

    /// Like [`list`](Checker::list) but entries still equal to a blank row are
    /// left out. Paths keep the index the entry has in the form.
    fn filled_list<F, T>(
        &mut self,
        path: &str,
        entries: &[F],
        mut check: impl FnMut(&mut Self, &str, &F) -> T,
    ) -> Vec<T>
    where
        F: Default + PartialEq,
    {
        let blank = F::default();
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| **entry != blank)
            .map(|(i, entry)| check(self, &format!("{path}[{i}]"), entry))
            .collect()
    }
}

struct ParentFields {
    name: String,
    date_of_birth: Date,
    hometown: String,
    status: ParentStatus,
    death_date: Option<Date>,
    death_reason: Option<String>,
}

fn parent(checker: &mut Checker, role: &str, form: &ParentForm) -> ParentFields {
    let name = checker.text(
        &format!("{role}Name"),
        &form.name,
        2,
        "name must be at least 2 characters",
    );
    let date_of_birth = checker.date(
        &format!("{role}DateOfBirth"),
        &form.date_of_birth,
        "please pick a date of birth",
    );
    let hometown = checker.text(
        &format!("{role}Hometown"),
        &form.hometown,
        2,
        "hometown must be at least 2 characters",
    );
    let status = checker.choice::<ParentStatus>(&format!("{role}Status"), &form.status);
    let (death_date, death_reason) = match status {
        ParentStatus::Deceased => (
            checker.optional_date(&format!("{role}DeathDate"), &form.death_date),
            optional(&form.death_reason),
        ),
        ParentStatus::Alive => (None, None),
    };
    ParentFields {
        name,
        date_of_birth,
        hometown,
        status,
        death_date,
        death_reason,
    }
}

fn education_detail(checker: &mut Checker, form: &EducationDetailForm) -> EducationDetail {
    EducationDetail {
        level: checker.choice("educationDetail.level", &form.level),
        grade: checker.optional_number("educationDetail.grade", &form.grade),
        program_type: optional(&form.program_type),
        start_year: checker.optional_number("educationDetail.startYear", &form.start_year),
        end_year: checker.optional_number("educationDetail.endYear", &form.end_year),
        school_name: optional(&form.school_name),
    }
}

fn parents_marital_status(
    checker: &mut Checker,
    form: &ParentsMaritalStatusForm,
) -> ParentsMaritalStatus {
    let status = checker.choice::<MaritalStatus>("parentsMaritalStatus.status", &form.status);
    if status == MaritalStatus::Together {
        return ParentsMaritalStatus {
            status,
            ..Default::default()
        };
    }
    let children_living_with = checker.optional_choice::<ChildrenLivingWith>(
        "parentsMaritalStatus.childrenLivingWith",
        &form.children_living_with,
    );
    let living_with_details = if children_living_with == Some(ChildrenLivingWith::Other) {
        Some(checker.text(
            "parentsMaritalStatus.livingWithDetails",
            &form.living_with_details,
            1,
            "please describe who the children live with",
        ))
    } else {
        None
    };
    ParentsMaritalStatus {
        status,
        separation_date: checker
            .optional_date("parentsMaritalStatus.separationDate", &form.separation_date),
        divorce_date: if status == MaritalStatus::Divorced {
            checker.optional_date("parentsMaritalStatus.divorceDate", &form.divorce_date)
        } else {
            None
        },
        reason: optional(&form.reason),
        children_living_with,
        living_with_details,
    }
}

fn spouse(checker: &mut Checker, form: &SpouseForm) -> Spouse {
    let marriage_status = checker.choice::<MarriageStatus>(
        "spouse.marriageStatus",
        &form.marriage_status,
    );
    let separated = matches!(
        marriage_status,
        MarriageStatus::Separated | MarriageStatus::Divorced
    );
    Spouse {
        full_name: checker.text(
            "spouse.fullName",
            &form.full_name,
            2,
            "name must be at least 2 characters",
        ),
        date_of_birth: checker.date(
            "spouse.dateOfBirth",
            &form.date_of_birth,
            "please pick a date of birth",
        ),
        hometown: checker.text(
            "spouse.hometown",
            &form.hometown,
            2,
            "hometown must be at least 2 characters",
        ),
        marriage_date: checker.date(
            "spouse.marriageDate",
            &form.marriage_date,
            "please pick a marriage date",
        ),
        marriage_status,
        separation_date: if separated {
            checker.optional_date("spouse.separationDate", &form.separation_date)
        } else {
            None
        },
        divorce_date: if marriage_status == MarriageStatus::Divorced {
            checker.optional_date("spouse.divorceDate", &form.divorce_date)
        } else {
            None
        },
        reason: if separated { optional(&form.reason) } else { None },
    }
}

fn child(checker: &mut Checker, path: &str, form: &ChildForm) -> Child {
    Child {
        full_name: checker.text(
            &format!("{path}.fullName"),
            &form.full_name,
            1,
            "please enter a name",
        ),
        date_of_birth: checker.date(
            &format!("{path}.dateOfBirth"),
            &form.date_of_birth,
            "please pick a date of birth",
        ),
        gender: checker.choice(&format!("{path}.gender"), &form.gender),
        notes: optional(&form.notes),
    }
}

fn policy_family(checker: &mut Checker, form: &PolicyFamilyForm) -> PolicyFamily {
    PolicyFamily {
        kind: checker.text("policyFamily.type", &form.kind, 1, "please enter the policy type"),
        certificate_number: optional(&form.certificate_number),
        details: optional(&form.details),
        benefits_received: optional(&form.benefits_received),
    }
}

fn serious_illness(
    checker: &mut Checker,
    path: &str,
    form: &SeriousIllnessForm,
) -> ParentSeriousIllness {
    ParentSeriousIllness {
        parent: checker.choice(&format!("{path}.parent"), &form.parent),
        full_name: checker.text(
            &format!("{path}.fullName"),
            &form.full_name,
            1,
            "please enter a name",
        ),
        illness: checker.text(
            &format!("{path}.illness"),
            &form.illness,
            1,
            "please enter the illness",
        ),
        condition: checker.text(
            &format!("{path}.condition"),
            &form.condition,
            1,
            "please enter the condition",
        ),
        treatment_location: optional(&form.treatment_location),
        diagnosis_date: checker.optional_date(
            &format!("{path}.diagnosisDate"),
            &form.diagnosis_date,
        ),
    }
}

fn economic_hardship(checker: &mut Checker, form: &EconomicHardshipForm) -> EconomicHardship {
    EconomicHardship {
        parent: checker.optional_choice("economicHardship.parent", &form.parent),
        parent_names: optional(&form.parent_names),
        details: optional(&form.details),
        support_received: optional(&form.support_received),
    }
}

fn official_position(
    checker: &mut Checker,
    path: &str,
    form: &OfficialPositionForm,
) -> ParentOfficialPosition {
    ParentOfficialPosition {
        parent: checker.choice(&format!("{path}.parent"), &form.parent),
        full_name: checker.text(
            &format!("{path}.fullName"),
            &form.full_name,
            1,
            "please enter a name",
        ),
        position: optional(&form.position),
        organization: optional(&form.organization),
        start_date: checker.optional_date(&format!("{path}.startDate"), &form.start_date),
        end_date: checker.optional_date(&format!("{path}.endDate"), &form.end_date),
    }
}

fn legal_violation(checker: &mut Checker, path: &str, form: &LegalViolationForm) -> LegalViolation {
    LegalViolation {
        time: checker.date(&format!("{path}.time"), &form.time, "please pick a date"),
        reason: checker.text(&format!("{path}.reason"), &form.reason, 1, "please enter the reason"),
        punishment: checker.text(
            &format!("{path}.punishment"),
            &form.punishment,
            1,
            "please enter the punishment",
        ),
        verification_result: checker.text(
            &format!("{path}.verificationResult"),
            &form.verification_result,
            1,
            "please enter the verification result",
        ),
    }
}

fn relative_violation(
    checker: &mut Checker,
    path: &str,
    form: &RelativeViolationForm,
) -> RelativeViolation {
    RelativeViolation {
        relative_name: checker.text(
            &format!("{path}.relativeName"),
            &form.relative_name,
            1,
            "please enter a name",
        ),
        relationship: checker.text(
            &format!("{path}.relationship"),
            &form.relationship,
            1,
            "please enter the relationship",
        ),
        violation: checker.text(
            &format!("{path}.violation"),
            &form.violation,
            1,
            "please enter the violation",
        ),
        violation_date: checker.date(
            &format!("{path}.violationDate"),
            &form.violation_date,
            "please pick a date",
        ),
        sentence: checker.text(
            &format!("{path}.sentence"),
            &form.sentence,
            1,
            "please enter the sentence",
        ),
    }
}

fn tattoo(checker: &mut Checker, path: &str, form: &TattooForm) -> Tattoo {
    Tattoo {
        location: checker.text(
            &format!("{path}.location"),
            &form.location,
            1,
            "please enter the location",
        ),
        description: checker.text(
            &format!("{path}.description"),
            &form.description,
            1,
            "please enter a description",
        ),
        size: checker.text(&format!("{path}.size"), &form.size, 1, "please enter the size"),
        meaning: optional(&form.meaning),
    }
}

fn relative_abroad(checker: &mut Checker, path: &str, form: &RelativeAbroadForm) -> RelativeAbroad {
    RelativeAbroad {
        relative_name: checker.text(
            &format!("{path}.relativeName"),
            &form.relative_name,
            1,
            "please enter a name",
        ),
        relationship: checker.text(
            &format!("{path}.relationship"),
            &form.relationship,
            1,
            "please enter the relationship",
        ),
        country: checker.text(
            &format!("{path}.country"),
            &form.country,
            1,
            "please enter the country",
        ),
        occupation: optional(&form.occupation),
        departure_date: checker.optional_date(
            &format!("{path}.departureDate"),
            &form.departure_date,
        ),
    }
}

fn travel(checker: &mut Checker, path: &str, form: &TravelForm) -> Travel {
    Travel {
        country: checker.text(
            &format!("{path}.country"),
            &form.country,
            1,
            "please enter the country",
        ),
        purpose: checker.text(
            &format!("{path}.purpose"),
            &form.purpose,
            1,
            "please enter the purpose",
        ),
        start_date: checker.date(
            &format!("{path}.startDate"),
            &form.start_date,
            "please pick a date",
        ),
        end_date: checker.optional_date(&format!("{path}.endDate"), &form.end_date),
    }
}

fn drug_use(checker: &mut Checker, path: &str, form: &DrugUseForm) -> DrugUse {
    DrugUse {
        substance: checker.text(
            &format!("{path}.substance"),
            &form.substance,
            1,
            "please enter the substance",
        ),
        start_date: checker.date(
            &format!("{path}.startDate"),
            &form.start_date,
            "please pick a date",
        ),
        end_date: checker.optional_date(&format!("{path}.endDate"), &form.end_date),
        treatment: optional(&form.treatment),
        verification_result: optional(&form.verification_result),
    }
}

fn debt(checker: &mut Checker, path: &str, form: &DebtForm) -> Debt {
    let interest_rate = checker.optional_number::<f64>(
        &format!("{path}.interestRate"),
        &form.interest_rate,
    );
    if let Some(rate) = interest_rate
        && !(rate.is_finite() && rate >= 0.0)
    {
        checker.fail(&format!("{path}.interestRate"), format!("not a valid interest rate: {rate}"));
    }
    Debt {
        kind: checker.choice(&format!("{path}.type"), &form.kind),
        lender: checker.text(&format!("{path}.lender"), &form.lender, 1, "please enter the lender"),
        amount: checker.amount(&format!("{path}.amount"), &form.amount, "please enter the amount"),
        remaining_amount: checker.amount(
            &format!("{path}.remainingAmount"),
            &form.remaining_amount,
            "please enter the remaining amount",
        ),
        start_date: checker.date(
            &format!("{path}.startDate"),
            &form.start_date,
            "please pick a date",
        ),
        end_date: checker.optional_date(&format!("{path}.endDate"), &form.end_date),
        purpose: checker.text(
            &format!("{path}.purpose"),
            &form.purpose,
            1,
            "please enter the purpose",
        ),
        status: checker.choice(&format!("{path}.status"), &form.status),
        interest_rate,
        notes: optional(&form.notes),
    }
}

pub fn validate(form: &PersonForm) -> Result<Profile, ValidationError> {
    let mut checker = Checker {
        section: Section::Basic,
        errors: Vec::new(),
    };
    let c = &mut checker;

    let full_name = c.text(
        "fullName",
        &form.full_name,
        2,
        "full name must be at least 2 characters",
    );
    let date_of_birth = c.date("dateOfBirth", &form.date_of_birth, "please pick a date of birth");
    let position = c.text("position", &form.position, 1, "please enter the position");
    let unit = c.text("unit", &form.unit, 1, "please enter the unit");
    let ethnicity = c.text("ethnicity", &form.ethnicity, 1, "please enter the ethnicity");
    let religion = c.text("religion", &form.religion, 1, "please enter the religion");
    let hometown = c.text("hometown", &form.hometown, 2, "hometown must be at least 2 characters");

    c.section = Section::Education;
    let education = c.text("education", &form.education, 1, "please enter the education level");
    let education_detail = form
        .education_detail
        .as_ref()
        .map(|it| education_detail(c, it));

    c.section = Section::Membership;
    let union_join_date = c.optional_date("unionJoinDate", &form.union_join_date);
    let party_join_date = c.optional_date("partyJoinDate", &form.party_join_date);

    c.section = Section::Parents;
    let father = parent(c, "father", &form.father);
    let mother = parent(c, "mother", &form.mother);
    let parents_marital_status = form
        .parents_marital_status
        .as_ref()
        .map(|it| parents_marital_status(c, it));

    c.section = Section::Family;
    let spouse = form.spouse.as_ref().map(|it| spouse(c, it));
    let children = c.list("children", &form.children, child);
    let policy_family = form.policy_family.as_ref().map(|it| policy_family(c, it));
    // the form opens with one illness row, untouched it means there is none
    let parents_serious_illness = c.filled_list(
        "parentsSeriousIllness",
        &form.parents_serious_illness,
        serious_illness,
    );
    let economic_hardship = form
        .economic_hardship
        .as_ref()
        .map(|it| economic_hardship(c, it));
    let parents_official_position = c.list(
        "parentsOfficialPosition",
        &form.parents_official_position,
        official_position,
    );

    c.section = Section::Background;
    let before_military = c.list(
        "legalViolations.beforeMilitary",
        &form.legal_violations,
        legal_violation,
    );
    let relative_violations = c.list(
        "relativeViolations",
        &form.relative_violations,
        relative_violation,
    );
    let tattoos = c.list("tattoos", &form.tattoos, tattoo);
    let relatives_abroad = c.list("relativesAbroad", &form.relatives_abroad, relative_abroad);
    let travel_history = c.list("travelHistory", &form.travel_history, travel);
    let drug_use_history = c.list("drugUseHistory", &form.drug_use_history, drug_use);

    c.section = Section::Finance;
    let debts = c.list("debts", &form.debts, debt);

    if !checker.errors.is_empty() {
        return Err(ValidationError {
            errors: checker.errors,
        });
    }
    Ok(Profile {
        full_name,
        date_of_birth,
        position,
        department: unit.clone(),
        unit,
        ethnicity,
        religion,
        hometown,
        education,
        education_detail,
        union_member: form.union_member,
        union_join_date,
        party_member: form.party_member,
        party_join_date,
        father_name: father.name,
        father_date_of_birth: father.date_of_birth,
        father_hometown: father.hometown,
        father_status: father.status,
        father_death_date: father.death_date,
        father_death_reason: father.death_reason,
        mother_name: mother.name,
        mother_date_of_birth: mother.date_of_birth,
        mother_hometown: mother.hometown,
        mother_status: mother.status,
        mother_death_date: mother.death_date,
        mother_death_reason: mother.death_reason,
        parents_marital_status,
        spouse,
        children,
        policy_family,
        parents_serious_illness,
        economic_hardship,
        parents_official_position,
        legal_violations: if before_military.is_empty() {
            None
        } else {
            Some(LegalViolations { before_military })
        },
        relative_violations,
        tattoos,
        relatives_abroad,
        travel_history,
        drug_use_history,
        debts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{DebtStatus, DebtType, Gender};
    use crate::seed::sample_form;

    #[test]
    fn test_valid_form_is_admitted() {
        let profile = validate(&sample_form()).unwrap();
        assert_eq!("Nguyen Van A", profile.full_name);
        assert_eq!(Date::from_ymd(2001, 4, 12), Some(profile.date_of_birth));
        assert_eq!("Company 3", profile.unit);
        assert_eq!(profile.unit, profile.department);
        assert_eq!(ParentStatus::Alive, profile.father_status);
        assert_eq!(None, profile.father_death_date);
        assert!(profile.spouse.is_none());
        assert!(profile.legal_violations.is_none());
    }

    #[test]
    fn test_required_fields() {
        let mut form = sample_form();
        form.full_name = " A ".to_string();
        form.date_of_birth = String::new();
        form.hometown = "H".to_string();
        form.religion = "   ".to_string();
        form.mother.name = String::new();
        let err = validate(&form).unwrap_err();
        let paths = err
            .errors()
            .iter()
            .map(|it| it.path.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            vec!["fullName", "dateOfBirth", "religion", "hometown", "motherName"],
            paths
        );
        assert_eq!(Section::Basic, err.field("fullName").unwrap().section);
        assert_eq!(Section::Parents, err.field("motherName").unwrap().section);
        let sections = err.by_section();
        assert_eq!(4, sections[&Section::Basic].len());
        assert_eq!(1, sections[&Section::Parents].len());
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut form = sample_form();
        form.full_name = "Ân".to_string();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_invalid_date() {
        let mut form = sample_form();
        form.father.date_of_birth = "1970-02-30".to_string();
        form.union_join_date = "soon".to_string();
        let err = validate(&form).unwrap_err();
        assert_eq!(2, err.len());
        assert!(err.field("fatherDateOfBirth").is_some());
        assert_eq!(
            Section::Membership,
            err.field("unionJoinDate").unwrap().section
        );
    }

    #[test]
    fn test_membership_without_join_date() {
        let mut form = sample_form();
        form.union_member = true;
        form.party_member = true;
        let profile = validate(&form).unwrap();
        assert!(profile.union().member);
        assert_eq!(None, profile.party().join_date);
    }

    #[test]
    fn test_deceased_parent_without_death_date() {
        let mut form = sample_form();
        form.mother.status = "deceased".to_string();
        let profile = validate(&form).unwrap();
        assert_eq!(ParentStatus::Deceased, profile.mother_status);
        assert_eq!(None, profile.mother_death_date);
    }

    #[test]
    fn test_death_fields_dropped_when_alive() {
        let mut form = sample_form();
        form.father.death_date = "not a date".to_string();
        form.father.death_reason = "leftover".to_string();
        let profile = validate(&form).unwrap();
        assert_eq!(None, profile.father_death_date);
        assert_eq!(None, profile.father_death_reason);
    }

    #[test]
    fn test_unknown_enum_value() {
        let mut form = sample_form();
        form.father.status = "missing".to_string();
        form.add_spouse().marriage_status = "invalid_value".to_string();
        let err = validate(&form).unwrap_err();
        assert_eq!(
            "unknown parent status: missing",
            err.field("fatherStatus").unwrap().message
        );
        let spouse = err.field("spouse.marriageStatus").unwrap();
        assert_eq!(Section::Family, spouse.section);
        assert!(spouse.message.contains("invalid_value"));
    }

    #[test]
    fn test_spouse_required_fields() {
        let mut form = sample_form();
        let spouse = form.add_spouse();
        spouse.full_name = "Le Thi D".to_string();
        spouse.hometown = "Ha Nam".to_string();
        spouse.date_of_birth = "2002-05-05".to_string();
        let err = validate(&form).unwrap_err();
        assert_eq!(1, err.len());
        assert!(err.field("spouse.marriageDate").is_some());

        let spouse = form.add_spouse();
        spouse.marriage_date = "2023-10-10".to_string();
        spouse.divorce_date = "2024-01-01".to_string();
        spouse.reason = "n/a".to_string();
        let profile = validate(&form).unwrap();
        let spouse = profile.spouse.unwrap();
        assert_eq!(MarriageStatus::Married, spouse.marriage_status);
        assert_eq!(None, spouse.divorce_date);
        assert_eq!(None, spouse.reason);
    }

    #[test]
    fn test_parents_marital_status() {
        let mut form = sample_form();
        let status = form.add_parents_marital_status();
        status.status = "separated".to_string();
        status.children_living_with = "other".to_string();
        let err = validate(&form).unwrap_err();
        assert!(
            err.field("parentsMaritalStatus.livingWithDetails")
                .is_some()
        );

        let status = form.add_parents_marital_status();
        status.living_with_details = "aunt".to_string();
        status.reason = "work".to_string();
        let profile = validate(&form).unwrap();
        let status = profile.parents_marital_status.unwrap();
        assert_eq!(MaritalStatus::Separated, status.status);
        assert_eq!(Some("aunt".to_string()), status.living_with_details);
        assert_eq!(Some("work".to_string()), status.reason);

        let status = form.add_parents_marital_status();
        status.status = "together".to_string();
        let profile = validate(&form).unwrap();
        let status = profile.parents_marital_status.unwrap();
        assert_eq!(None, status.children_living_with);
        assert_eq!(None, status.reason);

        let status = form.add_parents_marital_status();
        status.status = "divorced".to_string();
        status.children_living_with = "mother".to_string();
        status.living_with_details = "ignored".to_string();
        let profile = validate(&form).unwrap();
        let status = profile.parents_marital_status.unwrap();
        assert_eq!(Some(ChildrenLivingWith::Mother), status.children_living_with);
        assert_eq!(None, status.living_with_details);
    }

    #[test]
    fn test_list_errors_name_the_index() {
        let mut form = sample_form();
        let child = form.add_child();
        child.full_name = "Nguyen Van E".to_string();
        child.date_of_birth = "2022-01-01".to_string();
        let child = form.add_child();
        child.full_name = "Nguyen Thi F".to_string();
        child.date_of_birth = "2023-01-01".to_string();
        child.gender = "other".to_string();
        let err = validate(&form).unwrap_err();
        assert_eq!(1, err.len());
        assert_eq!("children[1].gender", err.errors()[0].path);

        form.children[1].gender = "female".to_string();
        let profile = validate(&form).unwrap();
        assert_eq!(Gender::Male, profile.children[0].gender);
        assert_eq!(Gender::Female, profile.children[1].gender);
        assert_eq!("Nguyen Thi F", profile.children[1].full_name);
    }

    #[test]
    fn test_untouched_illness_row_is_ignored() {
        let form = sample_form();
        assert_eq!(1, form.parents_serious_illness.len());
        let profile = validate(&form).unwrap();
        assert!(profile.parents_serious_illness.is_empty());
    }

    #[test]
    fn test_started_illness_row_is_checked() {
        let mut form = sample_form();
        form.add_serious_illness().full_name = "Nguyen Van B".to_string();
        let err = validate(&form).unwrap_err();
        assert_eq!(2, err.len());
        assert!(err.field("parentsSeriousIllness[1].illness").is_some());
        assert!(err.field("parentsSeriousIllness[1].condition").is_some());
        assert!(err.field("parentsSeriousIllness[0].fullName").is_none());

        let row = &mut form.parents_serious_illness[0];
        row.parent = "mother".to_string();
        let err = validate(&form).unwrap_err();
        assert!(err.field("parentsSeriousIllness[0].fullName").is_some());

        form.remove_serious_illness(0);
        let illness = &mut form.parents_serious_illness[0];
        illness.illness = "stroke".to_string();
        illness.condition = "stable".to_string();
        let profile = validate(&form).unwrap();
        assert_eq!(1, profile.parents_serious_illness.len());
        assert_eq!("Nguyen Van B", profile.parents_serious_illness[0].full_name);
    }

    #[test]
    fn test_debt_numbers() {
        let mut form = sample_form();
        let debt = form.add_debt();
        debt.kind = "bank".to_string();
        debt.lender = "BIDV".to_string();
        debt.amount = "fifty".to_string();
        debt.remaining_amount = "-3".to_string();
        debt.start_date = "2023-01-15".to_string();
        debt.purpose = "motorbike".to_string();
        debt.interest_rate = "abc".to_string();
        let err = validate(&form).unwrap_err();
        assert!(err.field("debts[0].amount").is_some());
        assert!(err.field("debts[0].remainingAmount").is_some());
        assert!(err.field("debts[0].interestRate").is_some());
        assert_eq!(Section::Finance, err.errors()[0].section);

        let debt = &mut form.debts[0];
        debt.amount = "50000000".to_string();
        debt.remaining_amount = "30000000".to_string();
        debt.interest_rate = "-1".to_string();
        let err = validate(&form).unwrap_err();
        assert_eq!(1, err.len());
        assert!(err.field("debts[0].interestRate").is_some());

        form.debts[0].interest_rate = "8.5".to_string();
        form.debts[0].status = "completed".to_string();
        let profile = validate(&form).unwrap();
        let debt = &profile.debts[0];
        assert_eq!(DebtType::Bank, debt.kind);
        assert_eq!(DebtStatus::Completed, debt.status);
        assert_eq!(50_000_000.0, debt.amount);
        assert_eq!(30_000_000.0, debt.remaining_amount);
        assert_eq!(Some(8.5), debt.interest_rate);
    }

    #[test]
    fn test_debt_amount_with_decimals() {
        let mut form = sample_form();
        let debt = form.add_debt();
        debt.lender = "Tran Van G".to_string();
        debt.amount = "1500000.5".to_string();
        debt.remaining_amount = " 250.25 ".to_string();
        debt.start_date = "2024-02-01".to_string();
        debt.purpose = "tuition".to_string();
        let profile = validate(&form).unwrap();
        assert_eq!(1_500_000.5, profile.debts[0].amount);
        assert_eq!(250.25, profile.debts[0].remaining_amount);

        form.debts[0].amount = "NaN".to_string();
        form.debts[0].remaining_amount = "-0.5".to_string();
        let err = validate(&form).unwrap_err();
        assert_eq!(2, err.len());
        assert_eq!(
            "not a valid amount: NaN",
            err.field("debts[0].amount").unwrap().message
        );
        assert!(err.field("debts[0].remainingAmount").is_some());
    }

    #[test]
    fn test_education_detail() {
        let mut form = sample_form();
        let detail = form.add_education_detail();
        detail.level = "vocational".to_string();
        detail.start_year = "2019".to_string();
        detail.end_year = "twenty".to_string();
        let err = validate(&form).unwrap_err();
        let field = err.field("educationDetail.endYear").unwrap();
        assert_eq!(Section::Education, field.section);

        form.add_education_detail().end_year = "2022".to_string();
        let detail = validate(&form).unwrap().education_detail.unwrap();
        assert_eq!(Some(2019), detail.start_year);
        assert_eq!(Some(2022), detail.end_year);
        assert_eq!(None, detail.grade);
        assert_eq!(None, detail.school_name);
    }

    #[test]
    fn test_background_records() {
        let mut form = sample_form();
        let violation = form.add_legal_violation();
        violation.time = "15/05/2019".to_string();
        violation.reason = "traffic".to_string();
        violation.punishment = "fine".to_string();
        let tattoo = form.add_tattoo();
        tattoo.location = "right arm".to_string();
        tattoo.description = "dragon".to_string();
        tattoo.size = "15cm x 10cm".to_string();
        let err = validate(&form).unwrap_err();
        assert_eq!(1, err.len());
        let field = err
            .field("legalViolations.beforeMilitary[0].verificationResult")
            .unwrap();
        assert_eq!(Section::Background, field.section);

        form.legal_violations[0].verification_result = "paid".to_string();
        let profile = validate(&form).unwrap();
        let violations = profile.legal_violations.unwrap().before_military;
        assert_eq!(Date::from_ymd(2019, 5, 15), Some(violations[0].time));
        assert_eq!(None, profile.tattoos[0].meaning);
    }

    #[test]
    fn test_display() {
        let mut form = sample_form();
        form.full_name = String::new();
        form.position = String::new();
        let err = validate(&form).unwrap_err();
        assert_eq!(
            "2 invalid field(s): fullName: full name must be at least 2 characters; position: please enter the position",
            err.to_string()
        );
    }
}
