mod entries;

pub use entries::{
    ChildForm, DebtForm, DrugUseForm, EconomicHardshipForm, EducationDetailForm,
    LegalViolationForm, OfficialPositionForm, ParentForm, ParentsMaritalStatusForm,
    PolicyFamilyForm, RelativeAbroadForm, RelativeViolationForm, SeriousIllnessForm, SpouseForm,
    TattooForm, TravelForm,
};

use crate::error::Error;
use crate::person::{Person, Profile};
use crate::store::{Slot, Store};
use crate::validate::validate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The parts of the entry form, in display order. Field errors point back to
/// the section that holds the offending input.
#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Basic,
    Education,
    Membership,
    Parents,
    Family,
    Background,
    Finance,
}

/// Raw input for a personnel record, filled in section by section and only
/// validated on [`submit`](PersonForm::submit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonForm {
    pub full_name: String,
    pub date_of_birth: String,
    pub position: String,
    pub unit: String,
    pub ethnicity: String,
    pub religion: String,
    pub hometown: String,

    pub education: String,
    pub education_detail: Option<EducationDetailForm>,

    pub union_member: bool,
    pub union_join_date: String,
    pub party_member: bool,
    pub party_join_date: String,

    pub father: ParentForm,
    pub mother: ParentForm,
    pub parents_marital_status: Option<ParentsMaritalStatusForm>,

    pub spouse: Option<SpouseForm>,
    pub children: Vec<ChildForm>,
    pub policy_family: Option<PolicyFamilyForm>,
    pub parents_serious_illness: Vec<SeriousIllnessForm>,
    pub economic_hardship: Option<EconomicHardshipForm>,
    pub parents_official_position: Vec<OfficialPositionForm>,

    pub legal_violations: Vec<LegalViolationForm>,
    pub relative_violations: Vec<RelativeViolationForm>,
    pub tattoos: Vec<TattooForm>,
    pub relatives_abroad: Vec<RelativeAbroadForm>,
    pub travel_history: Vec<TravelForm>,
    pub drug_use_history: Vec<DrugUseForm>,

    pub debts: Vec<DebtForm>,
}

impl Default for PersonForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            date_of_birth: String::new(),
            position: String::new(),
            unit: String::new(),
            ethnicity: String::new(),
            religion: String::new(),
            hometown: String::new(),
            education: String::new(),
            education_detail: None,
            union_member: false,
            union_join_date: String::new(),
            party_member: false,
            party_join_date: String::new(),
            father: ParentForm::default(),
            mother: ParentForm::default(),
            parents_marital_status: None,
            spouse: None,
            children: Vec::new(),
            policy_family: None,
            // the entry form opens with one blank illness row
            parents_serious_illness: vec![SeriousIllnessForm::default()],
            economic_hardship: None,
            parents_official_position: Vec::new(),
            legal_violations: Vec::new(),
            relative_violations: Vec::new(),
            tattoos: Vec::new(),
            relatives_abroad: Vec::new(),
            travel_history: Vec::new(),
            drug_use_history: Vec::new(),
            debts: Vec::new(),
        }
    }
}

/// Removes the entry at `index`, keeping the order of the others.
/// Out of range indices are ignored.
fn remove_at<T>(list: &mut Vec<T>, index: usize) -> Option<T> {
    if index < list.len() {
        Some(list.remove(index))
    } else {
        None
    }
}

fn push_blank<T: Default>(list: &mut Vec<T>) -> &mut T {
    list.push(T::default());
    let last = list.len() - 1;
    &mut list[last]
}

impl PersonForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_child(&mut self) -> &mut ChildForm {
        push_blank(&mut self.children)
    }

    pub fn remove_child(&mut self, index: usize) -> Option<ChildForm> {
        remove_at(&mut self.children, index)
    }

    pub fn add_debt(&mut self) -> &mut DebtForm {
        push_blank(&mut self.debts)
    }

    pub fn remove_debt(&mut self, index: usize) -> Option<DebtForm> {
        remove_at(&mut self.debts, index)
    }

    pub fn add_serious_illness(&mut self) -> &mut SeriousIllnessForm {
        push_blank(&mut self.parents_serious_illness)
    }

    pub fn remove_serious_illness(&mut self, index: usize) -> Option<SeriousIllnessForm> {
        remove_at(&mut self.parents_serious_illness, index)
    }

    pub fn add_official_position(&mut self) -> &mut OfficialPositionForm {
        push_blank(&mut self.parents_official_position)
    }

    pub fn remove_official_position(&mut self, index: usize) -> Option<OfficialPositionForm> {
        remove_at(&mut self.parents_official_position, index)
    }

    pub fn add_legal_violation(&mut self) -> &mut LegalViolationForm {
        push_blank(&mut self.legal_violations)
    }

    pub fn remove_legal_violation(&mut self, index: usize) -> Option<LegalViolationForm> {
        remove_at(&mut self.legal_violations, index)
    }

    pub fn add_relative_violation(&mut self) -> &mut RelativeViolationForm {
        push_blank(&mut self.relative_violations)
    }

    pub fn remove_relative_violation(&mut self, index: usize) -> Option<RelativeViolationForm> {
        remove_at(&mut self.relative_violations, index)
    }

    pub fn add_tattoo(&mut self) -> &mut TattooForm {
        push_blank(&mut self.tattoos)
    }

    pub fn remove_tattoo(&mut self, index: usize) -> Option<TattooForm> {
        remove_at(&mut self.tattoos, index)
    }

    pub fn add_relative_abroad(&mut self) -> &mut RelativeAbroadForm {
        push_blank(&mut self.relatives_abroad)
    }

    pub fn remove_relative_abroad(&mut self, index: usize) -> Option<RelativeAbroadForm> {
        remove_at(&mut self.relatives_abroad, index)
    }

    pub fn add_travel(&mut self) -> &mut TravelForm {
        push_blank(&mut self.travel_history)
    }

    pub fn remove_travel(&mut self, index: usize) -> Option<TravelForm> {
        remove_at(&mut self.travel_history, index)
    }

    pub fn add_drug_use(&mut self) -> &mut DrugUseForm {
        push_blank(&mut self.drug_use_history)
    }

    pub fn remove_drug_use(&mut self, index: usize) -> Option<DrugUseForm> {
        remove_at(&mut self.drug_use_history, index)
    }

    /// Materializes a blank spouse entry, or returns the one already there.
    pub fn add_spouse(&mut self) -> &mut SpouseForm {
        self.spouse.get_or_insert_with(SpouseForm::default)
    }

    pub fn remove_spouse(&mut self) {
        self.spouse = None;
    }

    pub fn add_policy_family(&mut self) -> &mut PolicyFamilyForm {
        self.policy_family
            .get_or_insert_with(PolicyFamilyForm::default)
    }

    pub fn remove_policy_family(&mut self) {
        self.policy_family = None;
    }

    pub fn add_education_detail(&mut self) -> &mut EducationDetailForm {
        self.education_detail
            .get_or_insert_with(EducationDetailForm::default)
    }

    pub fn remove_education_detail(&mut self) {
        self.education_detail = None;
    }

    pub fn add_parents_marital_status(&mut self) -> &mut ParentsMaritalStatusForm {
        self.parents_marital_status
            .get_or_insert_with(ParentsMaritalStatusForm::default)
    }

    pub fn remove_parents_marital_status(&mut self) {
        self.parents_marital_status = None;
    }

    pub fn add_economic_hardship(&mut self) -> &mut EconomicHardshipForm {
        self.economic_hardship
            .get_or_insert_with(EconomicHardshipForm::default)
    }

    pub fn remove_economic_hardship(&mut self) {
        self.economic_hardship = None;
    }

    /// Validates the form and appends the resulting record to the store.
    /// Nothing is stored when validation fails.
    pub fn submit<S: Slot>(&self, store: &mut Store<S>) -> Result<Person, Error> {
        let profile = validate(self).inspect_err(|err| {
            debug!("rejected new record: {} invalid field(s)", err.len());
        })?;
        store.create(profile).cloned()
    }

    /// Validates the form and replaces the whole record `id` with the result,
    /// keeping its order number.
    pub fn submit_update<S: Slot>(&self, id: u32, store: &mut Store<S>) -> Result<Person, Error> {
        let order_number = store.get(id).ok_or(Error::NotFound(id))?.order_number;
        let profile = validate(self).inspect_err(|err| {
            debug!("rejected update of {id}: {} invalid field(s)", err.len());
        })?;
        let person = Person {
            id,
            order_number,
            profile,
        };
        if store.update(person.clone())? {
            Ok(person)
        } else {
            Err(Error::NotFound(id))
        }
    }
}

impl From<&Profile> for PersonForm {
    fn from(value: &Profile) -> Self {
        Self {
            full_name: value.full_name.clone(),
            date_of_birth: value.date_of_birth.to_iso_string(),
            position: value.position.clone(),
            unit: value.unit.clone(),
            ethnicity: value.ethnicity.clone(),
            religion: value.religion.clone(),
            hometown: value.hometown.clone(),
            education: value.education.clone(),
            education_detail: value.education_detail.as_ref().map(Into::into),
            union_member: value.union_member,
            union_join_date: value
                .union_join_date
                .map(|it| it.to_iso_string())
                .unwrap_or_default(),
            party_member: value.party_member,
            party_join_date: value
                .party_join_date
                .map(|it| it.to_iso_string())
                .unwrap_or_default(),
            father: value.father().into(),
            mother: value.mother().into(),
            parents_marital_status: value.parents_marital_status.as_ref().map(Into::into),
            spouse: value.spouse.as_ref().map(Into::into),
            children: value.children.iter().map(Into::into).collect(),
            policy_family: value.policy_family.as_ref().map(Into::into),
            parents_serious_illness: value
                .parents_serious_illness
                .iter()
                .map(Into::into)
                .collect(),
            economic_hardship: value.economic_hardship.as_ref().map(Into::into),
            parents_official_position: value
                .parents_official_position
                .iter()
                .map(Into::into)
                .collect(),
            legal_violations: value
                .legal_violations
                .iter()
                .flat_map(|it| it.before_military.iter())
                .map(Into::into)
                .collect(),
            relative_violations: value.relative_violations.iter().map(Into::into).collect(),
            tattoos: value.tattoos.iter().map(Into::into).collect(),
            relatives_abroad: value.relatives_abroad.iter().map(Into::into).collect(),
            travel_history: value.travel_history.iter().map(Into::into).collect(),
            drug_use_history: value.drug_use_history.iter().map(Into::into).collect(),
            debts: value.debts.iter().map(Into::into).collect(),
        }
    }
}
