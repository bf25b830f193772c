use crate::date::Date;
use crate::person::{
    Debt, DebtStatus, DebtType, EducationDetail, EducationLevel, LegalViolation, LegalViolations,
    ParentStatus, Person, Profile, RelativeViolation, Tattoo,
};

fn date(year: u16, month: u8, day: u8) -> Date {
    Date::from_ymd(year, month, day).unwrap_or_default()
}

/// Records the store starts with when nothing was persisted yet.
pub fn fake_data() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            order_number: 1,
            profile: Profile {
                full_name: "John Doe".to_string(),
                date_of_birth: date(1990, 1, 1),
                position: "Developer".to_string(),
                department: "IT".to_string(),
                unit: "IT".to_string(),
                ethnicity: "Kinh".to_string(),
                religion: "Không".to_string(),
                hometown: "Hà Nội".to_string(),
                education: "Đại học".to_string(),
                education_detail: Some(EducationDetail {
                    level: EducationLevel::University,
                    grade: None,
                    program_type: Some("Chính quy".to_string()),
                    start_year: Some(2008),
                    end_year: Some(2012),
                    school_name: Some("Đại học Bách Khoa".to_string()),
                }),
                union_member: true,
                union_join_date: Some(date(2010, 5, 15)),
                party_member: false,
                party_join_date: None,
                father_name: "John Doe Sr".to_string(),
                father_date_of_birth: date(1965, 3, 20),
                father_hometown: "Hà Nội".to_string(),
                father_status: ParentStatus::Alive,
                mother_name: "Jane Doe".to_string(),
                mother_date_of_birth: date(1968, 7, 10),
                mother_hometown: "Hà Nội".to_string(),
                mother_status: ParentStatus::Alive,
                legal_violations: Some(LegalViolations {
                    before_military: vec![LegalViolation {
                        time: date(2019, 5, 15),
                        reason: "Vi phạm giao thông".to_string(),
                        punishment: "Phạt hành chính 2.500.000đ".to_string(),
                        verification_result: "Đã nộp phạt đầy đủ".to_string(),
                    }],
                }),
                relative_violations: vec![RelativeViolation {
                    relative_name: "Nguyễn Văn A".to_string(),
                    relationship: "Chú ruột".to_string(),
                    violation: "Buôn bán hàng cấm".to_string(),
                    violation_date: date(2018, 3, 20),
                    sentence: "12 năm tù giam".to_string(),
                }],
                tattoos: vec![Tattoo {
                    location: "Cánh tay phải".to_string(),
                    description: "Hình rồng màu đen".to_string(),
                    size: "15cm x 10cm".to_string(),
                    meaning: Some("Kỷ niệm tuổi trẻ".to_string()),
                }],
                debts: vec![Debt {
                    kind: DebtType::Bank,
                    lender: "Ngân hàng BIDV".to_string(),
                    amount: 50_000_000.0,
                    remaining_amount: 30_000_000.0,
                    start_date: date(2023, 1, 15),
                    end_date: Some(date(2025, 1, 15)),
                    purpose: "Mua xe máy".to_string(),
                    status: DebtStatus::Ongoing,
                    interest_rate: Some(8.5),
                    notes: None,
                }],
                ..Default::default()
            },
        },
        Person {
            id: 2,
            order_number: 2,
            profile: Profile {
                full_name: "Jane Smith".to_string(),
                date_of_birth: date(1992, 5, 15),
                position: "Manager".to_string(),
                department: "HR".to_string(),
                unit: "HR".to_string(),
                ethnicity: "Kinh".to_string(),
                religion: "Không".to_string(),
                hometown: "Hồ Chí Minh".to_string(),
                education: "Thạc sĩ".to_string(),
                education_detail: Some(EducationDetail {
                    level: EducationLevel::University,
                    grade: None,
                    program_type: Some("Chính quy".to_string()),
                    start_year: Some(2010),
                    end_year: Some(2015),
                    school_name: Some("Đại học Quốc gia".to_string()),
                }),
                union_member: true,
                union_join_date: Some(date(2012, 8, 20)),
                party_member: true,
                party_join_date: Some(date(2015, 10, 1)),
                father_name: "Smith Sr".to_string(),
                father_date_of_birth: date(1962, 11, 5),
                father_hometown: "Hồ Chí Minh".to_string(),
                father_status: ParentStatus::Alive,
                mother_name: "Mary Smith".to_string(),
                mother_date_of_birth: date(1965, 4, 15),
                mother_hometown: "Hồ Chí Minh".to_string(),
                mother_status: ParentStatus::Alive,
                ..Default::default()
            },
        },
    ]
}

/// A form that passes validation, for tests to break one field at a time.
#[cfg(test)]
pub(crate) fn sample_form() -> crate::form::PersonForm {
    let mut form = crate::form::PersonForm::new();
    form.full_name = "Nguyen Van A".to_string();
    form.date_of_birth = "2001-04-12".to_string();
    form.position = "Private".to_string();
    form.unit = "Company 3".to_string();
    form.ethnicity = "Kinh".to_string();
    form.religion = "None".to_string();
    form.hometown = "Nam Dinh".to_string();
    form.education = "12/12".to_string();
    form.father.name = "Nguyen Van B".to_string();
    form.father.date_of_birth = "1970-02-03".to_string();
    form.father.hometown = "Nam Dinh".to_string();
    form.mother.name = "Tran Thi C".to_string();
    form.mother.date_of_birth = "1972-08-09".to_string();
    form.mother.hometown = "Thai Binh".to_string();
    form
}
