use chrono::NaiveDate;
use non_empty_string::NonEmptyString;
use thiserror::Error;

/// Departments offered by the add form in addition to those already present
/// in the collection.
pub const KNOWN_DEPARTMENTS: [&str; 6] = [
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Sales",
    "HR",
];

/// A single employee record in the directory.
///
/// The identifier is assigned by the store and is never user-editable.
/// Required string fields are non-empty by construction; the optional
/// fields (`phone`, `join_date`) may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Unique, store-assigned identifier.
    pub(crate) id: u32,
    /// Full name.
    pub(crate) name: NonEmptyString,
    /// Job title.
    pub(crate) position: NonEmptyString,
    /// Department the employee belongs to.
    pub(crate) department: NonEmptyString,
    /// Annual salary in whole currency units.
    pub(crate) salary: u64,
    /// Contact email. Required, but not validated for format.
    pub(crate) email: NonEmptyString,
    /// Free-form phone number.
    pub(crate) phone: Option<String>,
    /// Calendar date the employee joined.
    pub(crate) join_date: Option<NaiveDate>,
}

impl Employee {
    pub(crate) fn new(id: u32, fields: ValidFields) -> Self {
        Self {
            id,
            name: fields.name,
            position: fields.position,
            department: fields.department,
            salary: fields.salary,
            email: fields.email,
            phone: fields.phone,
            join_date: fields.join_date,
        }
    }

    /// The store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The employee's full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The employee's job title.
    #[must_use]
    pub fn position(&self) -> &str {
        self.position.as_str()
    }

    /// The department the employee belongs to.
    #[must_use]
    pub fn department(&self) -> &str {
        self.department.as_str()
    }

    /// The annual salary in whole currency units.
    #[must_use]
    pub const fn salary(&self) -> u64 {
        self.salary
    }

    /// The contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// The phone number, if one was recorded.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// The join date, if one was recorded.
    #[must_use]
    pub const fn join_date(&self) -> Option<NaiveDate> {
        self.join_date
    }

    /// Converts the record back into a draft, for prefilling an edit form.
    ///
    /// The identifier is not part of the draft: edited fields are merged
    /// over the original and submitted against the existing id.
    #[must_use]
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.to_string(),
            position: self.position.to_string(),
            department: self.department.to_string(),
            salary: self.salary.to_string(),
            email: self.email.to_string(),
            phone: self.phone.clone().unwrap_or_default(),
            join_date: self
                .join_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

/// A raw, user-entered employee draft.
///
/// Every field arrives as a string, exactly as collected by a form. In
/// particular `salary` must parse to a whole number before a record is
/// accepted; parse failures are invalid input, never coerced to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    /// Full name. Required.
    pub name: String,
    /// Job title. Required.
    pub position: String,
    /// Department. Required.
    pub department: String,
    /// Annual salary as entered. Required; must parse as a non-negative
    /// integer.
    pub salary: String,
    /// Contact email. Required.
    pub email: String,
    /// Phone number. Optional; an empty string means "not recorded".
    pub phone: String,
    /// Join date in `YYYY-MM-DD` form. Optional; an empty string means
    /// "not recorded", anything else must be a valid calendar date.
    pub join_date: String,
}

/// The fields of an employee record.
///
/// Listed explicitly so that required-ness is a per-field table rather than
/// an implicit property of the validation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Full name.
    Name,
    /// Job title.
    Position,
    /// Department.
    Department,
    /// Annual salary.
    Salary,
    /// Contact email.
    Email,
    /// Phone number.
    Phone,
    /// Join date.
    JoinDate,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Position,
        Self::Department,
        Self::Salary,
        Self::Email,
        Self::Phone,
        Self::JoinDate,
    ];

    /// Whether a value must be present for the draft to be accepted.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Phone | Self::JoinDate)
    }

    /// The field's label, as shown in forms and error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Position => "position",
            Self::Department => "department",
            Self::Salary => "salary",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::JoinDate => "join date",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A recoverable input-validation failure.
///
/// Surfaced to the user for correction; the collection is never touched
/// when validation fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were left empty.
    #[error("missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<Field>),
    /// The salary did not parse as a non-negative whole number.
    #[error("salary {0:?} is not a whole number")]
    InvalidSalary(String),
    /// The join date was present but not a valid `YYYY-MM-DD` date.
    #[error("join date {0:?} is not a valid calendar date (expected YYYY-MM-DD)")]
    InvalidJoinDate(String),
}

fn format_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validated, typed employee fields, ready to be attached to an id.
#[derive(Debug, Clone)]
pub(crate) struct ValidFields {
    pub(crate) name: NonEmptyString,
    pub(crate) position: NonEmptyString,
    pub(crate) department: NonEmptyString,
    pub(crate) salary: u64,
    pub(crate) email: NonEmptyString,
    pub(crate) phone: Option<String>,
    pub(crate) join_date: Option<NaiveDate>,
}

impl EmployeeDraft {
    /// Returns the raw value entered for a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Position => &self.position,
            Field::Department => &self.department,
            Field::Salary => &self.salary,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::JoinDate => &self.join_date,
        }
    }

    /// Checks the draft against the required-field table and parses the
    /// typed fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a required field is empty, the
    /// salary is not a whole number, or a join date is present but
    /// malformed.
    pub(crate) fn validate(&self) -> Result<ValidFields, ValidationError> {
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.value(*field).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let salary: u64 = self
            .salary
            .parse()
            .map_err(|_| ValidationError::InvalidSalary(self.salary.clone()))?;

        let join_date = if self.join_date.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(&self.join_date, "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidJoinDate(self.join_date.clone()))?,
            )
        };

        let phone = if self.phone.is_empty() {
            None
        } else {
            Some(self.phone.clone())
        };

        Ok(ValidFields {
            name: non_empty(&self.name),
            position: non_empty(&self.position),
            department: non_empty(&self.department),
            salary,
            email: non_empty(&self.email),
            phone,
            join_date,
        })
    }
}

/// Converts a string whose presence has already been checked.
fn non_empty(value: &str) -> NonEmptyString {
    NonEmptyString::new(value.to_string()).expect("presence is checked before conversion")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "Dave Miller".to_string(),
            position: "Account Executive".to_string(),
            department: "Sales".to_string(),
            salary: "60000".to_string(),
            email: "dave@company.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            join_date: "2024-06-01".to_string(),
        }
    }

    #[test]
    fn complete_draft_validates() {
        let fields = full_draft().validate().unwrap();
        assert_eq!(fields.salary, 60000);
        assert_eq!(fields.phone.as_deref(), Some("+1 (555) 456-7890"));
        assert_eq!(
            fields.join_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut draft = full_draft();
        draft.phone.clear();
        draft.join_date.clear();

        let fields = draft.validate().unwrap();
        assert_eq!(fields.phone, None);
        assert_eq!(fields.join_date, None);
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let mut draft = full_draft();
        draft.name.clear();
        draft.email.clear();

        let error = draft.validate().unwrap_err();
        assert_eq!(
            error,
            ValidationError::MissingFields(vec![Field::Name, Field::Email])
        );
    }

    #[test]
    fn unparseable_salary_is_rejected() {
        let mut draft = full_draft();
        draft.salary = "sixty thousand".to_string();

        let error = draft.validate().unwrap_err();
        assert_eq!(
            error,
            ValidationError::InvalidSalary("sixty thousand".to_string())
        );
    }

    #[test]
    fn negative_salary_is_rejected() {
        let mut draft = full_draft();
        draft.salary = "-5".to_string();

        assert!(matches!(
            draft.validate().unwrap_err(),
            ValidationError::InvalidSalary(_)
        ));
    }

    #[test]
    fn fractional_salary_is_not_coerced() {
        let mut draft = full_draft();
        draft.salary = "60000.50".to_string();

        assert!(matches!(
            draft.validate().unwrap_err(),
            ValidationError::InvalidSalary(_)
        ));
    }

    #[test]
    fn malformed_join_date_is_rejected() {
        let mut draft = full_draft();
        draft.join_date = "01/06/2024".to_string();

        assert_eq!(
            draft.validate().unwrap_err(),
            ValidationError::InvalidJoinDate("01/06/2024".to_string())
        );
    }

    #[test]
    fn missing_fields_take_precedence_over_parse_errors() {
        let mut draft = full_draft();
        draft.name.clear();
        draft.salary = "lots".to_string();

        assert!(matches!(
            draft.validate().unwrap_err(),
            ValidationError::MissingFields(_)
        ));
    }

    #[test]
    fn required_field_table_matches_the_form() {
        let required: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .collect();
        assert_eq!(
            required,
            [
                Field::Name,
                Field::Position,
                Field::Department,
                Field::Salary,
                Field::Email
            ]
        );
    }
}
