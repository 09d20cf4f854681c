//! Domain records managed by the dashboard

use crate::error::{CoreError, CoreResult};
use crate::pagination::PaginationState;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;

/// Backend identifier. The API emits both numeric and string ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for EntityId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

/// A driver ("conductor") registered in the personnel records
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Driver {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A driver license
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: EntityId,
    pub conductor_id: EntityId,
    pub license_number: String,
    pub category: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub restrictions: Option<String>,
}

impl License {
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }
}

/// A documentation ("tuc") record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tuc {
    pub id: EntityId,
    pub tuc_number: String,
    pub plate: String,
    #[serde(default)]
    pub conductor_id: Option<EntityId>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One page of a list endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationState,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            pagination: PaginationState::default(),
        }
    }
}

/// License categories accepted by the backend
pub const LICENSE_CATEGORIES: [&str; 10] = [
    "A-I", "A-IIa", "A-IIb", "A-IIIa", "A-IIIb", "A-IIIc", "B-I", "B-IIa", "B-IIb", "B-IIc",
];

/// Inputs of the add-license form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LicenseField {
    LicenseNumber,
    Category,
    IssueDate,
    ExpiryDate,
}

impl LicenseField {
    pub const REQUIRED: [Self; 4] = [
        Self::LicenseNumber,
        Self::Category,
        Self::IssueDate,
        Self::ExpiryDate,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LicenseNumber => "Número de licencia",
            Self::Category => "Categoría",
            Self::IssueDate => "Fecha de emisión",
            Self::ExpiryDate => "Fecha de vencimiento",
        }
    }
}

/// Raw values of the add-license form, as typed by the user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LicenseForm {
    pub license_number: String,
    pub category: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub restrictions: String,
}

/// Body of `POST /licenses`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLicenseRequest {
    pub conductor_id: EntityId,
    pub license_number: String,
    pub category: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
}

impl LicenseForm {
    fn value(&self, field: LicenseField) -> &str {
        match field {
            LicenseField::LicenseNumber => &self.license_number,
            LicenseField::Category => &self.category,
            LicenseField::IssueDate => &self.issue_date,
            LicenseField::ExpiryDate => &self.expiry_date,
        }
    }

    pub fn set(&mut self, field: LicenseField, value: String) {
        match field {
            LicenseField::LicenseNumber => self.license_number = value,
            LicenseField::Category => self.category = value,
            LicenseField::IssueDate => self.issue_date = value,
            LicenseField::ExpiryDate => self.expiry_date = value,
        }
    }

    /// Required fields left blank, in form order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<LicenseField> {
        LicenseField::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// Check every required field, reporting the first problem
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(field) = self.missing_fields().into_iter().next() {
            return Err(CoreError::MissingField { field });
        }
        parse_date(&self.issue_date, LicenseField::IssueDate)?;
        parse_date(&self.expiry_date, LicenseField::ExpiryDate)?;
        Ok(())
    }

    /// Validate and merge the conductor identifier into the request body
    pub fn into_request(self, conductor_id: EntityId) -> CoreResult<CreateLicenseRequest> {
        self.validate()?;

        let restrictions = self.restrictions.trim();
        Ok(CreateLicenseRequest {
            conductor_id,
            license_number: self.license_number.trim().to_string(),
            category: self.category.trim().to_string(),
            issue_date: parse_date(&self.issue_date, LicenseField::IssueDate)?,
            expiry_date: parse_date(&self.expiry_date, LicenseField::ExpiryDate)?,
            restrictions: (!restrictions.is_empty()).then(|| restrictions.to_string()),
        })
    }
}

fn parse_date(value: &str, field: LicenseField) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| CoreError::InvalidDate { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> LicenseForm {
        LicenseForm {
            license_number: " Q12345678 ".into(),
            category: "A-IIb".into(),
            issue_date: "2024-01-15".into(),
            expiry_date: "2029-01-15".into(),
            restrictions: String::new(),
        }
    }

    #[test]
    fn test_entity_id_accepts_numbers_and_strings() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[12, "c-9"]"#).unwrap();
        assert_eq!(ids[0].as_str(), "12");
        assert_eq!(ids[1].as_str(), "c-9");
        assert_eq!(serde_json::to_string(&ids[0]).unwrap(), r#""12""#);
    }

    #[test]
    fn test_driver_deserializes_camel_case() {
        let driver: Driver = serde_json::from_str(
            r#"{"id":3,"firstName":"Ana","lastName":"Quispe","documentNumber":"44556677"}"#,
        )
        .unwrap();
        assert_eq!(driver.full_name(), "Ana Quispe");
        assert_eq!(driver.phone, None);
    }

    #[test]
    fn test_empty_form_reports_all_required_fields() {
        assert_eq!(LicenseForm::default().missing_fields(), LicenseField::REQUIRED);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = complete_form();
        form.set(LicenseField::Category, "   ".into());
        assert_eq!(
            form.validate(),
            Err(CoreError::MissingField {
                field: LicenseField::Category
            })
        );
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let mut form = complete_form();
        form.expiry_date = "15/01/2029".into();
        assert_eq!(
            form.validate(),
            Err(CoreError::InvalidDate {
                field: LicenseField::ExpiryDate
            })
        );
    }

    #[test]
    fn test_request_merges_conductor_id() {
        let request = complete_form().into_request(EntityId::from("42")).unwrap();

        assert_eq!(request.conductor_id.as_str(), "42");
        assert_eq!(request.license_number, "Q12345678");
        assert_eq!(request.restrictions, None);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["conductorId"], "42");
        assert_eq!(body["issueDate"], "2024-01-15");
        assert!(body.get("restrictions").is_none());
    }

    #[test]
    fn test_expiry_check() {
        let license = License {
            id: "1".into(),
            conductor_id: "42".into(),
            license_number: "Q1".into(),
            category: "A-I".into(),
            issue_date: NaiveDate::from_ymd_opt(2019, 5, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            restrictions: None,
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(license.is_expired(today));
    }
}
