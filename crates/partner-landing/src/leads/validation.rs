use serde::{Deserialize, Serialize};

use super::home_size::HomeSize;

/// Raw lead form values as posted by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LeadForm {
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub home_size: Option<String>,
    #[serde(default, alias = "cp_afid")]
    pub partner_code: Option<String>,
}

/// Validated form values, consumed once when building the redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub zip_code: String,
    pub home_size: HomeSize,
    pub partner_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadField {
    ZipCode,
    HomeSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: LeadField,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("lead form rejected: {}", summarize(.errors))]
pub struct LeadValidationError {
    pub errors: Vec<FieldError>,
}

impl LeadValidationError {
    pub fn message_for(&self, field: LeadField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.message)
        .collect::<Vec<_>>()
        .join("; ")
}

pub const ZIP_LENGTH_MESSAGE: &str = "ZIP code must be 5 digits";
pub const ZIP_DIGITS_MESSAGE: &str = "ZIP code must contain only numbers";
pub const HOME_SIZE_MESSAGE: &str = "Please select your home size";

impl LeadForm {
    pub fn validate(self) -> Result<LeadSubmission, LeadValidationError> {
        let mut errors = Vec::new();

        let zip_code = self.zip_code;
        if let Some(message) = zip_code_problem(&zip_code) {
            errors.push(FieldError {
                field: LeadField::ZipCode,
                message,
            });
        }

        let home_size = self.home_size.as_deref().and_then(HomeSize::parse);
        if home_size.is_none() {
            errors.push(FieldError {
                field: LeadField::HomeSize,
                message: HOME_SIZE_MESSAGE,
            });
        }

        match home_size {
            Some(home_size) if errors.is_empty() => Ok(LeadSubmission {
                zip_code,
                home_size,
                partner_code: self
                    .partner_code
                    .map(|code| code.trim().to_string())
                    .filter(|code| !code.is_empty()),
            }),
            _ => Err(LeadValidationError { errors }),
        }
    }
}

fn zip_code_problem(zip_code: &str) -> Option<&'static str> {
    if zip_code.chars().count() != 5 {
        return Some(ZIP_LENGTH_MESSAGE);
    }
    if !zip_code.bytes().all(|byte| byte.is_ascii_digit()) {
        return Some(ZIP_DIGITS_MESSAGE);
    }
    None
}
