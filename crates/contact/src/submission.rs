use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, VariantArray};
use validator::{Validate, ValidationError};

use crate::ContactError;

/// Validation code for a blank required field.
pub const REQUIRED: &str = "required";
/// Validation code for an email that does not look like `local@domain.tld`.
pub const INVALID_FORMAT: &str = "invalid_format";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
});

/// Returns true when `value` has the basic `local@domain.tld` shape.
pub fn is_email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// One contact form submission, as posted by the browser.
///
/// Missing or `null` keys deserialize as empty strings so that an absent
/// field is reported as a missing field and not as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactSubmission {
    #[serde(deserialize_with = "nullable")]
    #[validate(custom(function = "required"))]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    #[validate(custom(function = "required"))]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, AsRefStr, VariantArray)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub rule: Rule,
}

impl ContactSubmission {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            company: self.company.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }

    /// Every rule broken by this submission, one entry per field, in form order.
    pub fn violations(&self) -> Vec<Violation> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };

        let field_errors = errors.field_errors();

        Field::VARIANTS
            .iter()
            .filter_map(|field| {
                let error = field_errors.get(field.as_ref())?.first()?;
                let rule = if error.code == REQUIRED {
                    Rule::Required
                } else {
                    Rule::Format
                };

                Some(Violation {
                    field: *field,
                    rule,
                })
            })
            .collect()
    }

    /// Authoritative server-side check.
    pub fn check(&self) -> Result<(), ContactError> {
        let violations = self.violations();

        if violations.iter().any(|v| v.rule == Rule::Required) {
            return Err(ContactError::MissingFields);
        }

        if !violations.is_empty() {
            return Err(ContactError::InvalidEmail);
        }

        Ok(())
    }
}

fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED)
            .with_message(Cow::Borrowed("This field is required.")));
    }

    Ok(())
}

fn email_address(value: &str) -> Result<(), ValidationError> {
    required(value)?;

    if !is_email_shape(value.trim()) {
        return Err(ValidationError::new(INVALID_FORMAT)
            .with_message(Cow::Borrowed("Email is not in correct format.")));
    }

    Ok(())
}
