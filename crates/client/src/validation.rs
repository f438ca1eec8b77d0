use std::collections::BTreeMap;

use starfall_contact::{ContactSubmission, Field, Rule};
use strum::{AsRefStr, Display};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const EMAIL_FORMAT_MESSAGE: &str = "Email is not in correct format.";

/// Inline error indicators of the contact form.
///
/// Empty and malformed email have separate indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, AsRefStr)]
pub enum ErrorSlot {
    #[strum(serialize = "nameError")]
    Name,
    #[strum(serialize = "emailError")]
    Email,
    #[strum(serialize = "emailFormatError")]
    EmailFormat,
    #[strum(serialize = "messageError")]
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<ErrorSlot, &'static str>);

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, slot: ErrorSlot) -> Option<&'static str> {
        self.0.get(&slot).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorSlot, &'static str)> + '_ {
        self.0.iter().map(|(slot, message)| (*slot, *message))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Checks every field independently so each invalid one gets its message.
pub fn validate(fields: &ContactSubmission) -> FormErrors {
    let errors = fields
        .violations()
        .into_iter()
        .map(|violation| match (violation.field, violation.rule) {
            (Field::Name, _) => (ErrorSlot::Name, REQUIRED_MESSAGE),
            (Field::Email, Rule::Required) => (ErrorSlot::Email, REQUIRED_MESSAGE),
            (Field::Email, Rule::Format) => (ErrorSlot::EmailFormat, EMAIL_FORMAT_MESSAGE),
            (Field::Message, _) => (ErrorSlot::Message, REQUIRED_MESSAGE),
        })
        .collect();

    FormErrors(errors)
}
