use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    email_address::EmailAddress,
    macros::{keyword_enum, nutype_string},
};

nutype_string!(ContactName(validate(len_char_min = ContactName::MIN_LENGTH)));
impl ContactName {
    pub const MIN_LENGTH: usize = 2;
}

nutype_string!(ContactSubject(validate(
    len_char_min = ContactSubject::MIN_LENGTH
)));
impl ContactSubject {
    pub const MIN_LENGTH: usize = 5;
}

nutype_string!(ContactMessageContent(validate(
    len_char_min = ContactMessageContent::MIN_LENGTH
)));
impl ContactMessageContent {
    pub const MIN_LENGTH: usize = 10;
}

/// A contact form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: ContactName,
    pub email: EmailAddress,
    pub subject: ContactSubject,
    pub message: ContactMessageContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

keyword_enum!(ContactField("contact field") {
    Name => "name",
    Email => "email",
    Subject => "subject",
    Message => "message",
});

impl ContactField {
    /// The message shown next to the field when its value is rejected.
    pub fn violation(self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters",
            Self::Email => "Please enter a valid email address",
            Self::Subject => "Subject must be at least 5 characters",
            Self::Message => "Message must be at least 10 characters",
        }
    }
}

/// The raw values of a contact form as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Checks every field against its rule.
    ///
    /// All fields are checked, so the returned errors contain one entry for
    /// each field that was rejected.
    pub fn validate(&self) -> Result<ContactRequest, ContactFieldErrors> {
        let mut errors = ContactFieldErrors::default();

        let name = ContactName::try_new(self.name.clone())
            .map_err(|_| errors.reject(ContactField::Name))
            .ok();
        let email = self
            .email
            .parse::<EmailAddress>()
            .ok()
            .filter(EmailAddress::is_common_form)
            .ok_or_else(|| errors.reject(ContactField::Email))
            .ok();
        let subject = ContactSubject::try_new(self.subject.clone())
            .map_err(|_| errors.reject(ContactField::Subject))
            .ok();
        let message = ContactMessageContent::try_new(self.message.clone())
            .map_err(|_| errors.reject(ContactField::Message))
            .ok();

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactRequest {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(errors),
        }
    }
}

/// Field-level validation failures, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactFieldErrors(BTreeMap<ContactField, &'static str>);

impl ContactFieldErrors {
    fn reject(&mut self, field: ContactField) {
        self.0.insert(field, field.violation());
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.0.iter().map(|(&field, &message)| (field, message))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

keyword_enum!(SubmissionStatus("submission status") {
    Idle => "idle",
    Submitting => "submitting",
    Success => "success",
    Error => "error",
});

impl SubmissionStatus {
    /// The banner shown for this status, if any.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some("Sending..."),
            Self::Success => Some("Message sent successfully! I'll get back to you soon."),
            Self::Error => Some("Failed to send message. Please try again later."),
        }
    }
}

/// Everything a rendering surface needs to draw one contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormState {
    pub status: SubmissionStatus,
    pub fields: ContactFormFields,
    pub errors: ContactFieldErrors,
}
