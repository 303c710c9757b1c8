use thiserror::Error;

pub mod contact;
pub mod email_address;
mod macros;
pub mod portfolio;
pub mod view;

/// Returned when a string does not name any variant of a keyword enum
/// (tabs, categories, filters).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} `{value}`")]
pub struct ParseKeywordError {
    pub kind: &'static str,
    pub value: String,
}
