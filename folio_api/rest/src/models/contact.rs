use folio_models::contact::ContactFieldErrors;
use serde::Serialize;

/// Body of a rejected submission. `errors` maps every rejected field to its
/// message.
#[derive(Serialize)]
pub struct ApiInvalidContactForm {
    pub detail: &'static str,
    pub errors: ContactFieldErrors,
}
