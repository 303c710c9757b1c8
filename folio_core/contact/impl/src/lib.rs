use std::sync::Arc;

use folio_core_contact_contracts::{ContactFeatureService, ContactSendService, ContactSubmitError};
use folio_models::contact::ContactFormFields;

pub use crate::{
    form::{ContactForm, ContactFormConfig},
    send::{ContactSendServiceConfig, ContactSendServiceImpl},
};

mod form;
mod send;

/// Handles contact submissions that arrive independently of each other, each
/// through a fresh [`ContactForm`].
#[derive(Debug)]
pub struct ContactFeatureServiceImpl<Sender> {
    send: Arc<Sender>,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFeatureConfig {
    pub form: ContactFormConfig,
}

impl<Sender> ContactFeatureServiceImpl<Sender> {
    pub fn new(send: Sender, config: ContactFeatureConfig) -> Self {
        Self {
            send: Arc::new(send),
            config,
        }
    }
}

impl<Sender> ContactFeatureService for ContactFeatureServiceImpl<Sender>
where
    Sender: ContactSendService,
{
    async fn send_message(&self, fields: ContactFormFields) -> Result<(), ContactSubmitError> {
        ContactForm::new(Arc::clone(&self.send), self.config.form.clone())
            .submit(fields)
            .await
    }
}
