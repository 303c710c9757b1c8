use std::{sync::Arc, time::Duration};

use folio_core_contact_contracts::{ContactSendError, ContactSendService};
use folio_email_contracts::{Email, EmailService};
use folio_models::{contact::ContactRequest, email_address::EmailAddressWithName};
use folio_utils::trace_instrument;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ContactSendServiceImpl<EmailS> {
    email: EmailS,
    config: ContactSendServiceConfig,
}

#[derive(Debug, Clone)]
pub enum ContactSendServiceConfig {
    /// Accept every request after waiting for `delay`.
    Simulated { delay: Duration },
    /// Forward every request to `recipient` via email.
    Email {
        recipient: Arc<EmailAddressWithName>,
    },
}

impl<EmailS> ContactSendServiceImpl<EmailS> {
    pub fn new(email: EmailS, config: ContactSendServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactSendService for ContactSendServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    #[trace_instrument(skip_all, fields(name = %request.name.as_str(), email = %request.email))]
    async fn send(&self, request: ContactRequest) -> Result<(), ContactSendError> {
        let recipient = match &self.config {
            ContactSendServiceConfig::Simulated { delay } => {
                tokio::time::sleep(*delay).await;
                info!(
                    subject = request.subject.as_str(),
                    "Simulated delivery of contact request"
                );
                return Ok(());
            }
            ContactSendServiceConfig::Email { recipient } => recipient,
        };

        let email = Email {
            recipient: (**recipient).clone(),
            subject: format!("[Contact Form] {}", *request.subject),
            body: format!(
                "Message from {} ({}):\n\n{}",
                *request.name, request.email, *request.message
            ),
            reply_to: Some(request.email.with_name(request.name.into_inner())),
        };

        if !self.email.send(email).await? {
            return Err(ContactSendError::Send);
        }

        Ok(())
    }
}
