//! Construction of the concrete service graph from the loaded config.

use std::sync::Arc;

use anyhow::Context;
use folio_api_rest::RestServerConfig;
use folio_config::{Config, ContactTransport};
use folio_core_contact_impl::{
    ContactFeatureConfig, ContactFeatureServiceImpl, ContactForm, ContactFormConfig,
    ContactSendServiceConfig, ContactSendServiceImpl,
};
use folio_core_portfolio_impl::PortfolioFeatureServiceImpl;
use folio_email_impl::EmailServiceImpl;

pub type Email = EmailServiceImpl;
pub type ContactSend = ContactSendServiceImpl<Email>;
pub type ContactFeature = ContactFeatureServiceImpl<ContactSend>;
pub type PortfolioFeature = PortfolioFeatureServiceImpl;
pub type RestServer = folio_api_rest::RestServer<ContactFeature, PortfolioFeature>;

pub fn email(config: &Config) -> anyhow::Result<Email> {
    EmailServiceImpl::new(&config.email.smtp_url, config.email.from.clone())
        .context("Failed to set up the smtp transport")
}

pub fn contact_send(config: &Config, email: Email) -> ContactSend {
    let send_config = match config.contact.transport {
        ContactTransport::Simulated => ContactSendServiceConfig::Simulated {
            delay: config.contact.simulated_delay.into(),
        },
        ContactTransport::Email => ContactSendServiceConfig::Email {
            recipient: Arc::new(config.contact.recipient.clone()),
        },
    };
    ContactSendServiceImpl::new(email, send_config)
}

pub fn contact_form_config(config: &Config) -> ContactFormConfig {
    ContactFormConfig {
        send_timeout: config.contact.send_timeout.map(Into::into),
    }
}

/// A single contact form using the configured transport.
pub fn contact_form(config: &Config) -> anyhow::Result<ContactForm<ContactSend>> {
    let send = contact_send(config, email(config)?);
    Ok(ContactForm::new(send, contact_form_config(config)))
}

pub fn rest_server(config: &Config, email: Email) -> RestServer {
    let contact = ContactFeatureServiceImpl::new(
        contact_send(config, email),
        ContactFeatureConfig {
            form: contact_form_config(config),
        },
    );
    let rest_config = RestServerConfig {
        allowed_origins: config.http.allowed_origins.clone(),
    };
    folio_api_rest::RestServer::new(contact, PortfolioFeatureServiceImpl::default(), rest_config)
}

#[cfg(test)]
mod tests {
    use std::{path::Path, time::Duration};

    use folio_config::DEFAULT_CONFIG_PATH;
    use folio_models::contact::SubmissionStatus;

    use super::*;

    fn config() -> Config {
        folio_config::load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap()
    }

    #[test]
    fn form_config() {
        let mut config = config();
        assert_eq!(contact_form_config(&config).send_timeout, None);

        config.contact.send_timeout = Some(folio_config::Duration(Duration::from_secs(30)));
        let ContactFormConfig { send_timeout } = contact_form_config(&config);
        assert_eq!(send_timeout, Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn default_form_is_idle() {
        let form = contact_form(&config()).unwrap();

        assert_eq!(form.status(), SubmissionStatus::Idle);
    }
}
