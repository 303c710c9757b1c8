use folio_config::{Config, ContactTransport};
use folio_email_contracts::EmailService;
use tracing::info;

use crate::environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = environment::email(&config)?;
    match config.contact.transport {
        ContactTransport::Email => {
            info!("Connecting to smtp server");
            email.ping().await?;
        }
        ContactTransport::Simulated => {
            info!(
                "Contact submissions are simulated with a delay of {:?}",
                *config.contact.simulated_delay
            );
        }
    }

    let server = environment::rest_server(&config, email);
    info!("Starting http server on {}", config.http.address);
    server.serve(config.http.address).await
}
