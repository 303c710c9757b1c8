use clap::Args;
use folio_config::Config;
use folio_core_contact_contracts::ContactSubmitError;
use folio_models::contact::{ContactFieldErrors, ContactFormFields, ContactFormState};
use tokio::sync::watch;

use crate::environment;

/// Contact form values given on the command line
#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Your name
    #[arg(long, default_value = "")]
    name: String,
    /// Your email address
    #[arg(long, default_value = "")]
    email: String,
    /// Subject of the message
    #[arg(long, default_value = "")]
    subject: String,
    /// The message
    #[arg(long, default_value = "")]
    message: String,
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let form = environment::contact_form(&config)?;
        let printer = tokio::spawn(print_transitions(form.subscribe()));

        let result = form.submit(self.into()).await;
        drop(form);
        printer.await?;

        match result {
            Ok(()) => Ok(()),
            Err(ContactSubmitError::Invalid(errors)) => {
                eprint!("{}", render_field_errors(&errors));
                anyhow::bail!("Invalid form fields")
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl From<ContactCommand> for ContactFormFields {
    fn from(value: ContactCommand) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

/// Prints the banner of every status the form moves through until the form
/// is dropped.
async fn print_transitions(mut state: watch::Receiver<ContactFormState>) {
    let mut status = state.borrow_and_update().status;
    while state.changed().await.is_ok() {
        let next = state.borrow_and_update().status;
        if next != status {
            status = next;
            if let Some(banner) = status.banner() {
                println!("{banner}");
            }
        }
    }
}

fn render_field_errors(errors: &ContactFieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}\n"))
        .collect()
}
