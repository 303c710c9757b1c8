use std::time::Duration;

use folio_core_contact_contracts::{ContactSendError, ContactSendService, ContactSubmitError};
use folio_models::contact::{
    ContactField, ContactFormFields, ContactFormState, ContactRequest, SubmissionStatus,
};
use folio_utils::trace_instrument;
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct ContactFormConfig {
    /// Upper bound for a single send. Without one, a submission waits for
    /// the send operation however long it takes.
    pub send_timeout: Option<Duration>,
}

/// One contact form together with its submission state.
///
/// At most one submission is in flight at any time: [`submit`](Self::submit)
/// is rejected with [`ContactSubmitError::InProgress`] while the status is
/// [`SubmissionStatus::Submitting`].
#[derive(Debug)]
pub struct ContactForm<Sender> {
    send: Sender,
    config: ContactFormConfig,
    state: watch::Sender<ContactFormState>,
}

impl<Sender> ContactForm<Sender>
where
    Sender: ContactSendService,
{
    pub fn new(send: Sender, config: ContactFormConfig) -> Self {
        Self {
            send,
            config,
            state: watch::Sender::new(ContactFormState::default()),
        }
    }

    pub fn state(&self) -> ContactFormState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().status
    }

    /// Returns a receiver that is notified whenever the status, the field
    /// values or the field errors change.
    pub fn subscribe(&self) -> watch::Receiver<ContactFormState> {
        self.state.subscribe()
    }

    /// Updates a single input. Inputs are locked while a submission is in
    /// flight, in which case `false` is returned.
    pub fn set_field(&self, field: ContactField, value: impl Into<String>) -> bool {
        let value = value.into();
        let mut accepted = false;
        self.state.send_if_modified(|state| {
            if state.status == SubmissionStatus::Submitting {
                return false;
            }
            accepted = true;
            if state.fields.get(field) == value {
                return false;
            }
            state.fields.set(field, value);
            true
        });
        accepted
    }

    /// Validates `fields` and, if they are valid, sends them.
    ///
    /// On success the form is cleared. If the send fails the entered values
    /// are kept so the user can try again.
    #[trace_instrument(skip_all)]
    pub async fn submit(&self, fields: ContactFormFields) -> Result<(), ContactSubmitError> {
        let request = self.begin(fields)?;
        let submission = Submission {
            state: &self.state,
            finished: false,
        };

        let result = self.deliver(request).await;
        submission.finish(result.is_ok());

        match result {
            Ok(()) => {
                info!("Contact request sent");
                Ok(())
            }
            Err(err) => {
                warn!("Failed to send contact request: {err}");
                Err(ContactSubmitError::Send(err))
            }
        }
    }

    fn begin(&self, fields: ContactFormFields) -> Result<ContactRequest, ContactSubmitError> {
        let mut outcome = Err(ContactSubmitError::InProgress);
        self.state.send_if_modified(|state| {
            if state.status == SubmissionStatus::Submitting {
                return false;
            }

            state.fields = fields;
            outcome = match state.fields.validate() {
                Ok(request) => {
                    state.errors = Default::default();
                    state.status = SubmissionStatus::Submitting;
                    Ok(request)
                }
                Err(errors) => {
                    state.errors = errors.clone();
                    Err(ContactSubmitError::Invalid(errors))
                }
            };
            true
        });
        outcome
    }

    async fn deliver(&self, request: ContactRequest) -> Result<(), ContactSendError> {
        let send = self.send.send(request);
        match self.config.send_timeout {
            Some(timeout) => tokio::time::timeout(timeout, send)
                .await
                .unwrap_or_else(|_| Err(ContactSendError::Timeout)),
            None => send.await,
        }
    }
}

/// Marks one in-flight submission. Leaves the `Submitting` status on every
/// path, including when the submitting future is dropped.
struct Submission<'a> {
    state: &'a watch::Sender<ContactFormState>,
    finished: bool,
}

impl Submission<'_> {
    fn finish(mut self, sent: bool) {
        self.finished = true;
        self.state.send_modify(|state| {
            if sent {
                state.status = SubmissionStatus::Success;
                state.fields = Default::default();
            } else {
                state.status = SubmissionStatus::Error;
            }
        });
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("Contact submission was abandoned before the send completed");
            self.state
                .send_modify(|state| state.status = SubmissionStatus::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use folio_core_contact_contracts::MockContactSendService;
    use folio_models::contact::ContactFieldErrors;
    use folio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn fields() -> ContactFormFields {
        ContactFormFields {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello there".into(),
            message: "This is a test message.".into(),
        }
    }

    fn request() -> ContactRequest {
        fields().validate().unwrap()
    }

    #[tokio::test]
    async fn submit_ok() {
        // Arrange
        let (release, blocked) = tokio::sync::oneshot::channel();
        let send = MockContactSendService::new().with_send_blocked(request(), blocked);
        let sut = Arc::new(ContactForm::new(send, ContactFormConfig::default()));
        let mut state = sut.subscribe();
        assert_eq!(sut.status(), SubmissionStatus::Idle);

        // Act
        let submit = tokio::spawn({
            let sut = Arc::clone(&sut);
            async move { sut.submit(fields()).await }
        });

        // Assert
        let submitting = state
            .wait_for(|x| x.status == SubmissionStatus::Submitting)
            .await
            .unwrap()
            .clone();
        assert_eq!(submitting.fields, fields());
        assert!(submitting.errors.is_empty());

        release.send(true).unwrap();
        submit.await.unwrap().unwrap();

        assert_eq!(
            sut.state(),
            ContactFormState {
                status: SubmissionStatus::Success,
                fields: ContactFormFields::default(),
                errors: ContactFieldErrors::default(),
            }
        );
    }

    #[tokio::test]
    async fn submit_send_failed() {
        // Arrange
        let (release, blocked) = tokio::sync::oneshot::channel();
        let send = MockContactSendService::new().with_send_blocked(request(), blocked);
        let sut = Arc::new(ContactForm::new(send, ContactFormConfig::default()));
        let mut state = sut.subscribe();

        // Act
        let submit = tokio::spawn({
            let sut = Arc::clone(&sut);
            async move { sut.submit(fields()).await }
        });
        state
            .wait_for(|x| x.status == SubmissionStatus::Submitting)
            .await
            .unwrap();
        release.send(false).unwrap();
        let result = submit.await.unwrap();

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::Send(ContactSendError::Send))
        );
        let state = sut.state();
        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.fields, fields());
    }

    #[tokio::test]
    async fn submit_invalid() {
        // Arrange
        let sut = ContactForm::new(MockContactSendService::new(), ContactFormConfig::default());
        let invalid = ContactFormFields {
            name: "A".into(),
            email: "not-an-email".into(),
            ..fields()
        };

        // Act
        let result = sut.submit(invalid.clone()).await;

        // Assert
        assert_matches!(
            &result,
            Err(ContactSubmitError::Invalid(errors))
                if errors.contains(ContactField::Name) && errors.contains(ContactField::Email)
        );
        let state = sut.state();
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(state.fields, invalid);
        assert_eq!(state.errors.len(), 2);
    }

    #[tokio::test]
    async fn submit_invalid_after_error_keeps_status() {
        // Arrange
        let send = MockContactSendService::new().with_send(request(), false);
        let sut = ContactForm::new(send, ContactFormConfig::default());
        sut.submit(fields()).await.unwrap_err();
        assert_eq!(sut.status(), SubmissionStatus::Error);

        // Act
        let result = sut.submit(ContactFormFields::default()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Invalid(_)));
        assert_eq!(sut.status(), SubmissionStatus::Error);
    }

    #[tokio::test]
    async fn submit_again_after_success() {
        // Arrange
        let mut send = MockContactSendService::new();
        send.expect_send()
            .times(2)
            .returning(|_| Box::pin(std::future::ready(Ok(()))));
        let sut = ContactForm::new(send, ContactFormConfig::default());

        // Act
        sut.submit(fields()).await.unwrap();
        sut.submit(fields()).await.unwrap();

        // Assert
        assert_eq!(sut.status(), SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn submit_clears_previous_errors() {
        // Arrange
        let send = MockContactSendService::new().with_send(request(), true);
        let sut = ContactForm::new(send, ContactFormConfig::default());
        sut.submit(ContactFormFields::default()).await.unwrap_err();
        assert_eq!(sut.state().errors.len(), 4);

        // Act
        sut.submit(fields()).await.unwrap();

        // Assert
        assert!(sut.state().errors.is_empty());
    }

    #[tokio::test]
    async fn submit_while_submitting() {
        // Arrange
        let (release, blocked) = tokio::sync::oneshot::channel();
        let send = MockContactSendService::new().with_send_blocked(request(), blocked);
        let sut = Arc::new(ContactForm::new(send, ContactFormConfig::default()));
        let mut state = sut.subscribe();

        let first = tokio::spawn({
            let sut = Arc::clone(&sut);
            async move { sut.submit(fields()).await }
        });
        state
            .wait_for(|x| x.status == SubmissionStatus::Submitting)
            .await
            .unwrap();

        // Act
        let other = ContactFormFields {
            name: "John Doe".into(),
            ..fields()
        };
        let second = sut.submit(other).await;

        // Assert
        assert_matches!(second, Err(ContactSubmitError::InProgress));
        assert_eq!(sut.status(), SubmissionStatus::Submitting);
        assert_eq!(sut.state().fields, fields());

        release.send(true).unwrap();
        first.await.unwrap().unwrap();
        assert_eq!(sut.status(), SubmissionStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_timeout() {
        // Arrange
        let send = MockContactSendService::new().with_send_pending(request());
        let sut = ContactForm::new(
            send,
            ContactFormConfig {
                send_timeout: Some(Duration::from_secs(10)),
            },
        );

        // Act
        let result = sut.submit(fields()).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::Send(ContactSendError::Timeout))
        );
        let state = sut.state();
        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.fields, fields());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_abandoned() {
        // Arrange
        let send = MockContactSendService::new().with_send_pending(request());
        let sut = ContactForm::new(send, ContactFormConfig::default());
        let mut submit = Box::pin(sut.submit(fields()));

        // Act
        tokio::time::timeout(Duration::from_secs(1), &mut submit)
            .await
            .unwrap_err();
        assert_eq!(sut.status(), SubmissionStatus::Submitting);
        drop(submit);

        // Assert
        let state = sut.state();
        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.fields, fields());
    }

    #[tokio::test]
    async fn set_field() {
        // Arrange
        let sut = ContactForm::new(MockContactSendService::new(), ContactFormConfig::default());
        let mut state = sut.subscribe();

        // Act
        let accepted = sut.set_field(ContactField::Name, "Jane");

        // Assert
        assert!(accepted);
        assert!(state.has_changed().unwrap());
        assert_eq!(state.borrow_and_update().fields.name, "Jane");

        assert!(sut.set_field(ContactField::Name, "Jane"));
        assert!(!state.has_changed().unwrap());
    }

    #[tokio::test]
    async fn set_field_while_submitting() {
        // Arrange
        let (release, blocked) = tokio::sync::oneshot::channel();
        let send = MockContactSendService::new().with_send_blocked(request(), blocked);
        let sut = Arc::new(ContactForm::new(send, ContactFormConfig::default()));
        let mut state = sut.subscribe();
        let submit = tokio::spawn({
            let sut = Arc::clone(&sut);
            async move { sut.submit(fields()).await }
        });
        state
            .wait_for(|x| x.status == SubmissionStatus::Submitting)
            .await
            .unwrap();

        // Act
        let accepted = sut.set_field(ContactField::Message, "changed");

        // Assert
        assert!(!accepted);
        assert_eq!(sut.state().fields, fields());

        release.send(false).unwrap();
        submit.await.unwrap().unwrap_err();
        assert!(sut.set_field(ContactField::Message, "changed"));
    }
}
