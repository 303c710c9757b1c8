use std::{future::Future, sync::Arc};

use folio_models::contact::{ContactFieldErrors, ContactFormFields, ContactRequest};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate the given form fields and deliver them as one submission.
    fn send_message(
        &self,
        fields: ContactFormFields,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

/// The send operation that delivers a validated contact request to its
/// destination.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSendService: Send + Sync + 'static {
    fn send(
        &self,
        request: ContactRequest,
    ) -> impl Future<Output = Result<(), ContactSendError>> + Send;
}

impl<T: ContactSendService> ContactSendService for Arc<T> {
    fn send(
        &self,
        request: ContactRequest,
    ) -> impl Future<Output = Result<(), ContactSendError>> + Send {
        (**self).send(request)
    }
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("A submission is already in progress.")]
    InProgress,
    #[error("Invalid form fields.")]
    Invalid(ContactFieldErrors),
    #[error("Failed to send message.")]
    Send(#[source] ContactSendError),
}

#[derive(Debug, Error)]
pub enum ContactSendError {
    #[error("The message was rejected.")]
    Send,
    #[error("Timed out while sending the message.")]
    Timeout,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactSendService {
    pub fn with_send(mut self, request: ContactRequest, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| {
                Box::pin(std::future::ready(
                    result.then_some(()).ok_or(ContactSendError::Send),
                ))
            });
        self
    }

    /// Expect one send that completes only once `release` fires.
    pub fn with_send_blocked(
        mut self,
        request: ContactRequest,
        release: tokio::sync::oneshot::Receiver<bool>,
    ) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| {
                Box::pin(async move {
                    match release.await {
                        Ok(true) => Ok(()),
                        _ => Err(ContactSendError::Send),
                    }
                })
            });
        self
    }

    /// Expect one send that never completes.
    pub fn with_send_pending(mut self, request: ContactRequest) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::pending::<Result<(), ContactSendError>>()));
        self
    }
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_send_message(
        mut self,
        fields: ContactFormFields,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
