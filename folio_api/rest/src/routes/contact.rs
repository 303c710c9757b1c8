use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSendError, ContactSubmitError};
use folio_models::contact::ContactFormFields;

use crate::{errors::error, models::contact::ApiInvalidContactForm};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactFeatureService>>,
    Json(fields): Json<ContactFormFields>,
) -> Response {
    match service.send_message(fields).await {
        Ok(()) => Json(true).into_response(),
        Err(ContactSubmitError::Invalid(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiInvalidContactForm {
                detail: "Invalid form fields",
                errors,
            }),
        )
            .into_response(),
        Err(ContactSubmitError::InProgress) => {
            error(StatusCode::CONFLICT, "Submission already in progress")
        }
        Err(ContactSubmitError::Send(ContactSendError::Other(err))) => {
            tracing::error!("Failed to send contact message: {err:#}");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
        Err(ContactSubmitError::Send(ContactSendError::Send | ContactSendError::Timeout)) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
    }
}
