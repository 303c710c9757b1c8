use axum::http::StatusCode;
use folio_core_contact_contracts::{
    ContactSendError, ContactSubmitError, MockContactFeatureService,
};
use folio_core_portfolio_contracts::MockPortfolioFeatureService;
use folio_models::contact::ContactFormFields;
use pretty_assertions::assert_eq;
use serde_json::json;

mod common;

fn fields() -> ContactFormFields {
    ContactFormFields {
        name: "Max Mustermann".into(),
        email: "max.mustermann@example.de".into(),
        subject: "Test subject".into(),
        message: "Hello World!".into(),
    }
}

fn body() -> serde_json::Value {
    json!({
        "name": "Max Mustermann",
        "email": "max.mustermann@example.de",
        "subject": "Test subject",
        "message": "Hello World!",
    })
}

#[tokio::test]
async fn ok() {
    // Arrange
    let contact = MockContactFeatureService::new().with_send_message(fields(), Ok(()));
    let router = common::router(contact, MockPortfolioFeatureService::new());

    // Act
    let (status, body) = common::post(router, "/contact", body()).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(true));
}

#[tokio::test]
async fn invalid() {
    // Arrange
    let fields = ContactFormFields {
        name: "M".into(),
        email: String::new(),
        ..fields()
    };
    let errors = fields.validate().unwrap_err();
    let contact = MockContactFeatureService::new()
        .with_send_message(fields, Err(ContactSubmitError::Invalid(errors)));
    let router = common::router(contact, MockPortfolioFeatureService::new());

    // Act
    let (status, body) = common::post(
        router,
        "/contact",
        json!({
            "name": "M",
            "subject": "Test subject",
            "message": "Hello World!",
        }),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "detail": "Invalid form fields",
            "errors": {
                "name": "Name must be at least 2 characters",
                "email": "Please enter a valid email address",
            },
        })
    );
}

#[tokio::test]
async fn in_progress() {
    // Arrange
    let contact = MockContactFeatureService::new()
        .with_send_message(fields(), Err(ContactSubmitError::InProgress));
    let router = common::router(contact, MockPortfolioFeatureService::new());

    // Act
    let (status, body) = common::post(router, "/contact", body()).await;

    // Assert
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"detail": "Submission already in progress"}));
}

#[tokio::test]
async fn send_failed() {
    for err in [
        ContactSendError::Send,
        ContactSendError::Timeout,
        ContactSendError::Other(anyhow::anyhow!("connection refused")),
    ] {
        // Arrange
        let contact = MockContactFeatureService::new()
            .with_send_message(fields(), Err(ContactSubmitError::Send(err)));
        let router = common::router(contact, MockPortfolioFeatureService::new());

        // Act
        let (status, body) = common::post(router, "/contact", body()).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Could not send message"}));
    }
}
