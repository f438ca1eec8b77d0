use axum::http::StatusCode;
use serde_json::json;
use starfall::config::Environment;
use starfall_contact::{TransportError, TransportErrorKind};

mod helpers;

use helpers::{RecordingTransports, TestApp, config, submission};

#[tokio::test]
async fn test_valid_submission_sends_one_email() -> anyhow::Result<()> {
    let app = TestApp::configured();

    let (status, body) = app.post_contact_json(submission()).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Email sent successfully"})
    );

    let recorded = app.recorded();
    assert_eq!(recorded.connects, 1);
    assert_eq!(recorded.verifies, 1);
    assert_eq!(recorded.sent.len(), 1);

    let message = &recorded.sent[0];
    assert_eq!(message.subject, "Contact Request from Jane Doe");
    assert_eq!(message.from, "info@starfallwebdesign.ca");
    assert_eq!(message.to, "info@starfallwebdesign.ca");
    assert_eq!(message.reply_to.as_deref(), Some("jane@acme.test"));
    assert!(message.body.contains("Company: Acme"));
    assert!(message.body.contains("Phone: Not provided"));
    assert!(message.body.contains("We need a new website."));

    Ok(())
}

#[tokio::test]
async fn test_fields_are_trimmed() -> anyhow::Result<()> {
    let app = TestApp::configured();

    let (status, _) = app
        .post_contact_json(json!({
            "name": "  Jane Doe  ",
            "email": " jane@acme.test ",
            "message": "\thello\n"
        }))
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        app.recorded().sent[0].subject,
        "Contact Request from Jane Doe"
    );

    Ok(())
}

#[tokio::test]
async fn test_missing_fields() -> anyhow::Result<()> {
    let app = TestApp::configured();

    for body in [
        json!({"email": "jane@acme.test", "message": "hi"}),
        json!({"name": "Jane", "email": "", "message": "hi"}),
        json!({"name": "Jane", "email": "jane@acme.test", "message": "   "}),
        json!({"name": null, "email": "jane@acme.test", "message": "hi"}),
        json!({}),
    ] {
        let (status, body) = app.post_contact_json(body).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "message": "Name, email, and message are required"})
        );
    }

    assert_eq!(app.recorded().connects, 0);

    Ok(())
}

#[tokio::test]
async fn test_malformed_email() -> anyhow::Result<()> {
    let app = TestApp::configured();

    let (status, body) = app
        .post_contact_json(json!({"name": "Jane", "email": "jane@acme", "message": "hi"}))
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Email is not in correct format."));
    assert_eq!(app.recorded().connects, 0);

    Ok(())
}

#[tokio::test]
async fn test_invalid_body() -> anyhow::Result<()> {
    let app = TestApp::configured();

    for body in ["not json", "[1, 2, 3]", "\"text\""] {
        let (status, body) = app.post_contact(body).await?;
        let body: serde_json::Value = serde_json::from_str(&body)?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "message": "Invalid request body"})
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_missing_credential_never_touches_transport() -> anyhow::Result<()> {
    let app = TestApp::new(
        config(Environment::Development, None),
        RecordingTransports::default(),
    );

    let (status, body) = app.post_contact_json(submission()).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "message": "Email service not configured."})
    );

    let recorded = app.recorded();
    assert_eq!(recorded.connects, 0);
    assert_eq!(recorded.verifies, 0);

    Ok(())
}

#[tokio::test]
async fn test_authentication_failure_exposes_detail_in_development() -> anyhow::Result<()> {
    let app = TestApp::new(
        config(Environment::Development, Some("wrong")),
        RecordingTransports {
            verify_error: Some(TransportError::new(
                TransportErrorKind::AuthenticationFailed,
                "535 5.7.8 Username and Password not accepted",
            )),
            ..Default::default()
        },
    );

    let (status, body) = app.post_contact_json(submission()).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("authentication failed")
    );
    assert_eq!(
        body["error"],
        json!("535 5.7.8 Username and Password not accepted")
    );
    assert!(app.recorded().sent.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_production_hides_detail() -> anyhow::Result<()> {
    let app = TestApp::new(
        config(Environment::Production, Some("app-password")),
        RecordingTransports {
            send_error: Some(TransportError::new(
                TransportErrorKind::TimedOut,
                "connection timed out after 60s",
            )),
            ..Default::default()
        },
    );

    let (status, body) = app.post_contact_json(submission()).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "message": "Email server connection timed out."})
    );

    Ok(())
}

#[tokio::test]
async fn test_transport_failures_map_to_messages() -> anyhow::Result<()> {
    for (kind, message) in [
        (
            TransportErrorKind::ConnectionFailed,
            "Could not connect to email server.",
        ),
        (TransportErrorKind::Unknown, "Failed to send email"),
    ] {
        let app = TestApp::new(
            config(Environment::Production, Some("app-password")),
            RecordingTransports {
                send_error: Some(TransportError::new(kind, "boom")),
                ..Default::default()
            },
        );

        let (status, body) = app.post_contact_json(submission()).await?;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], json!(message));
        assert!(body.get("error").is_none());
    }

    Ok(())
}
