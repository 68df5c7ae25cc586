//! Hand-off of accepted contact messages.
//!
//! A [`ContactSink`] receives every submission that passed validation. The
//! default sink only records it in the trace; a webhook sink forwards it as
//! JSON to an external endpoint (mail relay, CRM, chat hook...).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{validate, ContactForm, FieldErrors, SubmissionReceipt};
use crate::config::ContactConfig;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("invalid submission: {0}")]
    Invalid(FieldErrors),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook answered with status {0}")]
    Rejected(reqwest::StatusCode),
}

/// A validated message, stamped with a reference and arrival time.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub form: ContactForm,
}

impl Submission {
    /// Validates the form and stamps it.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Invalid`] when a required field is missing.
    pub fn accept(form: ContactForm) -> Result<Self, ContactError> {
        validate(&form).map_err(ContactError::Invalid)?;
        Ok(Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
            form,
        })
    }

    #[must_use]
    pub fn receipt(&self) -> SubmissionReceipt {
        SubmissionReceipt {
            reference: self.reference.to_string(),
            name: self.form.name.trim().to_string(),
        }
    }
}

#[async_trait]
pub trait ContactSink: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deliver(&self, submission: &Submission) -> Result<(), ContactError>;
}

pub type SharedSink = Arc<dyn ContactSink>;

/// Records submissions in the trace and nothing else.
pub struct LogSink;

#[async_trait]
impl ContactSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    #[tracing::instrument(skip(self, submission), fields(reference = %submission.reference))]
    async fn deliver(&self, submission: &Submission) -> Result<(), ContactError> {
        tracing::info!(
            service = %submission.form.service,
            subject = %submission.form.subject,
            budget = %submission.form.budget,
            "contact message received"
        );
        Ok(())
    }
}

/// POSTs submissions as JSON to a fixed URL.
pub struct WebhookSink {
    client: reqwest::Client,
    url: url::Url,
}

impl WebhookSink {
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built.
    pub fn new(url: url::Url, timeout: Duration) -> Result<Self, ContactError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ngbtp/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ContactSink for WebhookSink {
    fn name(&self) -> &'static str {
        "webhook"
    }

    #[tracing::instrument(skip(self, submission), fields(reference = %submission.reference, url = %self.url))]
    async fn deliver(&self, submission: &Submission) -> Result<(), ContactError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "webhook rejected contact message");
            return Err(ContactError::Rejected(status));
        }

        tracing::debug!(%status, "contact message forwarded");
        Ok(())
    }
}

/// Picks the sink described by the configuration.
///
/// # Errors
///
/// Fails when the webhook client cannot be built.
pub fn sink_from_config(config: &ContactConfig) -> Result<SharedSink, ContactError> {
    match &config.webhook_url {
        Some(url) => Ok(Arc::new(WebhookSink::new(
            url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?)),
        None => Ok(Arc::new(LogSink)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn form() -> ContactForm {
        ContactForm {
            name: " Awa Mballa ".to_string(),
            email: "awa@exemple.cm".to_string(),
            phone: "+237 677 00 00 00".to_string(),
            service: "Topographie".to_string(),
            message: "Bornage d'un terrain à Kribi".to_string(),
            ..ContactForm::default()
        }
    }

    fn webhook(server: &MockServer) -> WebhookSink {
        let url = format!("{}/hooks/contact", server.uri()).parse().unwrap();
        WebhookSink::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn accept_rejects_invalid_form() {
        let err = Submission::accept(ContactForm::default()).unwrap_err();
        match err {
            ContactError::Invalid(errors) => assert_eq!(errors.len(), 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn receipt_carries_reference_and_trimmed_name() {
        let submission = Submission::accept(form()).unwrap();
        let receipt = submission.receipt();
        assert_eq!(receipt.name, "Awa Mballa");
        assert_eq!(receipt.reference, submission.reference.to_string());
    }

    #[test]
    fn submission_serializes_flat() {
        let submission = Submission::accept(form()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["service"], "Topographie");
        assert_eq!(json["reference"], submission.reference.to_string());
        assert!(json.get("form").is_none());
    }

    #[test]
    fn log_sink_accepts_everything() {
        let submission = Submission::accept(form()).unwrap();
        tokio_test::assert_ok!(tokio_test::block_on(LogSink.deliver(&submission)));
    }

    #[tokio::test]
    async fn webhook_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hooks/contact"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "email": "awa@exemple.cm",
                "service": "Topographie",
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let submission = Submission::accept(form()).unwrap();
        webhook(&server).deliver(&submission).await.unwrap();
    }

    #[tokio::test]
    async fn webhook_error_status_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let submission = Submission::accept(form()).unwrap();
        let err = webhook(&server).deliver(&submission).await.unwrap_err();
        assert!(matches!(err, ContactError::Rejected(s) if s.as_u16() == 502));
    }

    #[test]
    fn sink_chosen_from_config() {
        let logged = sink_from_config(&ContactConfig::default()).unwrap();
        assert_eq!(logged.name(), "log");

        let config = ContactConfig {
            webhook_url: Some("https://hooks.example.com/contact".parse().unwrap()),
            timeout_secs: 2,
        };
        assert_eq!(sink_from_config(&config).unwrap().name(), "webhook");
    }
}
