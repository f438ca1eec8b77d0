use async_trait::async_trait;
use reqwest::StatusCode;
use starfall_contact::{ContactResponse, ContactSubmission};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("contact request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("contact endpoint answered {0}")]
    Status(StatusCode),
}

/// The single network call of the contact form.
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactResponse, ApiError>;
}

/// `POST {base_url}/api/contact` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactResponse, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.json::<ContactResponse>().await?)
    }
}
