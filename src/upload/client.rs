//! HTTP access to the summarization backend.

use crate::config::Config;
use crate::upload::types::{
    SelectedFile, SummarizeRequest, SummarizeResponse, UploadReceipt, UploadResponse,
    UPLOAD_ACKNOWLEDGED,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upload rejected by server: {message}")]
    Rejected { message: String },

    #[error("upload response did not include a fileName")]
    MissingFileName,

    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// The two backend calls an upload sequence needs.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Send the file as multipart part `file` and return the server's token for it.
    async fn upload(&self, file: &SelectedFile) -> Result<UploadReceipt, ClientError>;

    /// Ask for the summary of a previously uploaded file, by its token.
    async fn summarize(&self, file_name: &str) -> Result<String, ClientError>;
}

pub struct SummaryClient {
    http: Client,
    upload_url: Url,
    summarize_url: Url,
}

impl SummaryClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            upload_url: config.endpoint("upload")?,
            summarize_url: config.endpoint("summarize")?,
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    pub fn summarize_url(&self) -> &Url {
        &self.summarize_url
    }
}

#[async_trait]
impl SummaryBackend for SummaryClient {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadReceipt, ClientError> {
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|source| ClientError::Read {
                path: file.path.clone(),
                source,
            })?;

        let part = Part::bytes(bytes).file_name(file.name.clone());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        let body: UploadResponse = response.json().await?;
        debug!(?body, "upload response");

        match body.message.as_deref() {
            Some(UPLOAD_ACKNOWLEDGED) => body
                .file_name
                .map(|file_name| UploadReceipt { file_name })
                .ok_or(ClientError::MissingFileName),
            other => Err(ClientError::Rejected {
                message: other.unwrap_or("<no message>").to_string(),
            }),
        }
    }

    async fn summarize(&self, file_name: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.summarize_url.clone())
            .json(&SummarizeRequest { file_name })
            .send()
            .await?
            .error_for_status()?;
        let body: SummarizeResponse = response.json().await?;

        Ok(body.summary)
    }
}
