//! reqwestによる通信実装

use crate::error::{Result, SpectraError};
use async_trait::async_trait;
use spectra_common::{FetchError, HttpResponse, ImageryTransport};

pub struct HttpTransport {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let user_agent = format!(
            "spectra/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );
        let client = reqwest::Client::builder()
            .user_agent(user_agent.clone())
            .build()
            .map_err(|e| SpectraError::HttpClient(e.to_string()))?;
        Ok(Self { client, user_agent })
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[async_trait(?Send)]
impl ImageryTransport for HttpTransport {
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        Ok(HttpResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        ))
    }

    async fn read_resource(&self, location: &str) -> std::result::Result<String, FetchError> {
        if is_remote(location) {
            let response = self.get(location).await?;
            if let Some(err) = FetchError::from_status(response.status, &response.status_text) {
                return Err(err);
            }
            return Ok(response.body);
        }

        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| FetchError::Resource(format!("{}: {}", location, e)))
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }
}
