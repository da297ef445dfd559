use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Fetches a fully-formed URL and hands back the response body.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String, ClientError>;
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, ClientError> {
        let response = self.http.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("HTTP {status} for {url}");
            let body = response.text().unwrap_or_default();
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        Ok(response.text()?)
    }
}
