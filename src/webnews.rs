use reqwest::{Client, StatusCode, header};
use serde_json::Value;
use tracing::info;

use crate::models::Error;

/// Client for the WebNews compose endpoint
///
/// Every request carries the API key and the fixed posting-agent name the
/// client was constructed with.
#[derive(Debug, Clone)]
pub struct Webnews {
    client: Client,
    base_url: String,
    api_key: String,
    api_agent: String,
}

impl Webnews {
    /// Create a client for the given WebNews instance
    pub fn new(base_url: &str, api_key: &str, api_agent: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_agent: api_agent.to_string(),
        }
    }

    /// Post a new article to the given newsgroup
    pub async fn compose(&self, newsgroup: &str, subject: &str, body: &str) -> Result<(), Error> {
        let url = format!("{}/compose", self.base_url);
        let params = [
            ("newsgroup", newsgroup),
            ("subject", subject),
            ("body", body),
            ("api_key", self.api_key.as_str()),
            ("api_agent", self.api_agent.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(compose_error(status, &body).into());
        }

        info!("WebNews accepted post to {}", newsgroup);
        Ok(())
    }
}

/// Build an error message from a failed response, using the service's own
/// error text when it sent any
fn compose_error(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());

    if detail.is_empty() {
        format!("WebNews returned an error ({})", status)
    } else {
        format!("WebNews returned an error ({}): {}", status, detail)
    }
}
