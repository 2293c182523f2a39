use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use super::{FamilyRecords, FetchAction, PersonPayload, SubmitAction, UpstreamError};
use crate::config::UpstreamConfig;

/// Response envelope returned by every upstream action.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Value,
    #[serde(default)]
    data: Value,
}

/// POST body: credentials and action next to the whitelisted person fields.
#[derive(Serialize)]
struct SubmitBody<'a> {
    api_key: &'a str,
    action: &'static str,
    #[serde(flatten)]
    person: &'a PersonPayload,
}

/// reqwest-backed client for the Google Apps Script endpoint.
pub struct GasClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GasClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get_envelope(
        &self,
        action: &'static str,
        id: Option<&str>,
    ) -> Result<Envelope, UpstreamError> {
        let mut query = vec![("api_key", self.api_key.as_str()), ("action", action)];
        if let Some(id) = id {
            query.push(("id", id));
        }

        let response = self.client.get(&self.base_url).query(&query).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status {
                status: response.status().as_u16(),
            });
        }

        let envelope = response.json::<Envelope>().await?;
        if envelope.status != "success" {
            error!(action, id = ?id, message = %envelope.message, "upstream returned an error envelope");
            return Err(UpstreamError::Rejected {
                action,
                message: envelope.message.to_string(),
            });
        }

        Ok(envelope)
    }
}

#[async_trait]
impl FamilyRecords for GasClient {
    async fn ping(&self) -> Result<(), UpstreamError> {
        self.get_envelope("ping", None).await.map(|_| ())
    }

    async fn fetch(&self, action: FetchAction, id: Option<&str>) -> Result<Value, UpstreamError> {
        debug!(action = action.as_str(), id = ?id, "upstream fetch");

        let envelope = self.get_envelope(action.as_str(), id).await?;

        debug!(action = action.as_str(), id = ?id, "upstream fetch succeeded");
        Ok(envelope.data)
    }

    async fn submit(
        &self,
        action: SubmitAction,
        payload: &PersonPayload,
    ) -> Result<Value, UpstreamError> {
        debug!(action = action.as_str(), person_id = %payload.person_id, "upstream submit");

        let body = SubmitBody {
            api_key: &self.api_key,
            action: action.as_str(),
            person: payload,
        };

        let response = self.client.post(&self.base_url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status {
                status: response.status().as_u16(),
            });
        }

        let result = response.json::<Value>().await?;

        debug!(action = action.as_str(), "upstream submit succeeded");
        Ok(result)
    }
}
