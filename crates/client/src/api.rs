//! # Pricing Rules API
//!
//! The boundary between the editor and the persistence service. Rules are
//! fetched one at a time for editing and written back with a single
//! update-or-create request. Failed requests are never retried here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::debug;
use vdrive_core::{
    errors::{PricingError, PricingResult},
    models::pricing_rule::{PricingRulePayload, PricingRuleRecord},
};

use crate::config::ClientConfig;

/// Operations the editor needs from the pricing-rules service.
#[async_trait]
pub trait PricingRuleApi: Send + Sync {
    /// Loads an existing rule.
    ///
    /// # Errors
    ///
    /// * `PricingError::NotFound` - No rule with this id
    /// * `PricingError::Api` - Any other non-success response
    /// * `PricingError::Network` - Transport or decoding failure
    async fn fetch_pricing_rule(&self, id: i64) -> PricingResult<PricingRuleRecord>;

    /// Replaces rule `id`, or creates a new rule when `id` is `None`.
    async fn update_or_create(
        &self,
        id: Option<i64>,
        payload: &PricingRulePayload,
    ) -> PricingResult<()>;
}

/// [`PricingRuleApi`] over HTTP.
pub struct HttpPricingRuleApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpPricingRuleApi {
    pub fn new(config: ClientConfig) -> PricingResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(network_error)?;

        Ok(Self { client, config })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl PricingRuleApi for HttpPricingRuleApi {
    async fn fetch_pricing_rule(&self, id: i64) -> PricingResult<PricingRuleRecord> {
        let url = self.config.pricing_rule_url(id);
        debug!("GET {}", url);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(network_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PricingError::NotFound(format!(
                "Pricing rule with ID {} not found",
                id
            )));
        }

        let response = ensure_success(response).await?;
        response
            .json::<PricingRuleRecord>()
            .await
            .map_err(network_error)
    }

    async fn update_or_create(
        &self,
        id: Option<i64>,
        payload: &PricingRulePayload,
    ) -> PricingResult<()> {
        let request = match id {
            Some(id) => {
                let url = self.config.pricing_rule_url(id);
                debug!("PUT {}", url);
                self.client.put(url)
            }
            None => {
                let url = self.config.pricing_rules_url();
                debug!("POST {}", url);
                self.client.post(url)
            }
        };

        let response = self
            .authorize(request)
            .json(payload)
            .send()
            .await
            .map_err(network_error)?;

        ensure_success(response).await?;
        Ok(())
    }
}

fn network_error(err: reqwest::Error) -> PricingError {
    PricingError::Network(eyre::Report::new(err))
}

async fn ensure_success(response: Response) -> PricingResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(PricingError::Api {
        status: status.as_u16(),
        message: server_error_message(&body),
    })
}

/// Pulls the human-readable message out of an error response body.
///
/// Looks at `message`, `error` and `detail` in that order, then the first
/// entry of `non_field_errors`. Returns `None` for bodies that are not JSON or
/// carry none of these.
pub fn server_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let direct = ["message", "error", "detail"]
        .into_iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty());

    direct
        .or_else(|| {
            value
                .get("non_field_errors")
                .and_then(Value::as_array)
                .and_then(|errors| errors.first())
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|message| !message.is_empty())
        })
        .map(str::to_string)
}
