//! HttpCoachingProvider - REST implementation of the coaching boundary.
//!
//! Talks HTTP+JSON to the remote reasoning service.
//! Configuration priority: ~/.config/courtcoach/secret.json > environment variables

use crate::config::load_secret_config;
use crate::provider::{CoachingProvider, ProviderError};
use async_trait::async_trait;
use coach_core::{ChatMessage, PerformanceProfile, Recommendation};
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::env;
use std::time::Duration;

const RECOMMENDATIONS_PATH: &str = "/ai/recommendations";
const CHAT_PATH: &str = "/ai/chat";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider implementation that talks to the coaching service over HTTP.
#[derive(Clone)]
pub struct HttpCoachingProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpCoachingProvider {
    /// Creates a new provider against the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Loads configuration from ~/.config/courtcoach/secret.json or environment variables.
    ///
    /// Priority:
    /// 1. ~/.config/courtcoach/secret.json
    /// 2. Environment variables (COURTCOACH_API_URL, COURTCOACH_API_KEY)
    pub fn try_from_env() -> Result<Self, ProviderError> {
        // Try loading from the secret file first
        if let Ok(secret_config) = load_secret_config() {
            if let Some(coach_config) = secret_config.coach {
                let mut provider = Self::new(coach_config.api_url);
                if let Some(api_key) = coach_config.api_key {
                    provider = provider.with_api_key(api_key);
                }
                return Ok(provider);
            }
        }

        // Fallback to environment variables
        let base_url = env::var("COURTCOACH_API_URL").map_err(|_| {
            ProviderError::Configuration(
                "COURTCOACH_API_URL not found in ~/.config/courtcoach/secret.json or environment variables"
                    .into(),
            )
        })?;

        let mut provider = Self::new(base_url);
        if let Ok(api_key) = env::var("COURTCOACH_API_KEY") {
            provider = provider.with_api_key(api_key);
        }
        Ok(provider)
    }

    /// Adds a bearer token sent with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self
            .client
            .post(self.endpoint(path))
            .timeout(self.timeout)
            .json(body);

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|err| ProviderError::Request {
            message: format!("Coaching service request failed: {err}"),
            is_retryable: err.is_connect() || err.is_timeout(),
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read coaching service error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        response
            .json()
            .await
            .map_err(|err| ProviderError::MalformedResponse(format!(
                "Failed to parse coaching service response: {err}"
            )))
    }
}

#[async_trait]
impl CoachingProvider for HttpCoachingProvider {
    async fn recommendations(
        &self,
        profile: &PerformanceProfile,
    ) -> Result<Vec<Recommendation>, ProviderError> {
        let request = RecommendationsRequest {
            player_data: profile,
        };

        let response: RecommendationsResponse =
            self.post_json(RECOMMENDATIONS_PATH, &request).await?;

        tracing::debug!(
            count = response.recommendations.len(),
            "received recommendation batch"
        );
        Ok(response.recommendations)
    }

    async fn chat(
        &self,
        message: &str,
        profile: &PerformanceProfile,
        history: &[ChatMessage],
    ) -> Result<String, ProviderError> {
        let request = ChatRequest {
            message,
            player_data: profile,
            chat_history: history,
        };

        let response: ChatResponse = self.post_json(CHAT_PATH, &request).await?;
        extract_reply(response)
    }
}

#[derive(Serialize)]
struct RecommendationsRequest<'a> {
    player_data: &'a PerformanceProfile,
}

#[derive(Deserialize)]
struct RecommendationsResponse {
    recommendations: Vec<Recommendation>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    player_data: &'a PerformanceProfile,
    chat_history: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_reply(response: ChatResponse) -> Result<String, ProviderError> {
    if response.message.trim().is_empty() {
        return Err(ProviderError::MalformedResponse(
            "Coaching service returned an empty chat reply".into(),
        ));
    }
    Ok(response.message)
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> ProviderError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    ProviderError::Process {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
        retry_after,
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}
