//! Gemini REST client
//!
//! One request per brief: no retries, no backoff. The only timeout is the
//! optional transport timeout from [`ClientConfig::timeout`].

use std::time::Duration;

use url::Url;

use brandcraft_core::prelude::*;
use brandcraft_core::{BrandBrief, BrandIdentity};

use crate::prompt::build_prompt;
use crate::protocol::{parse_identity, ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::schema::response_schema;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Checked when the configured variable is unset
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Turns a brief into a brand identity.
///
/// The TUI engine and the headless runner both drive generation through
/// this trait, so tests can substitute a scripted generator.
#[trait_variant::make(IdentityGenerator: Send)]
pub trait LocalIdentityGenerator {
    /// Issue one generation request for `brief`
    async fn generate(&self, brief: &BrandBrief) -> Result<BrandIdentity>;
}

/// Connection and validation options for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme + host (and optional path prefix) of the API
    pub api_base: String,
    pub model: String,
    pub api_key: String,
    /// Transport timeout; `None` keeps the reqwest default (no timeout)
    pub timeout: Option<Duration>,
    /// Reject identities whose shape differs from the request
    pub strict_validation: bool,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: None,
            strict_validation: false,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    /// Full `generateContent` endpoint URL for the configured model
    pub fn endpoint(&self) -> Result<Url> {
        let mut base = self.api_base.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)
            .map_err(|e| Error::config_invalid(format!("invalid api_base '{}': {}", self.api_base, e)))?;
        base.join(&format!("v1beta/models/{}:generateContent", self.model))
            .map_err(|e| Error::config_invalid(format!("invalid model '{}': {}", self.model, e)))
    }
}

/// Read the API key from `env_var`, falling back to `API_KEY`.
///
/// Empty values are treated as unset.
pub fn resolve_api_key(env_var: &str) -> Result<String> {
    [env_var, FALLBACK_API_KEY_ENV]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or_else(|| Error::missing_api_key(env_var))
}

/// reqwest-backed Gemini client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    strict_validation: bool,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {}", e)))?;

        info!("Generation endpoint: {}", endpoint);

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key,
            strict_validation: config.strict_validation,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send the request and return the model's raw JSON text
    async fn request_text(&self, request: &GenerateContentRequest) -> Result<String> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(Error::api(
                status.as_u16(),
                ApiErrorEnvelope::message_from_body(&body),
            ));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        if let Some(reason) = parsed.block_reason() {
            warn!("Prompt blocked by the service: {}", reason);
        }
        parsed.text().ok_or(Error::EmptyResponse)
    }

    /// Apply the configured validation policy to a parsed identity
    fn check_shape(&self, identity: BrandIdentity) -> Result<BrandIdentity> {
        let issues = identity.audit();
        if issues.is_empty() {
            return Ok(identity);
        }

        let summary = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        if self.strict_validation {
            return Err(Error::malformed_identity(summary));
        }
        warn!("Accepting identity with shape issues: {}", summary);
        Ok(identity)
    }
}

impl IdentityGenerator for GeminiClient {
    async fn generate(&self, brief: &BrandBrief) -> Result<BrandIdentity> {
        let request = GenerateContentRequest::json(build_prompt(brief), response_schema());
        debug!(
            "Requesting identity: industry={:?} vibe={}",
            brief.industry, brief.vibe
        );

        let text = self.request_text(&request).await?;
        let identity = parse_identity(&text)?;
        let identity = self.check_shape(identity)?;

        info!(
            "Generated identity '{}' ({} colors, {} keywords)",
            identity.name,
            identity.colors.len(),
            identity.keywords.len()
        );
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_api_key, ClientConfig, GeminiClient, IdentityGenerator, FALLBACK_API_KEY_ENV};
    use brandcraft_core::prelude::*;
    use brandcraft_core::BrandBrief;
    use crate::test_utils::{sample_identity, sample_identity_json, success_body};
    use brandcraft_core::Vibe;
    use serial_test::serial;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT_PATH: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";

    fn example_brief() -> BrandBrief {
        BrandBrief::new(
            "A privacy-focused smart home hub",
            "IoT",
            Vibe::ModernProfessional,
        )
    }

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(ClientConfig::new("test-key").with_api_base(server.uri())).unwrap()
    }

    #[test]
    fn test_endpoint_for_default_config() {
        let config = ClientConfig::new("k");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let config = ClientConfig::new("k")
            .with_api_base("http://localhost:8080/proxy")
            .with_model("gemini-2.5-pro");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://localhost:8080/proxy/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        let config = ClientConfig::new("k").with_api_base("not a url");
        assert!(matches!(
            config.endpoint(),
            Err(Error::ConfigInvalid { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_prefers_configured_var() {
        std::env::set_var("BRANDCRAFT_TEST_KEY", "primary");
        std::env::set_var(FALLBACK_API_KEY_ENV, "fallback");
        assert_eq!(resolve_api_key("BRANDCRAFT_TEST_KEY").unwrap(), "primary");
        std::env::remove_var("BRANDCRAFT_TEST_KEY");
        std::env::remove_var(FALLBACK_API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_falls_back() {
        std::env::remove_var("BRANDCRAFT_TEST_KEY");
        std::env::set_var(FALLBACK_API_KEY_ENV, "fallback");
        assert_eq!(resolve_api_key("BRANDCRAFT_TEST_KEY").unwrap(), "fallback");
        std::env::remove_var(FALLBACK_API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_missing() {
        std::env::set_var("BRANDCRAFT_TEST_KEY", "   ");
        std::env::remove_var(FALLBACK_API_KEY_ENV);
        let err = resolve_api_key("BRANDCRAFT_TEST_KEY").unwrap_err();
        assert!(matches!(err, Error::MissingApiKey { .. }));
        assert!(err.is_fatal());
        std::env::remove_var("BRANDCRAFT_TEST_KEY");
    }

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&sample_identity_json())))
            .expect(1)
            .mount(&server)
            .await;

        let identity = client_for(&server).generate(&example_brief()).await.unwrap();
        assert_eq!(identity, sample_identity());
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_with_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&sample_identity_json())))
            .mount(&server)
            .await;

        client_for(&server).generate(&example_brief()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Core Idea: A privacy-focused smart home hub"));
        assert!(prompt.contains("Industry: IoT"));
        assert!(prompt.contains("Tone/Vibe: Modern & Professional"));
        assert_eq!(
            body["generationConfig"]["responseSchema"]["properties"]["colors"]["maxItems"],
            4
        );
    }

    #[tokio::test]
    async fn test_generate_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&example_brief())
            .await
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("API key not valid"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_malformed_identity_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("{\"name\": \"Nestly\"")))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&example_brief())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedIdentity { .. }));
    }

    #[tokio::test]
    async fn test_generate_non_json_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&example_brief())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_generate_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&example_brief())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyResponse));
    }

    #[tokio::test]
    async fn test_generate_transport_failure() {
        // Bind then release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client =
            GeminiClient::new(ClientConfig::new("test-key").with_api_base(uri)).unwrap();
        let err = client.generate(&example_brief()).await.unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
    }

    #[tokio::test]
    async fn test_lenient_mode_accepts_short_palette() {
        let server = MockServer::start().await;
        let mut identity = sample_identity();
        identity.colors.truncate(2);
        let text = serde_json::to_string(&identity).unwrap();
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&text)))
            .mount(&server)
            .await;

        let generated = client_for(&server).generate(&example_brief()).await.unwrap();
        assert_eq!(generated.colors.len(), 2);
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_short_palette() {
        let server = MockServer::start().await;
        let mut identity = sample_identity();
        identity.colors.truncate(2);
        let text = serde_json::to_string(&identity).unwrap();
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&text)))
            .mount(&server)
            .await;

        let client = GeminiClient::new(
            ClientConfig::new("test-key")
                .with_api_base(server.uri())
                .with_strict_validation(true),
        )
        .unwrap();
        let err = client.generate(&example_brief()).await.unwrap_err();
        match err {
            Error::MalformedIdentity { message } => assert!(message.contains("expected 4 colors")),
            other => panic!("expected MalformedIdentity, got {other:?}"),
        }
    }
}
