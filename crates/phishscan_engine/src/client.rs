use std::time::Duration;

use phishscan_core::{
    ClassificationResponse, HealthBody, HealthReport, ServiceErrorBody, SERVICE_FAILURE_MESSAGE,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use scan_logging::{scan_debug, scan_warn};
use url::Url;

use crate::{EngineError, FailureKind, TransportError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001/api";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Service address including the `/api` prefix.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Upper bound for a whole request; an unresponsive service fails with a timeout.
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Resolves `endpoint` below the configured base, keeping the base path.
    pub fn endpoint(&self, endpoint: &str) -> Result<Url, EngineError> {
        let invalid = |reason: String| EngineError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut base = Url::parse(self.base_url.trim()).map_err(|err| invalid(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("url cannot be a base".to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(endpoint).map_err(|err| invalid(err.to_string()))
    }
}

/// Remote classification service.
#[async_trait::async_trait]
pub trait ClassifierClient: Send + Sync {
    /// Readiness probe; never fails, an unreachable service reports offline.
    async fn probe_health(&self) -> HealthReport;

    async fn submit_scan(&self, url: &str) -> Result<ClassificationResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: reqwest::Client,
    health_url: Url,
    predict_url: Url,
}

impl ReqwestClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| EngineError::Client(err.to_string()))?;

        Ok(Self {
            http,
            health_url: settings.endpoint("health")?,
            predict_url: settings.endpoint("predict")?,
        })
    }
}

#[async_trait::async_trait]
impl ClassifierClient for ReqwestClient {
    async fn probe_health(&self) -> HealthReport {
        let response = match self.http.get(self.health_url.clone()).send().await {
            Ok(response) => response,
            Err(err) => {
                scan_warn!("Health probe to {} failed: {}", self.health_url, err);
                return HealthReport::offline();
            }
        };

        let status = response.status();
        if !status.is_success() {
            scan_warn!("Health probe returned {}", status);
            return HealthReport::offline();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                scan_warn!("Health probe body could not be read: {}", err);
                return HealthReport::offline();
            }
        };

        match serde_json::from_str::<HealthBody>(&body) {
            Ok(health) => HealthReport::from_body(health),
            Err(err) => {
                scan_warn!("Health probe body is not a health report: {}", err);
                HealthReport::offline()
            }
        }
    }

    async fn submit_scan(&self, url: &str) -> Result<ClassificationResponse, TransportError> {
        let payload = serde_json::json!({ "url": url }).to_string();
        scan_debug!("POST {} ({} bytes)", self.predict_url, payload.len());

        let response = self
            .http
            .post(self.predict_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The service answered, so an unreadable body is still a rejection.
            let service_message = match response.text().await {
                Ok(body) => serde_json::from_str::<ServiceErrorBody>(&body)
                    .ok()
                    .and_then(|err| err.error)
                    .filter(|msg| !msg.trim().is_empty()),
                Err(err) => {
                    scan_warn!("Error body for status {} could not be read: {}", status, err);
                    None
                }
            };
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                service_message.unwrap_or_else(|| SERVICE_FAILURE_MESSAGE.to_string()),
            ));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str::<ClassificationResponse>(&body)
            .map_err(|err| TransportError::new(FailureKind::InvalidResponse, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
