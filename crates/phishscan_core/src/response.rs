use serde::{Deserialize, Deserializer, Serialize};

/// Successful body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub url: String,
    pub is_phishing: bool,
    pub classification: String,
    pub confidence_score: f64,
    pub confidence: ClassConfidence,
    pub risk_level: String,
    #[serde(default)]
    pub features: Option<UrlFeatures>,
    #[serde(default)]
    pub network_analysis: Option<NetworkAnalysis>,
    #[serde(default)]
    pub model_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassConfidence {
    pub legitimate: f64,
    pub phishing: f64,
}

/// Lexical properties of the submitted URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlFeatures {
    pub url_length: u64,
    pub has_https: bool,
    pub has_ip_address: bool,
    pub has_suspicious_tld: bool,
    pub num_suspicious_keywords: u32,
    pub domain_entropy: f64,
}

/// Evidence from live lookups against the target domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAnalysis {
    pub dns_resolves: bool,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub domain_age_days: Option<u64>,
    pub ssl_valid: bool,
    #[serde(default)]
    pub hosting_country: Option<String>,
    #[serde(default)]
    pub isp: Option<String>,
    pub network_risk_score: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub risk_reasons: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub model_loaded: bool,
    #[serde(default)]
    pub model_type: Option<String>,
}

/// Body the service returns alongside a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
