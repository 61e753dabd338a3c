//! Pure mapping from a classification response to display facts.
//!
//! Everything the output surface needs (labels, percentages, highlight flags)
//! is computed here so adapters only have to lay the facts out.

use crate::response::{ClassificationResponse, NetworkAnalysis, UrlFeatures};

pub const UNKNOWN: &str = "Unknown";
/// Domains younger than this many days are flagged.
pub const YOUNG_DOMAIN_DAYS: u64 = 90;
/// Network risk scores above this value are flagged.
pub const NETWORK_RISK_THRESHOLD: u32 = 5;
pub const NETWORK_RISK_MAX: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Phishing,
    Safe,
}

impl Verdict {
    pub fn title(self) -> &'static str {
        match self {
            Verdict::Phishing => "Phishing Detected!",
            Verdict::Safe => "URL is Safe",
        }
    }
}

/// Style bucket selected by the service's risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskSeverity {
    Safe,
    Low,
    Medium,
    High,
    Other,
}

impl RiskSeverity {
    pub fn from_level(level: &str) -> Self {
        match level.to_ascii_lowercase().as_str() {
            "safe" => RiskSeverity::Safe,
            "low" => RiskSeverity::Low,
            "medium" => RiskSeverity::Medium,
            "high" => RiskSeverity::High,
            _ => RiskSeverity::Other,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            RiskSeverity::Safe => "safe",
            RiskSeverity::Low => "low",
            RiskSeverity::Medium => "medium",
            RiskSeverity::High => "high",
            RiskSeverity::Other => "other",
        }
    }
}

/// One labelled value, optionally flagged as concerning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRow {
    pub label: &'static str,
    pub value: String,
    pub highlight: bool,
}

impl FactRow {
    fn plain(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            highlight: false,
        }
    }

    fn flagged(label: &'static str, value: impl Into<String>, highlight: bool) -> Self {
        Self {
            label,
            value: value.into(),
            highlight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSection {
    pub rows: Vec<FactRow>,
    /// Comma-joined risk reasons; `None` when the service listed none.
    pub risk_factors: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFacts {
    pub verdict: Verdict,
    pub title: &'static str,
    pub classification_label: String,
    pub url: String,
    pub confidence_percent: f64,
    pub confidence_text: String,
    pub legitimate_text: String,
    pub phishing_text: String,
    pub risk_label: String,
    pub risk_severity: RiskSeverity,
    pub model_type: Option<String>,
    pub features: Option<Vec<FactRow>>,
    pub network: Option<NetworkSection>,
}

impl DisplayFacts {
    /// Confidence bar fill in percent, matching the displayed confidence.
    pub fn confidence_fill(&self) -> f64 {
        self.confidence_percent
    }

    pub fn feature(&self, label: &str) -> Option<&FactRow> {
        self.features
            .as_ref()
            .and_then(|rows| rows.iter().find(|row| row.label == label))
    }

    pub fn network_row(&self, label: &str) -> Option<&FactRow> {
        self.network
            .as_ref()
            .and_then(|section| section.rows.iter().find(|row| row.label == label))
    }
}

pub fn render(response: &ClassificationResponse) -> DisplayFacts {
    let verdict = if response.is_phishing {
        Verdict::Phishing
    } else {
        Verdict::Safe
    };
    let confidence_percent = response.confidence_score * 100.0;

    DisplayFacts {
        verdict,
        title: verdict.title(),
        classification_label: capitalize_first(&response.classification),
        url: response.url.clone(),
        confidence_percent,
        confidence_text: format_percent(response.confidence_score),
        legitimate_text: format_percent(response.confidence.legitimate),
        phishing_text: format_percent(response.confidence.phishing),
        risk_label: capitalize_first(&response.risk_level),
        risk_severity: RiskSeverity::from_level(&response.risk_level),
        model_type: response.model_type.clone(),
        features: response.features.as_ref().map(feature_rows),
        network: response.network_analysis.as_ref().map(network_section),
    }
}

fn feature_rows(features: &UrlFeatures) -> Vec<FactRow> {
    vec![
        FactRow::plain("URL Length", format!("{} chars", features.url_length)),
        FactRow::flagged("HTTPS", yes_no(features.has_https), !features.has_https),
        FactRow::flagged(
            "IP Address",
            yes_no(features.has_ip_address),
            features.has_ip_address,
        ),
        FactRow::flagged(
            "Suspicious TLD",
            yes_no(features.has_suspicious_tld),
            features.has_suspicious_tld,
        ),
        FactRow::flagged(
            "Phishing Keywords",
            features.num_suspicious_keywords.to_string(),
            features.num_suspicious_keywords > 0,
        ),
        FactRow::plain(
            "Domain Randomness",
            format!("{:.2}", features.domain_entropy),
        ),
    ]
}

fn network_section(network: &NetworkAnalysis) -> NetworkSection {
    let domain_age = match network.domain_age_days {
        Some(days) => format!("{days} days"),
        None => UNKNOWN.to_string(),
    };
    let young_domain = network
        .domain_age_days
        .is_some_and(|days| days < YOUNG_DOMAIN_DAYS);

    let rows = vec![
        FactRow::flagged(
            "DNS Status",
            if network.dns_resolves { "Resolves" } else { "Failed" },
            !network.dns_resolves,
        ),
        FactRow::plain("IP Address", or_unknown(network.ip_address.as_deref())),
        FactRow::flagged("Domain Age", domain_age, young_domain),
        FactRow::flagged(
            "SSL Certificate",
            if network.ssl_valid { "Valid" } else { "Invalid" },
            !network.ssl_valid,
        ),
        FactRow::plain("Location", or_unknown(network.hosting_country.as_deref())),
        FactRow::plain("ISP", or_unknown(network.isp.as_deref())),
        FactRow::flagged(
            "Network Risk",
            format!("{}/{}", network.network_risk_score, NETWORK_RISK_MAX),
            network.network_risk_score > NETWORK_RISK_THRESHOLD,
        ),
    ];

    let risk_factors = if network.risk_reasons.is_empty() {
        None
    } else {
        Some(network.risk_reasons.join(", "))
    };

    NetworkSection { rows, risk_factors }
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a probability as a percentage with one decimal place.
///
/// Ties round half away from zero (`0.8625` is `86.3%`), not to even.
pub fn format_percent(probability: f64) -> String {
    let tenths = (probability * 1000.0).round();
    format!("{:.1}%", tenths / 10.0)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn or_unknown(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("phishing"), "Phishing");
        assert_eq!(capitalize_first("hIGH"), "HIGH");
        assert_eq!(capitalize_first("ébauche"), "Ébauche");
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(0.92), "92.0%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.12345), "12.3%");
        assert_eq!(format_percent(0.8625), "86.3%");
        assert_eq!(format_percent(0.0625), "6.3%");
    }

    #[test]
    fn severity_is_case_insensitive() {
        assert_eq!(RiskSeverity::from_level("HIGH"), RiskSeverity::High);
        assert_eq!(RiskSeverity::from_level("critical"), RiskSeverity::Other);
    }
}
