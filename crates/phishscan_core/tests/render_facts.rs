use phishscan_core::{render, ClassificationResponse, FactRow, RiskSeverity, Verdict, UNKNOWN};
use pretty_assertions::assert_eq;

fn parse(json: &str) -> ClassificationResponse {
    serde_json::from_str(json).expect("valid response json")
}

fn full_response() -> ClassificationResponse {
    parse(
        r#"{
            "url": "http://192.168.0.1/login-verify.xyz",
            "is_phishing": true,
            "classification": "phishing",
            "confidence_score": 0.87,
            "confidence": {"legitimate": 0.13, "phishing": 0.87},
            "risk_level": "high",
            "model_type": "tfidf",
            "features": {
                "url_length": 36,
                "has_https": false,
                "has_ip_address": true,
                "has_suspicious_tld": true,
                "num_suspicious_keywords": 2,
                "domain_entropy": 3.456
            },
            "network_analysis": {
                "dns_resolves": false,
                "ip_address": null,
                "domain_age_days": 12,
                "ssl_valid": false,
                "hosting_country": null,
                "isp": null,
                "network_risk_score": 9,
                "risk_reasons": ["Domain does not resolve", "Invalid SSL certificate"]
            }
        }"#,
    )
}

fn safe_response() -> ClassificationResponse {
    parse(
        r#"{
            "url": "https://example.com",
            "is_phishing": false,
            "classification": "legitimate",
            "confidence_score": 0.96,
            "confidence": {"legitimate": 0.96, "phishing": 0.04},
            "risk_level": "safe",
            "features": {
                "url_length": 19,
                "has_https": true,
                "has_ip_address": false,
                "has_suspicious_tld": false,
                "num_suspicious_keywords": 0,
                "domain_entropy": 2.5
            },
            "network_analysis": {
                "dns_resolves": true,
                "ip_address": "93.184.216.34",
                "domain_age_days": 10000,
                "ssl_valid": true,
                "hosting_country": "US",
                "isp": "Edgecast",
                "network_risk_score": 0,
                "risk_reasons": []
            }
        }"#,
    )
}

fn row(label: &'static str, value: &str, highlight: bool) -> FactRow {
    FactRow {
        label,
        value: value.to_string(),
        highlight,
    }
}

#[test]
fn phishing_scenario_labels() {
    let facts = render(&parse(
        r#"{
            "url": "example.com",
            "is_phishing": true,
            "classification": "phishing",
            "confidence_score": 0.92,
            "confidence": {"legitimate": 0.08, "phishing": 0.92},
            "risk_level": "high",
            "features": {
                "url_length": 11,
                "has_https": false,
                "has_ip_address": false,
                "has_suspicious_tld": false,
                "num_suspicious_keywords": 0,
                "domain_entropy": 2.85
            }
        }"#,
    ));

    assert_eq!(facts.verdict, Verdict::Phishing);
    assert_eq!(facts.title, "Phishing Detected!");
    assert_eq!(facts.classification_label, "Phishing");
    assert_eq!(facts.confidence_text, "92.0%");
    assert_eq!(facts.legitimate_text, "8.0%");
    assert_eq!(facts.phishing_text, "92.0%");
    assert_eq!(facts.risk_label, "High");
    assert_eq!(facts.risk_severity, RiskSeverity::High);
    assert!(facts.network.is_none());
}

#[test]
fn feature_rows_flag_concerning_values() {
    let facts = render(&full_response());

    assert_eq!(
        facts.features.clone().unwrap(),
        vec![
            row("URL Length", "36 chars", false),
            row("HTTPS", "No", true),
            row("IP Address", "Yes", true),
            row("Suspicious TLD", "Yes", true),
            row("Phishing Keywords", "2", true),
            row("Domain Randomness", "3.46", false),
        ]
    );
}

#[test]
fn network_rows_flag_and_fill_unknowns() {
    let facts = render(&full_response());
    let network = facts.network.expect("network section");

    assert_eq!(
        network.rows,
        vec![
            row("DNS Status", "Failed", true),
            row("IP Address", UNKNOWN, false),
            row("Domain Age", "12 days", true),
            row("SSL Certificate", "Invalid", true),
            row("Location", UNKNOWN, false),
            row("ISP", UNKNOWN, false),
            row("Network Risk", "9/15", true),
        ]
    );
    assert_eq!(
        network.risk_factors.as_deref(),
        Some("Domain does not resolve, Invalid SSL certificate")
    );
}

#[test]
fn clean_response_has_no_highlights() {
    let facts = render(&safe_response());

    assert_eq!(facts.verdict, Verdict::Safe);
    assert_eq!(facts.title, "URL is Safe");
    assert_eq!(facts.classification_label, "Legitimate");
    assert_eq!(facts.risk_label, "Safe");
    assert_eq!(facts.confidence_text, "96.0%");

    let features = facts.features.as_ref().unwrap();
    assert!(features.iter().all(|row| !row.highlight));
    let network = facts.network.as_ref().unwrap();
    assert!(network.rows.iter().all(|row| !row.highlight));
    assert_eq!(network.risk_factors, None);
    assert_eq!(facts.network_row("ISP").unwrap().value, "Edgecast");
}

#[test]
fn threshold_boundaries() {
    let mut response = safe_response();
    let network = response.network_analysis.as_mut().unwrap();
    network.domain_age_days = Some(90);
    network.network_risk_score = 5;
    let facts = render(&response);
    assert!(!facts.network_row("Domain Age").unwrap().highlight);
    assert!(!facts.network_row("Network Risk").unwrap().highlight);

    let network = response.network_analysis.as_mut().unwrap();
    network.domain_age_days = Some(89);
    network.network_risk_score = 6;
    let facts = render(&response);
    assert!(facts.network_row("Domain Age").unwrap().highlight);
    assert!(facts.network_row("Network Risk").unwrap().highlight);
}

#[test]
fn missing_domain_age_is_unknown_and_not_flagged() {
    let mut response = safe_response();
    response.network_analysis.as_mut().unwrap().domain_age_days = None;

    let facts = render(&response);
    let age = facts.network_row("Domain Age").unwrap();
    assert_eq!(age.value, UNKNOWN);
    assert!(!age.highlight);
}

#[test]
fn zero_day_old_domain_is_flagged() {
    let mut response = safe_response();
    response.network_analysis.as_mut().unwrap().domain_age_days = Some(0);

    let age = render(&response).network_row("Domain Age").cloned().unwrap();
    assert_eq!(age, row("Domain Age", "0 days", true));
}

#[test]
fn absent_sections_are_suppressed() {
    let facts = render(&parse(
        r#"{
            "url": "example.com",
            "is_phishing": false,
            "classification": "legitimate",
            "confidence_score": 0.6,
            "confidence": {"legitimate": 0.6, "phishing": 0.4},
            "risk_level": "low"
        }"#,
    ));

    assert!(facts.features.is_none());
    assert!(facts.network.is_none());
    assert!(facts.feature("HTTPS").is_none());
    assert_eq!(facts.model_type, None);
}

#[test]
fn missing_risk_reasons_omit_the_line() {
    let response = parse(
        r#"{
            "url": "example.com",
            "is_phishing": false,
            "classification": "legitimate",
            "confidence_score": 0.6,
            "confidence": {"legitimate": 0.6, "phishing": 0.4},
            "risk_level": "low",
            "network_analysis": {
                "dns_resolves": true,
                "ssl_valid": true,
                "network_risk_score": 1
            }
        }"#,
    );

    let network = render(&response).network.unwrap();
    assert_eq!(network.risk_factors, None);
    assert_eq!(network.rows.len(), 7);
}

#[test]
fn null_risk_reasons_omit_the_line() {
    let response = parse(
        r#"{
            "url": "example.com",
            "is_phishing": false,
            "classification": "legitimate",
            "confidence_score": 0.6,
            "confidence": {"legitimate": 0.6, "phishing": 0.4},
            "risk_level": "low",
            "network_analysis": {
                "dns_resolves": true,
                "ssl_valid": true,
                "network_risk_score": 1,
                "risk_reasons": null
            }
        }"#,
    );

    let network = render(&response).network.unwrap();
    assert_eq!(network.risk_factors, None);
    assert_eq!(network.rows.len(), 7);
}

#[test]
fn tie_confidences_round_half_up() {
    let mut response = safe_response();
    response.confidence_score = 0.8625;
    response.confidence.phishing = 0.0625;

    let facts = render(&response);
    assert_eq!(facts.confidence_text, "86.3%");
    assert_eq!(facts.phishing_text, "6.3%");
}

#[test]
fn confidence_is_shown_without_reconciliation() {
    let mut response = safe_response();
    response.confidence_score = 0.5;

    let facts = render(&response);
    assert_eq!(facts.confidence_text, "50.0%");
    assert_eq!(facts.legitimate_text, "96.0%");
    assert_eq!(facts.confidence_fill(), 50.0);
}

#[test]
fn render_is_deterministic() {
    let response = full_response();
    assert_eq!(render(&response), render(&response));
    assert_eq!(render(&response).model_type.as_deref(), Some("tfidf"));
}

#[test]
fn unknown_risk_level_keeps_its_text() {
    let mut response = safe_response();
    response.risk_level = "critical".to_string();

    let facts = render(&response);
    assert_eq!(facts.risk_label, "Critical");
    assert_eq!(facts.risk_severity, RiskSeverity::Other);
    assert_eq!(facts.risk_severity.class_name(), "other");
}
