//! Wire types for the honeypot API.
//!
//! These types match the JSON produced by the honeypot service's `/stats`
//! and `/analyze` endpoints. Every stats field is optional on the wire and
//! defaults to zero, so a partially populated response never fails to decode.

use serde::{Deserialize, Serialize};

/// One aggregate counter snapshot from `GET /stats`.
///
/// Each poll cycle replaces the previous snapshot wholesale; there is no
/// identity or history at this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSnapshot {
    pub active_conversations: u64,
    pub total_messages: u64,
    pub scams_detected: u64,
    pub avg_response_time: f64,

    // Intelligence-category counts
    pub bank_accounts: u64,
    pub upi_ids: u64,
    pub phishing_links: u64,
    pub phone_numbers: u64,
    pub emails: u64,
    pub suspicious_patterns: u64,

    // Scam-type counts
    pub banking_scams: u64,
    pub upi_scams: u64,
    pub phishing_scams: u64,
    pub investment_scams: u64,
    pub romance_scams: u64,
}

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub message: String,
}

/// Response from `POST /analyze`.
///
/// `scam_type` and `confidence` are present only when `scam_detected` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub conversation_id: String,
    pub scam_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scam_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub intelligence_extracted: Vec<String>,
    pub ai_response: String,
    /// Server-side processing time in milliseconds.
    pub response_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_fields_default_to_zero() {
        let snapshot: StatsSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, StatsSnapshot::default());
        assert_eq!(snapshot.scams_detected, 0);
        assert_eq!(snapshot.avg_response_time, 0.0);
    }

    #[test]
    fn test_stats_partial_snapshot() {
        let json = r#"{"scams_detected": 3, "banking_scams": 3, "avg_response_time": 8.77}"#;
        let snapshot: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.scams_detected, 3);
        assert_eq!(snapshot.banking_scams, 3);
        assert_eq!(snapshot.avg_response_time, 8.77);
        assert_eq!(snapshot.upi_scams, 0);
        assert_eq!(snapshot.total_messages, 0);
    }

    #[test]
    fn test_analysis_result_clean_message() {
        let json = r#"{
            "conversation_id": "abc123ef-0000",
            "scam_detected": false,
            "intelligence_extracted": [],
            "ai_response": "Hi!",
            "response_time": 12.34
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(!result.scam_detected);
        assert!(result.scam_type.is_none());
        assert!(result.confidence.is_none());
        assert!(result.intelligence_extracted.is_empty());
        assert_eq!(result.response_time, 12.34);
    }

    #[test]
    fn test_analysis_result_detected_scam() {
        let json = r#"{
            "conversation_id": "deadbeef-1234",
            "scam_detected": true,
            "scam_type": "banking",
            "confidence": 0.92,
            "intelligence_extracted": ["Bank Account: 1234567890"],
            "ai_response": "Oh no, which account?",
            "response_time": 104.2
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.scam_detected);
        assert_eq!(result.scam_type.as_deref(), Some("banking"));
        assert_eq!(result.confidence, Some(0.92));
        assert_eq!(result.intelligence_extracted.len(), 1);
    }
}
