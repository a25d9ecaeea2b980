use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw lifecycle notification as delivered by the event bus
///
/// Key spellings follow the event-bus envelope (`detail-type`, `account`).
/// Serializing this struct and reading it back yields an equal value, which is
/// what makes the `rawPayload` backup copy lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNotification {
    /// Envelope version (usually "0")
    #[serde(default)]
    pub version: String,

    /// Notification ID assigned by the event bus
    pub id: String,

    /// Discriminator selecting the shape of `detail`
    #[serde(rename = "detail-type")]
    pub detail_type: String,

    /// Emitting service (e.g. "aws.ecs")
    #[serde(default)]
    pub source: String,

    /// Account the notification belongs to
    #[serde(rename = "account", default)]
    pub account_id: String,

    /// Event timestamp (UTC)
    pub time: DateTime<Utc>,

    #[serde(default)]
    pub region: String,

    /// Resource identifiers the notification refers to, may be empty
    #[serde(default)]
    pub resources: Vec<String>,

    /// Semi-structured payload, shape depends on `detail_type`
    #[serde(default)]
    pub detail: Value,
}

impl RawNotification {
    /// Parse a notification from its JSON envelope
    pub fn from_json(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Compact JSON form of the whole notification
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_float_detail_survives_round_trip() {
        let values: [f64; 5] = [
            -4.99111057251555039e135,
            0.1 + 0.2,
            1.7976931348623157e308,
            5e-324,
            -0.0,
        ];
        for v in values {
            let raw = RawNotification {
                version: "0".to_string(),
                id: "abc".to_string(),
                detail_type: "Some Future Event".to_string(),
                source: "aws.ecs".to_string(),
                account_id: "111122223333".to_string(),
                time: chrono::Utc::now(),
                region: "us-west-2".to_string(),
                resources: vec![],
                detail: json!({ "v": v }),
            };

            let restored = RawNotification::from_json(&raw.to_json().unwrap()).unwrap();
            assert_eq!(restored, raw, "{:e}", v);
            assert_eq!(restored.detail["v"].as_f64().unwrap().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_parse_envelope_keys() {
        let raw = RawNotification::from_json(
            r#"{
                "version": "0",
                "id": "abc",
                "detail-type": "ECS Task State Change",
                "source": "aws.ecs",
                "account": "111122223333",
                "time": "2024-05-01T10:00:00Z",
                "region": "us-west-2",
                "resources": ["arn:aws:ecs:us-west-2:111122223333:task/t1"],
                "detail": {"lastStatus": "RUNNING"}
            }"#,
        )
        .unwrap();

        assert_eq!(raw.detail_type, "ECS Task State Change");
        assert_eq!(raw.account_id, "111122223333");
        assert_eq!(raw.resources.len(), 1);
        assert_eq!(raw.detail, json!({"lastStatus": "RUNNING"}));
    }

    #[test]
    fn test_missing_optional_envelope_fields_default() {
        let raw = RawNotification::from_json(
            r#"{"id": "x", "detail-type": "Something", "time": "2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert!(raw.resources.is_empty());
        assert!(raw.detail.is_null());
        assert_eq!(raw.version, "");
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let raw = RawNotification::from_json(
            r#"{"id": "x", "detail-type": "Something", "time": "2024-05-01T10:00:00.123456789Z",
                "detail": {"nested": {"n": 1.5, "list": [1, "two", null]}}}"#,
        )
        .unwrap();

        let back = RawNotification::from_json(&raw.to_json().unwrap()).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_detail_type_is_required() {
        let err = RawNotification::from_json(r#"{"id": "x", "time": "2024-05-01T10:00:00Z"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("detail-type"));
    }
}
