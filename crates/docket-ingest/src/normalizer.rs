use chrono::{DateTime, Utc};
use docket_types::{CanonicalRecord, RawNotification};
use tracing::debug;

use crate::decoders::VariantDecoders;
use crate::{Error, Result};

/// Retention window after which the store may expire a record (7 days)
pub const RETENTION_WINDOW_SECS: i64 = 7 * 24 * 60 * 60;

/// Converts one raw notification into one canonical record
///
/// Pure apart from reading the clock in [`Normalizer::normalize`]; persisting
/// the record is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    decoders: VariantDecoders,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON envelope and normalize it at the current time
    pub fn normalize_json(&self, content: &str) -> Result<CanonicalRecord> {
        let raw = RawNotification::from_json(content)?;
        self.normalize(&raw)
    }

    /// Normalize at the current time
    pub fn normalize(&self, raw: &RawNotification) -> Result<CanonicalRecord> {
        self.normalize_at(raw, Utc::now())
    }

    /// Normalize with an explicit processing instant
    ///
    /// Re-normalizing the same notification at another instant changes only
    /// `expire_at`.
    pub fn normalize_at(
        &self,
        raw: &RawNotification,
        now: DateTime<Utc>,
    ) -> Result<CanonicalRecord> {
        debug!(id = %raw.id, detail_type = %raw.detail_type, "normalizing notification");

        // Backup copy of the full notification
        let raw_payload = raw.to_json()?;

        if raw.id.is_empty() {
            return Err(Error::MissingField {
                field: "id".to_string(),
            });
        }

        let event_payload = match self.decoders.decode(&raw.detail_type, &raw.detail)? {
            Some(detail) => detail.to_payload()?,
            None => {
                debug!(detail_type = %raw.detail_type, "unrecognized detail type, storing without event payload");
                String::new()
            }
        };

        Ok(CanonicalRecord {
            id: raw.id.clone(),
            detail_type: raw.detail_type.clone(),
            source: raw.source.clone(),
            account_id: raw.account_id.clone(),
            time: raw.time,
            region: raw.region.clone(),
            resources: raw.resources.clone(),
            event_payload,
            raw_payload,
            expire_at: now.timestamp() + RETENTION_WINDOW_SECS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use docket_types::{EventDetail, SERVICE_ACTION};
    use serde_json::{Value, json};

    fn notification(detail_type: &str, detail: Value) -> RawNotification {
        RawNotification {
            version: "0".to_string(),
            id: "7e2e4c1a-0000-4000-8000-000000000001".to_string(),
            detail_type: detail_type.to_string(),
            source: "aws.ecs".to_string(),
            account_id: "111122223333".to_string(),
            time: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            region: "us-west-2".to_string(),
            resources: vec!["arn:aws:ecs:us-west-2:111122223333:service/default/web".to_string()],
            detail,
        }
    }

    #[test]
    fn test_expire_at_is_seven_days_after_processing() {
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 15).unwrap();
        let raw = notification("Some Future Event", Value::Null);

        let record = Normalizer::new().normalize_at(&raw, now).unwrap();
        assert_eq!(record.expire_at, now.timestamp() + 604_800);
    }

    #[test]
    fn test_expire_at_truncates_sub_seconds() {
        let now = Utc.timestamp_opt(1_714_557_600, 999_999_999).unwrap();
        let raw = notification("Some Future Event", Value::Null);

        let record = Normalizer::new().normalize_at(&raw, now).unwrap();
        assert_eq!(record.expire_at, 1_714_557_600 + RETENTION_WINDOW_SECS);
    }

    #[test]
    fn test_pass_through_fields() {
        let raw = notification("Some Future Event", json!({"anything": [1, 2]}));
        let record = Normalizer::new().normalize(&raw).unwrap();

        assert_eq!(record.id, raw.id);
        assert_eq!(record.detail_type, raw.detail_type);
        assert_eq!(record.source, raw.source);
        assert_eq!(record.account_id, raw.account_id);
        assert_eq!(record.time, raw.time);
        assert_eq!(record.region, raw.region);
        assert_eq!(record.resources, raw.resources);
    }

    #[test]
    fn test_unrecognized_type_has_empty_payload() {
        let raw = notification("Some Future Event", json!({"whatever": true}));
        let record = Normalizer::new().normalize(&raw).unwrap();

        assert_eq!(record.event_payload, "");
        assert!(!record.raw_payload.is_empty());
    }

    #[test]
    fn test_service_action_without_reason_has_no_reason_key() {
        let raw = notification(
            SERVICE_ACTION,
            json!({
                "eventType": "INFO",
                "eventName": "SERVICE_STEADY_STATE",
                "clusterArn": "arn:aws:ecs:us-west-2:111122223333:cluster/default"
            }),
        );
        let record = Normalizer::new().normalize(&raw).unwrap();

        let payload: Value = serde_json::from_str(&record.event_payload).unwrap();
        let keys = payload.as_object().unwrap();
        assert!(!keys.contains_key("reason"));
        assert!(!keys.contains_key("capacityProviderArns"));
    }

    #[test]
    fn test_decode_failure_is_fatal() {
        let raw = notification(
            SERVICE_ACTION,
            json!({"eventType": "INFO", "clusterArn": "c"}),
        );
        let err = Normalizer::new().normalize(&raw).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "eventName"));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let mut raw = notification("Some Future Event", Value::Null);
        raw.id = String::new();
        let err = Normalizer::new().normalize(&raw).unwrap_err();
        assert_eq!(err.field(), Some("id"));
    }

    #[test]
    fn test_payload_reads_back_as_typed_variant() {
        let raw = notification(
            SERVICE_ACTION,
            json!({
                "eventType": "ERROR",
                "eventName": "SERVICE_TASK_PLACEMENT_FAILURE",
                "clusterArn": "c",
                "reason": "RESOURCE:FARGATE"
            }),
        );
        let record = Normalizer::new().normalize(&raw).unwrap();

        match record.event_detail().unwrap() {
            Some(EventDetail::ServiceAction(action)) => {
                assert_eq!(action.reason.as_deref(), Some("RESOURCE:FARGATE"))
            }
            other => panic!("Wrong payload type: {:?}", other),
        }
    }

    #[test]
    fn test_normalize_json_rejects_malformed_envelope() {
        let err = Normalizer::new()
            .normalize_json(r#"{"id": "x", "detail-type": 5, "time": "2024-05-01T10:00:00Z"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
