use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::detail::EventDetail;

/// Canonical, storage-ready form of one notification
///
/// Created once by the normalizer and never modified afterwards. The store
/// persists exactly these fields and the render side reads exactly these
/// fields back, so the serialized key names are part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Source notification ID (non-empty)
    pub id: String,

    /// Discriminator, known or not
    pub detail_type: String,

    pub source: String,

    #[serde(rename = "account")]
    pub account_id: String,

    /// Event timestamp (UTC)
    pub time: DateTime<Utc>,

    pub region: String,

    /// Resource identifiers in notification order, may be empty
    pub resources: Vec<String>,

    /// Serialized typed payload, empty for discriminators without one
    pub event_payload: String,

    /// Serialized full notification, always populated
    pub raw_payload: String,

    /// Epoch seconds after which the store may drop the record
    pub expire_at: i64,
}

impl CanonicalRecord {
    /// First resource identifier, if any
    pub fn first_resource(&self) -> Option<&str> {
        self.resources.first().map(String::as_str)
    }

    /// Decode the typed payload selected by `detail_type`
    ///
    /// `Ok(None)` when the discriminator carries no typed payload or the
    /// payload is empty.
    pub fn event_detail(&self) -> crate::Result<Option<EventDetail>> {
        if self.event_payload.is_empty() {
            return Ok(None);
        }
        EventDetail::from_payload(&self.detail_type, &self.event_payload)
    }

    /// Restore the notification this record was created from
    pub fn raw_notification(&self) -> crate::Result<super::RawNotification> {
        super::RawNotification::from_json(&self.raw_payload)
    }
}
