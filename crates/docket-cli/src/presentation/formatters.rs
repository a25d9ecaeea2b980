// Record -> one tab-separated summary line
//
// Row layout: time, detail type, first resource, summary text, id.
// Routing-only discriminators (CloudTrail) get the first two columns only.

use chrono::SecondsFormat;
use docket_types::{
    CanonicalRecord, ContainerInstanceStateChange, EventDetail, ServiceAction, is_routing_only,
};
use tracing::warn;

pub const MISSING_EVENT_DETAILS: &str = "Missing event details";

const STEADY_STATE_EVENT: &str = "SERVICE_STEADY_STATE";

/// Per-variant summary text for stored records
///
/// Never fails: a payload that does not read back as its variant is logged and
/// summarized as [`MISSING_EVENT_DETAILS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantFormatters;

impl VariantFormatters {
    pub fn new() -> Self {
        Self
    }

    /// Full display row for one record
    pub fn format_record(&self, record: &CanonicalRecord) -> String {
        let time = record.time.to_rfc3339_opts(SecondsFormat::AutoSi, true);

        if is_routing_only(&record.detail_type) {
            return format!("{}\t{}", time, record.detail_type);
        }

        format!(
            "{}\t{}\t{}\t{}\t{}",
            time,
            record.detail_type,
            record.first_resource().unwrap_or(""),
            self.format_detail(record),
            record.id
        )
    }

    /// Summary column for one record
    pub fn format_detail(&self, record: &CanonicalRecord) -> String {
        match EventDetail::from_payload(&record.detail_type, &record.event_payload) {
            Ok(Some(detail)) => summarize(&detail),
            Ok(None) => MISSING_EVENT_DETAILS.to_string(),
            Err(err) => {
                warn!(id = %record.id, detail_type = %record.detail_type, error = %err, "malformed event payload");
                MISSING_EVENT_DETAILS.to_string()
            }
        }
    }
}

fn summarize(detail: &EventDetail) -> String {
    match detail {
        EventDetail::ContainerInstanceStateChange(change) => container_instance_summary(change),
        EventDetail::ServiceAction(action) => service_action_summary(action),
        // Decoded and stored, but no summary wording exists for these
        EventDetail::DeploymentStateChange(_) | EventDetail::TaskStateChange(_) => {
            MISSING_EVENT_DETAILS.to_string()
        }
    }
}

fn container_instance_summary(change: &ContainerInstanceStateChange) -> String {
    let connection = if change.agent_connected {
        "connected"
    } else {
        "not connected"
    };
    format!("Status: {} and the agent is {}", change.status, connection)
}

fn service_action_summary(action: &ServiceAction) -> String {
    match action.event_type.as_str() {
        "ERROR" => format!(
            "Error of \"{}\" for reason: \"{}\"",
            action.event_name,
            action.reason.as_deref().unwrap_or("")
        ),
        "INFO" if action.event_name == STEADY_STATE_EVENT => {
            "Service entered the steady state".to_string()
        }
        _ => String::new(),
    }
}
