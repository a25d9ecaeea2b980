use serde::{Deserialize, Serialize};

use crate::detail_type::{
    CONTAINER_INSTANCE_STATE_CHANGE, DEPLOYMENT_STATE_CHANGE, SERVICE_ACTION, TASK_STATE_CHANGE,
};

/// Typed payload variants, one per payload-carrying discriminator
///
/// The serialized `eventPayload` holds only the inner struct; the variant is
/// recovered from the record's `detailType`, so both sides of the schema must
/// agree on the discriminator strings in `detail_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetail {
    ContainerInstanceStateChange(ContainerInstanceStateChange),
    ServiceAction(ServiceAction),
    DeploymentStateChange(DeploymentStateChange),
    TaskStateChange(TaskStateChange),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInstanceStateChange {
    /// Whether the container agent is connected to the control plane
    pub agent_connected: bool,
    /// Instance status (e.g. "ACTIVE", "DRAINING")
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAction {
    /// Severity class ("INFO", "WARN", "ERROR")
    pub event_type: String,
    /// Event name (e.g. "SERVICE_STEADY_STATE")
    pub event_name: String,
    pub cluster_arn: String,

    /// Absent when the event carries no reason, distinct from an empty reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Absent when no capacity providers applied, distinct from an empty list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_provider_arns: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStateChange {
    pub event_type: String,
    pub event_name: String,
    pub deployment_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStateChange {
    pub last_status: String,
    pub desired_status: String,
    #[serde(default)]
    pub containers: Vec<ContainerState>,
}

/// State of one container within a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerState {
    #[serde(rename = "containerArn")]
    pub arn: String,
    pub name: String,
    pub last_status: String,
}

impl EventDetail {
    /// Discriminator this variant is stored under
    pub fn detail_type(&self) -> &'static str {
        match self {
            EventDetail::ContainerInstanceStateChange(_) => CONTAINER_INSTANCE_STATE_CHANGE,
            EventDetail::ServiceAction(_) => SERVICE_ACTION,
            EventDetail::DeploymentStateChange(_) => DEPLOYMENT_STATE_CHANGE,
            EventDetail::TaskStateChange(_) => TASK_STATE_CHANGE,
        }
    }

    /// Serialize the active variant into its `eventPayload` form (compact JSON)
    pub fn to_payload(&self) -> crate::Result<String> {
        let json = match self {
            EventDetail::ContainerInstanceStateChange(p) => serde_json::to_string(p)?,
            EventDetail::ServiceAction(p) => serde_json::to_string(p)?,
            EventDetail::DeploymentStateChange(p) => serde_json::to_string(p)?,
            EventDetail::TaskStateChange(p) => serde_json::to_string(p)?,
        };
        Ok(json)
    }

    /// Read a stored `eventPayload` back into the variant selected by `detail_type`
    ///
    /// Returns `Ok(None)` for discriminators without a typed payload.
    pub fn from_payload(detail_type: &str, payload: &str) -> crate::Result<Option<Self>> {
        let detail = match detail_type {
            CONTAINER_INSTANCE_STATE_CHANGE => {
                EventDetail::ContainerInstanceStateChange(serde_json::from_str(payload)?)
            }
            SERVICE_ACTION => EventDetail::ServiceAction(serde_json::from_str(payload)?),
            DEPLOYMENT_STATE_CHANGE => {
                EventDetail::DeploymentStateChange(serde_json::from_str(payload)?)
            }
            TASK_STATE_CHANGE => EventDetail::TaskStateChange(serde_json::from_str(payload)?),
            _ => return Ok(None),
        };
        Ok(Some(detail))
    }
}
