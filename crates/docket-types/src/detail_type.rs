// Discriminator strings carried in the `detail-type` field of a notification.
//
// These are the only values the ingest and render sides agree on by name.
// Anything else is an unrecognized discriminator: it is stored with an empty
// typed payload and rendered as a placeholder, never rejected.

pub const CONTAINER_INSTANCE_STATE_CHANGE: &str = "ECS Container Instance State Change";
pub const SERVICE_ACTION: &str = "ECS Service Action";
pub const DEPLOYMENT_STATE_CHANGE: &str = "ECS Deployment State Change";
pub const TASK_STATE_CHANGE: &str = "ECS Task State Change";

/// Audit-trail events are routed by discriminator but carry no typed payload.
pub const API_CALL_VIA_CLOUDTRAIL: &str = "AWS API Call via CloudTrail";

/// Discriminators that select a typed payload, in declaration order.
pub const PAYLOAD_DETAIL_TYPES: &[&str] = &[
    CONTAINER_INSTANCE_STATE_CHANGE,
    SERVICE_ACTION,
    DEPLOYMENT_STATE_CHANGE,
    TASK_STATE_CHANGE,
];

/// Check whether a discriminator is known for routing only (no typed payload)
pub fn is_routing_only(detail_type: &str) -> bool {
    detail_type == API_CALL_VIA_CLOUDTRAIL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_only_is_not_a_payload_type() {
        assert!(is_routing_only(API_CALL_VIA_CLOUDTRAIL));
        assert!(!PAYLOAD_DETAIL_TYPES.contains(&API_CALL_VIA_CLOUDTRAIL));
        assert!(!is_routing_only(SERVICE_ACTION));
    }
}
