use docket_types::{
    ContainerInstanceStateChange, ContainerState, DeploymentStateChange, EventDetail,
    ServiceAction, TaskStateChange,
};
use serde_json::Value;

use super::fields::Fields;
use crate::Result;

pub(crate) fn decode_container_instance_state_change(detail: &Value) -> Result<EventDetail> {
    let fields = Fields::detail(detail)?;

    Ok(EventDetail::ContainerInstanceStateChange(
        ContainerInstanceStateChange {
            agent_connected: fields.required_bool("agentConnected")?,
            status: fields.required_str("status")?,
        },
    ))
}

pub(crate) fn decode_service_action(detail: &Value) -> Result<EventDetail> {
    let fields = Fields::detail(detail)?;

    Ok(EventDetail::ServiceAction(ServiceAction {
        event_type: fields.required_str("eventType")?,
        event_name: fields.required_str("eventName")?,
        cluster_arn: fields.required_str("clusterArn")?,
        reason: fields.optional_str("reason")?,
        capacity_provider_arns: fields.optional_str_list("capacityProviderArns")?,
    }))
}

pub(crate) fn decode_deployment_state_change(detail: &Value) -> Result<EventDetail> {
    let fields = Fields::detail(detail)?;

    Ok(EventDetail::DeploymentStateChange(DeploymentStateChange {
        event_type: fields.required_str("eventType")?,
        event_name: fields.required_str("eventName")?,
        deployment_id: fields.required_str("deploymentId")?,
        reason: fields.required_str("reason")?,
    }))
}

pub(crate) fn decode_task_state_change(detail: &Value) -> Result<EventDetail> {
    let fields = Fields::detail(detail)?;
    let last_status = fields.required_str("lastStatus")?;
    let desired_status = fields.required_str("desiredStatus")?;

    let containers = fields
        .objects("containers")?
        .iter()
        .map(|container| {
            Ok(ContainerState {
                arn: container.required_str("containerArn")?,
                name: container.required_str("name")?,
                last_status: container.required_str("lastStatus")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(EventDetail::TaskStateChange(TaskStateChange {
        last_status,
        desired_status,
        containers,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn test_container_instance_missing_status() {
        let err = decode_container_instance_state_change(&json!({"agentConnected": true}))
            .unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "status"));
    }

    #[test]
    fn test_container_instance_wrong_type() {
        let err = decode_container_instance_state_change(
            &json!({"agentConnected": "yes", "status": "ACTIVE"}),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { ref field, expected: "boolean" } if field == "agentConnected"
        ));
    }

    #[test]
    fn test_service_action_optionals_absent() {
        let detail = decode_service_action(&json!({
            "eventType": "INFO",
            "eventName": "SERVICE_STEADY_STATE",
            "clusterArn": "arn:aws:ecs:us-west-2:111122223333:cluster/default",
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();

        let EventDetail::ServiceAction(action) = detail else {
            panic!("Wrong payload type");
        };
        assert_eq!(action.reason, None);
        assert_eq!(action.capacity_provider_arns, None);
    }

    #[test]
    fn test_service_action_optionals_present() {
        let detail = decode_service_action(&json!({
            "eventType": "ERROR",
            "eventName": "SERVICE_TASK_PLACEMENT_FAILURE",
            "clusterArn": "c",
            "reason": "RESOURCE:FARGATE",
            "capacityProviderArns": ["arn:cp/FARGATE"]
        }))
        .unwrap();

        let EventDetail::ServiceAction(action) = detail else {
            panic!("Wrong payload type");
        };
        assert_eq!(action.reason.as_deref(), Some("RESOURCE:FARGATE"));
        assert_eq!(
            action.capacity_provider_arns,
            Some(vec!["arn:cp/FARGATE".to_string()])
        );
    }

    #[test]
    fn test_deployment_requires_reason() {
        let err = decode_deployment_state_change(&json!({
            "eventType": "INFO",
            "eventName": "SERVICE_DEPLOYMENT_IN_PROGRESS",
            "deploymentId": "ecs-svc/1"
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("reason"));
    }

    #[test]
    fn test_task_without_containers() {
        let detail = decode_task_state_change(&json!({
            "lastStatus": "PROVISIONING",
            "desiredStatus": "RUNNING"
        }))
        .unwrap();

        let EventDetail::TaskStateChange(task) = detail else {
            panic!("Wrong payload type");
        };
        assert!(task.containers.is_empty());
    }

    #[test]
    fn test_task_container_missing_arn() {
        let err = decode_task_state_change(&json!({
            "lastStatus": "RUNNING",
            "desiredStatus": "RUNNING",
            "containers": [
                {"containerArn": "arn:c0", "name": "web", "lastStatus": "RUNNING"},
                {"name": "sidecar", "lastStatus": "PENDING"}
            ]
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("containers[1].containerArn"));
    }

    #[test]
    fn test_detail_must_be_object() {
        let err = decode_task_state_change(&Value::Null).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { ref field, expected: "object" } if field == "detail"
        ));
    }
}
