// Detail-type dispatch
//
// Each supported discriminator maps to exactly one decoder function. The table
// is closed: supporting a new notification type means adding one entry to
// DECODERS (plus its decoder), never touching existing entries.

mod ecs;
mod fields;

use docket_types::{
    CONTAINER_INSTANCE_STATE_CHANGE, DEPLOYMENT_STATE_CHANGE, EventDetail, SERVICE_ACTION,
    TASK_STATE_CHANGE,
};
use serde_json::Value;

use crate::Result;

/// Pure function from an untyped `detail` payload to one typed variant
pub type DecodeFn = fn(&Value) -> Result<EventDetail>;

const DECODERS: &[(&str, DecodeFn)] = &[
    (
        CONTAINER_INSTANCE_STATE_CHANGE,
        ecs::decode_container_instance_state_change,
    ),
    (SERVICE_ACTION, ecs::decode_service_action),
    (DEPLOYMENT_STATE_CHANGE, ecs::decode_deployment_state_change),
    (TASK_STATE_CHANGE, ecs::decode_task_state_change),
];

/// Registry of typed payload decoders keyed by discriminator
#[derive(Debug, Clone, Copy)]
pub struct VariantDecoders {
    entries: &'static [(&'static str, DecodeFn)],
}

impl Default for VariantDecoders {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantDecoders {
    pub fn new() -> Self {
        Self { entries: DECODERS }
    }

    /// Decoder registered for a discriminator
    pub fn lookup(&self, detail_type: &str) -> Option<DecodeFn> {
        self.entries
            .iter()
            .find(|(name, _)| *name == detail_type)
            .map(|(_, decode)| *decode)
    }

    pub fn supports(&self, detail_type: &str) -> bool {
        self.lookup(detail_type).is_some()
    }

    /// Supported discriminators in registration order
    pub fn detail_types(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    /// Decode `detail` into the variant selected by `detail_type`
    ///
    /// Returns `Ok(None)` for unrecognized discriminators; that is a supported
    /// case, not a failure.
    pub fn decode(&self, detail_type: &str, detail: &Value) -> Result<Option<EventDetail>> {
        match self.lookup(detail_type) {
            Some(decode) => decode(detail).map(Some),
            None => Ok(None),
        }
    }
}
