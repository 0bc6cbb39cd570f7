use crate::workload::{Job, Profile};
use serde::{Deserialize, Serialize};

/// Inbound event type marking the start of the simulation
pub const SIMULATION_BEGINS: &str = "SIMULATION_BEGINS";
/// Inbound event type marking normal termination
pub const SIMULATION_ENDS: &str = "SIMULATION_ENDS";

/// One inbound turn: the simulator's current time plus a batch of events
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    pub now: f64,
    #[serde(default)]
    pub events: Vec<InboundEvent>,
}

/// A single inbound event. Only the type tag is interpreted here; event
/// types this bridge does not recognize are ignored, payload and all.
#[derive(Debug, Deserialize)]
pub struct InboundEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// One outbound turn: echo of the inbound time plus generated events
#[derive(Debug, Serialize)]
pub struct OutboundMessage {
    pub now: f64,
    pub events: Vec<OutboundEvent>,
}

impl OutboundMessage {
    pub fn empty(now: f64) -> Self {
        Self {
            now,
            events: Vec::new(),
        }
    }
}

/// A single outbound event: `{timestamp, type, data}` on the wire
#[derive(Debug, Serialize)]
pub struct OutboundEvent {
    pub timestamp: f64,
    #[serde(flatten)]
    pub payload: EventPayload,
}

/// The event types this bridge produces, tagged exactly as the simulator
/// expects them
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum EventPayload {
    #[serde(rename = "REGISTER_PROFILE")]
    RegisterProfile {
        workload_name: String,
        profile_name: String,
        profile: Profile,
    },

    #[serde(rename = "REGISTER_JOB")]
    RegisterJob { job_id: String, job: Job },

    #[serde(rename = "EXECUTE_JOB")]
    ExecuteJob { job_id: String, alloc: String },

    #[serde(rename = "NOTIFY")]
    Notify {
        #[serde(rename = "type")]
        notify_type: String,
    },
}
