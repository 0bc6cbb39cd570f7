use serde::Serialize;

/// A named execution behavior the simulator understands.
/// Only the delay kind is in scope.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Profile {
    #[serde(rename = "delay")]
    Delay { delay: f64 },
}
