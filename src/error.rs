use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("malformed inbound message: {0}")]
    ProtocolDecode(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("channel closed by peer")]
    ChannelClosed,

    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
