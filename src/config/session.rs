use serde::Deserialize;

/// Where the bridge listens for its single simulator peer
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Address to bind the request-reply channel to
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:28000".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}
