pub mod config;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod scheduler;
pub mod workload;

// Re-export key types
pub use config::Config;
pub use error::{BridgeError, Result};
pub use protocol::{Session, TcpTransport, Transport};
pub use registry::JobRegistry;
pub use scheduler::{PolicyEngine, SchedulingPolicy};
pub use workload::{Job, Profile, Workload, WorkloadGenerator};
