pub mod engine;
pub mod policy;

pub use engine::PolicyEngine;
pub use policy::SchedulingPolicy;
