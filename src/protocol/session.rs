use super::messages::{
    EventPayload, InboundMessage, OutboundEvent, OutboundMessage, SIMULATION_BEGINS,
    SIMULATION_ENDS,
};
use super::transport::Transport;
use crate::error::Result;
use crate::registry::JobRegistry;
use crate::scheduler::PolicyEngine;
use crate::workload::{Profile, Workload};
use log::{debug, info};

/// Placeholder resource set sent with EXECUTE_JOB. Placement is the
/// simulator's job; this token is passed through opaque, never computed.
const PLACEHOLDER_ALLOC: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for SIMULATION_BEGINS
    AwaitingBegin,
    /// Profile registered; job registration (and execution) in progress
    Registering,
    /// Every job registered; only execution decisions remain
    Live,
    /// SIMULATION_ENDS seen and the final empty reply sent
    Terminated,
}

/// The result of processing one inbound message
pub struct Turn {
    pub reply: OutboundMessage,
    pub terminate: bool,
}

/// Drives the registration/execution state machine over a request-reply
/// channel: one inbound message, one reply, in strict alternation.
pub struct Session {
    registry: JobRegistry,
    engine: PolicyEngine,

    workload_name: String,
    profile_name: String,
    profile: Profile,

    state: SessionState,
    profile_registered: bool,
    registration_notified: bool,
}

impl Session {
    pub fn new(workload: Workload, engine: PolicyEngine) -> Self {
        Self {
            registry: JobRegistry::new(workload.jobs),
            engine,
            workload_name: workload.name,
            profile_name: workload.profile_name,
            profile: workload.profile,
            state: SessionState::AwaitingBegin,
            profile_registered: false,
            registration_notified: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// Run the message loop until SIMULATION_ENDS or a channel failure.
    /// The transport is closed exactly once on every exit path.
    pub fn run<T: Transport>(&mut self, transport: &mut T) -> Result<()> {
        let result = self.message_loop(transport);
        let closed = transport.close();
        result.and(closed)
    }

    fn message_loop<T: Transport>(&mut self, transport: &mut T) -> Result<()> {
        loop {
            let raw = transport.recv()?;
            let message: InboundMessage = serde_json::from_str(&raw)?;

            let turn = self.handle_message(&message);
            let reply = serde_json::to_string(&turn.reply)?;
            transport.send(&reply)?;

            if turn.terminate {
                info!("simulation ended at t={:.2}", message.now);
                return Ok(());
            }
        }
    }

    /// Process one inbound message and build the reply for it.
    /// Every message gets exactly one reply, empty events included.
    pub fn handle_message(&mut self, message: &InboundMessage) -> Turn {
        let now = message.now;
        let mut events = Vec::new();
        let mut simulation_ends = false;

        for event in &message.events {
            debug!("[{:.2}] event received: {}", now, event.event_type);
            match event.event_type.as_str() {
                SIMULATION_BEGINS => {
                    if !self.profile_registered {
                        info!("[{:.2}] registering profile '{}'", now, self.profile_name);
                        events.push(OutboundEvent {
                            timestamp: now,
                            payload: EventPayload::RegisterProfile {
                                workload_name: self.workload_name.clone(),
                                profile_name: self.profile_name.clone(),
                                profile: self.profile.clone(),
                            },
                        });
                        self.profile_registered = true;
                        self.state = SessionState::Registering;
                    }
                }
                SIMULATION_ENDS => {
                    simulation_ends = true;
                }
                other => {
                    // Not ours to handle
                    debug!("[{:.2}] ignoring event type {}", now, other);
                }
            }
        }

        if simulation_ends {
            self.state = SessionState::Terminated;
            return Turn {
                reply: OutboundMessage::empty(now),
                terminate: true,
            };
        }

        if self.profile_registered {
            self.register_pending_jobs(now, &mut events);
            self.execute_selected_jobs(now, &mut events);
            self.notify_if_registration_finished(now, &mut events);
        }

        Turn {
            reply: OutboundMessage { now, events },
            terminate: false,
        }
    }

    /// Emit one REGISTER_JOB per job not yet registered, in job list order
    fn register_pending_jobs(&mut self, now: f64, events: &mut Vec<OutboundEvent>) {
        let pending: Vec<_> = self
            .registry
            .jobs()
            .iter()
            .filter(|job| !self.registry.is_registered(&job.id))
            .cloned()
            .collect();

        for job in pending {
            self.registry.mark_registered(&job.id);
            debug!("[{:.2}] registering job {}", now, job.id);
            events.push(OutboundEvent {
                timestamp: now,
                payload: EventPayload::RegisterJob {
                    job_id: job.id.clone(),
                    job,
                },
            });
        }
    }

    /// Consult the policy engine and emit EXECUTE_JOB in policy order.
    /// Jobs the policy returns that are unregistered or already executed
    /// are skipped; this double-check keeps the sets consistent even for a
    /// policy that over-returns.
    fn execute_selected_jobs(&mut self, now: f64, events: &mut Vec<OutboundEvent>) {
        let selected: Vec<String> = self
            .engine
            .select(self.registry.jobs(), self.registry.executed(), now)
            .into_iter()
            .map(|job| job.id.clone())
            .collect();

        for job_id in selected {
            if !self.registry.is_registered(&job_id) || self.registry.is_executed(&job_id) {
                continue;
            }
            self.registry.mark_executed(&job_id);
            info!("[{:.2}] executing job {}", now, job_id);
            events.push(OutboundEvent {
                timestamp: now,
                payload: EventPayload::ExecuteJob {
                    job_id,
                    alloc: PLACEHOLDER_ALLOC.to_string(),
                },
            });
        }
    }

    /// Emit the registration_finished notification exactly once, on the
    /// first turn where every job is registered
    fn notify_if_registration_finished(&mut self, now: f64, events: &mut Vec<OutboundEvent>) {
        if self.registration_notified || !self.registry.all_registered() {
            return;
        }
        info!("[{:.2}] all {} jobs registered", now, self.registry.num_jobs());
        events.push(OutboundEvent {
            timestamp: now,
            payload: EventPayload::Notify {
                notify_type: "registration_finished".to_string(),
            },
        });
        self.registration_notified = true;
        if self.state == SessionState::Registering {
            self.state = SessionState::Live;
        }
    }
}
