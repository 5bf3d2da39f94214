//! Session Lifecycle — the client-side interview run.
//!
//! `lifecycle` is the synchronous state machine; `driver` runs it on tokio
//! with the countdown and indicator timers; `client` talks to the backend.
//! `handlers` are the server side of session start and submit.

pub mod client;
pub mod driver;
pub mod handlers;
pub mod indicators;
pub mod lifecycle;
pub mod timer;

use std::fmt;

use thiserror::Error;

pub use client::{ClientError, HttpBackend, InterviewBackend, LocalBackend};
pub use driver::{DriverSettings, SessionCommand, SessionDriver, SessionOutcome};
pub use lifecycle::{InterviewSession, SessionSnapshot, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Answering { index: usize },
    Submitting,
    Completed,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::NotStarted => write!(f, "not started"),
            SessionPhase::Answering { index } => write!(f, "answering question {}", index + 1),
            SessionPhase::Submitting => write!(f, "submitting"),
            SessionPhase::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: SessionPhase,
    },
}
