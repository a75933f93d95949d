#![deny(unsafe_code)]
//! # attune-resilience
//!
//! Turns scorer output into a continuous exit readiness in [0, 1] and a
//! [`Decision`]: respond, respond with a warning, or voluntary silence.
//!
//! Silence is a regular decision value. It is never reported as an error.

pub mod boundary;
pub mod config;
pub mod error;
pub mod monitor;
pub mod types;

pub use boundary::BoundaryGuard;
pub use config::{BandConfig, BoundaryPattern, ResilienceConfig};
pub use error::{ResilienceError, ResilienceResult};
pub use monitor::{ResilienceMemory, ResilienceMonitor, ResilienceSignals};
pub use types::{Band, Decision, ResilienceState, TriggerReason};
