#![deny(unsafe_code)]
//! # attune-energy
//!
//! Energy regulation for the scoring engine.
//!
//! - [`compute_delta`] turns an [`EnvironmentSnapshot`] into the energy-justice
//!   factor δ (always strictly positive)
//! - [`EnergyPolicy`] picks the active [`ProfileKind`], either fixed
//!   ([`BasicPolicy`]) or battery-driven ([`AdaptivePolicy`])
//! - [`EnergyRegulator`] converts truth value and processing cost into an
//!   [`EnergyState`], updating the caller-owned [`EnergyLedger`]
//!
//! The regulator holds no mutable state of its own; the ledger is owned by
//! the engine and mutated under its single-writer lock.

pub mod config;
pub mod delta;
pub mod environment;
pub mod error;
pub mod ledger;
pub mod policy;
pub mod profile;
pub mod regulator;

pub use config::{BatteryFactors, CostModel, EnergyConfig, TimeWindow};
pub use delta::{compute_delta, DeltaReading, DELTA_FLOOR};
pub use environment::EnvironmentSnapshot;
pub use error::{EnergyError, EnergyResult};
pub use ledger::{EnergyLedger, ProfileChange, PROFILE_HISTORY_LIMIT};
pub use policy::{policy_for, AdaptivePolicy, BasicPolicy, EnergyPolicy};
pub use profile::{EnergyProfile, ProfileKind, ProfileTable};
pub use regulator::{EnergyRegulator, EnergyState};
