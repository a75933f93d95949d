#![deny(unsafe_code)]
//! # attune-engine
//!
//! Facade over the scoring and regulation crates.
//!
//! An [`Engine`] owns the immutable knowledge bases, the scorers, and the
//! single-writer [`EngineState`]. Each evaluation runs
//!
//! 1. profile selection and processing budget from the environment
//! 2. intent and logic scoring (lock-free)
//! 3. energy accounting and resilience assessment (under the state lock)
//!
//! and returns an [`EvaluationReport`] whose [`Decision`] may be
//! voluntary silence. Silence is a result, not an error.
//!
//! ```no_run
//! use attune_engine::{Engine, EngineConfig, EnvironmentSnapshot};
//!
//! let engine = Engine::from_config(EngineConfig::default())?;
//! let report = engine.evaluate_text("Why is truth important?", &EnvironmentSnapshot::default());
//! println!("{:?}", report.decision);
//! # Ok::<(), attune_engine::EngineError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod multimodal;
pub mod refresh;
pub mod report;
pub mod state;
pub mod telemetry;

pub use attune_energy::{EnvironmentSnapshot, ProfileKind};
pub use attune_resilience::{Band, Decision};
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use multimodal::{
    AudioFeatures, FusionConfig, ModalityFusion, ModalityReport, MultimodalInput, SensorRange,
    VisualFeatures,
};
pub use refresh::{EnvironmentSource, FixedSource, RefreshHandle, SourceError};
pub use report::EvaluationReport;
pub use state::{EngineState, StateSnapshot};
pub use telemetry::{init_tracing, LoggingConfig};
