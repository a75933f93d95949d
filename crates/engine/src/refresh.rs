//! Periodic environment refresh.
//!
//! A background task samples the environment from a collaborator-provided
//! [`EnvironmentSource`]. Every `delta_update_interval` it recomputes δ and
//! publishes the reading; every `source_check_interval` it re-selects the
//! energy profile. Evaluations never wait on either.

use std::sync::Arc;

use async_trait::async_trait;
use attune_energy::EnvironmentSnapshot;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::engine::Engine;

pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Samples battery, load and clock. Implemented outside the engine.
#[async_trait]
pub trait EnvironmentSource: Send + Sync {
    async fn sample(&self) -> Result<EnvironmentSnapshot, SourceError>;
}

/// Source that always reports the same snapshot.
#[derive(Debug, Clone)]
pub struct FixedSource(pub EnvironmentSnapshot);

#[async_trait]
impl EnvironmentSource for FixedSource {
    async fn sample(&self) -> Result<EnvironmentSnapshot, SourceError> {
        Ok(self.0.clone())
    }
}

/// Handle to a running refresh loop. Dropping it stops the loop.
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
    trigger: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Request an immediate δ refresh outside the regular schedule.
    pub async fn trigger_refresh(&self) {
        let _ = self.trigger.send(()).await;
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

enum Tick {
    Delta,
    Source,
}

impl Engine {
    /// Start the refresh loop on the current tokio runtime.
    pub fn spawn_refresh(&self, source: Arc<dyn EnvironmentSource>) -> RefreshHandle {
        let engine = self.clone();
        let delta_period = self.config().energy.delta_refresh_period();
        let source_period = self.config().energy.source_check_period();
        let (trigger, mut trigger_rx) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            let mut delta_interval = interval(delta_period);
            let mut source_interval = interval(source_period);
            info!(
                delta_secs = delta_period.as_secs(),
                source_secs = source_period.as_secs(),
                "environment refresh started"
            );

            loop {
                let tick = tokio::select! {
                    _ = delta_interval.tick() => Tick::Delta,
                    _ = source_interval.tick() => Tick::Source,
                    Some(_) = trigger_rx.recv() => Tick::Delta,
                };

                let snapshot = match source.sample().await {
                    Ok(snapshot) => snapshot,
                    Err(e) => {
                        warn!(error = %e, "environment sample failed, keeping last reading");
                        continue;
                    }
                };

                match tick {
                    Tick::Delta => {
                        let reading = engine.refresh_now(&snapshot);
                        debug!(delta = reading.delta, "delta published");
                    }
                    Tick::Source => {
                        let profile = engine.reselect_profile(&snapshot);
                        debug!(%profile, "energy source checked");
                    }
                }
            }
        });

        RefreshHandle { task, trigger }
    }
}
