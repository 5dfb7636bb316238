//! Scenario pipeline.
//!
//! Turns a script into an ordered, fully-populated scene list: one
//! decomposition call, then one image request per scene, strictly in order.
//! A failed scene keeps its slot with an error message instead of aborting
//! the batch, and a fixed pacing delay separates successive image requests so
//! a whole run stays under the provider's rate limit.

use crate::core::gateway::GenerationGateway;
use crate::models::config::ScenarioConfig;
use crate::models::Scene;
use crate::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// User-facing message for rate-limit/quota image failures.
pub const QUOTA_ERROR_MESSAGE: &str =
    "تم تجاوز حد الطلبات. يرجى الانتظار أو التحقق من خطة الفوترة الخاصة بك.";

/// User-facing message for any other image failure.
pub const IMAGE_ERROR_MESSAGE: &str = "فشل تحميل الصورة.";

/// Receives the scene list after every single update so partial progress is
/// visible while the run is still going.
pub trait ScenarioObserver {
    fn scenes_updated(&mut self, scenes: &[Scene]);
}

impl<F> ScenarioObserver for F
where
    F: FnMut(&[Scene]),
{
    fn scenes_updated(&mut self, scenes: &[Scene]) {
        self(scenes)
    }
}

/// Cooperative cancellation handle, checked before each image request.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Pipeline tuning.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Delay between scene i and scene i+1, never applied after the last.
    pub pacing: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pacing: Duration::from_secs(ScenarioConfig::default().pacing_secs),
        }
    }
}

impl From<&ScenarioConfig> for PipelineConfig {
    fn from(config: &ScenarioConfig) -> Self {
        Self {
            pacing: Duration::from_secs(config.pacing_secs),
        }
    }
}

/// Clears the in-flight flag when a run ends, on every exit path.
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Sequential scene/image pipeline over a [`GenerationGateway`].
pub struct ScenarioPipeline<G> {
    gateway: G,
    config: PipelineConfig,
    running: AtomicBool,
}

impl<G: GenerationGateway> ScenarioPipeline<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_config(gateway, PipelineConfig::default())
    }

    pub fn with_config(gateway: G, config: PipelineConfig) -> Self {
        Self {
            gateway,
            config,
            running: AtomicBool::new(false),
        }
    }

    /// Access the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Run the pipeline once.
    ///
    /// Decomposes the script, publishes all scenes marked loading, then
    /// resolves images one scene at a time in index order. Per-scene failures
    /// are terminal for that scene only. If decomposition itself fails,
    /// nothing is published and the error is returned.
    ///
    /// A second call while one is in flight fails with
    /// [`Error::PipelineBusy`]; a run cannot be preempted, only cancelled
    /// through the token.
    pub async fn run(
        &self,
        script: &str,
        observer: &mut dyn ScenarioObserver,
        cancel: &CancelToken,
    ) -> Result<Vec<Scene>> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(Error::PipelineBusy);
        }
        let _guard = RunGuard(&self.running);

        let mut scenes = self.gateway.decompose_script(script).await?;
        for scene in &mut scenes {
            scene.mark_loading();
        }
        observer.scenes_updated(&scenes);
        tracing::info!("Scenario decomposed into {} scenes", scenes.len());

        let count = scenes.len();
        for index in 0..count {
            if cancel.is_cancelled() {
                for scene in &mut scenes[index..] {
                    scene.image_loading = false;
                }
                observer.scenes_updated(&scenes);
                return Err(Error::Cancelled);
            }

            match self.gateway.generate_image(&scenes[index].image_prompt).await {
                Ok(image_url) => {
                    scenes[index].resolve(image_url);
                    tracing::debug!("Scene {} image resolved", index + 1);
                }
                Err(e) => {
                    tracing::warn!("Image generation failed for scene {}: {}", index + 1, e);
                    let message = if e.is_rate_limited() {
                        QUOTA_ERROR_MESSAGE
                    } else {
                        IMAGE_ERROR_MESSAGE
                    };
                    scenes[index].fail(message.to_string());
                }
            }
            observer.scenes_updated(&scenes);

            // Pace even after a failure; the limit is shared across requests.
            if index + 1 < count {
                tokio::time::sleep(self.config.pacing).await;
            }
        }

        Ok(scenes)
    }
}
