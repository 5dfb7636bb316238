//! Integration tests for the scenario pipeline.
//!
//! Tests cover:
//! - Publishing all scenes (marked loading) right after decomposition
//! - Strictly sequential image requests in scene order, never overlapping
//! - Per-scene failure isolation and quota vs generic error messages
//! - The fixed pacing delay between scenes (under paused tokio time)
//! - Cooperative cancellation and the in-flight guard
//! - Restart semantics: a new run recomputes scenes from scratch

use async_trait::async_trait;
use marketing_studio::core::scenario::{
    CancelToken, PipelineConfig, ScenarioPipeline, IMAGE_ERROR_MESSAGE, QUOTA_ERROR_MESSAGE,
};
use marketing_studio::core::GenerationGateway;
use marketing_studio::models::{
    BusinessInfo, ContentPlanInfo, ContentStrategy, IdeaGenerationInfo, MarketingIdea,
    MonthlyPlan, Scene, ScriptGenerationInfo, ScriptType,
};
use marketing_studio::{Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

// ========== TEST FIXTURES ==========

/// Outcome of one mocked image request.
#[derive(Debug, Clone)]
enum ImageOutcome {
    Ok,
    RateLimited,
    Failed,
}

/// Gateway double: fixed scene decomposition, scripted image outcomes.
struct MockGateway {
    scene_count: usize,
    outcomes: Vec<ImageOutcome>,
    latency: Duration,
    /// Image prompts in the order they were requested.
    requests: Mutex<Vec<String>>,
    /// Requests currently in flight, to detect overlap.
    in_flight: AtomicUsize,
    /// Highest number of concurrent requests observed.
    max_in_flight: AtomicUsize,
}

impl MockGateway {
    fn new(scene_count: usize, outcomes: Vec<ImageOutcome>) -> Self {
        Self {
            scene_count,
            outcomes,
            latency: Duration::from_millis(200),
            requests: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn scene_text(index: usize) -> Scene {
    Scene {
        sentence: format!("sentence {index}"),
        scene_description: format!("description {index}"),
        image_prompt: format!("prompt {index}"),
        image_url: None,
        image_loading: false,
        image_error: None,
    }
}

#[async_trait]
impl GenerationGateway for MockGateway {
    async fn generate_ideas(
        &self,
        _: &BusinessInfo,
        _: &IdeaGenerationInfo,
    ) -> Result<Vec<MarketingIdea>> {
        unimplemented!()
    }

    async fn regenerate_idea(&self, _: &MarketingIdea, _: &BusinessInfo) -> Result<MarketingIdea> {
        unimplemented!()
    }

    async fn regenerate_idea_with_instruction(
        &self,
        _: &MarketingIdea,
        _: &str,
        _: &BusinessInfo,
    ) -> Result<MarketingIdea> {
        unimplemented!()
    }

    async fn generate_strategy(&self, _: &ContentPlanInfo) -> Result<ContentStrategy> {
        unimplemented!()
    }

    async fn generate_monthly_plan(&self, _: &ContentPlanInfo) -> Result<MonthlyPlan> {
        unimplemented!()
    }

    async fn generate_script(
        &self,
        _: &ScriptGenerationInfo,
        _: &BusinessInfo,
        _: ScriptType,
    ) -> Result<String> {
        unimplemented!()
    }

    async fn generate_script_from_idea(
        &self,
        _: &str,
        _: &BusinessInfo,
        _: ScriptType,
    ) -> Result<String> {
        unimplemented!()
    }

    async fn regenerate_script_with_instruction(
        &self,
        _: &str,
        _: &str,
        _: &BusinessInfo,
        _: &ScriptGenerationInfo,
    ) -> Result<String> {
        unimplemented!()
    }

    async fn regenerate_script_from_idea_with_instruction(
        &self,
        _: &str,
        _: &str,
        _: &BusinessInfo,
        _: &str,
    ) -> Result<String> {
        unimplemented!()
    }

    async fn decompose_script(&self, _: &str) -> Result<Vec<Scene>> {
        Ok((0..self.scene_count).map(scene_text).collect())
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(prompt.to_string());
            requests.len() - 1
        };

        let now_in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight
            .fetch_max(now_in_flight, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.outcomes.get(index).cloned().unwrap_or(ImageOutcome::Ok) {
            ImageOutcome::Ok => Ok(format!("data:image/jpeg;base64,img{index}")),
            ImageOutcome::RateLimited => Err(Error::Provider(
                "429 Too Many Requests: RESOURCE_EXHAUSTED quota exceeded".to_string(),
            )),
            ImageOutcome::Failed => Err(Error::Provider("500: internal error".to_string())),
        }
    }
}

fn pacing(secs: u64) -> PipelineConfig {
    PipelineConfig {
        pacing: Duration::from_secs(secs),
    }
}

/// Observer double that snapshots every published scene list.
#[derive(Default)]
struct Snapshots(Vec<Vec<Scene>>);

impl Snapshots {
    fn record(&mut self) -> impl FnMut(&[Scene]) + '_ {
        |scenes| self.0.push(scenes.to_vec())
    }
}

// ========== TESTS ==========

#[tokio::test(start_paused = true)]
async fn all_scenes_published_loading_before_any_image_resolves() {
    let pipeline = ScenarioPipeline::with_config(
        MockGateway::new(4, vec![]),
        pacing(5),
    );
    let mut snapshots = Snapshots::default();
    let cancel = CancelToken::new();

    pipeline
        .run("script", &mut snapshots.record(), &cancel)
        .await
        .unwrap();

    let first = &snapshots.0[0];
    assert_eq!(first.len(), 4);
    assert!(first.iter().all(|s| s.image_loading));
    assert!(first.iter().all(|s| s.image_url.is_none() && s.image_error.is_none()));
}

#[tokio::test(start_paused = true)]
async fn image_requests_are_sequential_and_in_scene_order() {
    let pipeline = ScenarioPipeline::with_config(MockGateway::new(5, vec![]), pacing(5));
    let mut snapshots = Snapshots::default();
    let cancel = CancelToken::new();

    pipeline
        .run("script", &mut snapshots.record(), &cancel)
        .await
        .unwrap();

    assert_eq!(
        pipeline_requests(&pipeline),
        vec!["prompt 0", "prompt 1", "prompt 2", "prompt 3", "prompt 4"]
    );
    assert_eq!(pipeline_max_in_flight(&pipeline), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_scene_is_isolated_and_classified() {
    // Scene 2 hits a quota error, scene 4 a generic one; 1, 3, 5 succeed.
    let outcomes = vec![
        ImageOutcome::Ok,
        ImageOutcome::RateLimited,
        ImageOutcome::Ok,
        ImageOutcome::Failed,
        ImageOutcome::Ok,
    ];
    let pipeline = ScenarioPipeline::with_config(MockGateway::new(5, outcomes), pacing(5));
    let mut snapshots = Snapshots::default();
    let cancel = CancelToken::new();

    let scenes = pipeline
        .run("script", &mut snapshots.record(), &cancel)
        .await
        .unwrap();

    assert_eq!(scenes.len(), 5);
    for scene in &scenes {
        // Terminal state is exactly one of image or error, never both.
        assert!(!scene.image_loading);
        assert!(scene.image_url.is_some() ^ scene.image_error.is_some());
    }
    assert!(scenes[0].image_url.is_some());
    assert_eq!(scenes[1].image_error.as_deref(), Some(QUOTA_ERROR_MESSAGE));
    assert!(scenes[2].image_url.is_some());
    assert_eq!(scenes[3].image_error.as_deref(), Some(IMAGE_ERROR_MESSAGE));
    assert!(scenes[4].image_url.is_some());

    // A failure does not stop the batch: all five images were requested.
    assert_eq!(pipeline_requests(&pipeline).len(), 5);
}

#[tokio::test(start_paused = true)]
async fn pacing_delay_applies_between_scenes_but_not_after_last() {
    let pipeline = ScenarioPipeline::with_config(MockGateway::new(3, vec![]), pacing(5));
    let mut snapshots = Snapshots::default();
    let cancel = CancelToken::new();

    let start = tokio::time::Instant::now();
    pipeline
        .run("script", &mut snapshots.record(), &cancel)
        .await
        .unwrap();
    let elapsed = start.elapsed();

    // Three requests of 200ms each plus exactly two 5s pacing delays.
    let expected = Duration::from_millis(3 * 200) + Duration::from_secs(10);
    assert!(
        elapsed >= expected,
        "elapsed {elapsed:?} shorter than {expected:?}"
    );
    assert!(
        elapsed < expected + Duration::from_secs(5),
        "a pacing delay ran after the last scene: {elapsed:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn pacing_applies_even_after_a_failed_scene() {
    let outcomes = vec![ImageOutcome::Failed, ImageOutcome::Ok];
    let pipeline = ScenarioPipeline::with_config(MockGateway::new(2, outcomes), pacing(5));
    let mut snapshots = Snapshots::default();
    let cancel = CancelToken::new();

    let start = tokio::time::Instant::now();
    pipeline
        .run("script", &mut snapshots.record(), &cancel)
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn second_run_while_in_flight_is_rejected() {
    let pipeline = ScenarioPipeline::with_config(MockGateway::new(2, vec![]), pacing(5));
    let cancel = CancelToken::new();

    let mut first_observer = |_: &[Scene]| {};
    let mut second_observer = |_: &[Scene]| {};
    let (first, second) = tokio::join!(
        pipeline.run("script", &mut first_observer, &cancel),
        pipeline.run("script", &mut second_observer, &cancel),
    );

    assert!(first.is_ok());
    assert!(matches!(second, Err(Error::PipelineBusy)));

    // Once the run finished, the pipeline accepts work again.
    let mut observer = |_: &[Scene]| {};
    assert!(pipeline.run("script", &mut observer, &cancel).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn cancellation_stops_before_the_next_image_request() {
    let pipeline = ScenarioPipeline::with_config(MockGateway::new(3, vec![]), pacing(5));
    let cancel = CancelToken::new();

    let mut published: Vec<Vec<Scene>> = Vec::new();
    let token = cancel.clone();
    let mut observer = move |scenes: &[Scene]| {
        // Cancel as soon as the first scene resolves.
        if scenes.iter().filter(|s| s.image_url.is_some()).count() == 1 {
            token.cancel();
        }
        published.push(scenes.to_vec());
    };

    let result = pipeline.run("script", &mut observer, &cancel).await;
    assert!(matches!(result, Err(Error::Cancelled)));

    // Only the first image was ever requested.
    assert_eq!(pipeline_requests(&pipeline).len(), 1);
}

#[tokio::test(start_paused = true)]
async fn restart_recomputes_scenes_and_discards_prior_image_state() {
    let pipeline = ScenarioPipeline::with_config(MockGateway::new(2, vec![]), pacing(1));
    let cancel = CancelToken::new();

    let mut first_snapshots = Snapshots::default();
    let first = pipeline
        .run("script", &mut first_snapshots.record(), &cancel)
        .await
        .unwrap();
    assert!(first.iter().all(|s| s.image_url.is_some()));

    // The second run starts from a decomposition, not from the old results.
    let mut second_snapshots = Snapshots::default();
    pipeline
        .run("script", &mut second_snapshots.record(), &cancel)
        .await
        .unwrap();
    let fresh = &second_snapshots.0[0];
    assert!(fresh.iter().all(|s| s.image_loading && s.image_url.is_none()));
}

// The mock sits behind the pipeline, so expose its inspection helpers through
// small free functions to keep the tests readable.
fn pipeline_requests(pipeline: &ScenarioPipeline<MockGateway>) -> Vec<String> {
    pipeline.gateway().requests()
}

fn pipeline_max_in_flight(pipeline: &ScenarioPipeline<MockGateway>) -> usize {
    pipeline.gateway().max_in_flight.load(Ordering::SeqCst)
}
