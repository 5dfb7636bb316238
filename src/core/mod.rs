//! Core logic: gateway operations, prompt construction, and the scenario
//! pipeline.

pub mod gateway;
pub mod prompts;
pub mod scenario;
pub mod schemas;
pub mod strategy;

pub use gateway::{GeminiGateway, GenerationGateway};
pub use scenario::{CancelToken, PipelineConfig, ScenarioObserver, ScenarioPipeline};
