//! Generation gateway.
//!
//! Translates typed application inputs into provider requests and parses the
//! typed results back. Everything provider-specific (auth, model selection,
//! response schemas) stays behind this boundary. The gateway never retries;
//! retrying is a user-initiated action at the command layer.

use crate::core::{prompts, schemas};
use crate::models::config::Config;
use crate::models::{
    BusinessInfo, ContentPlanInfo, ContentStrategy, IdeaGenerationInfo, MarketingIdea,
    MonthlyPlan, Scene, ScriptGenerationInfo, ScriptType,
};
use crate::services::gemini::GeminiClient;
use crate::services::imagen::ImagenClient;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Typed operations against the generative backends.
///
/// Implemented for real by [`GeminiGateway`]; tests substitute their own
/// implementations.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Generate a batch of six marketing ideas.
    async fn generate_ideas(
        &self,
        business: &BusinessInfo,
        info: &IdeaGenerationInfo,
    ) -> Result<Vec<MarketingIdea>>;

    /// Elaborate a user-edited idea into a polished replacement.
    async fn regenerate_idea(
        &self,
        idea: &MarketingIdea,
        business: &BusinessInfo,
    ) -> Result<MarketingIdea>;

    /// Apply a free-text edit instruction to one idea.
    async fn regenerate_idea_with_instruction(
        &self,
        idea: &MarketingIdea,
        instruction: &str,
        business: &BusinessInfo,
    ) -> Result<MarketingIdea>;

    /// Generate a full content strategy.
    async fn generate_strategy(&self, info: &ContentPlanInfo) -> Result<ContentStrategy>;

    /// Generate a four-week monthly plan.
    async fn generate_monthly_plan(&self, info: &ContentPlanInfo) -> Result<MonthlyPlan>;

    /// Write a script from the detailed story questionnaire.
    async fn generate_script(
        &self,
        script_info: &ScriptGenerationInfo,
        business: &BusinessInfo,
        script_type: ScriptType,
    ) -> Result<String>;

    /// Write a script from freeform pasted idea text.
    async fn generate_script_from_idea(
        &self,
        idea: &str,
        business: &BusinessInfo,
        script_type: ScriptType,
    ) -> Result<String>;

    /// Rewrite a detailed-mode script under an edit instruction.
    async fn regenerate_script_with_instruction(
        &self,
        original_script: &str,
        instruction: &str,
        business: &BusinessInfo,
        script_info: &ScriptGenerationInfo,
    ) -> Result<String>;

    /// Rewrite a quick-mode script under an edit instruction.
    async fn regenerate_script_from_idea_with_instruction(
        &self,
        original_script: &str,
        instruction: &str,
        business: &BusinessInfo,
        original_idea: &str,
    ) -> Result<String>;

    /// Decompose a script into ordered scenes (text fields only, no images).
    async fn decompose_script(&self, script: &str) -> Result<Vec<Scene>>;

    /// Generate one image and return it as a data URL.
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdeasEnvelope {
    marketing_ideas: Vec<MarketingIdea>,
}

#[derive(Debug, Deserialize)]
struct ScenesEnvelope {
    scenes: Vec<SceneText>,
}

/// Scene as decomposed by the provider, before any image work.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneText {
    sentence: String,
    scene_description: String,
    image_prompt: String,
}

impl From<SceneText> for Scene {
    fn from(text: SceneText) -> Self {
        Scene {
            sentence: text.sentence,
            scene_description: text.scene_description,
            image_prompt: text.image_prompt,
            image_url: None,
            image_loading: false,
            image_error: None,
        }
    }
}

/// Decode provider JSON into a typed value. This is the hard validation
/// boundary: a mismatch is surfaced as `InvalidResponse`, never passed on.
fn decode<T: DeserializeOwned>(text: &str, what: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        tracing::warn!("Failed to decode {} from provider response: {}", what, e);
        tracing::debug!("Raw response: {}", text);
        Error::InvalidResponse(what.to_string())
    })
}

/// Gateway backed by the Gemini text API and the Imagen image API.
pub struct GeminiGateway {
    text: GeminiClient,
    image: ImagenClient,
}

impl GeminiGateway {
    /// Build both provider clients from the application configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.gemini.api_key.clone().unwrap_or_default();
        Ok(Self {
            text: GeminiClient::new(config.gemini.clone())?,
            image: ImagenClient::new(config.imagen.clone(), &api_key, config.gemini.timeout)?,
        })
    }
}

#[async_trait]
impl GenerationGateway for GeminiGateway {
    async fn generate_ideas(
        &self,
        business: &BusinessInfo,
        info: &IdeaGenerationInfo,
    ) -> Result<Vec<MarketingIdea>> {
        let prompt = prompts::ideas(business, info);
        let text = self.text.generate_json(&prompt, schemas::ideas()).await?;
        let envelope: IdeasEnvelope = decode(&text, "marketing ideas")?;
        Ok(envelope.marketing_ideas)
    }

    async fn regenerate_idea(
        &self,
        idea: &MarketingIdea,
        business: &BusinessInfo,
    ) -> Result<MarketingIdea> {
        let prompt = prompts::regenerate_idea(idea, business);
        let text = self
            .text
            .generate_json(&prompt, schemas::single_idea())
            .await?;
        decode(&text, "regenerated idea")
    }

    async fn regenerate_idea_with_instruction(
        &self,
        idea: &MarketingIdea,
        instruction: &str,
        business: &BusinessInfo,
    ) -> Result<MarketingIdea> {
        let prompt = prompts::idea_with_instruction(idea, instruction, business);
        let text = self
            .text
            .generate_json(&prompt, schemas::single_idea())
            .await?;
        decode(&text, "regenerated idea")
    }

    async fn generate_strategy(&self, info: &ContentPlanInfo) -> Result<ContentStrategy> {
        let prompt = prompts::strategy(info);
        let text = self
            .text
            .generate_json(&prompt, schemas::strategy())
            .await?;
        decode(&text, "content strategy")
    }

    async fn generate_monthly_plan(&self, info: &ContentPlanInfo) -> Result<MonthlyPlan> {
        let prompt = prompts::monthly_plan(info);
        let text = self
            .text
            .generate_json(&prompt, schemas::monthly_plan())
            .await?;
        decode(&text, "monthly plan")
    }

    async fn generate_script(
        &self,
        script_info: &ScriptGenerationInfo,
        business: &BusinessInfo,
        script_type: ScriptType,
    ) -> Result<String> {
        let prompt = prompts::script(script_info, business, script_type);
        self.text.generate(&prompt).await
    }

    async fn generate_script_from_idea(
        &self,
        idea: &str,
        business: &BusinessInfo,
        script_type: ScriptType,
    ) -> Result<String> {
        let prompt = prompts::script_from_idea(idea, business, script_type);
        self.text.generate(&prompt).await
    }

    async fn regenerate_script_with_instruction(
        &self,
        original_script: &str,
        instruction: &str,
        business: &BusinessInfo,
        script_info: &ScriptGenerationInfo,
    ) -> Result<String> {
        let prompt =
            prompts::script_with_instruction(original_script, instruction, business, script_info);
        self.text.generate(&prompt).await
    }

    async fn regenerate_script_from_idea_with_instruction(
        &self,
        original_script: &str,
        instruction: &str,
        business: &BusinessInfo,
        original_idea: &str,
    ) -> Result<String> {
        let prompt = prompts::script_from_idea_with_instruction(
            original_script,
            instruction,
            business,
            original_idea,
        );
        self.text.generate(&prompt).await
    }

    async fn decompose_script(&self, script: &str) -> Result<Vec<Scene>> {
        let prompt = prompts::scenario(script);
        let text = self
            .text
            .generate_json(&prompt, schemas::scenario())
            .await?;
        let envelope: ScenesEnvelope = decode(&text, "scenario scenes")?;
        Ok(envelope.scenes.into_iter().map(Scene::from).collect())
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        let image = self.image.generate(prompt).await?;
        Ok(image.to_data_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ideas_envelope() {
        let body = r#"{
            "marketingIdeas": [
                {"title": "t", "concept": "c", "hook": "h", "visuals": "v", "cta": "a"}
            ]
        }"#;
        let envelope: IdeasEnvelope = decode(body, "marketing ideas").unwrap();
        assert_eq!(envelope.marketing_ideas.len(), 1);
        assert_eq!(envelope.marketing_ideas[0].title, "t");
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        let err = decode::<IdeasEnvelope>("not json at all", "marketing ideas").unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));

        // Valid JSON with the wrong shape is also a decode failure.
        let err = decode::<IdeasEnvelope>(r#"{"ideas": []}"#, "marketing ideas").unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_decode_scenes_preserves_order() {
        let body = r#"{
            "scenes": [
                {"sentence": "one", "sceneDescription": "d1", "imagePrompt": "p1"},
                {"sentence": "two", "sceneDescription": "d2", "imagePrompt": "p2"},
                {"sentence": "three", "sceneDescription": "d3", "imagePrompt": "p3"}
            ]
        }"#;
        let envelope: ScenesEnvelope = decode(body, "scenario scenes").unwrap();
        let scenes: Vec<Scene> = envelope.scenes.into_iter().map(Scene::from).collect();
        assert_eq!(scenes.len(), 3);
        assert_eq!(scenes[0].sentence, "one");
        assert_eq!(scenes[2].sentence, "three");
        assert!(scenes.iter().all(|s| !s.image_loading
            && s.image_url.is_none()
            && s.image_error.is_none()));
    }

    #[test]
    fn test_decode_strategy() {
        let body = r#"{
            "vision": "v",
            "objectives": ["o1", "o2"],
            "targetAudience": "t",
            "coreMessages": ["m"],
            "channels": ["Instagram"],
            "style": {"tone": "warm", "visual": "bright"},
            "contentPlanOverview": "overview",
            "metrics": ["followers"]
        }"#;
        let strategy: ContentStrategy = decode(body, "content strategy").unwrap();
        assert_eq!(strategy.objectives.len(), 2);
        assert_eq!(strategy.style.tone, "warm");
    }
}
