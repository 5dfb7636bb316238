//! Typed application state on top of the field store.
//!
//! Every entity is loaded once at startup and mirrored back on change. The
//! in-memory value is the source of truth while the process runs; the store
//! is a side channel for reload continuity.

use crate::models::{
    BusinessInfo, ContentPlanInfo, ContentStrategy, IdeaGenerationInfo, MarketingIdea,
    MonthlyPlan, Scene, ScriptGenerationInfo, ScriptType,
};
use crate::store::{keys, FieldStore};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// All persisted form and result state.
pub struct AppState<S: FieldStore> {
    store: S,
    pub business: BusinessInfo,
    pub content_plan: ContentPlanInfo,
    pub idea_gen: IdeaGenerationInfo,
    pub script_info: ScriptGenerationInfo,
    pub script_type: ScriptType,
    pub ideas: Option<Vec<MarketingIdea>>,
    pub strategy: Option<ContentStrategy>,
    pub monthly_plan: Option<MonthlyPlan>,
    pub script: Option<String>,
    pub scenario: Option<Vec<Scene>>,
}

fn read_json<S: FieldStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = store.load(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring malformed stored entry '{}': {}", key, e);
            None
        }
    }
}

impl<S: FieldStore> AppState<S> {
    /// Load every entity from the store, falling back to defaults for absent
    /// or malformed entries.
    pub fn load(store: S) -> Self {
        let business: BusinessInfo =
            read_json(&store, keys::BUSINESS_INFO).unwrap_or_default();

        // First run of the plan questionnaire: seed it from an already
        // saved business profile so the user does not retype the overlap.
        let content_plan = match read_json::<S, ContentPlanInfo>(&store, keys::CONTENT_PLAN_INFO)
        {
            Some(plan) => plan,
            None => {
                let mut plan = ContentPlanInfo::default();
                if store.load(keys::BUSINESS_INFO).is_some() {
                    plan.store_name = business.name.clone();
                    plan.target_audience = business.audience.clone();
                    plan.focus_products = business.products.clone();
                }
                plan
            }
        };

        let mut idea_gen: IdeaGenerationInfo =
            read_json(&store, keys::IDEA_GEN_INFO).unwrap_or_default();
        idea_gen.normalize_marketing_type();

        let script_info: ScriptGenerationInfo =
            read_json(&store, keys::SCRIPT_INFO).unwrap_or_default();

        let script_type = store
            .load(keys::SCRIPT_TYPE)
            .map(|raw| ScriptType::parse_or_default(&raw))
            .unwrap_or_default();

        let ideas = read_json(&store, keys::MARKETING_IDEAS);
        let strategy = read_json(&store, keys::STRATEGY);
        let monthly_plan = read_json(&store, keys::MONTHLY_PLAN);
        let script = store.load(keys::SCRIPT);
        let scenario = read_json(&store, keys::SCENARIO);

        Self {
            store,
            business,
            content_plan,
            idea_gen,
            script_info,
            script_type,
            ideas,
            strategy,
            monthly_plan,
            script,
            scenario,
        }
    }

    fn save_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.save(key, &raw)
    }

    fn save_optional<T: Serialize>(&mut self, key: &str, value: Option<&T>) -> Result<()> {
        match value {
            Some(value) => {
                let raw = serde_json::to_string(value)?;
                self.store.save(key, &raw)
            }
            None => self.store.remove(key),
        }
    }

    /// Update the business profile.
    pub fn set_business(&mut self, business: BusinessInfo) -> Result<()> {
        self.business = business;
        let value = self.business.clone();
        self.save_json(keys::BUSINESS_INFO, &value)
    }

    /// Update the content-plan questionnaire, mirroring the shared fields
    /// into the business profile (one direction only).
    pub fn set_content_plan(&mut self, plan: ContentPlanInfo) -> Result<()> {
        self.business.name = plan.store_name.clone();
        self.business.audience = plan.target_audience.clone();
        self.business.products = plan.focus_products.clone();
        self.content_plan = plan;

        let business = self.business.clone();
        let plan = self.content_plan.clone();
        self.save_json(keys::BUSINESS_INFO, &business)?;
        self.save_json(keys::CONTENT_PLAN_INFO, &plan)
    }

    pub fn set_idea_gen(&mut self, info: IdeaGenerationInfo) -> Result<()> {
        self.idea_gen = info;
        self.idea_gen.normalize_marketing_type();
        let value = self.idea_gen.clone();
        self.save_json(keys::IDEA_GEN_INFO, &value)
    }

    pub fn set_script_info(&mut self, info: ScriptGenerationInfo) -> Result<()> {
        self.script_info = info;
        let value = self.script_info.clone();
        self.save_json(keys::SCRIPT_INFO, &value)
    }

    pub fn set_script_type(&mut self, script_type: ScriptType) -> Result<()> {
        self.script_type = script_type;
        self.store.save(keys::SCRIPT_TYPE, script_type.as_str())
    }

    pub fn set_ideas(&mut self, ideas: Option<Vec<MarketingIdea>>) -> Result<()> {
        self.ideas = ideas;
        let value = self.ideas.clone();
        self.save_optional(keys::MARKETING_IDEAS, value.as_ref())
    }

    pub fn set_strategy(&mut self, strategy: Option<ContentStrategy>) -> Result<()> {
        self.strategy = strategy;
        let value = self.strategy.clone();
        self.save_optional(keys::STRATEGY, value.as_ref())
    }

    pub fn set_monthly_plan(&mut self, plan: Option<MonthlyPlan>) -> Result<()> {
        self.monthly_plan = plan;
        let value = self.monthly_plan.clone();
        self.save_optional(keys::MONTHLY_PLAN, value.as_ref())
    }

    /// The script is stored as raw text, not JSON.
    pub fn set_script(&mut self, script: Option<String>) -> Result<()> {
        self.script = script;
        match &self.script {
            Some(script) => {
                let value = script.clone();
                self.store.save(keys::SCRIPT, &value)
            }
            None => self.store.remove(keys::SCRIPT),
        }
    }

    pub fn set_scenario(&mut self, scenario: Option<Vec<Scene>>) -> Result<()> {
        self.scenario = scenario;
        let value = self.scenario.clone();
        self.save_optional(keys::SCENARIO, value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonFileStore;

    fn temp_state(dir: &tempfile::TempDir) -> AppState<JsonFileStore> {
        AppState::load(JsonFileStore::open(&dir.path().join("state.json")))
    }

    #[test]
    fn test_content_plan_mirrors_into_business() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = temp_state(&dir);

        let plan = ContentPlanInfo {
            store_name: "أزياء ريم".to_string(),
            target_audience: "الإناث 25-35".to_string(),
            focus_products: "فساتين".to_string(),
            ..Default::default()
        };
        state.set_content_plan(plan).unwrap();

        assert_eq!(state.business.name, "أزياء ريم");
        assert_eq!(state.business.audience, "الإناث 25-35");
        assert_eq!(state.business.products, "فساتين");

        // Mirror is one-directional: business edits leave the plan alone.
        let mut business = state.business.clone();
        business.name = "اسم جديد".to_string();
        state.set_business(business).unwrap();
        assert_eq!(state.content_plan.store_name, "أزياء ريم");
    }

    #[test]
    fn test_plan_seeded_from_business_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = temp_state(&dir);
        state
            .set_business(BusinessInfo {
                name: "متجري".to_string(),
                audience: "شباب".to_string(),
                products: "قمصان".to_string(),
                ..Default::default()
            })
            .unwrap();
        drop(state);

        let state = temp_state(&dir);
        assert_eq!(state.content_plan.store_name, "متجري");
        assert_eq!(state.content_plan.target_audience, "شباب");
        assert_eq!(state.content_plan.focus_products, "قمصان");
    }

    #[test]
    fn test_clearing_optional_entity_removes_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = temp_state(&dir);
        state.set_script(Some("سكربت".to_string())).unwrap();
        state.set_script(None).unwrap();
        drop(state);

        let state = temp_state(&dir);
        assert!(state.script.is_none());
    }

    #[test]
    fn test_unknown_marketing_type_reset_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut store = JsonFileStore::open(&path);
        crate::store::FieldStore::save(
            &mut store,
            keys::IDEA_GEN_INFO,
            r#"{"productDetails":"p","event":"e","marketingType":"نوع ملغى","hasBudget":"no"}"#,
        )
        .unwrap();

        let state = AppState::load(JsonFileStore::open(&path));
        assert_eq!(
            state.idea_gen.marketing_type,
            crate::models::business::MARKETING_TYPES[0].name
        );
        assert_eq!(state.idea_gen.product_details, "p");
    }
}
