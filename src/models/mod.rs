//! Data models for the marketing studio.

pub mod business;
pub mod config;
pub mod content;
pub mod plan;
pub mod scenario;
pub mod script;

pub use business::{BudgetChoice, BusinessInfo, IdeaGenerationInfo, MarketingType};
pub use config::Config;
pub use content::{ContentStrategy, MarketingIdea, MonthlyPlan, StrategyStyle};
pub use plan::{ContentPlanInfo, MonthlyGoal};
pub use scenario::Scene;
pub use script::{ScriptGenerationInfo, ScriptType};
