//! Content-plan questionnaire model.

use crate::models::business::require;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Primary goal for the month's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthlyGoal {
    Awareness,
    Sales,
}

impl MonthlyGoal {
    /// Wording used inside prompts for this goal.
    pub fn prompt_text(&self) -> &'static str {
        match self {
            MonthlyGoal::Sales => "زيادة المبيعات المباشرة",
            MonthlyGoal::Awareness => "زيادة الوعي وجذب متابعين جدد",
        }
    }
}

/// Parameters for strategy and monthly-plan generation.
///
/// Partially mirrors [`BusinessInfo`](crate::models::BusinessInfo): edits to
/// `store_name`, `target_audience` and `focus_products` are mirrored into the
/// business profile one-directionally by the application state layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentPlanInfo {
    pub store_name: String,
    /// Primary clothing niche.
    pub niche: String,
    /// What makes the shop stand out.
    pub core_value: String,
    pub tone_of_voice: String,
    pub target_audience: String,
    /// Products to focus on this month.
    pub focus_products: String,
    pub monthly_goal: MonthlyGoal,
    /// Planned promotions or launches.
    pub promotions: String,
    pub visual_style: String,
    pub hashtags: String,
    /// Shops or influencers whose style the user likes.
    pub inspiration: String,
}

impl Default for ContentPlanInfo {
    fn default() -> Self {
        Self {
            store_name: String::new(),
            niche: String::new(),
            core_value: String::new(),
            tone_of_voice: String::new(),
            target_audience: String::new(),
            focus_products: String::new(),
            monthly_goal: MonthlyGoal::Awareness,
            promotions: String::new(),
            visual_style: String::new(),
            hashtags: String::new(),
            inspiration: String::new(),
        }
    }
}

impl ContentPlanInfo {
    /// Check required fields. Every string field except `store_name` must be
    /// non-empty before a strategy or plan can be requested.
    pub fn validate(&self) -> Result<()> {
        require(&self.niche, "plan.niche")?;
        require(&self.core_value, "plan.coreValue")?;
        require(&self.tone_of_voice, "plan.toneOfVoice")?;
        require(&self.target_audience, "plan.targetAudience")?;
        require(&self.focus_products, "plan.focusProducts")?;
        require(&self.promotions, "plan.promotions")?;
        require(&self.visual_style, "plan.visualStyle")?;
        require(&self.hashtags, "plan.hashtags")?;
        require(&self.inspiration, "plan.inspiration")?;
        Ok(())
    }
}
