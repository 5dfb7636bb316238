//! Generated content models: ideas, strategy, monthly plan.

use serde::{Deserialize, Serialize};

/// One short-video marketing concept. Produced in batches of six; individual
/// ideas are only replaced wholesale through regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingIdea {
    pub title: String,
    /// What the video is about.
    pub concept: String,
    /// The first three seconds.
    pub hook: String,
    /// Suggested shots and camera angles.
    pub visuals: String,
    /// Closing call to action.
    pub cta: String,
}

impl MarketingIdea {
    /// Render the idea as the formatted block users copy into other tools.
    pub fn formatted(&self) -> String {
        format!(
            "العنوان: {}\n\nالفكرة: {}\n\nالخطاف (أول 3 ثوانٍ): {}\n\nالتصور البصري: {}\n\nدعوة لاتخاذ إجراء: {}",
            self.title, self.concept, self.hook, self.visuals, self.cta
        )
    }
}

/// Replace the idea at `index` with a regenerated one, leaving every other
/// entry untouched. Returns false when the index is out of range.
pub fn replace_idea(ideas: &mut [MarketingIdea], index: usize, new_idea: MarketingIdea) -> bool {
    match ideas.get_mut(index) {
        Some(slot) => {
            *slot = new_idea;
            true
        }
        None => false,
    }
}

/// Voice and look of the brand inside a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyStyle {
    pub tone: String,
    pub visual: String,
}

/// A complete content strategy, one per generation. Fields are independently
/// user-editable in place, see [`crate::core::strategy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStrategy {
    pub vision: String,
    pub objectives: Vec<String>,
    pub target_audience: String,
    pub core_messages: Vec<String>,
    pub channels: Vec<String>,
    pub style: StrategyStyle,
    pub content_plan_overview: String,
    pub metrics: Vec<String>,
}

/// Four weeks of content ideas, nominally three per week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPlan {
    pub week1: Vec<String>,
    pub week2: Vec<String>,
    pub week3: Vec<String>,
    pub week4: Vec<String>,
}

impl MonthlyPlan {
    /// Iterate the weeks in order with their 1-based number.
    pub fn weeks(&self) -> [(u8, &[String]); 4] {
        [
            (1, self.week1.as_slice()),
            (2, self.week2.as_slice()),
            (3, self.week3.as_slice()),
            (4, self.week4.as_slice()),
        ]
    }
}
