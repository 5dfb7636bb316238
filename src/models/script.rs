//! Script-generation input models.

use crate::models::business::require;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Which elements the generated script should contain.
///
/// This is a hard content constraint passed to the generator, not a hint:
/// `Visual` scripts carry no dialogue at all, `Text` scripts carry no scene
/// descriptions, `Both` balances the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    Visual,
    Text,
    #[default]
    Both,
}

impl ScriptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::Visual => "visual",
            ScriptType::Text => "text",
            ScriptType::Both => "both",
        }
    }

    /// Parse a stored or CLI-provided value, falling back to the default.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "visual" => ScriptType::Visual,
            "text" => ScriptType::Text,
            "both" => ScriptType::Both,
            _ => ScriptType::default(),
        }
    }
}

/// Story questionnaire for the detailed script mode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptGenerationInfo {
    /// The product the script is about.
    pub product_defined: String,
    /// The feeling the piece gives to whoever wears it.
    pub emotional_story: String,
    /// How the product feels to the touch.
    pub touch_details: String,
    /// Look, colors and distinctive details.
    pub sight_details: String,
    pub ideal_customer_lifestyle: String,
    /// The problem the product solves for the customer.
    pub problem_to_solve: String,
    /// Action the viewer should take after the video.
    pub video_goal: String,
    /// The call-to-action phrase to close with.
    pub cta_text: String,
}

impl ScriptGenerationInfo {
    /// Check that every story field has been filled in.
    pub fn validate(&self) -> Result<()> {
        require(&self.product_defined, "script.productDefined")?;
        require(&self.emotional_story, "script.emotionalStory")?;
        require(&self.touch_details, "script.touchDetails")?;
        require(&self.sight_details, "script.sightDetails")?;
        require(&self.ideal_customer_lifestyle, "script.idealCustomerLifestyle")?;
        require(&self.problem_to_solve, "script.problemToSolve")?;
        require(&self.video_goal, "script.videoGoal")?;
        require(&self.cta_text, "script.ctaText")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_type_default_is_both() {
        assert_eq!(ScriptType::default(), ScriptType::Both);
        assert_eq!(ScriptType::parse_or_default("nonsense"), ScriptType::Both);
        assert_eq!(ScriptType::parse_or_default("visual"), ScriptType::Visual);
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let info = ScriptGenerationInfo {
            product_defined: "قميص قطني".to_string(),
            ..Default::default()
        };
        let err = info.validate().unwrap_err();
        assert!(err.to_string().contains("script.emotionalStory"));
    }
}
