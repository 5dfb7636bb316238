//! In-place editing of strategy fields.
//!
//! Edits address one field at a time through a typed target instead of a
//! dynamic key-path walk, so an edit is total: it either parses to a known
//! field or is rejected up front, and it can only ever touch that field.

use crate::models::ContentStrategy;

/// Scalar (single text) strategy fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Vision,
    TargetAudience,
    Tone,
    Visual,
    ContentPlanOverview,
}

/// List (line-per-entry) strategy fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Objectives,
    CoreMessages,
    Channels,
    Metrics,
}

/// A single editable strategy field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Scalar(ScalarField),
    List(ListField),
}

impl EditTarget {
    /// Parse a user-facing field path (`vision`, `style.tone`, `coreMessages`,
    /// ...) into a typed target.
    pub fn parse(path: &str) -> Option<Self> {
        let target = match path {
            "vision" => EditTarget::Scalar(ScalarField::Vision),
            "targetAudience" => EditTarget::Scalar(ScalarField::TargetAudience),
            "style.tone" => EditTarget::Scalar(ScalarField::Tone),
            "style.visual" => EditTarget::Scalar(ScalarField::Visual),
            "contentPlanOverview" => EditTarget::Scalar(ScalarField::ContentPlanOverview),
            "objectives" => EditTarget::List(ListField::Objectives),
            "coreMessages" => EditTarget::List(ListField::CoreMessages),
            "channels" => EditTarget::List(ListField::Channels),
            "metrics" => EditTarget::List(ListField::Metrics),
            _ => return None,
        };
        Some(target)
    }

    /// Every accepted field path, for CLI help and error messages.
    pub const PATHS: &'static [&'static str] = &[
        "vision",
        "objectives",
        "targetAudience",
        "coreMessages",
        "channels",
        "style.tone",
        "style.visual",
        "contentPlanOverview",
        "metrics",
    ];
}

/// Split list-field text into entries: one per line, trimmed, empties dropped.
pub fn split_list_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Apply an edit to exactly the targeted field, leaving siblings untouched.
pub fn apply_edit(strategy: &mut ContentStrategy, target: EditTarget, text: &str) {
    match target {
        EditTarget::Scalar(field) => {
            let slot = match field {
                ScalarField::Vision => &mut strategy.vision,
                ScalarField::TargetAudience => &mut strategy.target_audience,
                ScalarField::Tone => &mut strategy.style.tone,
                ScalarField::Visual => &mut strategy.style.visual,
                ScalarField::ContentPlanOverview => &mut strategy.content_plan_overview,
            };
            *slot = text.to_string();
        }
        EditTarget::List(field) => {
            let slot = match field {
                ListField::Objectives => &mut strategy.objectives,
                ListField::CoreMessages => &mut strategy.core_messages,
                ListField::Channels => &mut strategy.channels,
                ListField::Metrics => &mut strategy.metrics,
            };
            *slot = split_list_text(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrategyStyle;

    fn strategy() -> ContentStrategy {
        ContentStrategy {
            vision: "الرؤية".to_string(),
            objectives: vec!["هدف 1".to_string(), "هدف 2".to_string()],
            target_audience: "الجمهور".to_string(),
            core_messages: vec!["رسالة".to_string()],
            channels: vec!["Instagram".to_string()],
            style: StrategyStyle {
                tone: "ودود".to_string(),
                visual: "مشرق".to_string(),
            },
            content_plan_overview: "ملخص".to_string(),
            metrics: vec!["متابعون".to_string()],
        }
    }

    #[test]
    fn test_parse_all_paths() {
        for path in EditTarget::PATHS {
            assert!(EditTarget::parse(path).is_some(), "path {path} should parse");
        }
        assert!(EditTarget::parse("style").is_none());
        assert!(EditTarget::parse("style.unknown").is_none());
    }

    #[test]
    fn test_scalar_edit_touches_only_target() {
        let mut s = strategy();
        let before = s.clone();
        apply_edit(
            &mut s,
            EditTarget::parse("style.tone").unwrap(),
            "رسمي وفخم",
        );
        assert_eq!(s.style.tone, "رسمي وفخم");
        assert_eq!(s.style.visual, before.style.visual);
        assert_eq!(s.vision, before.vision);
        assert_eq!(s.objectives, before.objectives);
        assert_eq!(s.core_messages, before.core_messages);
        assert_eq!(s.channels, before.channels);
        assert_eq!(s.content_plan_overview, before.content_plan_overview);
        assert_eq!(s.metrics, before.metrics);
    }

    #[test]
    fn test_list_edit_splits_trims_and_drops_empty_lines() {
        let mut s = strategy();
        apply_edit(
            &mut s,
            EditTarget::parse("objectives").unwrap(),
            "  هدف جديد  \n\nهدف آخر\n   \n",
        );
        assert_eq!(s.objectives, vec!["هدف جديد", "هدف آخر"]);
    }

    #[test]
    fn test_split_list_text_empty_input() {
        assert!(split_list_text("\n  \n").is_empty());
    }
}
