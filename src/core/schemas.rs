//! Response schemas for structured gateway operations.
//!
//! These are Gemini `responseSchema` payloads. The declared required fields
//! are the contract the decode step in the gateway relies on.

use serde_json::{json, Value};

fn idea_properties() -> Value {
    json!({
        "title": { "type": "STRING", "description": "عنوان الفكرة التسويقية." },
        "concept": { "type": "STRING", "description": "شرح الفكرة الأساسية للفيديو." },
        "hook": { "type": "STRING", "description": "وصف لأول 3 ثواني من الفيديو (الخطاف)." },
        "visuals": { "type": "STRING", "description": "وصف للمشاهد والتصور البصري." },
        "cta": { "type": "STRING", "description": "دعوة لاتخاذ إجراء في نهاية الفيديو." }
    })
}

/// Schema for the six-idea batch: `{ marketingIdeas: [idea; 6] }`.
pub fn ideas() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "marketingIdeas": {
                "type": "ARRAY",
                "description": "مصفوفة من 6 أفكار تسويقية إبداعية، كل منها مفهوم فيديو متكامل.",
                "items": {
                    "type": "OBJECT",
                    "properties": idea_properties(),
                    "required": ["title", "concept", "hook", "visuals", "cta"]
                }
            }
        },
        "required": ["marketingIdeas"]
    })
}

/// Schema for a single regenerated idea.
pub fn single_idea() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING", "description": "العنوان المحسّن للفكرة." },
            "concept": { "type": "STRING", "description": "المفهوم الموسع والمحسّن للفيديو." },
            "hook": { "type": "STRING", "description": "الخطاف المحسّن والمفصّل." },
            "visuals": { "type": "STRING", "description": "التصور البصري المحسّن مع تفاصيل إضافية." },
            "cta": { "type": "STRING", "description": "دعوة العمل المحسّنة والأكثر إقناعًا." }
        },
        "required": ["title", "concept", "hook", "visuals", "cta"]
    })
}

/// Schema for the content strategy object.
pub fn strategy() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "vision": { "type": "STRING", "description": "الرؤية طويلة الأمد للعلامة التجارية." },
            "objectives": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "قائمة بالأهداف التسويقية المحددة." },
            "targetAudience": { "type": "STRING", "description": "وصف تفصيلي للجمهور المستهدف." },
            "coreMessages": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "الرسائل الرئيسية التي يجب توصيلها." },
            "channels": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "قنوات التواصل الاجتماعي الموصى بها." },
            "style": {
                "type": "OBJECT",
                "properties": {
                    "tone": { "type": "STRING", "description": "وصف الأسلوب الصوتي ونبرة العلامة التجارية." },
                    "visual": { "type": "STRING", "description": "وصف للأسلوب البصري والهوية المرئية." }
                },
                "required": ["tone", "visual"]
            },
            "contentPlanOverview": { "type": "STRING", "description": "ملخص لخطة المحتوى الشهرية المقترحة وأعمدة المحتوى الرئيسية." },
            "metrics": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "مقاييس النجاح الرئيسية (KPIs) لتتبع الأداء." }
        },
        "required": ["vision", "objectives", "targetAudience", "coreMessages", "channels", "style", "contentPlanOverview", "metrics"]
    })
}

/// Schema for the fixed four-week monthly plan.
pub fn monthly_plan() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "week1": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "3 أفكار محتوى للأسبوع الأول." },
            "week2": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "3 أفكار محتوى للأسبوع الثاني." },
            "week3": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "3 أفكار محتوى للأسبوع الثالث." },
            "week4": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "3 أفكار محتوى للأسبوع الرابع." }
        },
        "required": ["week1", "week2", "week3", "week4"]
    })
}

/// Schema for scene decomposition: `{ scenes: [...] }` in source order.
pub fn scenario() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "scenes": {
                "type": "ARRAY",
                "description": "مصفوفة من مشاهد السيناريو المقسمة.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "sentence": { "type": "STRING", "description": "الجملة الرئيسية من السكربت للمشهد." },
                        "sceneDescription": { "type": "STRING", "description": "وصف تفصيلي للمشهد." },
                        "imagePrompt": { "type": "STRING", "description": "موجه باللغة الإنجليزية لتوليد صورة للمشهد." }
                    },
                    "required": ["sentence", "sceneDescription", "imagePrompt"]
                }
            }
        },
        "required": ["scenes"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideas_schema_requires_envelope() {
        let schema = ideas();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"][0], "marketingIdeas");
        let item_required = &schema["properties"]["marketingIdeas"]["items"]["required"];
        assert_eq!(item_required.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_strategy_schema_nested_style() {
        let schema = strategy();
        assert_eq!(schema["properties"]["style"]["type"], "OBJECT");
        assert_eq!(schema["properties"]["style"]["required"][1], "visual");
    }

    #[test]
    fn test_monthly_plan_schema_has_four_weeks() {
        let schema = monthly_plan();
        for week in ["week1", "week2", "week3", "week4"] {
            assert_eq!(schema["properties"][week]["type"], "ARRAY");
        }
    }

    #[test]
    fn test_scenario_schema_scene_fields() {
        let schema = scenario();
        let required = schema["properties"]["scenes"]["items"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 3);
        assert!(required.iter().any(|v| v == "imagePrompt"));
    }
}
