//! Integration tests for the persistent field store.
//!
//! Tests cover:
//! - Round-tripping every entity type through a fresh store instance
//! - Raw-text storage of the script and the script type
//! - Scenario persistence including per-scene terminal error state
//! - Defaults when entries are absent or malformed

use marketing_studio::models::business::BudgetChoice;
use marketing_studio::models::{
    BusinessInfo, ContentPlanInfo, ContentStrategy, IdeaGenerationInfo, MarketingIdea,
    MonthlyGoal, MonthlyPlan, Scene, ScriptGenerationInfo, ScriptType, StrategyStyle,
};
use marketing_studio::store::{AppState, FieldStore, JsonFileStore};
use std::path::Path;

// ========== TEST FIXTURES ==========

fn open(dir: &Path) -> AppState<JsonFileStore> {
    AppState::load(JsonFileStore::open(&dir.join("state.json")))
}

fn sample_business() -> BusinessInfo {
    BusinessInfo {
        name: "أزياء ريم".to_string(),
        audience: "نساء تتراوح أعمارهن بين 20 و 35 عامًا".to_string(),
        stage: "في مرحلة النمو".to_string(),
        products: "فساتين صيفية خفيفة".to_string(),
    }
}

fn sample_idea() -> MarketingIdea {
    MarketingIdea {
        title: "سر الأناقة المخفي".to_string(),
        concept: "فيديو قصير يكشف أن قطعة بسيطة تغير المظهر".to_string(),
        hook: "لقطة مفاجئة في أول 3 ثوانٍ".to_string(),
        visuals: "لقطات قريبة للقماش، انتقال سريع".to_string(),
        cta: "تسوقي الآن".to_string(),
    }
}

fn sample_strategy() -> ContentStrategy {
    ContentStrategy {
        vision: "أن نكون الخيار الأول للأناقة اليومية".to_string(),
        objectives: vec!["زيادة المتابعين".to_string(), "رفع التفاعل".to_string()],
        target_audience: "الإناث 25-35، مهتمات بالعمل الحر".to_string(),
        core_messages: vec!["الجودة أولاً".to_string()],
        channels: vec!["Instagram".to_string(), "TikTok".to_string()],
        style: StrategyStyle {
            tone: "ودود وعفوي".to_string(),
            visual: "إضاءة طبيعية وألوان دافئة".to_string(),
        },
        content_plan_overview: "ثلاثة أعمدة محتوى أسبوعية".to_string(),
        metrics: vec!["نمو المتابعين".to_string(), "عدد مرات الظهور".to_string()],
    }
}

// ========== TESTS ==========

#[test]
fn round_trip_business_info() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = open(dir.path());
    state.set_business(sample_business()).unwrap();

    let reloaded = open(dir.path());
    assert_eq!(reloaded.business, sample_business());
}

#[test]
fn round_trip_content_plan_info() {
    let dir = tempfile::tempdir().unwrap();
    let plan = ContentPlanInfo {
        store_name: "أزياء ريم".to_string(),
        niche: "ملابس مستدامة".to_string(),
        core_value: "تصاميم فريدة".to_string(),
        tone_of_voice: "ملهم ومحفز".to_string(),
        target_audience: "أمهات عاملات".to_string(),
        focus_products: "بلوزات، تنانير".to_string(),
        monthly_goal: MonthlyGoal::Sales,
        promotions: "إطلاق مجموعة الصيف".to_string(),
        visual_style: "فيديوهات سريعة".to_string(),
        hashtags: "#ستايل_الموظفات".to_string(),
        inspiration: "عفوية أسوس".to_string(),
    };

    let mut state = open(dir.path());
    state.set_content_plan(plan.clone()).unwrap();

    let reloaded = open(dir.path());
    assert_eq!(reloaded.content_plan, plan);
}

#[test]
fn round_trip_idea_generation_info() {
    let dir = tempfile::tempdir().unwrap();
    let info = IdeaGenerationInfo {
        product_details: "فستان سهرة أحمر طويل".to_string(),
        event: "عيد الحب".to_string(),
        marketing_type: "التسويق القصصي".to_string(),
        has_budget: BudgetChoice::Yes,
        budget_amount: Some("100 دولار".to_string()),
        additional_info: Some("أفكار مرحة للشباب".to_string()),
    };

    let mut state = open(dir.path());
    state.set_idea_gen(info.clone()).unwrap();

    let reloaded = open(dir.path());
    assert_eq!(reloaded.idea_gen, info);
}

#[test]
fn round_trip_script_info_and_type() {
    let dir = tempfile::tempdir().unwrap();
    let info = ScriptGenerationInfo {
        product_defined: "قميص قطني أبيض".to_string(),
        emotional_story: "يمنح شعوراً بالثقة".to_string(),
        touch_details: "ناعم جداً".to_string(),
        sight_details: "خياطة داخلية مميزة".to_string(),
        ideal_customer_lifestyle: "أمهات عاملات".to_string(),
        problem_to_solve: "صعوبة إيجاد ملابس عملية وأنيقة".to_string(),
        video_goal: "الشراء المباشر".to_string(),
        cta_text: "استخدمي كود خصم NEW10".to_string(),
    };

    let mut state = open(dir.path());
    state.set_script_info(info.clone()).unwrap();
    state.set_script_type(ScriptType::Visual).unwrap();

    let reloaded = open(dir.path());
    assert_eq!(reloaded.script_info, info);
    assert_eq!(reloaded.script_type, ScriptType::Visual);
}

#[test]
fn round_trip_marketing_ideas() {
    let dir = tempfile::tempdir().unwrap();
    let ideas: Vec<MarketingIdea> = (0..6).map(|_| sample_idea()).collect();

    let mut state = open(dir.path());
    state.set_ideas(Some(ideas.clone())).unwrap();

    let reloaded = open(dir.path());
    assert_eq!(reloaded.ideas.as_deref(), Some(ideas.as_slice()));
}

#[test]
fn round_trip_strategy_and_monthly_plan() {
    let dir = tempfile::tempdir().unwrap();
    let plan = MonthlyPlan {
        week1: vec!["فكرة 1".to_string(), "فكرة 2".to_string(), "فكرة 3".to_string()],
        week2: vec!["فكرة 4".to_string(), "فكرة 5".to_string(), "فكرة 6".to_string()],
        week3: vec!["فكرة 7".to_string(), "فكرة 8".to_string(), "فكرة 9".to_string()],
        week4: vec!["فكرة 10".to_string(), "فكرة 11".to_string(), "فكرة 12".to_string()],
    };

    let mut state = open(dir.path());
    state.set_strategy(Some(sample_strategy())).unwrap();
    state.set_monthly_plan(Some(plan.clone())).unwrap();

    let reloaded = open(dir.path());
    assert_eq!(reloaded.strategy, Some(sample_strategy()));
    assert_eq!(reloaded.monthly_plan, Some(plan));
}

#[test]
fn script_is_stored_as_raw_text() {
    let dir = tempfile::tempdir().unwrap();
    let script = "المشهد الأول:\nلقطة واسعة للمدينة.\n\nالمشهد الثاني:\nلقطة قريبة.";

    let mut state = open(dir.path());
    state.set_script(Some(script.to_string())).unwrap();

    // The stored value is the text itself, not a JSON-encoded string.
    let store = JsonFileStore::open(&dir.path().join("state.json"));
    assert_eq!(store.load("script").as_deref(), Some(script));

    let reloaded = open(dir.path());
    assert_eq!(reloaded.script.as_deref(), Some(script));
}

#[test]
fn round_trip_scenario_with_terminal_states() {
    let dir = tempfile::tempdir().unwrap();
    let scenario = vec![
        Scene {
            sentence: "جملة أولى".to_string(),
            scene_description: "وصف أول".to_string(),
            image_prompt: "prompt one".to_string(),
            image_url: Some("data:image/jpeg;base64,abc".to_string()),
            image_loading: false,
            image_error: None,
        },
        Scene {
            sentence: "جملة ثانية".to_string(),
            scene_description: "وصف ثانٍ".to_string(),
            image_prompt: "prompt two".to_string(),
            image_url: None,
            image_loading: false,
            image_error: Some("فشل تحميل الصورة.".to_string()),
        },
    ];

    let mut state = open(dir.path());
    state.set_scenario(Some(scenario.clone())).unwrap();

    let reloaded = open(dir.path());
    assert_eq!(reloaded.scenario, Some(scenario));
}

#[test]
fn malformed_entry_falls_back_to_default_without_touching_others() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut store = JsonFileStore::open(&path);
    store.save("businessInfo", "{ broken").unwrap();
    store.save("script", "سكربت سليم").unwrap();

    let state = AppState::load(JsonFileStore::open(&path));
    assert_eq!(state.business, BusinessInfo::default());
    assert_eq!(state.script.as_deref(), Some("سكربت سليم"));
}
