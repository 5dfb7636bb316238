//! Profile command implementation.
//!
//! Maintains the three input forms the generation steps draw from: the shop
//! profile, the content-plan questionnaire, and the script story.

use crate::cli::commands::{heading, open_state};
use crate::models::business::{MARKETING_TYPES, STAGES};
use crate::models::config::Config;
use crate::models::MonthlyGoal;
use crate::Result;
use colored::Colorize;

fn apply(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Update the business profile with the provided fields.
pub fn business(
    config: &Config,
    name: Option<String>,
    audience: Option<String>,
    stage: Option<String>,
    products: Option<String>,
) -> Result<()> {
    let mut state = open_state(config);
    let mut info = state.business.clone();

    apply(&mut info.name, name);
    apply(&mut info.audience, audience);
    apply(&mut info.products, products);
    if let Some(stage) = stage {
        if !STAGES.contains(&stage.as_str()) {
            println!(
                "{} {}",
                "Unknown stage, keeping the saved one. Options:".yellow(),
                STAGES.join(" | ")
            );
        } else {
            info.stage = stage;
        }
    }

    state.set_business(info)?;
    println!("{}", "✅ Business profile saved".green());
    Ok(())
}

/// Update the content-plan questionnaire with the provided fields. Edits to
/// the shared fields are mirrored into the business profile.
#[allow(clippy::too_many_arguments)]
pub fn plan(
    config: &Config,
    store_name: Option<String>,
    niche: Option<String>,
    core_value: Option<String>,
    tone_of_voice: Option<String>,
    target_audience: Option<String>,
    focus_products: Option<String>,
    monthly_goal: Option<String>,
    promotions: Option<String>,
    visual_style: Option<String>,
    hashtags: Option<String>,
    inspiration: Option<String>,
) -> Result<()> {
    let mut state = open_state(config);
    let mut info = state.content_plan.clone();

    apply(&mut info.store_name, store_name);
    apply(&mut info.niche, niche);
    apply(&mut info.core_value, core_value);
    apply(&mut info.tone_of_voice, tone_of_voice);
    apply(&mut info.target_audience, target_audience);
    apply(&mut info.focus_products, focus_products);
    apply(&mut info.promotions, promotions);
    apply(&mut info.visual_style, visual_style);
    apply(&mut info.hashtags, hashtags);
    apply(&mut info.inspiration, inspiration);
    if let Some(goal) = monthly_goal {
        match goal.as_str() {
            "awareness" => info.monthly_goal = MonthlyGoal::Awareness,
            "sales" => info.monthly_goal = MonthlyGoal::Sales,
            _ => println!(
                "{}",
                "Unknown monthly goal, keeping the saved one. Options: awareness | sales"
                    .yellow()
            ),
        }
    }

    state.set_content_plan(info)?;
    println!("{}", "✅ Content plan profile saved".green());
    Ok(())
}

/// Update the script story questionnaire with the provided fields.
#[allow(clippy::too_many_arguments)]
pub fn story(
    config: &Config,
    product: Option<String>,
    feeling: Option<String>,
    touch: Option<String>,
    look: Option<String>,
    customer: Option<String>,
    problem: Option<String>,
    goal: Option<String>,
    cta: Option<String>,
) -> Result<()> {
    let mut state = open_state(config);
    let mut info = state.script_info.clone();

    apply(&mut info.product_defined, product);
    apply(&mut info.emotional_story, feeling);
    apply(&mut info.touch_details, touch);
    apply(&mut info.sight_details, look);
    apply(&mut info.ideal_customer_lifestyle, customer);
    apply(&mut info.problem_to_solve, problem);
    apply(&mut info.video_goal, goal);
    apply(&mut info.cta_text, cta);

    state.set_script_info(info)?;
    println!("{}", "✅ Script story saved".green());
    Ok(())
}

fn field(label: &str, value: &str) {
    let shown = if value.trim().is_empty() { "—" } else { value };
    println!("  {} {}", format!("{label}:").bold(), shown);
}

/// Print every saved profile.
pub fn show(config: &Config) -> Result<()> {
    let state = open_state(config);

    heading("🏪 Business profile");
    field("Name", &state.business.name);
    field("Audience", &state.business.audience);
    field("Stage", &state.business.stage);
    field("Products", &state.business.products);
    println!("  {} {}", "Stage options:".dimmed(), STAGES.join(" | "));
    println!();

    heading("🗓️ Content plan profile");
    field("Store name", &state.content_plan.store_name);
    field("Niche", &state.content_plan.niche);
    field("Core value", &state.content_plan.core_value);
    field("Tone of voice", &state.content_plan.tone_of_voice);
    field("Target audience", &state.content_plan.target_audience);
    field("Focus products", &state.content_plan.focus_products);
    field(
        "Monthly goal",
        match state.content_plan.monthly_goal {
            MonthlyGoal::Awareness => "awareness",
            MonthlyGoal::Sales => "sales",
        },
    );
    field("Promotions", &state.content_plan.promotions);
    field("Visual style", &state.content_plan.visual_style);
    field("Hashtags", &state.content_plan.hashtags);
    field("Inspiration", &state.content_plan.inspiration);
    println!();

    heading("✍️ Script story");
    field("Product", &state.script_info.product_defined);
    field("Feeling", &state.script_info.emotional_story);
    field("Touch", &state.script_info.touch_details);
    field("Look", &state.script_info.sight_details);
    field("Customer", &state.script_info.ideal_customer_lifestyle);
    field("Problem", &state.script_info.problem_to_solve);
    field("Video goal", &state.script_info.video_goal);
    field("CTA", &state.script_info.cta_text);
    println!();

    heading("🎯 Idea settings");
    field("Product", &state.idea_gen.product_details);
    field("Event", &state.idea_gen.event);
    field("Marketing type", &state.idea_gen.marketing_type);
    println!(
        "  {} run `marketing-studio ideas types` for the {} available approaches",
        "Tip:".dimmed(),
        MARKETING_TYPES.len()
    );

    Ok(())
}
