//! Monthly plan command implementation.

use crate::cli::commands::{heading, notify, open_state, spinner};
use crate::core::gateway::{GeminiGateway, GenerationGateway};
use crate::models::config::Config;
use crate::models::MonthlyPlan;
use crate::Result;
use colored::Colorize;

const MSG_FILL_ALL_FIELDS: &str = "يرجى ملء جميع الحقول المطلوبة أولاً.";
const MSG_GENERATION_FAILED: &str = "حدث خطأ أثناء إنشاء الخطة. يرجى المحاولة مرة أخرى.";

/// Execute `plan generate`.
pub async fn generate(config: &Config) -> Result<()> {
    let mut state = open_state(config);

    if state.content_plan.validate().is_err() {
        notify(MSG_FILL_ALL_FIELDS);
        return Ok(());
    }

    state.set_monthly_plan(None)?;

    let gateway = GeminiGateway::new(config)?;
    let pb = spinner("Building the four-week content plan...");
    match gateway.generate_monthly_plan(&state.content_plan).await {
        Ok(plan) => {
            pb.finish_and_clear();
            state.set_monthly_plan(Some(plan))?;
            if let Some(plan) = &state.monthly_plan {
                print_plan(plan);
            }
        }
        Err(e) => {
            pb.finish_and_clear();
            tracing::error!("Failed to generate monthly plan: {}", e);
            notify(MSG_GENERATION_FAILED);
        }
    }
    Ok(())
}

/// Execute `plan show`.
pub fn show(config: &Config) -> Result<()> {
    let state = open_state(config);
    match &state.monthly_plan {
        Some(plan) => print_plan(plan),
        None => notify("No saved plan yet. Run `plan generate` first."),
    }
    Ok(())
}

fn print_plan(plan: &MonthlyPlan) {
    heading("🗓️ خطة المحتوى الشهرية");
    for (number, ideas) in plan.weeks() {
        println!("  {}", format!("الأسبوع {number}").bold().magenta());
        for idea in ideas {
            println!("    - {idea}");
        }
        println!();
    }
}
