//! Strategy command implementation.

use crate::cli::commands::{heading, notify, open_state, spinner};
use crate::core::gateway::{GeminiGateway, GenerationGateway};
use crate::core::strategy::{apply_edit, EditTarget};
use crate::generators::strategy_doc;
use crate::models::config::Config;
use crate::models::ContentStrategy;
use crate::Result;
use colored::Colorize;
use std::path::Path;

const MSG_FILL_ALL_FIELDS: &str = "يرجى ملء جميع الحقول المطلوبة أولاً.";
const MSG_GENERATION_FAILED: &str = "حدث خطأ أثناء إنشاء الاستراتيجية. يرجى المحاولة مرة أخرى.";

/// Execute `strategy generate`.
pub async fn generate(config: &Config) -> Result<()> {
    let mut state = open_state(config);

    if state.content_plan.validate().is_err() {
        notify(MSG_FILL_ALL_FIELDS);
        return Ok(());
    }

    state.set_strategy(None)?;

    let gateway = GeminiGateway::new(config)?;
    let pb = spinner("Building the content strategy...");
    match gateway.generate_strategy(&state.content_plan).await {
        Ok(strategy) => {
            pb.finish_and_clear();
            state.set_strategy(Some(strategy))?;
            if let Some(strategy) = &state.strategy {
                print_strategy(strategy);
            }
        }
        Err(e) => {
            pb.finish_and_clear();
            tracing::error!("Failed to generate strategy: {}", e);
            notify(MSG_GENERATION_FAILED);
        }
    }
    Ok(())
}

/// Execute `strategy show`.
pub fn show(config: &Config) -> Result<()> {
    let state = open_state(config);
    match &state.strategy {
        Some(strategy) => print_strategy(strategy),
        None => notify("No saved strategy yet. Run `strategy generate` first."),
    }
    Ok(())
}

/// Execute `strategy edit`: replace exactly one field.
pub fn edit(config: &Config, field: &str, text: &str) -> Result<()> {
    let mut state = open_state(config);
    let Some(mut strategy) = state.strategy.clone() else {
        notify("No saved strategy yet. Run `strategy generate` first.");
        return Ok(());
    };

    let Some(target) = EditTarget::parse(field) else {
        notify(&format!(
            "Unknown field '{}'. Editable fields: {}",
            field,
            EditTarget::PATHS.join(", ")
        ));
        return Ok(());
    };

    apply_edit(&mut strategy, target, text);
    state.set_strategy(Some(strategy))?;
    println!("{}", "✅ Strategy updated".green());
    Ok(())
}

/// Execute `strategy export`: write the styled HTML document.
pub fn export(config: &Config, output: Option<&Path>) -> Result<()> {
    let state = open_state(config);
    let Some(strategy) = &state.strategy else {
        notify("No saved strategy yet. Run `strategy generate` first.");
        return Ok(());
    };

    let path = strategy_doc::write_document(strategy, &state.content_plan.store_name, output)?;
    println!(
        "{} {}",
        "✅ Strategy document saved to:".bold().green(),
        path.display()
    );
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    println!("  {}", title.bold().magenta());
    for item in items {
        println!("    - {item}");
    }
    println!();
}

fn print_text(title: &str, text: &str) {
    println!("  {}", title.bold().magenta());
    println!("    {text}");
    println!();
}

fn print_strategy(strategy: &ContentStrategy) {
    heading("🧭 استراتيجية المحتوى الخاصة بك");
    print_text("الرؤية", &strategy.vision);
    print_list("الأهداف", &strategy.objectives);
    print_text("الجمهور المستهدف", &strategy.target_audience);
    print_list("الرسائل الأساسية", &strategy.core_messages);
    print_list("قنوات التواصل", &strategy.channels);
    print_text("النبرة", &strategy.style.tone);
    print_text("المظهر", &strategy.style.visual);
    print_text("ملخص خطة المحتوى", &strategy.content_plan_overview);
    print_list("مقاييس النجاح", &strategy.metrics);
}
