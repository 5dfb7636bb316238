//! Ideas command implementation.
//!
//! Generates the six-idea batch and supports the two single-idea
//! regeneration flows: free-text instruction and edit-then-elaborate. A
//! regenerated idea replaces exactly the targeted entry; the rest of the
//! batch is untouched.

use crate::cli::commands::{heading, notify, open_state, spinner};
use crate::core::gateway::{GeminiGateway, GenerationGateway};
use crate::models::business::{BudgetChoice, MARKETING_TYPES};
use crate::models::config::Config;
use crate::models::content::replace_idea;
use crate::models::MarketingIdea;
use crate::{Error, Result};
use colored::Colorize;

const MSG_FILL_ALL_FIELDS: &str = "يرجى ملء جميع الحقول المطلوبة.";
const MSG_GENERATION_FAILED: &str = "حدث خطأ أثناء إنشاء الأفكار. يرجى المحاولة مرة أخرى.";
const MSG_REGENERATION_FAILED: &str = "فشل في إعادة توليد الفكرة. يرجى المحاولة مرة أخرى.";
const MSG_IDEA_UPDATED: &str = "تم تحديث الفكرة بنجاح!";

/// Execute `ideas generate`.
#[allow(clippy::too_many_arguments)]
pub async fn generate(
    config: &Config,
    product: Option<String>,
    event: Option<String>,
    marketing_type: Option<usize>,
    has_budget: Option<String>,
    budget: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let mut state = open_state(config);

    // Flags override and persist the saved idea settings.
    let mut info = state.idea_gen.clone();
    if let Some(product) = product {
        info.product_details = product;
    }
    if let Some(event) = event {
        info.event = event;
    }
    if let Some(number) = marketing_type {
        match MARKETING_TYPES.get(number.wrapping_sub(1)) {
            Some(entry) => info.marketing_type = entry.name.to_string(),
            None => {
                notify(&format!(
                    "Unknown marketing type {number}, see `ideas types` for the catalog"
                ));
                return Ok(());
            }
        }
    }
    if let Some(choice) = has_budget {
        match choice.as_str() {
            "yes" => info.has_budget = BudgetChoice::Yes,
            "no" => info.has_budget = BudgetChoice::No,
            _ => {
                notify("Budget choice must be yes or no");
                return Ok(());
            }
        }
    }
    if budget.is_some() {
        info.budget_amount = budget;
    }
    if notes.is_some() {
        info.additional_info = notes;
    }
    state.set_idea_gen(info)?;

    if state.business.validate().is_err() || state.idea_gen.validate().is_err() {
        notify(MSG_FILL_ALL_FIELDS);
        return Ok(());
    }

    // A fresh batch replaces the old one entirely.
    state.set_ideas(None)?;

    let gateway = GeminiGateway::new(config)?;
    let pb = spinner("Generating six marketing ideas...");
    match gateway.generate_ideas(&state.business, &state.idea_gen).await {
        Ok(ideas) => {
            pb.finish_and_clear();
            state.set_ideas(Some(ideas))?;
            print_batch(state.ideas.as_deref().unwrap_or_default());
        }
        Err(e) => {
            pb.finish_and_clear();
            tracing::error!("Failed to generate ideas: {}", e);
            notify(MSG_GENERATION_FAILED);
        }
    }

    Ok(())
}

/// Execute `ideas types`.
pub fn types() -> Result<()> {
    heading("🎯 Marketing approaches");
    for (number, entry) in MARKETING_TYPES.iter().enumerate() {
        println!("  {} {}", format!("{}.", number + 1).bold(), entry.name);
        println!("     {}", entry.description.dimmed());
    }
    Ok(())
}

/// Execute `ideas show`.
pub fn show(config: &Config, index: Option<usize>) -> Result<()> {
    let state = open_state(config);
    let Some(ideas) = state.ideas.as_deref() else {
        notify("No saved ideas yet. Run `ideas generate` first.");
        return Ok(());
    };

    match index {
        Some(number) => {
            let idea = pick(ideas, number)?;
            println!("{}", idea.formatted());
        }
        None => print_batch(ideas),
    }
    Ok(())
}

/// Execute `ideas refine`: apply a free-text instruction to one idea.
pub async fn refine(config: &Config, index: usize, instruction: String) -> Result<()> {
    if instruction.trim().is_empty() {
        notify(MSG_FILL_ALL_FIELDS);
        return Ok(());
    }

    let mut state = open_state(config);
    let Some(ideas) = state.ideas.clone() else {
        notify("No saved ideas yet. Run `ideas generate` first.");
        return Ok(());
    };
    let original = pick(&ideas, index)?.clone();

    let gateway = GeminiGateway::new(config)?;
    let pb = spinner("Rewriting the idea...");
    match gateway
        .regenerate_idea_with_instruction(&original, &instruction, &state.business)
        .await
    {
        Ok(new_idea) => {
            pb.finish_and_clear();
            let mut ideas = ideas;
            replace_idea(&mut ideas, index - 1, new_idea.clone());
            state.set_ideas(Some(ideas))?;
            println!("{}", MSG_IDEA_UPDATED.green());
            println!();
            println!("{}", new_idea.formatted());
        }
        Err(e) => {
            pb.finish_and_clear();
            tracing::error!("Failed to regenerate idea: {}", e);
            notify(MSG_REGENERATION_FAILED);
        }
    }
    Ok(())
}

/// Execute `ideas elaborate`: apply field edits, then let the generator turn
/// the edited idea into a polished replacement.
#[allow(clippy::too_many_arguments)]
pub async fn elaborate(
    config: &Config,
    index: usize,
    title: Option<String>,
    concept: Option<String>,
    hook: Option<String>,
    visuals: Option<String>,
    cta: Option<String>,
) -> Result<()> {
    let mut state = open_state(config);
    let Some(ideas) = state.ideas.clone() else {
        notify("No saved ideas yet. Run `ideas generate` first.");
        return Ok(());
    };

    let mut edited = pick(&ideas, index)?.clone();
    if let Some(title) = title {
        edited.title = title;
    }
    if let Some(concept) = concept {
        edited.concept = concept;
    }
    if let Some(hook) = hook {
        edited.hook = hook;
    }
    if let Some(visuals) = visuals {
        edited.visuals = visuals;
    }
    if let Some(cta) = cta {
        edited.cta = cta;
    }

    let gateway = GeminiGateway::new(config)?;
    let pb = spinner("Elaborating the edited idea...");
    match gateway.regenerate_idea(&edited, &state.business).await {
        Ok(new_idea) => {
            pb.finish_and_clear();
            let mut ideas = ideas;
            replace_idea(&mut ideas, index - 1, new_idea.clone());
            state.set_ideas(Some(ideas))?;
            println!("{}", MSG_IDEA_UPDATED.green());
            println!();
            println!("{}", new_idea.formatted());
        }
        Err(e) => {
            pb.finish_and_clear();
            tracing::error!("Failed to elaborate idea: {}", e);
            notify(MSG_REGENERATION_FAILED);
        }
    }
    Ok(())
}

fn pick(ideas: &[MarketingIdea], number: usize) -> Result<&MarketingIdea> {
    if number == 0 || number > ideas.len() {
        return Err(Error::other(format!(
            "Idea number must be between 1 and {}",
            ideas.len()
        )));
    }
    Ok(&ideas[number - 1])
}

fn print_batch(ideas: &[MarketingIdea]) {
    heading("💡 Your marketing ideas");
    for (number, idea) in ideas.iter().enumerate() {
        println!("  {} {}", format!("{}.", number + 1).bold(), idea.title);
        let mut concept = idea.concept.chars();
        let preview: String = concept.by_ref().take(120).collect();
        let ellipsis = if concept.next().is_some() { "…" } else { "" };
        println!("     {}{}", preview.dimmed(), ellipsis);
    }
    println!();
    println!(
        "  {} marketing-studio ideas show <n>",
        "Details:".dimmed()
    );
}
