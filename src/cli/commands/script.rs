//! Script command implementation.
//!
//! Two generation modes share the output slot: the detailed mode built from
//! the story questionnaire, and the quick mode that turns pasted idea text
//! into a script. Refining rewrites the whole saved script under an edit
//! instruction, picking the gateway operation that matches how the script was
//! produced.

use crate::cli::commands::{heading, notify, open_state, spinner};
use crate::core::gateway::{GeminiGateway, GenerationGateway};
use crate::models::config::Config;
use crate::models::ScriptType;
use crate::Result;
use colored::Colorize;
use std::path::Path;

const MSG_FILL_ALL_FIELDS: &str = "يرجى ملء جميع الحقول المطلوبة.";
const MSG_PASTE_IDEA_FIRST: &str = "يرجى لصق فكرة أولاً.";
const MSG_GENERATION_FAILED: &str = "حدث خطأ أثناء إنشاء السكربت. يرجى المحاولة مرة أخرى.";
const MSG_REFINE_FAILED: &str = "حدث خطأ أثناء تعديل السكربت. يرجى المحاولة مرة أخرى.";
const MSG_NOTHING_TO_REFINE: &str = "لا يوجد سكربت لتعديله أو أن حقل التعديل فارغ.";
const MSG_SCRIPT_UPDATED: &str = "تم تحديث السكربت بنجاح!";

fn resolve_type(
    state: &mut crate::store::AppState<crate::store::JsonFileStore>,
    requested: Option<String>,
) -> Result<ScriptType> {
    match requested {
        Some(raw) => {
            let script_type = ScriptType::parse_or_default(&raw);
            state.set_script_type(script_type)?;
            Ok(script_type)
        }
        None => Ok(state.script_type),
    }
}

/// Execute `script generate` (detailed mode).
pub async fn generate(config: &Config, requested_type: Option<String>) -> Result<()> {
    let mut state = open_state(config);
    let script_type = resolve_type(&mut state, requested_type)?;

    if state.script_info.validate().is_err() || state.business.name.trim().is_empty() {
        notify(MSG_FILL_ALL_FIELDS);
        return Ok(());
    }

    state.set_script(None)?;

    let gateway = GeminiGateway::new(config)?;
    let pb = spinner("Writing the script...");
    match gateway
        .generate_script(&state.script_info, &state.business, script_type)
        .await
    {
        Ok(script) => {
            pb.finish_and_clear();
            state.set_script(Some(script))?;
            print_script(state.script.as_deref().unwrap_or_default());
        }
        Err(e) => {
            pb.finish_and_clear();
            tracing::error!("Failed to generate script: {}", e);
            notify(MSG_GENERATION_FAILED);
        }
    }
    Ok(())
}

/// Execute `script quick` (idea text mode).
pub async fn quick(
    config: &Config,
    idea: Option<String>,
    idea_file: Option<&Path>,
    requested_type: Option<String>,
) -> Result<()> {
    let mut state = open_state(config);
    let script_type = resolve_type(&mut state, requested_type)?;

    let idea_text = match read_text(idea, idea_file)? {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            notify(MSG_PASTE_IDEA_FIRST);
            return Ok(());
        }
    };

    state.set_script(None)?;

    let gateway = GeminiGateway::new(config)?;
    let pb = spinner("Turning the idea into a script...");
    match gateway
        .generate_script_from_idea(&idea_text, &state.business, script_type)
        .await
    {
        Ok(script) => {
            pb.finish_and_clear();
            state.set_script(Some(script))?;
            print_script(state.script.as_deref().unwrap_or_default());
        }
        Err(e) => {
            pb.finish_and_clear();
            tracing::error!("Failed to generate script from idea: {}", e);
            notify(MSG_GENERATION_FAILED);
        }
    }
    Ok(())
}

/// Execute `script refine`: rewrite the saved script under an instruction.
///
/// When `--from-idea` (or `--from-idea-file`) is given, the script is treated
/// as quick-mode output and the original idea text rides along as context;
/// otherwise the saved story questionnaire provides the context.
pub async fn refine(
    config: &Config,
    instruction: String,
    from_idea: Option<String>,
    from_idea_file: Option<&Path>,
) -> Result<()> {
    let mut state = open_state(config);

    let Some(original) = state.script.clone() else {
        notify(MSG_NOTHING_TO_REFINE);
        return Ok(());
    };
    if instruction.trim().is_empty() {
        notify(MSG_NOTHING_TO_REFINE);
        return Ok(());
    }

    let gateway = GeminiGateway::new(config)?;
    let pb = spinner("Rewriting the script...");
    let result = match read_text(from_idea, from_idea_file)? {
        Some(idea_text) => {
            gateway
                .regenerate_script_from_idea_with_instruction(
                    &original,
                    &instruction,
                    &state.business,
                    &idea_text,
                )
                .await
        }
        None => {
            gateway
                .regenerate_script_with_instruction(
                    &original,
                    &instruction,
                    &state.business,
                    &state.script_info,
                )
                .await
        }
    };

    match result {
        Ok(script) => {
            pb.finish_and_clear();
            state.set_script(Some(script))?;
            println!("{}", MSG_SCRIPT_UPDATED.green());
            println!();
            print_script(state.script.as_deref().unwrap_or_default());
        }
        Err(e) => {
            pb.finish_and_clear();
            tracing::error!("Failed to refine script: {}", e);
            notify(MSG_REFINE_FAILED);
        }
    }
    Ok(())
}

/// Execute `script show`.
pub fn show(config: &Config) -> Result<()> {
    let state = open_state(config);
    match state.script.as_deref() {
        Some(script) => print_script(script),
        None => notify("No saved script yet. Run `script generate` or `script quick` first."),
    }
    Ok(())
}

fn read_text(inline: Option<String>, file: Option<&Path>) -> Result<Option<String>> {
    match (inline, file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) => Ok(Some(std::fs::read_to_string(path)?)),
        (None, None) => Ok(None),
    }
}

fn print_script(script: &str) {
    heading("🎬 السكربت جاهز!");
    println!("{script}");
}
