//! Status command implementation: the dashboard counterpart.

use crate::cli::commands::{heading, open_state};
use crate::models::config::Config;
use crate::Result;
use colored::Colorize;

fn line(label: &str, value: String) {
    println!("  {} {}", format!("{label}:").bold(), value);
}

fn presence(present: bool, detail: Option<String>) -> String {
    match (present, detail) {
        (true, Some(detail)) => format!("{} ({})", "saved".green(), detail),
        (true, None) => "saved".green().to_string(),
        (false, _) => "—".dimmed().to_string(),
    }
}

/// Execute `status`.
pub fn run(config: &Config) -> Result<()> {
    let state = open_state(config);

    heading("📋 Marketing Studio");

    line(
        "Business profile",
        presence(
            !state.business.name.trim().is_empty(),
            Some(state.business.name.clone()).filter(|n| !n.trim().is_empty()),
        ),
    );
    line(
        "Ideas",
        presence(
            state.ideas.is_some(),
            state.ideas.as_ref().map(|i| format!("{} ideas", i.len())),
        ),
    );
    line("Strategy", presence(state.strategy.is_some(), None));
    line("Monthly plan", presence(state.monthly_plan.is_some(), None));
    line(
        "Script",
        presence(
            state.script.is_some(),
            state
                .script
                .as_ref()
                .map(|s| format!("{} characters, {} mode", s.chars().count(), state.script_type.as_str())),
        ),
    );
    line(
        "Scenario",
        presence(
            state.scenario.is_some(),
            state.scenario.as_ref().map(|scenes| {
                let resolved = scenes.iter().filter(|s| s.image_url.is_some()).count();
                format!("{} scenes, {} images", scenes.len(), resolved)
            }),
        ),
    );

    println!();
    println!("  {} {}", "State file:".dimmed(), config.state_file.display());
    Ok(())
}
