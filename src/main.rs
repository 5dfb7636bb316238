//! Marketing Studio CLI
//!
//! A command-line assistant that turns a small apparel shop's details into
//! marketing ideas, a content strategy, a monthly plan, video scripts, and a
//! visual scenario with AI-generated images.

use clap::Parser;
use marketing_studio::cli::{
    args::{
        Cli, Commands, IdeasAction, PlanAction, ProfileAction, ScenarioAction, ScriptAction,
        StrategyAction,
    },
    commands::{ideas, plan, profile, scenario, script, status, strategy},
};
use marketing_studio::models::config::{load_config, Config};
use marketing_studio::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Load configuration
    let config = load_config();

    // Run the appropriate command
    match cli.command {
        Commands::Status => {
            status::run(&config)?;
        }

        Commands::Profile { action } => match action {
            ProfileAction::Business {
                name,
                audience,
                stage,
                products,
            } => {
                profile::business(&config, name, audience, stage, products)?;
            }
            ProfileAction::Plan {
                store_name,
                niche,
                core_value,
                tone_of_voice,
                target_audience,
                focus_products,
                monthly_goal,
                promotions,
                visual_style,
                hashtags,
                inspiration,
            } => {
                profile::plan(
                    &config,
                    store_name,
                    niche,
                    core_value,
                    tone_of_voice,
                    target_audience,
                    focus_products,
                    monthly_goal,
                    promotions,
                    visual_style,
                    hashtags,
                    inspiration,
                )?;
            }
            ProfileAction::Story {
                product,
                feeling,
                touch,
                look,
                customer,
                problem,
                goal,
                cta,
            } => {
                profile::story(
                    &config, product, feeling, touch, look, customer, problem, goal, cta,
                )?;
            }
            ProfileAction::Show => {
                profile::show(&config)?;
            }
        },

        Commands::Ideas { action } => match action {
            IdeasAction::Generate {
                product,
                event,
                marketing_type,
                has_budget,
                budget,
                notes,
            } => {
                ensure_preflight(&config, cli.skip_preflight).await?;
                ideas::generate(
                    &config,
                    product,
                    event,
                    marketing_type,
                    has_budget,
                    budget,
                    notes,
                )
                .await?;
            }
            IdeasAction::Types => {
                ideas::types()?;
            }
            IdeasAction::Show { index } => {
                ideas::show(&config, index)?;
            }
            IdeasAction::Refine { index, instruction } => {
                ensure_preflight(&config, cli.skip_preflight).await?;
                ideas::refine(&config, index, instruction).await?;
            }
            IdeasAction::Elaborate {
                index,
                title,
                concept,
                hook,
                visuals,
                cta,
            } => {
                ensure_preflight(&config, cli.skip_preflight).await?;
                ideas::elaborate(&config, index, title, concept, hook, visuals, cta).await?;
            }
        },

        Commands::Strategy { action } => match action {
            StrategyAction::Generate => {
                ensure_preflight(&config, cli.skip_preflight).await?;
                strategy::generate(&config).await?;
            }
            StrategyAction::Show => {
                strategy::show(&config)?;
            }
            StrategyAction::Edit { field, text } => {
                strategy::edit(&config, &field, &text)?;
            }
            StrategyAction::Export { output } => {
                strategy::export(&config, output.as_deref())?;
            }
        },

        Commands::Plan { action } => match action {
            PlanAction::Generate => {
                ensure_preflight(&config, cli.skip_preflight).await?;
                plan::generate(&config).await?;
            }
            PlanAction::Show => {
                plan::show(&config)?;
            }
        },

        Commands::Script { action } => match action {
            ScriptAction::Generate { r#type } => {
                ensure_preflight(&config, cli.skip_preflight).await?;
                script::generate(&config, r#type).await?;
            }
            ScriptAction::Quick {
                idea,
                idea_file,
                r#type,
            } => {
                ensure_preflight(&config, cli.skip_preflight).await?;
                script::quick(&config, idea, idea_file.as_deref(), r#type).await?;
            }
            ScriptAction::Refine {
                instruction,
                from_idea,
                from_idea_file,
            } => {
                ensure_preflight(&config, cli.skip_preflight).await?;
                script::refine(&config, instruction, from_idea, from_idea_file.as_deref())
                    .await?;
            }
            ScriptAction::Show => {
                script::show(&config)?;
            }
        },

        Commands::Scenario { action } => match action {
            ScenarioAction::Generate {
                script_file,
                images_dir,
            } => {
                ensure_preflight(&config, cli.skip_preflight).await?;
                scenario::generate(&config, script_file.as_deref(), images_dir.as_deref())
                    .await?;
            }
            ScenarioAction::Show => {
                scenario::show(&config)?;
            }
        },
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("marketing_studio=debug")
    } else {
        EnvFilter::new("marketing_studio=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks before a generation command, unless skipped.
async fn ensure_preflight(config: &Config, skip: bool) -> anyhow::Result<()> {
    use colored::Colorize;

    if skip {
        return Ok(());
    }

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config).await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
