//! Scenario command implementation.
//!
//! Drives the scenario pipeline: decompose the script, then generate one
//! image per scene, publishing progress and persisting the scene list after
//! every update so an interrupted run still leaves its partial results
//! behind. Ctrl-C cancels cooperatively between scenes.

use crate::cli::commands::{heading, notify, open_state, spinner};
use crate::core::gateway::GeminiGateway;
use crate::core::scenario::{CancelToken, PipelineConfig, ScenarioPipeline};
use crate::models::config::Config;
use crate::models::Scene;
use crate::utils::text::decode_data_url;
use crate::{Error, Result};
use colored::Colorize;
use std::path::Path;

const MSG_SCRIPT_REQUIRED: &str = "يرجى إدخال نص السكربت أولاً.";
const MSG_GENERATION_FAILED: &str = "حدث خطأ أثناء إنشاء السيناريو. يرجى المحاولة مرة أخرى.";

/// Execute `scenario generate`.
pub async fn generate(
    config: &Config,
    script_file: Option<&Path>,
    images_dir: Option<&Path>,
) -> Result<()> {
    let mut state = open_state(config);

    let script = match script_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => state.script.clone().unwrap_or_default(),
    };
    if script.trim().is_empty() {
        notify(MSG_SCRIPT_REQUIRED);
        return Ok(());
    }

    let gateway = GeminiGateway::new(config)?;
    let pipeline =
        ScenarioPipeline::with_config(gateway, PipelineConfig::from(&config.scenario));

    let cancel = CancelToken::new();
    let ctrlc_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrlc_token.cancel();
        }
    });

    let pb = spinner("Decomposing the script into scenes...");
    let progress = pb.clone();

    // Persist after every single scene update; a crash or cancellation keeps
    // the progress made so far.
    let mut save_error = None;
    let mut observer = |scenes: &[Scene]| {
        progress.set_message(render_progress(scenes));
        if let Err(e) = state.set_scenario(Some(scenes.to_vec())) {
            save_error.get_or_insert(e);
        }
    };

    let result = pipeline.run(&script, &mut observer, &cancel).await;
    pb.finish_and_clear();

    if let Some(e) = save_error {
        tracing::warn!("Failed to persist scenario progress: {}", e);
    }

    match result {
        Ok(scenes) => {
            print_scenario(&scenes);
            if let Some(dir) = images_dir {
                write_images(&scenes, dir)?;
            }
        }
        Err(Error::Cancelled) => {
            notify("تم إيقاف إنشاء السيناريو.");
        }
        Err(e) => {
            // Decomposition failed: nothing was published, the previous
            // scenario (if any) is still in place.
            tracing::error!("Failed to generate scenario: {}", e);
            notify(MSG_GENERATION_FAILED);
        }
    }
    Ok(())
}

/// Execute `scenario show`.
pub fn show(config: &Config) -> Result<()> {
    let state = open_state(config);
    match state.scenario.as_deref() {
        Some(scenes) => print_scenario(scenes),
        None => notify("No saved scenario yet. Run `scenario generate` first."),
    }
    Ok(())
}

fn render_progress(scenes: &[Scene]) -> String {
    let marks: String = scenes
        .iter()
        .map(|scene| {
            if scene.image_loading {
                '⏳'
            } else if scene.image_url.is_some() {
                '✓'
            } else if scene.image_error.is_some() {
                '✗'
            } else {
                '·'
            }
        })
        .collect();
    format!("Generating scene images [{marks}]")
}

fn print_scenario(scenes: &[Scene]) {
    heading("🎞️ السيناريو جاهز!");
    for (number, scene) in scenes.iter().enumerate() {
        println!("  {}", format!("المشهد {}", number + 1).bold().magenta());
        println!("    {} \"{}\"", "النص:".bold(), scene.sentence);
        println!("    {} {}", "وصف المشهد:".bold(), scene.scene_description);
        if scene.image_url.is_some() {
            println!("    {} {}", "الصورة:".bold(), "✓ generated".green());
        } else if let Some(error) = &scene.image_error {
            println!("    {} {}", "الصورة:".bold(), error.red());
        }
        println!();
    }
}

/// Decode data-URL images into numbered files under `dir`.
fn write_images(scenes: &[Scene], dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut written = 0usize;
    for (number, scene) in scenes.iter().enumerate() {
        let Some(url) = scene.image_url.as_deref() else {
            continue;
        };
        match decode_data_url(url) {
            Ok(bytes) => {
                let path = dir.join(format!("scene-{:02}.jpg", number + 1));
                std::fs::write(&path, bytes)?;
                written += 1;
            }
            Err(e) => {
                tracing::warn!("Skipping image for scene {}: {}", number + 1, e);
            }
        }
    }
    println!(
        "{} {} images written to {}",
        "🖼️".bold(),
        written,
        dir.display()
    );
    Ok(())
}
