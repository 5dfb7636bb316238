//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Marketing Studio - Generate marketing content for your apparel shop with AI
#[derive(Parser, Debug)]
#[command(name = "marketing-studio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which inputs and results are saved
    Status,

    /// Enter or update the input profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Generate and refine marketing ideas
    Ideas {
        #[command(subcommand)]
        action: IdeasAction,
    },

    /// Build the content strategy
    Strategy {
        #[command(subcommand)]
        action: StrategyAction,
    },

    /// Build the monthly content plan
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Write and refine video scripts
    Script {
        #[command(subcommand)]
        action: ScriptAction,
    },

    /// Turn a script into a visual scenario with generated images
    Scenario {
        #[command(subcommand)]
        action: ScenarioAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Update the shop profile; omitted flags keep their saved values
    Business {
        /// Shop name
        #[arg(long)]
        name: Option<String>,

        /// Who wears your products
        #[arg(long)]
        audience: Option<String>,

        /// Market stage (list the options with `profile show`)
        #[arg(long)]
        stage: Option<String>,

        /// General product description
        #[arg(long)]
        products: Option<String>,
    },

    /// Update the content-plan questionnaire; omitted flags keep saved values
    Plan {
        /// Shop name
        #[arg(long)]
        store_name: Option<String>,

        /// Primary clothing niche
        #[arg(long)]
        niche: Option<String>,

        /// What makes the shop stand out
        #[arg(long)]
        core_value: Option<String>,

        /// How you talk to your audience
        #[arg(long)]
        tone_of_voice: Option<String>,

        /// Your ideal customer
        #[arg(long)]
        target_audience: Option<String>,

        /// Products to focus on this month
        #[arg(long)]
        focus_products: Option<String>,

        /// Monthly goal: awareness or sales
        #[arg(long)]
        monthly_goal: Option<String>,

        /// Planned promotions or launches
        #[arg(long)]
        promotions: Option<String>,

        /// Preferred video look
        #[arg(long)]
        visual_style: Option<String>,

        /// Hashtags you use
        #[arg(long)]
        hashtags: Option<String>,

        /// Shops or influencers you like
        #[arg(long)]
        inspiration: Option<String>,
    },

    /// Update the script story questionnaire; omitted flags keep saved values
    Story {
        /// The product the script is about
        #[arg(long)]
        product: Option<String>,

        /// The feeling the piece gives
        #[arg(long)]
        feeling: Option<String>,

        /// How it feels to the touch
        #[arg(long)]
        touch: Option<String>,

        /// Look, colors, distinctive details
        #[arg(long)]
        look: Option<String>,

        /// Ideal customer and their lifestyle
        #[arg(long)]
        customer: Option<String>,

        /// The problem the product solves
        #[arg(long)]
        problem: Option<String>,

        /// Action the viewer should take
        #[arg(long)]
        goal: Option<String>,

        /// Call-to-action phrase
        #[arg(long)]
        cta: Option<String>,
    },

    /// Print the saved profiles
    Show,
}

#[derive(Subcommand, Debug)]
pub enum IdeasAction {
    /// Generate a batch of six ideas
    Generate {
        /// The single product to market
        #[arg(long)]
        product: Option<String>,

        /// Occasion or event to market around
        #[arg(long)]
        event: Option<String>,

        /// Marketing approach by catalog number (see `ideas types`)
        #[arg(long)]
        marketing_type: Option<usize>,

        /// Whether a budget is available: yes or no
        #[arg(long)]
        has_budget: Option<String>,

        /// Approximate budget amount
        #[arg(long)]
        budget: Option<String>,

        /// Extra guidance for the generator
        #[arg(long)]
        notes: Option<String>,
    },

    /// List the marketing-approach catalog
    Types,

    /// Print saved ideas, or one idea in full
    Show {
        /// Idea number (1-6)
        #[arg(value_name = "INDEX")]
        index: Option<usize>,
    },

    /// Regenerate one idea under a free-text instruction
    Refine {
        /// Idea number (1-6)
        #[arg(value_name = "INDEX")]
        index: usize,

        /// What to change
        #[arg(value_name = "INSTRUCTION")]
        instruction: String,
    },

    /// Edit fields of one idea and let the AI elaborate the result
    Elaborate {
        /// Idea number (1-6)
        #[arg(value_name = "INDEX")]
        index: usize,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        concept: Option<String>,

        #[arg(long)]
        hook: Option<String>,

        #[arg(long)]
        visuals: Option<String>,

        #[arg(long)]
        cta: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum StrategyAction {
    /// Generate the content strategy
    Generate,

    /// Print the saved strategy
    Show,

    /// Replace one strategy field (list fields take one entry per line)
    Edit {
        /// Field path: vision, objectives, targetAudience, coreMessages,
        /// channels, style.tone, style.visual, contentPlanOverview, metrics
        #[arg(value_name = "FIELD")]
        field: String,

        /// New content for the field
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Export the strategy as a styled HTML document
    Export {
        /// Output file path (default: derived from the store name)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanAction {
    /// Generate the four-week content plan
    Generate,

    /// Print the saved plan
    Show,
}

#[derive(Subcommand, Debug)]
pub enum ScriptAction {
    /// Write a script from the saved story questionnaire
    Generate {
        /// Script type: visual, text, or both
        #[arg(long, value_name = "TYPE")]
        r#type: Option<String>,
    },

    /// Quick mode: write a script from pasted idea text
    Quick {
        /// The idea text
        #[arg(long, conflicts_with = "idea_file")]
        idea: Option<String>,

        /// Read the idea text from a file
        #[arg(long, value_name = "FILE")]
        idea_file: Option<PathBuf>,

        /// Script type: visual, text, or both
        #[arg(long, value_name = "TYPE")]
        r#type: Option<String>,
    },

    /// Rewrite the saved script under an edit instruction
    Refine {
        /// What to change
        #[arg(value_name = "INSTRUCTION")]
        instruction: String,

        /// The original idea text, when the script came from quick mode
        #[arg(long, conflicts_with = "from_idea_file")]
        from_idea: Option<String>,

        /// Read the original idea text from a file
        #[arg(long, value_name = "FILE")]
        from_idea_file: Option<PathBuf>,
    },

    /// Print the saved script
    Show,
}

#[derive(Subcommand, Debug)]
pub enum ScenarioAction {
    /// Decompose a script into scenes and generate one image per scene
    Generate {
        /// Read the script from a file instead of the saved one
        #[arg(long, value_name = "FILE")]
        script_file: Option<PathBuf>,

        /// Also write decoded scene images into this directory
        #[arg(long, value_name = "DIR")]
        images_dir: Option<PathBuf>,
    },

    /// Print the saved scenario
    Show,
}
