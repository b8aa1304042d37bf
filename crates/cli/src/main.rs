//! promptgrab CLI — the main entry point.
//!
//! Commands:
//! - `list`      — Browse templates by section
//! - `search`    — Flat, filtered template list
//! - `show`      — Template details
//! - `copy`      — Assemble a template prompt for a document
//! - `quick`     — Document + free-form instruction
//! - `focus`     — Document + selection + free-form instruction
//! - `template`  — Create, edit, delete user templates
//! - `favorite`  — Toggle a favorite
//! - `collapse`  — Toggle a collapsed section
//! - `config`    — Inspect and import settings

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod sink;

#[derive(Parser)]
#[command(
    name = "promptgrab",
    about = "promptgrab — prompt templates for your writing, assembled for any AI assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Where the selection text comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Selected text
    #[arg(short, long, conflicts_with = "selection_file")]
    pub selection: Option<String>,

    /// Read the selected text from a file
    #[arg(long)]
    pub selection_file: Option<PathBuf>,
}

/// Document input and prompt output.
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// Document file (`-` for stdin)
    #[arg(short, long)]
    pub document: PathBuf,

    /// Write the prompt to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse templates grouped into sections
    List {
        /// Only show templates matching this text
        #[arg(short, long, default_value = "")]
        filter: String,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Print sections as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search templates by name, description, or category
    Search {
        query: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a template's details
    Show { id: String },

    /// Assemble a template's prompt with a document
    Copy {
        id: String,

        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Assemble a document with a free-form instruction
    Quick {
        instruction: String,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Assemble a document, a selection, and a free-form instruction
    Focus {
        instruction: String,

        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Manage your own templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Toggle a template as favorite
    Favorite { id: String },

    /// Toggle a collapsed sidebar section (`favorites`, `my-templates`, `cat-<id>`)
    Collapse { key: String },

    /// Inspect and manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List your templates
    List,

    /// Create a template
    New {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        prompt: String,

        /// One-line description for the list view
        #[arg(short, long, default_value = "")]
        description: String,

        /// The template needs selected text
        #[arg(long)]
        requires_selection: bool,
    },

    /// Edit a template
    Edit {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        prompt: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        requires_selection: Option<bool>,
    },

    /// Delete a template
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Import the editor plugin's data.json
    Import {
        path: PathBuf,

        /// Show what would be imported without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Include or hide the built-in templates
    Builtins {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so prompts on stdout stay clean.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::List {
            filter,
            selection,
            json,
        } => commands::browse::list(&filter, &selection, json).await?,
        Commands::Search { query, json } => commands::browse::search(&query, json).await?,
        Commands::Show { id } => commands::browse::show(&id).await?,
        Commands::Copy { id, io, selection } => {
            commands::copy::template(&id, &io, &selection).await?
        }
        Commands::Quick { instruction, io } => commands::copy::quick(&instruction, &io).await?,
        Commands::Focus {
            instruction,
            io,
            selection,
        } => commands::copy::focus(&instruction, &io, &selection).await?,
        Commands::Template { action } => match action {
            TemplateAction::List => commands::template::list().await?,
            TemplateAction::New {
                name,
                prompt,
                description,
                requires_selection,
            } => commands::template::create(&name, &prompt, &description, requires_selection).await?,
            TemplateAction::Edit {
                id,
                name,
                prompt,
                description,
                requires_selection,
            } => {
                commands::template::edit(&id, name, prompt, description, requires_selection).await?
            }
            TemplateAction::Delete { id, yes } => commands::template::delete(&id, yes).await?,
        },
        Commands::Favorite { id } => commands::favorite::toggle(&id).await?,
        Commands::Collapse { key } => commands::favorite::collapse(&key).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Import { path, dry_run } => {
                commands::config_cmd::import(&path, dry_run).await?
            }
            ConfigAction::Builtins { enabled } => commands::config_cmd::builtins(enabled).await?,
        },
    }

    Ok(())
}
