//! Per-command flag specifications. Each struct is parsed from the arguments
//! that follow its command name, through [`crate::fatal::parse_flags`].

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

const DEFAULT_REMOTE: &str = "origin";

#[derive(Parser, Debug, Default)]
#[command(name = "status", version, about = "Check the status of the current project")]
pub struct StatusFlags {
    /// Name of the remote repository
    #[arg(long, default_value = DEFAULT_REMOTE)]
    pub remote: String,
}

#[derive(Parser, Debug, Default)]
#[command(name = "git-store", version, about = "Add a repository to the Machtiani system")]
pub struct StoreFlags {
    /// Name of the remote repository
    #[arg(long, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Name of the default branch
    #[arg(long, visible_alias = "branch")]
    pub branch_name: Option<String>,

    /// Skip confirmation prompt and proceed with the operation
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Default)]
#[command(name = "git-sync", version, about = "Fetch and checkout a specific branch of the repository")]
pub struct SyncFlags {
    /// Name of the remote repository
    #[arg(long, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Branch to sync
    #[arg(long, visible_alias = "branch")]
    pub branch_name: Option<String>,

    /// Skip confirmation prompt and proceed with the operation
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Default)]
#[command(name = "git-delete", version, about = "Remove a repository from the Machtiani system")]
pub struct DeleteFlags {
    /// Name of the remote repository
    #[arg(long, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Skip confirmation prompt and proceed with the operation
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Default)]
#[command(name = "machtiani", version, about = "Chat with the code in the current repository")]
pub struct PromptFlags {
    /// Prompt text; multiple words are joined with spaces
    pub prompt: Vec<String>,

    /// Path to a markdown chat file used instead of the prompt
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Name of the project
    #[arg(long)]
    pub project: Option<String>,

    /// Model to use
    #[arg(long, value_enum, default_value_t)]
    pub model: Model,

    /// Match strength
    #[arg(long, value_enum, default_value_t)]
    pub match_strength: MatchStrength,

    /// Search mode
    #[arg(long, value_enum, default_value_t)]
    pub mode: Mode,

    /// Skip confirmation prompt and proceed with the operation
    #[arg(long)]
    pub force: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl PromptFlags {
    /// The positional words as one prompt, or `None` when there are none.
    pub fn prompt_text(&self) -> Option<String> {
        let joined = self.prompt.join(" ");
        (!joined.is_empty()).then_some(joined)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Model {
    #[value(name = "gpt-4o")]
    Gpt4o,
    #[default]
    #[value(name = "gpt-4o-mini")]
    Gpt4oMini,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MatchStrength {
    High,
    #[default]
    Mid,
    Low,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    PureChat,
    #[default]
    Commit,
    Super,
}

/// Render a value under the same name the command line accepts.
fn write_value_name<T: ValueEnum>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.to_possible_value() {
        Some(v) => f.write_str(v.get_name()),
        None => Ok(()),
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

impl fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}
