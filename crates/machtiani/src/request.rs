//! Validated requests handed to the server-facing command implementations.

use console::style;
use std::fmt;

use crate::config::Config;
use crate::flags::{MatchStrength, Mode, Model};

/// Endpoints and credentials every request is sent with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Access {
    pub machtiani_url: String,
    pub repo_manager_url: String,
    pub model_api_key: Option<String>,
    pub code_host_api_key: Option<String>,
}

impl From<&Config> for Access {
    fn from(config: &Config) -> Self {
        Self {
            machtiani_url: config.environment.machtiani_url.clone(),
            repo_manager_url: config.environment.repo_manager_url.clone(),
            model_api_key: config.model_api_key().map(str::to_string),
            code_host_api_key: config.code_host_api_key().map(str::to_string),
        }
    }
}

/// A fully resolved command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Status {
        remote_url: String,
        access: Access,
    },
    GitStore {
        remote_url: String,
        branch: Option<String>,
        force: bool,
        ignore_files: Vec<String>,
        access: Access,
    },
    GitSync {
        remote_url: String,
        branch: String,
        force: bool,
        ignore_files: Vec<String>,
        access: Access,
    },
    GitDelete {
        remote_url: String,
        project: String,
        ignore_files: Vec<String>,
        force: bool,
        access: Access,
    },
    Prompt(PromptRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub prompt: String,
    pub remote_url: String,
    pub project: Option<String>,
    pub model: Model,
    pub match_strength: MatchStrength,
    pub mode: Mode,
    pub force: bool,
    /// Name for the saved chat, taken from `--file`.
    pub chat_name: Option<String>,
    pub ignore_files: Vec<String>,
    pub access: Access,
}

impl Request {
    pub fn command(&self) -> &'static str {
        match self {
            Request::Status { .. } => "status",
            Request::GitStore { .. } => "git-store",
            Request::GitSync { .. } => "git-sync",
            Request::GitDelete { .. } => "git-delete",
            Request::Prompt(_) => "prompt",
        }
    }

    pub fn remote_url(&self) -> &str {
        match self {
            Request::Status { remote_url, .. }
            | Request::GitStore { remote_url, .. }
            | Request::GitSync { remote_url, .. }
            | Request::GitDelete { remote_url, .. } => remote_url,
            Request::Prompt(p) => &p.remote_url,
        }
    }

    pub fn access(&self) -> &Access {
        match self {
            Request::Status { access, .. }
            | Request::GitStore { access, .. }
            | Request::GitSync { access, .. }
            | Request::GitDelete { access, .. } => access,
            Request::Prompt(p) => &p.access,
        }
    }
}

/// Base name of a chat file with every extension removed.
/// `chats/add.stats.md` gives `add`; an empty or dot-only name gives `None`.
pub fn chat_name(file: &std::path::Path) -> Option<String> {
    let base = file.file_name()?.to_str()?;
    let stem = base.split('.').next().unwrap_or_default();
    (!stem.is_empty()).then(|| stem.to_string())
}

/// Only the last four characters of a long key are shown.
fn masked(key: Option<&str>) -> String {
    match key {
        None => style("(unset)").dim().to_string(),
        Some(k) if k.chars().count() > 8 => {
            let tail: String = k.chars().skip(k.chars().count() - 4).collect();
            format!("****{tail}")
        }
        Some(_) => "****".to_string(),
    }
}

fn optional(value: Option<&str>) -> String {
    value.map_or_else(|| style("(none)").dim().to_string(), str::to_string)
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        style("(none)").dim().to_string()
    } else {
        values.join(", ")
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Machtiani URL: {}", self.machtiani_url)?;
        writeln!(f, "  Repo manager URL: {}", self.repo_manager_url)?;
        writeln!(f, "  Model API key: {}", masked(self.model_api_key.as_deref()))?;
        writeln!(
            f,
            "  Code host API key: {}",
            masked(self.code_host_api_key.as_deref())
        )
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", style("Command:").bold(), self.command())?;
        match self {
            Request::Status { .. } => {}
            Request::GitStore {
                branch,
                force,
                ignore_files,
                ..
            } => {
                writeln!(f, "  Branch: {}", optional(branch.as_deref()))?;
                writeln!(f, "  Force: {force}")?;
                writeln!(f, "  Ignored files: {}", list(ignore_files))?;
            }
            Request::GitSync {
                branch,
                force,
                ignore_files,
                ..
            } => {
                writeln!(f, "  Branch: {branch}")?;
                writeln!(f, "  Force: {force}")?;
                writeln!(f, "  Ignored files: {}", list(ignore_files))?;
            }
            Request::GitDelete {
                project,
                ignore_files,
                force,
                ..
            } => {
                writeln!(f, "  Project: {project}")?;
                writeln!(f, "  Force: {force}")?;
                writeln!(f, "  Ignored files: {}", list(ignore_files))?;
            }
            Request::Prompt(p) => {
                writeln!(f, "  Project: {}", optional(p.project.as_deref()))?;
                writeln!(f, "  Model: {}", p.model)?;
                writeln!(f, "  Match strength: {}", p.match_strength)?;
                writeln!(f, "  Mode: {}", p.mode)?;
                writeln!(f, "  Force: {}", p.force)?;
                writeln!(f, "  Chat: {}", optional(p.chat_name.as_deref()))?;
                writeln!(f, "  Ignored files: {}", list(&p.ignore_files))?;
                writeln!(f, "  Prompt: {}", p.prompt)?;
            }
        }
        write!(f, "{}", self.access())
    }
}
