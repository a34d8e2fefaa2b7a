//! Machtiani command-line front-end.
//! Routes a command to its flag specification, fails fast on bad input and
//! resolves each invocation into a [`request::Request`].

pub mod config;
pub mod fatal;
pub mod flags;
pub mod git;
pub mod help;
pub mod ignore;
pub mod request;

use console::style;
use std::path::Path;

use config::Config;
use fatal::{Failure, parse_flags};
use flags::{DeleteFlags, PromptFlags, StatusFlags, StoreFlags, SyncFlags};
use request::{Access, PromptRequest, Request};

/// Run the CLI on the arguments after the program name.
pub fn run(args: &[String]) -> Result<(), Failure> {
    let Some((command, rest)) = args.split_first() else {
        help::print();
        return Ok(());
    };

    tracing::debug!(command = %command, "dispatching");
    let request = match command.as_str() {
        "help" | "-h" | "--help" => {
            help::print();
            return Ok(());
        }
        "status" => status(rest)?,
        "git-store" => git_store(rest)?,
        "git-sync" => git_sync(rest)?,
        "git-delete" => git_delete(rest)?,
        _ => prompt(args)?,
    };

    println!(
        "{} {}",
        style("Using remote URL:").bold(),
        request.remote_url()
    );
    print!("{request}");
    Ok(())
}

fn status(args: &[String]) -> Result<Request, Failure> {
    let mut flags = StatusFlags::default();
    parse_flags(&mut flags, args)?;
    let config = load_config()?;

    Ok(Request::Status {
        remote_url: resolve_remote(&flags.remote)?,
        access: Access::from(&config),
    })
}

fn git_store(args: &[String]) -> Result<Request, Failure> {
    let mut flags = StoreFlags::default();
    parse_flags(&mut flags, args)?;
    let config = load_config()?;
    let remote_url = resolve_remote(&flags.remote)?;

    Ok(Request::GitStore {
        remote_url,
        branch: flags.branch_name,
        force: flags.force,
        ignore_files: load_ignore_files()?,
        access: Access::from(&config),
    })
}

fn git_sync(args: &[String]) -> Result<Request, Failure> {
    let mut flags = SyncFlags::default();
    parse_flags(&mut flags, args)?;
    let Some(branch) = flags.branch_name.filter(|b| !b.is_empty()) else {
        return Err(Failure::explicit(
            "Error: all flags --remote and --branch-name must be provided.",
        ));
    };
    let config = load_config()?;

    Ok(Request::GitSync {
        remote_url: resolve_remote(&flags.remote)?,
        branch,
        force: flags.force,
        ignore_files: load_ignore_files()?,
        access: Access::from(&config),
    })
}

fn git_delete(args: &[String]) -> Result<Request, Failure> {
    let mut flags = DeleteFlags::default();
    parse_flags(&mut flags, args)?;
    let config = load_config()?;
    let remote_url = resolve_remote(&flags.remote)?;

    Ok(Request::GitDelete {
        project: git::project_name(&remote_url).to_string(),
        remote_url,
        ignore_files: load_ignore_files()?,
        force: flags.force,
        access: Access::from(&config),
    })
}

fn prompt(args: &[String]) -> Result<Request, Failure> {
    let mut flags = PromptFlags::default();
    parse_flags(&mut flags, args)?;

    let prompt = match &flags.file {
        Some(file) => std::fs::read_to_string(file).map_err(|e| {
            Failure::explicit(format!("Error reading markdown file: {}: {e}", file.display()))
        })?,
        None => flags.prompt_text().ok_or_else(|| {
            Failure::explicit(
                "Error: No prompt provided. Please provide either a prompt or a markdown file.",
            )
        })?,
    };

    if flags.verbose {
        print_verbose(&flags, &prompt);
    }

    let config = load_config()?;
    let remote_url = resolve_remote("origin")?;

    Ok(Request::Prompt(PromptRequest {
        prompt,
        remote_url,
        project: flags.project,
        model: flags.model,
        match_strength: flags.match_strength,
        mode: flags.mode,
        force: flags.force,
        chat_name: flags.file.as_deref().and_then(request::chat_name),
        ignore_files: load_ignore_files()?,
        access: Access::from(&config),
    }))
}

fn print_verbose(flags: &PromptFlags, prompt: &str) {
    let file = flags
        .file
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    println!("{}", style("Arguments passed:").dim());
    println!("Markdown file: {file}");
    println!("Model: {}", flags.model);
    println!("Match strength: {}", flags.match_strength);
    println!("Mode: {}", flags.mode);
    println!("Prompt: {prompt}");
}

fn load_config() -> Result<Config, Failure> {
    Config::load().map_err(|e| Failure::explicit(format!("Error loading config: {e:#}")))
}

fn resolve_remote(remote: &str) -> Result<String, Failure> {
    git::remote_url(remote)
        .map_err(|e| Failure::explicit(format!("Error getting remote url: {e:#}")))
}

fn load_ignore_files() -> Result<Vec<String>, Failure> {
    ignore::read_ignore_file(Path::new(ignore::IGNORE_FILE_NAME))
        .map_err(|e| Failure::explicit(format!("Error reading ignore file: {e:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_prints_help() {
        run(&[]).unwrap();
    }

    #[test]
    fn help_command_succeeds() {
        run(&args(&["help"])).unwrap();
    }

    #[test]
    fn unknown_flag_on_subcommand_is_a_parse_failure() {
        let err = run(&args(&["status", "--unknown=1"])).unwrap_err();
        assert!(matches!(err, Failure::Parse(_)));
    }

    #[test]
    fn unknown_leading_flag_is_routed_to_prompt_parsing() {
        let err = run(&args(&["--unknown=1"])).unwrap_err();
        assert!(matches!(err, Failure::Parse(_)));
        assert!(err.to_string().contains("--unknown"), "unexpected error: {err}");
    }

    #[test]
    fn git_sync_without_branch_fails_explicitly() {
        let err = run(&args(&["git-sync", "--force"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: all flags --remote and --branch-name must be provided."
        );
    }

    #[test]
    fn prompt_flags_without_prompt_fail_explicitly() {
        let err = run(&args(&["--model", "gpt-4o"])).unwrap_err();
        assert!(matches!(err, Failure::Explicit(_)));
        assert!(err.to_string().starts_with("Error: No prompt provided."));
    }

    #[test]
    fn unreadable_prompt_file_fails_explicitly() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.md");
        let err = run(&args(&["--file", missing.to_str().unwrap()])).unwrap_err();
        assert!(
            err.to_string().starts_with("Error reading markdown file:"),
            "unexpected error: {err}"
        );
    }
}
