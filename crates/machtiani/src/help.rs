//! Top-level usage text. Per-command `--help` comes from clap.

pub const HELP_TEXT: &str = "\
Usage: machtiani [flags] [prompt]

Machtiani is a command-line tool for code chat and information retrieval
from code repositories.

Commands:
  git-store                    Add a repository to the Machtiani system.
  git-sync                     Fetch and checkout a specific branch of the repository.
  git-delete                   Remove a repository from the Machtiani system.
  status                       Check the status of the current project.
  help                         Show this message.

Prompt flags:
  --file <path>                Path to a markdown chat file (optional).
  --project <name>             Name of the project (optional).
  --model <model>              Model to use (gpt-4o, gpt-4o-mini; default: gpt-4o-mini).
  --match-strength <strength>  Match strength (high, mid, low; default: mid).
  --mode <mode>                Search mode (pure-chat, commit, super; default: commit).
  --force                      Skip confirmation prompt and proceed with the operation.
  --verbose                    Enable verbose output.

git-store:
  Usage: machtiani git-store [--branch-name <branch>] [--remote <name>] [--force]
    --branch-name string       Name of the default branch (alias: --branch).
    --remote string            Name of the remote repository (default: \"origin\").
    --force                    Skip confirmation prompt.

git-sync:
  Usage: machtiani git-sync --branch-name <branch> [--remote <name>] [--force]
    --branch-name string       Name of the branch (required, alias: --branch).
    --remote string            Name of the remote repository (default: \"origin\").
    --force                    Skip confirmation prompt.

git-delete:
  Usage: machtiani git-delete [--remote <name>] [--force]
    --remote string            Name of the remote repository (default: \"origin\").
    --force                    Skip confirmation prompt.

status:
  Usage: machtiani status [--remote <name>]
    --remote string            Name of the remote repository (default: \"origin\").

Examples:
  machtiani \"Add a new endpoint to get stats.\"
  machtiani --file .machtiani/chat/add_state_endpoint.md
  machtiani \"Add a new endpoint to get stats.\" --model gpt-4o --mode pure-chat --match-strength high
  machtiani git-store --branch-name master --force
";

/// Print the usage text to stdout.
pub fn print() {
    print!("{HELP_TEXT}");
}
