//! # CLI Completions Command
//!
//! Emits shell completion scripts to stdout.

use clap::Command;
use clap_complete::generate;

use crate::commands::CompletionsArgs;

/// Generates completions for the requested shell.
pub fn completions(cmd: &mut Command, args: &CompletionsArgs) {
    generate(args.shell, cmd, "quorum", &mut std::io::stdout());
}
