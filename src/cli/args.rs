//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compile`: compile a schema definition into a form-description document
//! - `init`: initialize a schemaform configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Schema definition file (JSON) declaring the DTO types
    pub schema: PathBuf,

    /// Root DTO type to compile
    #[arg(long = "type", value_name = "TYPE")]
    pub type_name: String,

    /// Target culture; repeat for multiple (overrides config default)
    #[arg(long, short)]
    pub culture: Vec<String>,

    /// Directory of per-culture message files (overrides config file)
    #[arg(long)]
    pub messages: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    #[command(flatten)]
    pub args: CompileArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a schema definition into a form-description document
    Compile(CompileCommand),
    /// Initialize a new .schemaformrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use crate::cli::args::*;

    #[test]
    fn test_with_command_or_help_passes_commands_through() {
        let args = Arguments::parse_from(["schemaform", "init"]);
        let args = args.with_command_or_help().unwrap();
        assert!(matches!(args.command, Some(Command::Init)));
    }

    #[test]
    fn test_bare_invocation_yields_none() {
        let args = Arguments::parse_from(["schemaform"]);
        assert!(args.with_command_or_help().is_none());
    }
}
