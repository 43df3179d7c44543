use std::path::PathBuf;

use clap::{value_parser, ArgAction, Args, Parser, Subcommand};

pub const VEND_HELP_TEMPLATE: &str =
    "{before-help}\nUsage:\n    {usage}\n\nGlobal options:\n{options}\n";

pub const VEND_BEFORE_HELP: &str = concat!(
    "vend ",
    env!("CARGO_PKG_VERSION"),
    " – Per-project Go dependency sandbox\n\n",
    "\x1b[1;36mSandbox\x1b[0m\n",
    "  enter            Start a shell whose GOPATH is the project's _vendor workspace.\n",
    "  leave            Explain how to leave the current sandbox.\n",
    "  path             Print the workspace path (for editors and scripts).\n\n",
    "\x1b[1;36mDependencies\x1b[0m\n",
    "  get              Fetch dependencies with `go get -d`.\n",
    "  update           Re-fetch dependencies with `go get -d -u`.\n",
    "  pin              Record the revision a dependency is at.\n",
);

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    propagate_version = false,
    disable_help_subcommand = true,
    before_help = VEND_BEFORE_HELP,
    help_template = VEND_HELP_TEMPLATE
)]
#[allow(clippy::struct_excessive_bools)]
pub struct VendCli {
    #[arg(
        short,
        long,
        help = "Suppress human output (errors still print to stderr)",
        global = true
    )]
    pub quiet: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging (-vv reaches trace)",
        global = true
    )]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q", global = true)]
    pub trace: bool,
    #[arg(
        long,
        help = "Emit {status,message,details} JSON envelopes",
        global = true
    )]
    pub json: bool,
    #[arg(long, help = "Disable colored human output", global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: CommandGroupCli,
}

#[derive(Subcommand, Debug)]
pub enum CommandGroupCli {
    #[command(
        about = "Print the project's sandbox workspace path.",
        override_usage = "vend path"
    )]
    Path,
    #[command(
        about = "Start a sandbox shell for the project and wait for it to exit.",
        override_usage = "vend enter [DIR]",
        after_help = "Examples:\n  vend enter\n  vend enter ../service\n\nSet [tool.vend].enter-command in vend.toml (or VEND_ENTER_COMMAND) to run something other than $SHELL."
    )]
    Enter(EnterArgs),
    #[command(
        about = "Explain how to leave the current sandbox.",
        override_usage = "vend leave"
    )]
    Leave,
    #[command(
        about = "Fetch dependencies into the current GOPATH.",
        override_usage = "vend get <NAME> [NAME ...]",
        after_help = "Examples:\n  vend get golang.org/x/text\n  vend get github.com/example/assets github.com/example/lib"
    )]
    Get(SourceArgs),
    #[command(
        about = "Refresh dependencies, re-fetching existing copies.",
        override_usage = "vend update <NAME> [NAME ...]"
    )]
    Update(SourceArgs),
    #[command(
        about = "Pin a dependency to its current revision.",
        override_usage = "vend pin <NAME>"
    )]
    Pin(PinArgs),
}

#[derive(Args, Debug)]
pub struct EnterArgs {
    #[arg(
        value_name = "DIR",
        value_parser = value_parser!(PathBuf),
        help = "Project directory to switch into first (defaults to the current directory)"
    )]
    pub dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    #[arg(value_name = "NAME", required = true, help = "Import paths to fetch")]
    pub names: Vec<String>,
}

#[derive(Args, Debug)]
pub struct PinArgs {
    #[arg(value_name = "NAME", help = "Import path to pin")]
    pub name: String,
}
