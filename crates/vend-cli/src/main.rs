use std::env;
use std::sync::Arc;

use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use vend_core::api::{CommandContext, GlobalOptions, SystemEffects};

mod cli;
mod dispatch;
mod output;
mod style;

use cli::VendCli;
use dispatch::dispatch_command;
use output::{emit_output, OutputOptions};

const LOG_ENV: &str = "VEND_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = VendCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let global = GlobalOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        trace: cli.trace,
        json: cli.json,
    };

    let ctx = CommandContext::new(&global, Arc::new(SystemEffects::new()))
        .map_err(|err| eyre!("{err:?}"))?;
    let (info, outcome) = dispatch_command(&ctx, &cli.command)?;
    let code = emit_output(
        &OutputOptions {
            quiet: cli.quiet,
            json: cli.json,
            no_color: cli.no_color,
        },
        info,
        &outcome,
    )?;

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| format!("vend_core={level},vend_cli={level},vend_domain={level}"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
