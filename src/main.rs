//! simplecalc — four-function calculator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use simplecalc::calculator;
use simplecalc::config::Config;
use simplecalc::constants;
use simplecalc::env::Env;
use simplecalc::output::OutputRenderer;
use simplecalc::session::Session;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::args::{Cli, Command, EvalArgs};

fn main() {
    init_tracing();

    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

/// Log to stderr so stdout carries only results.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

/// Dispatch the parsed command and return the process exit code.
fn run() -> Result<i32> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config =
        Config::load(Some(&cwd), &Env::real()).context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    tracing::debug!(?config, "configuration resolved");

    if !config.output.color {
        colored::control::set_override(false);
    }
    let renderer = config
        .output
        .format
        .renderer(config.output.precision, config.output.color);

    match cli.command {
        Command::Eval(args) => run_eval(&args, renderer.as_ref()),
        Command::Repl => run_repl(renderer.as_ref()),
        Command::Ops => {
            print!("{}", cli::operations_listing());
            Ok(0)
        }
        Command::Version => run_version(),
    }
}

/// Evaluate once. Exits non-zero when the calculation produced an error.
fn run_eval(args: &EvalArgs, renderer: &dyn OutputRenderer) -> Result<i32> {
    let evaluation = calculator::evaluate(&args.left, &args.right, &args.operation);
    println!("{}", renderer.render(&evaluation));
    Ok(if evaluation.is_ok() { 0 } else { 1 })
}

/// Run the interactive session over stdin/stdout.
fn run_repl(renderer: &dyn OutputRenderer) -> Result<i32> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = Session::new(stdin.lock(), stdout.lock(), renderer)
        .run()
        .context("interactive session failed")?;
    tracing::info!(
        evaluations = summary.evaluations,
        errors = summary.errors,
        rejected = summary.rejected,
        "session finished"
    );
    Ok(0)
}

/// Print version and build information.
fn run_version() -> Result<i32> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(0)
}
