//! numerales CLI entry point.
//!
//! Provides command-line access to the Spanish number speller:
//! - `numerales spell` - Write a whole number in words
//! - `numerales currency` - Write a currency amount in words
//! - `numerales currencies` - List supported currencies
//! - `numerales info` - Show the locale descriptor

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_currencies, run_currency, run_info, run_spell, CurrenciesArgs, CurrencyArgs, InfoArgs,
    SpellArgs,
};
use miette::MietteHandlerOpts;
use numerales::{Capitalization, Speller};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Spanish numbers and currency amounts in words.
#[derive(Debug, Parser)]
#[command(name = "numerales")]
#[command(about = "Spanish numbers and currency amounts in words", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Letter case of the produced words
    #[arg(long = "case", value_enum, default_value_t = CaseArg::Lower, global = true)]
    pub case: CaseArg,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Letter case selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CaseArg {
    Lower,
    Sentence,
    Upper,
}

impl From<CaseArg> for Capitalization {
    fn from(value: CaseArg) -> Self {
        match value {
            CaseArg::Lower => Capitalization::Lower,
            CaseArg::Sentence => Capitalization::Sentence,
            CaseArg::Upper => Capitalization::Upper,
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a whole number in words
    Spell(SpellArgs),
    /// Write a currency amount in words
    Currency(CurrencyArgs),
    /// List supported currencies
    Currencies(CurrenciesArgs),
    /// Show the locale descriptor
    Info(InfoArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    init_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let speller = Speller::builder()
        .capitalization(cli.case.into())
        .build();
    debug!(command = ?cli.command, "running command");

    let result = match cli.command {
        Commands::Spell(args) => run_spell(args, &speller),
        Commands::Currency(args) => run_currency(args, &speller),
        Commands::Currencies(args) => run_currencies(args),
        Commands::Info(args) => run_info(args, &speller),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::DATAERR);
        }
    }
}
