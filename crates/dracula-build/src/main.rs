//! Writes the Dracula theme variants.
//!
//! ```text
//! dracula-build [--source src/dracula.yml] [--out-dir theme] [--variant soft]...
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG`; without it the level comes
//! from `-v` / `-q`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use dracula_theme::config::{DEFAULT_OUT_DIR, DEFAULT_SOURCE};
use dracula_theme::{build, BuildConfig, Variant};
use tracing_subscriber::EnvFilter;

/// Generate base, soft and high-contrast theme JSON from a YAML palette.
#[derive(Debug, Parser)]
#[command(name = "dracula-build", version, about)]
struct Cli {
    /// Palette source file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Directory the theme files are written to.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Only write this variant (base, soft, high-contrast). Repeatable.
    #[arg(long = "variant", value_name = "NAME")]
    variants: Vec<Variant>,

    /// Write files one at a time instead of in parallel.
    #[arg(long)]
    sequential: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    fn config(&self) -> BuildConfig {
        let config = BuildConfig::new()
            .with_source(&self.source)
            .with_out_dir(&self.out_dir)
            .with_variants(self.variants.iter().copied());
        if self.sequential {
            config.sequential()
        } else {
            config
        }
    }
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let report = build(&config).with_context(|| {
        format!(
            "failed to build themes from {} into {}",
            config.source.display(),
            config.out_dir.display()
        )
    })?;
    tracing::info!(files = report.written.len(), "done");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
