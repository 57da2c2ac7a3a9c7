use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use nmon2series::{describe, Format, Input, Output, Settings};

#[derive(Parser, Debug)]
#[command(name = "nmon2series", version)]
#[command(about = "Convert nmon performance reports into time series")]
struct Args {
    /// Path to the nmon report ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Prefix for series names, joined with the hostname by '.'
    #[arg(short, long)]
    prefix: Option<String>,

    /// Leave out the AAA and BBBP message series
    #[arg(long)]
    ignore_text: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print converter metadata as JSON and exit
    #[arg(long, conflicts_with = "input")]
    describe: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "nmon_parser=trace")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for the response
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    if args.describe {
        println!("{}", serde_json::to_string_pretty(&describe())?);
        return Ok(());
    }

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(prefix) = args.prefix {
        settings.emit.prefix = prefix;
    }
    if let Some(format) = args.format {
        settings.format = format;
    }
    settings.emit.ignore_text |= args.ignore_text;
    settings.pretty |= args.pretty;
    tracing::debug!(?settings, "effective settings");

    let input = Input::from_arg(args.input.as_deref());
    let output = args.output.map(Output::File).unwrap_or_default();

    let response = nmon2series::run(&input, &settings, &output)?;
    if response.is_error() {
        bail!("conversion failed: {}", response.error);
    }
    Ok(())
}
