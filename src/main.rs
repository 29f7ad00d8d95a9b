use anyhow::Context;
use clap::{Parser, ValueEnum};
use routenorm::{Config, FeedSource, InputFormat, Pipeline, Policy};
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "routenorm",
    about = "Normalize routing telemetry events into typed JSON lines"
)]
struct Cli {
    /// Raw event feed. Omit or pass `-` to read stdin.
    input: Option<PathBuf>,

    /// Input line format (overrides `[input] format`).
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Config file to layer over the defaults. Must exist when given.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print each output event.
    #[arg(long)]
    pretty: bool,

    /// Abort on the first unrecognized or malformed event.
    #[arg(long)]
    strict: bool,

    /// Log at debug level.
    #[arg(long)]
    debug: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Aloha,
    Jsonl,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Aloha => InputFormat::Aloha,
            FormatArg::Jsonl => InputFormat::Jsonl,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(format) = cli.format {
        config.input.format = format.into();
    }
    if cli.pretty {
        config.output.pretty = true;
    }
    if cli.strict {
        config.pipeline.on_unknown = Policy::Fail;
        config.pipeline.on_error = Policy::Fail;
    }

    let source = FeedSource::from_arg(cli.input);
    let reader = routenorm_feeds::open(&source)
        .with_context(|| format!("failed to open feed {source}"))?;
    let stdout = std::io::stdout().lock();

    let summary = Pipeline::new(config).run(reader, BufWriter::new(stdout))?;
    tracing::info!(
        %source,
        lines = summary.lines,
        normalized = summary.normalized,
        ignored = summary.ignored,
        unrecognized = summary.unrecognized,
        failed = summary.failed,
        "run summary"
    );
    Ok(())
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    // The run summary is logged at info, so it shows without --debug.
    let default_level = if cli.debug { "debug" } else { "warn,routenorm=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}
