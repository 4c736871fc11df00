use clap::Parser;
use tracing_subscriber::EnvFilter;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CommandArgs {
    /// Ticks per second driving gravity (the classic pace is 30, one row
    /// per second at the starting fall speed)
    #[clap(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..=240))]
    tick_rate: u64,
    /// Seed for the piece sequence; random when omitted
    #[clap(long)]
    seed: Option<u64>,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    // The guard flushes buffered log lines on drop; keep it for the whole run.
    let _guard = init_logging()?;
    play::run(&args)
}

/// Routes tracing output to a log file; the terminal itself belongs to the
/// game screen.
fn init_logging() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = std::env::temp_dir().join("blockfall");
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::never(&log_dir, "blockfall.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("blockfall_cli=info".parse()?)
                .add_directive("blockfall_engine=info".parse()?),
        )
        .with_ansi(false)
        .init();
    Ok(guard)
}
