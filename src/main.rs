use std::io::{self, Write};

use anyhow::Context;
use clap::{ArgAction, Parser};
use library_catalog::{Catalog, HistoryFormat, Language, Session, SessionConfig, TracingObserver};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the catalog browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Language of menus, messages and seed titles
    #[arg(long, value_enum, default_value_t = Language::English)]
    lang: Language,

    /// Print plain text without colors
    #[arg(long)]
    no_color: bool,

    /// Log more diagnostics to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print the availability changes made during the session on exit
    #[arg(long, value_enum)]
    history: Option<HistoryFormat>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut catalog = Catalog::seeded(args.lang);
    catalog.register_observer(Box::new(TracingObserver));

    let config = SessionConfig { language: args.lang, color: !args.no_color };
    let mut session = Session::new(catalog, io::stdin().lock(), io::stdout().lock(), config);
    session.run().context("console session failed")?;

    let (catalog, mut output) = session.into_parts();
    if let Some(format) = args.history {
        let rendered =
            catalog.history().render(format, args.lang).context("failed to render history")?;
        writeln!(output, "{rendered}").context("failed to print history")?;
        output.flush().context("failed to print history")?;
    }

    tracing::debug!(changes = catalog.history().len(), "session finished");
    Ok(())
}

/// Send diagnostics to stderr so they never mix with the menu transcript
fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
