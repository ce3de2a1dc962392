use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

mod config;
mod feed;
mod fetch;
mod output;
mod telemetry;

use config::FetchConfig;
use feed::Rendered;
use fetch::Source;
use telemetry::ops::read::Phase as ReadPhase;

#[derive(Parser, Debug)]
#[command(name = "rss-reader", version, about = "Command-line RSS reader")]
struct Cli {
    /// RSS URL, local file path, or `-` for stdin (stdin when omitted)
    source: Option<String>,
    /// Print result as JSON in stdout
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Limit news topics if this parameter provided
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    // logging goes to stderr. Respect RUST_LOG and RSS_LOG_FORMAT
    telemetry::config::init_tracing();
    let cfg = FetchConfig::from_env();

    let source = match cli.source.as_deref() {
        Some(s) => Source::parse(s)?,
        None => Source::Stdin,
    };

    let rendered = run(&source, &cfg, cli.limit, cli.json).await?;
    output::emit_stdout(&rendered)?;
    Ok(())
}

/// Fetch, parse and render one feed. Nothing is printed here, so a failure
/// leaves stdout untouched.
async fn run(source: &Source, cfg: &FetchConfig, limit: Option<i64>, as_json: bool) -> Result<Rendered> {
    let log = telemetry::read();
    let _g = log.root_span_kv([
        ("source", source.to_string()),
        ("limit", format!("{:?}", limit)),
        ("json", as_json.to_string()),
    ]).entered();

    let xml = { let _s = log.span(&ReadPhase::Fetch).entered(); fetch::load(source, cfg).await? };
    log.debug_kv("fetched", [("bytes", xml.len().to_string())]);

    let record = { let _s = log.span(&ReadPhase::Parse).entered(); feed::parse(&xml)? };

    let rendered = {
        let _s = log.span_kv(&ReadPhase::Render, [("format", if as_json { "json" } else { "text" }.to_string())]).entered();
        feed::render(&record, limit, as_json)?
    };
    log.feed_summary(&record.title, record.items.len(), feed::render::limited(&record.items, limit).len());
    Ok(rendered)
}
