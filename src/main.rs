use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use scp_fetcher::config::Settings;
use scp_fetcher::present::{self, OutputFormat};
use scp_fetcher::{extract, ErrorPolicy, ExtractOptions, ExtractedRecord, ExtractionError};

#[derive(Parser)]
#[command(
    name = "scp_fetcher",
    about = "Fetch SCP-related information from a given SCP Wiki page"
)]
#[command(group(ArgGroup::new("source").required(true).multiple(true).args(["urls", "files"])))]
struct Cli {
    /// URL of a wiki page to fetch from (repeatable)
    #[arg(short = 'u', long = "url", value_name = "URL")]
    urls: Vec<String>,
    /// Saved HTML page to read instead of fetching (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,
    /// Machine-readable output, one line per page
    #[arg(short, long)]
    porcelain: bool,
    /// One JSON object per page
    #[arg(long, conflicts_with = "porcelain")]
    json: bool,
    /// Be more verbose
    #[arg(short, long)]
    verbose: bool,
    /// Do not stop when a page fails (human output only)
    #[arg(short = 'f', long)]
    force_continue: bool,
    /// Print an empty record instead of failing on unreadable pages
    #[arg(short, long)]
    silent: bool,
}

enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    fn label(&self) -> String {
        match self {
            Source::Url(url) => url.clone(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

fn init_tracing(settings: &Settings, verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| settings.log_filter.as_str().into())
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    init_tracing(&settings, cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else if cli.porcelain {
        OutputFormat::Porcelain
    } else {
        OutputFormat::Human
    };
    let options = ExtractOptions {
        on_error: if cli.silent || settings.silent {
            ErrorPolicy::Degrade
        } else {
            ErrorPolicy::Strict
        },
    };
    let client = scp_fetcher::fetch::client(&settings)?;

    let sources: Vec<Source> = cli
        .urls
        .into_iter()
        .map(Source::Url)
        .chain(cli.files.into_iter().map(Source::File))
        .collect();

    let pb = if format == OutputFormat::Human && sources.len() > 1 {
        let pb = ProgressBar::new(sources.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
                .progress_chars("=> "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut failed = 0usize;
    for source in &sources {
        pb.set_message(source.label());
        match process(&client, source, &options).await {
            Ok(record) => {
                let out = present::render(&record, format)?;
                pb.suspend(|| println!("{}", out));
            }
            // Machine-readable runs stop on the first failure.
            Err(e) if format != OutputFormat::Human => return Err(e),
            Err(e) => {
                failed += 1;
                let hint = if e.downcast_ref::<ExtractionError>().is_some() {
                    "Is the page an SCP with correct format?"
                } else {
                    "Is the URL reachable?"
                };
                pb.suspend(|| error!("Exception caught: {:#}! {}", e, hint));
                if !cli.force_continue {
                    break;
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    if failed > 0 {
        anyhow::bail!("{} of {} page(s) failed", failed, sources.len());
    }
    Ok(())
}

async fn process(
    client: &reqwest::Client,
    source: &Source,
    options: &ExtractOptions,
) -> Result<ExtractedRecord> {
    let html = match source {
        Source::Url(url) => scp_fetcher::fetch::fetch_page(client, url).await?,
        Source::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
    };
    let record = extract(&html, options)?;
    Ok(record)
}
