//! # Bourse Digest
//!
//! Scrapes financial news from two sections of Investir / Les Echos,
//! summarizes each article with a word-frequency extractive summarizer,
//! scores its sentiment with a lexicon, and prints a colour-coded listing.
//!
//! ## Usage
//!
//! ```sh
//! bourse_digest                       # listing only
//! bourse_digest --show 3              # detail view of entry 3
//! bourse_digest -j ./json -m ./markdown
//! ```
//!
//! ## Architecture
//!
//! 1. **Indexing**: read article links from each section listing page
//! 2. **Fetching**: download every article page (sentinel record on failure)
//! 3. **Processing**: normalize, summarize, classify (one article at a time)
//! 4. **Merging**: primary section whole, every n-th secondary article, dedupe by title
//! 5. **Output**: terminal listing or detail view, optional JSON and Markdown editions

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::io::IsTerminal;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod dedupe;
mod error;
mod http;
mod models;
mod nlp;
mod outputs;
mod pipeline;
mod scrapers;
mod sentiment;
mod summarizer;
mod utils;

use cli::Cli;
use config::PipelineConfig;
use error::ConfigError;
use http::{HttpFetcher, RetryFetch};
use models::FrontPage;
use nlp::{Segmenter, StopWords};
use outputs::{json, markdown, terminal};
use pipeline::Pipeline;
use sentiment::{LexiconSource, SentimentClassifier};
use summarizer::Summarizer;
use utils::{ensure_writable_dir, time_of_day};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("bourse_digest starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Configuration ----
    let mut config = PipelineConfig::load(args.config.as_deref()).await?;
    if let Some(ratio) = args.ratio {
        config.summary_ratio = ratio;
        config.validate()?;
    }

    // Early check: output dirs must be writable before any scraping happens
    for dir in [&args.json_output_dir, &args.markdown_output_dir]
        .into_iter()
        .flatten()
    {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    }

    // ---- Language resources ----
    let stop_words = match &config.stopwords_path {
        Some(path) => StopWords::load(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?,
        None => StopWords::french(),
    };
    info!(count = stop_words.len(), "Loaded stop-words");
    let summarizer = Summarizer::new(Segmenter::new(stop_words));

    let lexicon = match &config.lexicon_path {
        Some(path) => LexiconSource::File(path.clone()),
        None => LexiconSource::Embedded,
    };
    let classifier = SentimentClassifier::new(lexicon);

    // ---- Run ----
    let fetcher = RetryFetch::new(
        HttpFetcher::new(&config.http)?,
        config.http.max_retries,
        Duration::from_millis(config.http.base_delay_ms),
    );
    let pipeline = Pipeline::new(fetcher, config, summarizer, classifier);
    let articles = match pipeline.run().await {
        Ok(articles) => articles,
        Err(e) => {
            error!(error = %e, "Pipeline run failed");
            return Err(e.into());
        }
    };

    let now = Local::now();
    let front_page = FrontPage {
        local_date: now.date_naive().to_string(),
        time_of_day: time_of_day(),
        local_time: now.time().format("%H:%M:%S").to_string(),
        articles,
    };
    info!(
        time_of_day = %front_page.time_of_day,
        local_date = %front_page.local_date,
        articles = front_page.articles.len(),
        "FrontPage assembled"
    );

    // ---- Terminal ----
    let color = std::io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }
    match args.show {
        Some(index) => {
            let Some(article) = front_page.select(index) else {
                error!(index, available = front_page.articles.len(), "No article at this index");
                return Err(format!(
                    "no article at index {index} ({} available)",
                    front_page.articles.len()
                )
                .into());
            };
            print!("{}", terminal::render_detail(article, color));
        }
        None => print!("{}", terminal::render_listing(&front_page, color)),
    }

    // ---- Files ----
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_frontpage(&front_page, dir).await {
            error!(error = %e, "Failed to write JSON edition");
        }
    }
    if let Some(dir) = &args.markdown_output_dir {
        if let Err(e) = markdown::write_frontpage(&front_page, dir).await {
            error!(error = %e, "Failed to write Markdown edition");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
