//! Wordbank CLI
//!
//! Turns a text or HTML document (local file or URL) into a comma-separated
//! word list for drawing-guessing games.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::PathBuf;
use std::time::Duration;
use wordbank::source::read_file;
use wordbank::{
    read_document, Config, Denylist, Dictionary, DocumentSource, HttpFetcher,
    LengthBounds, OutputSink, PipelineReport, Result, TextExtractor, WordFilterPipeline,
};

#[derive(Parser)]
#[command(name = "wordbank")]
#[command(author = "Wordbank Contributors")]
#[command(version)]
#[command(about = "Parse any text or web page into a drawing-game word list", long_about = None)]
struct Cli {
    /// File path or http(s) URL to parse
    source: String,

    /// Remove words with fewer than this number of characters (default: 4)
    #[arg(short = 'l', long)]
    min_characters: Option<usize>,

    /// Remove words with more than this number of characters (default: 11)
    #[arg(short = 'u', long)]
    max_characters: Option<usize>,

    /// Remove any words that are in this file
    #[arg(short, long = "denylist-file")]
    denylist: Option<PathBuf>,

    /// Reference dictionary, whitespace-delimited (default: /usr/share/dict/words)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Write the word list to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the raw downloaded document to this file
    #[arg(long)]
    save_page: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the strict markup parser and strip tags leniently
    #[arg(long)]
    lenient: bool,

    /// Fold accented letters to their base letter ("café" -> "cafe")
    #[arg(long)]
    fold_diacritics: bool,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print per-stage word counts to stderr
    #[arg(long)]
    stats: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = run(cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Merges the configuration file (if any) with command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if let Some(min) = cli.min_characters {
        config.filter.min_characters = min;
    }
    if let Some(max) = cli.max_characters {
        config.filter.max_characters = max;
    }
    if let Some(path) = &cli.dictionary {
        config.dictionary.path = path.clone();
    }
    if let Some(path) = &cli.denylist {
        config.dictionary.denylist = Some(path.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.fetch.timeout_secs = timeout;
    }
    if cli.lenient {
        config.text.strict_markup = false;
    }
    if cli.fold_diacritics {
        config.text.fold_diacritics = true;
    }

    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    // Load word sets before touching the document so a bad denylist fails fast
    let dictionary = Dictionary::load(&config.dictionary.path)?;
    let denylist = Denylist::load_optional(config.dictionary.denylist.as_ref())?;

    let source = DocumentSource::parse(&cli.source);
    let raw = fetch_with_spinner(&source, &config)?;

    if let Some(path) = &cli.save_page {
        std::fs::write(path, &raw)?;
        info!("Saved raw document to {}", path.display());
    }

    let extractor = TextExtractor::new(config.text.clone());
    let pipeline = WordFilterPipeline::new(
        LengthBounds::from(config.filter.clone()),
        &dictionary,
        denylist.as_ref(),
    );

    let candidates = extractor.extract(&raw);
    let (words, report) = pipeline.run_with_report(&candidates);

    if cli.stats {
        print_stats(&report);
    }
    if words.is_empty() {
        warn!("No words from {} survived filtering", source);
    }

    let sink = OutputSink::from_path(cli.output.clone());
    sink.write(&words)?;
    if let OutputSink::File(path) = &sink {
        info!("Wrote {} words to {}", words.len(), path.display());
    }

    Ok(())
}

fn fetch_with_spinner(source: &DocumentSource, config: &Config) -> Result<String> {
    if let DocumentSource::File(path) = source {
        return read_file(path);
    }
    let fetcher = HttpFetcher::new(&config.fetch)?;

    let spinner_style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style);
    pb.set_message(format!("Fetching {}...", source));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = read_document(source, &fetcher);
    pb.finish_and_clear();
    result
}

fn print_stats(report: &PipelineReport) {
    eprintln!("Candidates:        {}", report.candidates);
    eprintln!("After length:      {}", report.after_length);
    eprintln!("After dictionary:  {}", report.after_dictionary);
    eprintln!("After denylist:    {}", report.after_denylist);
}
