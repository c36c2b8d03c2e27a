//! dccseeder - Reads DCC epubs and builds a list of known crawler numbers
//!
//! Every EPUB given on the command line is scanned for crawler references
//! (`Crawler #4,122. “Carl.”`). Mentions are deduplicated by crawler number
//! and the result is written as CSV, one `"<id>","<name>"` line per crawler,
//! in ascending numeric order.
//!
//! ```bash
//! # Print the catalog to stdout
//! dccseeder book1.epub book2.epub
//!
//! # Write to a file, letting later books overwrite conflicting names
//! dccseeder --force -o crawlers.csv *.epub
//!
//! # Log every match, duplicate and skip
//! dccseeder --debug book1.epub
//! ```
//!
//! Diagnostics go to stderr; stdout carries only CSV.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use dccseeder_core::{Seeder, SeederError};
use dccseeder_ebook::{parse_epub, parse_epub_lossy, ParsedEbook};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "dccseeder",
    version,
    about = "Reads DCC epubs and builds a list of known crawler numbers",
    long_about = "dccseeder is a tool to read Dungeon Crawler Carl epubs and build a list of \
                  all the known crawler numbers.\n\n\
                  Defaults can be set in ~/.dccseeder.toml, ./.dccseeder.toml or through \
                  DCCSEEDER_* environment variables; command-line flags win."
)]
struct Args {
    /// EPUB files to scan, in order (empty paths are rejected)
    #[arg(required = true, value_name = "EPUB_FILES")]
    books: Vec<PathBuf>,

    /// Output file for results (default is stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    /// Force overwrite of duplicates
    #[arg(short, long)]
    force: bool,

    /// Skip books and sections that cannot be read instead of aborting
    #[arg(long)]
    continue_on_error: bool,

    /// Read settings from this file instead of discovering .dccseeder.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Effective settings after flags, environment and config files are merged
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    books: Vec<PathBuf>,
    output: Option<PathBuf>,
    debug: bool,
    force: bool,
    continue_on_error: bool,
}

impl Settings {
    /// CLI args > environment > config files > defaults
    fn resolve(args: Args, config: Config) -> Self {
        Self {
            books: args.books,
            output: args.output.or(config.output),
            debug: args.debug || config.debug.unwrap_or(false),
            force: args.force || config.force.unwrap_or(false),
            continue_on_error: args.continue_on_error || config.continue_on_error.unwrap_or(false),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, loaded.config);

    init_logging(settings.debug);
    for path in &loaded.sources {
        log::info!("Using config file: {}", path.display());
    }
    for warning in &loaded.warnings {
        log::warn!("{warning}");
    }

    run(&settings)
}

/// Initialize logging to stderr (stdout is for CSV)
fn init_logging(debug: bool) {
    let default_filter = if debug {
        "info,dccseeder=debug,dccseeder_core=debug,dccseeder_ebook=debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(settings: &Settings) -> Result<()> {
    if settings.debug {
        log::info!("Debug mode enabled.");
    }

    let mut sink = Sink::open(settings.output.as_deref())?;
    let mut seeder = Seeder::new(settings.force);

    for path in &settings.books {
        if let Some(book) = read_book(path, settings.continue_on_error)? {
            scan_book(&mut seeder, &book);
        }
    }

    let stats = seeder.stats();
    log::info!(
        "Scanned {} crawler mentions: {} new, {} duplicate, {} overwritten, {} conflicting",
        stats.total(),
        stats.inserted,
        stats.duplicates,
        stats.overwritten,
        stats.conflicts
    );

    if let Err(err) = seeder.write_csv(&mut sink) {
        let context = match &err {
            SeederError::InvalidKeys { .. } => "Error sorting crawlers",
            SeederError::Io(_) => "Error writing crawlers",
        };
        return Err(anyhow::Error::new(err).context(context));
    }
    sink.finish()?;

    log::info!("Wrote {} crawlers", seeder.catalog().len());
    Ok(())
}

/// CSV destination: a created file, or stdout
enum Sink {
    File(BufWriter<File>),
    Stdout(BufWriter<io::StdoutLock<'static>>),
}

impl Sink {
    fn open(output: Option<&Path>) -> Result<Self> {
        match output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Error creating output file: {}", path.display()))?;
                log::info!("Writing to {:?}", path.display().to_string());
                Ok(Self::File(BufWriter::new(file)))
            }
            None => {
                log::info!("No output flag set, printing to STDOUT.");
                Ok(Self::Stdout(BufWriter::new(io::stdout().lock())))
            }
        }
    }

    /// Flush buffered CSV; a regular output file is also synced to disk.
    fn finish(self) -> Result<()> {
        match self {
            Self::File(writer) => {
                let file = writer
                    .into_inner()
                    .map_err(io::IntoInnerError::into_error)
                    .context("Error closing output file")?;
                let metadata = file.metadata().context("Error closing output file")?;
                if metadata.is_file() {
                    file.sync_all().context("Error closing output file")?;
                }
                Ok(())
            }
            Self::Stdout(mut writer) => writer.flush().context("Error writing to STDOUT"),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File(writer) => writer.write(buf),
            Self::Stdout(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File(writer) => writer.flush(),
            Self::Stdout(writer) => writer.flush(),
        }
    }
}

/// Read one book; `None` when it was skipped under `continue_on_error`
fn read_book(path: &Path, continue_on_error: bool) -> Result<Option<ParsedEbook>> {
    log::debug!("Reading EPUB file: {}", path.display());

    if !continue_on_error {
        let book = parse_epub(path)
            .with_context(|| format!("Error reading EPUB file: {}", path.display()))?;
        return Ok(Some(book));
    }

    match parse_epub_lossy(path) {
        Ok((book, skipped)) => {
            for err in skipped {
                log::error!("{err}, skipping section");
            }
            Ok(Some(book))
        }
        Err(err) => {
            log::error!("{err}, skipping book");
            Ok(None)
        }
    }
}

/// Feed every section of `book` through the seeder, in reading order
fn scan_book(seeder: &mut Seeder, book: &ParsedEbook) {
    for section in &book.sections {
        let stats = seeder.ingest_lines(section.lines());
        if stats.total() > 0 {
            log::debug!(
                "{} / {}: {} crawler mentions",
                book.display_title(),
                section.label(),
                stats.total()
            );
        }
    }
}
