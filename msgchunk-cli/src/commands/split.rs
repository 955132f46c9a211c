//! Split command implementation

use crate::error::CliError;
use crate::output::{ChunkFormatter, JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::store::FileStore;
use anyhow::Result;
use clap::Args;
use msgchunk_core::{ChunkSplitter, DEFAULT_MAX_CHUNK_LEN};
use msgchunk_session::{copy_payload, PersistenceAdapter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Chunk length limit in bytes
    #[arg(short, long, value_name = "BYTES", default_value_t = DEFAULT_MAX_CHUNK_LEN)]
    pub max_length: usize,

    /// Emit copy payloads (trailing marker after non-final chunks)
    /// instead of bare chunk contents
    #[arg(long)]
    pub marker: bool,

    /// Persist the input text so a later run can --restore it
    #[arg(long)]
    pub save: bool,

    /// Read the text from the persistence store instead of the input
    #[arg(long, conflicts_with = "input")]
    pub restore: bool,

    /// Persistence store file (default: platform data directory)
    #[arg(long, value_name = "FILE")]
    pub store_path: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Chunk contents separated by --- lines
    Text,
    /// JSON array of chunks with metadata
    Json,
    /// Numbered chunk sections with a summary
    Markdown,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let text = self.read_text()?;
        let splitter = ChunkSplitter::new(self.max_length);
        let chunks = splitter.split(&text);
        log::info!(
            "split {} bytes into {} chunks (limit {})",
            text.len(),
            chunks.len(),
            splitter.max_chunk_len()
        );

        if self.save {
            let mut adapter = PersistenceAdapter::new(self.open_store()?);
            adapter
                .save(&text)
                .map_err(|e| CliError::StoreError(e.to_string()))?;
            log::debug!("saved {} bytes to the store", text.len());
        }

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(fs::File::create(path)?),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter: Box<dyn ChunkFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for chunk in &chunks {
            let payload = if self.marker {
                copy_payload(chunk)
            } else {
                chunk.content.clone()
            };
            formatter.format_chunk(chunk, &payload)?;
        }
        formatter.finish()
    }

    /// Resolve the text to split
    fn read_text(&self) -> Result<String> {
        if self.restore {
            let adapter = PersistenceAdapter::new(self.open_store()?);
            let stored = adapter
                .load()
                .map_err(|e| CliError::StoreError(e.to_string()))?;
            return stored.ok_or_else(|| CliError::NoSavedText.into());
        }

        match &self.input {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                Ok(fs::read_to_string(path)?)
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    fn open_store(&self) -> Result<FileStore> {
        let path = self
            .store_path
            .clone()
            .or_else(FileStore::default_path)
            .ok_or_else(|| CliError::StoreError("no usable store location".to_string()))?;
        FileStore::open(path).map_err(|e| CliError::StoreError(e.to_string()).into())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
