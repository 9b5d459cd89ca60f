use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::labels::Language;

pub const LABELS_FILE: &str = "labels.json";
pub const INDEX_METADATA_FILE: &str = "index_metadata.json";
pub const BANKS_FILE: &str = "banks-master.json";

/// Locations of the three input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub labels: PathBuf,
    pub index_metadata: PathBuf,
    pub banks: PathBuf,
}

impl DataPaths {
    /// The standard file names inside `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        DataPaths {
            labels: dir.join(LABELS_FILE),
            index_metadata: dir.join(INDEX_METADATA_FILE),
            banks: dir.join(BANKS_FILE),
        }
    }
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "bank-beta-dashboard", about = "Bank beta vs. market cap dashboard")]
pub struct Cli {
    /// Directory holding labels.json, index_metadata.json and banks-master.json
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Override the labels file
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Override the index metadata file
    #[arg(long)]
    pub index_metadata: Option<PathBuf>,

    /// Override the bank master data file
    #[arg(long)]
    pub banks: Option<PathBuf>,

    /// TrueType/OpenType font for Tamil text (default: search system fonts)
    #[arg(long)]
    pub font: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the dashboard window (default)
    Gui,
    /// Write a country's spreadsheet without opening a window
    Export {
        #[arg(long)]
        country: String,
        #[arg(long, value_parser = parse_language, default_value = "English")]
        language: Language,
        /// Defaults to bank_beta_<country>.xlsx in the current directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a country's chart and table description as JSON
    Describe {
        #[arg(long)]
        country: String,
        #[arg(long, value_parser = parse_language, default_value = "English")]
        language: Language,
    },
}

impl Cli {
    pub fn data_paths(&self) -> DataPaths {
        let defaults = DataPaths::from_dir(&self.data_dir);
        DataPaths {
            labels: self.labels.clone().unwrap_or(defaults.labels),
            index_metadata: self.index_metadata.clone().unwrap_or(defaults.index_metadata),
            banks: self.banks.clone().unwrap_or(defaults.banks),
        }
    }
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::ALL
        .into_iter()
        .find(|l| l.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown language {s:?}, expected English or Tamil"))
}
