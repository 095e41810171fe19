//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Detects the mood of a short text and replies with a supporting quote.
#[derive(Debug, Parser)]
#[command(name = "moodlift")]
#[command(version)]
#[command(about = "Detect the mood of a text and reply with a supporting quote")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quote database file (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Project directory holding `moodlift.toml` (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a text and print a quote for its mood
    Classify(ClassifyArgs),
    /// Read lines from stdin and answer each one
    Interactive,
    /// Create the database and insert the sample quotes if it is empty
    Seed,
    /// Add a quote to the store
    Add(AddArgs),
    /// Show quote counts per mood
    Stats,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Text to classify; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print which rule or fallback branch decided the mood
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Mood label (sad, happy, angry, anxious, exhausted, hopeful, grateful, neutral)
    #[arg(long)]
    pub mood: String,

    /// Quote text
    #[arg(long)]
    pub quote: String,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Comma-separated keywords
    #[arg(long)]
    pub keywords: Option<String>,
}

impl Cli {
    /// Log level implied by `-v` flags, if any were given.
    pub fn verbosity_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

impl ClassifyArgs {
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}
