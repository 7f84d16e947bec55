use std::path::PathBuf;

use clap::Parser;

/// Generate a color palette and font pairing from a word.
#[derive(Parser, Debug)]
#[command(name = "chromaword", version, about)]
pub struct Args {
    /// Seed word for the theme
    pub word: String,

    /// Variation counter; bump by one for a fresh take on the same word
    #[arg(short, long, default_value_t = 0)]
    pub refresh: u32,

    /// Write the CSS theme to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a colored terminal preview of the palette
    #[arg(long)]
    pub preview: bool,

    /// Print the bare declarations for pasting into an existing stylesheet
    #[arg(long, conflicts_with = "output")]
    pub snippet: bool,

    /// Launch interactive TUI mode
    #[arg(long)]
    pub tui: bool,
}
