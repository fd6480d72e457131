//! Command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fonty_catalog::Configuration;

/// fonty - font directory listing adaptor
///
/// Examples:
///   fonty adapt webfonts.json --strip-khmer --spread    # One entry per variant
///   curl ... | fonty adapt --spread --strip-italic      # Upright variants only
///   fonty url --key $API_KEY --sort popularity          # Listing request URL
#[derive(Parser, Debug)]
#[command(name = "fonty")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log filter (trace, debug, info, warn, error or a RUST_LOG directive)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Adapt a listing and write it as JSON
    Adapt(AdaptArgs),

    /// Print the listing request URL
    Url(UrlArgs),
}

#[derive(Args, Debug, Default)]
pub struct AdaptArgs {
    /// Listing document (API response or array of records); stdin if absent or `-`
    pub input: Option<PathBuf>,

    /// Drop families covering the Khmer script
    #[arg(long)]
    pub strip_khmer: bool,

    /// Skip italic variants when spreading
    #[arg(long)]
    pub strip_italic: bool,

    /// Emit one entry per variant
    #[arg(long)]
    pub spread: bool,

    /// JSON configuration file (`{"stripKhmer": true, ...}`), combined with the flags
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl AdaptArgs {
    /// Options given as flags
    pub fn flags(&self) -> Configuration {
        Configuration::new()
            .strip_khmer(self.strip_khmer)
            .strip_italic(self.strip_italic)
            .spread(self.spread)
    }

    /// Input path, `None` for stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Directory API key
    #[arg(long, env = "FONTY_API_KEY")]
    pub key: String,

    /// Sort order (trending, popularity, date, alpha); unknown names use trending
    #[arg(long, default_value = "trending")]
    pub sort: String,
}
