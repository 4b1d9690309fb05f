//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Routing and search metadata engine for the Best Roofers Now site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: roofsite.toml)
    #[arg(short = 'C', long, default_value = "roofsite.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Replay fragments as navigation events and print the head after each one
    Route {
        /// Fragments such as `#/service/1`. Also accepts `service:<id>`,
        /// `area:<slug>`, `close`, `back` and `@<section>`
        #[arg(required = true)]
        fragments: Vec<String>,

        /// Print the metadata record as JSON instead of rendered HTML
        #[arg(long)]
        json: bool,
    },

    /// Render a head snapshot for every route and write the sitemap
    Build {
        /// Output directory path (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// enable sitemap generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        sitemap: Option<bool>,
    },

    /// Ask the site assistant; each message is one turn of the same conversation
    Chat {
        #[arg(required = true)]
        messages: Vec<String>,
    },

    /// Synthesize speech for a text and save it as a WAV file
    Speak {
        text: String,

        /// Output WAV file
        #[arg(short, long, default_value = "speech.wav")]
        output: PathBuf,
    },

    /// List completed projects with photos for a city
    Projects { city: String },
}
