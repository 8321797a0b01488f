//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Build trees of named text elements and render them as indented markup
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the builder: plain, fluent, conversion, clear
    Demo,

    /// Build a one-level tree from arguments
    Build {
        /// Root element name
        root: String,
        /// Child as name=text (name alone for empty text), repeatable
        #[arg(short, long = "child", value_name = "NAME=TEXT")]
        children: Vec<String>,
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render a tree defined in a TOML file
    Render {
        /// Tree definition file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show version and effective settings
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Output overrides shared by rendering commands
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Spaces per level in markup output (overrides config)
    #[arg(short, long, value_parser = clap::value_parser!(usize))]
    pub indent: Option<usize>,
}
