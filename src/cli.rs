use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "cloud-loader",
    version,
    about = "Animated cloud loading screen generator"
)]
pub struct Cli {
    /// JSON config file (overrides CLOUD_LOADER_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the layout; random when omitted
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the configured cloud count
    #[arg(long, global = true)]
    pub count: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write the loading page as standalone HTML
    Render(RenderArgs),
    /// Print the generated clouds as JSON
    Dump(DumpArgs),
    /// Animate the loading screen in the terminal
    Preview(PreviewArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Output file; stdout when omitted
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Document title
    #[arg(long, default_value = "Loading")]
    pub title: String,
}

#[derive(Debug, Args, Clone)]
pub struct DumpArgs {
    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args, Clone)]
pub struct PreviewArgs {
    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Freeze the clouds in place
    #[arg(long)]
    pub no_animation: bool,
}
