// --- Command-Line Arguments Struct ---
// Lives in the library so tests can parse it.
use crate::publisher_logic::PublishPolicy;
use crate::utils::logging::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the broker config JSON file
    #[arg(short, long, default_value = "./config.json")]
    pub config: PathBuf,

    /// Path to the file whose contents are published
    #[arg(short, long, default_value = "./message.json")]
    pub message: PathBuf,

    /// What to do when publishing to one queue fails
    #[arg(long, value_enum, default_value_t = PublishPolicy::BestEffort)]
    pub on_publish_error: PublishPolicy,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Wait for Enter before exiting (handy when launched from a desktop shortcut)
    #[arg(long)]
    pub pause_on_exit: bool,
}
