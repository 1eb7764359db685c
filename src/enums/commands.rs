use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    Init,
    Analyze {
        /// Source file to analyze; reads stdin when omitted
        file: Option<PathBuf>,
        #[clap(short, long)]
        language: Option<String>,
        #[clap(short, long)]
        context: Option<String>,
    },
    Validate,
    /// Show analyses recorded in this session; history is in-memory and not kept across runs
    History {
        /// Maximum entries to show; defaults to output.history_limit from the config
        #[clap(short, long)]
        limit: Option<usize>,
    },
}
