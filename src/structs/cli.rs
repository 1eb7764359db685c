use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "neuralint")]
#[clap(about = "AI-powered code review client", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
