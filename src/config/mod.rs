pub mod seed;

pub use seed::SeedConfig;

#[cfg(feature = "cli")]
use crate::app::report::ReportFormat;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bookdeal")]
#[command(about = "Query author and book contracts")]
pub struct CliConfig {
    /// Path to a TOML seed file; the built-in sample is used when omitted
    #[arg(long)]
    pub seed: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Contracts signed on an exact date, by author name then book title
    ContractsOn { date: String },
    /// Total royalties for every author
    Royalties,
    /// Distinct books an author has signed for
    BooksOf { author: String },
    /// Distinct authors under contract for a book
    AuthorsOf { title: String },
    /// Every contract in signing order
    Export,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_seed(&self) -> crate::Result<SeedConfig> {
        match &self.seed {
            Some(path) => SeedConfig::from_file(path),
            None => Ok(SeedConfig::sample()),
        }
    }
}
