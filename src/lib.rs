pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::SeedConfig;
pub use core::{AuthorId, AuthorView, BookId, BookView, ContractId, ContractView, Registry};
pub use utils::error::{LedgerError, Result};
