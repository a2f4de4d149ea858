use crate::app::report::{self, AuthorRow, BookRow, ContractRow, ReportFormat, RoyaltyRow};
use crate::config::Command;
use crate::core::Registry;
use crate::utils::error::{LedgerError, Result};

/// Runs one CLI subcommand against `registry` and returns the rendered report.
pub fn run(registry: &Registry, command: &Command, format: ReportFormat) -> Result<String> {
    match command {
        Command::ContractsOn { date } => {
            let rows: Vec<ContractRow> = registry
                .contracts_matching_date(date)
                .into_iter()
                .map(ContractRow::from)
                .collect();
            tracing::info!("Found {} contract(s) on {}", rows.len(), date);
            report::render(&rows, format)
        }
        Command::Royalties => {
            let rows: Vec<RoyaltyRow> = registry
                .royalties_by_author()
                .into_iter()
                .map(|(author, royalties)| RoyaltyRow {
                    author: author.name().to_string(),
                    royalties,
                })
                .collect();
            report::render(&rows, format)
        }
        Command::BooksOf { author } => {
            let author = registry
                .find_author(author)
                .ok_or_else(|| LedgerError::validation("author", author, "No such author"))?;
            let rows: Vec<BookRow> = author.books().into_iter().map(BookRow::from).collect();
            report::render(&rows, format)
        }
        Command::AuthorsOf { title } => {
            let book = registry
                .find_book(title)
                .ok_or_else(|| LedgerError::validation("title", title, "No such book"))?;
            let rows: Vec<AuthorRow> = book.authors().into_iter().map(AuthorRow::from).collect();
            report::render(&rows, format)
        }
        Command::Export => {
            let rows: Vec<ContractRow> = registry.contracts().map(ContractRow::from).collect();
            tracing::info!("Exporting {} contract(s)", rows.len());
            report::render(&rows, format)
        }
    }
}
