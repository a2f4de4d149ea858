use crate::core::{AuthorView, BookView, ContractView};
use crate::utils::error::{LedgerError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// A serializable report line with a fixed CSV header.
pub trait ReportRow: Serialize + fmt::Display {
    const HEADER: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractRow {
    pub author: String,
    pub book: String,
    pub date: String,
    pub royalties: u64,
    pub signed_on: Option<NaiveDate>,
}

impl From<ContractView<'_>> for ContractRow {
    fn from(contract: ContractView<'_>) -> Self {
        Self {
            author: contract.author().name().to_string(),
            book: contract.book().title().to_string(),
            date: contract.date().to_string(),
            royalties: contract.royalties(),
            signed_on: contract.record().signed_on(),
        }
    }
}

impl ReportRow for ContractRow {
    const HEADER: &'static [&'static str] = &["author", "book", "date", "royalties", "signed_on"];
}

impl fmt::Display for ContractRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contract(author: {}, book: {}, date: {}, royalties: {})",
            self.author, self.book, self.date, self.royalties
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoyaltyRow {
    pub author: String,
    pub royalties: u128,
}

impl ReportRow for RoyaltyRow {
    const HEADER: &'static [&'static str] = &["author", "royalties"];
}

impl fmt::Display for RoyaltyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author, self.royalties)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorRow {
    pub author: String,
}

impl From<AuthorView<'_>> for AuthorRow {
    fn from(author: AuthorView<'_>) -> Self {
        Self {
            author: author.name().to_string(),
        }
    }
}

impl ReportRow for AuthorRow {
    const HEADER: &'static [&'static str] = &["author"];
}

impl fmt::Display for AuthorRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.author)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRow {
    pub book: String,
}

impl From<BookView<'_>> for BookRow {
    fn from(book: BookView<'_>) -> Self {
        Self {
            book: book.title().to_string(),
        }
    }
}

impl ReportRow for BookRow {
    const HEADER: &'static [&'static str] = &["book"];
}

impl fmt::Display for BookRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.book)
    }
}

/// Renders rows as display lines, a pretty JSON array or CSV. CSV output
/// always starts with the header line, even when there are no rows.
pub fn render<T: ReportRow>(rows: &[T], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(rows.iter().map(|row| format!("{}\n", row)).collect()),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(rows)?;
            json.push('\n');
            Ok(json)
        }
        ReportFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(Vec::new());
            writer.write_record(T::HEADER)?;
            for row in rows {
                writer.serialize(row)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| LedgerError::IoError(e.into_error()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
