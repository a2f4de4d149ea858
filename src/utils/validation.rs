use crate::utils::error::{LedgerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LedgerError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Accepts any non-negative amount and returns it as unsigned.
pub fn validate_non_negative(field_name: &str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        LedgerError::validation(field_name, value, "Value must be a non-negative integer")
    })
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(LedgerError::validation(
                field_name,
                value,
                "Value is declared more than once",
            ));
        }
    }
    Ok(())
}
