//! SQL identifier validation

use crate::error::{OarfishError, Result};

/// Validate that a SQL identifier (table, column, or index name) is safe.
///
/// Only allows `[a-zA-Z_][a-zA-Z0-9_]*` to prevent SQL injection via
/// identifier manipulation. Returns an error if the identifier is invalid.
pub fn validate_identifier(name: &str, kind: &str) -> Result<()> {
    if name.is_empty() {
        return Err(OarfishError::Identifier(format!(
            "{} name must not be empty",
            kind
        )));
    }
    if name.len() > 128 {
        return Err(OarfishError::Identifier(format!(
            "{} name must be 128 characters or fewer, got {}",
            kind,
            name.len()
        )));
    }
    let mut chars = name.chars();
    let first = chars.next().unwrap(); // safe: name is non-empty
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(OarfishError::Identifier(format!(
            "{} name '{}' must start with a letter or underscore",
            kind, name
        )));
    }
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Err(OarfishError::Identifier(format!(
                "{} name '{}' contains invalid character '{}'. \
                 Only ASCII alphanumeric and underscore are allowed.",
                kind, name, c
            )));
        }
    }
    Ok(())
}
