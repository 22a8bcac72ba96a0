//! Delimiter-joined input: two text payloads carried over one stream.

use crate::errors::AppError;

/// Separator line between the resume and the job description.
pub const DELIMITER: &str = "\n---DELIMITER---\n";

/// Splits `raw` into its two payloads. Exactly one delimiter must be present.
pub fn split_pair(raw: &str) -> Result<(String, String), AppError> {
    let parts: Vec<&str> = raw.split(DELIMITER).collect();
    match parts.as_slice() {
        [first, second] => Ok((first.to_string(), second.to_string())),
        _ => Err(AppError::InvalidInput(format!(
            "expected exactly one ---DELIMITER--- line between resume and job description, found {}",
            parts.len() - 1
        ))),
    }
}

/// Inverse of [`split_pair`].
pub fn join_pair(first: &str, second: &str) -> String {
    format!("{first}{DELIMITER}{second}")
}

/// Single-payload input (job description only). Blank input yields `None`.
pub fn single(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
