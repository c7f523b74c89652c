use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `token` is not a finite real number.
pub fn parse_number(token: &str) -> Result<f64, UtilsError> {
    let trimmed = token.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| UtilsError::InvalidNumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(UtilsError::NonFiniteNumber(trimmed.to_string()));
    }

    Ok(value)
}

/// # Errors
///
/// Returns the error for the first token that does not parse.
pub fn parse_numbers<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<f64>, UtilsError> {
    debug!("Parsing {} number tokens", tokens.len());
    tokens.iter().map(|t| parse_number(t.as_ref())).collect()
}

/// Parse every token, giving up with an empty input on the first bad one.
///
/// An empty input has no solutions, so a typo yields "No solution" rather
/// than an error.
pub fn parse_numbers_lenient<S: AsRef<str>>(tokens: &[S]) -> Vec<f64> {
    match parse_numbers(tokens) {
        Ok(values) => values,
        Err(e) => {
            warn!("Discarding input: {}", e);
            Vec::new()
        }
    }
}
