use regex::Regex;

use crate::error::{Error, Result};

/// Hands rendered pattern text to the `regex` crate.
///
/// Nothing is checked before the handoff; any rejection comes from the
/// compiler and is returned together with the offending text.
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern_len = pattern.len() as u64))]
pub fn compile(pattern: &str) -> Result<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Ok(re),
        Err(source) => {
            tracing::event!(tracing::Level::DEBUG, operation = "compile", pattern = %pattern, error = %source);
            Err(Error::Rejected {
                pattern: pattern.to_string(),
                source,
            })
        }
    }
}
