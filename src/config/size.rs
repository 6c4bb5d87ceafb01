//! Minimum-size threshold parsing
//!
//! Accepts plain numbers (`500`, `2.5`) or numbers with a single decimal
//! metric suffix (`1K`, `1.5G`, `3t`). Multipliers are powers of 1000.

use crate::error::ScanError;

/// Map a trailing suffix letter to its multiplier
fn suffix_multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'K' | 'k' => Some(1e3),
        'M' | 'm' => Some(1e6),
        'G' | 'g' => Some(1e9),
        'T' | 't' => Some(1e12),
        _ => None,
    }
}

/// Parse a human-entered size such as `1.5G` into a byte count.
///
/// ```
/// use fuzzdup::config::parse_size;
///
/// assert_eq!(parse_size("1K").unwrap(), 1000.0);
/// assert_eq!(parse_size("1.5G").unwrap(), 1.5e9);
/// assert!(parse_size("K").is_err());
/// ```
pub fn parse_size(input: &str) -> Result<f64, ScanError> {
    let trimmed = input.trim();

    let (number, multiplier) = match trimmed.chars().last().and_then(suffix_multiplier) {
        Some(multiplier) => (&trimmed[..trimmed.len() - 1], multiplier),
        None => (trimmed, 1.0),
    };

    let value: f64 = number.parse().map_err(|e: std::num::ParseFloatError| {
        ScanError::InvalidSizeFormat {
            input: input.to_string(),
            reason: e.to_string(),
        }
    })?;

    let bytes = value * multiplier;
    if !bytes.is_finite() {
        return Err(ScanError::InvalidSizeFormat {
            input: input.to_string(),
            reason: "size must be a finite number".to_string(),
        });
    }
    if bytes < 0.0 {
        return Err(ScanError::InvalidSizeFormat {
            input: input.to_string(),
            reason: "size cannot be negative".to_string(),
        });
    }

    Ok(bytes)
}
