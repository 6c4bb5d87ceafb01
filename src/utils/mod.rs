//! Utility functions for fuzzdup
//!
//! Human-readable number formatting used by the match report and the
//! progress summaries. Both use decimal (SI) units.

/// Format a byte count with SI units, e.g. `82 kB` or `1.5 MB`.
///
/// Counts below 10 bytes are printed as-is; scaled values below 10 keep one
/// decimal place, larger ones are rounded to an integer.
pub fn format_bytes(size: u64) -> String {
    const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB", "EB"];

    if size < 10 {
        return format!("{} B", size);
    }

    let mut exponent = 0;
    let mut divisor = 1u64;
    while exponent < UNITS.len() - 1 && size / divisor >= 1000 {
        divisor *= 1000;
        exponent += 1;
    }
    let scaled = (size as f64 / divisor as f64 * 10.0 + 0.5).floor() / 10.0;

    if scaled < 10.0 {
        format!("{:.1} {}", scaled, UNITS[exponent])
    } else {
        format!("{:.0} {}", scaled, UNITS[exponent])
    }
}

/// Format a plain number with an SI prefix and no decimals, e.g. `150` or `2 k`
pub fn format_si(value: f64) -> String {
    const PREFIXES: &[(i32, &str)] = &[
        (-9, "n"),
        (-6, "µ"),
        (-3, "m"),
        (0, ""),
        (3, "k"),
        (6, "M"),
        (9, "G"),
        (12, "T"),
        (15, "P"),
        (18, "E"),
    ];

    if value == 0.0 || !value.is_finite() {
        return format!("{:.0}", value);
    }

    let mut exponent = 0;
    let mut magnitude = value.abs();
    while magnitude >= 1000.0 && exponent < 18 {
        magnitude /= 1000.0;
        exponent += 3;
    }
    while magnitude < 1.0 && exponent > -9 {
        magnitude *= 1000.0;
        exponent -= 3;
    }
    let scaled = magnitude.copysign(value);
    let prefix = PREFIXES
        .iter()
        .find(|(exp, _)| *exp == exponent)
        .map_or("", |(_, p)| *p);

    if prefix.is_empty() {
        format!("{:.0}", scaled)
    } else {
        format!("{:.0} {}", scaled, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_small() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(9), "9 B");
        assert_eq!(format_bytes(10), "10 B");
        assert_eq!(format_bytes(999), "999 B");
    }

    #[test]
    fn test_format_bytes_scaled() {
        assert_eq!(format_bytes(1000), "1.0 kB");
        assert_eq!(format_bytes(1500), "1.5 kB");
        assert_eq!(format_bytes(2100), "2.1 kB");
        assert_eq!(format_bytes(82_854), "83 kB");
        assert_eq!(format_bytes(1_500_000_000), "1.5 GB");
        assert_eq!(format_bytes(u64::MAX), "18 EB");
    }

    #[test]
    fn test_format_si() {
        assert_eq!(format_si(0.0), "0");
        assert_eq!(format_si(7.0), "7");
        assert_eq!(format_si(150.0), "150");
        assert_eq!(format_si(2000.0), "2 k");
        assert_eq!(format_si(3_400_000.0), "3 M");
        assert_eq!(format_si(-150.0), "-150");
    }
}
