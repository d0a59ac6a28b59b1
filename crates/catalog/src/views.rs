//! View-count parsing
//!
//! Videos store their view count the way the app displays it: `"125K"`,
//! `"1.2K"`, `"3,400"`, `"2M"`. [`parse_view_count`] turns those strings into
//! numbers for ranking.
//!
//! Accepted forms:
//! - surrounding whitespace is ignored
//! - `,` and `_` digit separators are removed
//! - an optional `K`, `M` or `B` suffix (any case) multiplies by 10^3, 10^6
//!   or 10^9
//! - the number may have a decimal part (`"1.5M"`), rounded to the nearest
//!   whole view
//!
//! Anything else (empty strings, signs, exponents, `"LIVE"`, several decimal
//! points) counts as zero views.

/// Parses a display view count; unparsable input yields 0
pub fn parse_view_count(display: &str) -> u64 {
    let cleaned: String = display
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    let (mantissa, multiplier) = split_suffix(&cleaned);
    let mantissa = mantissa.trim_end();

    if mantissa.is_empty() || !mantissa.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return 0;
    }

    if !mantissa.contains('.') {
        if let Ok(whole) = mantissa.parse::<u64>() {
            return whole.saturating_mul(multiplier);
        }
    }

    match mantissa.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            // `as` saturates at u64::MAX
            (value * multiplier as f64).round() as u64
        }
        _ => 0,
    }
}

fn split_suffix(cleaned: &str) -> (&str, u64) {
    let multiplier = match cleaned.chars().last() {
        Some('k' | 'K') => 1_000,
        Some('m' | 'M') => 1_000_000,
        Some('b' | 'B') => 1_000_000_000,
        _ => return (cleaned, 1),
    };
    // Suffix characters are single-byte ASCII
    (&cleaned[..cleaned.len() - 1], multiplier)
}
