//! Size-with-unit text parsing.

const MIB: u64 = 1024 * 1024;

/// Parse a size string like "144MB" or "0.5GB" into whole MB.
///
/// Stores report sizes as human-readable text where the decimal spellings
/// are binary multiples (1KB = 1024B). A bare number is taken as bytes.
/// Anything unparseable degrades to `fallback` so threshold lookups stay
/// infallible.
pub fn parse_mb_from_text(text: &str, fallback: u64) -> u64 {
    match parse_bytes(text) {
        Some(bytes) => bytes / MIB,
        None => fallback,
    }
}

fn parse_bytes(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let unit_start = text
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(text.len());
    let (mantissa, unit) = text.split_at(unit_start);

    let value: f64 = mantissa.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    let multiplier: u64 = match unit.trim().to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "KB" | "KIB" => 1 << 10,
        "MB" | "MIB" => 1 << 20,
        "GB" | "GIB" => 1 << 30,
        "TB" | "TIB" => 1 << 40,
        _ => return None,
    };

    Some((value * multiplier as f64) as u64)
}
