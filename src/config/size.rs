//! Config files write sizes as "500K" or "2M"; rotation works in bytes.

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

const UNITS: &[(&str, u64)] = &[
    ("", 1),
    ("B", 1),
    ("K", KIB),
    ("KB", KIB),
    ("M", MIB),
    ("MB", MIB),
    ("G", GIB),
    ("GB", GIB),
];

/// Parses `"100"`, `"1K"`, `"1.5M"`, `"2 GB"` into bytes. Units are binary and
/// case-insensitive, the same megabyte `max_size_mb` counts in.
#[must_use]
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim();
    let (number, unit) = s.split_at(s.find(|c: char| c.is_ascii_alphabetic()).unwrap_or(s.len()));
    let unit = unit.trim().to_ascii_uppercase();
    let multiplier = UNITS.iter().find(|(name, _)| *name == unit)?.1;

    let n: f64 = number.trim().parse().ok()?;
    // The cast below saturates, which would turn "-1K" into a silent 0.
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let bytes = (n * multiplier as f64) as u64;
    Some(bytes)
}
