/// Units for human-readable sizes. Scaling stops at TB, even for values
/// that would exceed 1024 TB.
const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Format a raw byte count into a human-readable string: "1.5 KB"
pub fn fmt_bytes(bytes: u64) -> String {
    let mut v = bytes as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit + 1 < UNITS.len() {
        v /= 1024.0;
        unit += 1;
    }
    // Two-decimal rounding can push a value just under a boundary back up
    // to a displayed "1024"; advance the unit when it does.
    let mut shown = trim_decimals(v);
    while shown == "1024" && unit + 1 < UNITS.len() {
        v /= 1024.0;
        unit += 1;
        shown = trim_decimals(v);
    }
    format!("{} {}", shown, UNITS[unit])
}

/// Byte count as a truncated kilobyte integer, no suffix (exact mode).
pub fn exact_kb(bytes: u64) -> u64 {
    bytes / 1024
}

/// Up to two decimal places, trailing zeros stripped: 1.50 → "1.5", 100.00 → "100"
fn trim_decimals(v: f64) -> String {
    format!("{:.2}", v)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
