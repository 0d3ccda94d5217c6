//! Pretty-printers for the report: byte sizes, durations, and rounded
//! floats rendered with minimal decimals.

/// Rounds to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Rounds, then renders with minimal decimals. Integral values keep one
/// trailing zero ("2.0"), everything else prints as short as possible
/// ("159.58", "0.0123").
pub fn fmt_rounded(value: f64, digits: i32) -> String {
    let rounded = round_to(value, digits);
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        rounded.to_string()
    }
}

pub fn pretty_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    const GIB: u64 = 1024 * MIB;

    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{} KB", fmt_rounded(bytes as f64 / KIB as f64, 2))
    } else if bytes < GIB {
        format!("{} MB", fmt_rounded(bytes as f64 / MIB as f64, 2))
    } else {
        format!("{} GB", fmt_rounded(bytes as f64 / GIB as f64, 2))
    }
}

pub fn pretty_time(seconds: f64) -> String {
    if seconds < 1.0 {
        format!("{} ms", fmt_rounded(seconds * 1000.0, 2))
    } else if seconds < 60.0 {
        format!("{} s", fmt_rounded(seconds, 2))
    } else if seconds < 3600.0 {
        format!("{} m", fmt_rounded(seconds / 60.0, 2))
    } else {
        format!("{} h", fmt_rounded(seconds / 3600.0, 2))
    }
}
