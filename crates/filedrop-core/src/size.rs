//! Human-readable byte counts.

/// Units in increasing powers of 1024.
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Binary unit step.
const STEP: u64 = 1024;

/// Format a byte count as a short human-readable string.
///
/// Picks the largest unit from [`UNITS`] whose scaled value is at least
/// 1, rounds to two decimal places, and drops trailing zeros:
///
/// | bytes       | output      |
/// |-------------|-------------|
/// | `0`         | `0 Bytes`   |
/// | `1536`      | `1.5 KB`    |
/// | `1_048_576` | `1 MB`      |
///
/// Sizes of 1024 TB and above stay in TB.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0 Bytes");
    }

    // Integer search for floor(log1024(bytes)) avoids float error at
    // exact powers of 1024.
    let mut unit = 0;
    let mut divisor = 1_u64;
    while unit < UNITS.len() - 1 && bytes / divisor >= STEP {
        divisor *= STEP;
        unit += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64 / divisor as f64;
    let rounded = (value * 100.0).round() / 100.0;

    // f64's Display already omits trailing zeros ("1", "2.5").
    format!("{rounded} {}", UNITS[unit])
}
