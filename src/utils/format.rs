//! Human-readable byte counts for file rows and the guide table: whole
//! bytes, then one decimal for KB and MB.

pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 3] = ["B", "KB", "MB"];
    let mut value = size as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{size} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
