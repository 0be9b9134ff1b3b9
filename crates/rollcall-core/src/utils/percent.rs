/// Round to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole * 100` rounded to one decimal; 0 when `whole` is 0.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to_tenth(part as f64 / whole as f64 * 100.0)
}

/// `part / whole * 100` rounded to a whole number; 0 when `whole` is 0.
pub fn whole_percent_of(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
