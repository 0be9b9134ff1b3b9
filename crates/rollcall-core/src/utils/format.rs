use chrono::NaiveDate;

/// Format a phone number for display
/// Ten-digit mobile numbers are grouped as XXXXX XXXXX, with a +91 prefix
/// when the country code is present.
pub fn format_phone(phone: &str) -> String {
    // Extract just the digits
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => format!("{} {}", &digits[0..5], &digits[5..10]),
        12 if digits.starts_with("91") => format!("+91 {} {}", &digits[2..7], &digits[7..12]),
        _ => phone.to_string(), // Return original if can't format
    }
}

/// Format a percentage with one decimal place
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a date the way the dashboards show it, e.g. "Sep 02, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}
