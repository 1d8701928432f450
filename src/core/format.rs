/// Whole-dollar USD with thousands separators, e.g. `$1,234,567`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Fraction as a percentage with one decimal, e.g. `0.332` -> `33.2%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
