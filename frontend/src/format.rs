//! Number formatting for the KPI cards and the table.

/// `1234567` -> `"1,234,567"`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimals followed by `%`
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}
