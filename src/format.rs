use thousands::Separable;

/// `1234567.891` with precision 2 → `"1,234,567.89"`.
pub fn format_number(n: f64, precision: usize) -> String {
    format!("{n:.precision$}").separate_with_commas()
}

/// `1234567.0` with precision 0 → `"$1,234,567"`.
pub fn format_usd(n: f64, precision: usize) -> String {
    format!("${}", format_number(n, precision))
}

/// Formats a percentage.
///
/// Magnitudes below 1 are read as fractions (`0.1234` → `12.34%`), anything
/// else as an already scaled percentage (`12.34` → `12.34%`).
pub fn format_percent(n: f64, precision: usize, show_sign: bool) -> String {
    let pct = if n.abs() < 1.0 { n * 100.0 } else { n };
    if show_sign && pct > 0.0 {
        format!("+{pct:.precision$}%")
    } else {
        format!("{pct:.precision$}%")
    }
}
