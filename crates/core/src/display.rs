//! Presentation formulas shared with the frontend: currency strings,
//! percent strings, heatmap cell intensity, and the chart color palette.
//! The only invariants here are determinism of the color assignment
//! (`index % palette size`) and the intensity formula.

/// Line colors for the chart, assigned by rank index modulo palette size.
pub const CHAIN_COLORS: [&str; 10] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#0088fe",
    "#00C49F", "#FFBB28", "#FF8042", "#a4de6c", "#d0ed57",
];

/// Color for the chain at a given rank index.
#[must_use]
pub fn chain_color(index: usize) -> &'static str {
    CHAIN_COLORS[index % CHAIN_COLORS.len()]
}

/// Format a fee value as a dollar amount with thousands separators and
/// no decimals, e.g. `1234567.8` → `"$1,234,568"`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a change percentage with two decimals, `"-"` for missing data.
#[must_use]
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(pct) => format!("{pct:.2}%"),
        None => "-".to_string(),
    }
}

/// Heatmap cell intensity: `min(log10(value) × 20, 100)`, clamped to
/// `[0, 100]`; zero when the value is absent or not positive.
#[must_use]
pub fn heatmap_intensity(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v > 0.0 => (v.log10() * 20.0).clamp(0.0, 100.0),
        _ => 0.0,
    }
}
