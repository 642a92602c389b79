//! Text formatting helpers for materialized views.

/// Formats a price with thousands grouping, e.g. `12500.5` → `"12,500.5"`.
///
/// Up to three fractional digits are kept, trailing zeros trimmed, matching
/// the locale formatting the storefront displays.
#[must_use]
pub fn format_price(value: f64) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let text = format!("{:.3}", value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (text.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Escapes text for interpolation into an HTML fragment.
///
/// Server-provided names and descriptions pass through here before they are
/// placed in markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
