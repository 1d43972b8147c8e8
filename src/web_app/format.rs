// web_app/format.rs - Display formatting shared by components

/// US-dollar price with thousands separators and no cents: `$1,250,000`.
pub fn format_price(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Price per square foot, rounded to the nearest dollar.
///
/// Returns `None` for a zero area.
pub fn price_per_sqft(price: u64, area: u32) -> Option<u64> {
    if area == 0 {
        return None;
    }
    let area = u64::from(area);
    Some((price + area / 2) / area)
}

/// "1 property found" / "12 properties found"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 property found".to_string()
    } else {
        format!("{} properties found", count)
    }
}

/// Cut `text` to at most `max_chars` characters, appending "..." when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
