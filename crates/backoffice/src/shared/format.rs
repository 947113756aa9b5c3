/// Thousands separated by dots, as on the list footers
///
/// ```
/// use backoffice::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result
}

/// Width of a cell in terminal columns (one per char)
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Pad `text` to `width`, numbers aligned right
pub fn pad_cell(text: &str, width: usize, align_right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(text)));
    if align_right {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}
