use crate::shared::date::RecordDate;
use std::cmp::Ordering;

/// Value of one record field as seen by the filter and sort stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    /// Whole-rupiah amount
    Money(i64),
    Date(RecordDate),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text used by contains/equals predicates and by the renderer
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Money(amount) => format_rupiah(*amount),
            Self::Date(date) => date.raw().to_string(),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Integer(_) | Self::Money(_) => 0,
            Self::Date(_) => 1,
            Self::Text(_) => 2,
        }
    }

    /// Total order used by the sort stage.
    ///
    /// Numbers compare numerically, text by code point (not locale aware),
    /// dates by parsed day with unparseable dates first. Mixed kinds order by
    /// kind.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a) | Self::Money(a), Self::Integer(b) | Self::Money(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.day().cmp(&b.day()),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

/// Format an amount as `Rp 1.500.000` (dot thousands separators)
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Parse a rupiah display string (`Rp 1.500.000`, `1.500.000`, `Rp1500000`).
///
/// Fractional cents after a comma are dropped.
pub fn parse_rupiah(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let rest = rest
        .strip_prefix("Rp")
        .or_else(|| rest.strip_prefix("rp"))
        .or_else(|| rest.strip_prefix("RP"))
        .unwrap_or(rest)
        .trim();
    let whole = rest.split(',').next().unwrap_or(rest);

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let digits: String = whole.chars().filter(|c| c.is_ascii_digit()).collect();
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
