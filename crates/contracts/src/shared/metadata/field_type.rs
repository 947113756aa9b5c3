//! Column kind enumeration for table metadata

/// How a column's values are filtered, sorted and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,      // free text, contains-searchable
    Category,  // status/badge values, exact-match filterable
    Date,      // normalized display date, range filterable
    Integer,   // plain counts and sequence numbers
    Money,     // integer amount rendered as "Rp 1.500.000"
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Category => "category",
            Self::Date => "date",
            Self::Integer => "integer",
            Self::Money => "money",
        }
    }

    /// Numeric columns are right-aligned and exported as numbers
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Money)
    }
}
