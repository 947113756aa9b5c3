//! Column metadata types for table screens

use super::field_type::FieldKind;
use super::validation::ValidationRules;
use crate::shared::date::parse_display_date;

/// Metadata for a single displayed column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMetadata {
    /// Field name used by filter/sort (`TableRecord::field_value`)
    pub name: &'static str,
    /// Header label shown on screen and in exports
    pub label: &'static str,
    pub kind: FieldKind,
    pub visible_in_list: bool,
    pub validation: ValidationRules,
}

impl ColumnMetadata {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            visible_in_list: true,
            validation: ValidationRules::none(),
        }
    }

    pub const fn with_validation(mut self, validation: ValidationRules) -> Self {
        self.validation = validation;
        self
    }

    /// Column kept in the record but not rendered in the list
    pub const fn hidden(mut self) -> Self {
        self.visible_in_list = false;
        self
    }

    /// Check if field should be visible in list view
    pub fn visible_in_list(&self) -> bool {
        self.visible_in_list
    }

    /// Check if field is optional in forms
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    pub fn validate_text(&self, value: &str) -> Result<(), String> {
        self.validation.validate_string(value, self.label)
    }

    pub fn validate_number(&self, value: f64) -> Result<(), String> {
        self.validation.validate_number(value, self.label)
    }

    /// A filled-in date must be one of the accepted display formats
    pub fn validate_date(&self, value: &str) -> Result<(), String> {
        self.validate_text(value)?;
        if !value.trim().is_empty() && parse_display_date(value).is_none() {
            return Err(format!("{} is not a valid date", self.label));
        }
        Ok(())
    }
}

/// Find a column by field name
pub fn find_column(
    columns: &'static [ColumnMetadata],
    name: &str,
) -> Option<&'static ColumnMetadata> {
    columns.iter().find(|c| c.name == name)
}

/// Validate a text input against the rules of column `name`
pub fn validate_text_field(
    columns: &'static [ColumnMetadata],
    name: &str,
    value: &str,
) -> Result<(), String> {
    find_column(columns, name).map_or(Ok(()), |c| c.validate_text(value))
}

/// Validate a date input against the rules of column `name`
pub fn validate_date_field(
    columns: &'static [ColumnMetadata],
    name: &str,
    value: &str,
) -> Result<(), String> {
    find_column(columns, name).map_or(Ok(()), |c| c.validate_date(value))
}

/// Validate a numeric input against the rules of column `name`
pub fn validate_number_field(
    columns: &'static [ColumnMetadata],
    name: &str,
    value: f64,
) -> Result<(), String> {
    find_column(columns, name).map_or(Ok(()), |c| c.validate_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[ColumnMetadata] = &[
        ColumnMetadata::new("name", "Nama", FieldKind::Text)
            .with_validation(ValidationRules::required()),
        ColumnMetadata::new("date", "Tanggal", FieldKind::Date)
            .with_validation(ValidationRules::required()),
        ColumnMetadata::new("note", "Catatan", FieldKind::Text).hidden(),
    ];

    #[test]
    fn test_find_column() {
        assert_eq!(find_column(COLUMNS, "date").map(|c| c.label), Some("Tanggal"));
        assert!(find_column(COLUMNS, "missing").is_none());
        assert!(!COLUMNS[2].visible_in_list());
    }

    #[test]
    fn test_validate_date_field() {
        assert!(validate_date_field(COLUMNS, "date", "15-03-2024").is_ok());
        assert_eq!(
            validate_date_field(COLUMNS, "date", "32-13-2024"),
            Err("Tanggal is not a valid date".to_string())
        );
        assert_eq!(
            validate_date_field(COLUMNS, "date", ""),
            Err("Tanggal must not be empty".to_string())
        );
    }

    #[test]
    fn test_unknown_field_has_no_rules() {
        assert!(validate_text_field(COLUMNS, "missing", "").is_ok());
    }
}
