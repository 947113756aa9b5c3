//! Validation rules for form fields

/// Constraints on a column's form input
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Optional input without constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Required field with an upper length limit
    pub const fn required_max(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..Self::required()
        }
    }

    /// Required number that must not be below `min`
    pub const fn required_min(min: f64) -> Self {
        Self {
            min: Some(min),
            ..Self::required()
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} must not be empty", field_label));
        }

        let length = value.trim().chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("   ", "Nama").is_err());
        assert!(rules.validate_string("Budi", "Nama").is_ok());
    }

    #[test]
    fn test_optional_accepts_blank() {
        assert!(ValidationRules::none().validate_string("", "Catatan").is_ok());
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = ValidationRules::required_max(4);
        assert!(rules.validate_string("ÄÖÜß", "Kode").is_ok());
        assert_eq!(
            rules.validate_string("ABCDE", "Kode"),
            Err("Kode must not exceed 4 characters".to_string())
        );
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules::required_min(1.0);
        assert!(rules.validate_number(0.0, "Jumlah").is_err());
        assert!(rules.validate_number(1.0, "Jumlah").is_ok());
    }
}
