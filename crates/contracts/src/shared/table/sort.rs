use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    pub fn reversed(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("Unknown sort direction: {}", other)),
        }
    }
}

/// Column header sort state. `field = None` keeps the filter output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    /// Header click: the same field flips direction, another field starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.reversed();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    /// Header indicator: ▲ / ▼ on the sorted column, ⇅ elsewhere
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field.as_deref() == Some(field) {
            if self.direction.is_ascending() { " ▲" } else { " ▼" }
        } else {
            " ⇅"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut spec = SortSpec::none();
        spec.toggle("amount");
        assert_eq!(spec, SortSpec::by("amount", SortDirection::Asc));
        spec.toggle("amount");
        assert_eq!(spec.direction, SortDirection::Desc);
        spec.toggle("date");
        assert_eq!(spec, SortSpec::by("date", SortDirection::Asc));
    }

    #[test]
    fn test_indicator() {
        let spec = SortSpec::by("no", SortDirection::Desc);
        assert_eq!(spec.indicator("no"), " ▼");
        assert_eq!(spec.indicator("status"), " ⇅");
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
