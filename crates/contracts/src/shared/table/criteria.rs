use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Predicate configured for one field of a screen's filter panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Predicate {
    /// Case-insensitive substring match
    Contains { value: String },
    /// Exact match; an empty selection matches everything
    Equals { value: String },
    /// Inclusive range; an absent bound is unbounded on that side
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl Predicate {
    pub fn contains(value: impl Into<String>) -> Self {
        Self::Contains {
            value: value.into(),
        }
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Self::Equals {
            value: value.into(),
        }
    }

    pub fn date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self::DateRange { from, to }
    }

    /// Inactive predicates pass every record
    pub fn is_active(&self) -> bool {
        match self {
            Self::Contains { value } => !value.is_empty(),
            Self::Equals { value } => !value.is_empty(),
            Self::DateRange { from, to } => from.is_some() || to.is_some(),
        }
    }
}

/// Everything the filter panel of a screen currently holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Per-field predicates, ANDed together
    #[serde(default)]
    pub fields: BTreeMap<String, Predicate>,
    /// Search box text, matched against the record's quick-search fields
    #[serde(default)]
    pub quick_search: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, predicate: Predicate) -> Self {
        self.fields.insert(field.into(), predicate);
        self
    }

    pub fn with_quick_search(mut self, value: impl Into<String>) -> Self {
        self.quick_search = value.into();
        self
    }

    pub fn set(&mut self, field: impl Into<String>, predicate: Predicate) {
        self.fields.insert(field.into(), predicate);
    }

    pub fn remove(&mut self, field: &str) -> Option<Predicate> {
        self.fields.remove(field)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.quick_search.clear();
    }

    pub fn active_predicates(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.fields
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(name, p)| (name.as_str(), p))
    }

    pub fn is_empty(&self) -> bool {
        self.quick_search.is_empty() && self.active_predicates().next().is_none()
    }
}
