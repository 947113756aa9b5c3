use super::value::FieldValue;
use crate::shared::metadata::ColumnMetadata;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identity type of a table record
pub trait RecordId:
    Clone + Copy + PartialEq + Eq + Ord + Hash + Serialize + DeserializeOwned + Debug
{
    /// Identity given to the first record of an empty store
    fn first() -> Self;

    /// Identity following `self` (`max(existing) + 1`)
    fn next(&self) -> Self;

    /// 1-based position, used when a store renumbers its rows
    fn from_position(position: usize) -> Self;

    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl RecordId for u32 {
    fn first() -> Self {
        1
    }

    fn next(&self) -> Self {
        self.saturating_add(1)
    }

    fn from_position(position: usize) -> Self {
        u32::try_from(position).unwrap_or(u32::MAX)
    }

    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim().parse::<u32>().map_err(|e| format!("Invalid u32: {}", e))
    }
}

impl RecordId for u64 {
    fn first() -> Self {
        1
    }

    fn next(&self) -> Self {
        self.saturating_add(1)
    }

    fn from_position(position: usize) -> Self {
        u64::try_from(position).unwrap_or(u64::MAX)
    }

    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim().parse::<u64>().map_err(|e| format!("Invalid u64: {}", e))
    }
}

/// Implements [`RecordId`] for a `u32` newtype
#[macro_export]
macro_rules! record_id {
    ($name:ident) => {
        impl $crate::shared::table::RecordId for $name {
            fn first() -> Self {
                Self(1)
            }

            fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }

            fn from_position(position: usize) -> Self {
                Self(<u32 as $crate::shared::table::RecordId>::from_position(position))
            }

            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                <u32 as $crate::shared::table::RecordId>::from_string(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// How a store assigns identities to new rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// Stable `id`: a new record gets `max(existing) + 1` and is appended
    Stable,
    /// Positional `no`: rows are renumbered 1..n after every insert or removal
    Sequential { prepend: bool },
}

/// A flat row of a back-office table screen
pub trait TableRecord: Clone + Debug {
    type Id: RecordId;

    fn id(&self) -> Self::Id;

    /// Only the store calls this (new rows and renumbering)
    fn set_id(&mut self, id: Self::Id);

    /// Displayed columns in display order
    fn columns() -> &'static [ColumnMetadata];

    /// Value of a field by name, `None` for unknown fields
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    fn numbering() -> Numbering {
        Numbering::Stable
    }

    /// Fields scanned by the screen's search box
    fn quick_search_fields() -> &'static [&'static str] {
        &[]
    }

    /// Human label for confirmation prompts
    fn summary(&self) -> String {
        self.id().as_string()
    }

    /// Cell text as rendered on screen and exported
    fn cell_text(&self, field: &str) -> String {
        self.field_value(field)
            .map(|v| v.display())
            .unwrap_or_default()
    }
}

/// Add/edit form of a screen's modal
pub trait RecordForm<R: TableRecord> {
    /// Local validation before the store is touched
    fn validate(&self) -> Result<(), String>;

    /// Build a new record carrying the identity chosen by the store
    fn into_record(self, id: R::Id) -> R;

    /// Merge the form into an existing record; identity is left untouched
    fn apply_to(self, record: &mut R);
}
