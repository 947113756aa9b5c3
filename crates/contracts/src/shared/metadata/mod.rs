//! Metadata types for describing table columns
//!
//! Every screen record exposes a static slice of [`ColumnMetadata`]; the slice
//! order is the displayed column order and the export column order.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::table::TableRecord;
//!
//! for column in Payment::columns() {
//!     println!("{}: {}", column.name, column.label);
//! }
//! ```

mod types;
mod field_type;
mod validation;

pub use types::{
    find_column, validate_date_field, validate_number_field, validate_text_field, ColumnMetadata,
};
pub use field_type::FieldKind;
pub use validation::ValidationRules;
