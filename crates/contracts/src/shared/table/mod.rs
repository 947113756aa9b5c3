//! Contracts of the generic client-side table: record trait, filter
//! criteria, sort spec, pagination state and the list query string.

pub mod criteria;
pub mod page;
pub mod query;
pub mod record;
pub mod sort;
pub mod value;

pub use criteria::{FilterCriteria, Predicate};
pub use page::{PageInfo, PageState, DEFAULT_PAGE_SIZE};
pub use query::ListQuery;
pub use record::{Numbering, RecordForm, RecordId, TableRecord};
pub use sort::{SortDirection, SortSpec};
pub use value::{format_rupiah, parse_rupiah, FieldValue};
