pub mod error;
pub mod filter;
pub mod paginate;
pub mod render;
pub mod sort;
pub mod store;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::TableError;
pub use filter::filter_records;
pub use paginate::{clamp_page, paginate, total_pages};
pub use render::{header_labels, project_rows, render_text, visible_columns};
pub use sort::{compare_by_field, sort_list, sort_records};
pub use store::{PendingDeletion, RecordStore};
pub use table::{Table, TableView};
