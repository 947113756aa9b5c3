//! Screen-level controller: record store + filter panel + sort header +
//! pagination, recomputed synchronously on every read.

use super::error::TableError;
use super::filter::filter_records;
use super::paginate::{clamp_page, paginate, total_pages};
use super::sort::sort_records;
use super::store::{PendingDeletion, RecordStore};
use contracts::shared::date::parse_display_date;
use contracts::shared::metadata::{find_column, ColumnMetadata, FieldKind};
use contracts::shared::table::{
    FilterCriteria, ListQuery, PageInfo, PageState, Predicate, RecordForm, SortSpec, TableRecord,
};

/// Visible window of a table plus the pagination summary
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub info: PageInfo,
}

/// State of one table screen.
///
/// `current_page` is clamped into `[1, total_pages]` after every change that
/// can move the filtered count or the page size.
#[derive(Debug, Clone)]
pub struct Table<R: TableRecord> {
    store: RecordStore<R>,
    criteria: FilterCriteria,
    sort: SortSpec,
    page: PageState,
    /// Page sizes the screen offers; empty accepts any positive size
    page_sizes: Vec<usize>,
}

impl<R: TableRecord> Table<R> {
    pub fn new(records: Vec<R>, page_size: usize) -> Result<Self, TableError> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        Ok(Self {
            store: RecordStore::from_records(records)?,
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            page: PageState::new(page_size),
            page_sizes: Vec::new(),
        })
    }

    /// Restrict page size changes to `sizes`
    pub fn with_page_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.page_sizes = sizes;
        self
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    // ------------------------------------------------------------------
    // Filter panel
    // ------------------------------------------------------------------

    pub fn set_quick_search(&mut self, value: impl Into<String>) {
        self.criteria.quick_search = value.into();
        self.clamp_current_page();
    }

    pub fn set_filter(&mut self, field: &str, predicate: Predicate) -> Result<(), TableError> {
        ensure_predicate::<R>(field, &predicate)?;
        self.criteria.set(field, predicate);
        self.clamp_current_page();
        Ok(())
    }

    pub fn clear_filter(&mut self, field: &str) {
        self.criteria.remove(field);
        self.clamp_current_page();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.clamp_current_page();
    }

    // ------------------------------------------------------------------
    // Sort header
    // ------------------------------------------------------------------

    /// Header click on `field`
    pub fn toggle_sort(&mut self, field: &str) -> Result<(), TableError> {
        ensure_column::<R>(field)?;
        self.sort.toggle(field);
        Ok(())
    }

    pub fn set_sort(&mut self, spec: SortSpec) -> Result<(), TableError> {
        if let Some(field) = spec.field.as_deref() {
            ensure_column::<R>(field)?;
        }
        self.sort = spec;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// Go to `page`, clamped into range; returns the page actually shown
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page.current_page = clamp_page(page, self.total_pages());
        self.page.current_page
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), TableError> {
        self.check_page_size(page_size)?;
        self.page.page_size = page_size;
        self.clamp_current_page();
        Ok(())
    }

    /// Replace filters, sort and paging with the state encoded in `query`.
    /// A column takes one predicate kind only. Nothing changes when the
    /// query is rejected.
    pub fn apply_query(&mut self, query: &ListQuery) -> Result<(), TableError> {
        let mut criteria = FilterCriteria::new();
        criteria.quick_search = query.q.clone().unwrap_or_default();

        let equals = query
            .eq
            .iter()
            .map(|(field, value)| (field.as_str(), Predicate::equals(value.as_str())));
        let contains = query
            .like
            .iter()
            .map(|(field, value)| (field.as_str(), Predicate::contains(value.as_str())));
        let mut predicates: Vec<(&str, Predicate)> = equals.chain(contains).collect();
        for field in query.date_range_fields() {
            let from = parse_bound(field, query.from.get(field))?;
            let to = parse_bound(field, query.to.get(field))?;
            predicates.push((field, Predicate::date_range(from, to)));
        }

        for (field, predicate) in predicates {
            ensure_predicate::<R>(field, &predicate)?;
            if criteria.fields.contains_key(field) {
                return Err(TableError::ConflictingFilters(field.to_string()));
            }
            criteria.set(field, predicate);
        }

        let sort = match query.sort.as_deref().filter(|f| !f.is_empty()) {
            Some(field) => {
                ensure_column::<R>(field)?;
                SortSpec::by(field, query.dir.unwrap_or_default())
            }
            None => SortSpec::none(),
        };

        let page_size = query.page_size.unwrap_or(self.page.page_size);
        self.check_page_size(page_size)?;

        self.criteria = criteria;
        self.sort = sort;
        self.page.page_size = page_size;
        self.page.current_page = query.page.unwrap_or(1);
        self.clamp_current_page();

        tracing::debug!(
            "Applied list query: {} filter(s), sort {:?}, page {}",
            self.criteria.fields.len(),
            self.sort.field,
            self.page.current_page
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn filtered(&self) -> Vec<&R> {
        filter_records(self.store.records(), &self.criteria)
    }

    /// Full filtered and sorted result set (what exports receive)
    pub fn export_rows(&self) -> Vec<&R> {
        sort_records(self.filtered(), &self.sort)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page.page_size)
    }

    pub fn view(&self) -> TableView<'_, R> {
        let sorted = self.export_rows();
        let info = PageInfo {
            current_page: self.page.current_page,
            total_pages: total_pages(sorted.len(), self.page.page_size),
            total_count: sorted.len(),
            page_size: self.page.page_size,
        };
        let rows = paginate(&sorted, &self.page).to_vec();
        TableView { rows, info }
    }

    // ------------------------------------------------------------------
    // CRUD
    // ------------------------------------------------------------------

    pub fn add<F: RecordForm<R>>(&mut self, form: F) -> Result<R::Id, TableError> {
        let id = self.store.add(form)?;
        self.clamp_current_page();
        Ok(id)
    }

    pub fn update<F: RecordForm<R>>(&mut self, id: R::Id, form: F) -> Result<bool, TableError> {
        let updated = self.store.update(id, form)?;
        self.clamp_current_page();
        Ok(updated)
    }

    pub fn request_delete(&self, id: R::Id) -> PendingDeletion<R::Id> {
        self.store.request_delete(id)
    }

    pub fn confirm_delete(&mut self, pending: PendingDeletion<R::Id>) -> Option<R> {
        let removed = self.store.confirm_delete(pending);
        self.clamp_current_page();
        removed
    }

    pub fn cancel_delete(&self, pending: PendingDeletion<R::Id>) {
        self.store.cancel_delete(pending);
    }

    fn clamp_current_page(&mut self) {
        self.page.current_page = clamp_page(self.page.current_page, self.total_pages());
    }

    fn check_page_size(&self, page_size: usize) -> Result<(), TableError> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        if !self.page_sizes.is_empty() && !self.page_sizes.contains(&page_size) {
            let allowed: Vec<String> = self.page_sizes.iter().map(|s| s.to_string()).collect();
            return Err(TableError::UnsupportedPageSize {
                size: page_size,
                allowed: allowed.join(", "),
            });
        }
        Ok(())
    }
}

fn ensure_column<R: TableRecord>(field: &str) -> Result<&'static ColumnMetadata, TableError> {
    find_column(R::columns(), field).ok_or_else(|| TableError::UnknownColumn(field.to_string()))
}

/// Date ranges only apply to date columns; text predicates match the
/// displayed value of any column.
fn ensure_predicate<R: TableRecord>(field: &str, predicate: &Predicate) -> Result<(), TableError> {
    let column = ensure_column::<R>(field)?;
    if matches!(predicate, Predicate::DateRange { .. }) && column.kind != FieldKind::Date {
        return Err(TableError::PredicateMismatch {
            field: field.to_string(),
            kind: column.kind.as_str(),
        });
    }
    Ok(())
}

fn parse_bound(
    field: &str,
    value: Option<&String>,
) -> Result<Option<chrono::NaiveDate>, TableError> {
    match value.map(|v| v.trim()).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_display_date(raw)
            .map(Some)
            .ok_or_else(|| TableError::InvalidDate {
                field: field.to_string(),
                value: raw.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::test_support::{form, ids, lunas_rows, row, Row, RowNo};
    use contracts::shared::table::SortDirection;

    fn many_rows(count: u32) -> Vec<Row> {
        (1..=count)
            .map(|i| {
                let status = if i % 2 == 0 { "Belum Lunas" } else { "Lunas" };
                row(i, &format!("Vendor {:02}", i), status, "01-02-2024", i64::from(i) * 1_000)
            })
            .collect()
    }

    #[test]
    fn test_example_scenario() {
        let mut table = Table::new(lunas_rows(), 1).unwrap();
        table.set_filter("status", Predicate::equals("Lunas")).unwrap();
        assert_eq!(ids(&table.filtered()), vec![RowNo(1), RowNo(3)]);

        table.set_sort(SortSpec::by("no", SortDirection::Desc)).unwrap();
        assert_eq!(ids(&table.export_rows()), vec![RowNo(3), RowNo(1)]);

        assert_eq!(table.set_page(2), 2);
        let view = table.view();
        assert_eq!(ids(&view.rows), vec![RowNo(1)]);
        assert_eq!(view.info.total_pages, 2);
        assert_eq!(view.info.total_count, 2);
    }

    #[test]
    fn test_page_clamped_when_filter_shrinks_result() {
        let mut table = Table::new(many_rows(25), 10).unwrap();
        assert_eq!(table.set_page(3), 3);

        table.set_quick_search("Vendor 0");
        // 9 matches fit on one page
        assert_eq!(table.page().current_page, 1);
        assert_eq!(table.view().rows.len(), 9);
    }

    #[test]
    fn test_page_clamped_on_page_size_change() {
        let mut table = Table::new(many_rows(25), 5).unwrap();
        table.set_page(5);
        table.set_page_size(10).unwrap();
        assert_eq!(table.page().current_page, 3);
        assert_eq!(table.set_page_size(0), Err(TableError::InvalidPageSize));
    }

    #[test]
    fn test_set_page_out_of_range_is_clamped() {
        let mut table = Table::new(many_rows(5), 2).unwrap();
        assert_eq!(table.set_page(0), 1);
        assert_eq!(table.set_page(99), 3);
    }

    #[test]
    fn test_empty_table_view() {
        let table: Table<Row> = Table::new(Vec::new(), 10).unwrap();
        let view = table.view();
        assert!(view.rows.is_empty());
        assert_eq!(view.info.total_pages, 1);
        assert_eq!(view.info.current_page, 1);
    }

    #[test]
    fn test_export_rows_ignore_pagination() {
        let mut table = Table::new(many_rows(25), 10).unwrap();
        table.set_filter("status", Predicate::equals("Lunas")).unwrap();
        table.set_sort(SortSpec::by("amount", SortDirection::Desc)).unwrap();
        table.set_page(2);

        let exported = table.export_rows();
        assert_eq!(exported.len(), 13);
        assert_eq!(exported.first().map(|r| r.no), Some(RowNo(25)));
        assert_eq!(table.view().rows.len(), 3);
    }

    #[test]
    fn test_unknown_columns_rejected() {
        let mut table = Table::new(lunas_rows(), 10).unwrap();
        assert_eq!(
            table.toggle_sort("nope"),
            Err(TableError::UnknownColumn("nope".into()))
        );
        assert!(table.set_filter("nope", Predicate::equals("x")).is_err());
    }

    #[test]
    fn test_toggle_sort_header_clicks() {
        let mut table = Table::new(lunas_rows(), 10).unwrap();
        table.toggle_sort("amount").unwrap();
        assert_eq!(ids(&table.export_rows()), vec![RowNo(2), RowNo(1), RowNo(3)]);
        table.toggle_sort("amount").unwrap();
        assert_eq!(ids(&table.export_rows()), vec![RowNo(3), RowNo(1), RowNo(2)]);
    }

    #[test]
    fn test_apply_query() {
        let mut table = Table::new(many_rows(25), 10).unwrap();
        let mut query = ListQuery {
            q: Some("vendor".into()),
            sort: Some("amount".into()),
            dir: Some(SortDirection::Desc),
            page: Some(2),
            page_size: Some(5),
            ..ListQuery::default()
        };
        query.eq.insert("status".into(), "Lunas".into());
        query.from.insert("date".into(), "2024-02-01".into());

        table.apply_query(&query).unwrap();
        let view = table.view();
        assert_eq!(view.info.total_count, 13);
        assert_eq!(view.info.current_page, 2);
        assert_eq!(ids(&view.rows), vec![RowNo(15), RowNo(13), RowNo(11), RowNo(9), RowNo(7)]);
    }

    #[test]
    fn test_apply_query_rejects_bad_date_atomically() {
        let mut table = Table::new(lunas_rows(), 10).unwrap();
        table.set_quick_search("maju");

        let mut query = ListQuery::default();
        query.to.insert("date".into(), "31-31-2024".into());
        assert_eq!(
            table.apply_query(&query),
            Err(TableError::InvalidDate {
                field: "date".into(),
                value: "31-31-2024".into()
            })
        );
        assert_eq!(table.criteria().quick_search, "maju");
    }

    #[test]
    fn test_page_size_limited_to_offered_sizes() {
        let mut table = Table::new(many_rows(25), 10).unwrap().with_page_sizes(vec![5, 10, 25]);
        assert_eq!(table.set_page_size(25), Ok(()));
        assert_eq!(
            table.set_page_size(7),
            Err(TableError::UnsupportedPageSize {
                size: 7,
                allowed: "5, 10, 25".into()
            })
        );
        assert_eq!(table.page().page_size, 25);

        let query = ListQuery {
            page_size: Some(3),
            ..ListQuery::default()
        };
        assert!(matches!(
            table.apply_query(&query),
            Err(TableError::UnsupportedPageSize { size: 3, .. })
        ));
        assert_eq!(table.page().page_size, 25);
    }

    #[test]
    fn test_conflicting_filters_on_one_column_rejected() {
        let mut table = Table::new(lunas_rows(), 10).unwrap();
        table.set_filter("status", Predicate::equals("Lunas")).unwrap();

        let mut query = ListQuery::default();
        query.eq.insert("status".into(), "Lunas".into());
        query.like.insert("status".into(), "x".into());
        assert_eq!(
            table.apply_query(&query),
            Err(TableError::ConflictingFilters("status".into()))
        );
        assert_eq!(ids(&table.filtered()), vec![RowNo(1), RowNo(3)]);
    }

    #[test]
    fn test_date_range_only_on_date_columns() {
        let mut table = Table::new(lunas_rows(), 10).unwrap();
        let range = Predicate::date_range(chrono::NaiveDate::from_ymd_opt(2024, 1, 1), None);
        assert_eq!(
            table.set_filter("name", range.clone()),
            Err(TableError::PredicateMismatch {
                field: "name".into(),
                kind: "text"
            })
        );
        assert!(table.criteria().fields.is_empty());
        table.set_filter("date", range).unwrap();
        assert_eq!(table.filtered_count(), 3);

        let mut query = ListQuery::default();
        query.from.insert("amount".into(), "01-01-2024".into());
        assert!(matches!(
            table.apply_query(&query),
            Err(TableError::PredicateMismatch { kind: "money", .. })
        ));
    }

    #[test]
    fn test_delete_last_row_on_last_page_moves_back() {
        let mut table = Table::new(many_rows(11), 10).unwrap();
        table.set_page(2);
        let pending = table.request_delete(RowNo(11));
        assert!(table.confirm_delete(pending).is_some());
        assert_eq!(table.page().current_page, 1);
    }

    #[test]
    fn test_add_shows_in_filtered_view() {
        let mut table = Table::new(lunas_rows(), 10).unwrap();
        table.set_filter("status", Predicate::equals("Lunas")).unwrap();
        let id = table.add(form("Koperasi Karyawan", "Lunas")).unwrap();
        assert_eq!(id, RowNo(4));
        assert_eq!(ids(&table.view().rows), vec![RowNo(1), RowNo(3), RowNo(4)]);
    }
}
