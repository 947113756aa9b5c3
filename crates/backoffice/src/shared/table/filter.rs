//! Filter stage: the subset of records passing every active predicate.

use contracts::shared::table::{FieldValue, FilterCriteria, Predicate, TableRecord};

/// Records satisfying all active predicates, in input order
pub fn filter_records<'a, R, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a R>
where
    R: TableRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter(|record| matches(*record, criteria))
        .collect()
}

/// AND across the search box and every active per-field predicate
pub fn matches<R: TableRecord>(record: &R, criteria: &FilterCriteria) -> bool {
    matches_quick_search(record, &criteria.quick_search)
        && criteria
            .active_predicates()
            .all(|(field, predicate)| matches_predicate(record, field, predicate))
}

/// Case-insensitive contains over the record's search fields (any field may
/// match). Records without declared search fields are searched on every column.
pub fn matches_quick_search<R: TableRecord>(record: &R, value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let needle = value.to_lowercase();

    let declared = R::quick_search_fields();
    let contains = |field: &str| {
        record
            .field_value(field)
            .is_some_and(|v| v.display().to_lowercase().contains(&needle))
    };

    if declared.is_empty() {
        R::columns().iter().any(|c| contains(c.name))
    } else {
        declared.iter().any(|field| contains(field))
    }
}

pub fn matches_predicate<R: TableRecord>(record: &R, field: &str, predicate: &Predicate) -> bool {
    if !predicate.is_active() {
        return true;
    }
    let Some(value) = record.field_value(field) else {
        return false;
    };

    match predicate {
        Predicate::Contains { value: needle } => value
            .display()
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        Predicate::Equals { value: expected } => value.display() == *expected,
        Predicate::DateRange { from, to } => {
            // Unparseable or non-date values never satisfy a range
            let FieldValue::Date(date) = value else {
                return false;
            };
            let Some(day) = date.day() else {
                return false;
            };
            from.map_or(true, |from| from <= day) && to.map_or(true, |to| day <= to)
        }
    }
}
