//! Sort stage: stable ordering by one field and direction.

use contracts::shared::table::{FieldValue, SortSpec, TableRecord};
use std::cmp::Ordering;

/// Compare two records by the value of `field`; records missing the field first
pub fn compare_by_field<R: TableRecord>(a: &R, b: &R, field: &str) -> Ordering {
    compare_values(a.field_value(field).as_ref(), b.field_value(field).as_ref())
}

fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order rows by `spec`. No field keeps the input order; ties keep their
/// relative input order in both directions.
pub fn sort_records<'a, R: TableRecord>(rows: Vec<&'a R>, spec: &SortSpec) -> Vec<&'a R> {
    let Some(field) = spec.field.as_deref() else {
        return rows;
    };
    let ascending = spec.direction.is_ascending();

    // Field values are extracted once per row rather than per comparison
    let mut keyed: Vec<(Option<FieldValue>, &'a R)> = rows
        .into_iter()
        .map(|record| (record.field_value(field), record))
        .collect();

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare_values(a.as_ref(), b.as_ref());
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Sort owned records in place
pub fn sort_list<R: TableRecord>(items: &mut [R], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = compare_by_field(a, b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}
