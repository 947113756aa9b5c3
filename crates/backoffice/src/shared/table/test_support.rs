//! Small record type used by the engine tests

use contracts::record_id;
use contracts::shared::date::RecordDate;
use contracts::shared::metadata::{ColumnMetadata, FieldKind, ValidationRules};
use contracts::shared::table::{FieldValue, Numbering, RecordForm, TableRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowNo(pub u32);

record_id!(RowNo);

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub no: RowNo,
    pub name: String,
    pub status: String,
    pub date: RecordDate,
    pub amount: i64,
}

const COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("no", "No", FieldKind::Integer),
    ColumnMetadata::new("name", "Nama", FieldKind::Text)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("status", "Status", FieldKind::Category),
    ColumnMetadata::new("date", "Tanggal", FieldKind::Date),
    ColumnMetadata::new("amount", "Jumlah", FieldKind::Money),
];

impl TableRecord for Row {
    type Id = RowNo;

    fn id(&self) -> RowNo {
        self.no
    }

    fn set_id(&mut self, id: RowNo) {
        self.no = id;
    }

    fn columns() -> &'static [ColumnMetadata] {
        COLUMNS
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "no" => FieldValue::Integer(i64::from(self.no.0)),
            "name" => FieldValue::text(&self.name),
            "status" => FieldValue::text(&self.status),
            "date" => FieldValue::Date(self.date.clone()),
            "amount" => FieldValue::Money(self.amount),
            _ => return None,
        })
    }

    fn quick_search_fields() -> &'static [&'static str] {
        &["name"]
    }
}

/// Same row shape, renumbered and prepended like the HPP screen
#[derive(Debug, Clone, PartialEq)]
pub struct SeqRow(pub Row);

impl TableRecord for SeqRow {
    type Id = RowNo;

    fn id(&self) -> RowNo {
        self.0.no
    }

    fn set_id(&mut self, id: RowNo) {
        self.0.no = id;
    }

    fn columns() -> &'static [ColumnMetadata] {
        COLUMNS
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.0.field_value(field)
    }

    fn numbering() -> Numbering {
        Numbering::Sequential { prepend: true }
    }
}

#[derive(Debug, Clone)]
pub struct RowForm {
    pub name: String,
    pub status: String,
}

impl RecordForm<Row> for RowForm {
    fn validate(&self) -> Result<(), String> {
        COLUMNS[1].validate_text(&self.name)
    }

    fn into_record(self, id: RowNo) -> Row {
        Row {
            no: id,
            name: self.name,
            status: self.status,
            date: RecordDate::parse("01-01-2024"),
            amount: 0,
        }
    }

    fn apply_to(self, record: &mut Row) {
        record.name = self.name;
        record.status = self.status;
    }
}

impl RecordForm<SeqRow> for RowForm {
    fn validate(&self) -> Result<(), String> {
        <RowForm as RecordForm<Row>>::validate(self)
    }

    fn into_record(self, id: RowNo) -> SeqRow {
        SeqRow(<RowForm as RecordForm<Row>>::into_record(self, id))
    }

    fn apply_to(self, record: &mut SeqRow) {
        <RowForm as RecordForm<Row>>::apply_to(self, &mut record.0)
    }
}

pub fn row(no: u32, name: &str, status: &str, date: &str, amount: i64) -> Row {
    Row {
        no: RowNo(no),
        name: name.to_string(),
        status: status.to_string(),
        date: RecordDate::parse(date),
        amount,
    }
}

pub fn form(name: &str, status: &str) -> RowForm {
    RowForm {
        name: name.to_string(),
        status: status.to_string(),
    }
}

/// The three-row payment example: 1 Lunas, 2 Belum Lunas, 3 Lunas
pub fn lunas_rows() -> Vec<Row> {
    vec![
        row(1, "PT Sinar Jaya", "Lunas", "05-01-2024", 1_500_000),
        row(2, "CV Maju Bersama", "Belum Lunas", "2024-01-20", 750_000),
        row(3, "UD Sumber Rejeki", "Lunas", "11-02-2024", 2_250_000),
    ]
}

pub fn ids<R: TableRecord>(rows: &[&R]) -> Vec<R::Id> {
    rows.iter().map(|r| r.id()).collect()
}
