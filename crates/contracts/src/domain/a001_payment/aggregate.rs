use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::record_id;
use crate::shared::date::RecordDate;
use crate::shared::metadata::{
    validate_date_field, validate_number_field, validate_text_field, ColumnMetadata, FieldKind,
    ValidationRules,
};
use crate::shared::table::{FieldValue, RecordForm, TableRecord};

// ============================================================================
// ID Type
// ============================================================================

/// Row number of a payment (`no` column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaymentNo(pub u32);

record_id!(PaymentNo);

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "Lunas")]
    Paid,
    #[serde(rename = "Belum Lunas")]
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Lunas",
            PaymentStatus::Unpaid => "Belum Lunas",
        }
    }

    pub fn all() -> &'static [PaymentStatus] {
        &[PaymentStatus::Paid, PaymentStatus::Unpaid]
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown payment status: {}", s))
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Supplier payment on the finance screen (Pembayaran)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub no: PaymentNo,
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,
    pub vendor: String,
    pub description: String,
    pub date: RecordDate,
    #[serde(rename = "dueDate")]
    pub due_date: RecordDate,
    pub amount: i64,
    pub status: PaymentStatus,
}

const COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("no", "No", FieldKind::Integer),
    ColumnMetadata::new("invoice_number", "No. Invoice", FieldKind::Text)
        .with_validation(ValidationRules::required_max(32)),
    ColumnMetadata::new("vendor", "Vendor", FieldKind::Text)
        .with_validation(ValidationRules::required_max(100)),
    ColumnMetadata::new("description", "Keterangan", FieldKind::Text),
    ColumnMetadata::new("date", "Tanggal", FieldKind::Date)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("due_date", "Jatuh Tempo", FieldKind::Date)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("amount", "Jumlah", FieldKind::Money)
        .with_validation(ValidationRules::required_min(1.0)),
    ColumnMetadata::new("status", "Status", FieldKind::Category),
];

impl TableRecord for Payment {
    type Id = PaymentNo;

    fn id(&self) -> Self::Id {
        self.no
    }

    fn set_id(&mut self, id: Self::Id) {
        self.no = id;
    }

    fn columns() -> &'static [ColumnMetadata] {
        COLUMNS
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "no" => FieldValue::Integer(i64::from(self.no.0)),
            "invoice_number" => FieldValue::text(&self.invoice_number),
            "vendor" => FieldValue::text(&self.vendor),
            "description" => FieldValue::text(&self.description),
            "date" => FieldValue::Date(self.date.clone()),
            "due_date" => FieldValue::Date(self.due_date.clone()),
            "amount" => FieldValue::Money(self.amount),
            "status" => FieldValue::text(self.status.as_str()),
            _ => return None,
        };
        Some(value)
    }

    fn quick_search_fields() -> &'static [&'static str] {
        &["invoice_number", "vendor", "description"]
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.invoice_number, self.vendor)
    }
}

// ============================================================================
// Form
// ============================================================================

/// Add/edit form of the payment modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentForm {
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,
    pub vendor: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub amount: i64,
    pub status: PaymentStatus,
}

impl RecordForm<Payment> for PaymentForm {
    fn validate(&self) -> Result<(), String> {
        validate_text_field(COLUMNS, "invoice_number", &self.invoice_number)?;
        validate_text_field(COLUMNS, "vendor", &self.vendor)?;
        validate_date_field(COLUMNS, "date", &self.date)?;
        validate_date_field(COLUMNS, "due_date", &self.due_date)?;
        validate_number_field(COLUMNS, "amount", self.amount as f64)?;

        let (issued, due) = (RecordDate::parse(&self.date), RecordDate::parse(&self.due_date));
        if due.day() < issued.day() {
            return Err("Jatuh Tempo must not be before Tanggal".into());
        }
        Ok(())
    }

    fn into_record(self, id: PaymentNo) -> Payment {
        Payment {
            no: id,
            invoice_number: self.invoice_number.trim().to_string(),
            vendor: self.vendor.trim().to_string(),
            description: self.description.trim().to_string(),
            date: RecordDate::parse(&self.date),
            due_date: RecordDate::parse(&self.due_date),
            amount: self.amount,
            status: self.status,
        }
    }

    fn apply_to(self, record: &mut Payment) {
        let no = record.no;
        *record = self.into_record(no);
    }
}
