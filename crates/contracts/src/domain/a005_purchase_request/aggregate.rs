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

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PurchaseRequestId(pub u32);

record_id!(PurchaseRequestId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseRequestStatus {
    #[serde(rename = "Menunggu")]
    Pending,
    #[serde(rename = "Disetujui")]
    Approved,
    #[serde(rename = "Diproses")]
    Ordered,
    #[serde(rename = "Selesai")]
    Received,
}

impl PurchaseRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Menunggu",
            Self::Approved => "Disetujui",
            Self::Ordered => "Diproses",
            Self::Received => "Selesai",
        }
    }

    pub fn all() -> &'static [PurchaseRequestStatus] {
        &[Self::Pending, Self::Approved, Self::Ordered, Self::Received]
    }
}

impl FromStr for PurchaseRequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown purchase request status: {}", s))
    }
}

impl fmt::Display for PurchaseRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Warehouse purchase request (Permintaan Pembelian)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub id: PurchaseRequestId,
    #[serde(rename = "prNumber")]
    pub pr_number: String,
    pub item: String,
    pub warehouse: String,
    #[serde(rename = "requestDate")]
    pub request_date: RecordDate,
    pub quantity: i64,
    pub unit: String,
    #[serde(rename = "requestedBy")]
    pub requested_by: String,
    pub status: PurchaseRequestStatus,
}

const COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("id", "ID", FieldKind::Integer).hidden(),
    ColumnMetadata::new("pr_number", "No. PR", FieldKind::Text)
        .with_validation(ValidationRules::required_max(24)),
    ColumnMetadata::new("item", "Barang", FieldKind::Text)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("warehouse", "Gudang", FieldKind::Category)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("request_date", "Tgl Permintaan", FieldKind::Date)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("quantity", "Qty", FieldKind::Integer)
        .with_validation(ValidationRules::required_min(1.0)),
    ColumnMetadata::new("unit", "Satuan", FieldKind::Category)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("requested_by", "Pemohon", FieldKind::Text)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("status", "Status", FieldKind::Category),
];

impl TableRecord for PurchaseRequest {
    type Id = PurchaseRequestId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }

    fn columns() -> &'static [ColumnMetadata] {
        COLUMNS
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::Integer(i64::from(self.id.0)),
            "pr_number" => FieldValue::text(&self.pr_number),
            "item" => FieldValue::text(&self.item),
            "warehouse" => FieldValue::text(&self.warehouse),
            "request_date" => FieldValue::Date(self.request_date.clone()),
            "quantity" => FieldValue::Integer(self.quantity),
            "unit" => FieldValue::text(&self.unit),
            "requested_by" => FieldValue::text(&self.requested_by),
            "status" => FieldValue::text(self.status.as_str()),
            _ => return None,
        };
        Some(value)
    }

    fn quick_search_fields() -> &'static [&'static str] {
        &["pr_number", "item", "requested_by"]
    }

    fn summary(&self) -> String {
        format!("{} ({} {} {})", self.pr_number, self.quantity, self.unit, self.item)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequestForm {
    #[serde(rename = "prNumber")]
    pub pr_number: String,
    pub item: String,
    pub warehouse: String,
    #[serde(rename = "requestDate")]
    pub request_date: String,
    pub quantity: i64,
    pub unit: String,
    #[serde(rename = "requestedBy")]
    pub requested_by: String,
    #[serde(default = "default_status")]
    pub status: PurchaseRequestStatus,
}

fn default_status() -> PurchaseRequestStatus {
    PurchaseRequestStatus::Pending
}

impl RecordForm<PurchaseRequest> for PurchaseRequestForm {
    fn validate(&self) -> Result<(), String> {
        validate_text_field(COLUMNS, "pr_number", &self.pr_number)?;
        validate_text_field(COLUMNS, "item", &self.item)?;
        validate_text_field(COLUMNS, "warehouse", &self.warehouse)?;
        validate_date_field(COLUMNS, "request_date", &self.request_date)?;
        validate_number_field(COLUMNS, "quantity", self.quantity as f64)?;
        validate_text_field(COLUMNS, "unit", &self.unit)?;
        validate_text_field(COLUMNS, "requested_by", &self.requested_by)
    }

    fn into_record(self, id: PurchaseRequestId) -> PurchaseRequest {
        PurchaseRequest {
            id,
            pr_number: self.pr_number.trim().to_string(),
            item: self.item.trim().to_string(),
            warehouse: self.warehouse.trim().to_string(),
            request_date: RecordDate::parse(&self.request_date),
            quantity: self.quantity,
            unit: self.unit.trim().to_string(),
            requested_by: self.requested_by.trim().to_string(),
            status: self.status,
        }
    }

    fn apply_to(self, record: &mut PurchaseRequest) {
        let id = record.id;
        *record = self.into_record(id);
    }
}
