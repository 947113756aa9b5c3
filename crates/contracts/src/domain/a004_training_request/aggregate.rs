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
pub struct TrainingRequestId(pub u32);

record_id!(TrainingRequestId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingStatus {
    #[serde(rename = "Diajukan")]
    Submitted,
    #[serde(rename = "Disetujui")]
    Approved,
    #[serde(rename = "Ditolak")]
    Rejected,
}

impl TrainingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingStatus::Submitted => "Diajukan",
            TrainingStatus::Approved => "Disetujui",
            TrainingStatus::Rejected => "Ditolak",
        }
    }

    pub fn all() -> &'static [TrainingStatus] {
        &[
            TrainingStatus::Submitted,
            TrainingStatus::Approved,
            TrainingStatus::Rejected,
        ]
    }
}

impl FromStr for TrainingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown training status: {}", s))
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Training request submitted by an employee (Pengajuan Training)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub id: TrainingRequestId,
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    pub department: String,
    pub title: String,
    pub organizer: String,
    #[serde(rename = "trainingDate")]
    pub training_date: RecordDate,
    pub cost: i64,
    pub status: TrainingStatus,
}

const COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("id", "ID", FieldKind::Integer),
    ColumnMetadata::new("employee_name", "Nama Karyawan", FieldKind::Text)
        .with_validation(ValidationRules::required_max(100)),
    ColumnMetadata::new("department", "Departemen", FieldKind::Category)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("title", "Judul Training", FieldKind::Text)
        .with_validation(ValidationRules::required_max(150)),
    ColumnMetadata::new("organizer", "Penyelenggara", FieldKind::Text)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("training_date", "Tanggal", FieldKind::Date)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("cost", "Biaya", FieldKind::Money)
        .with_validation(ValidationRules::required_min(0.0)),
    ColumnMetadata::new("status", "Status", FieldKind::Category),
];

impl TableRecord for TrainingRequest {
    type Id = TrainingRequestId;

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
            "employee_name" => FieldValue::text(&self.employee_name),
            "department" => FieldValue::text(&self.department),
            "title" => FieldValue::text(&self.title),
            "organizer" => FieldValue::text(&self.organizer),
            "training_date" => FieldValue::Date(self.training_date.clone()),
            "cost" => FieldValue::Money(self.cost),
            "status" => FieldValue::text(self.status.as_str()),
            _ => return None,
        };
        Some(value)
    }

    fn quick_search_fields() -> &'static [&'static str] {
        &["employee_name", "title", "organizer"]
    }

    fn summary(&self) -> String {
        format!("{}: {}", self.employee_name, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRequestForm {
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    pub department: String,
    pub title: String,
    pub organizer: String,
    #[serde(rename = "trainingDate")]
    pub training_date: String,
    pub cost: i64,
    #[serde(default = "default_status")]
    pub status: TrainingStatus,
}

fn default_status() -> TrainingStatus {
    TrainingStatus::Submitted
}

impl RecordForm<TrainingRequest> for TrainingRequestForm {
    fn validate(&self) -> Result<(), String> {
        validate_text_field(COLUMNS, "employee_name", &self.employee_name)?;
        validate_text_field(COLUMNS, "department", &self.department)?;
        validate_text_field(COLUMNS, "title", &self.title)?;
        validate_text_field(COLUMNS, "organizer", &self.organizer)?;
        validate_date_field(COLUMNS, "training_date", &self.training_date)?;
        validate_number_field(COLUMNS, "cost", self.cost as f64)
    }

    fn into_record(self, id: TrainingRequestId) -> TrainingRequest {
        TrainingRequest {
            id,
            employee_name: self.employee_name.trim().to_string(),
            department: self.department.trim().to_string(),
            title: self.title.trim().to_string(),
            organizer: self.organizer.trim().to_string(),
            training_date: RecordDate::parse(&self.training_date),
            cost: self.cost,
            status: self.status,
        }
    }

    fn apply_to(self, record: &mut TrainingRequest) {
        let id = record.id;
        *record = self.into_record(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_round_trip_through_json() {
        let form: TrainingRequestForm = serde_json::from_str(
            r#"{"employeeName":"Dewi Lestari","department":"HRD","title":"Leadership Essentials",
                "organizer":"PPM Manajemen","trainingDate":"12-08-2024","cost":4500000}"#,
        )
        .unwrap();
        assert!(form.validate().is_ok());
        let record = form.into_record(TrainingRequestId(11));
        assert_eq!(record.status, TrainingStatus::Submitted);
        assert_eq!(record.cell_text("cost"), "Rp 4.500.000");
    }

    #[test]
    fn test_missing_title_rejected() {
        let form = TrainingRequestForm {
            employee_name: "Dewi".into(),
            department: "HRD".into(),
            title: "".into(),
            organizer: "PPM".into(),
            training_date: "12-08-2024".into(),
            cost: 0,
            status: TrainingStatus::Submitted,
        };
        assert_eq!(
            form.validate(),
            Err("Judul Training must not be empty".to_string())
        );
    }
}
