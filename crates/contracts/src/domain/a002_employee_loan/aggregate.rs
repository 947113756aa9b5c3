use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::record_id;
use crate::shared::date::RecordDate;
use crate::shared::metadata::{
    validate_date_field, validate_text_field, ColumnMetadata, FieldKind, ValidationRules,
};
use crate::shared::table::{FieldValue, RecordForm, TableRecord};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeLoanId(pub u32);

record_id!(EmployeeLoanId);

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    #[serde(rename = "Dipinjam")]
    Borrowed,
    #[serde(rename = "Dikembalikan")]
    Returned,
    #[serde(rename = "Terlambat")]
    Overdue,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Borrowed => "Dipinjam",
            LoanStatus::Returned => "Dikembalikan",
            LoanStatus::Overdue => "Terlambat",
        }
    }

    pub fn all() -> &'static [LoanStatus] {
        &[LoanStatus::Borrowed, LoanStatus::Returned, LoanStatus::Overdue]
    }
}

impl FromStr for LoanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown loan status: {}", s))
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Company item lent to an employee (Peminjaman Karyawan)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLoan {
    pub id: EmployeeLoanId,
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    /// Nomor Induk Karyawan
    pub nik: String,
    pub department: String,
    pub item: String,
    #[serde(rename = "borrowDate")]
    pub borrow_date: RecordDate,
    /// Planned return date
    #[serde(rename = "returnDate")]
    pub return_date: RecordDate,
    pub status: LoanStatus,
}

const COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("id", "ID", FieldKind::Integer),
    ColumnMetadata::new("employee_name", "Nama Karyawan", FieldKind::Text)
        .with_validation(ValidationRules::required_max(100)),
    ColumnMetadata::new("nik", "NIK", FieldKind::Text)
        .with_validation(ValidationRules::required_max(20)),
    ColumnMetadata::new("department", "Departemen", FieldKind::Category)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("item", "Barang", FieldKind::Text)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("borrow_date", "Tgl Pinjam", FieldKind::Date)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("return_date", "Tgl Kembali", FieldKind::Date),
    ColumnMetadata::new("status", "Status", FieldKind::Category),
];

impl TableRecord for EmployeeLoan {
    type Id = EmployeeLoanId;

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
            "nik" => FieldValue::text(&self.nik),
            "department" => FieldValue::text(&self.department),
            "item" => FieldValue::text(&self.item),
            "borrow_date" => FieldValue::Date(self.borrow_date.clone()),
            "return_date" => FieldValue::Date(self.return_date.clone()),
            "status" => FieldValue::text(self.status.as_str()),
            _ => return None,
        };
        Some(value)
    }

    fn quick_search_fields() -> &'static [&'static str] {
        &["employee_name", "nik", "item"]
    }

    fn summary(&self) -> String {
        format!("{} - {}", self.employee_name, self.item)
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLoanForm {
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    pub nik: String,
    pub department: String,
    pub item: String,
    #[serde(rename = "borrowDate")]
    pub borrow_date: String,
    #[serde(rename = "returnDate", default)]
    pub return_date: String,
    #[serde(default = "default_status")]
    pub status: LoanStatus,
}

fn default_status() -> LoanStatus {
    LoanStatus::Borrowed
}

impl RecordForm<EmployeeLoan> for EmployeeLoanForm {
    fn validate(&self) -> Result<(), String> {
        validate_text_field(COLUMNS, "employee_name", &self.employee_name)?;
        validate_text_field(COLUMNS, "nik", &self.nik)?;
        if !self.nik.trim().chars().all(|c| c.is_ascii_digit()) {
            return Err("NIK must contain digits only".into());
        }
        validate_text_field(COLUMNS, "department", &self.department)?;
        validate_text_field(COLUMNS, "item", &self.item)?;
        validate_date_field(COLUMNS, "borrow_date", &self.borrow_date)?;
        validate_date_field(COLUMNS, "return_date", &self.return_date)?;

        let borrowed = RecordDate::parse(&self.borrow_date);
        let returned = RecordDate::parse(&self.return_date);
        if returned.is_valid() && returned.day() < borrowed.day() {
            return Err("Tgl Kembali must not be before Tgl Pinjam".into());
        }
        Ok(())
    }

    fn into_record(self, id: EmployeeLoanId) -> EmployeeLoan {
        EmployeeLoan {
            id,
            employee_name: self.employee_name.trim().to_string(),
            nik: self.nik.trim().to_string(),
            department: self.department.trim().to_string(),
            item: self.item.trim().to_string(),
            borrow_date: RecordDate::parse(&self.borrow_date),
            return_date: RecordDate::parse(&self.return_date),
            status: self.status,
        }
    }

    fn apply_to(self, record: &mut EmployeeLoan) {
        let id = record.id;
        *record = self.into_record(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> EmployeeLoanForm {
        EmployeeLoanForm {
            employee_name: "Siti Rahayu".into(),
            nik: "20190045".into(),
            department: "Keuangan".into(),
            item: "Laptop Lenovo ThinkPad".into(),
            borrow_date: "05-02-2024".into(),
            return_date: String::new(),
            status: LoanStatus::Borrowed,
        }
    }

    #[test]
    fn test_return_date_is_optional() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_numeric_nik() {
        let mut f = form();
        f.nik = "A-19".into();
        assert_eq!(f.validate(), Err("NIK must contain digits only".to_string()));
    }

    #[test]
    fn test_rejects_return_before_borrow() {
        let mut f = form();
        f.return_date = "01-02-2024".into();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_default_status_from_json() {
        let f: EmployeeLoanForm = serde_json::from_str(
            r#"{"employeeName":"Andi","nik":"1","department":"IT","item":"Proyektor","borrowDate":"2024-02-01"}"#,
        )
        .unwrap();
        assert_eq!(f.status, LoanStatus::Borrowed);
        assert_eq!(f.return_date, "");
    }
}
