use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::record_id;
use crate::shared::date::RecordDate;
use crate::shared::metadata::{
    validate_date_field, validate_number_field, validate_text_field, ColumnMetadata, FieldKind,
    ValidationRules,
};
use crate::shared::table::{FieldValue, Numbering, RecordForm, TableRecord};

/// Display sequence number; rows are renumbered after every insert/delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HppNo(pub u32);

record_id!(HppNo);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HppCategory {
    #[serde(rename = "Bahan Baku")]
    RawMaterial,
    #[serde(rename = "Barang Setengah Jadi")]
    WorkInProgress,
    #[serde(rename = "Barang Jadi")]
    FinishedGood,
}

impl HppCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HppCategory::RawMaterial => "Bahan Baku",
            HppCategory::WorkInProgress => "Barang Setengah Jadi",
            HppCategory::FinishedGood => "Barang Jadi",
        }
    }

    pub fn all() -> &'static [HppCategory] {
        &[
            HppCategory::RawMaterial,
            HppCategory::WorkInProgress,
            HppCategory::FinishedGood,
        ]
    }
}

impl FromStr for HppCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown HPP category: {}", s))
    }
}

impl fmt::Display for HppCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived cost of goods per product and period (HPP Turunan)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HppDerivative {
    pub no: HppNo,
    #[serde(rename = "productCode")]
    pub product_code: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    /// Parent product the cost is derived from
    #[serde(rename = "sourceProduct")]
    pub source_product: String,
    pub category: HppCategory,
    pub unit: String,
    /// Cost per unit
    pub hpp: i64,
    pub period: RecordDate,
}

const COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("no", "No", FieldKind::Integer),
    ColumnMetadata::new("product_code", "Kode Produk", FieldKind::Text)
        .with_validation(ValidationRules::required_max(20)),
    ColumnMetadata::new("product_name", "Nama Produk", FieldKind::Text)
        .with_validation(ValidationRules::required_max(100)),
    ColumnMetadata::new("source_product", "Produk Induk", FieldKind::Text)
        .with_validation(ValidationRules::required()),
    ColumnMetadata::new("category", "Kategori", FieldKind::Category),
    ColumnMetadata::new("unit", "Satuan", FieldKind::Category)
        .with_validation(ValidationRules::required_max(10)),
    ColumnMetadata::new("hpp", "HPP / Satuan", FieldKind::Money)
        .with_validation(ValidationRules::required_min(0.0)),
    ColumnMetadata::new("period", "Periode", FieldKind::Date)
        .with_validation(ValidationRules::required()),
];

impl TableRecord for HppDerivative {
    type Id = HppNo;

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
            "product_code" => FieldValue::text(&self.product_code),
            "product_name" => FieldValue::text(&self.product_name),
            "source_product" => FieldValue::text(&self.source_product),
            "category" => FieldValue::text(self.category.as_str()),
            "unit" => FieldValue::text(&self.unit),
            "hpp" => FieldValue::Money(self.hpp),
            "period" => FieldValue::Date(self.period.clone()),
            _ => return None,
        };
        Some(value)
    }

    /// New rows go on top, `no` always reads 1..n from the top
    fn numbering() -> Numbering {
        Numbering::Sequential { prepend: true }
    }

    fn quick_search_fields() -> &'static [&'static str] {
        &["product_code", "product_name", "source_product"]
    }

    fn summary(&self) -> String {
        format!("{} {}", self.product_code, self.product_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HppDerivativeForm {
    #[serde(rename = "productCode")]
    pub product_code: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "sourceProduct")]
    pub source_product: String,
    pub category: HppCategory,
    pub unit: String,
    pub hpp: i64,
    pub period: String,
}

impl RecordForm<HppDerivative> for HppDerivativeForm {
    fn validate(&self) -> Result<(), String> {
        validate_text_field(COLUMNS, "product_code", &self.product_code)?;
        validate_text_field(COLUMNS, "product_name", &self.product_name)?;
        validate_text_field(COLUMNS, "source_product", &self.source_product)?;
        validate_text_field(COLUMNS, "unit", &self.unit)?;
        validate_number_field(COLUMNS, "hpp", self.hpp as f64)?;
        validate_date_field(COLUMNS, "period", &self.period)
    }

    fn into_record(self, no: HppNo) -> HppDerivative {
        HppDerivative {
            no,
            product_code: self.product_code.trim().to_uppercase(),
            product_name: self.product_name.trim().to_string(),
            source_product: self.source_product.trim().to_string(),
            category: self.category,
            unit: self.unit.trim().to_string(),
            hpp: self.hpp,
            period: RecordDate::parse(&self.period),
        }
    }

    fn apply_to(self, record: &mut HppDerivative) {
        let no = record.no;
        *record = self.into_record(no);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_hpp_rejected() {
        let form = HppDerivativeForm {
            product_code: "tpg-01".into(),
            product_name: "Tepung Terigu Premium".into(),
            source_product: "Gandum".into(),
            category: HppCategory::WorkInProgress,
            unit: "kg".into(),
            hpp: -1,
            period: "01-2024".into(),
        };
        assert_eq!(form.validate(), Err("HPP / Satuan must be at least 0".to_string()));
    }

    #[test]
    fn test_code_is_uppercased() {
        let form = HppDerivativeForm {
            product_code: " tpg-01 ".into(),
            product_name: "Tepung Terigu Premium".into(),
            source_product: "Gandum".into(),
            category: HppCategory::WorkInProgress,
            unit: "kg".into(),
            hpp: 9_500,
            period: "2024-01-31".into(),
        };
        assert!(form.validate().is_ok());
        let record = form.into_record(HppNo(1));
        assert_eq!(record.product_code, "TPG-01");
        assert_eq!(record.cell_text("category"), "Barang Setengah Jadi");
    }
}
