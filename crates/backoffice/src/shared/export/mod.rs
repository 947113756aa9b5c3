//! Экспорт отфильтрованных и отсортированных строк таблицы (CSV / Excel / PDF)

pub mod csv;
pub mod pdf;
pub mod xlsx;

use crate::shared::table::{header_labels, project_rows, visible_columns};
use contracts::shared::metadata::FieldKind;
use contracts::shared::table::TableRecord;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unknown export format: {0} (expected csv, xlsx or pdf)")]
    UnknownFormat(String),

    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("workbook write failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv;charset=utf-8",
            Self::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Pdf => "application/pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Excel),
            "pdf" => Ok(Self::Pdf),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub title: String,
    pub csv_delimiter: u8,
    /// UTF-8 BOM для корректного открытия в Excel
    pub csv_bom: bool,
    pub pdf_rows_per_page: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            csv_delimiter: b',',
            csv_bom: true,
            pdf_rows_per_page: 40,
        }
    }
}

/// Rows already projected to display text, in visible column order
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub kinds: Vec<FieldKind>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn from_records<R: TableRecord>(rows: &[&R]) -> Self {
        Self {
            headers: header_labels::<R>().into_iter().map(String::from).collect(),
            kinds: visible_columns::<R>().into_iter().map(|c| c.kind).collect(),
            rows: project_rows(rows),
        }
    }
}

/// Serialize `rows` (the filtered and sorted set) into `format`
pub fn export_records<R: TableRecord>(
    format: ExportFormat,
    rows: &[&R],
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let table = ExportTable::from_records(rows);
    let bytes = match format {
        ExportFormat::Csv => csv::to_csv(&table, options)?,
        ExportFormat::Excel => xlsx::to_xlsx(&table, options)?,
        ExportFormat::Pdf => pdf::to_pdf(&table, options),
    };
    tracing::info!(
        "Exported {} row(s) as {} ({} bytes)",
        table.rows.len(),
        format.extension(),
        bytes.len()
    );
    Ok(bytes)
}

/// Write an export as `<dir>/<screen>_<timestamp>.<ext>`
pub fn write_export(
    dir: &Path,
    screen: &str,
    format: ExportFormat,
    bytes: &[u8],
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{}_{}.{}", screen, stamp, format.extension()));
    std::fs::write(&path, bytes)?;
    tracing::info!("Export written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::test_support::{lunas_rows, Row};

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!(matches!(
            "docx".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_export_table_projection() {
        let rows = lunas_rows();
        let refs: Vec<&Row> = rows.iter().collect();
        let table = ExportTable::from_records(&refs);
        assert_eq!(table.headers, vec!["No", "Nama", "Status", "Tanggal", "Jumlah"]);
        assert_eq!(table.kinds[4], FieldKind::Money);
        assert_eq!(table.rows[1][1], "CV Maju Bersama");
    }

    #[test]
    fn test_write_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let path = write_export(&target, "payments", ExportFormat::Csv, b"No\n").unwrap();

        assert!(path.starts_with(&target));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
        assert_eq!(std::fs::read(&path).unwrap(), b"No\n");
    }
}
