use super::{ExportError, ExportOptions, ExportTable};

const BOM: &[u8] = "\u{FEFF}".as_bytes();

/// Header row of labels, then one line per record
pub fn to_csv(table: &ExportTable, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    if options.csv_bom {
        buffer.extend_from_slice(BOM);
    }

    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(options.csv_delimiter)
        .from_writer(buffer);
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}
