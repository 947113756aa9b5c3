//! Self-contained PDF 1.4 writer for table exports.
//!
//! Landscape A4 pages, Courier text, header repeated on every page.

use super::{ExportOptions, ExportTable};

const PAGE_WIDTH: f32 = 842.0;
const PAGE_HEIGHT: f32 = 595.0;
const MARGIN: f32 = 36.0;
const FONT_SIZE: f32 = 8.0;
const LINE_HEIGHT: f32 = 11.0;
/// Courier advance width is 600/1000 em
const CHAR_WIDTH: f32 = FONT_SIZE * 0.6;
const MAX_CELL_CHARS: usize = 40;

/// Escape a string literal; chars outside Latin-1 become `?`
fn escape_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\n' | '\r' | '\t' => out.push(' '),
            c if (c as u32) < 0x20 => {}
            c if (c as u32) < 0x80 => out.push(c),
            c if (c as u32) <= 0xFF => out.push_str(&format!("\\{:03o}", c as u32)),
            _ => out.push('?'),
        }
    }
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}

/// Column widths in chars, capped so wide text does not push others off the page
fn column_widths(table: &ExportTable) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_CHARS)
        })
        .collect()
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let text = truncate(cell, *width);
            format!("{:<width$}", text, width = *width)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn page_content(title: &str, header: &str, lines: &[String], page: usize, pages: usize) -> String {
    let mut content = String::new();
    content.push_str("BT\n");
    content.push_str(&format!("/F1 {} Tf\n{} TL\n", FONT_SIZE, LINE_HEIGHT));
    content.push_str(&format!("{} {} Td\n", MARGIN, PAGE_HEIGHT - MARGIN));

    if !title.is_empty() {
        content.push_str(&format!("({}) Tj T*\n", escape_pdf_text(title)));
    }
    content.push_str(&format!("({}) Tj T*\n", escape_pdf_text(header)));
    content.push_str(&format!("({}) Tj T*\n", "-".repeat(header.chars().count())));
    for line in lines {
        content.push_str(&format!("({}) Tj T*\n", escape_pdf_text(line)));
    }
    content.push_str("ET\n");

    // Footer
    content.push_str(&format!(
        "BT /F1 {} Tf {} {} Td ({} / {}) Tj ET\n",
        FONT_SIZE,
        PAGE_WIDTH - MARGIN - CHAR_WIDTH * 12.0,
        MARGIN / 2.0,
        page,
        pages
    ));
    content
}

/// Append-only object writer tracking byte offsets for the xref table
struct PdfBuilder {
    buffer: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfBuilder {
    fn new() -> Self {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buffer,
            offsets: Vec::new(),
        }
    }

    /// Objects are numbered in write order starting at 1
    fn object(&mut self, body: &str) {
        self.offsets.push(self.buffer.len());
        let number = self.offsets.len();
        self.buffer
            .extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", number, body).as_bytes());
    }

    fn stream(&mut self, content: &str) {
        self.object(&format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ));
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref_offset = self.buffer.len();
        let count = self.offsets.len() + 1;
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", count);
        for offset in &self.offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            count, root, xref_offset
        ));
        self.buffer.extend_from_slice(xref.as_bytes());
        self.buffer
    }
}

/// Paginated monospaced table. An empty result still yields one page with
/// the header.
pub fn to_pdf(table: &ExportTable, options: &ExportOptions) -> Vec<u8> {
    let widths = column_widths(table);
    let header = format_line(&table.headers, &widths);
    let lines: Vec<String> = table.rows.iter().map(|row| format_line(row, &widths)).collect();

    let usable_lines = ((PAGE_HEIGHT - 2.0 * MARGIN) / LINE_HEIGHT) as usize;
    let fixed_lines = if options.title.is_empty() { 2 } else { 3 };
    let rows_per_page = options
        .pdf_rows_per_page
        .clamp(1, usable_lines.saturating_sub(fixed_lines).max(1));

    let chunks: Vec<&[String]> = if lines.is_empty() {
        vec![&lines[..]]
    } else {
        lines.chunks(rows_per_page).collect()
    };
    let pages = chunks.len();

    // 1 catalog, 2 pages tree, 3 font, then (page, content) pairs
    let page_ids: Vec<usize> = (0..pages).map(|i| 4 + i * 2).collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");

    let mut pdf = PdfBuilder::new();
    pdf.object("<< /Type /Catalog /Pages 2 0 R >>");
    pdf.object(&format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages));
    pdf.object("<< /Type /Font /Subtype /Type1 /BaseFont /Courier /Encoding /WinAnsiEncoding >>");

    for (index, chunk) in chunks.iter().enumerate() {
        let content_id = page_ids[index] + 1;
        pdf.object(&format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            PAGE_WIDTH, PAGE_HEIGHT, content_id
        ));
        pdf.stream(&page_content(&options.title, &header, chunk, index + 1, pages));
    }

    pdf.finish(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::test_support::{row, Row};

    fn export(rows: &[Row], rows_per_page: usize) -> Vec<u8> {
        let refs: Vec<&Row> = rows.iter().collect();
        let options = ExportOptions {
            title: "Pembayaran".into(),
            pdf_rows_per_page: rows_per_page,
            ..ExportOptions::default()
        };
        to_pdf(&ExportTable::from_records(&refs), &options)
    }

    fn rows(count: u32) -> Vec<Row> {
        (1..=count)
            .map(|i| row(i, &format!("Vendor {}", i), "Lunas", "01-01-2024", 1_000))
            .collect()
    }

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn test_document_structure() {
        let bytes = export(&rows(3), 40);
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));

        let body = text(&bytes);
        assert!(body.contains("/Count 1"));
        assert!(body.contains("Vendor 3"));
    }

    #[test]
    fn test_startxref_points_at_xref() {
        let bytes = export(&rows(5), 2);
        let body = text(&bytes);
        let offset: usize = body
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!(bytes[offset..].starts_with(b"xref"));
    }

    #[test]
    fn test_rows_split_across_pages() {
        let body = text(&export(&rows(5), 2));
        assert!(body.contains("/Count 3"));
        assert!(body.contains("(3 / 3) Tj"));
    }

    #[test]
    fn test_empty_result_single_header_page() {
        let body = text(&export(&[], 40));
        assert!(body.contains("/Count 1"));
        assert!(body.contains("(No  Nama"));
    }

    #[test]
    fn test_escape_pdf_text() {
        assert_eq!(escape_pdf_text("a(b)\\c"), "a\\(b\\)\\\\c");
        assert_eq!(escape_pdf_text("é"), "\\351");
        assert_eq!(escape_pdf_text("₹"), "?");
    }
}
