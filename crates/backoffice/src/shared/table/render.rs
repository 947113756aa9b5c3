//! Text rendering of a table view for the terminal.

use super::table::TableView;
use crate::shared::format::{format_number, pad_cell};
use contracts::shared::metadata::ColumnMetadata;
use contracts::shared::table::{PageInfo, SortSpec, TableRecord};

/// Columns rendered in the list and in exports, in display order
pub fn visible_columns<R: TableRecord>() -> Vec<&'static ColumnMetadata> {
    R::columns().iter().filter(|c| c.visible_in_list()).collect()
}

pub fn header_labels<R: TableRecord>() -> Vec<&'static str> {
    visible_columns::<R>().into_iter().map(|c| c.label).collect()
}

/// Cell texts of `rows` for the visible columns
pub fn project_rows<R: TableRecord>(rows: &[&R]) -> Vec<Vec<String>> {
    let columns = visible_columns::<R>();
    rows.iter()
        .map(|record| columns.iter().map(|c| record.cell_text(c.name)).collect())
        .collect()
}

/// Footer text, e.g. `2 / 3 (25)`
pub fn page_footer(info: &PageInfo) -> String {
    format!(
        "{} / {} ({})",
        info.current_page,
        info.total_pages,
        format_number(info.total_count)
    )
}

/// Aligned text table: header with sort indicators, visible rows, footer
pub fn render_text<R: TableRecord>(view: &TableView<'_, R>, sort: &SortSpec) -> String {
    let columns = visible_columns::<R>();
    let headers: Vec<String> = columns
        .iter()
        .map(|c| format!("{}{}", c.label, sort.indicator(c.name)))
        .collect();
    let cells = project_rows(&view.rows);

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |texts: &[String]| -> String {
        texts
            .iter()
            .zip(&columns)
            .zip(&widths)
            .map(|((text, column), width)| pad_cell(text, *width, column.kind.is_numeric()))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(&headers));
    out.push('\n');
    let rule_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 3;
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    if cells.is_empty() {
        out.push_str("(no records)\n");
    }
    for row in &cells {
        out.push_str(&line(row));
        out.push('\n');
    }
    out.push_str(&page_footer(&view.info));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::table::Table;
    use crate::shared::table::test_support::{lunas_rows, Row};
    use contracts::shared::table::{Predicate, SortDirection};

    #[test]
    fn test_project_rows_uses_display_text() {
        let rows = lunas_rows();
        let refs: Vec<&Row> = rows.iter().take(1).collect();
        assert_eq!(
            project_rows(&refs),
            vec![vec![
                "1".to_string(),
                "PT Sinar Jaya".to_string(),
                "Lunas".to_string(),
                "05-01-2024".to_string(),
                "Rp 1.500.000".to_string(),
            ]]
        );
    }

    #[test]
    fn test_render_text_header_and_footer() {
        let mut table = Table::new(lunas_rows(), 2).unwrap();
        table.set_sort(SortSpec::by("no", SortDirection::Desc)).unwrap();
        let text = render_text(&table.view(), table.sort());

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("No ▼ | Nama ⇅"));
        assert!(lines[2].contains("UD Sumber Rejeki"));
        assert_eq!(lines.last(), Some(&"1 / 2 (3)"));
    }

    #[test]
    fn test_render_text_empty_result() {
        let mut table = Table::new(lunas_rows(), 10).unwrap();
        table.set_filter("status", Predicate::equals("Batal")).unwrap();
        let text = render_text(&table.view(), table.sort());
        assert!(text.contains("(no records)"));
        assert!(text.ends_with("1 / 1 (0)\n"));
    }

    #[test]
    fn test_money_right_aligned() {
        let table = Table::new(lunas_rows(), 10).unwrap();
        let text = render_text(&table.view(), table.sort());
        // "Rp 750.000" is shorter than "Rp 2.250.000" and is padded on the left
        assert!(text.contains("|   Rp 750.000"));
    }
}
