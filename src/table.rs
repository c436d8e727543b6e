//! Flattens table markup into a header row, body rows and estimated column
//! widths.

use crate::text::decode_entities;
use itertools::Itertools;
use log::{trace, warn};
use mathtext_idf::{Node, TableWidget};

/// Estimated advance of one character.
pub const CHAR_WIDTH: f32 = 7.0;
/// Horizontal padding added to every cell.
pub const PADDING: f32 = 20.0;
pub const BORDER_COLOR: &str = "#ccc";
pub const HEADER_BACKGROUND: &str = "#eee";

/// The header/body matrix of one table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExtractedTable {
    pub fn column_widths(&self) -> Vec<f32> {
        column_widths(&self.header, &self.rows)
    }

    pub fn into_widget(self) -> TableWidget {
        let column_widths = self.column_widths();
        let total_width: f32 = column_widths.iter().sum();
        TableWidget {
            header: self.header,
            rows: self.rows,
            column_widths,
            total_width,
            border_color: BORDER_COLOR.to_string(),
            header_background: HEADER_BACKGROUND.to_string(),
            horizontal_scroll: true,
        }
    }
}

struct CollectedRow<'a> {
    row: &'a Node,
    in_head: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableExtractor;

impl TableExtractor {
    /// Extracts the matrix from a table's children.
    ///
    /// Rows inside `thead`/`tbody`/`tfoot` are flattened in document order.
    /// With an explicit `thead`, its first row is the header, and a `thead`
    /// without rows leaves the header empty. Otherwise the first row is
    /// promoted.
    pub fn extract(&self, children: &[Node]) -> ExtractedTable {
        let mut collected = Vec::new();
        let mut has_head = false;
        for section in children {
            match section.tag().map(str::to_lowercase).as_deref() {
                Some("thead") => {
                    has_head = true;
                    collect_rows(section, true, &mut collected);
                }
                Some("tbody") | Some("tfoot") => collect_rows(section, false, &mut collected),
                Some("tr") => collected.push(CollectedRow {
                    row: section,
                    in_head: false,
                }),
                _ => trace!("Ignoring <{}> inside table", section.kind()),
            }
        }

        if collected.is_empty() {
            warn!("Table has no rows; rendering an empty table");
            return ExtractedTable::default();
        }

        let header_index = if has_head {
            collected.iter().position(|r| r.in_head)
        } else {
            Some(0)
        };
        let mut table = ExtractedTable::default();
        for (idx, collected_row) in collected.iter().enumerate() {
            let cells = row_cells(collected_row.row);
            if Some(idx) == header_index {
                table.header = cells;
            } else {
                table.rows.push(cells);
            }
        }
        table
    }
}

fn collect_rows<'a>(section: &'a Node, in_head: bool, out: &mut Vec<CollectedRow<'a>>) {
    out.extend(
        section
            .children()
            .iter()
            .filter(|child| child.tag().is_some_and(|t| t.eq_ignore_ascii_case("tr")))
            .map(|row| CollectedRow { row, in_head }),
    );
}

fn row_cells(row: &Node) -> Vec<String> {
    row.children()
        .iter()
        .filter(|child| matches!(child, Node::Element(_)))
        .map(cell_text)
        .collect()
}

/// Concatenates every descendant text value, single-space separated.
pub fn cell_text(node: &Node) -> String {
    match node {
        Node::Text { value } => decode_entities(value).trim().to_string(),
        Node::Comment { .. } => String::new(),
        _ => node
            .children()
            .iter()
            .map(cell_text)
            .filter(|s| !s.is_empty())
            .join(" "),
    }
}

/// `width[c] = max over rows of chars(cell) * CHAR_WIDTH + PADDING`.
/// Missing cells of short rows count as empty. Empty rows are ignored.
pub fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<f32> {
    let all_rows: Vec<&[String]> = std::iter::once(header)
        .chain(rows.iter().map(Vec::as_slice))
        .filter(|row| !row.is_empty())
        .collect();

    let column_count = all_rows.iter().map(|row| row.len()).max().unwrap_or(0);
    (0..column_count)
        .map(|col| {
            all_rows
                .iter()
                .map(|row| {
                    let chars = row.get(col).map_or(0, |cell| cell.chars().count());
                    chars as f32 * CHAR_WIDTH + PADDING
                })
                .fold(0.0, f32::max)
        })
        .collect()
}
