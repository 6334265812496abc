//! Pipe table extraction.

/// Table run being accumulated.
struct OpenTable {
    rows: String,
    /// The next emitted row gets `<th>` cells.
    header: bool,
}

impl OpenTable {
    fn new() -> Self {
        Self {
            rows: String::new(),
            header: true,
        }
    }

    fn push_row(&mut self, cells: &[&str]) {
        let tag = if self.header { "th" } else { "td" };
        self.rows.push_str("<tr>");
        for &cell in cells {
            for part in ["<", tag, ">", cell, "</", tag, ">"] {
                self.rows.push_str(part);
            }
        }
        self.rows.push_str("</tr>");
        self.header = false;
    }

    fn render(self) -> String {
        format!("<table>{}</table>", self.rows)
    }
}

/// A trimmed line is a row candidate when splitting on `|` yields more than
/// two segments.
fn is_table_row(line: &str) -> bool {
    line.split('|').count() > 2
}

/// Split a row into trimmed, non-empty cells.
fn split_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// A separator row has only dash cells. A row with no cells at all counts.
fn is_separator(cells: &[&str]) -> bool {
    cells.iter().all(|cell| cell.bytes().all(|b| b == b'-'))
}

/// Collapse runs of pipe-delimited lines into `<table>` elements.
///
/// The first non-separator row of a run is the header. Separator rows are
/// consumed without output and end header treatment. Any other line closes
/// the table and passes through unchanged.
pub(crate) fn process(text: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut open: Option<OpenTable> = None;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if !is_table_row(trimmed) {
            if let Some(table) = open.take() {
                output.push(table.render());
            }
            output.push(line.to_owned());
            continue;
        }

        let table = open.get_or_insert_with(OpenTable::new);
        let cells = split_cells(trimmed);
        if is_separator(&cells) {
            table.header = false;
        } else {
            table.push_row(&cells);
        }
    }

    if let Some(table) = open.take() {
        output.push(table.render());
    }

    output.join("\n")
}
