/// How a column pads its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            alignment: Alignment::Right,
        }
    }
}

/// Plain-text table. Cells hold uncolored text so width computation stays
/// trivial; callers colorize whole rendered lines if they need emphasis.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count();
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                width
            })
            .collect()
    }

    fn render_cells(&self, cells: &[String], widths: &[usize]) -> String {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = cells.get(idx).map(String::as_str).unwrap_or("");
                let width = widths[idx];
                match column.alignment {
                    Alignment::Left => format!("{:<width$}", text, width = width),
                    Alignment::Right => format!("{:>width$}", text, width = width),
                }
            })
            .collect();
        rendered.join("  ").trim_end().to_string()
    }

    /// Header line, separator, then one line per row.
    pub fn render_lines(&self) -> Vec<String> {
        let widths = self.widths();
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![self.render_cells(&headers, &widths)];
        let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        lines.push("-".repeat(rule_len));
        for row in &self.rows {
            lines.push(self.render_cells(row, &widths));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_and_pads_columns() {
        let mut table = Table::new(vec![TableColumn::left("Name"), TableColumn::right("Qty")]);
        table.add_row(vec!["Primus".into(), "3".into()]);
        table.add_row(vec!["Fanta Citron".into(), "12".into()]);

        let lines = table.render_lines();
        assert_eq!(lines[0], "Name          Qty");
        assert_eq!(lines[2], "Primus          3");
        assert_eq!(lines[3], "Fanta Citron   12");
    }

    #[test]
    fn missing_cells_render_empty() {
        let mut table = Table::new(vec![TableColumn::left("A"), TableColumn::left("B")]);
        table.add_row(vec!["x".into()]);
        assert_eq!(table.render_lines()[2], "x");
    }
}
