//! Table rendering utilities for CLI outputs.
//!
//! Column widths are computed with display width, not char count, so the
//! Korean double-width labels line up.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.into_iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            push_padded(&mut out, h, widths[i]);
        }
        out.push('\n');

        for (i, _) in self.headers.iter().enumerate() {
            push_padded(&mut out, &"-".repeat(widths[i]), widths[i]);
        }
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                push_padded(&mut out, cell, widths[i]);
            }
            out.push('\n');
        }

        out
    }
}

fn push_padded(out: &mut String, s: &str, width: usize) {
    out.push_str(s);
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    for _ in 0..pad + 2 {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_wide_characters_by_display_width() {
        let mut t = Table::new(vec!["이름", "date"]);
        t.add_row(vec!["Kim".to_string(), "2025-09-01".to_string()]);
        let rendered = t.render();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("이름"));
        assert!(lines[2].contains("2025-09-01"));
    }
}
