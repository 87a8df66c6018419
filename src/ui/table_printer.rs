use crate::ui::width_util::WidthUtil;
use std::io::Write;

/// Renders banners and padded column tables, optionally indented so the
/// whole block sits centered in the terminal.
#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            util: self.util.clone(),
            left_pad: pad,
        }
    }

    /// Natural width of the table: widest cell per column plus separators.
    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        Self::natural_width(&self.col_widths(headers, rows))
    }

    pub fn print_table<T: AsRef<str>>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
    ) {
        let mut stdout = std::io::stdout();
        let _ = self.render_table(table_name, headers, rows, empty_message, min_width, &mut stdout);
    }

    /// Render into any writer (used by tests to capture output).
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let widths = self.col_widths(headers, rows);
        let mut total = Self::natural_width(&widths).max(min_width.unwrap_or(0));

        if rows.is_empty() {
            if let Some(msg) = empty_message {
                total = total
                    .max(self.util.visible_width(table_name))
                    .max(self.util.visible_width(msg));
                self.render_banner(table_name, total, out)?;
                self.write_line(out, msg)?;
                return self.write_separator(out, total);
            }
        }

        self.render_banner(table_name, total, out)?;

        let header_line = headers
            .iter()
            .enumerate()
            .map(|(i, h)| self.util.pad_visible(h, widths[i]))
            .collect::<Vec<_>>()
            .join(" | ");
        self.write_line(out, &header_line)?;
        self.write_separator(out, total)?;

        for row in rows {
            let line = row
                .iter()
                .enumerate()
                .take(widths.len())
                .map(|(i, cell)| self.util.pad_visible(cell.as_ref(), widths[i]))
                .collect::<Vec<_>>()
                .join(" | ");
            self.write_line(out, &line)?;
        }
        self.write_separator(out, total)
    }

    /// Separator, upper-cased title, separator.
    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> std::io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_separator(out, w)?;
        self.write_line(out, &title.to_uppercase())?;
        self.write_separator(out, w)
    }

    fn col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(self.util.visible_width(cell.as_ref()));
            }
        }
        widths
    }

    fn natural_width(widths: &[usize]) -> usize {
        if widths.is_empty() {
            0
        } else {
            widths.iter().sum::<usize>() + (widths.len() - 1) * 3
        }
    }

    fn write_line<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> std::io::Result<()> {
        if self.left_pad > 0 {
            write!(out, "{}", " ".repeat(self.left_pad))?;
        }
        writeln!(out, "{s}")
    }

    fn write_separator<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        self.write_line(out, &"-".repeat(width.max(1)))
    }
}
