use crate::model::Report;
use crate::report::matrix::{HeaderBlock, MatrixRow, RowKind, grand_total_row, group_rows, header_block};
use crate::report::{RenderSettings, ReportRenderer, report_title};

/// Plain-text rendition of the interactive table: one section per RW with its
/// header line and subtotal, then the grand total once.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    settings: RenderSettings,
}

impl TableRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }
}

impl ReportRenderer for TableRenderer {
    type Output = String;

    fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        let title = report_title(report);
        out.push_str(&title);
        out.push('\n');
        out.push_str(&"=".repeat(title.chars().count()));
        out.push('\n');
        out.push_str(&format!(
            "Per tanggal: {}\n",
            report.evaluated_on().format("%Y-%m-%d")
        ));
        out.push_str(&format!("Jumlah penduduk: {}\n\n", report.record_count()));

        let header = header_block(report);
        for group in report.groups() {
            out.push_str(&self.settings.rw_heading(group));
            out.push('\n');
            out.push_str(&render_grid(&header, &group_rows(group)));
            out.push('\n');
        }

        out.push_str(&render_grid(&header, &[grand_total_row(report)]));

        let quality = report.quality();
        if !quality.is_clean() {
            out.push('\n');
            out.push_str(&format!(
                "Catatan: {} data tanpa RW, {} data tanpa RT, {} data dengan kategori tidak diketahui.\n",
                quality.malformed_rw,
                quality.malformed_rt,
                quality.fallback_records()
            ));
        }
        out
    }
}

const SEP: &str = " | ";

/// Fixed-width grid: the two header rows, a rule, then `rows`.
pub(crate) fn render_grid(header: &HeaderBlock, rows: &[MatrixRow]) -> String {
    let widths = column_widths(header, rows);
    let mut out = String::new();

    // `No` and `RT` span both header rows; their text sits on the top row.
    let mut top = Vec::with_capacity(header.top.len());
    let mut col = 0usize;
    for cell in &header.top {
        let width = span_width(&widths[col..col + cell.colspan]);
        top.push(pad_center(&cell.text, width));
        col += cell.colspan;
    }
    push_line(&mut out, &top.join(SEP));

    let mut bottom = Vec::with_capacity(widths.len());
    let lead = widths.len() - header.bottom.len();
    for w in &widths[..lead] {
        bottom.push(" ".repeat(*w));
    }
    for (cell, w) in header.bottom.iter().zip(&widths[lead..]) {
        bottom.push(pad_center(&cell.text, *w));
    }
    push_line(&mut out, &bottom.join(SEP));

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
    push_line(&mut out, &rule);

    for row in rows {
        if row.kind != RowKind::Data {
            push_line(&mut out, &rule);
        }
        let line = row
            .cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (text, w))| {
                if i == 1 {
                    pad_right(text, *w)
                } else {
                    pad_left(text, *w)
                }
            })
            .collect::<Vec<_>>()
            .join(SEP);
        push_line(&mut out, &line);
    }
    out
}

fn column_widths(header: &HeaderBlock, rows: &[MatrixRow]) -> Vec<usize> {
    let n = header.top.iter().map(|c| c.colspan).sum::<usize>();
    let mut widths = vec![1usize; n];

    let lead = n - header.bottom.len();
    for (i, cell) in header.bottom.iter().enumerate() {
        widths[lead + i] = widths[lead + i].max(text_width(&cell.text));
    }
    for row in rows {
        for (i, text) in row.cells.iter().enumerate().take(n) {
            widths[i] = widths[i].max(text_width(text));
        }
    }

    let mut col = 0usize;
    for cell in &header.top {
        let span = &mut widths[col..col + cell.colspan];
        let need = text_width(&cell.text);
        let have = span_width(span);
        if need > have {
            if let Some(last) = span.last_mut() {
                *last += need - have;
            }
        }
        col += cell.colspan;
    }
    widths
}

fn span_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + SEP.len() * widths.len().saturating_sub(1)
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

fn pad_center(s: &str, width: usize) -> String {
    format!("{:^width$}", s, width = width)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
