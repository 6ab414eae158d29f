use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{AreaKey, Report};
use crate::report::matrix::{HeaderBlock, MatrixRow, grand_total_row, group_rows, header_block};
use crate::report::text::render_grid;
use crate::report::{RenderSettings, ReportRenderer, report_title};

/// Conventional name of the printable document for a dimension and date.
pub fn export_filename(dimension_id: &str, date: NaiveDate) -> String {
    format!("monografi-{}-{}.pdf", dimension_id, date.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub number: usize,
    /// RW whose table this page carries; `None` for a page holding only the
    /// grand total.
    pub rw: Option<AreaKey>,
    pub heading: String,
    /// True when this page continues the previous page's RW table.
    pub continued: bool,
    pub header: HeaderBlock,
    pub rows: Vec<MatrixRow>,
}

/// Page layout handed to the document painter. Each RW table starts on a new
/// page, and the header block is repeated on every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedDocument {
    pub filename: String,
    pub title: String,
    pub evaluated_on: NaiveDate,
    pub pages: Vec<Page>,
}

impl PagedDocument {
    /// Text preview with a form feed between pages.
    pub fn to_text(&self) -> String {
        let total = self.pages.len();
        let mut out = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push('\u{000C}');
                out.push('\n');
            }
            out.push_str(&self.title);
            out.push('\n');
            out.push_str(&format!("Per tanggal: {}\n", self.evaluated_on.format("%Y-%m-%d")));
            if !page.heading.is_empty() {
                out.push_str(&page.heading);
                if page.continued {
                    out.push_str(" (lanjutan)");
                }
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&render_grid(&page.header, &page.rows));
            out.push_str(&format!("\nHalaman {} dari {}\n", page.number, total));
        }
        out
    }
}

#[derive(Debug, Clone, Default)]
pub struct PagedRenderer {
    settings: RenderSettings,
}

impl PagedRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }
}

impl ReportRenderer for PagedRenderer {
    type Output = PagedDocument;

    fn render(&self, report: &Report) -> PagedDocument {
        let per_page = self.settings.rows_per_page();
        let header = header_block(report);
        let mut pages: Vec<Page> = Vec::new();

        for group in report.groups() {
            let heading = self.settings.rw_heading(group);
            let rows = group_rows(group);
            for (i, chunk) in rows.chunks(per_page).enumerate() {
                pages.push(Page {
                    number: pages.len() + 1,
                    rw: Some(group.rw().clone()),
                    heading: heading.clone(),
                    continued: i > 0,
                    header: header.clone(),
                    rows: chunk.to_vec(),
                });
            }
        }

        let grand = grand_total_row(report);
        let fits = pages.last().is_some_and(|p| p.rows.len() < per_page);
        if let Some(last) = pages.last_mut().filter(|_| fits) {
            last.rows.push(grand);
        } else {
            let number = pages.len() + 1;
            pages.push(Page {
                number,
                rw: None,
                heading: String::new(),
                continued: false,
                header,
                rows: vec![grand],
            });
        }

        PagedDocument {
            filename: export_filename(report.dimension().id(), report.evaluated_on()),
            title: report_title(report),
            evaluated_on: report.evaluated_on(),
            pages,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/paged.rs"]
mod tests;
