use serde_json::{Value, json};

use crate::model::{Cell, Report, Tally};
use crate::report::ReportRenderer;

/// Renders the report as JSON. Column order is kept by emitting cells as
/// arrays rather than label-keyed objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    type Output = Value;

    fn render(&self, report: &Report) -> Value {
        render_report_json(report)
    }
}

pub fn render_report_json(report: &Report) -> Value {
    let dimension = report.dimension();
    let groups = report
        .groups()
        .iter()
        .map(|group| {
            let rows = group
                .rows()
                .iter()
                .map(|row| {
                    json!({
                        "rt": row.rt().as_str(),
                        "cells": tally_json(report, row.tally()),
                        "total": cell_json(&row.row_total()),
                    })
                })
                .collect::<Vec<_>>();
            json!({
                "rw": group.rw().as_str(),
                "member_count": group.member_count(),
                "rows": rows,
                "subtotal": {
                    "cells": tally_json(report, group.subtotal()),
                    "total": cell_json(&group.subtotal().total()),
                },
            })
        })
        .collect::<Vec<_>>();

    let quality = report.quality();
    json!({
        "dimension": {
            "id": dimension.id(),
            "title": dimension.title(),
            "labels": dimension.labels(),
        },
        "columns": report.columns(),
        "evaluated_on": report.evaluated_on().format("%Y-%m-%d").to_string(),
        "record_count": report.record_count(),
        "groups": groups,
        "grand_total": {
            "cells": tally_json(report, report.grand_total()),
            "total": cell_json(&report.grand_total().total()),
        },
        "data_quality": {
            "malformed_rw": quality.malformed_rw,
            "malformed_rt": quality.malformed_rt,
            "missing_value": quality.missing_value,
            "unmatched_value": quality.unmatched_value,
            "invalid_birth_date": quality.invalid_birth_date,
            "born_after_evaluation": quality.born_after_evaluation,
        },
    })
}

pub fn render_report_json_string(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&render_report_json(report))
}

fn tally_json(report: &Report, tally: &Tally) -> Value {
    Value::Array(
        report
            .columns()
            .iter()
            .zip(tally.cells())
            .map(|(label, cell)| {
                json!({
                    "label": label,
                    "male": cell.male(),
                    "female": cell.female(),
                    "total": cell.total(),
                })
            })
            .collect(),
    )
}

fn cell_json(cell: &Cell) -> Value {
    json!({
        "male": cell.male(),
        "female": cell.female(),
        "total": cell.total(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
