use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use alz_common::format_p_value;
use alz_model::{Hypothesis, HypothesisResult, Significance};

use crate::types::{HypothesisStatus, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Dataset: {}", result.data_path.display());
    println!(
        "Rows: {} loaded, {} analyzed, {} dropped",
        result.rows_loaded, result.rows_analyzed, result.rows_dropped
    );
    println!("{}", summary_table(result));
    let failures: Vec<_> = result.failures().collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (hypothesis, error) in failures {
            eprintln!("- {}: {error}", hypothesis.code());
        }
    }
}

/// One row per hypothesis: test, statistic, p-value, verdict, chart path.
pub fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Hypothesis"),
        header_cell("Question"),
        header_cell("Test"),
        header_cell("Statistic"),
        header_cell("p-value"),
        header_cell("Result"),
        header_cell("Chart"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    for report in &result.hypotheses {
        let hypothesis = report.hypothesis;
        let chart = match &report.chart {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("-"),
        };
        let row = match &report.status {
            HypothesisStatus::Completed { result } => vec![
                code_cell(hypothesis),
                Cell::new(hypothesis.title()),
                Cell::new(result.test.label()),
                Cell::new(format_statistic(result)),
                Cell::new(format_p_value(result.p_value)),
                significance_cell(result.significance),
                chart,
            ],
            HypothesisStatus::Failed { .. } => vec![
                code_cell(hypothesis),
                Cell::new(hypothesis.title()),
                Cell::new(hypothesis.test().label()),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new("FAILED")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                chart,
            ],
        };
        table.add_row(row);
    }
    table
}

/// The four hypotheses with their tests, for `alz-analysis hypotheses`.
pub fn hypotheses_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Name", "Question", "Test", "Description"]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    for hypothesis in Hypothesis::ALL {
        table.add_row(vec![
            hypothesis.code(),
            hypothesis.slug(),
            hypothesis.title(),
            hypothesis.test().label(),
            hypothesis.description(),
        ]);
    }
    table
}

fn format_statistic(result: &HypothesisResult) -> String {
    if result.statistic.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.4}", result.statistic)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn code_cell(hypothesis: Hypothesis) -> Cell {
    Cell::new(hypothesis.code())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn significance_cell(significance: Significance) -> Cell {
    match significance {
        Significance::Significant => Cell::new(significance.label())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Significance::NotSignificant => Cell::new(significance.label()).fg(Color::Yellow),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
