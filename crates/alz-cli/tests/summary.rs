//! Summary rendering of run results.

use std::path::PathBuf;

use alz_cli::summary::{hypotheses_table, summary_table};
use alz_cli::{HypothesisReport, HypothesisStatus, RunResult};
use alz_model::{Hypothesis, HypothesisResult};

fn run_result() -> RunResult {
    RunResult {
        data_path: PathBuf::from("data/alzheimers_disease_data.csv"),
        rows_loaded: 2149,
        rows_analyzed: 2149,
        rows_dropped: 0,
        hypotheses: vec![
            HypothesisReport {
                hypothesis: Hypothesis::Lifestyle,
                status: HypothesisStatus::Completed {
                    result: HypothesisResult::new(
                        Hypothesis::Lifestyle,
                        0.0914,
                        0.762_39,
                        vec![1.0],
                        Vec::new(),
                    ),
                },
                chart: Some(PathBuf::from("charts/h1_lifestyle.svg")),
            },
            HypothesisReport {
                hypothesis: Hypothesis::Education,
                status: HypothesisStatus::Failed {
                    error: "H2 Average MMSE by Education Level: required column 'MMSE' not found"
                        .to_string(),
                },
                chart: None,
            },
        ],
        has_errors: true,
    }
}

#[test]
fn summary_lists_results_and_failures() {
    let rendered = summary_table(&run_result()).to_string();

    assert!(rendered.contains("Smoking vs Diagnosis"));
    assert!(rendered.contains("Chi-square"));
    assert!(rendered.contains("0.0914"));
    assert!(rendered.contains("0.7624"));
    assert!(rendered.contains("Not Significant"));
    assert!(rendered.contains("charts/h1_lifestyle.svg"));
    assert!(rendered.contains("ANOVA"));
    assert!(rendered.contains("FAILED"));
}

#[test]
fn hypotheses_table_lists_all_four() {
    let rendered = hypotheses_table().to_string();

    for hypothesis in Hypothesis::ALL {
        assert!(rendered.contains(hypothesis.code()));
        assert!(rendered.contains(hypothesis.slug()));
    }
}

#[test]
fn failed_report_json() {
    let report = &run_result().hypotheses[1];

    insta::assert_json_snapshot!(report, @r#"
    {
      "hypothesis": "education",
      "status": "failed",
      "error": "H2 Average MMSE by Education Level: required column 'MMSE' not found",
      "chart": null
    }
    "#);
}
