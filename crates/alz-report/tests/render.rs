//! Rendering charts to SVG files.

use alz_model::{
    Bar, BarChart, ChartSpec, DensityChart, DensitySeries, Hypothesis, PALETTE, PointChart,
    PointEstimate,
};
use alz_report::{ReportError, render_chart, write_chart_outputs};
use tempfile::TempDir;

fn bar_chart() -> ChartSpec {
    ChartSpec::Bar(BarChart {
        title: "Smoking vs Diagnosis".to_string(),
        subtitle: "Result: Not Significant (p = 0.5040)".to_string(),
        x_label: "Smoking Status (0=No, 1=Yes)".to_string(),
        y_label: "AD Diagnosis Rate".to_string(),
        bars: vec![
            Bar {
                label: "0".to_string(),
                value: 0.35,
                color: PALETTE[0],
            },
            Bar {
                label: "1".to_string(),
                value: 0.37,
                color: PALETTE[1],
            },
        ],
    })
}

fn point_chart() -> ChartSpec {
    ChartSpec::Point(PointChart {
        title: "Physical Activity by Diagnosis".to_string(),
        subtitle: "Result: Significant (p = 0.0123)".to_string(),
        x_label: "Diagnosis Group".to_string(),
        y_label: "Average Physical Activity Score".to_string(),
        points: vec![
            PointEstimate {
                label: "Healthy".to_string(),
                mean: 4.9,
                lower: 4.7,
                upper: 5.1,
                color: PALETTE[2],
            },
            PointEstimate {
                label: "Alzheimer".to_string(),
                mean: 4.6,
                lower: 4.3,
                upper: 4.9,
                color: PALETTE[0],
            },
        ],
    })
}

fn density_chart() -> ChartSpec {
    let curve = |shift: f64| {
        (0..50).map(move |i| {
            let x = f64::from(i) / 5.0;
            (x, (-(x - shift).powi(2) / 2.0).exp() / 2.5)
        })
    };
    ChartSpec::Density(DensityChart {
        title: "Sleep Quality vs Memory Complaints".to_string(),
        subtitle: "T-test Result: Not Significant (p = 0.2155)".to_string(),
        x_label: "SleepQuality".to_string(),
        y_label: "Density".to_string(),
        series: vec![
            DensitySeries {
                label: "0".to_string(),
                color: PALETTE[2],
                points: curve(4.0).collect(),
            },
            DensitySeries {
                label: "1".to_string(),
                color: PALETTE[3],
                points: curve(6.0).collect(),
            },
        ],
    })
}

fn read(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).expect("read svg")
}

#[test]
fn renders_each_chart_kind_as_svg() {
    let dir = TempDir::new().unwrap();

    for (name, spec) in [
        ("bar.svg", bar_chart()),
        ("point.svg", point_chart()),
        ("density.svg", density_chart()),
    ] {
        let path = render_chart(&spec, &dir.path().join(name)).unwrap();
        let svg = read(&path);
        assert!(svg.contains("<svg"), "{name} is not an svg");
        assert!(svg.contains(spec.title()), "{name} is missing its title");
    }
}

#[test]
fn creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("charts").join("bar.svg");

    render_chart(&bar_chart(), &path).unwrap();

    assert!(path.is_file());
}

#[test]
fn palette_colours_reach_the_file() {
    let dir = TempDir::new().unwrap();
    let path = render_chart(&bar_chart(), &dir.path().join("bar.svg")).unwrap();

    let svg = read(&path).to_ascii_uppercase();
    assert!(svg.contains("#B30047"));
    assert!(svg.contains("#FF4DC4"));
}

#[test]
fn empty_chart_is_rejected() {
    let dir = TempDir::new().unwrap();
    let ChartSpec::Bar(mut chart) = bar_chart() else {
        unreachable!()
    };
    chart.bars.clear();

    let err = render_chart(&ChartSpec::Bar(chart), &dir.path().join("empty.svg")).unwrap_err();

    assert!(matches!(err, ReportError::NoData { .. }));
    assert!(!dir.path().join("empty.svg").exists());
}

#[test]
fn outputs_use_hypothesis_file_names() {
    let dir = TempDir::new().unwrap();
    let bar = bar_chart();
    let point = point_chart();

    let written = write_chart_outputs(
        dir.path(),
        &[
            (Hypothesis::Lifestyle, &bar),
            (Hypothesis::PhysicalActivity, &point),
        ],
    );

    assert_eq!(
        written,
        vec![
            (Hypothesis::Lifestyle, dir.path().join("h1_lifestyle.svg")),
            (
                Hypothesis::PhysicalActivity,
                dir.path().join("h4_physical_activity.svg")
            ),
        ]
    );
}

#[test]
fn failed_chart_is_skipped() {
    let dir = TempDir::new().unwrap();
    let bar = bar_chart();
    let empty = ChartSpec::Point(PointChart {
        title: "Average MMSE by Education Level".to_string(),
        subtitle: String::new(),
        x_label: String::new(),
        y_label: String::new(),
        points: Vec::new(),
    });

    let written = write_chart_outputs(
        dir.path(),
        &[(Hypothesis::Education, &empty), (Hypothesis::Lifestyle, &bar)],
    );

    assert_eq!(
        written,
        vec![(Hypothesis::Lifestyle, dir.path().join("h1_lifestyle.svg"))]
    );
}
