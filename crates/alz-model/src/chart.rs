//! Backend-independent chart descriptions.
//!
//! Hypothesis runners describe what to draw; the report crate decides how.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Shared colour palette: crimson, pink, blue, lavender.
pub const PALETTE: [Rgb; 4] = [
    Rgb(0xb3, 0x00, 0x47),
    Rgb(0xff, 0x4d, 0xc4),
    Rgb(0x00, 0x00, 0xe6),
    Rgb(0x99, 0x99, 0xff),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub subtitle: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

/// Group mean with a confidence interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointEstimate {
    pub label: String,
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointChart {
    pub title: String,
    pub subtitle: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<PointEstimate>,
}

/// One density curve, sampled on a shared grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensitySeries {
    pub label: String,
    pub color: Rgb,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityChart {
    pub title: String,
    pub subtitle: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<DensitySeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartSpec {
    Bar(BarChart),
    Point(PointChart),
    Density(DensityChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Bar(chart) => &chart.title,
            ChartSpec::Point(chart) => &chart.title,
            ChartSpec::Density(chart) => &chart.title,
        }
    }

    pub fn subtitle(&self) -> &str {
        match self {
            ChartSpec::Bar(chart) => &chart.subtitle,
            ChartSpec::Point(chart) => &chart.subtitle,
            ChartSpec::Density(chart) => &chart.subtitle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_hex() {
        let hex: Vec<_> = PALETTE.iter().map(|c| c.hex()).collect();
        assert_eq!(hex, vec!["#b30047", "#ff4dc4", "#0000e6", "#9999ff"]);
    }
}
