use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hypothesis::{Hypothesis, StatTest};

/// Probability cutoff below which a result is labelled significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Significance {
    Significant,
    NotSignificant,
}

impl Significance {
    /// Classifies a p-value against [`SIGNIFICANCE_LEVEL`].
    ///
    /// NaN is never significant.
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < SIGNIFICANCE_LEVEL {
            Significance::Significant
        } else {
            Significance::NotSignificant
        }
    }

    pub fn is_significant(self) -> bool {
        self == Significance::Significant
    }

    pub fn label(self) -> &'static str {
        match self {
            Significance::Significant => "Significant",
            Significance::NotSignificant => "Not Significant",
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Size and mean of one comparison group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub label: String,
    pub count: usize,
    pub mean: f64,
}

/// Outcome of one hypothesis test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HypothesisResult {
    pub hypothesis: Hypothesis,
    pub test: StatTest,
    /// Test statistic (chi-square, t or F).
    pub statistic: f64,
    pub p_value: f64,
    /// Degrees of freedom; ANOVA reports between- and within-group values.
    pub degrees_of_freedom: Vec<f64>,
    pub significance: Significance,
    pub groups: Vec<GroupSummary>,
}

impl HypothesisResult {
    pub fn new(
        hypothesis: Hypothesis,
        statistic: f64,
        p_value: f64,
        degrees_of_freedom: Vec<f64>,
        groups: Vec<GroupSummary>,
    ) -> Self {
        Self {
            hypothesis,
            test: hypothesis.test(),
            statistic,
            p_value,
            degrees_of_freedom,
            significance: Significance::from_p_value(p_value),
            groups,
        }
    }
}
