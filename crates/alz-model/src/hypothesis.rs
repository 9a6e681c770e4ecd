use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four hypotheses examined by the pipeline.
///
/// Declaration order is the execution order of the pipeline; the `H`
/// numbers follow the study write-up and are not sequential in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hypothesis {
    /// H1: smoking is associated with diagnosis.
    Lifestyle,
    /// H4: physical activity differs between diagnosed and healthy groups.
    PhysicalActivity,
    /// H2: MMSE score differs across education levels.
    Education,
    /// H3: sleep quality differs with memory complaints.
    Sleep,
}

/// Statistical test family used by a hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatTest {
    ChiSquare,
    TTest,
    Anova,
}

impl Hypothesis {
    /// All hypotheses in execution order.
    pub const ALL: [Hypothesis; 4] = [
        Hypothesis::Lifestyle,
        Hypothesis::PhysicalActivity,
        Hypothesis::Education,
        Hypothesis::Sleep,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Hypothesis::Lifestyle => "H1",
            Hypothesis::Education => "H2",
            Hypothesis::Sleep => "H3",
            Hypothesis::PhysicalActivity => "H4",
        }
    }

    /// Kebab-case name used on the command line and in file names.
    pub fn slug(self) -> &'static str {
        match self {
            Hypothesis::Lifestyle => "lifestyle",
            Hypothesis::PhysicalActivity => "physical-activity",
            Hypothesis::Education => "education",
            Hypothesis::Sleep => "sleep",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Hypothesis::Lifestyle => "Smoking vs Diagnosis",
            Hypothesis::PhysicalActivity => "Physical Activity by Diagnosis",
            Hypothesis::Education => "Average MMSE by Education Level",
            Hypothesis::Sleep => "Sleep Quality vs Memory Complaints",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Hypothesis::Lifestyle => {
                "Link between smoking and Alzheimer's diagnosis (chi-square test of independence)"
            }
            Hypothesis::PhysicalActivity => {
                "Link between physical activity and diagnosis (independent t-test, missing values omitted)"
            }
            Hypothesis::Education => {
                "Link between education level and MMSE score (one-way ANOVA)"
            }
            Hypothesis::Sleep => {
                "Impact of sleep quality on memory complaints (independent t-test)"
            }
        }
    }

    pub fn test(self) -> StatTest {
        match self {
            Hypothesis::Lifestyle => StatTest::ChiSquare,
            Hypothesis::PhysicalActivity | Hypothesis::Sleep => StatTest::TTest,
            Hypothesis::Education => StatTest::Anova,
        }
    }

    /// File name of the chart rendered for this hypothesis.
    pub fn chart_file_name(self) -> String {
        format!(
            "{}_{}.svg",
            self.code().to_lowercase(),
            self.slug().replace('-', "_")
        )
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.title())
    }
}

impl StatTest {
    pub fn label(self) -> &'static str {
        match self {
            StatTest::ChiSquare => "Chi-square",
            StatTest::TTest => "T-test",
            StatTest::Anova => "ANOVA",
        }
    }
}

impl fmt::Display for StatTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hypothesis '{0}' (expected one of: lifestyle, physical-activity, education, sleep, H1-H4)")]
pub struct ParseHypothesisError(pub String);

impl FromStr for Hypothesis {
    type Err = ParseHypothesisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Hypothesis::ALL
            .into_iter()
            .find(|hypothesis| {
                hypothesis.slug().eq_ignore_ascii_case(needle)
                    || hypothesis.code().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseHypothesisError(value.to_string()))
    }
}
