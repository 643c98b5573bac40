//! CaptureResult - Outcome of a capture calculation

use serde::{Deserialize, Serialize};

/// Result of the capture formula, rounded for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureResult {
    /// Catch chance in percent, 2 decimal places
    pub probability: f64,
    /// HP term, 3 decimal places
    pub hp_factor: f64,
    /// Modified catch rate out of 255, 2 decimal places
    pub modified_catch_rate: f64,
    /// HP factor, catch rate, ball and status terms, in that order
    pub breakdown: Vec<BreakdownTerm>,
}

impl CaptureResult {
    /// Qualitative band for the probability
    pub fn outlook(&self) -> CaptureOutlook {
        CaptureOutlook::from_probability(self.probability)
    }

    /// Whether the catch cannot fail
    pub fn is_guaranteed(&self) -> bool {
        self.probability >= 100.0
    }
}

/// One labelled input term, echoed for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownTerm {
    pub label: String,
    /// Unrounded value
    pub value: f64,
    /// Display form, e.g. "×0.667" or "45/255"
    pub effect: String,
}

impl BreakdownTerm {
    pub fn new(label: &str, value: f64, effect: String) -> Self {
        BreakdownTerm {
            label: label.to_string(),
            value,
            effect,
        }
    }
}

/// How likely a catch is, in broad bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureOutlook {
    VeryLikely,
    Good,
    Possible,
    Tough,
}

impl CaptureOutlook {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 75.0 {
            CaptureOutlook::VeryLikely
        } else if probability >= 50.0 {
            CaptureOutlook::Good
        } else if probability >= 25.0 {
            CaptureOutlook::Possible
        } else {
            CaptureOutlook::Tough
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CaptureOutlook::VeryLikely => "Very likely to catch!",
            CaptureOutlook::Good => "Good chance!",
            CaptureOutlook::Possible => "Keep trying...",
            CaptureOutlook::Tough => "This will be tough!",
        }
    }
}
