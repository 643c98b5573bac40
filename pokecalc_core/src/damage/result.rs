//! DamageResult - Outcome of a damage calculation

use crate::type_chart::Effectiveness;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage range of a single hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Damage at the lowest roll (0.85)
    pub min: u64,
    /// Damage at the highest roll (1.00)
    pub max: u64,
    /// Damage before STAB, type, crit and item multipliers
    pub base_damage: u64,
    /// Product over the defender's types
    pub type_effectiveness: f64,
    pub effectiveness: Effectiveness,
    pub effectiveness_label: String,
    /// Whether the same-type bonus applied
    pub stab: bool,
    /// Hits to drop a 100 HP reference target at average damage
    pub hits_to_ko: HitsToKo,
    /// Power, attack/defense, STAB, type, crit and item terms, in that order
    pub breakdown: Vec<DamageBreakdownTerm>,
}

impl DamageResult {
    pub fn average(&self) -> f64 {
        average_damage(self.min, self.max)
    }

    /// Range as "min - max"
    pub fn range_summary(&self) -> String {
        format!("{} - {}", self.min, self.max)
    }
}

/// Midpoint of a damage range, computed in f64 so saturated bounds cannot overflow
pub fn average_damage(min: u64, max: u64) -> f64 {
    (min as f64 + max as f64) / 2.0
}

/// Hit count estimate against the reference HP pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitsToKo {
    Hits(u32),
    /// Average damage is zero; the target never falls
    Unbounded,
}

impl fmt::Display for HitsToKo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitsToKo::Hits(n) => write!(f, "{}", n),
            HitsToKo::Unbounded => f.write_str("∞"),
        }
    }
}

/// One labelled term, echoed for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageBreakdownTerm {
    pub label: String,
    pub value: String,
}

impl DamageBreakdownTerm {
    pub fn new(label: &str, value: String) -> Self {
        DamageBreakdownTerm {
            label: label.to_string(),
            value,
        }
    }
}
