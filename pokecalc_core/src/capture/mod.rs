//! Capture probability
//!
//! Formula:
//! - hp_factor = (3 × MaxHP − 2 × CurrentHP) / (3 × MaxHP)
//! - modified_rate = hp_factor × catch_rate × ball × status
//! - probability = modified_rate / 255 × 100, clamped to [0, 100]
//!
//! A modified rate of 255 or more, or a ball multiplier of 255 or more, is a
//! guaranteed catch.

mod result;

pub use result::{BreakdownTerm, CaptureOutlook, CaptureResult};

use crate::constants::{CATCH_RATE_CEILING, GUARANTEED_BALL_MULTIPLIER};
use crate::rounding::round_half_up;
use serde::{Deserialize, Serialize};

/// Inputs to the capture formula
///
/// Callers guarantee `max_hp > 0`, `0 < current_hp <= max_hp` and
/// `base_catch_rate` in 1..=255. Values outside those ranges produce
/// defined but meaningless results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureInput {
    pub max_hp: u32,
    pub current_hp: u32,
    pub base_catch_rate: u32,
    /// Already resolved for the situation, see [`crate::ball::resolve_ball_multiplier`]
    pub ball_multiplier: f64,
    pub status_multiplier: f64,
    /// Carried for display only
    pub level: u32,
}

/// HP term of the capture formula, unrounded
pub fn hp_factor(max_hp: u32, current_hp: u32) -> f64 {
    let max = max_hp as f64;
    let current = current_hp as f64;
    (3.0 * max - 2.0 * current) / (3.0 * max)
}

/// Calculate capture probability for a wild creature
pub fn capture_probability(input: &CaptureInput) -> CaptureResult {
    let hp_factor = hp_factor(input.max_hp, input.current_hp);
    let catch_rate = input.base_catch_rate as f64;
    let modified_rate = hp_factor * catch_rate * input.ball_multiplier * input.status_multiplier;

    let probability = if modified_rate >= CATCH_RATE_CEILING
        || input.ball_multiplier >= GUARANTEED_BALL_MULTIPLIER
    {
        100.0
    } else {
        (modified_rate / CATCH_RATE_CEILING * 100.0).clamp(0.0, 100.0)
    };

    tracing::debug!(
        max_hp = input.max_hp,
        current_hp = input.current_hp,
        catch_rate = input.base_catch_rate,
        ball = input.ball_multiplier,
        status = input.status_multiplier,
        probability,
        "capture probability"
    );

    CaptureResult {
        probability: round_half_up(probability, 2),
        hp_factor: round_half_up(hp_factor, 3),
        modified_catch_rate: round_half_up(modified_rate, 2),
        breakdown: vec![
            BreakdownTerm::new("HP Factor", hp_factor, format!("×{:.3}", hp_factor)),
            BreakdownTerm::new(
                "Base Catch Rate",
                catch_rate,
                format!("{}/255", input.base_catch_rate),
            ),
            BreakdownTerm::new(
                "Ball Multiplier",
                input.ball_multiplier,
                format!("×{}", input.ball_multiplier),
            ),
            BreakdownTerm::new(
                "Status Multiplier",
                input.status_multiplier,
                format!("×{}", input.status_multiplier),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(max_hp: u32, current_hp: u32, catch_rate: u32, ball: f64, status: f64) -> CaptureInput {
        CaptureInput {
            max_hp,
            current_hp,
            base_catch_rate: catch_rate,
            ball_multiplier: ball,
            status_multiplier: status,
            level: 50,
        }
    }

    #[test]
    fn test_half_hp_poke_ball() {
        // (300 - 100) / 300 = 0.667; 0.667 * 45 = 30; 30 / 255 = 11.76%
        let result = capture_probability(&input(100, 50, 45, 1.0, 1.0));
        assert!((result.hp_factor - 0.667).abs() < f64::EPSILON);
        assert!((result.modified_catch_rate - 30.0).abs() < f64::EPSILON);
        assert!((result.probability - 11.76).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_hp_factor_is_one_third() {
        let result = capture_probability(&input(200, 200, 45, 1.0, 1.0));
        assert!((result.hp_factor - 0.333).abs() < f64::EPSILON);
    }

    #[test]
    fn test_one_hp_approaches_one() {
        let factor = hp_factor(999, 1);
        assert!(factor > 0.999);
        assert!(factor < 1.0);
    }

    #[test]
    fn test_master_ball_always_catches() {
        let result = capture_probability(&input(100, 100, 3, 255.0, 1.0));
        assert!((result.probability - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rate_over_ceiling_caps_at_hundred() {
        // 1.0 hp-ish * 255 * 2.0 * 2.5 far exceeds 255
        let result = capture_probability(&input(100, 1, 255, 2.0, 2.5));
        assert!((result.probability - 100.0).abs() < f64::EPSILON);
        assert!(result.modified_catch_rate > 255.0);
    }

    #[test]
    fn test_status_scales_rate() {
        let plain = capture_probability(&input(100, 50, 45, 1.0, 1.0));
        let asleep = capture_probability(&input(100, 50, 45, 1.0, 2.5));
        assert!((asleep.modified_catch_rate - 75.0).abs() < f64::EPSILON);
        assert!(asleep.probability > plain.probability);
    }

    #[test]
    fn test_breakdown_order_and_effects() {
        let result = capture_probability(&input(100, 50, 45, 1.5, 2.5));
        let labels: Vec<&str> = result.breakdown.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            ["HP Factor", "Base Catch Rate", "Ball Multiplier", "Status Multiplier"]
        );
        assert_eq!(result.breakdown[0].effect, "×0.667");
        assert_eq!(result.breakdown[1].effect, "45/255");
        assert_eq!(result.breakdown[2].effect, "×1.5");
        assert_eq!(result.breakdown[3].effect, "×2.5");
    }

    #[test]
    fn test_current_over_max_is_not_rejected() {
        // Precondition violation: hp_factor goes negative, probability clamps to 0
        let result = capture_probability(&input(10, 20, 45, 1.0, 1.0));
        assert!(result.hp_factor < 0.0);
        assert!((result.probability - 0.0).abs() < f64::EPSILON);
    }
}
