//! Ball multiplier resolution from the battle situation

use super::{PokeBall, SpecialRule};
use crate::constants::{CONDITION_UNMET_MULTIPLIER, TIMER_BALL_CAP, TIMER_BALL_STEP};
use crate::rounding::round_half_up;
use serde::{Deserialize, Serialize};

/// Situational inputs a conditional ball may consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationalFlags {
    pub is_first_turn: bool,
    pub is_night_or_cave: bool,
    pub is_water_encounter: bool,
    pub is_previously_caught: bool,
    /// Turns elapsed, starting at 1
    pub turn_count: u32,
    pub defender_is_water_or_bug: bool,
}

impl Default for SituationalFlags {
    fn default() -> Self {
        SituationalFlags {
            is_first_turn: true,
            is_night_or_cave: false,
            is_water_encounter: false,
            is_previously_caught: false,
            turn_count: 1,
            defender_is_water_or_bug: false,
        }
    }
}

/// Resolved multiplier plus whether the ball's condition was met
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallResolution {
    pub multiplier: f64,
    /// True when the resolved multiplier equals the ball's full multiplier.
    /// Flat balls always report true.
    pub condition_met: bool,
}

/// Timer Ball multiplier for a turn count: `min(4.0, 1 + 0.3 * turns)` to one decimal
pub fn timer_ball_multiplier(turn_count: u32) -> f64 {
    let raw = (1.0 + TIMER_BALL_STEP * turn_count as f64).min(TIMER_BALL_CAP);
    round_half_up(raw, 1)
}

fn gated(condition: bool, rule: SpecialRule) -> f64 {
    if condition {
        rule.boosted_multiplier()
    } else {
        CONDITION_UNMET_MULTIPLIER
    }
}

impl SpecialRule {
    /// Multiplier this rule yields under the given flags
    pub fn multiplier(&self, flags: &SituationalFlags) -> f64 {
        match self {
            SpecialRule::FirstTurn => gated(flags.is_first_turn, *self),
            SpecialRule::NightCave => gated(flags.is_night_or_cave, *self),
            SpecialRule::WaterEncounter => gated(flags.is_water_encounter, *self),
            SpecialRule::Repeat => gated(flags.is_previously_caught, *self),
            SpecialRule::WaterBug => gated(flags.defender_is_water_or_bug, *self),
            SpecialRule::OverTime => timer_ball_multiplier(flags.turn_count),
        }
    }
}

/// Effective catch multiplier of `ball` in the given situation
pub fn resolve_ball_multiplier(ball: &PokeBall, flags: &SituationalFlags) -> f64 {
    let multiplier = match ball.special {
        None => ball.multiplier,
        Some(rule) => rule.multiplier(flags),
    };
    tracing::trace!(ball = %ball.id, multiplier, "resolved ball multiplier");
    multiplier
}

/// Resolve `ball` and report whether its condition was met
pub fn resolve_ball(ball: &PokeBall, flags: &SituationalFlags) -> BallResolution {
    let multiplier = resolve_ball_multiplier(ball, flags);
    BallResolution {
        multiplier,
        condition_met: multiplier == ball.multiplier,
    }
}
