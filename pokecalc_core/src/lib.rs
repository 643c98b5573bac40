//! pokecalc_core - Capture and damage calculations for a battle reference tool
//!
//! This library provides:
//! - Type chart: 18×18 attacking vs defending multipliers
//! - Ball resolution: situational multipliers for conditional balls
//! - Capture probability: HP, catch rate, ball and status terms
//! - Damage range: min/max rolls, effectiveness label, hits to KO
//!
//! Every calculation is a pure function of its inputs.

pub mod ball;
pub mod capture;
pub mod config;
pub mod constants;
pub mod damage;
pub mod prelude;
pub mod rounding;
pub mod type_chart;
pub mod types;

// Re-export core types for convenience
pub use ball::{find_ball, resolve_ball, resolve_ball_multiplier, BallResolution, PokeBall, SituationalFlags, SpecialRule, POKE_BALLS};
pub use capture::{capture_probability, BreakdownTerm, CaptureInput, CaptureOutlook, CaptureResult};
pub use config::{default_balls, ConfigError};
pub use damage::{calculate_damage, DamageInput, DamageResult, HeldItem, HitsToKo, Typing};
pub use type_chart::{combined_effectiveness, effectiveness, Effectiveness, TYPE_CHART};
pub use types::{PokemonType, StatusCondition};
