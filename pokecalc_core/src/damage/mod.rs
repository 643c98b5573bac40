//! Damage range - base damage, modifiers and roll bounds
//!
//! Formula:
//! - base = floor((2 × Level / 5 + 2) × Power × Atk / Def / 50) + 2
//! - modifier = STAB × TypeEffectiveness × Crit × Item
//! - min = floor(base × modifier × 0.85), max = floor(base × modifier × 1.00)
//!
//! The random roll is reported as its two bounds; nothing is sampled.
//! Damage figures are `u64` and saturate at `u64::MAX` instead of wrapping.

mod item;
mod result;
mod typing;

pub use item::HeldItem;
pub use result::{average_damage, DamageBreakdownTerm, DamageResult, HitsToKo};
pub use typing::{Typing, TypingError};

use crate::constants::{
    CRITICAL_MULTIPLIER, MAX_DAMAGE_ROLL, MIN_DAMAGE_ROLL, REFERENCE_HP, STAB_MULTIPLIER,
};
use crate::type_chart::{combined_effectiveness, Effectiveness};
use crate::types::PokemonType;
use serde::{Deserialize, Serialize};

/// Inputs to the damage formula
///
/// Callers guarantee `level` in 1..=100, `attack > 0`, `defense > 0` and
/// `item_multiplier > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageInput {
    pub level: u32,
    pub power: u32,
    /// Attack or Sp. Atk, whichever the move uses
    pub attack: u32,
    /// Defense or Sp. Def
    pub defense: u32,
    pub attacker: Typing,
    pub defender: Typing,
    pub move_type: PokemonType,
    pub critical: bool,
    pub item_multiplier: f64,
}

/// Base damage before any multiplier
pub fn base_damage(level: u32, power: u32, attack: u32, defense: u32) -> u64 {
    let level_term = 2.0 * level as f64 / 5.0 + 2.0;
    let raw = level_term * power as f64 * attack as f64 / defense as f64 / 50.0;
    // float-to-int casts saturate
    (raw.floor() as u64).saturating_add(2)
}

/// Calculate the damage range of one hit
pub fn calculate_damage(input: &DamageInput) -> DamageResult {
    let type_effectiveness = combined_effectiveness(input.move_type, input.defender.types());
    let has_stab = input.attacker.contains(input.move_type);
    let stab = if has_stab { STAB_MULTIPLIER } else { 1.0 };
    let crit = if input.critical { CRITICAL_MULTIPLIER } else { 1.0 };

    let base = base_damage(input.level, input.power, input.attack, input.defense);
    let scaled = base as f64 * stab * type_effectiveness * crit * input.item_multiplier;

    let min = (scaled * MIN_DAMAGE_ROLL).floor() as u64;
    let max = (scaled * MAX_DAMAGE_ROLL).floor() as u64;

    let effectiveness = Effectiveness::from_multiplier(type_effectiveness);

    let average = average_damage(min, max);
    let hits_to_ko = if average > 0.0 {
        HitsToKo::Hits((REFERENCE_HP / average).ceil() as u32)
    } else {
        HitsToKo::Unbounded
    };

    tracing::debug!(
        base,
        stab,
        type_effectiveness,
        crit,
        item = input.item_multiplier,
        min,
        max,
        "damage range"
    );

    DamageResult {
        min,
        max,
        base_damage: base,
        type_effectiveness,
        effectiveness,
        effectiveness_label: effectiveness.label().to_string(),
        stab: has_stab,
        hits_to_ko,
        breakdown: vec![
            DamageBreakdownTerm::new("Base Power", input.power.to_string()),
            DamageBreakdownTerm::new(
                "Attack/Defense",
                format!("{}/{}", input.attack, input.defense),
            ),
            DamageBreakdownTerm::new("STAB", format!("×{:.1}", stab)),
            DamageBreakdownTerm::new("Type Effectiveness", format!("×{}", type_effectiveness)),
            DamageBreakdownTerm::new("Critical Hit", format!("×{:.1}", crit)),
            DamageBreakdownTerm::new("Item Bonus", format!("×{}", input.item_multiplier)),
        ],
    }
}
