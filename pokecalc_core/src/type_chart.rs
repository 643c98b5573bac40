//! Type chart - attacking type vs defending type multipliers
//!
//! Rows are attacking types, columns are defending types, both in
//! `PokemonType::ALL` order. Every pair is authored; nothing is derived.
//! Dual-typed defenders multiply the two single-type lookups, so a move
//! can land at ×0, ×0.25, ×0.5, ×1, ×2 or ×4.

use crate::types::{PokemonType, TYPE_COUNT};
use serde::{Deserialize, Serialize};

const X: f64 = 0.0;
const H: f64 = 0.5;
const N: f64 = 1.0;
const S: f64 = 2.0;

/// Effectiveness multipliers indexed `[attack][defend]`
#[rustfmt::skip]
pub const TYPE_CHART: [[f64; TYPE_COUNT]; TYPE_COUNT] = [
    // normal
    [N, N, N, N, N, N, N, N, N, N, N, N, H, X, N, N, H, N],
    // fire
    [N, H, H, N, S, S, N, N, N, N, N, S, H, N, H, N, S, N],
    // water
    [N, S, H, N, H, N, N, N, S, N, N, N, S, N, H, N, N, N],
    // electric
    [N, N, S, H, H, N, N, N, X, S, N, N, N, N, H, N, N, N],
    // grass
    [N, H, S, N, H, N, N, H, S, H, N, H, S, N, H, N, H, N],
    // ice
    [N, H, H, N, S, H, N, N, S, S, N, N, N, N, S, N, H, N],
    // fighting
    [S, N, N, N, N, S, N, H, N, H, H, H, S, X, N, S, S, H],
    // poison
    [N, N, N, N, S, N, N, H, H, N, N, N, H, H, N, N, X, S],
    // ground
    [N, S, N, S, H, N, N, S, N, X, N, H, S, N, N, N, S, N],
    // flying
    [N, N, N, H, S, N, S, N, N, N, N, S, H, N, N, N, H, N],
    // psychic
    [N, N, N, N, N, N, S, S, N, N, H, N, N, N, N, X, H, N],
    // bug
    [N, H, N, N, S, N, H, H, N, H, S, N, N, H, N, S, H, H],
    // rock
    [N, S, N, N, N, S, H, N, H, S, N, S, N, N, N, N, H, N],
    // ghost
    [X, N, N, N, N, N, N, N, N, N, S, N, N, S, N, H, N, N],
    // dragon
    [N, N, N, N, N, N, N, N, N, N, N, N, N, N, S, N, H, X],
    // dark
    [N, N, N, N, N, N, H, N, N, N, S, N, N, S, N, H, N, H],
    // steel
    [N, H, H, H, N, S, N, N, N, N, N, N, S, N, N, N, H, S],
    // fairy
    [N, H, N, N, N, N, S, H, N, N, N, N, N, N, S, S, H, N],
];

/// Multiplier for a single attacking type against a single defending type
pub fn effectiveness(attack: PokemonType, defend: PokemonType) -> f64 {
    TYPE_CHART[attack.index()][defend.index()]
}

/// Product of the per-type lookups for a (possibly dual-typed) defender
pub fn combined_effectiveness(attack: PokemonType, defenders: &[PokemonType]) -> f64 {
    defenders
        .iter()
        .map(|&defend| effectiveness(attack, defend))
        .product()
}

/// All 18 multipliers for one attacking type
pub fn row(attack: PokemonType) -> &'static [f64; TYPE_COUNT] {
    &TYPE_CHART[attack.index()]
}

/// Classification of a combined effectiveness multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    NoEffect,
    QuarterEffective,
    HalfEffective,
    Neutral,
    SuperEffective,
    DoubleSuperEffective,
}

impl Effectiveness {
    /// Classify an exact multiplier. Anything off the chart's codomain reads as neutral.
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier == 0.0 {
            Effectiveness::NoEffect
        } else if multiplier == 0.25 {
            Effectiveness::QuarterEffective
        } else if multiplier == 0.5 {
            Effectiveness::HalfEffective
        } else if multiplier == 2.0 {
            Effectiveness::SuperEffective
        } else if multiplier == 4.0 {
            Effectiveness::DoubleSuperEffective
        } else {
            Effectiveness::Neutral
        }
    }

    /// Display label shown next to a damage range
    pub fn label(&self) -> &'static str {
        match self {
            Effectiveness::NoEffect => "No Effect",
            Effectiveness::QuarterEffective => "×0.25 Not Very Effective",
            Effectiveness::HalfEffective => "×0.5 Not Very Effective",
            Effectiveness::Neutral => "Normal",
            Effectiveness::SuperEffective => "×2 Super Effective",
            Effectiveness::DoubleSuperEffective => "×4 Super Effective",
        }
    }

    pub fn is_resisted(&self) -> bool {
        matches!(
            self,
            Effectiveness::QuarterEffective | Effectiveness::HalfEffective
        )
    }

    pub fn is_super_effective(&self) -> bool {
        matches!(
            self,
            Effectiveness::SuperEffective | Effectiveness::DoubleSuperEffective
        )
    }
}

/// Compact chart cell symbol for a multiplier
pub fn chart_symbol(multiplier: f64) -> &'static str {
    match Effectiveness::from_multiplier(multiplier) {
        Effectiveness::NoEffect => "0",
        Effectiveness::QuarterEffective => "¼",
        Effectiveness::HalfEffective => "½",
        Effectiveness::Neutral => "1",
        Effectiveness::SuperEffective => "2",
        Effectiveness::DoubleSuperEffective => "4",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PokemonType::*;

    #[test]
    fn test_spot_checks() {
        assert_eq!(effectiveness(Water, Fire), 2.0);
        assert_eq!(effectiveness(Fire, Water), 0.5);
        assert_eq!(effectiveness(Electric, Ground), 0.0);
        assert_eq!(effectiveness(Ghost, Normal), 0.0);
        assert_eq!(effectiveness(Fighting, Ghost), 0.0);
        assert_eq!(effectiveness(Dragon, Fairy), 0.0);
    }

    #[test]
    fn test_self_matchups_are_authored() {
        assert_eq!(effectiveness(Normal, Normal), 1.0);
        assert_eq!(effectiveness(Rock, Rock), 1.0);
        assert_eq!(effectiveness(Fire, Fire), 0.5);
        assert_eq!(effectiveness(Dragon, Dragon), 2.0);
        assert_eq!(effectiveness(Ghost, Ghost), 2.0);
    }

    #[test]
    fn test_chart_is_not_symmetric() {
        assert_eq!(effectiveness(Ground, Flying), 0.0);
        assert_eq!(effectiveness(Flying, Ground), 1.0);
    }

    /// (attack, super effective against, resisted by, no effect on)
    #[rustfmt::skip]
    const MATCHUPS: [(PokemonType, &[PokemonType], &[PokemonType], &[PokemonType]); 18] = [
        (Normal,   &[],                                  &[Rock, Steel],                                        &[Ghost]),
        (Fire,     &[Grass, Ice, Bug, Steel],            &[Fire, Water, Rock, Dragon],                          &[]),
        (Water,    &[Fire, Ground, Rock],                &[Water, Grass, Dragon],                               &[]),
        (Electric, &[Water, Flying],                     &[Electric, Grass, Dragon],                            &[Ground]),
        (Grass,    &[Water, Ground, Rock],               &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],    &[]),
        (Ice,      &[Grass, Ground, Flying, Dragon],     &[Fire, Water, Ice, Steel],                            &[]),
        (Fighting, &[Normal, Ice, Rock, Dark, Steel],    &[Poison, Flying, Psychic, Bug, Fairy],                &[Ghost]),
        (Poison,   &[Grass, Fairy],                      &[Poison, Ground, Rock, Ghost],                        &[Steel]),
        (Ground,   &[Fire, Electric, Poison, Rock, Steel], &[Grass, Bug],                                       &[Flying]),
        (Flying,   &[Grass, Fighting, Bug],              &[Electric, Rock, Steel],                              &[]),
        (Psychic,  &[Fighting, Poison],                  &[Psychic, Steel],                                     &[Dark]),
        (Bug,      &[Grass, Psychic, Dark],              &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy], &[]),
        (Rock,     &[Fire, Ice, Flying, Bug],            &[Fighting, Ground, Steel],                            &[]),
        (Ghost,    &[Psychic, Ghost],                    &[Dark],                                               &[Normal]),
        (Dragon,   &[Dragon],                            &[Steel],                                              &[Fairy]),
        (Dark,     &[Psychic, Ghost],                    &[Fighting, Dark, Fairy],                              &[]),
        (Steel,    &[Ice, Rock, Fairy],                  &[Fire, Water, Electric, Steel],                       &[]),
        (Fairy,    &[Fighting, Dragon, Dark],            &[Fire, Poison, Steel],                                &[]),
    ];

    #[test]
    fn test_full_chart_matches_matchup_lists() {
        for (i, (attack, strong, weak, immune)) in MATCHUPS.iter().enumerate() {
            assert_eq!(attack.index(), i, "matchup rows out of chart order");
            for defend in PokemonType::ALL {
                let expected = if strong.contains(&defend) {
                    2.0
                } else if weak.contains(&defend) {
                    0.5
                } else if immune.contains(&defend) {
                    0.0
                } else {
                    1.0
                };
                assert_eq!(
                    effectiveness(*attack, defend),
                    expected,
                    "{attack} vs {defend}"
                );
            }
        }
    }

    #[test]
    fn test_every_cell_is_a_chart_value() {
        for attack in PokemonType::ALL {
            for defend in PokemonType::ALL {
                let m = effectiveness(attack, defend);
                assert!(
                    [0.0, 0.5, 1.0, 2.0].contains(&m),
                    "{attack} vs {defend} = {m}"
                );
            }
        }
    }

    #[test]
    fn test_dual_type_multiplies() {
        assert_eq!(combined_effectiveness(Water, &[Ground, Fire]), 4.0);
        assert_eq!(combined_effectiveness(Fire, &[Water, Dragon]), 0.25);
        assert_eq!(combined_effectiveness(Electric, &[Water, Ground]), 0.0);
        assert_eq!(combined_effectiveness(Ice, &[Grass, Flying]), 4.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Effectiveness::from_multiplier(0.0).label(), "No Effect");
        assert_eq!(
            Effectiveness::from_multiplier(0.25).label(),
            "×0.25 Not Very Effective"
        );
        assert_eq!(
            Effectiveness::from_multiplier(0.5).label(),
            "×0.5 Not Very Effective"
        );
        assert_eq!(Effectiveness::from_multiplier(1.0).label(), "Normal");
        assert_eq!(Effectiveness::from_multiplier(2.0).label(), "×2 Super Effective");
        assert_eq!(Effectiveness::from_multiplier(4.0).label(), "×4 Super Effective");
    }

    #[test]
    fn test_row_view() {
        let fire = row(Fire);
        assert_eq!(fire[Grass.index()], 2.0);
        assert_eq!(fire[Rock.index()], 0.5);
        assert_eq!(fire.len(), 18);
    }

    #[test]
    fn test_chart_symbols() {
        assert_eq!(chart_symbol(0.25), "¼");
        assert_eq!(chart_symbol(0.5), "½");
        assert_eq!(chart_symbol(4.0), "4");
    }
}
