//! Core types shared by the calculators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of elemental types in the chart
pub const TYPE_COUNT: usize = 18;

/// Elemental type of a creature or move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// All types, in chart order
    pub const ALL: [PokemonType; TYPE_COUNT] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Grass,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    /// Row/column index into the type chart
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase tag, as used in config files
    pub fn name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }

    /// Three-letter abbreviation for narrow table headers
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Next type in chart order, wrapping around
    pub fn next(self) -> PokemonType {
        PokemonType::ALL[(self.index() + 1) % TYPE_COUNT]
    }

    /// Previous type in chart order, wrapping around
    pub fn prev(self) -> PokemonType {
        PokemonType::ALL[(self.index() + TYPE_COUNT - 1) % TYPE_COUNT]
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised type or status tag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} tag: {tag}")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub tag: String,
}

impl FromStr for PokemonType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        PokemonType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == lower)
            .ok_or_else(|| ParseTagError {
                kind: "type",
                tag: s.to_string(),
            })
    }
}

/// Non-volatile status condition of a wild creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCondition {
    #[default]
    None,
    Sleep,
    Freeze,
    Paralysis,
    Burn,
    Poison,
}

impl StatusCondition {
    pub const ALL: [StatusCondition; 6] = [
        StatusCondition::None,
        StatusCondition::Sleep,
        StatusCondition::Freeze,
        StatusCondition::Paralysis,
        StatusCondition::Burn,
        StatusCondition::Poison,
    ];

    /// Catch-rate multiplier bound to this status
    pub fn multiplier(&self) -> f64 {
        match self {
            StatusCondition::None => 1.0,
            StatusCondition::Sleep | StatusCondition::Freeze => 2.5,
            StatusCondition::Paralysis | StatusCondition::Burn | StatusCondition::Poison => 1.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatusCondition::None => "none",
            StatusCondition::Sleep => "sleep",
            StatusCondition::Freeze => "freeze",
            StatusCondition::Paralysis => "paralysis",
            StatusCondition::Burn => "burn",
            StatusCondition::Poison => "poison",
        }
    }

    /// In-game badge text
    pub fn abbreviation(&self) -> &'static str {
        match self {
            StatusCondition::None => "---",
            StatusCondition::Sleep => "SLP",
            StatusCondition::Freeze => "FRZ",
            StatusCondition::Paralysis => "PAR",
            StatusCondition::Burn => "BRN",
            StatusCondition::Poison => "PSN",
        }
    }
}

impl fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatusCondition {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        StatusCondition::ALL
            .iter()
            .copied()
            .find(|c| c.name() == lower)
            .ok_or_else(|| ParseTagError {
                kind: "status",
                tag: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_indices_follow_chart_order() {
        for (i, t) in PokemonType::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("fire".parse::<PokemonType>(), Ok(PokemonType::Fire));
        assert_eq!("Fairy".parse::<PokemonType>(), Ok(PokemonType::Fairy));
        assert!("shadow".parse::<PokemonType>().is_err());
    }

    #[test]
    fn test_type_cycling_wraps() {
        assert_eq!(PokemonType::Fairy.next(), PokemonType::Normal);
        assert_eq!(PokemonType::Normal.prev(), PokemonType::Fairy);
        assert_eq!(PokemonType::Fire.next(), PokemonType::Water);
    }

    #[test]
    fn test_short_names() {
        assert_eq!(PokemonType::Electric.short_name(), "ele");
        assert_eq!(PokemonType::Ice.short_name(), "ice");
    }

    #[test]
    fn test_status_multipliers() {
        assert!((StatusCondition::None.multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((StatusCondition::Sleep.multiplier() - 2.5).abs() < f64::EPSILON);
        assert!((StatusCondition::Freeze.multiplier() - 2.5).abs() < f64::EPSILON);
        assert!((StatusCondition::Paralysis.multiplier() - 1.5).abs() < f64::EPSILON);
        assert!((StatusCondition::Burn.multiplier() - 1.5).abs() < f64::EPSILON);
        assert!((StatusCondition::Poison.multiplier() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Sleep".parse::<StatusCondition>(), Ok(StatusCondition::Sleep));
        assert_eq!(" burn ".parse::<StatusCondition>(), Ok(StatusCondition::Burn));
        assert_eq!("none".parse::<StatusCondition>(), Ok(StatusCondition::None));
        let err = "confused".parse::<StatusCondition>().unwrap_err();
        assert_eq!(err.to_string(), "unknown status tag: confused");
    }

    #[test]
    fn test_status_abbreviations() {
        let badges: Vec<&str> = StatusCondition::ALL.iter().map(|s| s.abbreviation()).collect();
        assert_eq!(badges, ["---", "SLP", "FRZ", "PAR", "BRN", "PSN"]);
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&PokemonType::Psychic).unwrap();
        assert_eq!(json, "\"psychic\"");
        let status: StatusCondition = serde_json::from_str("\"paralysis\"").unwrap();
        assert_eq!(status, StatusCondition::Paralysis);
    }
}
