//! Situational ball rules

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The situation a conditional ball keys its multiplier on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialRule {
    /// Quick Ball
    FirstTurn,
    /// Dusk Ball
    NightCave,
    /// Dive Ball
    WaterEncounter,
    /// Repeat Ball
    Repeat,
    /// Timer Ball - scales with turn count
    OverTime,
    /// Net Ball
    WaterBug,
}

impl SpecialRule {
    pub const ALL: [SpecialRule; 6] = [
        SpecialRule::FirstTurn,
        SpecialRule::NightCave,
        SpecialRule::WaterEncounter,
        SpecialRule::Repeat,
        SpecialRule::OverTime,
        SpecialRule::WaterBug,
    ];

    /// Config tag
    pub fn tag(&self) -> &'static str {
        match self {
            SpecialRule::FirstTurn => "first_turn",
            SpecialRule::NightCave => "night_cave",
            SpecialRule::WaterEncounter => "water_encounter",
            SpecialRule::Repeat => "repeat",
            SpecialRule::OverTime => "over_time",
            SpecialRule::WaterBug => "water_bug",
        }
    }

    /// Multiplier once the condition holds. `OverTime` reports its cap.
    pub fn boosted_multiplier(&self) -> f64 {
        match self {
            SpecialRule::FirstTurn => 5.0,
            SpecialRule::NightCave => 3.0,
            SpecialRule::WaterEncounter | SpecialRule::Repeat | SpecialRule::WaterBug => 3.5,
            SpecialRule::OverTime => crate::constants::TIMER_BALL_CAP,
        }
    }

    /// Short description of the situation the rule checks
    pub fn condition_label(&self) -> &'static str {
        match self {
            SpecialRule::FirstTurn => "First Turn of Battle",
            SpecialRule::NightCave => "Night or in a Cave",
            SpecialRule::WaterEncounter => "Surfing or Fishing",
            SpecialRule::Repeat => "Previously Caught Species",
            SpecialRule::OverTime => "Turn Count",
            SpecialRule::WaterBug => "Water or Bug Type",
        }
    }
}

impl fmt::Display for SpecialRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SpecialRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecialRule::ALL
            .iter()
            .copied()
            .find(|rule| rule.tag() == s)
            .ok_or_else(|| ConfigError::UnknownBallRule(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        for rule in SpecialRule::ALL {
            assert_eq!(rule.tag().parse::<SpecialRule>().unwrap(), rule);
        }
    }

    #[test]
    fn test_unknown_tag_fails_loudly() {
        let err = "full_moon".parse::<SpecialRule>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBallRule(ref tag) if tag == "full_moon"));
        assert!(err.to_string().contains("full_moon"));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("First_Turn".parse::<SpecialRule>().is_err());
    }
}
