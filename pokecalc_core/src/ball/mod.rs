//! Poké Balls - the fixed ball set and situational multiplier resolution

mod resolver;
mod rule;

pub use resolver::{resolve_ball, resolve_ball_multiplier, timer_ball_multiplier, BallResolution, SituationalFlags};
pub use rule::SpecialRule;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A ball definition
///
/// Balls without a `special` rule apply `multiplier` unconditionally. Balls
/// with a rule resolve their multiplier from the situational flags, and
/// `multiplier` is the value shown when the condition is fully met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokeBall {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub multiplier: f64,
    pub description: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<SpecialRule>,
}

impl PokeBall {
    const fn flat(id: &'static str, name: &'static str, multiplier: f64, description: &'static str) -> Self {
        PokeBall {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            multiplier,
            description: Cow::Borrowed(description),
            special: None,
        }
    }

    const fn conditional(
        id: &'static str,
        name: &'static str,
        multiplier: f64,
        description: &'static str,
        rule: SpecialRule,
    ) -> Self {
        PokeBall {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            multiplier,
            description: Cow::Borrowed(description),
            special: Some(rule),
        }
    }

    /// Whether the multiplier depends on the situation
    pub fn is_conditional(&self) -> bool {
        self.special.is_some()
    }
}

/// The standard ball set
pub static POKE_BALLS: [PokeBall; 12] = [
    PokeBall::flat("pokeball", "Poké Ball", 1.0, "Standard catch rate"),
    PokeBall::flat("greatball", "Great Ball", 1.5, "1.5× catch rate"),
    PokeBall::flat("ultraball", "Ultra Ball", 2.0, "2× catch rate"),
    PokeBall::flat("masterball", "Master Ball", 255.0, "100% catch rate"),
    PokeBall::conditional("netball", "Net Ball", 3.5, "3.5× for Water/Bug types", SpecialRule::WaterBug),
    PokeBall::conditional("duskball", "Dusk Ball", 3.0, "3× at night or in caves", SpecialRule::NightCave),
    PokeBall::conditional("quickball", "Quick Ball", 5.0, "5× on first turn", SpecialRule::FirstTurn),
    PokeBall::conditional("timerball", "Timer Ball", 4.0, "Up to 4× over time", SpecialRule::OverTime),
    PokeBall::conditional("repeatball", "Repeat Ball", 3.5, "3.5× for previously caught", SpecialRule::Repeat),
    PokeBall::conditional("diveball", "Dive Ball", 3.5, "3.5× while surfing/fishing", SpecialRule::WaterEncounter),
    PokeBall::flat("luxuryball", "Luxury Ball", 1.0, "Increases friendship gain"),
    PokeBall::flat("premierball", "Premier Ball", 1.0, "Commemorative ball"),
];

/// Look up a standard ball by id
pub fn find_ball(id: &str) -> Option<&'static PokeBall> {
    POKE_BALLS.iter().find(|ball| ball.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set() {
        assert_eq!(POKE_BALLS.len(), 12);
        let conditional = POKE_BALLS.iter().filter(|b| b.is_conditional()).count();
        assert_eq!(conditional, 6);
    }

    #[test]
    fn test_find_ball() {
        let master = find_ball("masterball").unwrap();
        assert_eq!(master.name, "Master Ball");
        assert!((master.multiplier - 255.0).abs() < f64::EPSILON);
        assert!(find_ball("cherishball").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in POKE_BALLS.iter().enumerate() {
            for b in &POKE_BALLS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_ball_serialization() {
        let timer = find_ball("timerball").unwrap();
        let json = serde_json::to_string(timer).unwrap();
        assert!(json.contains("\"special\":\"over_time\""));

        let poke = find_ball("pokeball").unwrap();
        let json = serde_json::to_string(poke).unwrap();
        assert!(!json.contains("special"));
    }
}
