//! Ball table loading

use super::ConfigError;
use crate::ball::{PokeBall, SpecialRule, POKE_BALLS};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

/// Ball entry as written in a config file
///
/// `special` stays a raw tag here so that an unknown rule surfaces as
/// [`ConfigError::UnknownBallRule`] instead of a generic parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallEntry {
    pub id: String,
    pub name: String,
    pub multiplier: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub special: Option<String>,
}

impl TryFrom<BallEntry> for PokeBall {
    type Error = ConfigError;

    fn try_from(entry: BallEntry) -> Result<Self, Self::Error> {
        let special = entry
            .special
            .as_deref()
            .map(str::parse::<SpecialRule>)
            .transpose()?;

        if !(entry.multiplier > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "ball '{}' has non-positive multiplier {}",
                entry.id, entry.multiplier
            )));
        }

        Ok(PokeBall {
            id: Cow::Owned(entry.id),
            name: Cow::Owned(entry.name),
            multiplier: entry.multiplier,
            description: Cow::Owned(entry.description),
            special,
        })
    }
}

/// Container for a ball table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallsConfig {
    #[serde(rename = "balls")]
    pub balls: Vec<BallEntry>,
}

fn build_table(config: BallsConfig) -> Result<Vec<PokeBall>, ConfigError> {
    if config.balls.is_empty() {
        return Err(ConfigError::ValidationError("ball table is empty".to_string()));
    }

    let mut seen = HashSet::new();
    let mut balls = Vec::with_capacity(config.balls.len());
    for entry in config.balls {
        if !seen.insert(entry.id.clone()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate ball id '{}'",
                entry.id
            )));
        }
        balls.push(PokeBall::try_from(entry)?);
    }

    tracing::debug!(count = balls.len(), "loaded ball table");
    Ok(balls)
}

/// Load a ball table from a TOML file
pub fn load_ball_table(path: &Path) -> Result<Vec<PokeBall>, ConfigError> {
    let config: BallsConfig = super::load_toml(path)?;
    build_table(config)
}

/// Load a ball table from a TOML string
pub fn parse_ball_table(content: &str) -> Result<Vec<PokeBall>, ConfigError> {
    let config: BallsConfig = super::parse_toml(content)?;
    build_table(config)
}

/// The built-in ball set
pub fn default_balls() -> Vec<PokeBall> {
    POKE_BALLS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_balls() {
        let toml = r#"
[[balls]]
id = "pokeball"
name = "Poké Ball"
multiplier = 1.0
description = "Standard catch rate"

[[balls]]
id = "quickball"
name = "Quick Ball"
multiplier = 5.0
description = "5× on first turn"
special = "first_turn"
"#;

        let balls = parse_ball_table(toml).unwrap();
        assert_eq!(balls.len(), 2);
        assert_eq!(balls[1].special, Some(SpecialRule::FirstTurn));
        assert_eq!(balls[0].special, None);
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let toml = r#"
[[balls]]
id = "moonball"
name = "Moon Ball"
multiplier = 4.0
special = "moon_stone"
"#;

        let err = parse_ball_table(toml).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBallRule(ref tag) if tag == "moon_stone"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let toml = r#"
[[balls]]
id = "pokeball"
name = "Poké Ball"
multiplier = 1.0

[[balls]]
id = "pokeball"
name = "Other Ball"
multiplier = 2.0
"#;

        let err = parse_ball_table(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_non_positive_multiplier_is_rejected() {
        let toml = r#"
[[balls]]
id = "brokenball"
name = "Broken Ball"
multiplier = 0.0
"#;

        assert!(matches!(
            parse_ball_table(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert!(matches!(
            parse_ball_table("balls = []"),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_shipped_table_matches_builtin() {
        let toml = include_str!("../../config/balls.toml");
        let balls = parse_ball_table(toml).unwrap();
        assert_eq!(balls, default_balls());
    }

    #[test]
    fn test_missing_file() {
        let err = load_ball_table(Path::new("/nonexistent/balls.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
