//! Held-item damage multipliers offered as presets

use serde::{Deserialize, Serialize};

/// A held item that scales outgoing damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeldItem {
    #[default]
    None,
    /// Charcoal, Mystic Water and the like
    TypeBoosting,
    ExpertBelt,
    LifeOrb,
    /// Choice Band / Choice Specs
    ChoiceItem,
}

impl HeldItem {
    pub const ALL: [HeldItem; 5] = [
        HeldItem::None,
        HeldItem::TypeBoosting,
        HeldItem::ExpertBelt,
        HeldItem::LifeOrb,
        HeldItem::ChoiceItem,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            HeldItem::None => 1.0,
            HeldItem::TypeBoosting => 1.1,
            HeldItem::ExpertBelt => 1.2,
            HeldItem::LifeOrb => 1.3,
            HeldItem::ChoiceItem => 1.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeldItem::None => "None",
            HeldItem::TypeBoosting => "Type-boosting",
            HeldItem::ExpertBelt => "Expert Belt",
            HeldItem::LifeOrb => "Life Orb",
            HeldItem::ChoiceItem => "Choice Item",
        }
    }

    pub fn next(self) -> HeldItem {
        let i = HeldItem::ALL.iter().position(|&h| h == self).unwrap_or(0);
        HeldItem::ALL[(i + 1) % HeldItem::ALL.len()]
    }

    pub fn prev(self) -> HeldItem {
        let len = HeldItem::ALL.len();
        let i = HeldItem::ALL.iter().position(|&h| h == self).unwrap_or(0);
        HeldItem::ALL[(i + len - 1) % len]
    }
}
