//! Prelude module for convenient imports
//!
//! ```rust
//! use pokecalc_core::prelude::*;
//! ```

// Core types
pub use crate::types::{PokemonType, StatusCondition};

// Type chart
pub use crate::type_chart::{combined_effectiveness, effectiveness, Effectiveness};

// Balls
pub use crate::ball::{find_ball, resolve_ball, resolve_ball_multiplier, PokeBall, SituationalFlags, SpecialRule};

// Capture
pub use crate::capture::{capture_probability, CaptureInput, CaptureOutlook, CaptureResult};

// Damage
pub use crate::damage::{calculate_damage, DamageInput, DamageResult, HeldItem, HitsToKo, Typing};
