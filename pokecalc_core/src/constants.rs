//! Formula constants

/// Catch-rate ceiling; a modified rate at or above this is a guaranteed catch
pub const CATCH_RATE_CEILING: f64 = 255.0;

/// Ball multiplier treated as a guaranteed catch (Master Ball)
pub const GUARANTEED_BALL_MULTIPLIER: f64 = 255.0;

/// Same-type attack bonus
pub const STAB_MULTIPLIER: f64 = 1.5;

/// Critical hit multiplier
pub const CRITICAL_MULTIPLIER: f64 = 1.5;

/// Lowest damage roll
pub const MIN_DAMAGE_ROLL: f64 = 0.85;

/// Highest damage roll
pub const MAX_DAMAGE_ROLL: f64 = 1.0;

/// Reference target HP for the hits-to-KO estimate
pub const REFERENCE_HP: f64 = 100.0;

/// Timer Ball multiplier gained per turn
pub const TIMER_BALL_STEP: f64 = 0.3;

/// Timer Ball multiplier cap
pub const TIMER_BALL_CAP: f64 = 4.0;

/// Multiplier for a conditional ball whose condition is not met
pub const CONDITION_UNMET_MULTIPLIER: f64 = 1.0;
