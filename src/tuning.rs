//! Data-driven session tuning
//!
//! The knobs the core treats as constants for one game session. A host can
//! load overrides from JSON before attaching; nothing re-reads them at
//! runtime.

use serde::{Deserialize, Serialize};

use crate::consts::{FIRE_COOLDOWN, LIFT_IMPULSE, PROJECTILE_OFFSET_Y};

/// Session constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds between projectile spawns
    pub fire_cooldown: f32,
    /// Upward impulse applied each engaged frame
    pub lift_impulse: f32,
    /// Vertical offset above the actor where projectiles appear
    pub projectile_offset_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fire_cooldown: FIRE_COOLDOWN,
            lift_impulse: LIFT_IMPULSE,
            projectile_offset_y: PROJECTILE_OFFSET_Y,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
