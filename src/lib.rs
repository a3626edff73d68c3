//! Star Hopper - a single-screen hop-and-blast arcade core
//!
//! Core modules:
//! - `sim`: Game logic (categories, contacts, fire control, motion, score)
//! - `scene`: Host scene-graph seam, blueprint loading, in-memory host
//! - `tuning`: Data-driven session constants
//!
//! The crate is headless. A host engine owns the scene graph, physics and
//! input; it drives [`Game`] through `on_frame`, `on_contact` and the
//! `on_touch_*` entry points and executes the mutation commands the core
//! issues through the [`scene::SceneGraph`] trait.

pub mod scene;
pub mod sim;
pub mod tuning;

pub use sim::{ContactEvent, ContactOutcome, Game, SetupError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Seconds between projectile spawns
    pub const FIRE_COOLDOWN: f32 = 0.5;
    /// Upward impulse applied each frame while a touch is held
    pub const LIFT_IMPULSE: f32 = 10.0;
    /// Projectiles appear this far above the actor
    pub const PROJECTILE_OFFSET_Y: f32 = 25.0;
}
