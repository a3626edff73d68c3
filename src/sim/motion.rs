//! Touch-driven actor motion
//!
//! Two controls share one touch surface. Holding a touch is the continuous
//! "engaged" signal: every frame while engaged the actor gets an additive
//! upward impulse (the physics host's gravity and damping shape the result;
//! velocity is never set directly). Touching down is also a discrete
//! control: the actor teleports horizontally to the touch x, keeping its
//! current y, and the item's ambient drift action is cancelled for the rest
//! of the session.

use glam::Vec2;

use crate::scene::{NodeHandle, SceneGraph, keys};

/// Engagement state plus the impulse it drives
#[derive(Debug, Clone)]
pub struct MotionController {
    engaged: bool,
    lift_impulse: f32,
}

impl MotionController {
    pub fn new(lift_impulse: f32) -> Self {
        Self {
            engaged: false,
            lift_impulse,
        }
    }

    /// Whether a touch is currently held
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// Touch-down: horizontal reposition, drift cancel, engage
    ///
    /// Multi-touch batches call this once per point in arrival order; the
    /// last call wins for positioning. The drift cancel is one-shot in
    /// effect (the action is never restarted).
    pub fn touch_down<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        actor: Option<NodeHandle>,
        item: NodeHandle,
        position: Vec2,
    ) {
        if let Some(actor) = actor.filter(|a| scene.is_live(*a)) {
            if let Some(current) = scene.position(actor) {
                scene.set_position(actor, Vec2::new(position.x, current.y));
            }
        }
        if scene.is_live(item) {
            scene.cancel_action(item, keys::ITEM_DRIFT);
        }
        self.engaged = true;
    }

    /// Touch-up and touch-cancel: clear engagement, nothing else
    pub fn release(&mut self) {
        self.engaged = false;
    }

    /// Per-frame impulse while engaged; a no-op on a missing actor
    pub fn apply<S: SceneGraph>(&self, scene: &mut S, actor: Option<NodeHandle>) {
        if !self.engaged {
            return;
        }
        if let Some(actor) = actor.filter(|a| scene.is_live(*a)) {
            scene.apply_impulse(actor, Vec2::new(0.0, self.lift_impulse));
        }
    }
}
