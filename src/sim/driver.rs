//! Frame driver and contact resolution
//!
//! [`Game`] is the single state object for one session: node handles, score
//! ledger, fire timer, frame clock and engagement all live here, and every
//! entry point the host calls (`on_frame`, `on_contact`, `on_touch_*`)
//! mutates through it. All calls arrive serially on the host's run loop;
//! stale handles are tolerated everywhere because removal can race a
//! contact report across a frame boundary.

use glam::Vec2;
use thiserror::Error;

use super::category::{BodyFilter, Category};
use super::contact::{ContactBody, ContactEvent, ContactFault, ContactOutcome};
use super::fire::{FireTimer, FrameClock};
use super::motion::MotionController;
use super::score::ScoreLedger;
use crate::scene::{NodeHandle, SceneGraph, keys, names};
use crate::tuning::Tuning;

/// Startup fault: the scene is missing something the core requires
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("scene has no node named `{0}`")]
    NodeMissing(&'static str),
    #[error("item node `{0}` carries no points value")]
    MissingPoints(&'static str),
}

/// One game session's core logic and state
#[derive(Debug)]
pub struct Game {
    /// Cleared permanently once the actor dies
    actor: Option<NodeHandle>,
    item: NodeHandle,
    label: NodeHandle,
    score: ScoreLedger,
    fire: FireTimer,
    clock: FrameClock,
    motion: MotionController,
    projectile_offset_y: f32,
}

impl Game {
    /// Look up the named nodes, configure their body filters, start the
    /// item's ambient drift and validate its points payload.
    ///
    /// Fails fast instead of assuming presence: a scene without the
    /// expected cast is authoring error, not something to limp through.
    pub fn attach<S: SceneGraph>(scene: &mut S, tuning: Tuning) -> Result<Self, SetupError> {
        let lookup = |name: &'static str| -> Result<NodeHandle, SetupError> {
            scene.node_named(name).ok_or(SetupError::NodeMissing(name))
        };
        let actor = lookup(names::ACTOR)?;
        let enemy = lookup(names::ENEMY)?;
        let item = lookup(names::ITEM)?;
        let platform = lookup(names::PLATFORM)?;
        let label = lookup(names::SCORE_LABEL)?;

        scene.set_body_filter(actor, BodyFilter::actor());
        scene.set_body_filter(enemy, BodyFilter::enemy());
        scene.set_body_filter(item, BodyFilter::item());
        scene.set_body_filter(platform, BodyFilter::platform());

        if scene.points_value(item).is_none() {
            return Err(SetupError::MissingPoints(names::ITEM));
        }
        scene.run_action(item, keys::ITEM_DRIFT);

        log::info!(
            "session attached (cooldown {:.2}s, lift {:.1})",
            tuning.fire_cooldown,
            tuning.lift_impulse
        );

        Ok(Self {
            actor: Some(actor),
            item,
            label,
            score: ScoreLedger::new(),
            fire: FireTimer::new(tuning.fire_cooldown),
            clock: FrameClock::new(),
            motion: MotionController::new(tuning.lift_impulse),
            projectile_offset_y: tuning.projectile_offset_y,
        })
    }

    /// Per-frame tick, given the host's monotonic timestamp in seconds
    ///
    /// Fixed ordering: engaged impulse first, then the fire timer advances
    /// by the clamped delta and may spawn a projectile.
    pub fn on_frame<S: SceneGraph>(&mut self, scene: &mut S, timestamp: f64) {
        self.motion.apply(scene, self.actor);

        let dt = self.clock.delta(timestamp);
        if self.fire.advance(dt) {
            self.spawn_projectile(scene);
        }
    }

    /// Resolve a contact reported by the physics collaborator
    ///
    /// Safe to call with duplicate or stale events; the second resolution
    /// of the same pair is a no-op. An `Err` means author-controlled scene
    /// data is malformed; the session survives, nothing was awarded.
    pub fn on_contact<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        event: ContactEvent,
    ) -> Result<ContactOutcome, ContactFault> {
        match event.split_actor() {
            Some((_, other)) => self.resolve_actor_contact(scene, other),
            None => Ok(self.resolve_mutual_destruction(scene, event)),
        }
    }

    pub fn on_touch_down<S: SceneGraph>(&mut self, scene: &mut S, position: Vec2) {
        self.motion.touch_down(scene, self.actor, self.item, position);
    }

    pub fn on_touch_moved<S: SceneGraph>(&mut self, _scene: &mut S, _position: Vec2) {
        // Reserved; dragging has no effect in this game
    }

    pub fn on_touch_up(&mut self, _position: Vec2) {
        self.motion.release();
    }

    /// Treated identically to touch-up
    pub fn on_touch_cancel(&mut self, _position: Vec2) {
        self.motion.release();
    }

    /// Current score total
    pub fn score(&self) -> u64 {
        self.score.current()
    }

    /// Actor handle, `None` once the actor has died
    pub fn actor(&self) -> Option<NodeHandle> {
        self.actor
    }

    fn resolve_actor_contact<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        other: ContactBody,
    ) -> Result<ContactOutcome, ContactFault> {
        // Both parties must still be in the scene; duplicate notifications
        // for the same frame arrive after the first one removed a node.
        let actor_live = self.actor.map(|a| scene.is_live(a)).unwrap_or(false);
        if !actor_live || !scene.is_live(other.node) {
            log::debug!("stale contact with {:?} ignored", other.node);
            return Ok(ContactOutcome::Stale);
        }

        match other.category {
            Category::Item => {
                let points = scene.points_value(other.node).ok_or_else(|| {
                    let fault = ContactFault::MissingPoints(other.node);
                    log::error!("aborting collection: {fault}");
                    fault
                })?;
                self.score.award(points);
                scene.set_label_text(self.label, format!("Score: {}", self.score.current()));
                scene.remove(other.node);
                log::debug!("item collected for {points} points");
                Ok(ContactOutcome::Scored { points })
            }
            Category::Enemy => {
                scene.remove(other.node);
                if let Some(actor) = self.actor.take() {
                    scene.remove(actor);
                }
                log::info!("actor down; final score {}", self.score.current());
                Ok(ContactOutcome::ActorDown)
            }
            // Categories without an actor rule yet
            _ => Ok(ContactOutcome::Ignored),
        }
    }

    /// Non-actor pair, e.g. projectile vs enemy: both bodies are destroyed
    /// and a destruction effect plays where they met.
    fn resolve_mutual_destruction<S: SceneGraph>(
        &self,
        scene: &mut S,
        event: ContactEvent,
    ) -> ContactOutcome {
        let a = event.body_a;
        let b = event.body_b;
        let a_live = scene.is_live(a.node);
        let b_live = scene.is_live(b.node);
        if !a_live && !b_live {
            return ContactOutcome::Stale;
        }

        let effect_at = if a_live {
            scene.position(a.node)
        } else {
            scene.position(b.node)
        };
        if let Some(position) = effect_at {
            scene.add_effect(keys::EXPLOSION_EFFECT, position);
        }
        if a_live {
            scene.remove(a.node);
        }
        if b_live {
            scene.remove(b.node);
        }
        log::debug!("{:?} and {:?} destroyed each other", a.category, b.category);
        ContactOutcome::BothDestroyed
    }

    /// Instantiate a projectile just above the actor and give it its
    /// contact filter. Skipped entirely once the actor is gone.
    fn spawn_projectile<S: SceneGraph>(&mut self, scene: &mut S) {
        let Some(actor) = self.actor.filter(|a| scene.is_live(*a)) else {
            return;
        };
        let Some(actor_pos) = scene.position(actor) else {
            return;
        };
        let spawn_pos = actor_pos + Vec2::new(0.0, self.projectile_offset_y);
        match scene.instantiate(keys::PROJECTILE_TEMPLATE, spawn_pos) {
            Some(projectile) => {
                scene.set_body_filter(projectile, BodyFilter::projectile());
                log::debug!("projectile spawned at {spawn_pos}");
            }
            None => log::warn!("projectile template unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::blueprint::SceneBlueprint;
    use crate::scene::memory::MemoryScene;

    const SCENE_JSON: &str = r#"{
        "nodes": [
            { "name": "actor", "category": "actor", "position": [10.0, 100.0] },
            { "name": "enemy", "category": "enemy", "position": [300.0, 400.0] },
            { "name": "item", "category": "item", "position": [200.0, 150.0], "points": 10 },
            { "name": "platform", "category": "platform", "position": [160.0, 40.0] },
            { "name": "score_label", "category": "none", "position": [20.0, 580.0] }
        ]
    }"#;

    fn session() -> (MemoryScene, Game) {
        let blueprint = SceneBlueprint::from_json(SCENE_JSON).unwrap();
        let mut scene = MemoryScene::from_blueprint(&blueprint);
        let game = Game::attach(&mut scene, Tuning::default()).unwrap();
        (scene, game)
    }

    fn contact(scene: &MemoryScene, a: &str, b: &str) -> ContactEvent {
        let body = |name: &str| {
            let node = scene.node_named(name).unwrap();
            let category = scene.body_filter(node).map(|f| f.category).unwrap();
            ContactBody::new(node, category)
        };
        ContactEvent::new(body(a), body(b))
    }

    #[test]
    fn test_attach_configures_filters_and_drift() {
        let (scene, game) = session();
        let actor = game.actor().unwrap();
        assert_eq!(scene.body_filter(actor), Some(BodyFilter::actor()));
        let item = scene.node_named(names::ITEM).unwrap();
        assert!(scene.action_running(item, keys::ITEM_DRIFT));
    }

    #[test]
    fn test_attach_requires_all_nodes() {
        let blueprint = SceneBlueprint::from_json(
            r#"{ "nodes": [ { "name": "actor", "category": "actor", "position": [0.0, 0.0] } ] }"#,
        )
        .unwrap();
        let mut scene = MemoryScene::from_blueprint(&blueprint);
        let result = Game::attach(&mut scene, Tuning::default());
        assert!(matches!(result, Err(SetupError::NodeMissing("enemy"))));
    }

    #[test]
    fn test_item_contact_awards_and_removes() {
        let (mut scene, mut game) = session();
        let item = scene.node_named(names::ITEM).unwrap();
        let label = scene.node_named(names::SCORE_LABEL).unwrap();

        let event = contact(&scene, "actor", "item");
        let outcome = game.on_contact(&mut scene, event).unwrap();

        assert_eq!(outcome, ContactOutcome::Scored { points: 10 });
        assert_eq!(game.score(), 10);
        assert_eq!(scene.label_text(label), Some("Score: 10"));
        assert!(!scene.is_live(item));
        assert!(game.actor().is_some());
    }

    #[test]
    fn test_stale_item_contact_is_idempotent() {
        let (mut scene, mut game) = session();
        let event = contact(&scene, "item", "actor"); // order must not matter

        assert_eq!(
            game.on_contact(&mut scene, event).unwrap(),
            ContactOutcome::Scored { points: 10 }
        );
        // Duplicate notification for the same frame: item is gone
        assert_eq!(
            game.on_contact(&mut scene, event).unwrap(),
            ContactOutcome::Stale
        );
        assert_eq!(game.score(), 10);
    }

    #[test]
    fn test_enemy_contact_removes_both() {
        let (mut scene, mut game) = session();
        let actor = game.actor().unwrap();
        let enemy = scene.node_named(names::ENEMY).unwrap();

        let event = contact(&scene, "actor", "enemy");
        let outcome = game.on_contact(&mut scene, event).unwrap();

        assert_eq!(outcome, ContactOutcome::ActorDown);
        assert!(!scene.is_live(actor));
        assert!(!scene.is_live(enemy));
        assert_eq!(game.actor(), None);

        // Retry of the same event is a no-op
        assert_eq!(
            game.on_contact(&mut scene, event).unwrap(),
            ContactOutcome::Stale
        );
    }

    #[test]
    fn test_dead_actor_tolerated_by_every_entry_point() {
        let (mut scene, mut game) = session();
        let event = contact(&scene, "actor", "enemy");
        game.on_contact(&mut scene, event).unwrap();

        let impulses_before = scene.impulses().len();
        let spawned_before = scene.spawned().len();

        game.on_touch_down(&mut scene, Vec2::new(50.0, 0.0));
        game.on_frame(&mut scene, 0.0);
        for i in 1..=120 {
            game.on_frame(&mut scene, f64::from(i) / 60.0);
        }
        game.on_touch_up(Vec2::ZERO);

        // No impulse, reposition or projectile on a dead actor
        assert_eq!(scene.impulses().len(), impulses_before);
        assert_eq!(scene.spawned().len(), spawned_before);
    }

    #[test]
    fn test_projectile_enemy_mutual_destruction() {
        let (mut scene, mut game) = session();
        let enemy = scene.node_named(names::ENEMY).unwrap();
        let enemy_pos = scene.position(enemy).unwrap();

        // Fire once: first frame establishes the clock, then one cooldown
        game.on_frame(&mut scene, 0.0);
        game.on_frame(&mut scene, 0.5);
        let projectile = *scene.spawned().last().unwrap();

        let event = ContactEvent::new(
            ContactBody::new(enemy, Category::Enemy),
            ContactBody::new(projectile, Category::Projectile),
        );
        let outcome = game.on_contact(&mut scene, event).unwrap();

        assert_eq!(outcome, ContactOutcome::BothDestroyed);
        assert!(!scene.is_live(enemy));
        assert!(!scene.is_live(projectile));
        // Effect plays at the first body's position
        assert_eq!(
            scene.effects(),
            &[(keys::EXPLOSION_EFFECT.to_string(), enemy_pos)]
        );

        // Same event again: both already gone
        assert_eq!(
            game.on_contact(&mut scene, event).unwrap(),
            ContactOutcome::Stale
        );
        assert_eq!(scene.effects().len(), 1);
    }

    #[test]
    fn test_ignored_category_leaves_scene_alone() {
        let (mut scene, mut game) = session();
        let platform = scene.node_named(names::PLATFORM).unwrap();
        let event = contact(&scene, "actor", "platform");

        assert_eq!(
            game.on_contact(&mut scene, event).unwrap(),
            ContactOutcome::Ignored
        );
        assert!(scene.is_live(platform));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_missing_points_aborts_loudly() {
        let (mut scene, mut game) = session();
        // A non-conforming host: an item body the blueprint never vouched for
        let rogue = scene
            .instantiate("mystery_item", Vec2::new(5.0, 5.0))
            .unwrap();
        scene.set_body_filter(rogue, BodyFilter::item());

        let actor = game.actor().unwrap();
        let event = ContactEvent::new(
            ContactBody::new(actor, Category::Actor),
            ContactBody::new(rogue, Category::Item),
        );
        let result = game.on_contact(&mut scene, event);

        assert_eq!(result, Err(ContactFault::MissingPoints(rogue)));
        // Nothing awarded, nothing removed
        assert_eq!(game.score(), 0);
        assert!(scene.is_live(rogue));
    }

    #[test]
    fn test_no_spawn_before_first_timestamp() {
        let (mut scene, mut game) = session();
        // First ever frame arrives with a huge timestamp; delta must clamp to 0
        game.on_frame(&mut scene, 1000.0);
        assert!(scene.spawned().is_empty());
    }

    #[test]
    fn test_fire_sequence_point_two_deltas() {
        let (mut scene, mut game) = session();
        game.on_frame(&mut scene, 10.0); // establishes the clock
        game.on_frame(&mut scene, 10.2);
        game.on_frame(&mut scene, 10.4);
        assert!(scene.spawned().is_empty());
        game.on_frame(&mut scene, 10.6); // accumulated 0.6 >= 0.5
        assert_eq!(scene.spawned().len(), 1);
        // Accumulator reset: the next 0.2 alone must not fire
        game.on_frame(&mut scene, 10.8);
        assert_eq!(scene.spawned().len(), 1);
    }

    #[test]
    fn test_projectile_spawns_offset_above_actor_with_filter() {
        let (mut scene, mut game) = session();
        game.on_touch_down(&mut scene, Vec2::new(50.0, 0.0));
        game.on_touch_up(Vec2::ZERO);

        game.on_frame(&mut scene, 0.0);
        game.on_frame(&mut scene, 0.5);

        let projectile = *scene.spawned().last().unwrap();
        // Actor was teleported to x=50, keeping y=100
        assert_eq!(scene.position(projectile), Some(Vec2::new(50.0, 125.0)));
        assert_eq!(scene.body_filter(projectile), Some(BodyFilter::projectile()));
    }

    #[test]
    fn test_engaged_frames_compound_impulses() {
        let (mut scene, mut game) = session();
        let actor = game.actor().unwrap();

        game.on_touch_down(&mut scene, Vec2::new(10.0, 0.0));
        game.on_frame(&mut scene, 0.0);
        game.on_frame(&mut scene, 0.1);
        game.on_frame(&mut scene, 0.2);
        game.on_touch_cancel(Vec2::ZERO);
        game.on_frame(&mut scene, 0.3);

        let lifts: Vec<_> = scene.impulses().iter().filter(|(n, _)| *n == actor).collect();
        assert_eq!(lifts.len(), 3);
        assert!(lifts.iter().all(|(_, i)| *i == Vec2::new(0.0, 10.0)));
    }
}
