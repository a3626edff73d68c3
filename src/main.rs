//! Headless demo driver
//!
//! Plays one scripted session against the in-memory scene host: hold a
//! touch to climb while the fire timer spawns projectiles, collect the
//! item, trade a projectile against the enemy, then walk into the
//! respawned enemy to end the run. Run with `RUST_LOG=debug` to watch the
//! command traffic.

use glam::Vec2;

use star_hopper::scene::blueprint::SceneBlueprint;
use star_hopper::scene::memory::MemoryScene;
use star_hopper::scene::{SceneGraph, names};
use star_hopper::sim::{BodyFilter, Category, ContactBody, ContactEvent};
use star_hopper::{Game, Tuning};

const SCENE_JSON: &str = r#"{
    "nodes": [
        { "name": "actor", "category": "actor", "position": [160.0, 120.0] },
        { "name": "enemy", "category": "enemy", "position": [160.0, 480.0] },
        { "name": "item", "category": "item", "position": [240.0, 200.0], "points": 10 },
        { "name": "platform", "category": "platform", "position": [160.0, 60.0] },
        { "name": "score_label", "category": "none", "position": [20.0, 580.0] }
    ]
}"#;

const FRAME_DT: f64 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let blueprint = SceneBlueprint::from_json(SCENE_JSON)?;
    let mut scene = MemoryScene::from_blueprint(&blueprint);
    let mut game = Game::attach(&mut scene, Tuning::default())?;

    let mut timestamp = 0.0;
    let mut frame = |game: &mut Game, scene: &mut MemoryScene, n: u32| {
        for _ in 0..n {
            game.on_frame(scene, timestamp);
            timestamp += FRAME_DT;
        }
    };

    // Hold a touch for a second: reposition plus one impulse per frame
    game.on_touch_down(&mut scene, Vec2::new(200.0, 0.0));
    frame(&mut game, &mut scene, 60);
    game.on_touch_up(Vec2::new(200.0, 0.0));
    log::info!(
        "after 1s engaged: {} impulses, {} projectiles",
        scene.impulses().len(),
        scene.spawned().len()
    );

    // The physics host would now report the actor brushing the item
    let actor = game.actor().expect("actor alive");
    let item = scene.node_named(names::ITEM).expect("item in scene");
    let pickup = ContactEvent::new(
        ContactBody::new(actor, Category::Actor),
        ContactBody::new(item, Category::Item),
    );
    let outcome = game.on_contact(&mut scene, pickup)?;
    log::info!("item contact: {:?}, score {}", outcome, game.score());

    // A projectile finds the enemy
    frame(&mut game, &mut scene, 30);
    let enemy = scene.node_named(names::ENEMY).expect("enemy in scene");
    let projectile = *scene.spawned().last().expect("projectile spawned");
    let hit = ContactEvent::new(
        ContactBody::new(projectile, Category::Projectile),
        ContactBody::new(enemy, Category::Enemy),
    );
    let outcome = game.on_contact(&mut scene, hit)?;
    log::info!("projectile contact: {:?}", outcome);

    // The host respawns an enemy, and the actor walks into it
    let enemy = scene
        .instantiate("enemy", Vec2::new(200.0, 140.0))
        .expect("respawn enemy");
    scene.set_body_filter(enemy, BodyFilter::enemy());
    let collision = ContactEvent::new(
        ContactBody::new(actor, Category::Actor),
        ContactBody::new(enemy, Category::Enemy),
    );
    let outcome = game.on_contact(&mut scene, collision)?;
    log::info!("enemy contact: {:?}", outcome);

    // The run loop keeps ticking; a dead actor is a no-op everywhere
    let spawned_before = scene.spawned().len();
    frame(&mut game, &mut scene, 120);
    assert_eq!(scene.spawned().len(), spawned_before);

    log::info!(
        "session over: score {}, {} nodes left in scene",
        game.score(),
        scene.live_count()
    );
    Ok(())
}
