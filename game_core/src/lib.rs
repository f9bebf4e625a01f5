pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the duel by exactly one tick.
///
/// Phase order matters: effects age first (so anything spawned this tick
/// is rendered once at full strength), fighters move, triggers fire and
/// recover, bullets advance and shed trails, escaped bullets are culled
/// before any collision test, then fighter hits resolve before clashes.
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    keys: &Keys,
    effects: &mut Effects,
    events: &mut Events,
    bullet_ids: &mut BulletIds,
) {
    events.clear();

    decay_effects(effects);
    move_fighters(world, keys, config);
    fire_bullets(world, time, keys, config, bullet_ids);
    advance_bullets(world, effects);
    despawn_out_of_bounds(world, config);
    resolve_fighter_hits(world, config, events);
    resolve_clashes(world, effects, events);
}

/// The session outcome, if the duel is over. The left fighter's defeat
/// is evaluated first, so a same-tick double knockout reports the right
/// side as winner.
pub fn session_winner(world: &World) -> Option<Side> {
    let mut left_down = false;
    let mut right_down = false;
    for (_entity, (fighter, health)) in world.query::<(&Fighter, &Health)>().iter() {
        match fighter.side {
            Side::Left => left_down = health.is_down(),
            Side::Right => right_down = health.is_down(),
        }
    }
    if left_down {
        Some(Side::Right)
    } else if right_down {
        Some(Side::Left)
    } else {
        None
    }
}

/// Helper to create a fighter entity at its spawn position
pub fn create_fighter(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((
        Fighter::new(side),
        config.spawn_body(side),
        Health::new(config.start_health),
        Trigger::new(),
    ))
}

/// Helper to create a bullet entity owned by `side`
pub fn spawn_bullet(
    world: &mut World,
    side: Side,
    pos: Vec2,
    config: &Config,
    bullet_ids: &mut BulletIds,
) -> hecs::Entity {
    world.spawn((
        Bullet {
            side,
            vel: config.bullet_speed * side.heading(),
            seq: bullet_ids.allocate(),
        },
        Body::new(pos, Vec2::splat(config.bullet_size)),
    ))
}
