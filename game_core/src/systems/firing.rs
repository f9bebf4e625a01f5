use hecs::World;

use crate::{spawn_bullet, Body, BulletIds, Config, Fighter, Keys, Side, Time, Trigger};

/// Fire bullets for fighters whose fire key is held and whose trigger is
/// ready, then restore triggers whose cooldown has elapsed. Recovery runs
/// every tick regardless of key state, so releasing the key never delays
/// the next shot.
pub fn fire_bullets(
    world: &mut World,
    time: &Time,
    keys: &Keys,
    config: &Config,
    bullet_ids: &mut BulletIds,
) {
    let mut shots: Vec<(Side, glam::Vec2)> = Vec::new();

    for (_entity, (fighter, body, trigger)) in
        world.query_mut::<(&Fighter, &Body, &mut Trigger)>()
    {
        if keys.is_held(config.bindings(fighter.side).fire) && trigger.ready {
            shots.push((fighter.side, config.muzzle(body, fighter.side)));
            trigger.ready = false;
            trigger.last_shot_ms = time.now_ms;
        }

        if !trigger.ready && time.now_ms - trigger.last_shot_ms >= config.shoot_cooldown_ms {
            trigger.ready = true;
        }
    }

    for (side, muzzle) in shots {
        spawn_bullet(world, side, muzzle, config, bullet_ids);
    }
}
