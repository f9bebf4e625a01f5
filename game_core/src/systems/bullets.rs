use hecs::World;

use crate::params::Params;
use crate::{Body, Bullet, Config, Effects, Trail};

/// Advance every bullet horizontally and drop one trail point at its
/// new position. Emission order follows spawn order and only affects
/// draw stacking.
pub fn advance_bullets(world: &mut World, effects: &mut Effects) {
    let mut moved: Vec<(u64, glam::Vec2)> = Vec::new();

    for (_entity, (bullet, body)) in world.query_mut::<(&Bullet, &mut Body)>() {
        body.pos.x += bullet.vel;
        moved.push((
            bullet.seq,
            glam::Vec2::new(body.pos.x, body.center_y()),
        ));
    }

    moved.sort_by_key(|(seq, _)| *seq);
    for (_seq, pos) in moved {
        effects.trails.push(Trail {
            pos,
            alpha: Params::TRAIL_ALPHA,
            radius: Params::TRAIL_RADIUS,
        });
    }
}

/// Remove bullets that left the playfield in x. Runs before any
/// collision test, so an escaped bullet can never also score a hit.
pub fn despawn_out_of_bounds(world: &mut World, config: &Config) {
    let mut escaped = Vec::new();

    for (entity, (_bullet, body)) in world.query::<(&Bullet, &Body)>().iter() {
        if body.pos.x < 0.0 || body.pos.x > config.field_width {
            escaped.push(entity);
        }
    }

    for entity in escaped {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_bullet, BulletIds, Side};
    use glam::Vec2;

    #[test]
    fn test_advance_moves_and_leaves_trail() {
        let mut world = World::new();
        let config = Config::new();
        let mut bullet_ids = BulletIds::new();
        let mut effects = Effects::new();

        let entity = spawn_bullet(
            &mut world,
            Side::Left,
            Vec2::new(100.0, 200.0),
            &config,
            &mut bullet_ids,
        );
        advance_bullets(&mut world, &mut effects);

        let body = *world.get::<&Body>(entity).unwrap();
        assert_eq!(body.pos.x, 100.0 + config.bullet_speed);
        assert_eq!(effects.trails.len(), 1, "one trail point per bullet per tick");
        assert_eq!(effects.trails[0].pos.x, body.pos.x, "trail sits at the post-move position");
        assert_eq!(effects.trails[0].pos.y, body.center_y());
    }

    #[test]
    fn test_out_of_bounds_bullet_is_removed() {
        let mut world = World::new();
        let config = Config::new();
        let mut bullet_ids = BulletIds::new();

        spawn_bullet(
            &mut world,
            Side::Right,
            Vec2::new(2.0, 100.0),
            &config,
            &mut bullet_ids,
        );
        let mut effects = Effects::new();
        advance_bullets(&mut world, &mut effects); // drifts to x < 0
        despawn_out_of_bounds(&mut world, &config);

        assert_eq!(world.query::<&Bullet>().iter().count(), 0);
    }

    #[test]
    fn test_in_bounds_bullet_survives() {
        let mut world = World::new();
        let config = Config::new();
        let mut bullet_ids = BulletIds::new();

        spawn_bullet(
            &mut world,
            Side::Left,
            Vec2::new(config.field_width / 2.0, 100.0),
            &config,
            &mut bullet_ids,
        );
        despawn_out_of_bounds(&mut world, &config);

        assert_eq!(world.query::<&Bullet>().iter().count(), 1);
    }
}
