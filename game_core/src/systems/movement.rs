use hecs::World;

use crate::{Body, Config, Fighter, Keys};

/// Move fighters vertically while their keys are held, stopping at the
/// playfield edges.
pub fn move_fighters(world: &mut World, keys: &Keys, config: &Config) {
    for (_entity, (fighter, body)) in world.query_mut::<(&Fighter, &mut Body)>() {
        let bindings = config.bindings(fighter.side);
        if keys.is_held(bindings.up) && body.pos.y > 0.0 {
            body.pos.y -= config.move_step;
        }
        if keys.is_held(bindings.down) && body.bottom() < config.field_height {
            body.pos.y += config.move_step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_fighter, Side};

    #[test]
    fn test_held_key_moves_fighter() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_fighter(&mut world, Side::Left, &config);
        let start_y = world.get::<&Body>(entity).unwrap().pos.y;

        let mut keys = Keys::new();
        keys.press(config.left_keys.up);
        move_fighters(&mut world, &keys, &config);

        let body = world.get::<&Body>(entity).unwrap();
        assert_eq!(body.pos.y, start_y - config.move_step);
    }

    #[test]
    fn test_movement_stops_at_edges() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_fighter(&mut world, Side::Right, &config);

        let mut keys = Keys::new();
        keys.press(config.right_keys.up);
        for _ in 0..1000 {
            move_fighters(&mut world, &keys, &config);
        }
        assert!(world.get::<&Body>(entity).unwrap().pos.y >= 0.0 - config.move_step);
        assert!(world.get::<&Body>(entity).unwrap().pos.y <= config.move_step);

        keys.release(config.right_keys.up);
        keys.press(config.right_keys.down);
        for _ in 0..1000 {
            move_fighters(&mut world, &keys, &config);
        }
        let body = *world.get::<&Body>(entity).unwrap();
        assert!(body.bottom() <= config.field_height + config.move_step);
    }

    #[test]
    fn test_released_key_does_nothing() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_fighter(&mut world, Side::Left, &config);
        let start_y = world.get::<&Body>(entity).unwrap().pos.y;

        let keys = Keys::new();
        move_fighters(&mut world, &keys, &config);

        assert_eq!(world.get::<&Body>(entity).unwrap().pos.y, start_y);
    }
}
