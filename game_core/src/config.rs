use glam::Vec2;

use crate::components::{Body, Side};
use crate::params::Params;

/// Key bindings for one fighter
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    pub up: &'static str,
    pub down: &'static str,
    pub fire: &'static str,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub move_step: f32,
    pub start_health: i32,
    pub hit_damage: i32,
    pub shoot_cooldown_ms: f64,
    pub bullet_size: f32,
    pub bullet_speed: f32,
    pub left_keys: KeyBindings,
    pub right_keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            move_step: Params::MOVE_STEP,
            start_health: Params::START_HEALTH,
            hit_damage: Params::HIT_DAMAGE,
            shoot_cooldown_ms: Params::SHOOT_COOLDOWN_MS,
            bullet_size: Params::BULLET_SIZE,
            bullet_speed: Params::BULLET_SPEED,
            left_keys: KeyBindings {
                up: "w",
                down: "s",
                fire: "d",
            },
            right_keys: KeyBindings {
                up: "ArrowUp",
                down: "ArrowDown",
                fire: "ArrowLeft",
            },
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bindings(&self, side: Side) -> &KeyBindings {
        match side {
            Side::Left => &self.left_keys,
            Side::Right => &self.right_keys,
        }
    }

    /// Starting box for a fighter
    pub fn spawn_body(&self, side: Side) -> Body {
        match side {
            Side::Left => Body::new(Params::LEFT_SPAWN, Params::LEFT_SIZE),
            Side::Right => Body::new(Params::RIGHT_SPAWN, Params::RIGHT_SIZE),
        }
    }

    /// Where a bullet leaves its owner: just past the edge facing the
    /// opponent, riding slightly above the owner's vertical center.
    pub fn muzzle(&self, owner: &Body, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => owner.pos.x + owner.size.x,
            Side::Right => owner.pos.x - self.bullet_size * 0.5,
        };
        Vec2::new(x, owner.center_y() - self.bullet_size * 0.25)
    }
}
