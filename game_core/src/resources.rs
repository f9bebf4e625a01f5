use std::collections::HashMap;

use glam::Vec2;

use crate::params::Params;

/// Time resource: the wall-clock timestamp for this tick, in ms.
/// Only the fire cooldown reads it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now_ms: f64,
}

impl Time {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }
}

/// Held/released state per key identifier. Key-down sets a key, key-up
/// clears it; the simulation only ever reads.
#[derive(Debug, Clone, Default)]
pub struct Keys {
    held: HashMap<String, bool>,
}

impl Keys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_owned(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.held.insert(key.to_owned(), false);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// One fading dot left behind a moving bullet
#[derive(Debug, Clone, Copy)]
pub struct Trail {
    pub pos: Vec2,
    pub alpha: f32,
    pub radius: f32,
}

/// Flash left where two opposing bullets destroyed each other
#[derive(Debug, Clone, Copy)]
pub struct Explosion {
    pub pos: Vec2,
    pub radius: f32,
    pub ticks_left: i32,
}

impl Explosion {
    /// Render opacity, full strength at spawn and fading to zero.
    pub fn alpha(&self) -> f32 {
        self.ticks_left as f32 / Params::EXPLOSION_TICKS as f32
    }
}

/// Persistent visual-effect collections. Entries expire individually;
/// the collections are never cleared wholesale during a session.
#[derive(Debug, Clone, Default)]
pub struct Effects {
    pub trails: Vec<Trail>,
    pub explosions: Vec<Explosion>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hands out the monotonic spawn sequence carried by each bullet, so
/// systems can iterate bullets in creation order after despawns.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulletIds {
    pub next: u64,
}

impl BulletIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> u64 {
        let seq = self.next;
        self.next = self.next.wrapping_add(1);
        seq
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_struck: bool,
    pub right_struck: bool,
    pub clash: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_struck = false;
        self.right_struck = false;
        self.clash = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_track_press_and_release() {
        let mut keys = Keys::new();
        assert!(!keys.is_held("w"), "unseen key reads as released");

        keys.press("w");
        assert!(keys.is_held("w"));

        keys.release("w");
        assert!(!keys.is_held("w"));
    }

    #[test]
    fn test_keys_clear() {
        let mut keys = Keys::new();
        keys.press("w");
        keys.press("ArrowUp");
        keys.clear();
        assert!(!keys.is_held("w"));
        assert!(!keys.is_held("ArrowUp"));
    }

    #[test]
    fn test_explosion_alpha_follows_countdown() {
        let explosion = Explosion {
            pos: Vec2::ZERO,
            radius: Params::EXPLOSION_RADIUS,
            ticks_left: Params::EXPLOSION_TICKS,
        };
        assert_eq!(explosion.alpha(), 1.0, "fresh explosion draws at full strength");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_struck = true;
        events.right_struck = true;
        events.clash = true;

        events.clear();

        assert!(!events.left_struck);
        assert!(!events.right_struck);
        assert!(!events.clash);
    }
}
