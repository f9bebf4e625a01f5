use glam::Vec2;

/// Which edge of the playfield a fighter defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal travel direction for bullets fired by this side.
    pub fn heading(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Fighter component - one per side, lives for the whole session
#[derive(Debug, Clone, Copy)]
pub struct Fighter {
    pub side: Side,
}

impl Fighter {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

/// Axis-aligned box: top-left corner plus size, in playfield pixels
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    /// Box overlap, strict on all four sides: touching edges do not count.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// Remaining hit points, floored at zero
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub hp: i32,
}

impl Health {
    pub fn new(hp: i32) -> Self {
        Self { hp }
    }

    pub fn apply_hit(&mut self, damage: i32) {
        self.hp = (self.hp - damage).max(0);
    }

    pub fn is_down(&self) -> bool {
        self.hp <= 0
    }
}

/// Fire gate: cleared on every shot, restored once the cooldown elapses
#[derive(Debug, Clone, Copy)]
pub struct Trigger {
    pub ready: bool,
    pub last_shot_ms: f64,
}

impl Trigger {
    pub fn new() -> Self {
        Self {
            ready: true,
            last_shot_ms: 0.0,
        }
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new()
    }
}

/// Bullet component: owning side, horizontal velocity in px per tick,
/// and a monotonic spawn sequence used for creation-order iteration.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub side: Side,
    pub vel: f32,
    pub seq: u64,
}
