use glam::Vec2;

/// Game tuning parameters for the duel
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: f32 = 720.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    // Fighters
    pub const LEFT_SPAWN: Vec2 = Vec2::new(50.0, 180.0);
    pub const LEFT_SIZE: Vec2 = Vec2::new(90.0, 150.0);
    pub const RIGHT_SPAWN: Vec2 = Vec2::new(660.0, 180.0);
    pub const RIGHT_SIZE: Vec2 = Vec2::new(50.0, 50.0);
    pub const MOVE_STEP: f32 = 4.0;
    pub const START_HEALTH: i32 = 30;

    // Bullets
    pub const BULLET_SIZE: f32 = 40.0;
    pub const BULLET_SPEED: f32 = 5.0; // px per tick, sign from owning side
    pub const HIT_DAMAGE: i32 = 10;
    pub const SHOOT_COOLDOWN_MS: f64 = 300.0;

    // Effects
    pub const TRAIL_RADIUS: f32 = 6.0;
    pub const TRAIL_ALPHA: f32 = 0.5;
    pub const TRAIL_FADE: f32 = 0.03; // opacity lost per tick
    pub const EXPLOSION_RADIUS: f32 = 15.0;
    pub const EXPLOSION_TICKS: i32 = 12;

    // Timing
    pub const TICK_MS: f64 = 1000.0 / 60.0; // fixed logical tick
    pub const MAX_FRAME_MS: f64 = 100.0; // clamp to prevent large jumps
}
