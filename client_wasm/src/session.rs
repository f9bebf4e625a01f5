//! One live match, from the start trigger to the winner banner.

use game_core::{
    create_fighter, session_winner, step, Body, Bullet, BulletIds, Config, Effects, Events,
    Fighter, Health, Keys, Params, Side, Time,
};
use hecs::World;

/// Owns the world and every per-session resource. Constructed fresh when
/// a session starts and dropped wholesale on reset, so no game state
/// outlives the match it belongs to.
pub struct Session {
    world: World,
    config: Config,
    keys: Keys,
    effects: Effects,
    events: Events,
    bullet_ids: BulletIds,
    sim_now_ms: f64,
    carry_ms: f64,
    last_frame_ms: Option<f64>,
    outcome: Option<Side>,
}

impl Session {
    pub fn new() -> Self {
        let config = Config::new();
        let mut world = World::new();
        create_fighter(&mut world, Side::Left, &config);
        create_fighter(&mut world, Side::Right, &config);

        Self {
            world,
            config,
            keys: Keys::new(),
            effects: Effects::new(),
            events: Events::new(),
            bullet_ids: BulletIds::new(),
            sim_now_ms: 0.0,
            carry_ms: 0.0,
            last_frame_ms: None,
            outcome: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.press(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.release(key);
    }

    pub fn outcome(&self) -> Option<Side> {
        self.outcome
    }

    /// Run the simulation up to the frame timestamp at a fixed logical
    /// tick rate. Real elapsed time accumulates and is consumed in
    /// whole ticks, clamped so a backgrounded tab doesn't fast-forward
    /// the duel; the leftover carries into the next frame.
    pub fn advance(&mut self, frame_now_ms: f64) -> Option<Side> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        let elapsed = match self.last_frame_ms {
            Some(prev) => (frame_now_ms - prev).clamp(0.0, Params::MAX_FRAME_MS),
            None => Params::TICK_MS,
        };
        self.last_frame_ms = Some(frame_now_ms);
        self.carry_ms += elapsed;

        while self.carry_ms >= Params::TICK_MS {
            self.carry_ms -= Params::TICK_MS;
            self.sim_now_ms += Params::TICK_MS;

            step(
                &mut self.world,
                &Time::new(self.sim_now_ms),
                &self.config,
                &self.keys,
                &mut self.effects,
                &mut self.events,
                &mut self.bullet_ids,
            );

            if let Some(winner) = session_winner(&self.world) {
                self.outcome = Some(winner);
                break;
            }
        }

        self.outcome
    }

    /// Box and remaining health for one fighter, for rendering.
    pub fn fighter(&self, side: Side) -> Option<(Body, i32)> {
        self.world
            .query::<(&Fighter, &Body, &Health)>()
            .iter()
            .find(|(_, (fighter, _, _))| fighter.side == side)
            .map(|(_, (_, body, health))| (*body, health.hp))
    }

    /// Live bullets in spawn order, for rendering.
    pub fn bullets(&self) -> Vec<(Side, Body)> {
        let mut bullets: Vec<(u64, Side, Body)> = self
            .world
            .query::<(&Bullet, &Body)>()
            .iter()
            .map(|(_, (bullet, body))| (bullet.seq, bullet.side, *body))
            .collect();
        bullets.sort_by_key(|(seq, _, _)| *seq);
        bullets.into_iter().map(|(_, side, body)| (side, body)).collect()
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_undecided() {
        let session = Session::new();
        assert!(session.outcome().is_none());
        assert!(session.fighter(Side::Left).is_some());
        assert!(session.fighter(Side::Right).is_some());
        assert!(session.bullets().is_empty());
    }

    #[test]
    fn test_advance_consumes_whole_ticks() {
        let mut session = Session::new();
        let up = session.config().left_keys.up;
        session.key_down(up);

        let start_y = session.fighter(Side::Left).unwrap().0.pos.y;
        session.advance(0.0); // first frame: exactly one tick
        let after_one = session.fighter(Side::Left).unwrap().0.pos.y;
        assert_eq!(after_one, start_y - Params::MOVE_STEP);

        // Three and a half ticks of real time: three whole ticks run,
        // the half tick carries into the next frame.
        session.advance(3.5 * Params::TICK_MS);
        let after_more = session.fighter(Side::Left).unwrap().0.pos.y;
        assert_eq!(after_more, after_one - 3.0 * Params::MOVE_STEP);
    }

    #[test]
    fn test_large_frame_gap_is_clamped() {
        let mut session = Session::new();
        let down = session.config().right_keys.down;
        session.key_down(down);

        session.advance(0.0);
        let before = session.fighter(Side::Right).unwrap().0.pos.y;
        // Tab hidden for ten seconds: only MAX_FRAME_MS of it simulates.
        session.advance(10_000.0);
        let after = session.fighter(Side::Right).unwrap().0.pos.y;

        let max_ticks = (Params::MAX_FRAME_MS / Params::TICK_MS).ceil();
        assert!(after - before <= max_ticks as f32 * Params::MOVE_STEP);
    }

    #[test]
    fn test_outcome_is_sticky() {
        let mut session = Session::new();
        for (_, (fighter, health)) in session.world.query_mut::<(&Fighter, &mut Health)>() {
            if fighter.side == Side::Left {
                health.hp = 0;
            }
        }
        assert_eq!(session.advance(0.0), Some(Side::Right));
        assert_eq!(
            session.advance(1_000.0),
            Some(Side::Right),
            "a decided session stays decided"
        );
    }

    #[test]
    fn test_bullets_appear_while_fire_held() {
        let mut session = Session::new();
        let fire = session.config().left_keys.fire;
        session.key_down(fire);
        session.advance(0.0);
        assert_eq!(session.bullets().len(), 1);
        assert_eq!(session.bullets()[0].0, Side::Left);
    }
}
