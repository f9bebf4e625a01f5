use crate::params::Params;
use crate::Effects;

/// Age the persistent effects by one tick and drop the expired ones.
/// Runs at the top of the tick, so effects spawned later in the same
/// tick are rendered once at full strength before fading.
pub fn decay_effects(effects: &mut Effects) {
    for trail in &mut effects.trails {
        trail.alpha -= Params::TRAIL_FADE;
    }
    effects.trails.retain(|trail| trail.alpha > 0.0);

    for explosion in &mut effects.explosions {
        explosion.ticks_left -= 1;
    }
    effects.explosions.retain(|explosion| explosion.ticks_left > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Explosion, Trail};
    use glam::Vec2;

    #[test]
    fn test_trail_fades_and_expires() {
        let mut effects = Effects::new();
        effects.trails.push(Trail {
            pos: Vec2::ZERO,
            alpha: Params::TRAIL_ALPHA,
            radius: Params::TRAIL_RADIUS,
        });

        let lifetime = (Params::TRAIL_ALPHA / Params::TRAIL_FADE).ceil() as usize;
        for tick in 0..lifetime {
            assert_eq!(effects.trails.len(), 1, "still alive at tick {tick}");
            decay_effects(&mut effects);
        }
        assert!(effects.trails.is_empty(), "trail expires at zero opacity");
    }

    #[test]
    fn test_explosion_countdown_is_exact() {
        let mut effects = Effects::new();
        effects.explosions.push(Explosion {
            pos: Vec2::ZERO,
            radius: Params::EXPLOSION_RADIUS,
            ticks_left: Params::EXPLOSION_TICKS,
        });

        for _ in 0..Params::EXPLOSION_TICKS {
            decay_effects(&mut effects);
        }
        assert!(
            effects.explosions.is_empty(),
            "explosion is removed when its countdown reaches zero"
        );

        // A second decay pass must not resurrect or underflow anything.
        decay_effects(&mut effects);
        assert!(effects.explosions.is_empty());
    }
}
