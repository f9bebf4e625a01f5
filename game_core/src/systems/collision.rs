use hecs::{Entity, World};

use crate::params::Params;
use crate::{Body, Bullet, Config, Effects, Events, Explosion, Fighter, Health, Side};

/// Bullets striking the opposing fighter: damage the fighter, remove the
/// bullet. A bullet never harms its own side, and a removed bullet takes
/// no further part in this tick.
pub fn resolve_fighter_hits(
    world: &mut World,
    config: &Config,
    events: &mut Events,
) {
    let fighters: Vec<(Entity, Side, Body)> = world
        .query::<(&Fighter, &Body)>()
        .iter()
        .map(|(entity, (fighter, body))| (entity, fighter.side, *body))
        .collect();

    let mut bullets: Vec<(Entity, u64, Side, Body)> = world
        .query::<(&Bullet, &Body)>()
        .iter()
        .map(|(entity, (bullet, body))| (entity, bullet.seq, bullet.side, *body))
        .collect();
    bullets.sort_by_key(|(_, seq, _, _)| *seq);

    let mut struck = Vec::new();
    let mut damage: Vec<(Entity, i32)> = Vec::new();

    for (entity, _seq, side, body) in &bullets {
        let target = fighters
            .iter()
            .find(|(_, fighter_side, _)| *fighter_side == side.opponent());
        if let Some((fighter_entity, fighter_side, fighter_body)) = target {
            if body.overlaps(fighter_body) {
                damage.push((*fighter_entity, config.hit_damage));
                struck.push(*entity);
                match fighter_side {
                    Side::Left => events.left_struck = true,
                    Side::Right => events.right_struck = true,
                }
            }
        }
    }

    for entity in struck {
        let _ = world.despawn(entity);
    }
    for (fighter_entity, amount) in damage {
        if let Ok(mut health) = world.get::<&mut Health>(fighter_entity) {
            health.apply_hit(amount);
        }
    }
}

/// Opposing bullets whose boxes overlap destroy each other and leave an
/// explosion at their midpoint. Bullets are scanned in creation order,
/// each later-indexed partner considered once; a bullet resolves at most
/// one clash per tick.
pub fn resolve_clashes(world: &mut World, effects: &mut Effects, events: &mut Events) {
    let mut bullets: Vec<(Entity, u64, Side, Body)> = world
        .query::<(&Bullet, &Body)>()
        .iter()
        .map(|(entity, (bullet, body))| (entity, bullet.seq, bullet.side, *body))
        .collect();
    bullets.sort_by_key(|(_, seq, _, _)| *seq);

    let mut dead = vec![false; bullets.len()];

    for i in 0..bullets.len() {
        if dead[i] {
            continue;
        }
        for j in (i + 1)..bullets.len() {
            if dead[j] || bullets[i].2 == bullets[j].2 {
                continue;
            }
            if bullets[i].3.overlaps(&bullets[j].3) {
                dead[i] = true;
                dead[j] = true;
                effects.explosions.push(Explosion {
                    pos: (bullets[i].3.pos + bullets[j].3.pos) * 0.5,
                    radius: Params::EXPLOSION_RADIUS,
                    ticks_left: Params::EXPLOSION_TICKS,
                });
                events.clash = true;
                break;
            }
        }
    }

    for (index, (entity, _, _, _)) in bullets.iter().enumerate() {
        if dead[index] {
            let _ = world.despawn(*entity);
        }
    }
}
