//! Enemy spawning and the difficulty ramp

use rand::Rng;

use super::state::{Enemy, EnemyKind, World};
use crate::consts::*;

/// Leftmost x where a new enemy may appear
///
/// Keeps the player a full lead away and leaves a jumpable gap behind the
/// most recently spawned enemy.
pub fn spawn_position(world: &World) -> f32 {
    let mut x = world.viewport.width;
    if let Some(last) = world.enemies.last() {
        x = x.max(last.right() + MIN_ENEMY_GAP);
    }
    x.max(world.player.pos.x + MIN_PLAYER_LEAD)
}

/// Pick a kind from a roll in `[0, 1)`: walker 60%, shooter 30%, jumper 10%
fn kind_for_roll(roll: f32) -> EnemyKind {
    if roll < 0.6 {
        EnemyKind::Walker
    } else if roll < 0.9 {
        EnemyKind::Shooter { cooldown: 0 }
    } else {
        EnemyKind::Jumper {
            jump_timer: 0,
            vel_y: 0.0,
        }
    }
}

/// Try to add one enemy; returns its kind, or `None` when there is no room
pub fn spawn_enemy(world: &mut World) -> Option<EnemyKind> {
    let roll: f32 = world.rng.random();
    let x = spawn_position(world);

    // The queue is backed up past the right edge; wait for it to drain
    if x > world.viewport.width + SPAWN_SLACK {
        log::debug!("Spawn skipped: no room (x={:.1})", x);
        return None;
    }

    let kind = kind_for_roll(roll);
    let speed = match kind {
        EnemyKind::Walker => WALKER_BASE_SPEED + world.rng.random::<f32>(),
        EnemyKind::Shooter { .. } => SHOOTER_SPEED,
        EnemyKind::Jumper { .. } => JUMPER_SPEED,
    };

    world
        .enemies
        .push(Enemy::new(kind, x, speed, &world.viewport));
    log::debug!("Spawned {} at x={:.1} (speed {:.2})", kind.name(), x, speed);
    Some(kind)
}

/// Count one tick toward the next spawn attempt and attempt it when due
///
/// Every successful spawn scores a point; every tenth point shortens the
/// interval, down to the floor. A skipped attempt resets the counter but
/// scores nothing, unlike the browser game which scored every attempt.
pub fn advance_spawner(world: &mut World) {
    world.ticks_since_spawn += 1;
    if world.ticks_since_spawn < world.spawn_interval {
        return;
    }
    world.ticks_since_spawn = 0;

    if spawn_enemy(world).is_none() {
        return;
    }

    world.score += 1;
    if world.score % SPAWN_RAMP_EVERY == 0 && world.spawn_interval > SPAWN_INTERVAL_MIN {
        world.spawn_interval = world
            .spawn_interval
            .saturating_sub(SPAWN_INTERVAL_STEP)
            .max(SPAWN_INTERVAL_MIN);
        log::info!(
            "Difficulty up at score {}: spawn every {} ticks",
            world.score,
            world.spawn_interval
        );
    }
}
