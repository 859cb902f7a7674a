//! Per-kind enemy behavior

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Bullet, Enemy, EnemyKind, World};
use crate::consts::*;

/// Move every enemy and run its kind's state machine for one tick
pub fn update_enemies(world: &mut World) {
    let ground_y = world.ground_y();
    let player_x = world.player.pos.x;
    let World {
        enemies,
        bullets,
        rng,
        ..
    } = world;

    for enemy in enemies.iter_mut() {
        if let Some(bullet) = update_enemy(enemy, player_x, ground_y, rng) {
            bullets.push(bullet);
        }
    }
}

/// Advance one enemy; returns a bullet when a shooter fires
fn update_enemy(enemy: &mut Enemy, player_x: f32, ground_y: f32, rng: &mut Pcg32) -> Option<Bullet> {
    enemy.pos.x -= enemy.speed;
    let distance = (player_x - enemy.pos.x).abs();

    match enemy.kind {
        EnemyKind::Walker => None,

        EnemyKind::Shooter { ref mut cooldown } => {
            *cooldown -= 1;
            if distance < SHOOTER_RANGE && *cooldown <= 0 {
                *cooldown = rng.random_range(SHOOTER_COOLDOWN_MIN..SHOOTER_COOLDOWN_MAX);
                log::debug!("Shooter fired at x={:.1}", enemy.pos.x);
                Some(Bullet::fired_from(enemy))
            } else {
                None
            }
        }

        EnemyKind::Jumper {
            ref mut jump_timer,
            ref mut vel_y,
        } => {
            *jump_timer -= 1;
            if *jump_timer <= 0 && distance < JUMPER_RANGE {
                *vel_y = JUMPER_IMPULSE;
                *jump_timer = rng.random_range(JUMPER_TIMER_MIN..JUMPER_TIMER_MAX);
            }

            *vel_y += GRAVITY;
            enemy.pos.y += *vel_y;
            if enemy.pos.y + enemy.size.y > ground_y {
                enemy.pos.y = ground_y - enemy.size.y;
                *vel_y = 0.0;
            }
            None
        }
    }
}
