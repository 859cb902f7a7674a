//! Fixed-order simulation tick
//!
//! Core game loop that advances the world by one step. The order of the
//! phases below is part of the game's behavior and must not change.

use super::collision::Rect;
use super::enemy::update_enemies;
use super::spawner::advance_spawner;
use super::state::{GamePhase, World};
use super::terrain::scroll_terrain;

/// Look-ahead window for the autopilot, from the player's right edge
const AUTOPILOT_LOOKAHEAD: f32 = 70.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tap/click/key: jump, or restart after game over
    pub primary_action: bool,
    /// Idle/demo mode - the autopilot jumps over threats
    pub idle_mode: bool,
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &TickInput) {
    let mut action = input.primary_action;
    if input.idle_mode && !world.is_game_over() && autopilot_wants_jump(world) {
        action = true;
    }
    if action {
        world.on_primary_action();
    }

    if world.is_game_over() {
        return;
    }

    world.time_ticks += 1;

    // 1. Player physics
    let ground_y = world.ground_y();
    world.player.integrate(ground_y);

    // 2. Terrain
    scroll_terrain(world);

    // 3. Spawning, score and difficulty
    advance_spawner(world);

    // 4. Enemy movement and behavior
    update_enemies(world);

    // 5. Roll melee: every overlapping enemy loses a point per rolling tick
    if world.player.is_rolling() {
        let player_rect = world.player.rect();
        for enemy in &mut world.enemies {
            if player_rect.overlaps(&enemy.rect()) {
                enemy.hit_points = enemy.hit_points.saturating_sub(1);
            }
        }
    }

    // 6. Cull dead and passed enemies
    world.enemies.retain(|e| e.right() > 0.0 && !e.is_dead());

    // 7. Bullets
    for bullet in &mut world.bullets {
        bullet.pos.x -= bullet.speed;
    }
    world.bullets.retain(|b| b.right() > 0.0);

    // 8. Lethal contact, unless invincible
    if !world.player.is_invincible() {
        if touches_threat(world, &world.player.rect()) {
            world.phase = GamePhase::GameOver;
            log::info!(
                "Game over: score {} after {} ticks",
                world.score,
                world.time_ticks
            );
        }
    } else {
        world.player.invincible_timer -= 1;
    }

    // 9. Roll pose
    if world.player.roll_timer > 0 {
        world.player.roll_timer -= 1;
    }
}

/// Whether any enemy or bullet overlaps `rect`
fn touches_threat(world: &World, rect: &Rect) -> bool {
    world.enemies.iter().any(|e| rect.overlaps(&e.rect()))
        || world.bullets.iter().any(|b| rect.overlaps(&b.rect()))
}

/// Demo autopilot: hop when a threat is just ahead, spend the roll when a
/// threat is still underneath on the way down
fn autopilot_wants_jump(world: &World) -> bool {
    let player = &world.player;
    let front = player.pos.x + player.size.x;

    let threats = world
        .enemies
        .iter()
        .map(|e| e.rect())
        .chain(world.bullets.iter().map(|b| b.rect()));

    let mut ahead = false;
    let mut below = false;
    for rect in threats {
        let gap = rect.left() - front;
        if (0.0..=AUTOPILOT_LOOKAHEAD).contains(&gap) {
            ahead = true;
        }
        if rect.left() < front && rect.right() > player.pos.x {
            below = true;
        }
    }

    if player.grounded {
        ahead
    } else {
        below && player.vel_y > 0.0 && player.jump_charges > 0
    }
}
