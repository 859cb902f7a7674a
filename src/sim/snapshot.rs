//! Read-only view of a world for renderers
//!
//! A renderer draws from a [`Snapshot`] taken after a tick completes, so it
//! never observes a half-updated world.

use glam::Vec2;
use serde::Serialize;

use super::collision::Rect;
use super::state::{GamePhase, World};
use crate::consts::ROLL_TICKS;

/// Player fill colors
pub const PLAYER_COLOR: u32 = 0x00ffff;
pub const PLAYER_FLASH_COLOR: u32 = 0xffffff;
pub const GROUND_COLOR: u32 = 0x664422;
pub const BULLET_COLOR: u32 = 0xffff00;

/// Radians of spin per elapsed roll tick
const ROLL_SPIN_PER_TICK: f32 = 0.3;
/// Ticks per on/off half of the invincibility flash
const FLASH_PERIOD: u32 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub rolling: bool,
    /// Spin of the roll pose, in radians
    pub rotation: f32,
    /// Point the roll spins around (the box center)
    pub pivot: Vec2,
    /// Invincible and currently in the bright half of the flash
    pub flashing: bool,
    pub color: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub kind: &'static str,
    pub rect: Rect,
    pub color: u32,
    /// Remaining health in `(0, 1]`
    pub health: f32,
    /// Health bars only show once an enemy has been hurt
    pub show_health_bar: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletView {
    pub rect: Rect,
    pub color: u32,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub jump_charges: u8,
    pub player: PlayerView,
    pub terrain: Vec<Rect>,
    pub ground_color: u32,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
}

impl World {
    pub fn snapshot(&self) -> Snapshot {
        let player = &self.player;
        let flashing =
            player.invincible_timer > 0 && (player.invincible_timer / FLASH_PERIOD) % 2 == 0;
        let rotation = if player.roll_timer > 0 {
            ROLL_TICKS.saturating_sub(player.roll_timer) as f32 * ROLL_SPIN_PER_TICK
        } else {
            0.0
        };

        Snapshot {
            tick: self.time_ticks,
            phase: self.phase,
            score: self.score,
            jump_charges: player.jump_charges,
            player: PlayerView {
                rect: player.rect(),
                rolling: player.roll_timer > 0,
                rotation,
                pivot: player.rect().center(),
                flashing,
                color: if flashing {
                    PLAYER_FLASH_COLOR
                } else {
                    PLAYER_COLOR
                },
            },
            terrain: self.terrain.iter().map(|s| s.rect()).collect(),
            ground_color: GROUND_COLOR,
            enemies: self
                .enemies
                .iter()
                .map(|e| {
                    let max = e.kind.max_hit_points();
                    EnemyView {
                        kind: e.kind.name(),
                        rect: e.rect(),
                        color: e.kind.color(),
                        health: e.hit_points as f32 / max as f32,
                        show_health_bar: e.hit_points < max,
                    }
                })
                .collect(),
            bullets: self
                .bullets
                .iter()
                .map(|b| BulletView {
                    rect: b.rect(),
                    color: BULLET_COLOR,
                })
                .collect(),
        }
    }
}
