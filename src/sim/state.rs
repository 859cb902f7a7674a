//! World state and core simulation types
//!
//! Everything a tick reads or writes lives in [`World`]; there is no other
//! hidden state.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended; only a primary action (restart) changes anything
    GameOver,
}

/// Drawable surface size, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Lay out a surface landscape, swapping the axes of a portrait one
    pub fn landscape(width: f32, height: f32) -> Self {
        if width > height {
            Self::new(width, height)
        } else {
            Self::new(height, width)
        }
    }

    /// Top of the ground band
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_HEIGHT
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 450.0)
    }
}

/// The player avatar
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    pub grounded: bool,
    /// Jumps left before the next ground contact (0..=2)
    pub jump_charges: u8,
    /// Ticks left of the roll pose; enemies touched while rolling take damage
    pub roll_timer: u32,
    /// Ticks left of damage immunity
    pub invincible_timer: u32,
}

impl Player {
    /// A player standing on the ground of the given viewport
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, viewport.ground_y() - ENTITY_SIZE),
            size: Vec2::splat(ENTITY_SIZE),
            vel_y: 0.0,
            grounded: true,
            jump_charges: MAX_JUMP_CHARGES,
            roll_timer: 0,
            invincible_timer: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Enemy variants with their type-specific state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Drifts left, nothing else
    Walker,
    /// Fires bullets at the player when close enough
    Shooter {
        /// Ticks until the next shot is allowed (may go negative while out of range)
        cooldown: i32,
    },
    /// Hops when the player gets close
    Jumper { jump_timer: i32, vel_y: f32 },
}

impl EnemyKind {
    pub fn max_hit_points(&self) -> u8 {
        match self {
            EnemyKind::Walker => 1,
            EnemyKind::Shooter { .. } => 2,
            EnemyKind::Jumper { .. } => 3,
        }
    }

    /// Fill color as 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self {
            EnemyKind::Walker => 0xff0000,
            EnemyKind::Shooter { .. } => 0x00ff00,
            EnemyKind::Jumper { .. } => 0x0000ff,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Walker => "walker",
            EnemyKind::Shooter { .. } => "shooter",
            EnemyKind::Jumper { .. } => "jumper",
        }
    }
}

/// An enemy entity
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed per tick, independent of the terrain scroll
    pub speed: f32,
    pub hit_points: u8,
}

impl Enemy {
    /// An enemy of `kind` standing on the ground at `x`, at full health
    pub fn new(kind: EnemyKind, x: f32, speed: f32, viewport: &Viewport) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, viewport.ground_y() - ENTITY_SIZE),
            size: Vec2::splat(ENTITY_SIZE),
            speed,
            hit_points: kind.max_hit_points(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn is_dead(&self) -> bool {
        self.hit_points == 0
    }
}

/// A projectile fired by a shooter
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Bullet {
    /// Bullet leaving the left edge of `shooter`, at half its height
    pub fn fired_from(shooter: &Enemy) -> Self {
        Self {
            pos: Vec2::new(shooter.pos.x, shooter.pos.y + shooter.size.y / 2.0),
            size: Vec2::splat(BULLET_SIZE),
            speed: BULLET_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A piece of ground
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Segment {
    pub fn new(x: f32, viewport: &Viewport, width: f32) -> Self {
        Self {
            pos: Vec2::new(x, viewport.ground_y()),
            width,
            height: GROUND_HEIGHT,
        }
    }

    /// Trailing (right) edge
    #[inline]
    pub fn end(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Complete world state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Every random draw of the simulation comes from here
    pub rng: Pcg32,
    pub viewport: Viewport,
    /// Resize reported mid-run, applied by the next reset
    pub pending_viewport: Option<Viewport>,
    pub player: Player,
    /// Ground segments, left to right
    pub terrain: Vec<Segment>,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub score: u64,
    /// Ticks between spawn attempts
    pub spawn_interval: u32,
    pub ticks_since_spawn: u32,
    /// Ticks survived this run
    pub time_ticks: u64,
    pub phase: GamePhase,
}

impl World {
    /// Create a fresh run for the given viewport and seed
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            pending_viewport: None,
            player: Player::new(&viewport),
            terrain: vec![Segment::new(0.0, &viewport, viewport.width * 2.0)],
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            spawn_interval: SPAWN_INTERVAL_START,
            ticks_since_spawn: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
        }
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.viewport.ground_y()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Record a new surface size; it takes effect on the next reset
    ///
    /// The latest report wins, so resizing back to the current size cancels
    /// an earlier pending change.
    pub fn resize(&mut self, viewport: Viewport) {
        self.pending_viewport = (viewport != self.viewport).then_some(viewport);
    }

    /// Replace the whole world with a fresh run
    ///
    /// The next seed is drawn from the current RNG so a sequence of runs
    /// stays reproducible from the first seed.
    pub fn reset(&mut self) {
        let seed = self.rng.next_u64();
        let viewport = self.pending_viewport.unwrap_or(self.viewport);
        log::info!(
            "Restarting (previous score {}, next seed {})",
            self.score,
            seed
        );
        *self = World::new(viewport, seed);
    }

    /// Tap/click/key: restart a finished run, otherwise try to jump
    pub fn on_primary_action(&mut self) {
        match self.phase {
            GamePhase::GameOver => self.reset(),
            GamePhase::Running => {
                self.player.jump();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_layout() {
        let world = World::new(Viewport::new(800.0, 450.0), 7);
        assert_eq!(world.phase, GamePhase::Running);
        assert_eq!(world.score, 0);
        assert_eq!(world.spawn_interval, 120);
        assert_eq!(world.terrain.len(), 1);
        assert_eq!(world.terrain[0].end(), 1600.0);
        // Player rests exactly on the ground band
        assert_eq!(world.player.rect().bottom(), 390.0);
        assert_eq!(world.player.jump_charges, 2);
    }

    #[test]
    fn test_landscape_swaps_portrait() {
        assert_eq!(Viewport::landscape(400.0, 900.0), Viewport::new(900.0, 400.0));
        assert_eq!(Viewport::landscape(900.0, 400.0), Viewport::new(900.0, 400.0));
    }

    #[test]
    fn test_enemy_hit_points_by_kind() {
        let vp = Viewport::default();
        assert_eq!(Enemy::new(EnemyKind::Walker, 0.0, 2.0, &vp).hit_points, 1);
        let shooter = EnemyKind::Shooter { cooldown: 0 };
        assert_eq!(Enemy::new(shooter, 0.0, 1.5, &vp).hit_points, 2);
        let jumper = EnemyKind::Jumper {
            jump_timer: 0,
            vel_y: 0.0,
        };
        assert_eq!(Enemy::new(jumper, 0.0, 2.5, &vp).hit_points, 3);
    }

    #[test]
    fn test_primary_action_restarts_after_game_over() {
        let mut world = World::new(Viewport::default(), 1);
        world.score = 42;
        world.spawn_interval = 60;
        world.phase = GamePhase::GameOver;
        world
            .enemies
            .push(Enemy::new(EnemyKind::Walker, 300.0, 2.0, &world.viewport));

        world.on_primary_action();

        assert_eq!(world.phase, GamePhase::Running);
        assert_eq!(world.score, 0);
        assert_eq!(world.spawn_interval, 120);
        assert!(world.enemies.is_empty());
        // Restart never counts as a jump
        assert_eq!(world.player.jump_charges, 2);
    }

    #[test]
    fn test_resize_applies_on_reset() {
        let mut world = World::new(Viewport::new(800.0, 450.0), 3);
        world.resize(Viewport::new(1024.0, 600.0));
        // Existing entities are not reflowed
        assert_eq!(world.viewport.width, 800.0);
        world.reset();
        assert_eq!(world.viewport, Viewport::new(1024.0, 600.0));
        assert_eq!(world.pending_viewport, None);
        assert_eq!(world.player.rect().bottom(), 540.0);
    }

    #[test]
    fn test_resize_back_cancels_pending() {
        let original = Viewport::new(800.0, 450.0);
        let mut world = World::new(original, 3);
        world.resize(Viewport::new(1024.0, 600.0));
        world.resize(original);
        assert_eq!(world.pending_viewport, None);

        world.reset();
        assert_eq!(world.viewport, original);
        assert_eq!(world.player.rect().bottom(), 390.0);
    }

    #[test]
    fn test_is_game_over_follows_phase() {
        let mut world = World::new(Viewport::default(), 5);
        assert!(!world.is_game_over());
        world.phase = GamePhase::GameOver;
        assert!(world.is_game_over());
    }

    #[test]
    fn test_reset_is_reproducible() {
        let mut a = World::new(Viewport::default(), 99);
        let mut b = World::new(Viewport::default(), 99);
        a.reset();
        b.reset();
        assert_eq!(a.seed, b.seed);
        assert_ne!(a.seed, 99);
    }
}
