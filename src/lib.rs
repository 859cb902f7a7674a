//! Roll Runner - A side-scrolling auto-runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, terrain, spawning, collisions)
//! - `settings`: Runtime configuration for the headless driver

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// All distances are in pixels, all velocities in pixels per tick and all
/// timers in ticks. Screen space: x grows right, y grows down.
pub mod consts {
    /// Downward acceleration applied to the player and jumpers each tick
    pub const GRAVITY: f32 = 0.4;
    /// Impulse for the first jump (charges 2 -> 1)
    pub const JUMP_IMPULSE: f32 = -8.0;
    /// Impulse for the second jump (charges 1 -> 0), which also starts a roll
    pub const DOUBLE_JUMP_IMPULSE: f32 = -6.0;
    pub const MAX_JUMP_CHARGES: u8 = 2;

    /// Height of the ground band at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 60.0;
    /// Entity box edge (30px at 0.6 scale)
    pub const ENTITY_SIZE: f32 = 18.0;
    pub const PLAYER_X: f32 = 100.0;

    /// Roll (melee) window started by the second jump
    pub const ROLL_TICKS: u32 = 10;
    /// Invincibility started by the second jump; outlasts the roll
    pub const INVINCIBLE_TICKS: u32 = 15;

    /// Terrain scroll per tick
    pub const SCROLL_SPEED: f32 = 2.0;
    pub const SEGMENT_MIN_WIDTH: f32 = 200.0;
    pub const SEGMENT_MAX_WIDTH: f32 = 300.0;
    /// Oldest segments are only evicted while more than this many exist
    pub const MIN_SEGMENTS: usize = 3;

    /// Spawn interval at the start of a run
    pub const SPAWN_INTERVAL_START: u32 = 120;
    pub const SPAWN_INTERVAL_MIN: u32 = 60;
    pub const SPAWN_INTERVAL_STEP: u32 = 3;
    /// Score points between difficulty steps
    pub const SPAWN_RAMP_EVERY: u64 = 10;
    /// An enemy never spawns closer than this to the player
    pub const MIN_PLAYER_LEAD: f32 = 300.0;
    /// Horizontal gap between the last enemy's right edge and a new spawn
    pub const MIN_ENEMY_GAP: f32 = 150.0;
    /// Spawns further than this past the right edge are skipped
    pub const SPAWN_SLACK: f32 = 300.0;

    pub const WALKER_BASE_SPEED: f32 = 2.0;
    pub const SHOOTER_SPEED: f32 = 1.5;
    pub const JUMPER_SPEED: f32 = 2.5;

    pub const SHOOTER_RANGE: f32 = 250.0;
    pub const SHOOTER_COOLDOWN_MIN: i32 = 80;
    pub const SHOOTER_COOLDOWN_MAX: i32 = 120;

    pub const JUMPER_RANGE: f32 = 150.0;
    pub const JUMPER_IMPULSE: f32 = -8.0;
    pub const JUMPER_TIMER_MIN: i32 = 60;
    pub const JUMPER_TIMER_MAX: i32 = 100;

    pub const BULLET_SIZE: f32 = 8.0;
    pub const BULLET_SPEED: f32 = 4.0;
}
