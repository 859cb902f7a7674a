//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick counters only, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod player;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use enemy::update_enemies;
pub use snapshot::{BulletView, EnemyView, PlayerView, Snapshot};
pub use spawner::{advance_spawner, spawn_enemy, spawn_position};
pub use state::{Bullet, Enemy, EnemyKind, GamePhase, Player, Segment, Viewport, World};
pub use terrain::{covers_viewport, scroll_terrain};
pub use tick::{TickInput, tick};
