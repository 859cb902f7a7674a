//! Roll Runner headless entry point
//!
//! Drives the simulation without a display: one tick per frame, snapshots
//! printed as JSON. Usage: `roll-runner [settings.json]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use roll_runner::Settings;
use roll_runner::sim::{GamePhase, Snapshot, TickInput, World, tick};

/// Game instance holding all driver state
struct Game {
    world: World,
    input: TickInput,
    restarts_left: u32,
    /// Scores of finished runs
    finished: Vec<u64>,
    last_phase: GamePhase,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            world: World::new(settings.viewport(), seed),
            input: TickInput {
                primary_action: false,
                idle_mode: settings.autopilot,
            },
            restarts_left: settings.restarts,
            finished: Vec::new(),
            last_phase: GamePhase::Running,
        }
    }

    /// Run one frame; returns false once the driver should stop
    fn update(&mut self) -> bool {
        tick(&mut self.world, &self.input);
        // Clear one-shot inputs after processing
        self.input.primary_action = false;

        let phase = self.world.phase;
        if phase != self.last_phase {
            if self.world.is_game_over() {
                log::info!(
                    "Run {} over: score {}",
                    self.finished.len() + 1,
                    self.world.score
                );
                self.finished.push(self.world.score);
            }
            self.last_phase = phase;
        }

        if self.world.is_game_over() {
            if self.restarts_left == 0 {
                return false;
            }
            self.restarts_left -= 1;
            // Tap to restart
            self.input.primary_action = true;
        }
        true
    }

    fn render(&self) -> Snapshot {
        self.world.snapshot()
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    match serde_json::to_string(snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Snapshot not printable: {}", e),
    }
}

fn main() {
    env_logger::init();
    log::info!("Roll Runner (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref());

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(&settings, seed);
    let mut frames = 0;
    while frames < settings.max_ticks {
        let keep_going = game.update();
        frames += 1;

        if settings.snapshot_every > 0 && frames % settings.snapshot_every == 0 {
            print_snapshot(&game.render());
        }
        if !keep_going {
            break;
        }
    }

    print_snapshot(&game.render());

    if !game.world.is_game_over() {
        log::info!("Stopped after {} frames, current score {}", frames, game.world.score);
    }
    let best = game.finished.iter().copied().max().unwrap_or(game.world.score);
    log::info!("Runs finished: {}, best score: {}", game.finished.len(), best);
}
