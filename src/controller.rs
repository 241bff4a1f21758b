use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::event::VirtualKeyCode;

use crate::config::Config;
use crate::input::InputHandler;
use crate::patterns;
use crate::world::World;

/// What the host loop should do after a frame update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Continue,
    Quit,
}

/// Name of the pattern wired to the pattern key.
const PATTERN_KEY_TARGET: &str = "gosper-glider-gun";

/// Number keys that load registry patterns by index.
const PATTERN_INDEX_KEYS: [VirtualKeyCode; 3] = [
    VirtualKeyCode::Key1,
    VirtualKeyCode::Key2,
    VirtualKeyCode::Key3,
];

/// Translates the per-frame input snapshot and the clock into world
/// mutations. Owns the auto-step timer and the RNG behind randomize.
pub struct Controller {
    step_interval: Duration,
    last_step: Instant,
    rng: StdRng,
}

impl Controller {
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build with a caller-supplied RNG so randomize is reproducible.
    pub fn with_rng(config: &Config, rng: StdRng) -> Self {
        Self {
            step_interval: Duration::from_millis(config.step_interval_ms),
            last_step: Instant::now(),
            rng,
        }
    }

    /// Run one frame of input handling. Called once per rendered frame
    /// before the draw pass, with `now` sampled by the host loop.
    pub fn update(
        &mut self,
        world: &mut World,
        input: &InputHandler,
        config: &Config,
        now: Instant,
    ) -> ControlSignal {
        if input.is_held(VirtualKeyCode::Escape) || input.is_held(VirtualKeyCode::Q) {
            log::info!("Quit requested");
            return ControlSignal::Quit;
        }

        // Held: re-rolls every frame until released.
        if input.is_held(VirtualKeyCode::G) {
            world.randomize(&mut self.rng);
            log::debug!("Randomized, population {}", world.population());
        }

        if input.just_pressed(VirtualKeyCode::R) {
            world.reset();
            log::info!("Board cleared");
        }

        // Holding Space fast-forwards one generation per frame; S is a
        // single step. Either also starts the auto-step timer loop.
        if input.is_held(VirtualKeyCode::Space) || input.just_pressed(VirtualKeyCode::S) {
            world.step();
        }

        if input.is_held(VirtualKeyCode::P) {
            world.pause();
        }

        if input.just_pressed(VirtualKeyCode::L) {
            match patterns::find(PATTERN_KEY_TARGET) {
                Some(pattern) => {
                    world.load_pattern(pattern);
                    log::info!("Loaded pattern: {}", pattern.name);
                }
                None => log::warn!("Unknown pattern: {PATTERN_KEY_TARGET}"),
            }
        }
        for (index, &key) in PATTERN_INDEX_KEYS.iter().enumerate() {
            if input.just_pressed(key) {
                if let Some(pattern) = patterns::PATTERNS.get(index) {
                    world.load_pattern(pattern);
                    log::info!("Loaded pattern: {}", pattern.name);
                }
            }
        }

        if world.is_running() && now.duration_since(self.last_step) > self.step_interval {
            world.step();
            self.last_step = now;
        }

        // One toggle per click; holding the button does not repeat.
        if input.mouse_just_pressed() {
            if let Some((px, py)) = input.cursor() {
                if let Some((x, y)) = cell_at(px, py, config) {
                    world.toggle_cell(x, y);
                }
            }
        }

        ControlSignal::Continue
    }
}

/// Map a buffer-pixel position to a grid coordinate. Positions in the
/// header band above the grid map to no cell; the world's own range
/// check covers the remaining edges.
fn cell_at(px: u32, py: u32, config: &Config) -> Option<(i32, i32)> {
    if py < config.grid_top {
        return None;
    }
    let x = (px / config.tile_size) as i32;
    let y = ((py - config.grid_top) / config.tile_size) as i32;
    Some((x, y))
}
