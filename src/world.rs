use std::collections::HashSet;

use rand::Rng;

use crate::patterns::Pattern;

/// One grid location. Signed so neighbor arithmetic at the grid edge
/// is total; the live set may hold coordinates outside the declared
/// grid (they are never rendered but still count as neighbors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Offsets of the 8 cells at Chebyshev distance 1.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The automaton state: the set of live cells plus the simulation mode.
/// Everything else in the program reads this; only the controller
/// mutates it.
pub struct World {
    width: i32,
    height: i32,
    live: HashSet<Cell>,
    running: bool,
    generation: u64,
}

impl World {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            live: HashSet::new(),
            running: false,
            generation: 0,
        }
    }

    /// Flip one cell between alive and dead. Coordinates outside
    /// `[0, width) x [0, height)` are silently ignored.
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let cell = Cell::new(x, y);
        if !self.live.remove(&cell) {
            self.live.insert(cell);
        }
    }

    /// Number of live cells among the 8 neighbors of `(x, y)`.
    /// No bounds check: off-grid coordinates are valid lookup keys.
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.live.contains(&Cell::new(x + dx, y + dy)))
            .count() as u8
    }

    /// Advance one generation with the standard B3/S23 rule and mark
    /// the simulation running.
    ///
    /// Only live cells and their neighbors are examined; a dead cell
    /// with no live neighbor can never reach a count of 3, so the
    /// sparse sweep is exact.
    pub fn step(&mut self) {
        let mut next = HashSet::with_capacity(self.live.len());
        for &cell in &self.live {
            let count = self.live_neighbors(cell.x, cell.y);
            if count == 2 || count == 3 {
                next.insert(cell);
            }
            for &(dx, dy) in &NEIGHBOR_OFFSETS {
                let neighbor = Cell::new(cell.x + dx, cell.y + dy);
                if !self.live.contains(&neighbor)
                    && self.live_neighbors(neighbor.x, neighbor.y) == 3
                {
                    next.insert(neighbor);
                }
            }
        }
        self.live = next;
        self.running = true;
        self.generation += 1;
    }

    /// Replace the board with a random scatter. The target count is
    /// drawn from `[total/5, 2*total/5)`; coordinate collisions reduce
    /// the final population below the target.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.live.clear();
        let total = (self.width * self.height) as usize;
        let count = rng.gen_range(total / 5..total * 2 / 5);
        for _ in 0..count {
            let x = rng.gen_range(0..self.width);
            let y = rng.gen_range(0..self.height);
            self.live.insert(Cell::new(x, y));
        }
        self.generation = 0;
    }

    /// Replace the board with a named pattern's literal cell list.
    /// Does not start the simulation.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        self.live.clear();
        self.live
            .extend(pattern.cells.iter().map(|&(x, y)| Cell::new(x, y)));
        self.generation = 0;
    }

    /// Clear the board and pause.
    pub fn reset(&mut self) {
        self.live.clear();
        self.running = false;
        self.generation = 0;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.live.contains(&Cell::new(x, y))
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}
