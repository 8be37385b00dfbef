//! Toroidal cell field and the epoch update rule.

use life_core::{Direction, Error, FieldConfig, Position, Result};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Glyph used for an alive cell, both in masks and in rendered output.
pub const ALIVE_GLYPH: char = 'X';
/// Glyph used for a dead cell in rendered output.
pub const DEAD_GLYPH: char = '.';

/// A 2D toroidal field of alive/dead cells
///
/// Storage is a flat row-major vector indexed by `y * width + x`. The
/// `neighbours` vector is a scratch buffer reused by every [`Field::update`]
/// call; its contents are meaningful only inside that call.
#[derive(Debug, Clone)]
pub struct Field {
    width: i32,
    height: i32,
    cells: Vec<bool>,
    neighbours: Vec<u8>,
}

impl Field {
    /// Create an all-dead field. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 {
            return Err(Error::InvalidDimension(format!(
                "width must be positive, got {width}"
            )));
        }
        if height <= 0 {
            return Err(Error::InvalidDimension(format!(
                "height must be positive, got {height}"
            )));
        }
        let size = (width * height) as usize;
        Ok(Self {
            width,
            height,
            cells: vec![false; size],
            neighbours: vec![0; size],
        })
    }

    /// Create a field from field configuration
    pub fn from_config(config: &FieldConfig) -> Result<Self> {
        Self::new(config.width, config.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    // Sole mapping from (wrapped) coordinates to storage index.
    fn index(&self, pos: Position) -> usize {
        let wrapped = pos.wrap(self.width, self.height);
        (wrapped.y * self.width + wrapped.x) as usize
    }

    /// Get cell state at position (with toroidal wrapping)
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(Position::new(x, y))]
    }

    /// Set cell state at position (with toroidal wrapping)
    pub fn set(&mut self, x: i32, y: i32, state: bool) {
        let index = self.index(Position::new(x, y));
        self.cells[index] = state;
    }

    /// Assign a random state to every cell
    ///
    /// `alive_probability` is the chance for an individual cell to start
    /// alive. Pass a seed to reproduce a state; with `None` the seed is
    /// derived from the clock so consecutive runs differ.
    pub fn randomize(&mut self, alive_probability: f64, seed: Option<u64>) -> Result<()> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(Error::InvalidProbability(format!(
                "alive probability must be within [0, 1], got {alive_probability}"
            )));
        }

        let seed = match seed {
            Some(seed) => seed,
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default(),
        };
        debug!(seed, alive_probability, "randomizing field");

        // One draw per cell in row-major order, x fastest.
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for cell in &mut self.cells {
            *cell = rng.gen::<f64>() < alive_probability;
        }
        Ok(())
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Advance the field by one epoch
    ///
    /// First pass counts alive neighbours into the scratch buffer by walking
    /// outward from every alive cell; the neighbour relation is symmetric, so
    /// this produces the same counts as summing each cell's 8 wrapped
    /// neighbours. Second pass applies the rule from those counts alone, so a
    /// cell written this epoch never influences another cell's count.
    pub fn update(&mut self) {
        self.neighbours.fill(0);

        for y in 0..self.height {
            for x in 0..self.width {
                if !self.cells[(y * self.width + x) as usize] {
                    continue;
                }
                for direction in Direction::all() {
                    let (dx, dy) = direction.to_delta();
                    let neighbour = self.index(Position::new(x + dx, y + dy));
                    self.neighbours[neighbour] += 1;
                }
            }
        }

        for (cell, &alive_count) in self.cells.iter_mut().zip(&self.neighbours) {
            match alive_count {
                3 => *cell = true,
                // Exactly 2 neighbours leaves the cell as it was.
                2 => {}
                _ => *cell = false,
            }
        }
    }

    /// Overlay a pattern mask at the given offset
    ///
    /// Every mask cell is written, alive where the marker is
    /// [`ALIVE_GLYPH`]. Offsets wrap like any other coordinate, so a
    /// pattern placed near an edge continues on the opposite side.
    pub fn set_pattern(&mut self, pattern: &[&str], dx: i32, dy: i32) {
        for (y, row) in pattern.iter().enumerate() {
            for (x, marker) in row.chars().enumerate() {
                self.set(x as i32 + dx, y as i32 + dy, marker == ALIVE_GLYPH);
            }
        }
    }

    /// Render the field as text, one glyph per cell and one line per row
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[(y * self.width + x) as usize];
                out.push(if alive { ALIVE_GLYPH } else { DEAD_GLYPH });
            }
            out.push('\n');
        }
        out
    }

    /// Copy the cell states out for renderers
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }
}

// Equality covers dimensions and cell states; the neighbour scratch buffer
// is transient and never participates.
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Field {}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Immutable copy of a field's cell states for out-of-core renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<bool>,
}
