#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use controller::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod controller;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub light_chance: f64,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (5, 5);
    pub const DEFAULT_LIGHT_CHANCE: f64 = 0.25;

    pub const fn new_unchecked(size: Coord2, light_chance: f64) -> Self {
        Self { size, light_chance }
    }

    /// Clamps the size to at least 1x1 and the chance into `[0, 1]`, NaN counts as 0.
    pub fn new((rows, cols): Coord2, light_chance: f64) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let light_chance = if light_chance.is_nan() {
            0.0
        } else {
            light_chance.clamp(0.0, 1.0)
        };
        Self::new_unchecked((rows, cols), light_chance)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_LIGHT_CHANCE)
    }
}

/// Toggles `coords` and each orthogonal neighbor that lies inside `cells`.
///
/// Neighbors past an edge are skipped, so a corner flips 3 cells, an edge 4 and an interior cell 5. Fails without
/// touching anything when `coords` itself is outside the grid.
pub fn flip_around(cells: &mut Array2<bool>, coords: Coord2) -> Result<()> {
    let (rows, cols) = cells.dim();
    if usize::from(coords.0) >= rows || usize::from(coords.1) >= cols {
        return Err(GameError::InvalidCoords);
    }

    cells[coords.to_nd_index()] ^= true;
    for pos in cells.iter_neighbors(coords) {
        cells[pos.to_nd_index()] ^= true;
    }
    Ok(())
}

/// Rectangular board of lights, `true` is lit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct LightGrid {
    cells: Array2<bool>,
}

impl LightGrid {
    pub fn from_light_mask(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let max = usize::from(Coord::MAX);
        if !(1..=max).contains(&rows) || !(1..=max).contains(&cols) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    pub fn unlit(size: Coord2) -> Result<Self> {
        Self::from_light_mask(Array2::default(size.to_nd_index()))
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::unlit(size)?;
        for &coords in lit_coords {
            let coords = grid.validate_coords(coords)?;
            grid.cells[coords.to_nd_index()] = true;
        }
        Ok(grid)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // from_light_mask keeps both within Coord
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells.iter().filter(|&&lit| lit).count() as CellCount
    }

    pub fn iter_lit(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &lit)| lit)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn flip_around(&mut self, coords: Coord2) -> Result<()> {
        flip_around(&mut self.cells, coords)?;
        log::trace!("flipped around {:?}, {} lit", coords, self.lit_count());
        Ok(())
    }

    /// Won once every light is off.
    pub fn is_won(&self) -> bool {
        !self.cells.iter().any(|&lit| lit)
    }
}

impl Index<Coord2> for LightGrid {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<bool>> for LightGrid {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        Self::from_light_mask(cells)
    }
}

impl From<LightGrid> for Array2<bool> {
    fn from(grid: LightGrid) -> Self {
        grid.cells
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    /// The board was already solved, nothing moved.
    NoChange,
    Flipped,
    /// This flip turned the last lights off.
    Won,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flipped => true,
            Self::Won => true,
        }
    }
}
