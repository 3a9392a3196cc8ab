use ndarray::Array2;

use crate::{GameError, Result};

/// Single coordinate axis used for grid height, width, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Parses a `"row-col"` cell token, e.g. `"2-3"`.
///
/// Both components must be plain decimal numbers that fit a [`Coord`]; signs, whitespace and extra separators are
/// rejected. Bounds are not checked here.
pub fn parse_coords(token: &str) -> Result<Coord2> {
    fn parse_axis(part: &str) -> Result<Coord> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GameError::MalformedCoords);
        }
        part.parse().map_err(|_| GameError::MalformedCoords)
    }

    let (row, col) = token.split_once('-').ok_or(GameError::MalformedCoords)?;
    Ok((parse_axis(row)?, parse_axis(col)?))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let bounds = (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, bounds)
    }
}

/// Up, down, left, right. Diagonals are not neighbors in this game.
const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Orthogonal neighbors of `center` that fall inside `bounds`, skipping the rest.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn parse_coords_reads_row_then_col() {
        assert_eq!(parse_coords("2-3"), Ok((2, 3)));
        assert_eq!(parse_coords("0-0"), Ok((0, 0)));
        assert_eq!(parse_coords("255-12"), Ok((255, 12)));
    }

    #[test]
    fn parse_coords_rejects_malformed_tokens() {
        for token in [
            "", "1", "1-", "-2", "a-2", "1-b", "1-2-3", "-1-2", " 1-2", "1-2 ", "+1-2", "256-0",
        ] {
            assert_eq!(
                parse_coords(token),
                Err(GameError::MalformedCoords),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn corner_has_two_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (5, 5)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1)]);
    }

    #[test]
    fn opposite_corner_has_two_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((4, 4), (5, 5)).collect();
        assert_eq!(neighbors, [(3, 4), (4, 3)]);
    }

    #[test]
    fn edge_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 2), (5, 5)).collect();
        assert_eq!(neighbors, [(1, 2), (0, 1), (0, 3)]);
    }

    #[test]
    fn interior_has_four_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((2, 2), (5, 5)).collect();
        assert_eq!(neighbors, [(1, 2), (3, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn iter_neighbors_uses_array_bounds() {
        let cells: Array2<bool> = Array2::default([2, 3]);
        let neighbors: Vec<_> = cells.iter_neighbors((1, 2)).collect();
        assert_eq!(neighbors, [(0, 2), (1, 1)]);
    }
}
