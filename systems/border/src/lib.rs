#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure border extraction that reduces a set of rooms to the outline of their union.
//!
//! Extraction runs in two steps. [`mark_interior`] rasterises every room into
//! an [`InteriorMask`], then [`extract_outer_border`] keeps only the interior
//! cells that have at least one orthogonal neighbour outside the union (or
//! outside the grid). Walls that would separate overlapping or touching rooms
//! never survive, since the cells on both sides of them are interior.

use roomgen_core::{CellCoord, GridDimensions, RoomRect, Tile, TileGrid};

const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Dense per-cell record of which cells are covered by at least one room.
///
/// The mask is scratch state for a single extraction; it is rebuilt from the
/// room list every time walls are recomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteriorMask {
    dimensions: GridDimensions,
    cells: Vec<bool>,
}

impl InteriorMask {
    /// Creates a mask with no interior cells.
    #[must_use]
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![false; dimensions.cell_count()],
        }
    }

    /// Dimensions of the mask.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Marks every in-bounds cell of the rectangle as interior.
    ///
    /// Marking is idempotent, so overlapping rooms simply share cells. Parts of
    /// the rectangle that fall outside the grid are ignored.
    pub fn mark(&mut self, rect: &RoomRect) {
        for point in rect.cells() {
            let Some(index) = self
                .dimensions
                .cell_at(point.x, point.y)
                .and_then(|cell| self.dimensions.index(cell))
            else {
                continue;
            };
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = true;
            }
        }
    }

    /// Reports whether the signed position is an in-bounds interior cell.
    #[must_use]
    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        self.dimensions
            .cell_at(x, y)
            .and_then(|cell| self.dimensions.index(cell))
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(false)
    }

    /// Number of interior cells.
    #[must_use]
    pub fn interior_count(&self) -> usize {
        self.cells.iter().filter(|interior| **interior).count()
    }

    /// Iterates interior cells in row-major order.
    pub fn interior_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let columns = self.dimensions.columns().max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, interior)| **interior)
            .filter_map(move |(index, _)| {
                let index = u32::try_from(index).ok()?;
                Some(CellCoord::new(index % columns, index / columns))
            })
    }
}

/// Rasterises the rooms into a fresh interior mask for a grid of the given size.
#[must_use]
pub fn mark_interior(rooms: &[RoomRect], dimensions: GridDimensions) -> InteriorMask {
    let mut mask = InteriorMask::new(dimensions);
    for room in rooms {
        mask.mark(room);
    }
    mask
}

/// Converts an interior mask into a grid holding only the outer border of the union.
///
/// A cell becomes [`Tile::Wall`] iff it is interior and at least one of its
/// four orthogonal neighbours is out of bounds or not interior. Every other
/// cell is [`Tile::Empty`]. The function is pure: the same mask always yields
/// the same grid.
#[must_use]
pub fn extract_outer_border(mask: &InteriorMask) -> TileGrid {
    let mut grid = TileGrid::empty(mask.dimensions());

    for cell in mask.interior_cells() {
        if is_outer_border(mask, cell) {
            let _ = grid.set(cell, Tile::Wall);
        }
    }

    grid
}

/// Convenience wrapper running [`mark_interior`] followed by [`extract_outer_border`].
#[must_use]
pub fn outline(rooms: &[RoomRect], dimensions: GridDimensions) -> TileGrid {
    extract_outer_border(&mark_interior(rooms, dimensions))
}

fn is_outer_border(mask: &InteriorMask, cell: CellCoord) -> bool {
    let (Ok(x), Ok(y)) = (i32::try_from(cell.column()), i32::try_from(cell.row())) else {
        return false;
    };

    NEIGHBOR_OFFSETS
        .iter()
        .any(|&(dx, dy)| !mask.is_interior(x.saturating_add(dx), y.saturating_add(dy)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_is_idempotent() {
        let room = RoomRect::new(1, 1, 3, 3);
        let once = mark_interior(&[room], GridDimensions::new(6, 6));
        let twice = mark_interior(&[room, room], GridDimensions::new(6, 6));
        assert_eq!(once, twice);
        assert_eq!(once.interior_count(), 9);
    }

    #[test]
    fn marking_clips_to_grid() {
        let mask = mark_interior(&[RoomRect::new(-2, -2, 4, 4)], GridDimensions::new(5, 5));
        assert_eq!(mask.interior_count(), 4);
        assert!(mask.is_interior(0, 0));
        assert!(!mask.is_interior(-1, 0));
    }

    #[test]
    fn grid_edge_counts_as_outside() {
        let grid = outline(&[RoomRect::new(0, 0, 3, 3)], GridDimensions::new(3, 3));
        assert_eq!(grid.wall_count(), 8);
        assert_eq!(grid.get(CellCoord::new(1, 1)), Some(Tile::Empty));
    }
}
