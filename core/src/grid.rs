//! Tile grid model produced by the generator.

use serde::{Deserialize, Serialize};

use crate::RoomRect;

/// State of a single tile in the generated layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    /// Tile that carries no wall.
    #[default]
    Empty = 0,
    /// Tile on the outer border of the room union.
    Wall = 1,
}

impl Tile {
    /// Integer marker consumed by renderers and exporters.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Reports whether the tile is a wall.
    #[must_use]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}

/// Location of a single in-bounds grid cell expressed as column and row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// How strictly a room's far edges are checked against the grid bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundsPolicy {
    /// Rooms may reach the last column and row: `x + width <= columns`.
    #[default]
    Inclusive,
    /// Rooms must stop one tile short of the far edges: `x + width < columns`.
    ExcludeFarEdge,
}

/// Width and height of the tile grid measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    columns: u32,
    rows: u32,
}

impl GridDimensions {
    /// Creates a new dimension descriptor.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells covered by the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.columns) * u64::from(self.rows);
        usize::try_from(count).unwrap_or(0)
    }

    /// Reports whether the rectangle lies inside the grid under the provided policy.
    #[must_use]
    pub fn fits(&self, rect: &RoomRect, policy: BoundsPolicy) -> bool {
        if rect.x() < 0 || rect.y() < 0 {
            return false;
        }

        let right = i64::from(rect.right());
        let bottom = i64::from(rect.bottom());
        let columns = i64::from(self.columns);
        let rows = i64::from(self.rows);
        match policy {
            BoundsPolicy::Inclusive => right <= columns && bottom <= rows,
            BoundsPolicy::ExcludeFarEdge => right < columns && bottom < rows,
        }
    }

    /// Converts a signed tile position into an in-bounds cell, if it lies inside the grid.
    #[must_use]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<CellCoord> {
        let column = u32::try_from(x).ok()?;
        let row = u32::try_from(y).ok()?;
        (column < self.columns && row < self.rows).then(|| CellCoord::new(column, row))
    }

    /// Row-major index of an in-bounds cell.
    #[must_use]
    pub fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Dense row-major grid of tiles with the origin at the top-left corner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    dimensions: GridDimensions,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid where every tile is [`Tile::Empty`].
    #[must_use]
    pub fn empty(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            tiles: vec![Tile::Empty; dimensions.cell_count()],
        }
    }

    /// Dimensions of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Returns the tile stored at the provided cell, if it lies inside the grid.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<Tile> {
        self.dimensions
            .index(cell)
            .and_then(|index| self.tiles.get(index).copied())
    }

    /// Overwrites the tile at the provided cell. Returns `false` when the cell is out of bounds.
    pub fn set(&mut self, cell: CellCoord, tile: Tile) -> bool {
        let Some(slot) = self
            .dimensions
            .index(cell)
            .and_then(|index| self.tiles.get_mut(index))
        else {
            return false;
        };
        *slot = tile;
        true
    }

    /// Iterates the grid one row slice at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        let width = usize::try_from(self.dimensions.columns()).unwrap_or(0).max(1);
        self.tiles.chunks(width)
    }

    /// Height-by-width matrix of integer tile markers (`0` empty, `1` wall).
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|tile| tile.code()).collect())
            .collect()
    }

    /// Iterates the cells that currently hold a wall in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let columns = self.dimensions.columns().max(1);
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_wall())
            .filter_map(move |(index, _)| {
                let index = u32::try_from(index).ok()?;
                Some(CellCoord::new(index % columns, index / columns))
            })
    }

    /// Number of wall tiles in the grid.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_wall()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundsPolicy, CellCoord, GridDimensions, Tile, TileGrid};
    use crate::RoomRect;

    #[test]
    fn inclusive_policy_admits_last_column() {
        let dimensions = GridDimensions::new(10, 10);
        let flush = RoomRect::new(6, 6, 4, 4);
        assert!(dimensions.fits(&flush, BoundsPolicy::Inclusive));
        assert!(!dimensions.fits(&flush, BoundsPolicy::ExcludeFarEdge));
        assert!(dimensions.fits(&RoomRect::new(5, 5, 4, 4), BoundsPolicy::ExcludeFarEdge));
    }

    #[test]
    fn negative_origins_never_fit() {
        let dimensions = GridDimensions::new(10, 10);
        assert!(!dimensions.fits(&RoomRect::new(-1, 0, 2, 2), BoundsPolicy::Inclusive));
        assert!(!dimensions.fits(&RoomRect::new(0, -1, 2, 2), BoundsPolicy::Inclusive));
    }

    #[test]
    fn set_rejects_out_of_bounds_cells() {
        let mut grid = TileGrid::empty(GridDimensions::new(3, 2));
        assert!(grid.set(CellCoord::new(2, 1), Tile::Wall));
        assert!(!grid.set(CellCoord::new(3, 0), Tile::Wall));
        assert_eq!(grid.to_codes(), vec![vec![0, 0, 0], vec![0, 0, 1]]);
        assert_eq!(grid.walls().collect::<Vec<_>>(), vec![CellCoord::new(2, 1)]);
        assert_eq!(grid.wall_count(), 1);
    }

    #[test]
    fn cell_at_rejects_negative_and_overflowing_positions() {
        let dimensions = GridDimensions::new(4, 4);
        assert_eq!(dimensions.cell_at(3, 0), Some(CellCoord::new(3, 0)));
        assert_eq!(dimensions.cell_at(-1, 0), None);
        assert_eq!(dimensions.cell_at(0, 4), None);
    }
}
