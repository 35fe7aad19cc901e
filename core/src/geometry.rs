//! Axis-aligned room rectangles and the spatial relations between them.

use serde::{Deserialize, Serialize};

/// Signed tile position used by rectangle queries.
///
/// Coordinates are signed because anchored room candidates may be proposed
/// partially outside the grid before bounds checks reject them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilePoint {
    /// Horizontal position, increasing to the right.
    pub x: i32,
    /// Vertical position, increasing downward.
    pub y: i32,
}

impl TilePoint {
    /// Creates a new tile position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Immutable axis-aligned room footprint anchored at its upper-left tile.
///
/// Extents are half-open: a rectangle covers columns `x..x + width` and rows
/// `y..y + height`. Two rectangles whose edges merely touch therefore do not
/// overlap; they are *adjacent* instead. Far edges saturate at `i32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RoomRectFields")]
pub struct RoomRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

/// Wire form of [`RoomRect`]; decoding goes through [`RoomRect::new`].
#[derive(Deserialize)]
struct RoomRectFields {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl From<RoomRectFields> for RoomRect {
    fn from(fields: RoomRectFields) -> Self {
        Self::new(fields.x, fields.y, fields.width, fields.height)
    }
}

impl RoomRect {
    /// Creates a rectangle from its origin and size.
    ///
    /// Sizes below one tile are promoted to one so a rectangle always covers
    /// at least a single cell.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 1 { 1 } else { width },
            height: if height < 1 { 1 } else { height },
        }
    }

    /// Column of the left edge.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Row of the top edge.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Width in tiles.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Exclusive right edge, `x + width`.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, `y + height`.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Number of tiles covered by the rectangle.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width.unsigned_abs()) * u64::from(self.height.unsigned_abs())
    }

    /// Reports whether the interiors of the two rectangles intersect.
    ///
    /// Touching edges do not count as overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &RoomRect) -> bool {
        spans_intersect(self.x, self.right(), other.x, other.right())
            && spans_intersect(self.y, self.bottom(), other.y, other.bottom())
    }

    /// Reports whether the rectangles share a full or partial edge without overlapping.
    ///
    /// Horizontal adjacency requires one rectangle's right edge to coincide
    /// with the other's left edge while their row spans intersect; vertical
    /// adjacency is the symmetric case on columns. Corner contact alone is not
    /// adjacency.
    #[must_use]
    pub const fn is_adjacent_to(&self, other: &RoomRect) -> bool {
        let horizontal = (self.right() == other.x || other.right() == self.x)
            && spans_intersect(self.y, self.bottom(), other.y, other.bottom());
        let vertical = (self.bottom() == other.y || other.bottom() == self.y)
            && spans_intersect(self.x, self.right(), other.x, other.right());
        horizontal || vertical
    }

    /// Reports whether the rectangles overlap or are edge-adjacent.
    ///
    /// This is the relation that makes two rooms reachable from each other.
    #[must_use]
    pub const fn touches(&self, other: &RoomRect) -> bool {
        self.overlaps(other) || self.is_adjacent_to(other)
    }

    /// Half-open containment test for a single tile.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Integer-truncated midpoint of the rectangle.
    #[must_use]
    pub const fn center(&self) -> TilePoint {
        TilePoint::new(
            self.x + (self.right() - self.x) / 2,
            self.y + (self.bottom() - self.y) / 2,
        )
    }

    /// Enumerates the perimeter tiles of the rectangle.
    ///
    /// The top and bottom rows are emitted column by column, followed by the
    /// left and right columns of the rows in between. Every tile appears once,
    /// including for rectangles one tile wide or tall.
    #[must_use]
    pub fn border_tiles(&self) -> Vec<TilePoint> {
        let mut tiles = Vec::new();
        if self.right() <= self.x || self.bottom() <= self.y {
            return tiles;
        }
        let last_row = self.bottom() - 1;
        let last_column = self.right() - 1;

        for x in self.x..self.right() {
            tiles.push(TilePoint::new(x, self.y));
            if last_row != self.y {
                tiles.push(TilePoint::new(x, last_row));
            }
        }

        for y in self.y.saturating_add(1)..last_row {
            tiles.push(TilePoint::new(self.x, y));
            if last_column != self.x {
                tiles.push(TilePoint::new(last_column, y));
            }
        }

        tiles
    }

    /// Iterates every tile covered by the rectangle in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = TilePoint> {
        let (left, right) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (left..right).map(move |x| TilePoint::new(x, y)))
    }
}

const fn spans_intersect(start_a: i32, end_a: i32, start_b: i32, end_b: i32) -> bool {
    start_a < end_b && start_b < end_a
}

#[cfg(test)]
mod tests {
    use super::{RoomRect, TilePoint};

    #[test]
    fn overlap_excludes_touching_edges() {
        let left = RoomRect::new(0, 0, 3, 3);
        let right = RoomRect::new(3, 0, 3, 3);
        assert!(!left.overlaps(&right));
        assert!(left.is_adjacent_to(&right));
        assert!(left.touches(&right));
    }

    #[test]
    fn corner_contact_is_not_adjacency() {
        let first = RoomRect::new(0, 0, 2, 2);
        let diagonal = RoomRect::new(2, 2, 2, 2);
        assert!(!first.overlaps(&diagonal));
        assert!(!first.is_adjacent_to(&diagonal));
    }

    #[test]
    fn vertical_adjacency_requires_shared_columns() {
        let top = RoomRect::new(2, 0, 4, 3);
        let below = RoomRect::new(5, 3, 2, 2);
        let shifted = RoomRect::new(6, 3, 2, 2);
        assert!(top.is_adjacent_to(&below));
        assert!(!top.is_adjacent_to(&shifted));
    }

    #[test]
    fn nested_rectangles_overlap() {
        let outer = RoomRect::new(0, 0, 10, 10);
        let inner = RoomRect::new(4, 4, 2, 2);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
        assert!(!outer.is_adjacent_to(&inner));
    }

    #[test]
    fn border_tiles_cover_perimeter_once() {
        let rect = RoomRect::new(3, 3, 4, 4);
        let mut tiles = rect.border_tiles();
        assert_eq!(tiles.len(), 12);
        tiles.sort();
        tiles.dedup();
        assert_eq!(tiles.len(), 12);
        assert!(!tiles.contains(&TilePoint::new(4, 4)));
        assert!(tiles.contains(&TilePoint::new(6, 6)));
    }

    #[test]
    fn thin_rectangles_do_not_repeat_border_tiles() {
        assert_eq!(RoomRect::new(0, 0, 5, 1).border_tiles().len(), 5);
        assert_eq!(RoomRect::new(0, 0, 1, 4).border_tiles().len(), 4);
        assert_eq!(RoomRect::new(7, 7, 1, 1).border_tiles(), vec![TilePoint::new(7, 7)]);
    }

    #[test]
    fn center_truncates_toward_origin() {
        assert_eq!(RoomRect::new(2, 4, 5, 3).center(), TilePoint::new(4, 5));
    }

    #[test]
    fn containment_is_half_open() {
        let rect = RoomRect::new(1, 1, 2, 2);
        assert!(rect.contains(1, 1));
        assert!(rect.contains(2, 2));
        assert!(!rect.contains(3, 2));
        assert!(!rect.contains(0, 1));
    }

    #[test]
    fn degenerate_sizes_are_promoted() {
        let rect = RoomRect::new(0, 0, 0, -3);
        assert_eq!((rect.width(), rect.height()), (1, 1));
        assert_eq!(rect.area(), 1);
    }

    #[test]
    fn extreme_origins_clip_at_the_far_edge() {
        let wide = RoomRect::new(i32::MAX - 1, 0, 4, 4);
        assert_eq!(wide.right(), i32::MAX);
        assert_eq!(wide.center(), TilePoint::new(i32::MAX - 1, 2));

        let flat = RoomRect::new(0, i32::MAX, 3, 1);
        assert!(flat.border_tiles().is_empty());
        assert_eq!(flat.cells().count(), 0);

        let low = RoomRect::new(0, i32::MAX - 2, 1, 5);
        assert_eq!(
            low.border_tiles(),
            vec![TilePoint::new(0, i32::MAX - 2), TilePoint::new(0, i32::MAX - 1)]
        );
    }

    #[test]
    fn cells_walk_rows_in_order() {
        let cells: Vec<TilePoint> = RoomRect::new(1, 2, 2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![
                TilePoint::new(1, 2),
                TilePoint::new(2, 2),
                TilePoint::new(1, 3),
                TilePoint::new(2, 3),
            ]
        );
    }
}
