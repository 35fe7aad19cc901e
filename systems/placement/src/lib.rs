#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure placement system that proposes candidate room rectangles.
//!
//! Proposals are drawn from an injected random source so a seeded generator
//! replays the exact same candidates. The system never consults existing
//! rooms: deciding whether a candidate connects to the layout is left to the
//! connectivity resolver.

use rand::Rng;
use roomgen_core::{BoundsPolicy, Direction, GridDimensions, RoomRect, SizeRange};

/// Placement system bound to a grid, a room size range and a bounds policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    dimensions: GridDimensions,
    sizes: SizeRange,
    bounds: BoundsPolicy,
}

impl Placement {
    /// Creates a placement system for the provided grid and size constraints.
    #[must_use]
    pub const fn new(dimensions: GridDimensions, sizes: SizeRange, bounds: BoundsPolicy) -> Self {
        Self {
            dimensions,
            sizes,
            bounds,
        }
    }

    /// Reports whether a candidate lies within the grid under the configured policy.
    #[must_use]
    pub fn is_in_bounds(&self, rect: &RoomRect) -> bool {
        self.dimensions.fits(rect, self.bounds)
    }

    /// Proposes a room anywhere on the grid.
    ///
    /// Width and height are drawn uniformly from the size range, then the
    /// origin is drawn uniformly from every position the bounds policy admits
    /// for that size. Returns `None` when a room of the drawn size cannot fit.
    pub fn propose_free_room(&self, rng: &mut impl Rng) -> Option<RoomRect> {
        let width = self.sizes.sample(rng);
        let height = self.sizes.sample(rng);

        let column_span = origin_span(self.dimensions.columns(), width, self.bounds)?;
        let row_span = origin_span(self.dimensions.rows(), height, self.bounds)?;

        let x = rng.gen_range(0..column_span);
        let y = rng.gen_range(0..row_span);
        Some(RoomRect::new(x, y, width, height))
    }

    /// Proposes a room flush against one edge of `anchor`.
    ///
    /// The new room is centred on a random point along the anchor's edge: the
    /// perpendicular offset is a random position within the anchor's span
    /// minus half of the new room's perpendicular size. The candidate is
    /// returned whether or not it fits the grid; callers must bounds-check it.
    /// Returns `None` only if the coordinates cannot be represented.
    pub fn propose_adjacent_room(
        &self,
        rng: &mut impl Rng,
        anchor: &RoomRect,
        direction: Direction,
    ) -> Option<RoomRect> {
        let width = self.sizes.sample(rng);
        let height = self.sizes.sample(rng);

        let (x, y) = match direction {
            Direction::East => (
                anchor.right(),
                offset_along(rng, anchor.y(), anchor.height(), height)?,
            ),
            Direction::West => (
                anchor.x().checked_sub(width)?,
                offset_along(rng, anchor.y(), anchor.height(), height)?,
            ),
            Direction::South => (
                offset_along(rng, anchor.x(), anchor.width(), width)?,
                anchor.bottom(),
            ),
            Direction::North => (
                offset_along(rng, anchor.x(), anchor.width(), width)?,
                anchor.y().checked_sub(height)?,
            ),
        };

        Some(RoomRect::new(x, y, width, height))
    }
}

/// Number of valid origins along one axis, or `None` when the side cannot fit.
fn origin_span(extent: u32, side: i32, bounds: BoundsPolicy) -> Option<i32> {
    let extent = i64::from(extent);
    let side = i64::from(side);
    let span = match bounds {
        BoundsPolicy::Inclusive => extent - side + 1,
        BoundsPolicy::ExcludeFarEdge => extent - side,
    };
    if span <= 0 {
        return None;
    }
    i32::try_from(span).ok()
}

fn offset_along(rng: &mut impl Rng, start: i32, length: i32, side: i32) -> Option<i32> {
    let along = rng.gen_range(0..length.max(1));
    start.checked_add(along)?.checked_sub(side / 2)
}
