#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the room layout generator.
//!
//! This crate defines the geometry, the tile grid model and the message
//! surface that connects the pure placement systems to the authoritative
//! world. Systems propose [`RoomRect`] candidates, the generation pipeline
//! submits accepted rooms as [`Command`] values, and the world answers with
//! [`Event`] values describing what actually changed.

mod geometry;
mod grid;
mod params;

use serde::{Deserialize, Serialize};

pub use geometry::{RoomRect, TilePoint};
pub use grid::{BoundsPolicy, CellCoord, GridDimensions, Tile, TileGrid};
pub use params::{GenerationParams, ParamError, SizeRange, DEFAULT_RETRY_BUDGET};

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Resizes the grid, sets the bounds policy and clears every room.
    ConfigureGrid {
        /// Dimensions of the new grid.
        dimensions: GridDimensions,
        /// Far-edge policy applied to subsequently placed rooms.
        bounds: BoundsPolicy,
    },
    /// Clears every room and wall while keeping the grid configuration.
    ResetLayout,
    /// Requests that a room be appended to the layout.
    PlaceRoom {
        /// Footprint of the room.
        rect: RoomRect,
    },
    /// Recomputes the wall outline from the rooms placed so far.
    RebuildWalls,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the grid was reconfigured.
    GridConfigured {
        /// Dimensions now in effect.
        dimensions: GridDimensions,
    },
    /// Confirms that rooms and walls were cleared.
    LayoutReset,
    /// Confirms that a room joined the layout.
    RoomPlaced {
        /// Identifier assigned to the room, equal to its generation index.
        room: RoomId,
        /// Footprint of the room.
        rect: RoomRect,
    },
    /// Reports that a room placement request was rejected.
    RoomRejected {
        /// Footprint that was requested.
        rect: RoomRect,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Confirms that the wall outline was recomputed.
    WallsRebuilt {
        /// Number of tiles that now hold a wall.
        wall_tiles: usize,
    },
}

/// Identifier of a placed room. Rooms are numbered in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(u32);

impl RoomId {
    /// Creates a new room identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Reasons a room placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The requested footprint extends beyond the configured grid bounds.
    OutOfBounds,
}

/// Side of an existing room a new room may be anchored against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Flush against the anchor's right edge.
    East,
    /// Flush against the anchor's left edge.
    West,
    /// Flush against the anchor's bottom edge.
    South,
    /// Flush against the anchor's top edge.
    North,
}

impl Direction {
    /// Every direction in the order anchored placement tries them.
    pub const ALL: [Direction; 4] = [Self::East, Self::West, Self::South, Self::North];
}

/// Read-only diagnostic snapshot of a generated layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of rooms that were placed.
    pub total_rooms: usize,
    /// Number of unordered room pairs whose rectangles overlap.
    pub overlapping_pair_count: usize,
    /// Whether every room is reachable from every other room.
    pub all_connected: bool,
}
