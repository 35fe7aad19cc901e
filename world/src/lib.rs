#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative layout state for the room generator.
//!
//! The world owns the grid configuration, the ordered list of accepted rooms
//! and the wall grid derived from them. It is mutated exclusively through
//! [`apply`], which enforces the in-bounds invariant for every room and emits
//! an [`Event`] for each change. Read access goes through [`query`].

use roomgen_core::{
    BoundsPolicy, Command, Event, GridDimensions, PlacementError, RoomId, RoomRect, TileGrid,
};

const DEFAULT_GRID_COLUMNS: u32 = 40;
const DEFAULT_GRID_ROWS: u32 = 30;

/// Represents the authoritative layout state.
#[derive(Clone, Debug)]
pub struct World {
    dimensions: GridDimensions,
    bounds: BoundsPolicy,
    rooms: Vec<RoomRect>,
    tile_grid: TileGrid,
}

impl World {
    /// Creates an empty world on the default grid.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dimensions(GridDimensions::new(DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS))
    }

    /// Creates an empty world on a grid of the provided size.
    #[must_use]
    pub fn with_dimensions(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            bounds: BoundsPolicy::default(),
            rooms: Vec::new(),
            tile_grid: TileGrid::empty(dimensions),
        }
    }

    fn clear_layout(&mut self) {
        self.rooms.clear();
        self.tile_grid = TileGrid::empty(self.dimensions);
    }

    fn next_room_id(&self) -> RoomId {
        RoomId::new(u32::try_from(self.rooms.len()).unwrap_or(u32::MAX))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureGrid { dimensions, bounds } => {
            world.dimensions = dimensions;
            world.bounds = bounds;
            world.clear_layout();
            out_events.push(Event::GridConfigured { dimensions });
        }
        Command::ResetLayout => {
            world.clear_layout();
            out_events.push(Event::LayoutReset);
        }
        Command::PlaceRoom { rect } => {
            if !world.dimensions.fits(&rect, world.bounds) {
                log::trace!("rejected out-of-bounds room {rect:?}");
                out_events.push(Event::RoomRejected {
                    rect,
                    reason: PlacementError::OutOfBounds,
                });
                return;
            }

            let room = world.next_room_id();
            world.rooms.push(rect);
            out_events.push(Event::RoomPlaced { room, rect });
        }
        Command::RebuildWalls => {
            world.tile_grid = roomgen_system_border::outline(&world.rooms, world.dimensions);
            let wall_tiles = world.tile_grid.wall_count();
            log::debug!(
                "rebuilt walls for {} rooms: {wall_tiles} wall tiles",
                world.rooms.len()
            );
            out_events.push(Event::WallsRebuilt { wall_tiles });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use roomgen_core::{BoundsPolicy, GridDimensions, RoomId, RoomRect, TileGrid};

    /// Dimensions of the configured grid.
    #[must_use]
    pub fn dimensions(world: &World) -> GridDimensions {
        world.dimensions
    }

    /// Far-edge policy used to validate room placement.
    #[must_use]
    pub fn bounds_policy(world: &World) -> BoundsPolicy {
        world.bounds
    }

    /// Rooms accepted so far, in generation order.
    #[must_use]
    pub fn rooms(world: &World) -> &[RoomRect] {
        &world.rooms
    }

    /// Looks up a single room by identifier.
    #[must_use]
    pub fn room(world: &World, room: RoomId) -> Option<RoomRect> {
        let index = usize::try_from(room.get()).ok()?;
        world.rooms.get(index).copied()
    }

    /// Wall grid produced by the most recent rebuild.
    #[must_use]
    pub fn tile_grid(world: &World) -> &TileGrid {
        &world.tile_grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomgen_core::{CellCoord, Tile};

    fn configured(columns: u32, rows: u32, bounds: BoundsPolicy) -> World {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::ConfigureGrid {
                dimensions: GridDimensions::new(columns, rows),
                bounds,
            },
            &mut events,
        );
        world
    }

    #[test]
    fn configure_grid_resets_rooms_and_walls() {
        let mut world = configured(8, 8, BoundsPolicy::Inclusive);
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::PlaceRoom {
                rect: RoomRect::new(1, 1, 3, 3),
            },
            &mut events,
        );
        apply(&mut world, Command::RebuildWalls, &mut events);
        assert_eq!(query::rooms(&world).len(), 1);

        events.clear();
        apply(
            &mut world,
            Command::ConfigureGrid {
                dimensions: GridDimensions::new(12, 6),
                bounds: BoundsPolicy::ExcludeFarEdge,
            },
            &mut events,
        );

        assert!(query::rooms(&world).is_empty());
        assert_eq!(query::tile_grid(&world).wall_count(), 0);
        assert_eq!(query::dimensions(&world), GridDimensions::new(12, 6));
        assert_eq!(query::tile_grid(&world).dimensions(), GridDimensions::new(12, 6));
        assert_eq!(query::bounds_policy(&world), BoundsPolicy::ExcludeFarEdge);
        assert_eq!(
            events,
            vec![Event::GridConfigured {
                dimensions: GridDimensions::new(12, 6)
            }]
        );
    }

    #[test]
    fn place_room_assigns_sequential_identifiers() {
        let mut world = configured(10, 10, BoundsPolicy::Inclusive);
        let mut events = Vec::new();
        let first = RoomRect::new(0, 0, 3, 3);
        let second = RoomRect::new(3, 0, 3, 3);

        apply(&mut world, Command::PlaceRoom { rect: first }, &mut events);
        apply(&mut world, Command::PlaceRoom { rect: second }, &mut events);

        assert_eq!(
            events,
            vec![
                Event::RoomPlaced {
                    room: RoomId::new(0),
                    rect: first
                },
                Event::RoomPlaced {
                    room: RoomId::new(1),
                    rect: second
                },
            ]
        );
        assert_eq!(query::room(&world, RoomId::new(1)), Some(second));
        assert_eq!(query::room(&world, RoomId::new(2)), None);
    }

    #[test]
    fn reset_clears_walls() {
        let mut world = configured(6, 6, BoundsPolicy::Inclusive);
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::PlaceRoom {
                rect: RoomRect::new(0, 0, 6, 6),
            },
            &mut events,
        );
        apply(&mut world, Command::RebuildWalls, &mut events);
        assert_eq!(
            query::tile_grid(&world).get(CellCoord::new(0, 0)),
            Some(Tile::Wall)
        );

        apply(&mut world, Command::ResetLayout, &mut events);
        assert_eq!(events.last(), Some(&Event::LayoutReset));
        assert!(query::rooms(&world).is_empty());
        assert_eq!(query::tile_grid(&world).wall_count(), 0);
    }
}
