#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Generation pipeline that drives the world through a complete layout run.
//!
//! A run configures the grid, bootstraps the first room with free proposals,
//! resolves every further room through the connectivity resolver and finally
//! rebuilds the wall outline. Every mutation flows through
//! [`roomgen_world::apply`], so the world's invariants hold for each room the
//! pipeline accepts.

use rand::Rng;
use roomgen_core::{Command, Event, GenerationParams, LayoutStats, RoomRect, TileGrid};
use roomgen_system_connectivity::Resolver;
use roomgen_system_placement::Placement;
use roomgen_world::{self as world, query, World};

/// Summary of how many requested rooms made it into the layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Number of rooms the run asked for.
    pub requested: u32,
    /// Number of rooms accepted into the layout.
    pub placed: u32,
    /// Number of rooms abandoned after exhausting their budget.
    pub skipped: u32,
}

impl GenerationOutcome {
    const fn new(requested: u32) -> Self {
        Self {
            requested,
            placed: 0,
            skipped: 0,
        }
    }
}

/// Owns the layout world and regenerates it on demand.
#[derive(Debug, Default)]
pub struct RoomGenerator {
    world: World,
    last_outcome: Option<GenerationOutcome>,
}

impl RoomGenerator {
    /// Creates a generator holding an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the previous layout and generates a new one.
    ///
    /// The random source is consumed in a fixed order, so the same seed and
    /// parameters always reproduce the same rooms and tile grid. Rooms whose
    /// placement budget runs out are skipped rather than retried; the run
    /// never fails. Returns the freshly rebuilt tile grid.
    pub fn generate(&mut self, params: &GenerationParams, rng: &mut impl Rng) -> &TileGrid {
        let _ = self.execute(Command::ConfigureGrid {
            dimensions: params.dimensions(),
            bounds: params.bounds,
        });

        let placement = Placement::new(params.dimensions(), params.sizes(), params.bounds);
        let resolver = Resolver::with_retry_budget(placement, params.retry_budget);
        let mut outcome = GenerationOutcome::new(params.room_count);

        if params.room_count > 0 {
            match bootstrap_room(&placement, params.bootstrap_budget, rng) {
                Some(rect) => self.place(rect, &mut outcome),
                None => {
                    log::debug!(
                        "no first room fit after {} attempts",
                        params.bootstrap_budget
                    );
                    outcome.skipped += 1;
                }
            }
        }

        for index in 1..params.room_count {
            match resolver.place_connected_room(rng, query::rooms(&self.world)) {
                Some(rect) => self.place(rect, &mut outcome),
                None => {
                    log::debug!("skipped room {index}: no connected placement found");
                    outcome.skipped += 1;
                }
            }
        }

        let _ = self.execute(Command::RebuildWalls);

        let stats = self.stats();
        log::info!(
            "generated {}/{} rooms, {} overlapping pairs, connected: {}",
            outcome.placed,
            outcome.requested,
            stats.overlapping_pair_count,
            stats.all_connected
        );
        self.last_outcome = Some(outcome);

        query::tile_grid(&self.world)
    }

    /// Rooms of the most recent layout, in generation order.
    #[must_use]
    pub fn rooms(&self) -> &[RoomRect] {
        query::rooms(&self.world)
    }

    /// Tile grid of the most recent layout.
    #[must_use]
    pub fn tile_grid(&self) -> &TileGrid {
        query::tile_grid(&self.world)
    }

    /// Diagnostics for the most recent layout.
    #[must_use]
    pub fn stats(&self) -> LayoutStats {
        roomgen_system_analytics::analyze(self.rooms())
    }

    /// Placement summary of the most recent run, if any run has happened.
    #[must_use]
    pub fn last_outcome(&self) -> Option<GenerationOutcome> {
        self.last_outcome
    }

    fn place(&mut self, rect: RoomRect, outcome: &mut GenerationOutcome) {
        for event in self.execute(Command::PlaceRoom { rect }) {
            match event {
                Event::RoomPlaced { room, rect } => {
                    log::debug!("placed room {} at {rect:?}", room.get());
                    outcome.placed += 1;
                }
                Event::RoomRejected { rect, reason } => {
                    log::debug!("world rejected room {rect:?}: {reason:?}");
                    outcome.skipped += 1;
                }
                _ => {}
            }
        }
    }

    fn execute(&mut self, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        world::apply(&mut self.world, command, &mut events);
        events
    }
}

fn bootstrap_room(placement: &Placement, budget: u32, rng: &mut impl Rng) -> Option<RoomRect> {
    (0..budget).find_map(|_| placement.propose_free_room(rng))
}
