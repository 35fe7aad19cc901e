#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Connectivity resolver that keeps every generated room reachable.
//!
//! Two rooms are linked when they overlap or share an edge. The resolver
//! accepts candidate rooms only if they link to the existing layout, which
//! keeps the layout connected by construction, and offers traversal helpers
//! that verify the property after the fact.

use rand::Rng;
use roomgen_core::{Direction, RoomRect};
use roomgen_system_placement::Placement;

/// Reports whether the candidate overlaps or touches at least one existing room.
#[must_use]
pub fn is_connected(candidate: &RoomRect, rooms: &[RoomRect]) -> bool {
    rooms.iter().any(|room| candidate.touches(room))
}

/// Reports whether every room is reachable from room 0 through the touch relation.
///
/// Empty layouts and single rooms are trivially connected.
#[must_use]
pub fn all_rooms_connected(rooms: &[RoomRect]) -> bool {
    if rooms.len() <= 1 {
        return true;
    }

    let mut visited = vec![false; rooms.len()];
    traverse(rooms, 0, &mut visited).len() == rooms.len()
}

/// Groups room indices into connected components.
///
/// Components are ordered by their smallest room index and list their members
/// in ascending order.
#[must_use]
pub fn connected_components(rooms: &[RoomRect]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; rooms.len()];
    let mut components = Vec::new();

    for root in 0..rooms.len() {
        if visited[root] {
            continue;
        }

        let mut members = traverse(rooms, root, &mut visited);
        members.sort_unstable();
        components.push(members);
    }

    components
}

/// Depth-first traversal from `root` over unvisited rooms. Returns the rooms it reached.
fn traverse(rooms: &[RoomRect], root: usize, visited: &mut [bool]) -> Vec<usize> {
    let mut stack = vec![root];
    let mut reached = vec![root];
    visited[root] = true;

    while let Some(current) = stack.pop() {
        let current_room = rooms[current];
        for (index, other) in rooms.iter().enumerate() {
            if visited[index] || !current_room.touches(other) {
                continue;
            }
            visited[index] = true;
            reached.push(index);
            stack.push(index);
        }
    }

    reached
}

/// Drives the placement system until it finds a room linked to the layout.
#[derive(Clone, Copy, Debug)]
pub struct Resolver {
    placement: Placement,
    retry_budget: u32,
}

impl Resolver {
    /// Creates a resolver that spends `retry_budget` free proposals before falling back.
    #[must_use]
    pub const fn with_retry_budget(placement: Placement, retry_budget: u32) -> Self {
        Self {
            placement,
            retry_budget,
        }
    }

    /// Placement system used for proposals.
    #[must_use]
    pub const fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Finds an in-bounds room that overlaps or touches one of `rooms`.
    ///
    /// Free proposals are tried first, up to the retry budget. If none of them
    /// connects, every existing room is used as an anchor in turn and a room
    /// is proposed against each of its four edges. The first in-bounds,
    /// connected candidate wins. Returns `None` when both strategies are
    /// exhausted, including when `rooms` is empty.
    pub fn place_connected_room(
        &self,
        rng: &mut impl Rng,
        rooms: &[RoomRect],
    ) -> Option<RoomRect> {
        for _ in 0..self.retry_budget {
            let Some(candidate) = self.placement.propose_free_room(rng) else {
                continue;
            };
            if self.accepts(&candidate, rooms) {
                return Some(candidate);
            }
        }

        log::debug!(
            "no free placement connected after {} attempts; anchoring to {} rooms",
            self.retry_budget,
            rooms.len()
        );

        for anchor in rooms {
            for direction in Direction::ALL {
                let Some(candidate) = self.placement.propose_adjacent_room(rng, anchor, direction)
                else {
                    continue;
                };
                if self.accepts(&candidate, rooms) {
                    return Some(candidate);
                }
                log::trace!("rejected {direction:?} candidate {candidate:?}");
            }
        }

        None
    }

    fn accepts(&self, candidate: &RoomRect, rooms: &[RoomRect]) -> bool {
        self.placement.is_in_bounds(candidate) && is_connected(candidate, rooms)
    }
}
