#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure analytics system that summarises a generated layout.

use roomgen_core::{LayoutStats, RoomRect};

pub use roomgen_system_connectivity::connected_components;

/// Computes the summary statistics for a layout.
///
/// Overlaps are counted once per unordered pair; rooms that merely share an
/// edge do not overlap but still count towards connectivity.
#[must_use]
pub fn analyze(rooms: &[RoomRect]) -> LayoutStats {
    LayoutStats {
        total_rooms: rooms.len(),
        overlapping_pair_count: pairs(rooms).filter(|&(a, b)| a.overlaps(b)).count(),
        all_connected: roomgen_system_connectivity::all_rooms_connected(rooms),
    }
}

/// Lists the index pairs `(i, j)` with `i < j` whose rectangles overlap.
#[must_use]
pub fn overlapping_pairs(rooms: &[RoomRect]) -> Vec<(usize, usize)> {
    let mut overlapping = Vec::new();
    for (first, room) in rooms.iter().enumerate() {
        for (offset, other) in rooms[first + 1..].iter().enumerate() {
            if room.overlaps(other) {
                overlapping.push((first, first + 1 + offset));
            }
        }
    }
    overlapping
}

fn pairs(rooms: &[RoomRect]) -> impl Iterator<Item = (&RoomRect, &RoomRect)> {
    rooms
        .iter()
        .enumerate()
        .flat_map(move |(index, room)| rooms[index + 1..].iter().map(move |other| (room, other)))
}
