use proptest::prelude::*;
use roomgen_core::RoomRect;

fn rect() -> impl Strategy<Value = RoomRect> {
    (-20i32..40, -20i32..40, 1i32..12, 1i32..12)
        .prop_map(|(x, y, width, height)| RoomRect::new(x, y, width, height))
}

fn extreme_rect() -> impl Strategy<Value = RoomRect> {
    let coordinate = prop_oneof![i32::MIN..i32::MIN + 16, i32::MAX - 16..=i32::MAX];
    (coordinate.clone(), coordinate, 1i32..24, 1i32..24)
        .prop_map(|(x, y, width, height)| RoomRect::new(x, y, width, height))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn adjacency_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(a.is_adjacent_to(&b), b.is_adjacent_to(&a));
    }

    #[test]
    fn overlap_and_adjacency_are_exclusive(a in rect(), b in rect()) {
        prop_assert!(!(a.overlaps(&b) && a.is_adjacent_to(&b)));
    }

    #[test]
    fn every_rectangle_overlaps_itself(a in rect()) {
        prop_assert!(a.overlaps(&a));
        prop_assert!(!a.is_adjacent_to(&a));
    }

    #[test]
    fn overlap_matches_shared_cells(a in rect(), b in rect()) {
        let shared = a.cells().any(|cell| b.contains(cell.x, cell.y));
        prop_assert_eq!(a.overlaps(&b), shared);
    }

    #[test]
    fn border_tiles_are_contained_and_unique(a in rect()) {
        let mut tiles = a.border_tiles();
        prop_assert!(tiles.iter().all(|tile| a.contains(tile.x, tile.y)));
        let count = tiles.len();
        tiles.sort();
        tiles.dedup();
        prop_assert_eq!(tiles.len(), count);

        let inner = u64::from((a.width() - 2).max(0).unsigned_abs())
            * u64::from((a.height() - 2).max(0).unsigned_abs());
        prop_assert_eq!(count as u64, a.area() - inner);
    }

    #[test]
    fn center_lies_inside(a in rect()) {
        let center = a.center();
        prop_assert!(a.contains(center.x, center.y));
    }

    #[test]
    fn extreme_origins_stay_total(a in extreme_rect(), b in extreme_rect()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        prop_assert_eq!(a.is_adjacent_to(&b), b.is_adjacent_to(&a));

        let tiles = a.border_tiles();
        prop_assert!(tiles.iter().all(|tile| a.contains(tile.x, tile.y)));

        let center = a.center();
        let covers_cells = a.right() > a.x() && a.bottom() > a.y();
        prop_assert_eq!(a.contains(center.x, center.y), covers_cells);
    }
}
