use mazepath_core::Cell;
use mazepath_core::pathfinding::utils::{ParentMap, reconstruct_path};

#[test]
fn test_reconstruct_path_reads_start_to_goal() {
    let mut parent_map = ParentMap::default();
    parent_map.insert(Cell::new(0, 1), Cell::new(0, 0));
    parent_map.insert(Cell::new(1, 1), Cell::new(0, 1));
    parent_map.insert(Cell::new(1, 0), Cell::new(0, 0));
    parent_map.insert(Cell::new(2, 1), Cell::new(1, 1));

    let path = reconstruct_path(&parent_map, Cell::new(0, 0), Cell::new(2, 1));

    assert_eq!(
        path,
        vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)]
    );
}

#[test]
fn test_reconstruct_path_when_goal_is_start() {
    let parent_map = ParentMap::default();

    let path = reconstruct_path(&parent_map, Cell::new(3, 3), Cell::new(3, 3));

    assert_eq!(path, vec![Cell::new(3, 3)]);
}

#[test]
#[should_panic(expected = "parent chain broken")]
fn test_reconstruct_path_panics_on_missing_parent() {
    let mut parent_map = ParentMap::default();
    parent_map.insert(Cell::new(2, 2), Cell::new(1, 2));

    reconstruct_path(&parent_map, Cell::new(0, 0), Cell::new(2, 2));
}

#[test]
#[should_panic(expected = "loops")]
fn test_reconstruct_path_panics_on_cycle() {
    let mut parent_map = ParentMap::default();
    parent_map.insert(Cell::new(1, 1), Cell::new(1, 2));
    parent_map.insert(Cell::new(1, 2), Cell::new(1, 1));

    reconstruct_path(&parent_map, Cell::new(0, 0), Cell::new(1, 1));
}
