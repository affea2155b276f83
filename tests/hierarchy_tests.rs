use std::collections::HashSet;

use geocell::{
  center_child, children, compact, geo_to_cell, get_pentagon_indexes, is_pentagon, is_valid_cell, max_children_size,
  num_hexagons, parent, res0_cells, uncompact, CellIndex, GeoCoord,
};

#[test]
fn parent_and_center_child_scenario() {
  let cell = CellIndex(0x8928308280fffff);
  let p7 = parent(cell, 7).unwrap();
  assert_eq!(p7, CellIndex(0x872830828ffffff));
  assert_eq!(center_child(p7, 9).unwrap(), cell);
}

#[test]
fn children_partition_under_parent() {
  let geo = GeoCoord::from_degrees(37.775, -122.418);
  for res in [0, 4, 8] {
    let cell = geo_to_cell(&geo, res).unwrap();
    let kids = children(cell, res + 2).unwrap();
    assert_eq!(kids.len() as i64, max_children_size(cell, res + 2).unwrap());

    let unique: HashSet<_> = kids.iter().copied().collect();
    assert_eq!(unique.len(), kids.len(), "children are distinct");
    for kid in kids {
      assert_eq!(parent(kid, res).unwrap(), cell, "every child maps back");
    }
  }
}

#[test]
fn center_child_idempotence() {
  let cell = geo_to_cell(&GeoCoord::from_degrees(-12.0, 77.0), 4).unwrap();
  let once = center_child(cell, 7).unwrap();
  let twice = center_child(once, 11).unwrap();
  assert_eq!(center_child(cell, 11).unwrap(), twice);
}

#[test]
fn compact_scenario_full_sibling_group() {
  let p = CellIndex(0x872830828ffffff);
  let kids = children(p, 8).unwrap();
  assert_eq!(compact(&kids).unwrap(), vec![p]);
}

#[test]
fn compact_preserves_coverage() {
  let base = geo_to_cell(&GeoCoord::from_degrees(37.775, -122.418), 5).unwrap();
  let mut cells = children(base, 7).unwrap();
  // punch a hole so one sibling group cannot collapse
  let removed = cells.swap_remove(10);

  let compacted = compact(&cells).unwrap();
  assert!(compacted.len() <= cells.len());

  // expanding back to res 7 restores exactly the input set
  let mut expanded = uncompact(&compacted, 7).unwrap();
  expanded.sort_unstable();
  cells.sort_unstable();
  assert_eq!(expanded, cells);
  assert!(!expanded.contains(&removed));

  // compaction is stable under a second pass
  let mut again = compact(&compacted).unwrap();
  let mut first = compacted.clone();
  again.sort_unstable();
  first.sort_unstable();
  assert_eq!(again, first);
}

#[test]
fn cell_counts_per_resolution() {
  // walk the full grid at coarse resolutions
  for res in 0..=2 {
    let mut count: i64 = 0;
    let mut pentagons = 0;
    for base in res0_cells() {
      for cell in children(base, res).unwrap() {
        assert!(is_valid_cell(cell));
        count += 1;
        if is_pentagon(cell) {
          pentagons += 1;
        }
      }
    }
    assert_eq!(count, num_hexagons(res).unwrap(), "cell count at res {res}");
    assert_eq!(pentagons, 12, "pentagon count at res {res}");
  }
}

#[test]
fn pentagon_listing_matches_grid() {
  for res in [0, 2, 5] {
    let listed: HashSet<_> = get_pentagon_indexes(res).unwrap().into_iter().collect();
    assert_eq!(listed.len(), 12);
    for p in &listed {
      assert!(is_pentagon(*p));
      assert_eq!(p.resolution(), res);
    }
  }
}
