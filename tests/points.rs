use std::collections::HashSet;

use dotplot::{CoordinateMapper, Point, PointStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn mapper() -> CoordinateMapper {
    CoordinateMapper::new(400.0, 200.0).unwrap()
}

#[test]
fn create_on_empty_store_gets_id_one() {
    let m = mapper();
    let mut store = PointStore::new();
    let p = store.create(100.0, 50.0, &m);
    assert_eq!(p.id, 1);
    assert_eq!(p.x, m.to_data_x(100.0));
    assert_eq!(p.y, m.to_data_y(50.0));
    assert_eq!(store.len(), 1);
}

#[test]
fn new_id_is_max_plus_one_even_with_gaps() {
    let m = mapper();
    let mut store = PointStore::from_points([
        Point { id: 2, x: 0.1, y: 0.1 },
        Point { id: 7, x: 0.2, y: 0.2 },
    ]);
    assert_eq!(store.create(0.0, 0.0, &m).id, 8);
    store.remove(8);
    store.remove(7);
    assert_eq!(store.next_id(), 3);
}

#[test]
fn ids_stay_unique_over_random_create_remove_sequences() {
    let m = mapper();
    let mut rng = StdRng::seed_from_u64(42);
    let mut store = PointStore::with_initial(10, &mut rng);
    for _ in 0..500 {
        if rng.gen_bool(0.5) || store.is_empty() {
            let expected = store.ids().into_iter().max().map_or(1, |id| id + 1);
            let p = store.create(rng.gen_range(0.0..400.0), rng.gen_range(0.0..200.0), &m);
            assert_eq!(p.id, expected);
        } else {
            let ids = store.ids();
            let victim = ids[rng.gen_range(0..ids.len())];
            assert!(store.remove(victim).is_some());
        }
        let ids = store.ids();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }
}

#[test]
fn remove_leaves_others_untouched() {
    let mut store = PointStore::from_points([
        Point { id: 1, x: 0.1, y: 0.2 },
        Point { id: 2, x: 0.3, y: 0.4 },
        Point { id: 3, x: 0.5, y: 0.6 },
    ]);
    let removed = store.remove(2).unwrap();
    assert_eq!(removed.id, 2);
    assert_eq!(
        store.as_slice(),
        &[Point { id: 1, x: 0.1, y: 0.2 }, Point { id: 3, x: 0.5, y: 0.6 }]
    );
}

#[test]
fn update_position_overwrites_in_place() {
    let m = mapper();
    let mut store = PointStore::from_points([
        Point { id: 1, x: 0.1, y: 0.2 },
        Point { id: 2, x: 0.3, y: 0.4 },
    ]);
    assert!(store.update_position(2, 200.0, 100.0, &m));
    assert_eq!(store.get(2), Some(&Point { id: 2, x: 0.5, y: 0.5 }));
    assert_eq!(store.get(1), Some(&Point { id: 1, x: 0.1, y: 0.2 }));
    assert_eq!(store.ids(), vec![1, 2]);
    assert!(!store.update_position(9, 0.0, 0.0, &m));
}

#[test]
fn seeded_initial_points_are_reproducible() {
    let a = PointStore::with_initial(10, &mut StdRng::seed_from_u64(3));
    let b = PointStore::with_initial(10, &mut StdRng::seed_from_u64(3));
    assert_eq!(a.as_slice(), b.as_slice());
}
