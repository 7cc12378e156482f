use chart_core::data_types::{Bounds, DataSet, Entry, Rounding};
use chart_core::ChartError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn entries(points: &[(f64, f64)]) -> Vec<Entry> {
    points.iter().copied().map(Entry::from).collect()
}

#[test]
fn test_calc_min_max() {
    let mut set = DataSet::new(entries(&[(10.0, 10.0), (15.0, 2.0), (21.0, 5.0)]), "");

    assert_eq!(set.x_min(), 10.0);
    assert_eq!(set.x_max(), 21.0);
    assert_eq!(set.y_min(), 2.0);
    assert_eq!(set.y_max(), 10.0);
    assert_eq!(set.len(), 3);

    set.add_entry(Entry::new(25.0, 1.0));
    assert_eq!(set.x_min(), 10.0);
    assert_eq!(set.x_max(), 25.0);
    assert_eq!(set.y_min(), 1.0);
    assert_eq!(set.y_max(), 10.0);
    assert_eq!(set.len(), 4);

    set.remove_entry(3).unwrap();
    assert_eq!(set.x_min(), 10.0);
    assert_eq!(set.x_max(), 21.0);
    assert_eq!(set.y_min(), 2.0);
    assert_eq!(set.y_max(), 10.0);
}

#[test]
fn test_empty_set_uses_sentinels() {
    let mut set = DataSet::new(vec![], "empty");
    assert_eq!(set.bounds(), Bounds::EMPTY);
    assert_eq!(set.x_min(), f64::INFINITY);
    assert_eq!(set.y_max(), f64::NEG_INFINITY);
    assert!(set.bounds().is_empty());

    set.add_entry(Entry::new(1.0, 2.0));
    set.clear();
    assert_eq!(set.bounds(), Bounds::EMPTY);
    assert_eq!(
        set.remove_entry(0).unwrap_err(),
        ChartError::IndexOutOfRange { index: 0, len: 0 }
    );
}

#[test]
fn test_add_remove_entries() {
    let mut set = DataSet::new(vec![], "");
    set.add_entry(Entry::new(10.0, 10.0));
    set.add_entry(Entry::new(15.0, 2.0));
    set.add_entry(Entry::new(21.0, 5.0));

    assert_eq!(set.remove_first().map(|e| e.x), Some(10.0));
    assert_eq!(set.x_min(), 15.0);
    assert_eq!(set.y_max(), 5.0);

    assert_eq!(set.remove_last().map(|e| e.x), Some(21.0));
    assert_eq!(set.x_max(), 15.0);
    assert_eq!(set.len(), 1);

    assert!(set.remove_last().is_some());
    assert!(set.remove_first().is_none());
    assert!(set.is_empty());
}

#[test]
fn test_add_entry_ordered() {
    let mut set = DataSet::new(entries(&[(0.0, 1.0), (2.0, 1.0), (4.0, 1.0)]), "");
    set.add_entry_ordered(Entry::new(3.0, -5.0));
    set.add_entry_ordered(Entry::new(-1.0, 7.0));
    set.add_entry_ordered(Entry::new(9.0, 0.0));

    let xs: Vec<f64> = set.entries().iter().map(|e| e.x).collect();
    assert_eq!(xs, vec![-1.0, 0.0, 2.0, 3.0, 4.0, 9.0]);
    assert_eq!(set.y_min(), -5.0);
    assert_eq!(set.y_max(), 7.0);
    assert_eq!(set.x_min(), -1.0);
}

#[test]
fn test_remove_entry_by_x() {
    let mut set = DataSet::new(entries(&[(0.0, 1.0), (2.0, 8.0), (4.0, 3.0)]), "");
    let removed = set.remove_entry_by_x(2.1).unwrap();
    assert_eq!(removed.x, 2.0);
    assert_eq!(set.y_max(), 3.0);
}

#[test]
fn test_entry_index_rounding() {
    let set = DataSet::new(
        entries(&[(1.0, 10.0), (2.0, 50.0), (5.5, 100.0), (5.5, 200.0), (7.0, 30.0)]),
        "",
    );

    assert_eq!(set.entry_index(2.0, None, Rounding::Closest), Some(1));
    assert_eq!(set.entry_index(2.4, None, Rounding::Closest), Some(1));
    assert_eq!(set.entry_index(2.4, None, Rounding::Up), Some(2));
    assert_eq!(set.entry_index(2.4, None, Rounding::Down), Some(1));
    assert_eq!(set.entry_index(1.8, None, Rounding::Down), Some(0));
    assert_eq!(set.entry_index(0.0, None, Rounding::Down), Some(0));
    assert_eq!(set.entry_index(100.0, None, Rounding::Up), Some(4));

    // same x, pick the closest y
    assert_eq!(set.entry_index(5.5, Some(190.0), Rounding::Closest), Some(3));
    assert_eq!(set.entry_index(5.5, Some(90.0), Rounding::Closest), Some(2));

    let entry = set.entry_for_x(6.9, None, Rounding::Closest).unwrap();
    assert_eq!(entry.y, 30.0);
    assert_eq!(set.entries_for_x(5.5).len(), 2);
    assert!(set.entries_for_x(3.0).is_empty());

    let empty = DataSet::new(vec![], "");
    assert_eq!(empty.entry_index(1.0, None, Rounding::Closest), None);
}

#[test]
fn test_calc_min_max_y_in_window() {
    let set = DataSet::new(
        entries(&[(0.0, 1.0), (1.0, 9.0), (2.0, 3.0), (3.0, 4.0), (4.0, -2.0), (5.0, 0.0)]),
        "",
    );
    // window [1.5, 3.5] reaches one entry past each side
    assert_eq!(set.calc_min_max_y(1.5, 3.5), (-2.0, 9.0));
    assert_eq!(set.calc_min_max_y(2.0, 3.0), (3.0, 4.0));
    assert_eq!(set.calc_min_max_y(-10.0, 100.0), (-2.0, 9.0));
}

#[test]
fn test_bounds_match_linear_scan() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut set = DataSet::new(vec![], "random");

    for step in 0..2_000 {
        if set.is_empty() || rng.random_bool(0.7) {
            let e = Entry::new(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));
            set.add_entry_ordered(e);
        } else {
            let index = rng.random_range(0..set.len());
            set.remove_entry(index).unwrap();
        }

        let mut expected = Bounds::EMPTY;
        for e in set.entries() {
            expected.include(e);
        }
        assert_eq!(set.bounds(), expected, "diverged at step {}", step);
    }
}

#[test]
fn test_entry_payload_and_serde() {
    let e = Entry::new(1.0, 2.0)
        .with_data(serde_json::json!({"id": 7}))
        .with_icon("star");
    let set = DataSet::new(vec![e.clone()], "payload");

    let json = serde_json::to_string(&set).unwrap();
    let back: DataSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back.entries(), &[e]);
    assert_eq!(back.bounds(), set.bounds());
    assert_eq!(back.label, "payload");
}
