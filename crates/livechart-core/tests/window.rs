// File: crates/livechart-core/tests/window.rs
// Purpose: Validate sliding-window invariants, eviction order and seeding.

use chrono::{DateTime, Local, TimeZone};
use livechart_core::profile::Profile;
use livechart_core::window::SampleWindow;
use livechart_core::ConfigError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap()
}

fn assert_aligned(window: &SampleWindow) {
    let n = window.len();
    assert_eq!(window.iter_a().count(), n);
    assert_eq!(window.iter_b().count(), n);
    assert!(n <= window.capacity());
}

#[test]
fn capacity_zero_rejected() {
    assert_eq!(
        SampleWindow::with_capacity(0).err(),
        Some(ConfigError::InvalidCapacity(0))
    );
}

#[test]
fn lengths_stay_aligned_and_bounded() {
    let mut window = SampleWindow::with_capacity(5).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    window.seed(Profile::Stocks, fixed_now(), &mut rng);
    assert_aligned(&window);

    for _ in 0..7 {
        window.append(Profile::Stocks, 1.0, fixed_now(), &mut rng);
        assert_aligned(&window);
        assert_eq!(window.len(), 5);
    }
}

#[test]
fn eviction_keeps_last_capacity_oldest_first() {
    let mut window = SampleWindow::with_capacity(4).unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    // Track every generated sample; the window must retain exactly the tail.
    let mut generated = Vec::new();
    for i in 0..9 {
        window.append(Profile::Stocks, 1.0, fixed_now(), &mut rng);
        generated.push((
            window.latest_a().unwrap(),
            window.latest_b().unwrap(),
        ));
        assert!(window.len() <= 4, "over capacity after append {i}");
    }

    let retained_a: Vec<f64> = window.iter_a().collect();
    let retained_b: Vec<f64> = window.iter_b().collect();
    let tail = &generated[generated.len() - 4..];
    assert_eq!(retained_a, tail.iter().map(|t| t.0).collect::<Vec<_>>());
    assert_eq!(retained_b, tail.iter().map(|t| t.1).collect::<Vec<_>>());
}

#[test]
fn eviction_drops_oldest_labels() {
    let mut window = SampleWindow::with_capacity(3).unwrap();
    for i in 0..5 {
        window.push_sample(format!("t{i}"), i as f64, i as f64);
    }
    let labels: Vec<&str> = (0..window.len()).map(|i| window.label(i).unwrap()).collect();
    assert_eq!(labels, vec!["t2", "t3", "t4"]);
}

#[test]
fn seed_fills_documented_history() {
    let mut window = SampleWindow::with_capacity(120).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    window.seed(Profile::Stocks, fixed_now(), &mut rng);

    assert_eq!(window.len(), 40);
    assert_aligned(&window);
    for v in window.iter_a().chain(window.iter_b()) {
        assert!(v.is_finite());
        // stored with at most 2 decimal places
        assert!((v * 100.0 - (v * 100.0).round()).abs() < 1e-6);
    }
    // labels are 1 s apart, ending "now"
    assert_eq!(window.label(39), Some("12:30:00"));
    assert_eq!(window.label(38), Some("12:29:59"));
    assert_eq!(window.label(0), Some("12:29:21"));
}

#[test]
fn seed_respects_small_capacity() {
    let mut window = SampleWindow::with_capacity(10).unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    window.seed(Profile::Weather, fixed_now(), &mut rng);
    assert_eq!(window.len(), 10);
    assert_aligned(&window);
}

#[test]
fn reseed_replaces_contents() {
    let mut window = SampleWindow::with_capacity(120).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    window.seed(Profile::Stocks, fixed_now(), &mut rng);
    window.push_sample("extra".to_string(), 1.0, 2.0);
    assert_eq!(window.len(), 41);

    window.seed(Profile::Weather, fixed_now(), &mut rng);
    assert_eq!(window.len(), 40);
    assert!(!(0..window.len()).any(|i| window.label(i) == Some("extra")));
}

#[test]
fn append_on_empty_starts_from_profile_base() {
    let mut window = SampleWindow::with_capacity(8).unwrap();
    let mut rng = StdRng::seed_from_u64(6);
    window.append(Profile::Stocks, 1.0, fixed_now(), &mut rng);

    // one centered step of at most vol/2 away from the base
    let a = window.latest_a().unwrap();
    let b = window.latest_b().unwrap();
    assert!((a - 200.0).abs() <= 1.1 + 1e-9, "a = {a}");
    assert!((b - 75.0).abs() <= 0.8 + 1e-9, "b = {b}");
}

#[test]
fn latest_on_empty_is_none() {
    let window = SampleWindow::with_capacity(4).unwrap();
    assert_eq!(window.latest_a(), None);
    assert_eq!(window.latest_b(), None);
    assert!(window.is_empty());
}

#[test]
fn snapshot_rows_join_by_index() {
    let mut window = SampleWindow::with_capacity(10).unwrap();
    window.push_sample("t0".to_string(), 1.1, 3.3);
    window.push_sample("t1".to_string(), 2.2, 4.4);

    let rows = window.snapshot_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "t0");
    assert_eq!(rows[0].a, Some(1.1));
    assert_eq!(rows[0].b, Some(3.3));
    assert_eq!(rows[1].label, "t1");
    assert_eq!(rows[1].a, Some(2.2));
    assert_eq!(rows[1].b, Some(4.4));
}
