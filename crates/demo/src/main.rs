// File: crates/demo/src/main.rs
// Summary: Demo seeds the simulation, pumps live ticks with a mid-run speed change, renders PNGs and writes a CSV snapshot.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;

use livechart_core::export;
use livechart_core::profile;
use livechart_core::types::{DEFAULT_CAPACITY, HEIGHT, WIDTH};
use livechart_core::{Chart, Playback, SampleWindow, Surface, ViewState};
use livechart_render_skia::RasterSurface;

fn main() -> Result<()> {
    env_logger::init();

    // Accept profile name from CLI or fall back to stocks
    let profile = std::env::args()
        .nth(1)
        .map(|raw| profile::find(&raw))
        .unwrap_or_default();
    println!("Using dataset profile: {}", profile.name());

    let mut window = SampleWindow::with_capacity(DEFAULT_CAPACITY)?;
    let mut rng = rand::rng();
    window.seed(profile, Local::now(), &mut rng);
    println!("Seeded {} samples", window.len());

    let mut playback = Playback::new(profile);
    playback.set_speed(4.0)?;

    let chart = Chart::new();
    let mut surface = RasterSurface::new(WIDTH, HEIGHT)?;
    let mut view = ViewState::new(surface.width() as i32, surface.height() as i32);

    // Pump the playback loop against real time for a couple of seconds,
    // switching cadence halfway to exercise reconciliation.
    let started = Instant::now();
    playback.start(started);
    let mut speed_bumped = false;
    let mut appended = 0usize;
    while started.elapsed() < Duration::from_secs(2) {
        if !speed_bumped && started.elapsed() >= Duration::from_secs(1) {
            playback.set_speed(8.0)?;
            speed_bumped = true;
        }
        appended += playback.pump(Instant::now(), &mut window, &mut rng, |_| Ok(()));
        std::thread::sleep(Duration::from_millis(25));
    }
    playback.stop();
    println!(
        "Appended {} live samples; window holds {} of {}",
        appended,
        window.len(),
        window.capacity()
    );

    let out_dir = PathBuf::from("target/out");

    // Frame with both series
    chart.draw(&mut surface, &window, &view);
    let out_both = out_dir.join("live_both.png");
    surface.write_png(&out_both)?;
    println!("Wrote {}", out_both.display());

    // Frame with series B hidden
    view.show_b = false;
    let mut surface_a = RasterSurface::new(view.width, view.height)?;
    chart.draw(&mut surface_a, &window, &view);
    let out_a = out_dir.join("live_a_only.png");
    surface_a.write_png(&out_a)?;
    println!("Wrote {}", out_a.display());
    view.show_b = true;

    // Hover probe at the horizontal center of the surface
    let cx = view.width as f32 / 2.0;
    let cy = view.height as f32 / 2.0;
    if let Some(hit) = chart.hit_test(cx, cy, &window, &view) {
        println!(
            "Hover at center: index {} ({}) A={:?} B={:?}",
            hit.index, hit.label, hit.a, hit.b
        );
    }

    // CSV snapshot
    std::fs::create_dir_all(&out_dir)?;
    let csv_path = out_dir.join("snapshot.csv");
    let file = std::fs::File::create(&csv_path)?;
    export::write_csv(&window, file)?;
    println!("Wrote {}", csv_path.display());

    println!(
        "Latest: A={:?} B={:?} over {} points",
        window.latest_a(),
        window.latest_b(),
        window.len()
    );
    Ok(())
}
