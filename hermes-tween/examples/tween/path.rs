use std::sync::Arc;

use hermes_tween::animations::{
    Direction, Interpolation, PlaybackMode, Properties, Registry, Tween,
};
use parking_lot::RwLock;

fn main() {
    let registry = Registry::new();
    let point = Arc::new(RwLock::new(Properties::from([("x", 0.0), ("y", 0.0)])));

    // Go through a series of waypoints on a smooth curve.
    let tween = Tween::new(&registry, point.clone())
        .to_with_duration(
            [("x", vec![50.0, 100.0, 150.0]), ("y", vec![80.0, -20.0, 0.0])],
            1000.0,
        )
        .interpolation(Interpolation::CatmullRom)
        .mode(PlaybackMode::Scrub);
    tween.start(0.0);

    // In scrub mode, the time may go back and forth: play half way then rewind to the beginning.
    for time in [0.0, 100.0, 200.0, 300.0, 400.0, 500.0] {
        registry.update(time);
        println!("{:>6}ms: {}", time, point.read());
    }
    for time in [400.0, 300.0, 200.0, 100.0, 0.0] {
        registry.update_in(time, Direction::Backward);
        println!("{:>6}ms: {}", time, point.read());
    }
}
