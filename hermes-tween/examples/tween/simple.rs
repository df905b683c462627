use std::sync::Arc;

use hermes_tween::animations::{Easing, Registry, Tween};
use hermes_tween::Target;
use parking_lot::RwLock;

#[derive(Target, Debug)]
struct Position {
    x: f64,
    y: f64,
}

fn main() {
    let registry = Registry::new();
    let position = Arc::new(RwLock::new(Position { x: 0.0, y: 0.0 }));

    // Move to (400, 300) in 2 seconds, slowing down at the end.
    Tween::new(&registry, position.clone())
        .to_with_duration([("x", 400), ("y", 300)], 2000.0)
        .easing(Easing::CubicOut)
        .on_complete(|_| println!("Done"))
        .start(0.0);

    // Simulated clock ticking at 10 frames per second.
    let mut time = 0.0;
    while registry.update(time) {
        println!("{:>6}ms: {:?}", time, position.read());
        time += 100.0;
    }
}
