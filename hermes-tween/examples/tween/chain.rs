use std::sync::Arc;

use hermes_tween::animations::{Easing, Registry, Tween};
use hermes_tween::Target;
use parking_lot::RwLock;

#[derive(Target, Debug)]
struct Square {
    x: f64,
    y: f64,
    rotation: f64,
}

fn main() {
    let registry = Registry::new();
    let square = Arc::new(RwLock::new(Square {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
    }));

    // Each step starts once the previous one completes: right, down, then spin.
    let spin = Tween::new(&registry, square.clone())
        .to_with_duration([("rotation", "+360")], 500.0)
        .on_start(|_| println!("Spin!"));
    let down = Tween::new(&registry, square.clone())
        .to_with_duration([("y", 100)], 500.0)
        .easing(Easing::BounceOut)
        .chain([spin]);
    let right = Tween::new(&registry, square.clone())
        .to_with_duration([("x", 100)], 500.0)
        .delay(200.0)
        .easing(Easing::QuadInOut)
        .chain([down]);
    right.start(0.0);

    let mut time = 0.0;
    while registry.update(time) {
        println!("{:>6}ms: {:?}", time, square.read());
        time += 50.0;
    }
}
