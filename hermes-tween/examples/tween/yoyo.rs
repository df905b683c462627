use std::sync::Arc;

use hermes_tween::animations::{Easing, Registry, Tween};
use hermes_tween::Target;
use parking_lot::RwLock;

#[derive(Target, Debug)]
struct Led {
    brightness: u8,
}

fn main() {
    let registry = Registry::new();
    let led = Arc::new(RwLock::new(Led { brightness: 0 }));

    // Pulse the LED: fade in and out 3 times.
    let pulse = Tween::new(&registry, led.clone())
        .to_with_duration([("brightness", 255)], 400.0)
        .easing(Easing::SineInOut)
        .repeat(5)
        .yoyo(true)
        .on_update(|_, value| println!("  progress: {:.2}", value));
    pulse.start(0.0);

    let mut time = 0.0;
    while registry.update(time) {
        println!("{:>6}ms: {:?} (reversed={})", time, led.read(), pulse.is_reversed());
        time += 100.0;
    }
}
