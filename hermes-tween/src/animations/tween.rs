use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use log::trace;
use parking_lot::RwLock;

use crate::animations::{lerp, Easing, Interpolation, Registry, Target, TweenConfig, WeakRegistry};
use crate::utils::{EndValue, Value};

/// A target shared between the caller and the tweens animating it.
pub type SharedTarget = Arc<RwLock<dyn Target>>;
/// Callback receiving the tweened target.
pub type Callback = Arc<dyn Fn(&SharedTarget) + Send + Sync>;
/// Callback receiving the tweened target and the eased progress.
pub type UpdateCallback = Arc<dyn Fn(&SharedTarget, f64) + Send + Sync>;

/// How many times a tween restarts once complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Count(0)
    }
}

impl Repeat {
    /// Indicates whether no repetition is left.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Repeat::Count(0))
    }
}

impl From<u32> for Repeat {
    fn from(count: u32) -> Self {
        Repeat::Count(count)
    }
}

/// `None` stands for an infinite repeat.
impl From<Option<u32>> for Repeat {
    fn from(count: Option<u32>) -> Self {
        match count {
            None => Repeat::Infinite,
            Some(count) => Repeat::Count(count),
        }
    }
}

impl Display for Repeat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Repeat::Count(count) => write!(f, "{}", count),
            Repeat::Infinite => write!(f, "INF"),
        }
    }
}

/// The playback capability of a tween.
///
/// - `Cyclic`: plays forward in time only. Honors the delay, repeat, yoyo and chained tweens.
/// - `Scrub`: the time may go back and forth. The progress is always clamped (the delay does not
///   hold the tween back) and the tween completes on the boundary it is heading to. Repeat, yoyo
///   and chained tweens are ignored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    #[default]
    Cyclic,
    Scrub,
}

/// The direction the time goes to, relevant in [`PlaybackMode::Scrub`] only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Represents the transition of some numeric properties of a [`Target`] toward end values over a
/// duration.
///
/// A tween is a handle: clones share the same state and compare equal.
/// All times are expressed in milliseconds on a caller provided clock.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use parking_lot::RwLock;
/// use hermes_tween::animations::{Easing, Properties, Registry, Tween};
///
/// let registry = Registry::new();
/// let target = Arc::new(RwLock::new(Properties::from([("x", 0.0)])));
///
/// let tween = Tween::new(&registry, target.clone())
///     .to_with_duration([("x", 100)], 1000.0)
///     .easing(Easing::QuadIn);
/// tween.start(0.0);
///
/// registry.update(500.0);
/// assert_eq!(target.read().get("x").and_then(|x| x.as_number()), Some(25.0));
/// ```
#[derive(Clone)]
pub struct Tween {
    target: SharedTarget,
    registry: WeakRegistry,
    state: Arc<RwLock<TweenState>>,
}

struct TweenState {
    values_start: HashMap<String, Value>,
    values_end: HashMap<String, EndValue>,
    values_start_repeat: HashMap<String, Value>,
    duration: f64,
    delay: f64,
    repeat: Repeat,
    yoyo: bool,
    reversed: bool,
    easing: Easing,
    interpolation: Interpolation,
    mode: PlaybackMode,
    chained: Vec<Tween>,

    // ########################################
    // # Volatile utility data.
    is_playing: bool,
    start_time: f64,
    on_start_fired: bool,
    on_start: Option<Callback>,
    on_update: Option<UpdateCallback>,
    on_complete: Option<Callback>,
    on_stop: Option<Callback>,
}

impl Default for TweenState {
    fn default() -> Self {
        Self {
            values_start: HashMap::new(),
            values_end: HashMap::new(),
            values_start_repeat: HashMap::new(),
            duration: 1000.0,
            delay: 0.0,
            repeat: Repeat::default(),
            yoyo: false,
            reversed: false,
            easing: Easing::default(),
            interpolation: Interpolation::default(),
            mode: PlaybackMode::default(),
            chained: vec![],
            is_playing: false,
            start_time: 0.0,
            on_start_fired: false,
            on_start: None,
            on_update: None,
            on_complete: None,
            on_stop: None,
        }
    }
}

impl Tween {
    /// Creates a tween of the given target, registered into `registry` when started.
    pub fn new<T: Target + 'static>(registry: &Registry, target: Arc<RwLock<T>>) -> Self {
        let target: SharedTarget = target;
        Self::from_shared(registry, target)
    }

    /// Creates a tween of an already type-erased target.
    pub fn from_shared(registry: &Registry, target: SharedTarget) -> Self {
        Self {
            target,
            registry: registry.downgrade(),
            state: Arc::new(RwLock::new(TweenState::default())),
        }
    }

    /// Sets the end values of the transition (replacing any previous ones).
    ///
    /// Numbers are absolute end values, strings are deltas relative to the start value
    /// (`"+10"`, `"-5"`) and lists are paths of intermediate values.
    pub fn to<I, K, V>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<EndValue>,
    {
        let mut state = self.state.write();
        state.values_end = properties
            .into_iter()
            .map(|(property, value)| (property.into(), value.into()))
            .collect();

        // Updating before `start` blends from the values read here.
        let target = self.target.read();
        let TweenState {
            values_start,
            values_end,
            ..
        } = &mut *state;
        values_start.clear();
        for property in values_end.keys() {
            values_start.insert(property.clone(), start_value(&*target, property));
        }
        drop(target);
        drop(state);
        self
    }

    /// Sets the end values and the duration (in ms) of the transition.
    pub fn to_with_duration<I, K, V>(self, properties: I, duration: f64) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<EndValue>,
    {
        self.state.write().duration = duration;
        self.to(properties)
    }

    /// Starts the tween at the given time (delayed by the tween delay).
    ///
    /// The tween is added to its registry and the current values of the animated properties are
    /// captured as start values: missing properties start from 0. Path end values get the current
    /// value prepended as their first point.
    pub fn start(&self, time: f64) -> &Self {
        if let Some(registry) = self.registry.upgrade() {
            registry.add(self);
        }

        let mut state = self.state.write();
        state.is_playing = true;
        state.on_start_fired = false;
        state.start_time = time + state.delay;

        let target = self.target.read();
        let TweenState {
            values_start,
            values_end,
            values_start_repeat,
            ..
        } = &mut *state;
        values_start.clear();
        values_start_repeat.clear();
        for (property, end) in values_end.iter_mut() {
            let current = start_value(&*target, property);
            if let EndValue::Path(path) = end {
                if path.is_empty() {
                    continue;
                }
                if let Value::Number(number) = current {
                    path.insert(0, number);
                }
            }
            values_start.insert(property.clone(), current.clone());
            values_start_repeat.insert(property.clone(), current);
        }

        trace!("Tween started at {}ms: {}", state.start_time, values_end_summary(&state));
        self
    }

    /// Stops the tween if playing: unregisters it, fires the `on_stop` callback and stops the
    /// chained tweens.
    pub fn stop(&self) -> &Self {
        let on_stop = {
            let mut state = self.state.write();
            if !state.is_playing {
                return self;
            }
            state.is_playing = false;
            let on_stop = state.on_stop.clone();
            on_stop
        };

        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self);
        }
        trace!("Tween stopped");

        if let Some(callback) = on_stop {
            callback(&self.target);
        }
        self.stop_chained_tweens()
    }

    /// Stops all the chained tweens.
    pub fn stop_chained_tweens(&self) -> &Self {
        let chained = self.state.read().chained.clone();
        for tween in chained {
            tween.stop();
        }
        self
    }

    /// Updates the target properties for the given time, moving forward.
    ///
    /// Returns `false` once the tween is complete.
    pub fn update(&self, time: f64) -> bool {
        self.update_in(time, Direction::Forward)
    }

    /// Updates the target properties for the given time.
    ///
    /// The direction only matters in [`PlaybackMode::Scrub`]: the tween completes when reaching
    /// its end going forward, or its beginning going backward.
    pub fn update_in(&self, time: f64, direction: Direction) -> bool {
        let mut state = self.state.write();
        if state.mode == PlaybackMode::Cyclic && time < state.start_time {
            return true;
        }

        if !state.on_start_fired {
            state.on_start_fired = true;
            let on_start = state.on_start.clone();
            if let Some(callback) = on_start {
                drop(state);
                callback(&self.target);
                state = self.state.write();
            }
        }

        let elapsed = match state.duration > 0.0 {
            true => ((time - state.start_time) / state.duration).clamp(0.0, 1.0),
            false => 1.0,
        };
        let value = state.easing.call(elapsed);

        {
            let mut target = self.target.write();
            for (property, end) in state.values_end.iter() {
                match end {
                    EndValue::Path(path) if !path.is_empty() => {
                        target.set(property, state.interpolation.call(path, value));
                    }
                    EndValue::Absolute(_) | EndValue::Relative(_) => {
                        let start = match state.values_start.get(property) {
                            Some(Value::Number(start)) => *start,
                            Some(Value::Array(_)) => continue,
                            None => 0.0,
                        };
                        if let Some(end) = end.resolve(start) {
                            target.set(property, lerp(start, end, value));
                        }
                    }
                    _ => {}
                }
            }
        }

        let on_update = state.on_update.clone();
        drop(state);
        if let Some(callback) = on_update {
            callback(&self.target, value);
        }

        let mut state = self.state.write();
        let complete = match (state.mode, direction) {
            (PlaybackMode::Scrub, Direction::Backward) => elapsed == 0.0,
            _ => elapsed == 1.0,
        };
        if !complete {
            return true;
        }

        if state.mode == PlaybackMode::Cyclic && !state.repeat.is_exhausted() {
            restart_cycle(&mut state, time);
            trace!("Tween repeats at {}ms (repeat={})", state.start_time, state.repeat);
            return true;
        }

        state.is_playing = false;
        let on_complete = state.on_complete.clone();
        let chained = match state.mode {
            PlaybackMode::Cyclic => state.chained.clone(),
            PlaybackMode::Scrub => vec![],
        };
        drop(state);

        trace!("Tween complete at {}ms", time);
        if let Some(callback) = on_complete {
            callback(&self.target);
        }
        for tween in chained {
            trace!("Start chained tween at {}ms", time);
            tween.start(time);
        }
        false
    }

    /// Applies a declarative configuration: every setting of `config` replaces the current one.
    pub fn configure(self, config: &TweenConfig) -> Self {
        {
            let mut state = self.state.write();
            state.duration = config.duration;
            state.delay = config.delay;
            state.repeat = Repeat::from(config.repeat);
            state.yoyo = config.yoyo;
            state.easing = config.easing;
            state.interpolation = config.interpolation;
            state.mode = config.mode;
        }
        self.to(config.to.clone())
    }

    // ########################################
    // Setters

    /// Sets the delay (in ms) between the call to [`Tween::start`] and the actual start.
    /// The delay also applies before each repetition.
    pub fn delay(self, delay: f64) -> Self {
        self.state.write().delay = delay;
        self
    }

    /// Sets how many times the tween restarts once complete.
    pub fn repeat(self, times: u32) -> Self {
        self.state.write().repeat = Repeat::Count(times);
        self
    }

    /// Restarts the tween indefinitely.
    pub fn repeat_forever(self) -> Self {
        self.state.write().repeat = Repeat::Infinite;
        self
    }

    /// When set, each repetition plays the transition backward from the previous one.
    pub fn yoyo(self, yoyo: bool) -> Self {
        self.state.write().yoyo = yoyo;
        self
    }

    pub fn easing(self, easing: Easing) -> Self {
        self.state.write().easing = easing;
        self
    }

    pub fn interpolation(self, interpolation: Interpolation) -> Self {
        self.state.write().interpolation = interpolation;
        self
    }

    pub fn mode(self, mode: PlaybackMode) -> Self {
        self.state.write().mode = mode;
        self
    }

    /// Sets the tweens to start when this one completes (replacing any previous ones).
    pub fn chain<I: IntoIterator<Item = Tween>>(self, tweens: I) -> Self {
        self.state.write().chained = tweens.into_iter().collect();
        self
    }

    // ########################################
    // Callbacks

    /// Sets the callback fired on the first update following a start.
    pub fn on_start<F: Fn(&SharedTarget) + Send + Sync + 'static>(self, callback: F) -> Self {
        self.state.write().on_start = Some(Arc::new(callback));
        self
    }

    /// Sets the callback fired on each update, with the eased progress.
    pub fn on_update<F: Fn(&SharedTarget, f64) + Send + Sync + 'static>(self, callback: F) -> Self {
        self.state.write().on_update = Some(Arc::new(callback));
        self
    }

    /// Sets the callback fired when the tween completes (not on repetitions).
    pub fn on_complete<F: Fn(&SharedTarget) + Send + Sync + 'static>(self, callback: F) -> Self {
        self.state.write().on_complete = Some(Arc::new(callback));
        self
    }

    /// Sets the callback fired when a playing tween is stopped.
    pub fn on_stop<F: Fn(&SharedTarget) + Send + Sync + 'static>(self, callback: F) -> Self {
        self.state.write().on_stop = Some(Arc::new(callback));
        self
    }

    // ########################################
    // Getters

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing
    }

    /// Indicates whether the tween currently plays its transition backward (yoyo).
    pub fn is_reversed(&self) -> bool {
        self.state.read().reversed
    }

    pub fn get_duration(&self) -> f64 {
        self.state.read().duration
    }

    pub fn get_delay(&self) -> f64 {
        self.state.read().delay
    }

    /// Returns the repetitions left.
    pub fn get_repeat(&self) -> Repeat {
        self.state.read().repeat
    }

    pub fn is_yoyo(&self) -> bool {
        self.state.read().yoyo
    }

    pub fn get_easing(&self) -> Easing {
        self.state.read().easing
    }

    pub fn get_interpolation(&self) -> Interpolation {
        self.state.read().interpolation
    }

    pub fn get_mode(&self) -> PlaybackMode {
        self.state.read().mode
    }

    /// Returns the time the current cycle starts at (delay included).
    pub fn get_start_time(&self) -> f64 {
        self.state.read().start_time
    }

    pub fn get_chained(&self) -> Vec<Tween> {
        self.state.read().chained.clone()
    }

    pub fn get_start_values(&self) -> HashMap<String, Value> {
        self.state.read().values_start.clone()
    }

    pub fn get_end_values(&self) -> HashMap<String, EndValue> {
        self.state.read().values_end.clone()
    }

    pub fn get_target(&self) -> SharedTarget {
        self.target.clone()
    }
}

/// Prepares the state for the next repetition of the transition.
fn restart_cycle(state: &mut TweenState, time: f64) {
    if let Repeat::Count(count) = &mut state.repeat {
        *count = count.saturating_sub(1);
    }

    let TweenState {
        values_start,
        values_end,
        values_start_repeat,
        yoyo,
        reversed,
        start_time,
        delay,
        ..
    } = state;
    for (property, start) in values_start_repeat.iter_mut() {
        let Some(end) = values_end.get_mut(property) else {
            continue;
        };
        if let (EndValue::Relative(delta), Value::Number(start)) = (&*end, &mut *start) {
            *start += delta;
        }
        if *yoyo {
            match end {
                EndValue::Absolute(end) => {
                    if let Value::Number(start) = start {
                        std::mem::swap(start, end);
                    }
                }
                EndValue::Relative(delta) => *delta = -*delta,
                EndValue::Path(path) => path.reverse(),
                EndValue::Opaque => {}
            }
        }
    }

    *values_start = values_start_repeat.clone();
    if *yoyo {
        *reversed = !*reversed;
    }
    *start_time = time + *delay;
}

/// Reads the start value of a property: missing or NaN properties start from 0.
fn start_value(target: &dyn Target, property: &str) -> Value {
    match target.get(property) {
        Some(Value::Number(number)) if !number.is_nan() => Value::Number(number),
        Some(Value::Array(values)) => Value::Array(values),
        _ => Value::Number(0.0),
    }
}

fn values_end_summary(state: &TweenState) -> String {
    let mut properties: Vec<_> = state.values_end.iter().collect();
    properties.sort_by(|a, b| a.0.cmp(b.0));
    properties
        .into_iter()
        .map(|(property, end)| format!("{}={}", property, end))
        .collect::<Vec<String>>()
        .join(", ")
}

impl PartialEq for Tween {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Debug for Tween {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Tween")
            .field("values_start", &state.values_start)
            .field("values_end", &state.values_end)
            .field("duration", &state.duration)
            .field("delay", &state.delay)
            .field("repeat", &state.repeat)
            .field("yoyo", &state.yoyo)
            .field("reversed", &state.reversed)
            .field("easing", &state.easing)
            .field("interpolation", &state.interpolation)
            .field("mode", &state.mode)
            .field("chained", &state.chained.len())
            .field("is_playing", &state.is_playing)
            .field("start_time", &state.start_time)
            .finish_non_exhaustive()
    }
}

impl Display for Tween {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        write!(
            f,
            "Tween [duration={}ms, delay={}ms, repeat={}, yoyo={}, easing={}, interpolation={}, playing={}]",
            state.duration,
            state.delay,
            state.repeat,
            state.yoyo,
            state.easing,
            state.interpolation,
            state.is_playing
        )?;
        let mut properties: Vec<_> = state.values_end.iter().collect();
        properties.sort_by(|a, b| a.0.cmp(b.0));
        for (property, end) in properties {
            write!(f, "\n  {} -> {}", property, end)?;
        }
        Ok(())
    }
}
