use std::sync::{Arc, Weak};

use log::{debug, warn};
use parking_lot::RwLock;

use crate::animations::{Direction, Tween};

/// Represents the set of running tweens, updated together on each tick of the caller clock.
///
/// A registry is a handle: clones share the same list of tweens.
/// Tweens add themselves on [`Tween::start`] and are removed once complete or stopped.
///
/// Updating is re-entrant with respect to the list: tweens may be added or removed (including
/// the one being updated) from callbacks without any tween being skipped or updated twice in the
/// same pass.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<RwLock<RegistryState>>,
}

#[derive(Default)]
struct RegistryState {
    tweens: Vec<Tween>,
    /// Index of the tween being updated, while an update pass runs.
    cursor: Option<usize>,
    /// Whether the tween at the cursor was removed during its update.
    current_removed: bool,
}

/// A non-owning reference to a [`Registry`], held by tweens.
#[derive(Clone, Default)]
pub struct WeakRegistry {
    inner: Weak<RwLock<RegistryState>>,
}

impl WeakRegistry {
    pub fn upgrade(&self) -> Option<Registry> {
        self.inner.upgrade().map(|inner| Registry { inner })
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downgrade(&self) -> WeakRegistry {
        WeakRegistry {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Appends a tween. The same tween may be added several times.
    pub fn add(&self, tween: &Tween) {
        let mut state = self.inner.write();
        state.tweens.push(tween.clone());
        debug!("Registry: add tween ({} registered)", state.tweens.len());
    }

    /// Removes the first occurrence of a tween, if any.
    pub fn remove(&self, tween: &Tween) {
        let mut state = self.inner.write();
        let Some(index) = state.tweens.iter().position(|candidate| candidate == tween) else {
            return;
        };
        state.tweens.remove(index);
        if let Some(cursor) = state.cursor {
            if index < cursor {
                state.cursor = Some(cursor - 1);
            } else if index == cursor {
                state.current_removed = true;
            }
        }
        debug!("Registry: remove tween ({} registered)", state.tweens.len());
    }

    /// Removes every tween.
    pub fn remove_all(&self) {
        let mut state = self.inner.write();
        state.tweens.clear();
        if state.cursor.is_some() {
            state.cursor = Some(0);
            state.current_removed = true;
        }
        debug!("Registry: clear");
    }

    /// Returns a snapshot of the registered tweens, in order.
    pub fn get_all(&self) -> Vec<Tween> {
        self.inner.read().tweens.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().tweens.is_empty()
    }

    /// Updates every tween for the given time, moving forward.
    ///
    /// Returns `false` when there was nothing to update.
    pub fn update(&self, time: f64) -> bool {
        self.update_in(time, Direction::Forward)
    }

    /// Updates every tween for the given time, in the given direction.
    ///
    /// Tweens reporting their completion are removed. Returns `false` when there was nothing to
    /// update.
    pub fn update_in(&self, time: f64, direction: Direction) -> bool {
        {
            let mut state = self.inner.write();
            if state.tweens.is_empty() {
                return false;
            }
            if state.cursor.is_some() {
                warn!("Registry: update called while already updating, ignored");
                return true;
            }
            state.cursor = Some(0);
            state.current_removed = false;
        }

        loop {
            let state = self.inner.read();
            let Some(tween) = state
                .cursor
                .and_then(|cursor| state.tweens.get(cursor).cloned())
            else {
                break;
            };
            drop(state);

            let keep = tween.update_in(time, direction);

            let mut state = self.inner.write();
            let Some(cursor) = state.cursor else {
                break;
            };
            if state.current_removed {
                state.current_removed = false;
            } else if keep {
                state.cursor = Some(cursor + 1);
            } else if state.tweens.get(cursor) == Some(&tween) {
                state.tweens.remove(cursor);
                debug!("Registry: remove tween ({} registered)", state.tweens.len());
            } else {
                state.cursor = Some(cursor + 1);
            }
        }

        self.inner.write().cursor = None;
        true
    }
}
