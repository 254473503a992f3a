//! Time-bounded interpolation of item properties.
//!
//! A [`Timeline`] owns a set of key values (item, property, target, curve)
//! sharing one duration. Start values are captured when the timeline
//! starts playing, not when it is built, so mutations applied between
//! construction and play are the values it animates from.

use std::time::Duration;

use crate::easing::Easing;
use crate::host::{ItemHandle, ItemHost, Property};

/// One animated property target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyValue<I> {
    pub item: I,
    pub property: Property,
    pub target: f32,
    pub easing: Easing,
}

impl<I> KeyValue<I> {
    pub fn new(item: I, property: Property, target: f32, easing: Easing) -> Self {
        Self {
            item,
            property,
            target,
            easing,
        }
    }
}

/// Lifecycle of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    /// Built, waiting to play.
    Idle,
    Running,
    /// Reached its duration. Reported once by [`Timeline::advance`].
    Finished,
    /// Stopped before finishing; never reports completion.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Timeline<I> {
    key_values: Vec<KeyValue<I>>,
    starts: Vec<f32>,
    duration: Duration,
    elapsed: Duration,
    state: TimelineState,
}

impl<I: ItemHandle> Timeline<I> {
    pub fn new(duration: Duration, key_values: Vec<KeyValue<I>>) -> Self {
        Self {
            key_values,
            starts: Vec::new(),
            duration,
            elapsed: Duration::ZERO,
            state: TimelineState::Idle,
        }
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn key_values(&self) -> &[KeyValue<I>] {
        &self.key_values
    }

    /// Target of `property` on `item`, if this timeline animates it.
    pub fn target(&self, item: I, property: Property) -> Option<f32> {
        self.key_values
            .iter()
            .find(|kv| kv.item == item && kv.property == property)
            .map(|kv| kv.target)
    }

    /// Capture start values and begin running. No-op unless idle.
    pub fn play<H: ItemHost<Item = I>>(&mut self, host: &H) {
        if self.state != TimelineState::Idle {
            return;
        }
        self.starts = self
            .key_values
            .iter()
            .map(|kv| host.property(kv.item, kv.property))
            .collect();
        self.elapsed = Duration::ZERO;
        self.state = TimelineState::Running;
    }

    /// Move time forward by `dt` and write interpolated values.
    ///
    /// Returns `true` exactly once: on the call that reaches the duration.
    pub fn advance<H: ItemHost<Item = I>>(&mut self, host: &mut H, dt: Duration) -> bool {
        if self.state != TimelineState::Running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };

        for (kv, &start) in self.key_values.iter().zip(&self.starts) {
            let value = if t >= 1.0 {
                kv.target
            } else {
                kv.easing.interpolate(start, kv.target, t)
            };
            host.set_property(kv.item, kv.property, value);
        }

        if t >= 1.0 {
            self.state = TimelineState::Finished;
            return true;
        }
        false
    }

    /// Stop where it is. Values already written stay; completion never fires.
    pub fn stop(&mut self) {
        if matches!(self.state, TimelineState::Idle | TimelineState::Running) {
            self.state = TimelineState::Stopped;
        }
    }
}
