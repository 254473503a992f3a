//! Transition scheduling.
//!
//! Collects the property targets of one layout pass into a single timeline,
//! reconciles the previous timeline when a new pass supersedes it, and
//! starts the new one on the next tick through the deferred task queue.

use std::time::Duration;

use crate::config::LayoutConfig;
use crate::easing::Easing;
use crate::host::{ItemHandle, ItemHost, Property};
use crate::primitives::Rect;
use crate::tasks::TaskQueue;
use crate::timeline::{KeyValue, Timeline, TimelineState};

/// Work the scheduler defers to the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Start the timeline built by pass `generation`.
    Play { generation: u64 },
}

#[derive(Debug)]
struct ActiveTimeline<I> {
    generation: u64,
    timeline: Timeline<I>,
}

/// Builds and owns at most one transition timeline.
#[derive(Debug)]
pub struct TransitionScheduler<I> {
    duration: Duration,
    easing: Easing,
    /// Targets accumulated by the pass in progress.
    pending: Vec<KeyValue<I>>,
    active: Option<ActiveTimeline<I>>,
    generation: u64,
    deferred: TaskQueue<Deferred>,
}

impl<I: ItemHandle> TransitionScheduler<I> {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            pending: Vec::new(),
            active: None,
            generation: 0,
            deferred: TaskQueue::new(),
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.transition_duration(), config.easing)
    }

    /// Place an item at `area`, either now or as part of the pass timeline.
    pub fn place<H: ItemHost<Item = I>>(
        &mut self,
        host: &mut H,
        item: I,
        area: Rect,
        immediate: bool,
    ) {
        if immediate {
            host.layout_in_area(item, area);
            return;
        }
        host.resize(item, area.width, area.height);
        self.animate(item, Property::LayoutX, area.x);
        self.animate(item, Property::LayoutY, area.y);
    }

    /// Stop the active timeline, if any, and snap every listed item whose
    /// scale was left mid-transition back to 1. Returns whether a timeline
    /// was cancelled.
    pub fn cancel_active<H: ItemHost<Item = I>>(&mut self, host: &mut H, managed: &[I]) -> bool {
        let Some(mut active) = self.active.take() else {
            return false;
        };
        active.timeline.stop();
        let generation = active.generation;
        self.deferred
            .cancel(|task| *task == Deferred::Play { generation });

        for &item in managed {
            if host.property(item, Property::ScaleX) != 1.0
                || host.property(item, Property::ScaleY) != 1.0
            {
                host.set_property(item, Property::ScaleX, 1.0);
                host.set_property(item, Property::ScaleY, 1.0);
            }
        }
        tracing::debug!(generation, "cancelled superseded timeline");
        true
    }

    /// Scale newly added items in from zero.
    pub fn zoom_in<H: ItemHost<Item = I>>(&mut self, host: &mut H, items: &[I]) {
        for &item in items {
            host.set_property(item, Property::ScaleX, 0.0);
            host.set_property(item, Property::ScaleY, 0.0);
            self.animate(item, Property::ScaleX, 1.0);
            self.animate(item, Property::ScaleY, 1.0);
        }
    }

    /// Exclude removed items from packing, then scale and fade them out
    /// from their current values.
    pub fn zoom_out<H: ItemHost<Item = I>>(&mut self, host: &mut H, items: &[I]) {
        for &item in items {
            host.set_managed(item, false);
            self.animate(item, Property::ScaleX, 0.0);
            self.animate(item, Property::ScaleY, 0.0);
            self.animate(item, Property::Opacity, 0.0);
        }
    }

    fn animate(&mut self, item: I, property: Property, target: f32) {
        self.pending
            .push(KeyValue::new(item, property, target, self.easing));
    }

    /// Turn the pass's targets into the active timeline and defer its start
    /// to the next tick. Returns whether a timeline was built.
    pub fn commit(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        self.generation += 1;
        let key_values = std::mem::take(&mut self.pending);
        tracing::debug!(
            generation = self.generation,
            targets = key_values.len(),
            "scheduled timeline"
        );
        self.active = Some(ActiveTimeline {
            generation: self.generation,
            timeline: Timeline::new(self.duration, key_values),
        });
        self.deferred.defer(Deferred::Play {
            generation: self.generation,
        });
        true
    }

    /// Run tasks deferred by earlier passes.
    pub fn run_deferred<H: ItemHost<Item = I>>(&mut self, host: &H) {
        if self.deferred.is_empty() {
            return;
        }
        for task in self.deferred.drain() {
            match task {
                Deferred::Play { generation } => match &mut self.active {
                    Some(active) if active.generation == generation => {
                        active.timeline.play(host);
                    }
                    _ => tracing::trace!(generation, "dropped play for stale timeline"),
                },
            }
        }
    }

    /// Advance the running timeline. Returns `true` when it completed on
    /// this call; the caller then performs the deferred detachment.
    pub fn advance<H: ItemHost<Item = I>>(&mut self, host: &mut H, dt: Duration) -> bool {
        let Some(active) = &mut self.active else {
            return false;
        };
        if !active.timeline.advance(host, dt) {
            return false;
        }
        tracing::debug!(generation = active.generation, "timeline finished");
        self.active = None;
        true
    }

    /// A timeline is waiting to start or running.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// State of the owned timeline, if any.
    pub fn state(&self) -> Option<TimelineState> {
        self.active.as_ref().map(|active| active.timeline.state())
    }

    /// The owned timeline, if any.
    pub fn timeline(&self) -> Option<&Timeline<I>> {
        self.active.as_ref().map(|active| &active.timeline)
    }

    /// Number of timelines built so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
