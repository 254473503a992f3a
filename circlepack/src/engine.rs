//! Layout engine: orchestrates packing, membership and transitions.
//!
//! # Pass lifecycle
//!
//! ```text
//! layout(host)
//!   ├── membership.observe(children)      diff against last pass
//!   ├── packing.set_*(count, size)        skip if nothing changed
//!   ├── packing radius + centers          resolved before any host mutation
//!   ├── scheduler.cancel_active()         snap scale, detach orphaned exits
//!   ├── scheduler.place() per item        immediate or animated
//!   ├── scheduler.zoom_in / zoom_out      added / removed items
//!   └── scheduler.commit()                timeline starts on next tick
//!
//! tick(host, dt)
//!   ├── scheduler.advance(dt)             completion → detach reintroduced
//!   └── scheduler.run_deferred()          play the freshly built timeline
//! ```

use std::time::Duration;

use crate::config::LayoutConfig;
use crate::error::PackingError;
use crate::host::{ItemHandle, ItemHost, Property};
use crate::membership::{MembershipState, MembershipTracker};
use crate::packing::{CirclePacking, ResponsivePacking};
use crate::primitives::Rect;
use crate::transition::TransitionScheduler;

/// Outcome of one [`LayoutEngine::layout`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutPass {
    /// Nothing changed since the last applied pass.
    Skipped,
    Applied {
        count: usize,
        radius: f32,
        /// A timeline was built and will start on the next tick.
        animated: bool,
    },
}

/// Lays out circular items and animates membership changes.
#[derive(Debug)]
pub struct LayoutEngine<I: ItemHandle> {
    config: LayoutConfig,
    packing: ResponsivePacking,
    membership: MembershipTracker<I>,
    scheduler: TransitionScheduler<I>,
    /// Set until one pass completes with animation enabled; the initial
    /// population is always placed synchronously.
    skip_timeline: bool,
    /// Set after a pass failed mid-way; the next pass runs even if the
    /// inputs look unchanged.
    force_pass: bool,
    radius: f32,
}

impl<I: ItemHandle> LayoutEngine<I> {
    /// Engine with the default grid and honeycomb strategies.
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_packing(config, ResponsivePacking::default())
    }

    pub fn with_packing(config: LayoutConfig, packing: ResponsivePacking) -> Self {
        let scheduler = TransitionScheduler::from_config(&config);
        Self {
            config,
            packing,
            membership: MembershipTracker::new(),
            scheduler,
            skip_timeline: true,
            force_pass: false,
            radius: 0.0,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Toggle animation. Turning it on takes effect after the next pass.
    pub fn set_animate(&mut self, animate: bool) {
        self.config.animate = animate;
    }

    /// Radius resolved by the last applied pass.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn membership(&self) -> &MembershipTracker<I> {
        &self.membership
    }

    pub fn state_of(&self, item: I) -> Option<MembershipState> {
        self.membership.state(item)
    }

    pub fn scheduler(&self) -> &TransitionScheduler<I> {
        &self.scheduler
    }

    /// A timeline is scheduled or running.
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Run one layout pass against the host's current state.
    ///
    /// A pass that fails leaves the host untouched; the next call retries it
    /// with freshly computed geometry.
    pub fn layout<H: ItemHost<Item = I>>(
        &mut self,
        host: &mut H,
    ) -> Result<LayoutPass, PackingError> {
        let children = host.children();
        self.membership.observe(&children);
        let managed: Vec<I> = children
            .iter()
            .copied()
            .filter(|&item| host.is_managed(item))
            .collect();

        let count = managed.len();
        let size = host.size();
        self.packing.set_circles_count(count);
        self.packing.set_container_size(size.width, size.height);
        if !self.force_pass && !self.membership.has_pending() && !self.packing.has_changed() {
            tracing::trace!(count, "layout unchanged, skipping pass");
            return Ok(LayoutPass::Skipped);
        }

        let animate = self.config.animate && !self.skip_timeline;

        // Resolve the whole geometry before touching the host.
        let radius = self.packing.circles_radius();
        let centers = if self.packing.is_empty() {
            Vec::new()
        } else {
            let resolved = (0..count)
                .map(|index| self.packing.circle_center(index))
                .collect::<Result<Vec<_>, _>>();
            match resolved {
                Ok(centers) => centers,
                Err(err) => {
                    tracing::warn!("Packing failed, layout pass aborted: {}", err);
                    self.packing.invalidate();
                    self.force_pass = true;
                    return Err(err);
                }
            }
        };
        self.radius = radius;
        self.force_pass = false;

        if self.scheduler.cancel_active(host, &managed) {
            // The cancelled timeline owned these exits; resolve them now.
            for item in self.membership.drain_reintroduced() {
                detach(host, item);
            }
        }

        for (index, (&item, center)) in managed.iter().zip(centers).enumerate() {
            host.set_radius(item, radius);
            let immediate = !animate || self.membership.is_recently_added(item);
            tracing::trace!(
                ?item,
                index,
                x = center.x,
                y = center.y,
                immediate,
                "placing item"
            );
            self.scheduler
                .place(host, item, Rect::around_circle(center, radius), immediate);
        }

        let changes = self.membership.take_changes();
        if animate {
            // Removed items come back, unmanaged, for the length of their exit.
            for &item in &changes.removed {
                host.add_child(item);
            }
            self.membership.reintroduce(&changes.removed);
            self.scheduler.zoom_in(host, &changes.added);
            self.scheduler.zoom_out(host, &changes.removed);
        } else {
            for &item in &changes.removed {
                detach(host, item);
            }
        }

        let animated = self.scheduler.commit();
        if self.config.animate {
            self.skip_timeline = false;
        }

        tracing::debug!(
            count,
            radius,
            added = changes.added.len(),
            removed = changes.removed.len(),
            animated,
            "layout pass applied"
        );
        Ok(LayoutPass::Applied {
            count,
            radius,
            animated,
        })
    }

    /// One clock tick: advance the running timeline by `dt`, detach exits
    /// when it completes, then start anything deferred by the last pass.
    /// Returns whether a timeline is still owned afterwards.
    pub fn tick<H: ItemHost<Item = I>>(&mut self, host: &mut H, dt: Duration) -> bool {
        self.advance(host, dt);
        self.run_deferred(host);
        self.is_animating()
    }

    /// Advance the running timeline; on completion detach reintroduced items.
    pub fn advance<H: ItemHost<Item = I>>(&mut self, host: &mut H, dt: Duration) -> bool {
        if !self.scheduler.advance(host, dt) {
            return false;
        }
        for item in self.membership.drain_reintroduced() {
            detach(host, item);
        }
        true
    }

    /// Run tasks deferred to this tick (starting a freshly built timeline).
    pub fn run_deferred<H: ItemHost<Item = I>>(&mut self, host: &mut H) {
        self.scheduler.run_deferred(host);
    }
}

impl<I: ItemHandle> Default for LayoutEngine<I> {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Remove an item for good, restoring its steady state so a later re-add
/// starts clean.
fn detach<H: ItemHost>(host: &mut H, item: H::Item) {
    host.set_managed(item, true);
    for property in [Property::ScaleX, Property::ScaleY, Property::Opacity] {
        if let Some(value) = property.steady_value() {
            host.set_property(item, property, value);
        }
    }
    host.remove_child(item);
    tracing::debug!(?item, "detached item");
}
