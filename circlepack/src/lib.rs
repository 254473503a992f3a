//! Circlepack: responsive circle packing with animated transitions.
//!
//! Lays out N equally sized circular items inside a resizable container,
//! picking whichever packing strategy yields the largest radius, and
//! animates items in, out and between positions whenever the item set,
//! the container size or the count changes.
//!
//! # Architecture
//!
//! ```text
//! container size / count ─▶ ResponsivePacking ─▶ (radius, centers)
//!                                                      │
//!                                                      ▼
//!                 MembershipTracker ◀──── LayoutEngine ────▶ TransitionScheduler
//!                 (added / removed)                          (one timeline per pass)
//! ```
//!
//! The host container implements [`ItemHost`]; the engine never creates or
//! renders items, it only reads the collection and drives item properties.
//!
//! # Usage
//!
//! ```ignore
//! use circlepack::{LayoutConfig, LayoutEngine};
//!
//! let mut engine = LayoutEngine::new(LayoutConfig::default().animated(true));
//!
//! // On resize or structural change:
//! engine.layout(&mut host)?;
//!
//! // On every frame while `engine.is_animating()`:
//! engine.tick(&mut host, frame_delta);
//! ```

pub mod config;
pub mod easing;
pub mod engine;
pub mod error;
pub mod host;
pub mod membership;
pub mod packing;
pub mod primitives;
pub mod tasks;
pub mod timeline;
pub mod transition;

pub use config::LayoutConfig;
pub use easing::Easing;
pub use engine::{LayoutEngine, LayoutPass};
pub use error::{ConfigError, PackingError};
pub use host::{ItemHandle, ItemHost, Property};
pub use membership::{MembershipChanges, MembershipState, MembershipTracker};
pub use packing::{
    Arrangement, CirclePacking, Grid, GridPacking, Honeycomb, HoneycombPacking, Packer,
    PackingLayout, ResponsivePacking,
};
pub use primitives::{Point, Rect, Size};
pub use tasks::TaskQueue;
pub use timeline::{KeyValue, Timeline, TimelineState};
pub use transition::{Deferred, TransitionScheduler};
