//! The item container the engine lays out.
//!
//! The host owns the items and their visual state; the engine only reads
//! the ordered collection and drives the mutators below. Items are opaque
//! copyable handles.

use std::fmt::Debug;
use std::hash::Hash;

use crate::primitives::{Rect, Size};

/// Opaque handle for one layout participant.
pub trait ItemHandle: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> ItemHandle for T {}

/// An animatable per-item property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    LayoutX,
    LayoutY,
    ScaleX,
    ScaleY,
    Opacity,
}

impl Property {
    /// Value an item holds when no transition is acting on it.
    pub fn steady_value(self) -> Option<f32> {
        match self {
            Property::ScaleX | Property::ScaleY | Property::Opacity => Some(1.0),
            Property::LayoutX | Property::LayoutY => None,
        }
    }
}

/// Container contract consumed by the engine.
///
/// Mutators called with a handle the container no longer holds must be
/// no-ops.
pub trait ItemHost {
    type Item: ItemHandle;

    /// Current container size.
    fn size(&self) -> Size;

    /// All items, in layout order, including unmanaged ones.
    fn children(&self) -> Vec<Self::Item>;

    /// Whether the item takes a slot in the packing.
    fn is_managed(&self, item: Self::Item) -> bool;

    /// Include or exclude the item from packing without removing it.
    fn set_managed(&mut self, item: Self::Item, managed: bool);

    /// Append an item to the collection.
    fn add_child(&mut self, item: Self::Item);

    /// Remove an item from the collection.
    fn remove_child(&mut self, item: Self::Item);

    fn property(&self, item: Self::Item, property: Property) -> f32;

    fn set_property(&mut self, item: Self::Item, property: Property, value: f32);

    /// Resize an item without moving it.
    fn resize(&mut self, item: Self::Item, width: f32, height: f32);

    /// Position and size an item in one step.
    fn layout_in_area(&mut self, item: Self::Item, area: Rect) {
        self.set_property(item, Property::LayoutX, area.x);
        self.set_property(item, Property::LayoutY, area.y);
        self.resize(item, area.width, area.height);
    }

    /// Hook for items that render as circles and need the radius itself.
    fn set_radius(&mut self, _item: Self::Item, _radius: f32) {}
}
