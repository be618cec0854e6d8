//! External contracts of the adapter layer.
//!
//! This module defines the three seams a rendering surface plugs into:
//!
//! - [`AdapterSignals`]: the change notifications a surface connects to
//!   so it can stay synchronized with the data
//! - [`SlotModel`]: the query protocol a virtualized surface drives for
//!   each visible slot
//! - [`SlotViewFactory`]: the view construction/binding contract the
//!   adapter drives on the surface's behalf

use horizon_roster_core::Signal;

use crate::decoration::TriggerContent;
use crate::slots::SlotKind;

/// Change notifications emitted after every mutation.
///
/// A rendering surface connects to these to mirror the adapter
/// incrementally instead of re-measuring the whole list. All positions are
/// *slot* coordinates with the decoration offsets already applied.
///
/// Every signal fires synchronously, before the mutating call returns.
pub struct AdapterSignals {
    /// Every slot may have changed meaning; re-query everything.
    pub full_reset: Signal<()>,

    /// A contiguous run of slots was inserted.
    /// Args: (first slot, count)
    pub range_inserted: Signal<(usize, usize)>,

    /// A single slot was removed.
    /// Args: the slot's position before removal
    pub item_removed: Signal<usize>,

    /// A slot's content changed in place.
    /// Args: the slot position
    pub item_changed: Signal<usize>,
}

impl Default for AdapterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            full_reset: Signal::new(),
            range_inserted: Signal::new(),
            item_removed: Signal::new(),
            item_changed: Signal::new(),
        }
    }
}

/// Resolved content for one slot.
///
/// Item content and decoration views are returned by value; handles are
/// expected to be cheap to clone (the usual case for host view handles),
/// and nothing borrowed escapes the adapter's internal locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContent<T, V> {
    /// The backing item this slot renders.
    Item(T),
    /// The configured header view.
    Header(V),
    /// The configured footer view.
    Footer(V),
    /// The configured load-more trigger content.
    LoadMoreTrigger(TriggerContent<V>),
    /// The active placeholder view.
    Placeholder(V),
}

/// Context handed to a [`SlotViewFactory`] when a slot's view is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotContext {
    /// The slot being realized.
    pub slot: usize,
}

/// Builds and binds views on behalf of the rendering surface.
///
/// The adapter resolves the slot's [`SlotKind`] and drives this contract
/// with an exhaustive match per kind: `create_view` runs for every kind,
/// `bind_item` only for [`SlotKind::Item`] slots.
pub trait SlotViewFactory<T> {
    /// Host view handle produced for a slot.
    type Handle;

    /// Creates a view for a slot of the given kind.
    fn create_view(&mut self, kind: SlotKind, ctx: SlotContext) -> Self::Handle;

    /// Binds a backing item into a previously created item view.
    ///
    /// Called for [`SlotKind::Item`] slots only, with the item's backing
    /// collection index.
    fn bind_item(&mut self, handle: &mut Self::Handle, item: &T, backing_index: usize);
}

/// The query protocol a virtualized list surface drives.
///
/// For each visible slot the surface asks: how many slots are there, what
/// kind is this one, what content does it carry, and what identity should
/// views be keyed on across data changes.
pub trait SlotModel {
    /// The backing item type.
    type Item;
    /// The host view handle type used by decorations.
    type View;

    /// Total number of slots to render.
    fn slot_count(&self) -> usize;

    /// Classification of the given slot.
    fn classify(&self, slot: usize) -> SlotKind;

    /// Resolved content for the given slot, or `None` when the slot is out
    /// of range or its decoration has no view to offer.
    fn content_for(&self, slot: usize) -> Option<SlotContent<Self::Item, Self::View>>
    where
        Self::Item: Clone,
        Self::View: Clone;

    /// Stable identity for the given slot.
    ///
    /// Item slots report the caller-supplied identity; the load-more
    /// trigger always reports the reserved sentinel `-1` so a surface never
    /// conflates it with a real item across data changes.
    fn stable_id(&self, slot: usize) -> i64;

    /// The signals this model emits after mutations.
    fn signals(&self) -> &AdapterSignals;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_signals_creation() {
        let signals = AdapterSignals::new();
        assert_eq!(signals.full_reset.connection_count(), 0);
        assert_eq!(signals.range_inserted.connection_count(), 0);
        assert_eq!(signals.item_removed.connection_count(), 0);
        assert_eq!(signals.item_changed.connection_count(), 0);
    }

    #[test]
    fn test_signals_deliver_slot_coordinates() {
        use parking_lot::Mutex;
        use std::sync::Arc;

        let signals = AdapterSignals::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv = received.clone();
        signals.range_inserted.connect(move |(start, count)| {
            recv.lock().push((*start, *count));
        });

        signals.range_inserted.emit((4, 2));
        assert_eq!(*received.lock(), vec![(4, 2)]);
    }
}
