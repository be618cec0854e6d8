//! Backing collection ownership and mutation.
//!
//! [`ItemStore`] owns the ordered collection of data items and every
//! primitive that edits it. After each mutation it emits the minimal
//! change description (inserted range, removed slot, changed slot) in
//! *slot* coordinates, translated through the [`DecorationFlags`] snapshot
//! the caller passes in.
//!
//! The collection starts *unset* (distinct from empty): most mutations on
//! an unset store are defensive no-ops, while the bulk insert operations
//! fall back to first-time initialization, matching tolerant UI-library
//! behavior where a late mutation against a torn-down adapter must not
//! crash a render pass.
//!
//! # The placeholder flip
//!
//! When a mutation transitions the collection between empty and non-empty
//! while a placeholder is configured, fixed slot positions change meaning
//! (the placeholder and suppressed decorations appear or vanish). The store
//! detects that flip and emits a full reset instead of the incremental
//! notification.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::slots::DecorationFlags;
use crate::traits::AdapterSignals;

/// Hook invoked with the full collection after every structural edit.
///
/// Derived adapters use this to re-sort or re-dedupe before the
/// notification goes out.
pub type FilterHook<T> = Arc<dyn Fn(&mut Vec<T>) + Send + Sync>;

/// Owner of the backing collection and emitter of change notifications.
///
/// All mutation methods take the current [`DecorationFlags`] snapshot so
/// the emitted positions already carry the decoration offset; the store
/// itself knows nothing about views.
pub struct ItemStore<T> {
    items: RwLock<Option<Vec<T>>>,
    filter: RwLock<Option<FilterHook<T>>>,
    signals: AdapterSignals,
}

impl<T> Default for ItemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ItemStore<T> {
    /// Creates a store with an unset collection.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(None),
            filter: RwLock::new(None),
            signals: AdapterSignals::new(),
        }
    }

    /// Creates a store that owns the given collection.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(Some(items)),
            filter: RwLock::new(None),
            signals: AdapterSignals::new(),
        }
    }

    /// Number of items in the collection (0 while unset).
    pub fn len(&self) -> usize {
        self.items.read().as_ref().map_or(0, Vec::len)
    }

    /// Returns `true` if the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the collection was never initialized.
    pub fn is_unset(&self) -> bool {
        self.items.read().is_none()
    }

    /// Read access to the items (an unset collection reads as empty).
    pub fn items(&self) -> impl std::ops::Deref<Target = [T]> + '_ {
        RwLockReadGuard::map(self.items.read(), |items| {
            items.as_deref().unwrap_or(&[])
        })
    }

    /// The signals emitted after mutations.
    pub fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    /// Installs the post-mutation filter hook.
    ///
    /// The hook runs after the structural edit and before the notification
    /// is emitted, but the notification's position is computed from the
    /// *pre-hook* collection. A hook that reorders or removes elements can
    /// therefore emit a range that no longer matches the final collection.
    /// That inconsistency is long-standing adapter behavior callers rely
    /// on; it is documented here rather than fixed.
    pub fn set_filter_hook<F>(&self, hook: F)
    where
        F: Fn(&mut Vec<T>) + Send + Sync + 'static,
    {
        *self.filter.write() = Some(Arc::new(hook));
    }

    fn filter_hook(&self) -> Option<FilterHook<T>> {
        self.filter.read().clone()
    }

    // -------------------------------------------------------------------
    // Insertions
    // -------------------------------------------------------------------

    /// Appends one item to the end of the collection.
    ///
    /// No-op while the collection is unset.
    pub fn append_one(&self, item: T, flags: DecorationFlags) {
        let hook = self.filter_hook();
        let start;
        let was_placeholder;
        {
            let mut guard = self.items.write();
            let Some(items) = guard.as_mut() else {
                tracing::debug!(target: "horizon_roster::store", "append ignored, collection unset");
                return;
            };
            start = items.len();
            was_placeholder = flags.placeholder_active(start);
            items.push(item);
            if let Some(hook) = &hook {
                hook(items);
            }
        }
        if was_placeholder {
            self.signals.full_reset.emit(());
        } else {
            self.signals.range_inserted.emit((flags.slot_of(start), 1));
        }
    }

    /// Appends a batch of items to the end of the collection.
    ///
    /// An unset collection is initialized as if by
    /// [`replace_all`](Self::replace_all); an empty batch is a no-op.
    pub fn append_many(&self, new_items: Vec<T>, flags: DecorationFlags) {
        if self.is_unset() {
            self.replace_all(new_items);
            return;
        }
        if new_items.is_empty() {
            tracing::debug!(target: "horizon_roster::store", "append ignored, empty batch");
            return;
        }
        let hook = self.filter_hook();
        let count = new_items.len();
        let start;
        let was_placeholder;
        {
            let mut guard = self.items.write();
            let Some(items) = guard.as_mut() else {
                return;
            };
            start = items.len();
            was_placeholder = flags.placeholder_active(start);
            items.extend(new_items);
            if let Some(hook) = &hook {
                hook(items);
            }
        }
        if was_placeholder {
            self.signals.full_reset.emit(());
        } else {
            self.signals
                .range_inserted
                .emit((flags.slot_of(start), count));
        }
    }

    /// Prepends one item at the head of the collection.
    ///
    /// No-op while the collection is unset.
    pub fn prepend_one(&self, item: T, flags: DecorationFlags) {
        self.insert_at(0, item, flags);
    }

    /// Prepends a batch of items at the head of the collection.
    ///
    /// An unset collection is initialized as if by
    /// [`replace_all`](Self::replace_all); an empty batch is a no-op.
    pub fn prepend_many(&self, new_items: Vec<T>, flags: DecorationFlags) {
        if self.is_unset() {
            self.replace_all(new_items);
            return;
        }
        if new_items.is_empty() {
            tracing::debug!(target: "horizon_roster::store", "prepend ignored, empty batch");
            return;
        }
        let hook = self.filter_hook();
        let count = new_items.len();
        let was_placeholder;
        {
            let mut guard = self.items.write();
            let Some(items) = guard.as_mut() else {
                return;
            };
            was_placeholder = flags.placeholder_active(items.len());
            items.splice(0..0, new_items);
            if let Some(hook) = &hook {
                hook(items);
            }
        }
        if was_placeholder {
            self.signals.full_reset.emit(());
        } else {
            self.signals.range_inserted.emit((flags.slot_of(0), count));
        }
    }

    /// Inserts one item at an arbitrary position, `0 <= index <= len`.
    ///
    /// Out-of-range positions and an unset collection are no-ops.
    pub fn insert_at(&self, index: usize, item: T, flags: DecorationFlags) {
        let hook = self.filter_hook();
        let was_placeholder;
        {
            let mut guard = self.items.write();
            let Some(items) = guard.as_mut() else {
                tracing::debug!(target: "horizon_roster::store", "insert ignored, collection unset");
                return;
            };
            if index > items.len() {
                tracing::debug!(
                    target: "horizon_roster::store",
                    index,
                    len = items.len(),
                    "insert ignored, index out of range"
                );
                return;
            }
            was_placeholder = flags.placeholder_active(items.len());
            items.insert(index, item);
            if let Some(hook) = &hook {
                hook(items);
            }
        }
        if was_placeholder {
            self.signals.full_reset.emit(());
        } else {
            self.signals.range_inserted.emit((flags.slot_of(index), 1));
        }
    }

    // -------------------------------------------------------------------
    // Removals
    // -------------------------------------------------------------------

    /// Removes the first item equal to `value`.
    ///
    /// Reports nothing if the value is absent or the collection is unset.
    pub fn remove_by_value(&self, value: &T, flags: DecorationFlags)
    where
        T: PartialEq,
    {
        let hook = self.filter_hook();
        let pos;
        let now_placeholder;
        {
            let mut guard = self.items.write();
            let Some(items) = guard.as_mut() else {
                tracing::debug!(target: "horizon_roster::store", "remove ignored, collection unset");
                return;
            };
            let Some(found) = items.iter().position(|item| item == value) else {
                tracing::debug!(target: "horizon_roster::store", "remove ignored, value absent");
                return;
            };
            pos = found;
            items.remove(pos);
            now_placeholder = flags.placeholder_active(items.len());
            if let Some(hook) = &hook {
                hook(items);
            }
        }
        if now_placeholder {
            self.signals.full_reset.emit(());
        } else {
            self.signals.item_removed.emit(flags.slot_of(pos));
        }
    }

    /// Removes the item at `index`.
    ///
    /// `index == len` is tolerated as a no-op boundary; anything beyond,
    /// or an unset collection, is likewise a no-op.
    pub fn remove_at(&self, index: usize, flags: DecorationFlags) {
        let hook = self.filter_hook();
        let now_placeholder;
        {
            let mut guard = self.items.write();
            let Some(items) = guard.as_mut() else {
                tracing::debug!(target: "horizon_roster::store", "remove ignored, collection unset");
                return;
            };
            if index >= items.len() {
                tracing::debug!(
                    target: "horizon_roster::store",
                    index,
                    len = items.len(),
                    "remove ignored, index out of range"
                );
                return;
            }
            items.remove(index);
            now_placeholder = flags.placeholder_active(items.len());
            if let Some(hook) = &hook {
                hook(items);
            }
        }
        if now_placeholder {
            self.signals.full_reset.emit(());
        } else {
            self.signals.item_removed.emit(flags.slot_of(index));
        }
    }

    // -------------------------------------------------------------------
    // Replacements
    // -------------------------------------------------------------------

    /// Replaces the item at `index` in place.
    ///
    /// Out-of-range positions and an unset collection are no-ops.
    pub fn replace_at(&self, index: usize, item: T, flags: DecorationFlags) {
        let hook = self.filter_hook();
        {
            let mut guard = self.items.write();
            let Some(items) = guard.as_mut() else {
                tracing::debug!(target: "horizon_roster::store", "replace ignored, collection unset");
                return;
            };
            if index >= items.len() {
                tracing::debug!(
                    target: "horizon_roster::store",
                    index,
                    len = items.len(),
                    "replace ignored, index out of range"
                );
                return;
            }
            items[index] = item;
            if let Some(hook) = &hook {
                hook(items);
            }
        }
        self.signals.item_changed.emit(flags.slot_of(index));
    }

    /// Replaces the first item equal to `item` with the new value.
    ///
    /// Reports nothing if no equal item exists. Unlike
    /// [`replace_at`](Self::replace_at) this does not run the filter hook;
    /// an in-place refresh of an existing item is not a structural edit.
    pub fn replace_by_value(&self, item: T, flags: DecorationFlags)
    where
        T: PartialEq,
    {
        let pos;
        {
            let mut guard = self.items.write();
            let Some(items) = guard.as_mut() else {
                tracing::debug!(target: "horizon_roster::store", "replace ignored, collection unset");
                return;
            };
            let Some(found) = items.iter().position(|existing| *existing == item) else {
                tracing::debug!(target: "horizon_roster::store", "replace ignored, value absent");
                return;
            };
            pos = found;
            items[pos] = item;
        }
        self.signals.item_changed.emit(flags.slot_of(pos));
    }

    /// Replaces the whole collection, taking ownership of the new items.
    ///
    /// Works on an unset collection too (first-time initialization).
    /// Always emits a full reset; the filter hook does not run.
    pub fn replace_all(&self, new_items: Vec<T>) {
        *self.items.write() = Some(new_items);
        self.signals.full_reset.emit(());
    }

    /// Empties the collection if it is present.
    ///
    /// Emits a full reset on every call against a present collection, even
    /// an already-empty one; an unset collection is a complete no-op.
    pub fn clear(&self) {
        {
            let mut guard = self.items.write();
            let Some(items) = guard.as_mut() else {
                tracing::debug!(target: "horizon_roster::store", "clear ignored, collection unset");
                return;
            };
            items.clear();
        }
        self.signals.full_reset.emit(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Note {
        Reset,
        Inserted(usize, usize),
        Removed(usize),
        Changed(usize),
    }

    /// Records every notification the store emits, in order.
    fn record<T>(store: &ItemStore<T>) -> Arc<Mutex<Vec<Note>>> {
        let notes = Arc::new(Mutex::new(Vec::new()));

        let sink = notes.clone();
        store.signals().full_reset.connect(move |_| {
            sink.lock().push(Note::Reset);
        });
        let sink = notes.clone();
        store.signals().range_inserted.connect(move |(start, count)| {
            sink.lock().push(Note::Inserted(*start, *count));
        });
        let sink = notes.clone();
        store.signals().item_removed.connect(move |slot| {
            sink.lock().push(Note::Removed(*slot));
        });
        let sink = notes.clone();
        store.signals().item_changed.connect(move |slot| {
            sink.lock().push(Note::Changed(*slot));
        });

        notes
    }

    fn header_flags() -> DecorationFlags {
        DecorationFlags {
            has_header: true,
            ..Default::default()
        }
    }

    fn placeholder_flags() -> DecorationFlags {
        DecorationFlags {
            placeholder_configured: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_append_carries_header_offset() {
        let store = ItemStore::with_items(vec![1, 2]);
        let notes = record(&store);

        store.append_one(3, header_flags());

        assert_eq!(&*store.items(), &[1, 2, 3]);
        // Backing position 2, shifted past the header.
        assert_eq!(*notes.lock(), vec![Note::Inserted(3, 1)]);
    }

    #[test]
    fn test_append_on_unset_collection_is_noop() {
        let store = ItemStore::<i32>::new();
        let notes = record(&store);

        store.append_one(1, DecorationFlags::default());

        assert!(store.is_unset());
        assert!(notes.lock().is_empty());
    }

    #[test]
    fn test_append_many_initializes_unset_collection() {
        let store = ItemStore::new();
        let notes = record(&store);

        store.append_many(vec![1, 2], DecorationFlags::default());

        assert_eq!(&*store.items(), &[1, 2]);
        assert_eq!(*notes.lock(), vec![Note::Reset]);
    }

    #[test]
    fn test_append_empty_batch_is_noop() {
        let store = ItemStore::with_items(vec![1]);
        let notes = record(&store);

        store.append_many(Vec::new(), DecorationFlags::default());
        store.prepend_many(Vec::new(), DecorationFlags::default());

        assert!(notes.lock().is_empty());
    }

    #[test]
    fn test_append_deactivating_placeholder_resets() {
        // One item into an empty, placeholder-configured collection: fixed
        // slot positions change meaning, so a full reset goes out instead
        // of an incremental insert.
        let store = ItemStore::with_items(Vec::new());
        let notes = record(&store);

        store.append_one(1, placeholder_flags());

        assert_eq!(*notes.lock(), vec![Note::Reset]);
    }

    #[test]
    fn test_prepend_many_notifies_at_head() {
        let store = ItemStore::with_items(vec![3]);
        let notes = record(&store);

        store.prepend_many(vec![1, 2], header_flags());

        assert_eq!(&*store.items(), &[1, 2, 3]);
        assert_eq!(*notes.lock(), vec![Note::Inserted(1, 2)]);
    }

    #[test]
    fn test_insert_at_accepts_end_position() {
        let store = ItemStore::with_items(vec![1, 2]);
        let notes = record(&store);

        store.insert_at(2, 3, DecorationFlags::default());
        assert_eq!(&*store.items(), &[1, 2, 3]);

        store.insert_at(9, 4, DecorationFlags::default());
        assert_eq!(&*store.items(), &[1, 2, 3]);

        assert_eq!(*notes.lock(), vec![Note::Inserted(2, 1)]);
    }

    #[test]
    fn test_remove_at_tolerates_end_boundary() {
        let store = ItemStore::with_items(vec![1, 2]);
        let notes = record(&store);

        // index == len: tolerated, nothing reported.
        store.remove_at(2, DecorationFlags::default());
        assert_eq!(store.len(), 2);

        store.remove_at(0, header_flags());
        assert_eq!(&*store.items(), &[2]);

        assert_eq!(*notes.lock(), vec![Note::Removed(1)]);
    }

    #[test]
    fn test_remove_last_item_activates_placeholder() {
        let store = ItemStore::with_items(vec![5]);
        let notes = record(&store);

        store.remove_at(0, placeholder_flags());

        assert!(store.is_empty());
        assert_eq!(*notes.lock(), vec![Note::Reset]);
    }

    #[test]
    fn test_remove_by_value_reports_found_position() {
        let store = ItemStore::with_items(vec![10, 20, 30]);
        let notes = record(&store);

        store.remove_by_value(&20, header_flags());
        assert_eq!(&*store.items(), &[10, 30]);

        store.remove_by_value(&99, header_flags());
        assert_eq!(&*store.items(), &[10, 30]);

        assert_eq!(*notes.lock(), vec![Note::Removed(2)]);
    }

    #[test]
    fn test_replace_at_emits_change() {
        let store = ItemStore::with_items(vec![1, 2, 3]);
        let notes = record(&store);

        store.replace_at(1, 20, header_flags());
        assert_eq!(&*store.items(), &[1, 20, 3]);

        store.replace_at(9, 99, header_flags());
        assert_eq!(&*store.items(), &[1, 20, 3]);

        assert_eq!(*notes.lock(), vec![Note::Changed(2)]);
    }

    #[test]
    fn test_replace_by_value_silent_when_absent() {
        #[derive(Debug, Clone)]
        struct Row {
            id: u32,
            text: &'static str,
        }
        impl PartialEq for Row {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        let store = ItemStore::with_items(vec![
            Row { id: 1, text: "one" },
            Row { id: 2, text: "two" },
        ]);
        let notes = record(&store);

        store.replace_by_value(Row { id: 2, text: "TWO" }, DecorationFlags::default());
        assert_eq!(store.items()[1].text, "TWO");

        store.replace_by_value(Row { id: 9, text: "none" }, DecorationFlags::default());

        assert_eq!(*notes.lock(), vec![Note::Changed(1)]);
    }

    #[test]
    fn test_replace_all_initializes_and_resets() {
        let store = ItemStore::new();
        let notes = record(&store);

        store.replace_all(vec![1, 2, 3]);
        assert_eq!(store.len(), 3);

        store.replace_all(vec![9]);
        assert_eq!(&*store.items(), &[9]);

        assert_eq!(*notes.lock(), vec![Note::Reset, Note::Reset]);
    }

    #[test]
    fn test_clear_is_idempotent_but_always_notifies() {
        let store = ItemStore::with_items(vec![1]);
        let notes = record(&store);

        store.clear();
        store.clear();

        assert!(store.is_empty());
        assert!(!store.is_unset());
        assert_eq!(*notes.lock(), vec![Note::Reset, Note::Reset]);
    }

    #[test]
    fn test_clear_on_unset_collection_is_silent() {
        let store = ItemStore::<i32>::new();
        let notes = record(&store);

        store.clear();

        assert!(store.is_unset());
        assert!(notes.lock().is_empty());
    }

    #[test]
    fn test_filter_hook_runs_before_notification_position_is_used() {
        let store = ItemStore::with_items(vec![5, 6]);
        let notes = record(&store);
        store.set_filter_hook(|items: &mut Vec<i32>| items.sort());

        store.append_one(0, DecorationFlags::default());

        // The hook moved the new item to the front, but the emitted
        // position still reflects the pre-hook append at the tail.
        assert_eq!(&*store.items(), &[0, 5, 6]);
        assert_eq!(*notes.lock(), vec![Note::Inserted(2, 1)]);
    }

    #[test]
    fn test_replace_all_skips_filter_hook() {
        let calls = Arc::new(Mutex::new(0));
        let store = ItemStore::with_items(vec![1]);
        let seen = calls.clone();
        store.set_filter_hook(move |_items: &mut Vec<i32>| {
            *seen.lock() += 1;
        });

        store.replace_all(vec![2, 3]);
        store.clear();
        assert_eq!(*calls.lock(), 0);

        store.append_one(4, DecorationFlags::default());
        assert_eq!(*calls.lock(), 1);
    }
}
