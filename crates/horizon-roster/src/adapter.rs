//! The adapter composition root.
//!
//! [`RosterAdapter`] wires the three layers together: the
//! [`DecorationState`] configuration, the [`ItemStore`] backing collection,
//! and the slot arithmetic on [`DecorationFlags`]. It answers the rendering
//! surface's queries ([`SlotModel`]), drives view construction
//! ([`SlotViewFactory`]), and turns every configuration or data mutation
//! into the matching change notification.
//!
//! Which calls notify follows the adapter tradition this models: *setting*
//! a decoration view is silent (the surface typically configures before
//! attaching), while removing a decoration, toggling the load-more flag,
//! or selecting a placeholder all emit a full reset.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::decoration::{DecorationState, PlaceholderKind, TriggerContent};
use crate::slots::{DecorationFlags, SlotKind};
use crate::store::ItemStore;
use crate::traits::{AdapterSignals, SlotContent, SlotContext, SlotModel, SlotViewFactory};

/// Type alias for the item identity function.
///
/// Receives the item and its backing index; returns the identity the
/// rendering surface keys views on across data changes.
pub type IdExtractor<T> = Arc<dyn Fn(&T, usize) -> i64 + Send + Sync>;

/// Type alias for the item view-subtype function.
///
/// Lets heterogeneous lists distinguish item layouts within
/// [`SlotKind::Item`]; the default subtype is `0`.
pub type ItemTypeExtractor<T> = Arc<dyn Fn(&T, usize) -> u32 + Send + Sync>;

/// Stable identity reported for the load-more trigger slot.
///
/// Reserved so the surface never conflates the trigger with a real item.
pub const TRIGGER_ID: i64 = -1;

/// Stable identity reported for the header slot.
pub const HEADER_ID: i64 = i64::MIN;

/// Stable identity reported for the footer slot.
pub const FOOTER_ID: i64 = i64::MAX - 1;

/// Stable identity reported for the placeholder slot.
pub const PLACEHOLDER_ID: i64 = i64::MAX - 2;

/// A decorated list adapter.
///
/// `T` is the backing item type, `V` the host toolkit's view handle type
/// used for decorations. The adapter exclusively owns both the collection
/// and the decoration configuration; callers interact only through the
/// documented operations, so every change flows through the matching
/// notification.
///
/// # Example
///
/// ```
/// use horizon_roster::RosterAdapter;
///
/// let adapter: RosterAdapter<String, &str> =
///     RosterAdapter::with_items(vec!["a".into(), "b".into()]);
/// adapter.set_header("header-view");
///
/// assert_eq!(adapter.slot_count(), 3);
/// ```
pub struct RosterAdapter<T, V> {
    store: ItemStore<T>,
    decor: RwLock<DecorationState<V>>,
    id_extractor: Option<IdExtractor<T>>,
    item_type_extractor: Option<ItemTypeExtractor<T>>,
}

impl<T, V> Default for RosterAdapter<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V> RosterAdapter<T, V> {
    /// Creates an adapter with an unset backing collection.
    pub fn new() -> Self {
        Self {
            store: ItemStore::new(),
            decor: RwLock::new(DecorationState::new()),
            id_extractor: None,
            item_type_extractor: None,
        }
    }

    /// Creates an adapter owning the given backing collection.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            store: ItemStore::with_items(items),
            decor: RwLock::new(DecorationState::new()),
            id_extractor: None,
            item_type_extractor: None,
        }
    }

    /// Sets the item identity function.
    ///
    /// Without one, item slots report their backing index as identity.
    pub fn with_stable_ids<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&T, usize) -> i64 + Send + Sync + 'static,
    {
        self.id_extractor = Some(Arc::new(extractor));
        self
    }

    /// Sets the item view-subtype function.
    pub fn with_item_types<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&T, usize) -> u32 + Send + Sync + 'static,
    {
        self.item_type_extractor = Some(Arc::new(extractor));
        self
    }

    /// The current effective decoration snapshot.
    pub fn flags(&self) -> DecorationFlags {
        self.decor.read().flags()
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Total number of slots to render.
    pub fn slot_count(&self) -> usize {
        self.flags().slot_count(self.store.len())
    }

    /// Classification of the given slot.
    pub fn classify(&self, slot: usize) -> SlotKind {
        self.flags().classify(slot, self.store.len())
    }

    /// Resolved content for the given slot.
    ///
    /// Returns `None` for out-of-range slots and for decoration slots whose
    /// view was never configured.
    pub fn content_for(&self, slot: usize) -> Option<SlotContent<T, V>>
    where
        T: Clone,
        V: Clone,
    {
        let flags = self.flags();
        let len = self.store.len();
        match flags.classify(slot, len) {
            SlotKind::Header => self
                .decor
                .read()
                .header_view()
                .cloned()
                .map(SlotContent::Header),
            SlotKind::Footer => self
                .decor
                .read()
                .footer_view()
                .cloned()
                .map(SlotContent::Footer),
            SlotKind::LoadMoreTrigger => {
                Some(SlotContent::LoadMoreTrigger(self.decor.read().trigger().clone()))
            }
            SlotKind::Placeholder => self
                .decor
                .read()
                .placeholder_view()
                .cloned()
                .map(SlotContent::Placeholder),
            SlotKind::Item => {
                let backing = flags.backing_index(slot, len).ok()?;
                self.store
                    .items()
                    .get(backing)
                    .cloned()
                    .map(SlotContent::Item)
            }
        }
    }

    /// Stable identity for the given slot.
    ///
    /// Item slots use the configured identity function (backing index when
    /// none is set); decoration slots report reserved sentinels.
    pub fn stable_id(&self, slot: usize) -> i64 {
        let flags = self.flags();
        let len = self.store.len();
        match flags.classify(slot, len) {
            SlotKind::Header => HEADER_ID,
            SlotKind::Footer => FOOTER_ID,
            SlotKind::LoadMoreTrigger => TRIGGER_ID,
            SlotKind::Placeholder => PLACEHOLDER_ID,
            SlotKind::Item => {
                // Classification already proved this slot is past the
                // header, so the offset subtraction cannot underflow.
                let backing = slot - flags.header_offset();
                match &self.id_extractor {
                    Some(extract) => self
                        .store
                        .items()
                        .get(backing)
                        .map_or(backing as i64, |item| extract(item, backing)),
                    None => backing as i64,
                }
            }
        }
    }

    /// View subtype for an item slot (0 for decorations and by default).
    pub fn item_view_type(&self, slot: usize) -> u32 {
        let flags = self.flags();
        let len = self.store.len();
        if flags.classify(slot, len) != SlotKind::Item {
            return 0;
        }
        let backing = slot - flags.header_offset();
        match &self.item_type_extractor {
            Some(extract) => self
                .store
                .items()
                .get(backing)
                .map_or(0, |item| extract(item, backing)),
            None => 0,
        }
    }

    /// Creates and binds a view for the given slot.
    ///
    /// `create_view` runs for every kind; `bind_item` only for item slots,
    /// with the translated backing index. Returns `None` for an item slot
    /// that is out of range.
    pub fn realize_slot<F>(&self, slot: usize, factory: &mut F) -> Option<F::Handle>
    where
        F: SlotViewFactory<T>,
    {
        let flags = self.flags();
        let len = self.store.len();
        let kind = flags.classify(slot, len);
        let ctx = SlotContext { slot };
        match kind {
            SlotKind::Item => {
                let backing = flags.backing_index(slot, len).ok()?;
                let items = self.store.items();
                let item = items.get(backing)?;
                let mut handle = factory.create_view(kind, ctx);
                factory.bind_item(&mut handle, item, backing);
                Some(handle)
            }
            SlotKind::Header
            | SlotKind::Footer
            | SlotKind::LoadMoreTrigger
            | SlotKind::Placeholder => Some(factory.create_view(kind, ctx)),
        }
    }

    /// The signals emitted after mutations.
    pub fn signals(&self) -> &AdapterSignals {
        self.store.signals()
    }

    // -------------------------------------------------------------------
    // Backing collection passthrough
    // -------------------------------------------------------------------

    /// Number of backing items (decorations not counted).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the backing collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Read access to the backing items.
    pub fn items(&self) -> impl std::ops::Deref<Target = [T]> + '_ {
        self.store.items()
    }

    /// Installs the post-mutation filter hook (see
    /// [`ItemStore::set_filter_hook`]).
    pub fn set_filter_hook<F>(&self, hook: F)
    where
        F: Fn(&mut Vec<T>) + Send + Sync + 'static,
    {
        self.store.set_filter_hook(hook);
    }

    /// Appends one item to the end of the collection.
    pub fn append_one(&self, item: T) {
        let flags = self.flags();
        self.store.append_one(item, flags);
    }

    /// Appends a batch of items to the end of the collection.
    pub fn append_many(&self, items: Vec<T>) {
        let flags = self.flags();
        self.store.append_many(items, flags);
    }

    /// Prepends one item at the head of the collection.
    pub fn prepend_one(&self, item: T) {
        let flags = self.flags();
        self.store.prepend_one(item, flags);
    }

    /// Prepends a batch of items at the head of the collection.
    pub fn prepend_many(&self, items: Vec<T>) {
        let flags = self.flags();
        self.store.prepend_many(items, flags);
    }

    /// Inserts one item at an arbitrary position.
    pub fn insert_at(&self, index: usize, item: T) {
        let flags = self.flags();
        self.store.insert_at(index, item, flags);
    }

    /// Removes the first item equal to `value`.
    pub fn remove_by_value(&self, value: &T)
    where
        T: PartialEq,
    {
        let flags = self.flags();
        self.store.remove_by_value(value, flags);
    }

    /// Removes the item at `index`.
    pub fn remove_at(&self, index: usize) {
        let flags = self.flags();
        self.store.remove_at(index, flags);
    }

    /// Replaces the item at `index` in place.
    pub fn replace_at(&self, index: usize, item: T) {
        let flags = self.flags();
        self.store.replace_at(index, item, flags);
    }

    /// Replaces the first item equal to the new value.
    pub fn replace_by_value(&self, item: T)
    where
        T: PartialEq,
    {
        let flags = self.flags();
        self.store.replace_by_value(item, flags);
    }

    /// Replaces the whole collection, taking ownership of the items.
    pub fn replace_all(&self, items: Vec<T>) {
        self.store.replace_all(items);
    }

    /// Empties the collection if it is present.
    pub fn clear(&self) {
        self.store.clear();
    }

    // -------------------------------------------------------------------
    // Decoration configuration
    // -------------------------------------------------------------------

    /// Configures the header view. Silent; the surface re-queries on the
    /// next layout pass.
    pub fn set_header(&self, view: V) {
        self.decor.write().set_header(view);
    }

    /// Removes the header and triggers a full re-render.
    pub fn remove_header(&self) {
        self.decor.write().remove_header();
        self.signals().full_reset.emit(());
    }

    /// Configures the footer view. Silent.
    pub fn set_footer(&self, view: V) {
        self.decor.write().set_footer(view);
    }

    /// Removes the footer and triggers a full re-render.
    pub fn remove_footer(&self) {
        self.decor.write().remove_footer();
        self.signals().full_reset.emit(());
    }

    /// A header is currently present.
    pub fn has_header(&self) -> bool {
        self.decor.read().has_header()
    }

    /// A footer is currently present.
    pub fn has_footer(&self) -> bool {
        self.decor.read().has_footer()
    }

    /// Enables or disables the load-more trigger and triggers a full
    /// re-render.
    pub fn set_has_more(&self, has_more: bool) {
        self.decor.write().set_has_more(has_more);
        self.signals().full_reset.emit(());
    }

    /// The load-more trigger is enabled.
    pub fn has_more(&self) -> bool {
        self.decor.read().has_more()
    }

    /// Replaces the trigger content with a caller-supplied view. Silent;
    /// does not touch the enable flag.
    pub fn set_trigger_view(&self, view: V) {
        self.decor.write().set_trigger_view(view);
    }

    /// Replaces the trigger content with a host resource identifier.
    /// Silent; does not touch the enable flag.
    pub fn set_trigger_resource(&self, resource: u32) {
        self.decor.write().set_trigger_resource(resource);
    }

    /// Configures the default placeholder (header and footer suppressed
    /// while it shows). Silent.
    pub fn set_default_view(&self, view: V) {
        self.decor.write().set_default_view(view);
    }

    /// Configures the default placeholder with explicit suppression flags.
    pub fn set_default_view_with(&self, suppress_header: bool, suppress_footer: bool, view: V) {
        self.decor
            .write()
            .set_default_view_with(suppress_header, suppress_footer, view);
    }

    /// Configures the empty placeholder (header and footer suppressed
    /// while it shows). Silent.
    pub fn set_empty_view(&self, view: V) {
        self.decor.write().set_empty_view(view);
    }

    /// Configures the empty placeholder with explicit suppression flags.
    pub fn set_empty_view_with(&self, suppress_header: bool, suppress_footer: bool, view: V) {
        self.decor
            .write()
            .set_empty_view_with(suppress_header, suppress_footer, view);
    }

    /// Configures the bad-state placeholder (header and footer suppressed
    /// while it shows). Silent.
    pub fn set_bad_state_view(&self, view: V) {
        self.decor.write().set_bad_state_view(view);
    }

    /// Configures the bad-state placeholder with explicit suppression
    /// flags.
    pub fn set_bad_state_view_with(&self, suppress_header: bool, suppress_footer: bool, view: V) {
        self.decor
            .write()
            .set_bad_state_view_with(suppress_header, suppress_footer, view);
    }

    /// Selects the default placeholder and triggers a full re-render.
    pub fn show_default_view(&self) {
        self.decor.write().show_default_view();
        self.signals().full_reset.emit(());
    }

    /// Selects the empty placeholder and triggers a full re-render.
    pub fn show_empty_view(&self) {
        self.decor.write().show_empty_view();
        self.signals().full_reset.emit(());
    }

    /// Selects the bad-state placeholder and triggers a full re-render.
    pub fn show_bad_state_view(&self) {
        self.decor.write().show_bad_state_view();
        self.signals().full_reset.emit(());
    }

    /// The currently selected placeholder, if any.
    pub fn active_placeholder(&self) -> Option<PlaceholderKind> {
        self.decor.read().active_placeholder()
    }
}

impl<T, V> RosterAdapter<T, V>
where
    V: Clone,
{
    /// Returns the configured header view, if any.
    pub fn header_view(&self) -> Option<V> {
        self.decor.read().header_view().cloned()
    }

    /// Returns the configured footer view, if any.
    pub fn footer_view(&self) -> Option<V> {
        self.decor.read().footer_view().cloned()
    }

    /// Returns the configured trigger content.
    pub fn trigger(&self) -> TriggerContent<V> {
        self.decor.read().trigger().clone()
    }

    /// Returns the configured default placeholder view, if any.
    pub fn default_view(&self) -> Option<V> {
        self.decor.read().default_view().cloned()
    }

    /// Returns the configured empty placeholder view, if any.
    pub fn empty_view(&self) -> Option<V> {
        self.decor.read().empty_view().cloned()
    }

    /// Returns the configured bad-state placeholder view, if any.
    pub fn bad_state_view(&self) -> Option<V> {
        self.decor.read().bad_state_view().cloned()
    }
}

impl<T, V> SlotModel for RosterAdapter<T, V> {
    type Item = T;
    type View = V;

    fn slot_count(&self) -> usize {
        RosterAdapter::slot_count(self)
    }

    fn classify(&self, slot: usize) -> SlotKind {
        RosterAdapter::classify(self, slot)
    }

    fn content_for(&self, slot: usize) -> Option<SlotContent<T, V>>
    where
        T: Clone,
        V: Clone,
    {
        RosterAdapter::content_for(self, slot)
    }

    fn stable_id(&self, slot: usize) -> i64 {
        RosterAdapter::stable_id(self, slot)
    }

    fn signals(&self) -> &AdapterSignals {
        RosterAdapter::signals(self)
    }
}
