//! Decorated item adapter for virtualized list surfaces.
//!
//! A virtualized list asks one question per visible slot: *what kind of
//! element is this, and which data item (if any) does it represent?*
//! Horizon Roster answers it for lists that carry optional decorations (a
//! header, a footer, a load-more trigger, and empty-state placeholders),
//! every one of which shifts the mapping between rendered slots and the
//! backing collection.
//!
//! # Core Types
//!
//! - [`SlotKind`]: classification of a slot (header, footer, trigger,
//!   placeholder, item)
//! - [`DecorationFlags`]: immutable snapshot the slot arithmetic runs on
//! - [`DecorationState`]: configuration holder for the decoration views
//! - [`ItemStore`]: owner of the backing collection and its mutations
//! - [`RosterAdapter`]: the composition root surfaces talk to
//! - [`AdapterSignals`]: change notifications, always in slot coordinates
//! - [`SlotModel`] / [`SlotViewFactory`]: the query and view-construction
//!   contracts
//!
//! # Example
//!
//! ```
//! use horizon_roster::{RosterAdapter, SlotKind};
//!
//! // Two items plus a header: three slots.
//! let adapter: RosterAdapter<String, &str> =
//!     RosterAdapter::with_items(vec!["alpha".into(), "beta".into()]);
//! adapter.set_header("header-view");
//!
//! assert_eq!(adapter.slot_count(), 3);
//! assert_eq!(adapter.classify(0), SlotKind::Header);
//! assert_eq!(adapter.classify(1), SlotKind::Item);
//!
//! // Mutations notify in slot coordinates, before the call returns.
//! adapter.signals().range_inserted.connect(|(start, count)| {
//!     println!("{count} new slots at {start}");
//! });
//! adapter.append_one("gamma".into()); // prints "1 new slots at 3"
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐      ┌────────────────┐      ┌──────────────┐
//! │  DecorationState │─────>│                │      │              │
//! │  (configuration) │flags │  RosterAdapter │─────>│   Surface    │
//! ├──────────────────┤      │                │ sigs │ (virtualized │
//! │    ItemStore     │─────>│  slot_count    │<─────│    list)     │
//! │  (backing items) │      │  classify      │query │              │
//! └──────────────────┘      │  content_for   │      └──────────────┘
//!                           └────────────────┘
//! ```
//!
//! The adapter owns both halves exclusively. A caller mutates the store
//! through the adapter, the store translates the edit into slot
//! coordinates using the current [`DecorationFlags`] snapshot, and the
//! notification reaches the surface before the mutating call returns. The
//! surface then re-queries `slot_count`/`classify`/`content_for` for the
//! affected slots.
//!
//! # Threading
//!
//! Everything is synchronous and meant for one logical (rendering) thread.
//! Mutations from multiple threads are out of contract; serialize access
//! externally if the adapter ever leaves the rendering loop.

mod adapter;
mod decoration;
mod slots;
mod store;
mod traits;

pub use adapter::{
    IdExtractor, ItemTypeExtractor, RosterAdapter, FOOTER_ID, HEADER_ID, PLACEHOLDER_ID,
    TRIGGER_ID,
};
pub use decoration::{DecorationState, PlaceholderKind, TriggerContent};
pub use slots::{DecorationFlags, SlotError, SlotKind, SlotResult};
pub use store::{FilterHook, ItemStore};
pub use traits::{AdapterSignals, SlotContent, SlotContext, SlotModel, SlotViewFactory};
