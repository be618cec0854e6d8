//! Slot classification and index translation.
//!
//! A decorated list renders more slots than it has data items: an optional
//! header before the first item, an optional footer after the last, an
//! optional load-more trigger, and a placeholder that substitutes for the
//! items while the backing collection is empty. Every one of those
//! decorations shifts the mapping between a rendered *slot* and the index
//! into the backing collection.
//!
//! This module holds that arithmetic as pure functions of an immutable
//! [`DecorationFlags`] snapshot plus the backing collection length. Nothing
//! here has state of its own: a snapshot taken before a mutation stays
//! valid for computing that mutation's change notification, no matter what
//! the live configuration does afterwards.
//!
//! # Classification order
//!
//! [`DecorationFlags::classify`] is an ordered rule table. The checks run
//! header, then footer, then load-more trigger, then item; the placeholder
//! branch (empty collection with a placeholder configured) runs its own
//! header/footer checks first and assigns every remaining slot to the
//! placeholder. The order is load-bearing at minimal slot counts (a
//! header-and-footer list with no items still gives slot 0 to the header),
//! so do not reorder the checks.

/// Classification of a single renderable slot.
///
/// Exactly one kind applies to any slot. Kinds are computed on demand from
/// the decoration snapshot and the backing length; they are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// The slot pinned before the first item.
    Header,
    /// The slot pinned after the last item.
    Footer,
    /// The sentinel slot that asks the surface to request more data when it
    /// scrolls into view.
    LoadMoreTrigger,
    /// The view substituting for items while the backing collection is
    /// empty.
    Placeholder,
    /// A slot backed by a data item.
    Item,
}

/// A specialized Result type for slot translation.
pub type SlotResult<T> = std::result::Result<T, SlotError>;

/// Errors raised by slot-to-backing translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// The slot classifies as a decoration, so it has no backing index.
    ///
    /// This is a contract violation on the caller's side: classify the slot
    /// first and translate only `Item` slots.
    #[error("slot {slot} is classified as {kind:?}, not an item slot")]
    NotAnItem {
        /// The slot that was passed in.
        slot: usize,
        /// What the slot actually classifies as.
        kind: SlotKind,
    },
}

/// Immutable snapshot of the decoration configuration.
///
/// All slot arithmetic is a pure function of this snapshot and the backing
/// collection length. [`DecorationState`](crate::DecorationState) produces
/// the live snapshot; mutation code captures one before editing the
/// collection and uses it for the whole edit-then-notify sequence.
///
/// Placeholder activation is deliberately *not* a field: it is derived from
/// `placeholder_configured` and the backing length via
/// [`placeholder_active`](Self::placeholder_active), so it can never be set
/// out of sync with the collection size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecorationFlags {
    /// A header view is configured.
    pub has_header: bool,
    /// A footer view is configured.
    pub has_footer: bool,
    /// The load-more trigger is enabled. The trigger only occupies a slot
    /// while the backing collection is non-empty.
    pub has_more: bool,
    /// Some placeholder view has been configured.
    pub placeholder_configured: bool,
    /// Hide the header while the placeholder is active.
    pub suppress_header_in_placeholder: bool,
    /// Hide the footer while the placeholder is active.
    pub suppress_footer_in_placeholder: bool,
}

impl DecorationFlags {
    /// Returns `true` when the placeholder substitutes for item slots:
    /// the backing collection is empty and a placeholder is configured.
    #[inline]
    pub fn placeholder_active(&self, backing_len: usize) -> bool {
        self.placeholder_configured && backing_len == 0
    }

    /// The header survives into the placeholder layout.
    #[inline]
    pub fn shows_header_in_placeholder(&self) -> bool {
        self.has_header && !self.suppress_header_in_placeholder
    }

    /// The footer survives into the placeholder layout.
    #[inline]
    pub fn shows_footer_in_placeholder(&self) -> bool {
        self.has_footer && !self.suppress_footer_in_placeholder
    }

    /// Number of decoration slots before the first item slot.
    #[inline]
    pub fn header_offset(&self) -> usize {
        usize::from(self.has_header)
    }

    /// Total number of slots the surface should render.
    ///
    /// While the placeholder is active the count is the placeholder itself
    /// plus whichever of header/footer survive suppression. Otherwise it is
    /// the backing length plus one slot per enabled decoration, with the
    /// load-more trigger counted only for non-empty collections.
    pub fn slot_count(&self, backing_len: usize) -> usize {
        if self.placeholder_active(backing_len) {
            1 + usize::from(self.shows_header_in_placeholder())
                + usize::from(self.shows_footer_in_placeholder())
        } else {
            backing_len
                + usize::from(self.has_header)
                + usize::from(self.has_footer)
                + usize::from(self.has_more && backing_len > 0)
        }
    }

    /// Classifies a slot in `[0, slot_count(backing_len))`.
    ///
    /// The checks form an ordered rule table: header, footer, trigger,
    /// item. The trigger sits in the last slot, or the second-to-last when
    /// a footer is present, and never appears for an empty collection.
    pub fn classify(&self, slot: usize, backing_len: usize) -> SlotKind {
        let last = self.slot_count(backing_len).saturating_sub(1);

        if self.placeholder_active(backing_len) {
            if self.shows_header_in_placeholder() && slot == 0 {
                return SlotKind::Header;
            }
            if self.shows_footer_in_placeholder() && slot == last {
                return SlotKind::Footer;
            }
            return SlotKind::Placeholder;
        }

        if self.has_header && slot == 0 {
            return SlotKind::Header;
        }
        if self.has_footer && slot == last {
            return SlotKind::Footer;
        }
        if self.has_more && backing_len > 0 {
            let trigger = if self.has_footer { last - 1 } else { last };
            if slot == trigger {
                return SlotKind::LoadMoreTrigger;
            }
        }
        SlotKind::Item
    }

    /// Translates an `Item` slot into its backing collection index.
    ///
    /// Fails with [`SlotError::NotAnItem`] for any slot that classifies as
    /// a decoration. Callers should classify first; translating blindly is
    /// a programming error, not a runtime condition to retry.
    pub fn backing_index(&self, slot: usize, backing_len: usize) -> SlotResult<usize> {
        match self.classify(slot, backing_len) {
            SlotKind::Item => Ok(slot - self.header_offset()),
            kind => Err(SlotError::NotAnItem { slot, kind }),
        }
    }

    /// Translates a backing collection index into its slot.
    ///
    /// Inverse of [`backing_index`](Self::backing_index) for valid item
    /// positions; also used to place change notifications for positions a
    /// mutation is about to create.
    #[inline]
    pub fn slot_of(&self, backing_index: usize) -> usize {
        backing_index + self.header_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(header: bool, footer: bool, more: bool) -> DecorationFlags {
        DecorationFlags {
            has_header: header,
            has_footer: footer,
            has_more: more,
            ..Default::default()
        }
    }

    /// Every combination of the six flags.
    fn all_flag_combos() -> Vec<DecorationFlags> {
        let mut combos = Vec::new();
        for bits in 0u8..64 {
            combos.push(DecorationFlags {
                has_header: bits & 1 != 0,
                has_footer: bits & 2 != 0,
                has_more: bits & 4 != 0,
                placeholder_configured: bits & 8 != 0,
                suppress_header_in_placeholder: bits & 16 != 0,
                suppress_footer_in_placeholder: bits & 32 != 0,
            });
        }
        combos
    }

    #[test]
    fn test_plain_list_maps_one_to_one() {
        // Three items, no decorations.
        let f = flags(false, false, false);
        assert_eq!(f.slot_count(3), 3);
        for slot in 0..3 {
            assert_eq!(f.classify(slot, 3), SlotKind::Item);
        }
        assert_eq!(f.backing_index(1, 3), Ok(1));
    }

    #[test]
    fn test_header_and_footer_bracket_items() {
        let f = flags(true, true, false);
        assert_eq!(f.slot_count(2), 4);
        assert_eq!(f.classify(0, 2), SlotKind::Header);
        assert_eq!(f.classify(1, 2), SlotKind::Item);
        assert_eq!(f.classify(2, 2), SlotKind::Item);
        assert_eq!(f.classify(3, 2), SlotKind::Footer);
        assert_eq!(f.backing_index(1, 2), Ok(0));
        assert_eq!(f.backing_index(2, 2), Ok(1));
    }

    #[test]
    fn test_trigger_suppressed_for_empty_collection() {
        // Header plus an enabled trigger, but no items and no placeholder:
        // only the header renders.
        let f = flags(true, false, true);
        assert_eq!(f.slot_count(0), 1);
        assert_eq!(f.classify(0, 0), SlotKind::Header);
    }

    #[test]
    fn test_trigger_position_with_and_without_footer() {
        let without_footer = flags(false, false, true);
        assert_eq!(without_footer.slot_count(2), 3);
        assert_eq!(without_footer.classify(2, 2), SlotKind::LoadMoreTrigger);

        let with_footer = flags(false, true, true);
        assert_eq!(with_footer.slot_count(2), 4);
        assert_eq!(with_footer.classify(2, 2), SlotKind::LoadMoreTrigger);
        assert_eq!(with_footer.classify(3, 2), SlotKind::Footer);
    }

    #[test]
    fn test_placeholder_with_suppressed_footer() {
        // Header kept, footer suppressed: two slots.
        let f = DecorationFlags {
            has_header: true,
            has_footer: true,
            placeholder_configured: true,
            suppress_header_in_placeholder: false,
            suppress_footer_in_placeholder: true,
            ..Default::default()
        };
        assert_eq!(f.slot_count(0), 2);
        assert_eq!(f.classify(0, 0), SlotKind::Header);
        assert_eq!(f.classify(1, 0), SlotKind::Placeholder);
    }

    #[test]
    fn test_placeholder_alone() {
        let f = DecorationFlags {
            placeholder_configured: true,
            ..Default::default()
        };
        assert_eq!(f.slot_count(0), 1);
        assert_eq!(f.classify(0, 0), SlotKind::Placeholder);
        // One item deactivates the placeholder entirely.
        assert_eq!(f.slot_count(1), 1);
        assert_eq!(f.classify(0, 1), SlotKind::Item);
    }

    #[test]
    fn test_placeholder_footer_only_shown() {
        let f = DecorationFlags {
            has_footer: true,
            placeholder_configured: true,
            suppress_footer_in_placeholder: false,
            ..Default::default()
        };
        assert_eq!(f.slot_count(0), 2);
        assert_eq!(f.classify(0, 0), SlotKind::Placeholder);
        assert_eq!(f.classify(1, 0), SlotKind::Footer);
    }

    #[test]
    fn test_header_wins_slot_zero_in_minimal_lists() {
        // A single-item list with both decorations: slot 0 is the header
        // even though the list is at its minimum size.
        let f = flags(true, true, false);
        assert_eq!(f.slot_count(1), 3);
        assert_eq!(f.classify(0, 1), SlotKind::Header);
        assert_eq!(f.classify(1, 1), SlotKind::Item);
        assert_eq!(f.classify(2, 1), SlotKind::Footer);

        // Empty list, header only: the lone slot is the header.
        let header_only = flags(true, false, false);
        assert_eq!(header_only.slot_count(0), 1);
        assert_eq!(header_only.classify(0, 0), SlotKind::Header);

        // Empty list, footer only: the lone slot is the footer.
        let footer_only = flags(false, true, false);
        assert_eq!(footer_only.slot_count(0), 1);
        assert_eq!(footer_only.classify(0, 0), SlotKind::Footer);
    }

    #[test]
    fn test_classification_partitions_every_slot() {
        // For every flag combination and backing size, each slot gets
        // exactly one kind, the per-kind counts sum to the slot count, and
        // header/footer/trigger/placeholder appear at most once.
        for f in all_flag_combos() {
            for backing_len in 0..6 {
                let total = f.slot_count(backing_len);
                let mut headers = 0;
                let mut footers = 0;
                let mut triggers = 0;
                let mut placeholders = 0;
                let mut items = 0;
                for slot in 0..total {
                    match f.classify(slot, backing_len) {
                        SlotKind::Header => headers += 1,
                        SlotKind::Footer => footers += 1,
                        SlotKind::LoadMoreTrigger => triggers += 1,
                        SlotKind::Placeholder => placeholders += 1,
                        SlotKind::Item => items += 1,
                    }
                }
                assert_eq!(
                    headers + footers + triggers + placeholders + items,
                    total,
                    "partition failed for {f:?} len={backing_len}"
                );
                assert!(headers <= 1, "{f:?}");
                assert!(footers <= 1, "{f:?}");
                assert!(triggers <= 1, "{f:?}");
                assert!(placeholders <= 1, "{f:?}");
                if f.placeholder_active(backing_len) {
                    assert_eq!(placeholders, 1, "{f:?}");
                    assert_eq!(items, 0, "{f:?}");
                    assert_eq!(triggers, 0, "{f:?}");
                } else {
                    assert_eq!(items, backing_len, "{f:?} len={backing_len}");
                    assert_eq!(placeholders, 0, "{f:?}");
                }
            }
        }
    }

    #[test]
    fn test_translation_round_trips() {
        for f in all_flag_combos() {
            for backing_len in 1..6 {
                if f.placeholder_active(backing_len) {
                    continue;
                }
                for backing in 0..backing_len {
                    let slot = f.slot_of(backing);
                    assert_eq!(f.classify(slot, backing_len), SlotKind::Item, "{f:?}");
                    assert_eq!(f.backing_index(slot, backing_len), Ok(backing), "{f:?}");
                }
            }
        }
    }

    #[test]
    fn test_translation_rejects_decoration_slots() {
        let f = flags(true, true, true);
        assert_eq!(
            f.backing_index(0, 3),
            Err(SlotError::NotAnItem {
                slot: 0,
                kind: SlotKind::Header
            })
        );
        // Footer sits at the last slot, trigger just before it.
        let total = f.slot_count(3);
        assert_eq!(
            f.backing_index(total - 1, 3),
            Err(SlotError::NotAnItem {
                slot: total - 1,
                kind: SlotKind::Footer
            })
        );
        assert_eq!(
            f.backing_index(total - 2, 3),
            Err(SlotError::NotAnItem {
                slot: total - 2,
                kind: SlotKind::LoadMoreTrigger
            })
        );
    }

    #[test]
    fn test_placeholder_activation_tracks_backing_len() {
        let f = DecorationFlags {
            placeholder_configured: true,
            ..Default::default()
        };
        assert!(f.placeholder_active(0));
        assert!(!f.placeholder_active(1));

        let unconfigured = DecorationFlags::default();
        assert!(!unconfigured.placeholder_active(0));
    }
}
