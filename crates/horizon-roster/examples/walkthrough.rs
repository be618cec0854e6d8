//! Horizon Roster Walkthrough Example
//!
//! Drives the adapter the way a virtualized surface would, printing the
//! slot table after each step:
//! - Decoration configuration (header, footer, load-more trigger)
//! - Data mutations and the notifications they emit
//! - Placeholder activation for the empty collection
//!
//! Run with: cargo run -p horizon-roster --example walkthrough

use horizon_roster::{RosterAdapter, SlotContent};

/// Prints one line per slot: kind, stable id, and resolved content.
fn dump(label: &str, adapter: &RosterAdapter<String, &'static str>) {
    println!("--- {label} ({} slots)", adapter.slot_count());
    for slot in 0..adapter.slot_count() {
        let kind = adapter.classify(slot);
        let id = adapter.stable_id(slot);
        let content = match adapter.content_for(slot) {
            Some(SlotContent::Item(item)) => item,
            Some(SlotContent::Header(view)) => format!("<{view}>"),
            Some(SlotContent::Footer(view)) => format!("<{view}>"),
            Some(SlotContent::LoadMoreTrigger(content)) => format!("<{content:?}>"),
            Some(SlotContent::Placeholder(view)) => format!("<{view}>"),
            None => "<none>".to_string(),
        };
        println!("  slot {slot}: {kind:?} (id {id}) {content}");
    }
}

fn main() {
    // Initialize tracing so the adapter's debug output is visible; filter
    // with RUST_LOG, e.g. RUST_LOG=horizon_roster=debug.
    tracing_subscriber::fmt::init();

    let adapter: RosterAdapter<String, &'static str> = RosterAdapter::new().with_stable_ids(
        // Identity derived from the item itself so views survive moves.
        |item: &String, _backing| item.len() as i64,
    );

    // A surface would route these into its animation system; here we print.
    adapter.signals().full_reset.connect(|_| {
        println!("  => full reset");
    });
    adapter.signals().range_inserted.connect(|(start, count)| {
        println!("  => {count} slot(s) inserted at {start}");
    });
    adapter.signals().item_removed.connect(|slot| {
        println!("  => slot {slot} removed");
    });
    adapter.signals().item_changed.connect(|slot| {
        println!("  => slot {slot} changed");
    });

    adapter.set_header("header");
    adapter.set_footer("footer");
    adapter.set_empty_view_with(false, true, "nothing here yet");

    adapter.replace_all(Vec::new());
    dump("empty collection: placeholder active", &adapter);

    adapter.append_many(vec!["alpha".into(), "beta".into(), "gamma".into()]);
    dump("first batch", &adapter);

    adapter.set_has_more(true);
    dump("load-more trigger enabled", &adapter);

    adapter.prepend_one("omega".into());
    adapter.remove_by_value(&"beta".to_string());
    adapter.replace_at(1, "ALPHA".into());
    dump("after mutations", &adapter);

    adapter.clear();
    dump("cleared: placeholder again", &adapter);
}
