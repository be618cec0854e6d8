//! Core plumbing for Horizon Roster.
//!
//! This crate provides the signal/slot mechanism the adapter layer uses to
//! push change notifications to a rendering surface:
//!
//! - **Signal/Slot System**: Type-safe, synchronous notification delivery
//!
//! Everything here runs on the caller's thread. There is no event loop and
//! no deferred dispatch: emitting a signal invokes every connected slot
//! before `emit` returns, which is exactly the contract a virtualized list
//! surface needs: the incremental change notification must land before the
//! mutating call finishes.
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_roster_core::Signal;
//!
//! // Create a signal that notifies when a slot range is inserted
//! let range_inserted = Signal::<(usize, usize)>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = range_inserted.connect(|(start, count)| {
//!     println!("inserted {count} slots at {start}");
//! });
//!
//! // Emit the signal
//! range_inserted.emit((3, 2));
//!
//! // Disconnect when done
//! range_inserted.disconnect(conn_id);
//! ```

pub mod signal;

pub use signal::{ConnectionId, Signal};
