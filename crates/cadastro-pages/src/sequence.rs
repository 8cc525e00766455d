//! Monotonic sequencing for overlapping asynchronous effects.
//!
//! Content loads and feedback auto-hide timers are fire-and-forget: nothing
//! cancels an in-flight fetch or a pending timer when a newer one is issued.
//! Instead, each operation takes a [`Ticket`] from an [`OpSequence`] when it
//! starts and re-checks it on completion; a completion holding anything but
//! the newest ticket discards its effect. Each category of operation
//! (navigation load, feedback timer) owns its own sequence.

use std::cell::Cell;
use std::rc::Rc;

/// Proof of when an operation was issued relative to its peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A shared monotonic counter for one category of operation.
///
/// Clones share the counter, so a handler closure and the async task it
/// spawns observe the same notion of "newest".
#[derive(Debug, Clone, Default)]
pub struct OpSequence {
	latest: Rc<Cell<u64>>,
}

impl OpSequence {
	/// Creates a sequence with no issued tickets.
	pub fn new() -> Self {
		Self::default()
	}

	/// Issues the next ticket, making it the current one.
	pub fn issue(&self) -> Ticket {
		let next = self.latest.get() + 1;
		self.latest.set(next);
		Ticket(next)
	}

	/// Returns true if `ticket` is the most recently issued one.
	pub fn is_current(&self, ticket: Ticket) -> bool {
		self.latest.get() == ticket.0
	}
}
