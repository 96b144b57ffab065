//! Monotonic request sequencing.
//!
//! Quote refreshes are fire-and-forget, so a slow response can arrive after a
//! newer request was dispatched. Each dispatch takes a [`Ticket`] from a
//! [`RequestSequence`]; when the response comes back it is applied only if its
//! ticket is still the latest one issued. Everything older is stale.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number handed out at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Issues strictly increasing tickets and remembers the newest one.
///
/// # Thread safety
///
/// Lock-free; share it behind an `Arc` or embed it in a shared struct.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last_issued: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self { last_issued: AtomicU64::new(0) }
    }

    /// Take the next ticket. The first ticket is `1`.
    #[inline]
    pub fn issue(&self) -> Ticket {
        Ticket(self.last_issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is the newest ticket issued so far.
    ///
    /// Returns `false` once any later ticket has been issued, regardless of
    /// whether that later request has completed.
    #[inline]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.last_issued.load(Ordering::Acquire) == ticket.0
    }

    /// The newest ticket number, or `0` if none was issued.
    pub fn last_issued(&self) -> u64 {
        self.last_issued.load(Ordering::Acquire)
    }
}
