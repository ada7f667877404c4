//! Identity and timing primitives shared by every other module.
//!
//! A proclet and every performative it exchanges carry a 128-bit [`Uid`].
//! Ordering between performatives is established by a nanosecond
//! [`Timestamp`] that is forced to strictly increase within the process,
//! even across calls that land on the same wall-clock nanosecond.

use std::cell::Cell;

use time::OffsetDateTime;

/// A globally unique 128-bit identifier for a proclet or a performative.
pub type Uid = uuid::Uuid;

/// Allocates a fresh [`Uid`].
#[must_use]
pub fn new_uid() -> Uid {
    uuid::Uuid::new_v4()
}

/// Nanoseconds since the Unix epoch. Strictly increasing within a process
/// (see [`next_timestamp`]), so it doubles as a message ordering key.
pub type Timestamp = i128;

thread_local! {
    static LAST_TS: Cell<Timestamp> = const { Cell::new(0) };
}

/// Returns a timestamp guaranteed to be strictly greater than any value
/// previously returned by this function in the current thread.
///
/// Execution is single-threaded and cooperative (see `spec.md` §5), so a
/// `thread_local` counter is sufficient here and avoids reaching for
/// atomics the crate otherwise has no use for.
#[must_use]
pub fn next_timestamp() -> Timestamp {
    let now = OffsetDateTime::now_utc().unix_timestamp_nanos();
    LAST_TS.with(|last| {
        let next = now.max(last.get() + 1);
        last.set(next);
        next
    })
}

