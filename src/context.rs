//! Service context bundling the port trait objects.

use chrono::{DateTime, Utc};

use crate::adapters::memory::{FixedClock, MemoryFileSystem};
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, in-memory).
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock and the real
    /// filesystem.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::filesystem::LiveFileSystem;

        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
        }
    }

    /// Creates an in-memory context over `fs` with the clock pinned to `now`.
    ///
    /// Callers keep a clone of `fs` to seed files beforehand and inspect
    /// the tree afterwards.
    #[must_use]
    pub fn in_memory(fs: MemoryFileSystem, now: DateTime<Utc>) -> Self {
        Self {
            clock: Box::new(FixedClock::new(now)),
            fs: Box::new(fs),
        }
    }
}
