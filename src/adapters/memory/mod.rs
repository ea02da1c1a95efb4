//! Deterministic in-memory adapters.
//!
//! Back the ports with plain maps and a pinned instant so ranking runs
//! can be exercised and inspected without touching the real disk.

pub mod clock;
pub mod filesystem;

pub use clock::FixedClock;
pub use filesystem::MemoryFileSystem;
