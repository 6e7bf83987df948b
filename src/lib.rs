//! The classic thread-safe singleton: one process-wide whiteboard that any
//! number of threads may obtain lazily and write notes on concurrently.
//!
//! Two pieces:
//! - [`board::Whiteboard`] — the shared append-only log, handed out as a
//!   `&'static` reference by `Whiteboard::instance()`, built on
//!   `std::sync::OnceLock`.
//! - [`lazy::DoubleChecked`] — a generic initialize-once cell that spells out
//!   the double-checked locking algorithm `OnceLock` gives you for free:
//!   unlocked fast path, lock, re-check, construct, publish.
//!
//! Demo programs: `p1_classroom`, `p2_init_race`, `p3_write_storm`.

pub mod board;
pub mod lazy;

pub use board::Whiteboard;
pub use lazy::DoubleChecked;
