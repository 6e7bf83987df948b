//! The shared whiteboard: a lazily-created, process-wide append-only log.

use std::sync::{Mutex, OnceLock};

/// The one board every caller shares.
///
/// There is no public constructor: the only way to obtain a `Whiteboard` is
/// [`Whiteboard::instance`], so at most one instance can ever exist and it
/// lives until process exit. Content only ever grows; writes and snapshots
/// are serialized by a single mutex, so no reader can observe a half-written
/// entry.
pub struct Whiteboard {
    content: Mutex<String>,
}

static BOARD: OnceLock<Whiteboard> = OnceLock::new();

impl Whiteboard {
    // Module-private: construction is the accessor's exclusive job.
    fn new() -> Self {
        Self {
            content: Mutex::new(String::new()),
        }
    }

    /// Returns the process-wide board, creating it on first call.
    ///
    /// However many threads race the very first call, exactly one board is
    /// constructed and everyone gets a reference to it. `OnceLock` provides
    /// the happens-before edge: construction completes before any caller can
    /// see the reference. After initialization this is a plain atomic load,
    /// no lock on the common path.
    pub fn instance() -> &'static Whiteboard {
        BOARD.get_or_init(Whiteboard::new)
    }

    /// Appends `text` plus a newline to the board, atomically.
    ///
    /// Concurrent writers are serialized by the content lock; each call is
    /// all-or-nothing. The order of writes from different threads is
    /// whatever order they acquire the lock in.
    pub fn write(&self, text: &str) {
        let mut content = self.content.lock().unwrap();
        content.push_str(text);
        content.push('\n');
    }

    /// Returns a snapshot of everything written so far.
    ///
    /// Taken under the same lock as `write`, so the snapshot can never tear:
    /// it reflects some whole number of completed writes.
    pub fn view(&self) -> String {
        self.content.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    // Content semantics are tested on local boards so the global instance
    // stays out of the picture; only the module's tests can call `new`.

    #[test]
    fn writes_accumulate_in_order() {
        let board = Whiteboard::new();
        board.write("Today's topic: Design Patterns");
        board.write("My notes");
        board.write("Question: What is Singleton?");

        assert_eq!(
            board.view(),
            "Today's topic: Design Patterns\nMy notes\nQuestion: What is Singleton?\n"
        );
    }

    #[test]
    fn view_of_untouched_board_is_empty() {
        let board = Whiteboard::new();
        assert_eq!(board.view(), "");
    }

    #[test]
    fn view_is_a_snapshot_not_a_handle() {
        let board = Whiteboard::new();
        board.write("first");
        let snapshot = board.view();
        board.write("second");

        assert_eq!(snapshot, "first\n");
        assert_eq!(board.view(), "first\nsecond\n");
    }

    #[test]
    fn repeated_instance_calls_are_identical() {
        let first = Whiteboard::instance();
        for _ in 0..10 {
            assert!(std::ptr::eq(first, Whiteboard::instance()));
        }
    }

    #[test]
    fn concurrent_writers_never_interleave() {
        let board = Whiteboard::new();
        let threads = 8;
        let per_thread = 50;

        thread::scope(|s| {
            let board = &board;
            for id in 0..threads {
                s.spawn(move || {
                    let marker = format!("writer-{id:02}");
                    for _ in 0..per_thread {
                        board.write(&marker);
                    }
                });
            }
        });

        let content = board.view();
        for id in 0..threads {
            let marker = format!("writer-{id:02}");
            let count = content.lines().filter(|line| *line == marker).count();
            assert_eq!(count, per_thread, "lost or torn writes for {marker}");
        }
        // Every line is some writer's intact marker; a torn write would
        // produce a line matching nobody.
        assert_eq!(content.lines().count(), threads * per_thread);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // P2: whatever the thread count, write count, and payload, the
            // final content holds exactly writers x repeats intact entries.
            #[test]
            fn appends_are_all_or_nothing(
                writers in 2usize..6,
                repeats in 1usize..20,
                payload in "[a-z]{1,8}",
            ) {
                let board = Whiteboard::new();
                thread::scope(|s| {
                    let board = &board;
                    let payload = &payload;
                    for id in 0..writers {
                        s.spawn(move || {
                            let marker = format!("{id:02}-{payload}");
                            for _ in 0..repeats {
                                board.write(&marker);
                            }
                        });
                    }
                });

                let content = board.view();
                prop_assert_eq!(content.lines().count(), writers * repeats);
                for id in 0..writers {
                    let marker = format!("{id:02}-{payload}");
                    let count = content.lines().filter(|l| *l == marker).count();
                    prop_assert_eq!(count, repeats);
                }
            }
        }
    }
}
