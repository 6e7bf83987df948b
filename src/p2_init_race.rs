// Pattern 2: Racing the First Access
// Several student threads call Whiteboard::instance() at the same moment,
// before anyone else has. Exactly one board must be constructed and every
// thread must end up holding it. A counter-instrumented DoubleChecked cell
// shows the exactly-once guarantee directly.
//
// Run with: cargo run --bin p2_init_race

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;

use whiteboard::{DoubleChecked, Whiteboard};

fn race_the_whiteboard() {
    let students = 8;
    let barrier = Barrier::new(students);

    let addresses: Vec<usize> = thread::scope(|s| {
        let barrier = &barrier;
        let handles: Vec<_> = (0..students)
            .map(|id| {
                s.spawn(move || {
                    // Line everyone up so instance() calls really overlap.
                    barrier.wait();
                    let board = Whiteboard::instance();
                    board.write(&format!("student {id} joined"));
                    board as *const Whiteboard as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let all_same = addresses.windows(2).all(|w| w[0] == w[1]);
    println!("{} threads raced instance()", students);
    println!("All received the same board: {all_same}");
    println!(
        "Board now holds {} entries:\n{}",
        Whiteboard::instance().view().lines().count(),
        Whiteboard::instance().view()
    );
}

fn count_constructions() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    static CELL: DoubleChecked<&str> = DoubleChecked::new(|| {
        CALLS.fetch_add(1, Ordering::SeqCst);
        "constructed"
    });

    let threads = 8;
    let barrier = Barrier::new(threads);
    thread::scope(|s| {
        let barrier = &barrier;
        for _ in 0..threads {
            s.spawn(move || {
                barrier.wait();
                CELL.get();
            });
        }
    });

    println!(
        "{} threads raced get(); constructions: {}",
        threads,
        CALLS.load(Ordering::SeqCst)
    );
}

fn main() {
    println!("=== Racing the First Access ===\n");
    race_the_whiteboard();

    println!("\n=== Counting Constructions with DoubleChecked ===\n");
    count_constructions();

    println!("\n=== Key Points ===");
    println!("1. A Barrier releases all threads into instance() at once");
    println!("2. However many threads race, construction happens exactly once");
    println!("3. The re-check under the lock is what prevents a second construction");
    println!("4. The unlocked first check only spares the lock after initialization");
}
