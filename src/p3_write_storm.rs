// Pattern 3: A Hundred Writers, Zero Torn Notes
// Rayon hammers the already-initialized board from a pool of parallel
// writers; the content lock serializes every append, so the final snapshot
// holds exactly one intact line per write.
//
// Run with: cargo run --bin p3_write_storm

use rayon::prelude::*;
use whiteboard::Whiteboard;

fn main() {
    println!("=== A Hundred Writers, Zero Torn Notes ===\n");

    let board = Whiteboard::instance();
    let writes = 100usize;

    (0..writes).into_par_iter().for_each(|_| {
        board.write("x");
    });

    let snapshot = board.view();
    let intact = snapshot.lines().filter(|line| *line == "x").count();
    println!("Writes issued:   {writes}");
    println!("Intact entries:  {intact}");
    println!("Torn entries:    {}", snapshot.lines().count() - intact);
    assert_eq!(intact, writes);

    println!("\n=== Key Points ===");
    println!("1. Appends from different threads never interleave mid-entry");
    println!("2. The order across writers is whatever order the lock grants");
    println!("3. view() snapshots under the same lock, so it cannot tear either");
    println!("4. No writes are merged or dropped: {writes} issued, {intact} on the board");
}
