// Pattern 1: Singleton - One Whiteboard for the Whole Classroom
// A teacher and two students each "get" a board, but there is only one:
// every call to Whiteboard::instance() returns the same shared object.
//
// Run with: cargo run --bin p1_classroom

use whiteboard::Whiteboard;

fn main() {
    println!("=== One Whiteboard for the Whole Classroom ===\n");

    let teacher_board = Whiteboard::instance();
    teacher_board.write("Today's topic: Design Patterns");
    println!("Teacher's view:\n{}", teacher_board.view());

    let student1_board = Whiteboard::instance();
    student1_board.write("My notes");
    println!("Student 1's view:\n{}", student1_board.view());

    let student2_board = Whiteboard::instance();
    student2_board.write("Question: What is Singleton?");
    println!("Student 2's view:\n{}", student2_board.view());

    println!(
        "All three references are the same board: {}",
        std::ptr::eq(teacher_board, student1_board) && std::ptr::eq(student1_board, student2_board)
    );

    println!("\n=== Key Points ===");
    println!("1. Whiteboard has no public constructor; instance() is the only way in");
    println!("2. Every instance() call returns a reference to the same object");
    println!("3. Each write() appends; nobody's notes overwrite anybody else's");
    println!("4. view() returns a snapshot of everything written so far");
}
