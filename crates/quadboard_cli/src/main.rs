//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one add/complete/reorder cycle against an in-memory journal to
//!   verify `quadboard_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use quadboard_core::{
    calendar_url, db::open_db_in_memory, Board, Priority, SqliteTodoGateway, TaskForm, UserId,
};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    println!("quadboard_core version={}", quadboard_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("quadboard: failed to open in-memory journal: {err}");
            return ExitCode::FAILURE;
        }
    };
    let gateway = Arc::new(SqliteTodoGateway::new(conn));
    let mut board = Board::new(UserId::new("smoke"), gateway);

    for (priority, content) in [
        (Priority::UrgentImportant, "file the incident report"),
        (Priority::ImportantNotUrgent, "plan next quarter"),
        (Priority::UrgentNotImportant, "answer the doorbell"),
        (Priority::NeitherUrgentNorImportant, "sort old photos"),
    ] {
        let quadrant = board.quadrant_mut(priority);
        quadrant.open_modal();
        TaskForm {
            content: content.to_string(),
            duration_minutes: 25,
            schedule: String::new(),
            is_schedule: false,
        }
        .submit(quadrant);
    }

    // Second task in the first quadrant so reorder has something to move.
    let urgent = board.quadrant_mut(Priority::UrgentImportant);
    urgent.open_modal();
    TaskForm {
        content: "call the vendor back".to_string(),
        duration_minutes: 10,
        schedule: String::new(),
        is_schedule: false,
    }
    .submit(urgent);
    urgent.reorder(1, 0);

    let done = urgent.tasks()[1].clone();
    urgent.complete(&done);

    for quadrant in board.quadrants() {
        println!("{}:", quadrant.priority().label());
        for task in quadrant.tasks() {
            println!("  [{}] {} ({} min)", task.id, task.content, task.duration_minutes);
            println!("      {}", calendar_url(task));
        }
    }

    ExitCode::SUCCESS
}
